pub mod apply;
pub mod filters;
