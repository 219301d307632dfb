pub mod error;
pub mod consts;
pub mod catalog;
pub mod compose;
pub mod apply;
pub mod session;
pub mod screen;
pub mod overlay;
pub mod caption;
pub mod export;
pub mod suggest;
