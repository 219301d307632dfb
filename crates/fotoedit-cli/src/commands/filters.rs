use anyhow::Result;
use clap::Args;
use console::style;
use fotoedit_core::catalog::FilterCatalog;
use fotoedit_core::compose::{chain_to_string, resolve_chain, Adjustments};

#[derive(Args)]
pub struct FiltersArgs {
    /// Show the chain each preset resolves to at this intensity
    #[arg(long)]
    pub intensity: Option<f32>,
}

pub fn run(args: &FiltersArgs) -> Result<()> {
    let catalog = FilterCatalog::builtin();

    for preset in catalog.presets() {
        let baseline = chain_to_string(&preset.chain);
        println!(
            "{:<12} {:<8} {}",
            style(&preset.id).cyan(),
            preset.name,
            if baseline.is_empty() { "(no operators)" } else { baseline.as_str() }
        );

        if let Some(intensity) = args.intensity {
            let resolved = resolve_chain(preset, intensity, &Adjustments::default());
            println!("             {}", style(chain_to_string(&resolved)).dim());
        }
    }

    Ok(())
}
