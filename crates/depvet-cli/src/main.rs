use anyhow::Result;
use clap::Parser;

use depvet_core::report::render;
use depvet_core::review::ReviewConfig;

mod args;

fn main() -> Result<()> {
    let args = args::Args::parse();

    let config = ReviewConfig {
        model: args.model,
        base_url: args.base_url,
    };

    let pkg_dir = args.modules_dir.join(&args.package);
    let report = depvet_core::triage(&args.package, &pkg_dir, &config);

    let output = match args.format {
        args::OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        args::OutputFormat::Text => render::render_text(&report),
    };

    match args.out {
        Some(path) => std::fs::write(path, &output)?,
        None => println!("{output}"),
    }

    Ok(())
}
