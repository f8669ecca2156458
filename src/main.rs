use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use preview_gen::preview::generate_previews;
use preview_gen::styles::CATALOG;

#[derive(Debug, Parser)]
#[clap(
    name = "preview-gen",
    about = "Generate placeholder preview images for the built-in visual styles"
)]
struct Args {
    /// Output directory for the generated PNG files.
    #[clap(short, long, value_name = "DIR", default_value = "public/style-previews")]
    output: PathBuf,

    /// List the known style names and exit.
    #[clap(long)]
    list: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list {
        for name in CATALOG {
            println!("{name}");
        }
        return Ok(());
    }

    generate_previews(&args.output)?;
    Ok(())
}
