use anyhow::Context as _;
use clap::Parser;

/// Write icon-512.png and icon-192.png into the current directory.
#[derive(Parser, Debug)]
#[command(name = "noteicon", version, about)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();

    // stdout is reserved for the progress lines.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let settings = noteicon::GenerateSettings::default();
    noteicon::generate_icons(&settings, |p| println!("{p}"))
        .with_context(|| format!("generate icons in '{}'", settings.out_dir.display()))?;
    Ok(())
}
