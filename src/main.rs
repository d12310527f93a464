use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use vaxclean::pipeline::{run, CleanConfig};

#[derive(Parser)]
#[command(name = "vaxclean")]
#[command(about = "Cleans the semicolon-separated vaccination coverage export")]
struct Args {
    /// Raw input CSV
    #[arg(short, long, default_value = "data/raw/epidemiological/vaxdata.csv")]
    input: PathBuf,

    /// Destination for the cleaned copy
    #[arg(short, long, default_value = "data/processed/epidemiological/vaxdata.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    // ─── init logging ────────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    let args = Args::parse();
    let cfg = CleanConfig::vaxdata(args.input, args.output);
    run(&cfg)?;

    info!("all done");
    Ok(())
}
