use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use stackignore::{
    Args, Config,
    logging::{LogConfig, init_logging},
};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logging is optional; the guard must live until exit
    let _log_guard = init_logging(LogConfig::from_args(&args));

    // Handle --create-config flag
    if args.create_config {
        let path = Config::create_sample_config()?;
        println!("Sample config written to {}", path.display());
        return Ok(());
    }

    // Resolve configuration from CLI args, environment variables, and config file
    let config = Config::resolve(&args)?;

    let target_dir = args
        .path
        .clone()
        .map_or_else(|| PathBuf::from("."), PathBuf::from);

    let path = stackignore::generate_ignore_file(&target_dir, args.force, &config).await?;
    println!("Wrote {}", path.display());

    Ok(())
}
