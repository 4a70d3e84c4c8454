use anyhow::Result;
use clap::Parser;

use isometric_follow::cli::Cli;
use isometric_follow::{app, headless, Config};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::load(&cli)?;
    log::info!(
        "Model: {:?}, shading: {:?}",
        config.model.path,
        config.shading.mode
    );

    match cli.headless_frames {
        Some(frames) => {
            let holds = headless::parse_holds(&cli.hold)?;
            headless::run(&config, frames, &holds)?;
        }
        None => app::run(config)?,
    }

    Ok(())
}
