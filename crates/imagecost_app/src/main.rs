mod platform;

use clap::Parser;

use platform::AppConfig;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::parse();
    platform::run_app(config)?;
    Ok(())
}
