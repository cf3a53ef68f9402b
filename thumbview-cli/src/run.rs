use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use thumbview_core_lib::image::Image;
use thumbview_core_lib::printer::render_listing;
use thumbview_core_lib::walker::walk;

use crate::config;

pub fn run() -> Result<()> {
    let config = config::RawConfig::parse().clean()?;

    let log_level = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let image = Image::load_from_path(&config.filename, config.base)
        .with_context(|| format!("failed to load {}", config.filename))?;
    debug!(
        "loaded {} bytes at base {:08X}, entry {:08X}",
        image.len(),
        config.base,
        config.address
    );

    let mut graph = walk(&image, config.address);
    print!("{}", render_listing(&mut graph, &image));
    Ok(())
}
