// src/main.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{info, warn};
use video_frontend::{Color, FrontendRegistry, InputSession, VideoConfig, VideoManager, VideoSpecs};

// Default logical screen size requested from the frontend.
const DEFAULT_WIDTH: u32 = 320;
const DEFAULT_HEIGHT: u32 = 240;

#[derive(Parser, Debug)]
#[command(name = "video-frontend", version, about = "Drive a video frontend through its lifecycle")]
struct Cli {
    /// Selects video frontend
    #[arg(long = "video")]
    video: Option<String>,

    /// Applies a screen scale ratio
    #[arg(long, allow_negative_numbers = true)]
    scale: Option<i32>,

    /// JSON configuration file; command-line values take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Number of frames to produce before shutting down
    #[arg(long, default_value_t = 3)]
    frames: u32,

    /// Resize to WxH after the first frame
    #[arg(long, value_parser = parse_size)]
    resize: Option<(u32, u32)>,

    /// List registered video frontends and exit
    #[arg(long)]
    list: bool,
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("expected WxH, got '{}'", s))?;
    let w = w.parse().map_err(|e| format!("bad width '{}': {}", w, e))?;
    let h = h.parse().map_err(|e| format!("bad height '{}': {}", h, e))?;
    Ok((w, h))
}

/// Grey level written on `frame`; cycles instead of overflowing.
fn frame_shade(frame: u32) -> u8 {
    frame.wrapping_mul(40) as u8
}

fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let cli = Cli::parse();
    let registry = FrontendRegistry::builtin();

    if cli.list {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    // --- Configuration ---
    let mut config = match &cli.config {
        Some(path) => VideoConfig::load(path)?,
        None => VideoConfig::default(),
    };
    if cli.video.is_some() {
        config.frontend = cli.video.clone();
    }
    if let Some(scale) = cli.scale {
        config.scale = scale;
    }
    info!("Video configuration: {:?}", config);

    let mut video = VideoManager::new(registry, config, InputSession::new());
    let mut specs = VideoSpecs::new(cli.width, cli.height);
    video
        .init(&mut specs)
        .context("Failed to initialize video")?;

    if !video.is_active() {
        warn!("Running without video output");
    }

    // --- Frame loop ---
    for frame in 0..cli.frames {
        let (width, height) = video.size();
        video.lock();
        if width > 0 && height > 0 {
            let shade = frame_shade(frame);
            video.set_pixel(frame % width, frame % height, Color::new(shade, shade, shade));
        }
        video.unlock();
        video.update();

        if video.take_updated() {
            info!(
                "Frame {} presented ({}x{}), pixel(0,0) = {:?}",
                frame,
                width,
                height,
                video.get_pixel(0, 0)
            );
        }

        if frame == 0 {
            if let Some((w, h)) = cli.resize {
                video.set_size(w, h);
                info!("Resized to {}x{}", w, h);
            }
        }
    }

    video.deinit();
    info!("Video shut down cleanly.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_cycle_the_shade_for_any_frame_number() {
        assert_eq!(frame_shade(0), 0);
        assert_eq!(frame_shade(1), 40);
        assert_eq!(frame_shade(7), (280 % 256) as u8);
        let _ = frame_shade(u32::MAX);
        let _ = frame_shade(200_000_000);
    }

    #[test]
    fn it_should_parse_resize_arguments() {
        assert_eq!(parse_size("640x480"), Ok((640, 480)));
        assert!(parse_size("640").is_err());
        assert!(parse_size("ax1").is_err());
    }
}
