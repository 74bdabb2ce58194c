//! optimize-images - lossless PNG recompression for the item artwork
//!
//! Usage: optimize-images [DIR]
//!
//! DIR defaults to the `image_dir` setting (assets/img).

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};

use arc_recycle::assets::optimize_dir;
use arc_recycle::config::load_settings;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Image optimization failed: {:#}", e);
            eprintln!("Image optimization failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let dir = match env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => load_settings().image_dir,
    };

    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create image directory {}", dir.display()))?;

    println!("Optimizing PNG images in {}", dir.display());
    let report = optimize_dir(&dir, |file| println!("{}", file.summary()))?;

    println!();
    println!("{}", report.summary());
    Ok(())
}
