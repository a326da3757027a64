mod cli;
mod scene_file;

use anyhow::{Context, Result};
use clap::Parser;
use ember_renderer::{render_with_progress, save_png, save_ppm};
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::{Args, ImageFile};
use crate::scene_file::SceneDescription;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Ember");

    let config = args.render_config();
    let description = match &args.scene {
        Some(path) => SceneDescription::load(path)?,
        None => {
            log::info!("No scene file given, using the demo scene");
            SceneDescription::demo()
        }
    };
    let (camera, scene) = description.build(config.aspect())?;

    let progress = if args.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(config.height as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.cyan/blue} {pos}/{len} rows | {elapsed_precise} | ETA: {eta}")?,
        );
        bar
    };

    let film = render_with_progress(&camera, &scene, &config, |_| progress.inc(1));
    progress.finish_and_clear();

    for file in args.output_files() {
        let (result, path) = match &file {
            ImageFile::Ppm(path) => (save_ppm(&film, path), path),
            ImageFile::Png(path) => (save_png(&film, path), path),
        };
        result.with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(())
}
