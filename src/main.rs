use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rayhit::Camera;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.clone().into());

    let scene = args.scene;
    let settings = args.render_settings();
    info!("scene {:?}, seed {}", scene, settings.seed);

    let (world, setup) = scene.build(settings.seed);
    let camera = Camera::new(&setup, &settings);
    let pixels = camera.render(&world);

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    camera.write_ppm(&pixels, &mut out).context("writing image")?;
    if let Some(path) = &args.output {
        info!("wrote {}", path.display());
    }
    Ok(())
}
