mod cli;

use crate::cli::{init_logger, Args};
use anyhow::Context;
use clap::Parser;
use log::info;
use raybounce::{config::SceneConfig, trace_path, Path};
use rayon::prelude::*;
use serde::Serialize;
use std::{fs, time::Instant};

/// What gets printed for every traced path
#[derive(Serialize)]
struct PathReport {
    color: [u8; 3],
    radiance: [f64; 3],
    bounces: usize,
    length: f64,
    points: Vec<[f64; 2]>,
}

#[derive(Serialize)]
struct Report {
    paths: Vec<PathReport>,
}

impl From<&Path> for PathReport {
    fn from(path: &Path) -> Self {
        let r = path.radiance;

        Self {
            color: path.color,
            radiance: [r.x, r.y, r.z],
            bounces: path.bounces(),
            length: path.length(),
            points: path.points.iter().map(|p| [p.x, p.y]).collect(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.into());

    let source = fs::read_to_string(&args.config)
        .with_context(|| format!("Failed to open scene file: {:?}", args.config))?;
    let loaded = SceneConfig::from_toml(&source)
        .and_then(|config| config.load())
        .with_context(|| format!("Invalid scene file: {:?}", args.config))?;
    let max_bounces = args.max_bounces.unwrap_or(loaded.max_bounces);

    let start = Instant::now();

    // Every trace is sequential, independent rays share the read-only scene
    let paths = loaded
        .rays
        .par_iter()
        .map(|&ray| trace_path(ray, &loaded.scene, max_bounces))
        .collect::<Vec<_>>();

    let bounces: usize = paths.iter().map(Path::bounces).sum();
    info!(
        "Traced {} rays with {} bounces in {:.2?}",
        paths.len(),
        bounces,
        start.elapsed()
    );

    let report = Report {
        paths: paths.iter().map(PathReport::from).collect(),
    };
    print!("{}", toml::to_string(&report)?);

    Ok(())
}
