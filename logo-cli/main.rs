use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_circle_mut;
use log::{debug, info};
use logo_cli::{AppConfig, CatalogBuilder, FeatureExtractor, Matcher, Recognizer, load_image};
use logo_core::init_thread_pool;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "logo", version, about = "Identify logos against a catalog of reference images")]
struct Cli {
    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (.toml or .json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the catalog and print a per-label summary
    Catalog {
        #[arg(long)]
        catalog_dir: Option<PathBuf>,
        /// Write the full catalog as JSON
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
    /// Identify one or more query images
    Identify {
        #[arg(long)]
        catalog_dir: Option<PathBuf>,
        /// One JSON report per line instead of the plain message
        #[arg(long)]
        json: bool,
        #[arg(long)]
        min_good_matches: Option<usize>,
        #[arg(required = true)]
        images: Vec<PathBuf>,
    },
    /// Detect keypoints in one image, optionally drawing them
    Keypoints {
        image: PathBuf,
        #[arg(long, value_name = "OUT.png")]
        draw: Option<PathBuf>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path).with_context(|| format!("loading {}", path.display())),
        None => Ok(AppConfig::default()),
    }
}

fn build_catalog(cfg: &AppConfig, extractor: FeatureExtractor) -> Result<logo_cli::Catalog> {
    let t0 = Instant::now();
    let catalog = CatalogBuilder::new(extractor)
        .build(&cfg.catalog_dir)
        .with_context(|| format!("building catalog from {}", cfg.catalog_dir.display()))?;
    debug!("catalog ready in {:.2?}", t0.elapsed());
    Ok(catalog)
}

fn run_catalog(cfg: &AppConfig, snapshot: Option<PathBuf>) -> Result<()> {
    let extractor = FeatureExtractor::new(cfg.extractor.clone())?;
    let catalog = build_catalog(cfg, extractor)?;

    for entry in catalog.iter() {
        println!("{}\t{}", entry.label, entry.descriptors.len());
    }

    if let Some(path) = snapshot {
        let json = serde_json::to_string(&catalog)?;
        std::fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
        info!("catalog snapshot written to {}", path.display());
    }
    Ok(())
}

fn run_identify(cfg: &AppConfig, json: bool, images: &[PathBuf]) -> Result<()> {
    let extractor = FeatureExtractor::new(cfg.extractor.clone())?;
    let catalog = build_catalog(cfg, extractor.clone())?;
    if catalog.is_empty() {
        info!("catalog is empty; every query will be rejected");
    }

    let recognizer = Recognizer::new(extractor, catalog, cfg.policy)
        .with_matcher(Matcher::new().with_good_match_distance(cfg.good_match_distance));

    let mut failures = 0usize;
    for (path, result) in images.iter().zip(recognizer.identify_batch(images)) {
        match result {
            Ok(verdict) if json => {
                println!("{}", serde_json::to_string(&verdict.report())?);
            }
            Ok(verdict) => {
                if images.len() > 1 {
                    println!("{}: {}", path.display(), verdict.message());
                } else {
                    println!("{}", verdict.message());
                }
            }
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} images could not be processed", failures, images.len());
    }
    Ok(())
}

fn run_keypoints(cfg: &AppConfig, image: &Path, draw: Option<PathBuf>) -> Result<()> {
    let extractor = FeatureExtractor::new(cfg.extractor.clone())?;
    let img = load_image(image).with_context(|| format!("loading {}", image.display()))?;
    let gray = img.to_luma8();

    let t0 = Instant::now();
    let features = extractor.detect_and_describe(&gray)?;
    println!("Time taken: {:.2?}", t0.elapsed());
    println!("Detected {} keypoints", features.keypoints.len());
    println!("Generated {} descriptors", features.descriptors.len());

    if let Some(out) = draw {
        let mut output: RgbaImage = DynamicImage::ImageLuma8(gray).into_rgba8();
        for kp in &features.keypoints {
            draw_hollow_circle_mut(&mut output, (kp.x as i32, kp.y as i32), 3, Rgba([255, 0, 0, 255]));
        }
        output.save(&out).with_context(|| format!("saving {}", out.display()))?;
        println!("Saved result image as {}", out.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut cfg = load_config(cli.config.as_ref())?;
    init_thread_pool(cfg.extractor.n_threads).context("initializing thread pool")?;

    match cli.command {
        Command::Catalog { catalog_dir, snapshot } => {
            if let Some(dir) = catalog_dir {
                cfg.catalog_dir = dir;
            }
            run_catalog(&cfg, snapshot)
        }
        Command::Identify {
            catalog_dir,
            json,
            min_good_matches,
            images,
        } => {
            if let Some(dir) = catalog_dir {
                cfg.catalog_dir = dir;
            }
            if let Some(n) = min_good_matches {
                cfg.policy.min_good_matches = n;
            }
            run_identify(&cfg, json, &images)
        }
        Command::Keypoints { image, draw } => run_keypoints(&cfg, &image, draw),
    }
}
