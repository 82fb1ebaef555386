//! Command-line driver: decode one image, render analysis views, write them
//! next to each other as `<stem>.<view>.<ext>`.

use anyhow::{Context, Result, bail};
use clap::Parser;
use leafscope::io::{self as lio, ImageFormat};
use leafscope::transform::OddDimensionPolicy;
use leafscope::{AnalysisOptions, LeafIdentification, RasterBuffer, ViewSelector, render_many};
use log::{error, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render analysis views of a leaf image",
    long_about = "Decodes a PNG or JPEG image and renders alternate views of it for \
        visual inspection: grayscale, false color, edge maps, a local texture map \
        and a one-level Haar wavelet decomposition. Views are rendered in parallel \
        and written as <stem>.<view>.<ext> in the output directory."
)]
struct Args {
    #[arg(help = "Input image (PNG or JPEG)")]
    input: PathBuf,

    #[arg(
        short = 'v',
        long = "view",
        value_name = "VIEW",
        help = "View to render; may be repeated",
        long_help = "Name of a view to render, e.g. grayscale, heatmap, gradient-magnitude, \
            wavelet. May be given several times. Use --list to see all names."
    )]
    views: Vec<ViewSelector>,

    #[arg(short = 'a', long, help = "Render every view in the catalogue")]
    all: bool,

    #[arg(long, help = "List the available views and exit")]
    list: bool,

    #[arg(
        short = 'o',
        long,
        default_value = ".",
        help = "Directory for the rendered views"
    )]
    output_dir: PathBuf,

    #[arg(
        short = 'f',
        long,
        default_value = "png",
        value_parser = parse_format,
        help = "Output format: png or jpeg"
    )]
    format: ImageFormat,

    #[arg(
        short = 'q',
        long,
        default_value = "90",
        value_parser = clap::value_parser!(u8).range(1..=100),
        help = "JPEG quality (1-100)"
    )]
    quality: u8,

    #[arg(
        short = 'c',
        long,
        value_name = "JSON",
        help = "Leaf identification record gating the analysis views",
        long_help = "Path to the JSON reply of the leaf identification service \
            ({\"isLeaf\": ..., \"confidence\": ...}). When the record says the image \
            is not a leaf, no views are rendered unless --force is given."
    )]
    classification: Option<PathBuf>,

    #[arg(long, help = "Render even when the classification says 'not a leaf'")]
    force: bool,

    #[arg(
        long,
        help = "Wavelet: drop the last row/column of odd-sized images instead of failing"
    )]
    truncate_odd: bool,

    #[arg(
        short = 't',
        long,
        default_value = "128",
        help = "Luminance threshold for the binary view"
    )]
    binary_threshold: u8,
}

fn parse_format(s: &str) -> Result<ImageFormat, String> {
    ImageFormat::from_extension(s).ok_or_else(|| format!("unsupported output format: {s}"))
}

fn list_views() {
    for view in ViewSelector::ALL {
        println!("{:<20} {}", view.name(), view.description());
    }
}

fn selected_views(args: &Args) -> Vec<ViewSelector> {
    if args.all || args.views.is_empty() {
        return ViewSelector::ALL.to_vec();
    }
    let mut views = args.views.clone();
    views.sort();
    views.dedup();
    views
}

fn check_gate(path: &Path, force: bool) -> Result<bool> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading classification {}", path.display()))?;
    let record = LeafIdentification::from_json(&json)
        .with_context(|| format!("parsing classification {}", path.display()))?;
    info!("classification: {}", record.summary());
    if record.shows_analysis() {
        return Ok(true);
    }
    if force {
        warn!("image is not classified as a leaf; rendering anyway (--force)");
        return Ok(true);
    }
    Ok(false)
}

fn encode(view: &RasterBuffer, format: ImageFormat, quality: u8) -> Result<Vec<u8>> {
    let bytes = match format {
        ImageFormat::Jpeg => lio::write_jpeg_mem(view, quality)?,
        other => lio::write_image_mem(view, other)?,
    };
    Ok(bytes)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.list {
        list_views();
        return Ok(());
    }

    if let Some(path) = &args.classification {
        if !check_gate(path, args.force)? {
            info!("image is not a leaf; no analysis views rendered");
            return Ok(());
        }
    }

    let source = lio::read_image(&args.input)
        .with_context(|| format!("decoding {}", args.input.display()))?;
    info!(
        "loaded {} ({}x{})",
        args.input.display(),
        source.width(),
        source.height()
    );

    let options = AnalysisOptions {
        binary_threshold: args.binary_threshold,
        wavelet_odd: if args.truncate_odd {
            OddDimensionPolicy::Truncate
        } else {
            OddDimensionPolicy::Reject
        },
        ..AnalysisOptions::default()
    };

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating {}", args.output_dir.display()))?;
    let stem = args
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");

    let views = selected_views(&args);
    let mut failures = 0usize;
    for (view, result) in render_many(&source, &views, &options) {
        let rendered = match result {
            Ok(r) => r,
            Err(e) => {
                error!("{}: {}", view, e);
                failures += 1;
                continue;
            }
        };
        let path = args
            .output_dir
            .join(format!("{}.{}.{}", stem, view.name(), args.format.extension()));
        let written = encode(&rendered, args.format, args.quality)
            .and_then(|bytes| fs::write(&path, bytes).map_err(Into::into));
        match written {
            Ok(()) => info!("{:<20} -> {}", view.label(), path.display()),
            Err(e) => {
                error!("{}: writing {}: {}", view, path.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} views failed", failures, views.len());
    }
    Ok(())
}
