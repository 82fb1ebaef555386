//! View dispatch
//!
//! Every render reads only from the source and returns a freshly allocated
//! buffer, so views can be computed concurrently over a shared source.

use crate::{AnalysisOptions, ViewResult, ViewSelector};
use leafscope_color as point;
use leafscope_core::RasterBuffer;
use leafscope_filter as filter;
use leafscope_transform::haar_decompose;
use rayon::prelude::*;
use std::time::Instant;

/// Render one view of `source` with default options.
///
/// # Errors
///
/// Fails on allocation exhaustion, and for [`ViewSelector::Wavelet`] on a
/// source with an odd dimension.
pub fn render(source: &RasterBuffer, view: ViewSelector) -> ViewResult<RasterBuffer> {
    render_with_options(source, view, &AnalysisOptions::default())
}

/// Render one view of `source` with explicit options.
pub fn render_with_options(
    source: &RasterBuffer,
    view: ViewSelector,
    options: &AnalysisOptions,
) -> ViewResult<RasterBuffer> {
    log::debug!(
        "render {} on {}x{}",
        view,
        source.width(),
        source.height()
    );
    let start = Instant::now();

    let out = match view {
        ViewSelector::Original => source.deep_clone()?,
        ViewSelector::Grayscale => point::convert_to_gray(source)?,
        ViewSelector::Heatmap => point::heatmap(source)?,
        ViewSelector::XRay => point::xray(source)?,
        ViewSelector::Eco => point::eco_tint(source)?,
        ViewSelector::Binary => point::threshold_to_binary(source, options.binary_threshold)?,
        ViewSelector::HsvRecolor => point::hsv_recolor(source)?,
        ViewSelector::Skeleton => filter::skeleton(source, &options.edge_options())?,
        ViewSelector::Blueprint => filter::blueprint(source, &options.edge_options())?,
        ViewSelector::GradientMagnitude => filter::gradient_magnitude(source)?,
        ViewSelector::GradientDirection => {
            filter::gradient_direction(source, &options.edge_options())?
        }
        ViewSelector::ZeroCrossing => filter::zero_crossing(source)?,
        ViewSelector::FeatureMap => filter::feature_map(source)?,
        ViewSelector::Wavelet => haar_decompose(source, &options.wavelet_options())?,
    };

    log::trace!("render {} took {:?}", view, start.elapsed());
    Ok(out)
}

/// Render every view in catalogue order, in parallel, with default options.
///
/// A failing view does not stop the others; each entry carries its own
/// result.
pub fn render_all(source: &RasterBuffer) -> Vec<(ViewSelector, ViewResult<RasterBuffer>)> {
    render_many(source, &ViewSelector::ALL, &AnalysisOptions::default())
}

/// Render the given views in parallel, returning results in input order.
pub fn render_many(
    source: &RasterBuffer,
    views: &[ViewSelector],
    options: &AnalysisOptions,
) -> Vec<(ViewSelector, ViewResult<RasterBuffer>)> {
    views
        .par_iter()
        .map(|&view| (view, render_with_options(source, view, options)))
        .collect()
}
