use image::RgbImage;
use path_overlay::{OverlayParams, PathOverlay};

fn main() {
    // Demo stub: runs the pipeline over a blank frame with default params
    let mut frame = RgbImage::new(1280, 720);
    let overlay = PathOverlay::new(OverlayParams::default());
    let report = overlay.process(&mut frame);
    println!(
        "raw={} paths={} centerlines={} latency_ms={:.3}",
        report.raw_lines.len(),
        report.path_segments.len(),
        report.centerlines.len(),
        report.timing.total_ms
    );
}
