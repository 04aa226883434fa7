use path_overlay::config::load_config;
use path_overlay::frame::{load_rgb_image, save_rgb_image, write_json_file};
use path_overlay::PathOverlay;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mut frame = load_rgb_image(&config.input)?;
    let overlay = PathOverlay::new(config.overlay_params());
    let report = overlay.process(&mut frame);

    save_rgb_image(&frame, &config.output.annotated_image)?;
    write_json_file(&config.output.report_json, &report)?;

    println!(
        "raw={} paths={} centerlines={} latency_ms={:.3}",
        report.raw_lines.len(),
        report.path_segments.len(),
        report.centerlines.len(),
        report.timing.total_ms
    );
    println!("annotated -> {}", config.output.annotated_image.display());
    println!("report    -> {}", config.output.report_json.display());
    Ok(())
}

fn usage() -> String {
    "Usage: overlay_demo <config.json>".to_string()
}
