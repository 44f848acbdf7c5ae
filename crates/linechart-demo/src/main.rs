// File: crates/linechart-demo/src/main.rs
// Summary: Headless demo; renders the mock series (or a timestamp,value CSV) to a PNG.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use linechart_core::types::Sample;
use linechart_core::Chart;
use linechart_render_skia::SkiaSurface;

fn main() -> Result<()> {
    let samples = match std::env::args().nth(1) {
        Some(path) => load_csv(Path::new(&path))?,
        None => mock_samples(),
    };
    if samples.is_empty() {
        eprintln!("no samples loaded");
        return Ok(());
    }

    let surface = SkiaSurface::new(1024, 640).context("create surface")?;
    let mut chart = Chart::new(surface, 512.0, 320.0);
    chart.render(&samples);

    let out = Path::new("target/linechart.png");
    chart.surface_mut().write_png(out).context("write png")?;
    eprintln!("wrote {} ({} samples)", out.display(), samples.len());
    Ok(())
}

/// The six-point series the original host page shipped as mock data,
/// stamped one second apart ending now.
fn mock_samples() -> Vec<Sample> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0);
    [26.0, 30.0, 35.0, 40.0, 50.0, 88.0]
        .iter()
        .enumerate()
        .map(|(i, &value)| Sample::new(now - (5 - i as i64) * 1_000, value))
        .collect()
}

/// Load `timestamp,value` rows, matching headers case-insensitively.
fn load_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let headers: Vec<String> = rdr
        .headers()
        .context("headers")?
        .iter()
        .map(|h| h.to_lowercase())
        .collect();
    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };
    let i_time = idx(&["timestamp", "time", "open_time", "date", "datetime"]);
    let i_value = idx(&["value", "v", "price", "close"]);

    let mut out = Vec::new();
    let mut row_index = 0_i64;
    for rec in rdr.records() {
        let rec = rec.context("record")?;
        let timestamp = i_time
            .and_then(|ix| rec.get(ix))
            .and_then(|s| s.trim().parse::<i64>().ok())
            .unwrap_or_else(|| {
                let v = row_index * 1_000;
                row_index += 1;
                v
            });
        let value = i_value
            .and_then(|ix| rec.get(ix))
            .and_then(|s| s.trim().parse::<f64>().ok());
        if let Some(value) = value {
            out.push(Sample::new(timestamp, value));
        }
    }
    Ok(out)
}
