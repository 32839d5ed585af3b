use chrono::{DateTime, Utc};
use clap::Parser;
use csv::ReaderBuilder;
use plotters::prelude::*;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Plot solar longitude against Earth date from a `mars_clock table` CSV"
)]
struct Cli {
    #[arg(long)]
    input: String,
    #[arg(long, default_value = "artifacts/ls.png")]
    output: PathBuf,
    #[arg(long, default_value_t = 1200)]
    width: u32,
    #[arg(long, default_value_t = 600)]
    height: u32,
}

#[derive(Debug, Clone, Copy)]
struct Point {
    utc: DateTime<Utc>,
    ls_deg: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let points = read_points(&cli.input)?;
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Err(anyhow::anyhow!("No samples in the provided CSV")),
    };

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_str = cli
        .output
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Output path contains invalid UTF-8"))?;
    let root = BitMapBackend::new(output_str, (cli.width, cli.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let days_since_first = |p: &Point| (p.utc - first.utc).num_seconds() as f64 / 86_400.0;
    let span_days = days_since_first(&last).max(1.0);

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Solar longitude (Ls)".to_string(), caption_font)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..span_days, 0.0..360.0)?;

    chart
        .configure_mesh()
        .x_desc(format!("Days since {}", first.utc.format("%Y-%m-%d")))
        .y_desc("Ls (deg)")
        .label_style(label_font.clone())
        .axis_desc_style(label_font)
        .y_labels(9)
        .draw()?;

    // Break the line where Ls wraps from ~360 back to ~0.
    let mut segment: Vec<(f64, f64)> = Vec::new();
    let mut previous: Option<f64> = None;
    for point in &points {
        if previous.is_some_and(|ls| point.ls_deg < ls - 180.0) {
            chart.draw_series(LineSeries::new(segment.drain(..), &RED))?;
        }
        segment.push((days_since_first(point), point.ls_deg));
        previous = Some(point.ls_deg);
    }
    chart.draw_series(LineSeries::new(segment, &RED))?;

    root.present()?;
    println!("Wrote {} samples to {}", points.len(), cli.output.display());
    Ok(())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

fn read_points(path: &str) -> anyhow::Result<Vec<Point>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let headers = reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| anyhow::anyhow!("CSV is missing the `{name}` column"))
    };
    let utc_idx = column("utc")?;
    let ls_idx = column("ls_deg")?;

    let mut points = Vec::new();
    for record in reader.records() {
        let record = record?;
        let utc = DateTime::parse_from_rfc3339(&record[utc_idx])?.with_timezone(&Utc);
        let ls_deg: f64 = record[ls_idx].parse()?;
        points.push(Point { utc, ls_deg });
    }
    points.sort_by_key(|p| p.utc);
    Ok(points)
}
