// ============================================================
// CHART RENDERER
// ============================================================
// Draw bar charts from already-computed aggregates. No business
// logic here: entries arrive counted and sorted.

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::domain::error::{AppError, Result};
use crate::domain::store::AggregateStats;

const CHART_SIZE: (u32, u32) = (1280, 720);

/// Create the charts directory if needed and return its path
pub fn ensure_charts_dir(dir: &str) -> Result<PathBuf> {
    let path = PathBuf::from(dir);
    std::fs::create_dir_all(&path)
        .map_err(|e| AppError::IoError(format!("Failed to create {}: {}", path.display(), e)))?;
    Ok(path)
}

/// Draw a vertical bar chart of the first `top_n` entries
///
/// An empty stats list draws nothing and writes no file.
pub fn draw_bar_chart(
    path: &Path,
    title: &str,
    stats: &[AggregateStats],
    top_n: usize,
) -> Result<()> {
    let entries: Vec<&AggregateStats> = stats.iter().take(top_n).collect();
    if entries.is_empty() {
        return Ok(());
    }

    let y_max = axis_max(&entries);
    let labels: Vec<String> = entries.iter().map(|s| s.key.clone()).collect();

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..entries.len() as i32, 0..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(entries.len())
        .x_label_formatter(&|x| label_at(&labels, *x))
        .y_desc("Stores")
        .draw()
        .map_err(render_err)?;

    for (idx, entry) in entries.iter().enumerate() {
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(idx as i32, 0), (idx as i32 + 1, entry.count as i32)],
                BLUE.filled(),
            )))
            .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;
    tracing::info!("Chart saved to {}", path.display());
    Ok(())
}

/// Draw a horizontal bar chart of the first `top_n` entries
pub fn draw_horizontal_bar_chart(
    path: &Path,
    title: &str,
    stats: &[AggregateStats],
    top_n: usize,
) -> Result<()> {
    let entries: Vec<&AggregateStats> = stats.iter().take(top_n).collect();
    if entries.is_empty() {
        return Ok(());
    }

    let x_max = axis_max(&entries);
    let labels: Vec<String> = entries.iter().map(|s| s.key.clone()).collect();

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(160)
        .build_cartesian_2d(0..x_max, 0..entries.len() as i32)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(entries.len())
        .y_label_formatter(&|y| label_at(&labels, *y))
        .x_desc("Stores")
        .draw()
        .map_err(render_err)?;

    for (idx, entry) in entries.iter().enumerate() {
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(0, idx as i32), (entry.count as i32, idx as i32 + 1)],
                BLUE.filled(),
            )))
            .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;
    tracing::info!("Chart saved to {}", path.display());
    Ok(())
}

/// Axis ceiling with a little headroom above the largest bar
fn axis_max(entries: &[&AggregateStats]) -> i32 {
    let max = entries.iter().map(|s| s.count).max().unwrap_or(0) as i32;
    max + (max / 10).max(1)
}

fn label_at(labels: &[String], index: i32) -> String {
    labels
        .get(index as usize)
        .cloned()
        .unwrap_or_default()
}

fn render_err<E: std::fmt::Display>(err: E) -> AppError {
    AppError::RenderError(err.to_string())
}
