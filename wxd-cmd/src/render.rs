//! Plain-text rendering of dashboard views for the terminal.

use chrono_tz::Tz;
use std::fmt::Write;
use wxd_core::{
    period::Period,
    station::{StationId, StationRegistry},
    summary::PeriodSummary,
};
use wxd_data::{alignment::AlignedSeriesSet, snapshot::CombinedSnapshot};
use wxd_utils::{dates::format_as_of, numbers::format_fixed};

/// Shown in place of the reading block when nothing is selected.
pub const NO_CURRENT_DATA: &str = "No current data available.";
/// Shown under a reading that includes cached data.
pub const FALLBACK_NOTE: &str = "Data shown from local DB (live unavailable)";

/// The "Right Now" block, with the "as of" time shown in `tz`.
pub fn render_now(now: Option<&CombinedSnapshot>, tz: Tz) -> String {
    let Some(now) = now else {
        return format!("Right Now\n  {}\n", NO_CURRENT_DATA);
    };

    let mut out = String::from("Right Now");
    if let Some(ts) = &now.timestamp {
        let _ = write!(out, " (as of {})", format_as_of(ts, tz));
    }
    out.push('\n');
    let _ = writeln!(out, "  Temperature: {}°F", now.temperature_display());
    let _ = writeln!(out, "  Humidity: {}%", now.humidity_display());
    let _ = writeln!(out, "  Wind Speed: {} mph", now.wind_speed_display());
    let _ = writeln!(out, "  Precipitation: {} in", now.precipitation_display());
    if now.used_fallback {
        let _ = writeln!(out, "  {}", FALLBACK_NOTE);
    }
    out
}

/// Aligned series as a table: one row per label, one column per station.
/// Gaps render as "-".
pub fn render_trend(title: &str, aligned: &AlignedSeriesSet, registry: &StationRegistry) -> String {
    let mut out = format!("{}\n", title);
    if aligned.labels.is_empty() {
        out.push_str("  (no data)\n");
        return out;
    }

    let label_width = aligned
        .labels
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max("label".len());
    let headers: Vec<&str> = aligned
        .station_ids()
        .map(|id| registry.label(id))
        .collect();
    let widths: Vec<usize> = headers.iter().map(|h| h.len().max(8)).collect();

    let _ = write!(out, "{:<label_width$}", "label");
    for (header, &width) in headers.iter().zip(&widths) {
        let _ = write!(out, "  {:>width$}", header);
    }
    out.push('\n');

    for (i, label) in aligned.labels.iter().enumerate() {
        let _ = write!(out, "{:<label_width$}", label);
        for (series, &width) in aligned.series.iter().zip(&widths) {
            let cell = match series.values.get(i).copied().flatten() {
                Some(v) => v.to_string(),
                None => "-".to_string(),
            };
            let _ = write!(out, "  {:>width$}", cell);
        }
        out.push('\n');
    }
    out
}

fn summary_cell(value: Option<f64>, places: u32) -> String {
    value
        .map(|v| format_fixed(v, places))
        .unwrap_or_else(|| "-".to_string())
}

/// Per-station summary table for `period`.
pub fn render_summaries(
    period: Period,
    summaries: &[(StationId, PeriodSummary)],
    registry: &StationRegistry,
) -> String {
    let mut out = format!("Summaries ({})\n", period.label());
    if summaries.is_empty() {
        out.push_str("  (no summaries)\n");
        return out;
    }

    let name_width = summaries
        .iter()
        .map(|(id, _)| registry.label(id).len())
        .max()
        .unwrap_or(0)
        .max("station".len());
    let _ = writeln!(
        out,
        "{:<name_width$}  {:>8}  {:>8}  {:>8}  {:>8}",
        "station", "temp", "humidity", "wind", "precip"
    );
    for (station_id, summary) in summaries {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:>8}  {:>8}  {:>8}  {:>8}",
            registry.label(station_id),
            summary_cell(summary.temp_avg, 1),
            summary_cell(summary.humidity_avg, 1),
            summary_cell(summary.wind_speed_avg, 1),
            summary_cell(summary.precip_total, 2),
        );
    }
    out
}
