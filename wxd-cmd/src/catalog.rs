//! `metrics`, `stations` and `summaries`: what can be selected, and the
//! backend's stored summaries.

use crate::render::render_summaries;
use crate::ApiConfig;
use wxd_core::{
    api::HttpFetcher,
    fetch::StationFetcher,
    metric::label_for,
    station::StationRegistry,
};
use wxd_dashboard::{
    summaries::{collect_summaries, refresh_summaries},
    SelectionState, SummaryRefresh,
};

/// List chartable metric columns reported by the API, with their labels.
pub async fn run_metrics(config: &ApiConfig) -> anyhow::Result<()> {
    let fetcher = HttpFetcher::new(config.api_base.as_str());
    let columns = fetcher.fetch_metric_columns().await?;
    if columns.is_empty() {
        println!("No metrics reported by {}", fetcher.base_url());
        return Ok(());
    }
    for column in &columns {
        println!("{:<20} {}", column, label_for(column));
    }
    Ok(())
}

/// List stations from the embedded station table.
pub fn run_stations() -> anyhow::Result<()> {
    let registry = StationRegistry::builtin();
    for station in registry.stations() {
        println!(
            "{:<14} {:<20} {}",
            station.station_id, station.name, station.color
        );
    }
    Ok(())
}

/// Regenerate summaries for the selected period, then print each selected
/// station's summary.
pub async fn run_summaries(config: &ApiConfig, selection: &SelectionState) -> anyhow::Result<()> {
    let fetcher = HttpFetcher::new(config.api_base.as_str());
    let outcome = refresh_summaries(&fetcher, selection.period()).await;
    println!("{}", outcome.message());
    if let SummaryRefresh::Failed { error, .. } = outcome {
        return Err(anyhow::Error::new(error)
            .context(format!("summary refresh for {} failed", selection.period())));
    }

    let summaries =
        collect_summaries(&fetcher, selection.selected_stations(), selection.period()).await;
    print!(
        "{}",
        render_summaries(selection.period(), &summaries, &StationRegistry::builtin())
    );
    Ok(())
}
