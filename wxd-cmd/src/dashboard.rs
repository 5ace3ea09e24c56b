//! `now`, `trend` and `watch`: one or more refresh cycles against the API.

use crate::render::{render_now, render_trend};
use crate::ApiConfig;
use log::{info, warn};
use std::time::Duration;
use wxd_core::{api::HttpFetcher, station::StationRegistry};
use wxd_dashboard::{DashboardController, DashboardView, SelectionState};

fn controller(config: &ApiConfig) -> DashboardController<HttpFetcher> {
    DashboardController::new(HttpFetcher::new(config.api_base.as_str()))
}

/// Run one refresh and return the view it produced.
async fn refresh_once(
    controller: &DashboardController<HttpFetcher>,
    selection: &SelectionState,
) -> anyhow::Result<DashboardView> {
    let outcome = controller.refresh(selection).await;
    if outcome.readings.snapshots.len() < selection.selected_stations().len() {
        warn!(
            "{} of {} station(s) returned no data",
            selection.selected_stations().len() - outcome.readings.snapshots.len(),
            selection.selected_stations().len()
        );
    }
    controller
        .published()
        .ok_or_else(|| anyhow::anyhow!("refresh #{} was not published", outcome.generation))
}

/// Print the combined "right now" reading.
pub async fn run_now(config: &ApiConfig, selection: &SelectionState) -> anyhow::Result<()> {
    let view = refresh_once(&controller(config), selection).await?;
    print!("{}", render_now(view.now.as_ref(), config.timezone));
    Ok(())
}

/// Print the aligned trend as a table, or the chart payload as JSON.
pub async fn run_trend(
    config: &ApiConfig,
    selection: &SelectionState,
    json: bool,
) -> anyhow::Result<()> {
    let registry = StationRegistry::builtin();
    let view = refresh_once(&controller(config), selection).await?;
    let chart = view.chart(&registry);
    if json {
        println!("{}", chart.to_json()?);
    } else {
        print!("{}", render_trend(&chart.title, &view.trend, &registry));
    }
    Ok(())
}

/// Refresh every `interval_secs`, printing the combined reading each time.
///
/// Cycles run one after another, so a slow cycle delays the next tick
/// rather than overlapping it.
pub async fn run_watch(
    config: &ApiConfig,
    selection: &SelectionState,
    interval_secs: u64,
    count: Option<u64>,
) -> anyhow::Result<()> {
    if interval_secs == 0 {
        anyhow::bail!("--interval-secs must be at least 1");
    }
    let controller = controller(config);
    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    let mut cycles: u64 = 0;
    loop {
        ticker.tick().await;
        let view = refresh_once(&controller, selection).await?;
        print!("{}", render_now(view.now.as_ref(), config.timezone));
        println!();
        cycles += 1;
        if count.is_some_and(|limit| cycles >= limit) {
            info!("Watch finished after {} refresh(es)", cycles);
            return Ok(());
        }
    }
}
