//! Command implementations for the WXD CLI.
//!
//! Provides subcommands for viewing combined station readings and aligned
//! trend series from the dashboard API.

use chrono_tz::Tz;
use clap::{Args, Subcommand};
use wxd_core::{metric::Metric, period::Period};
use wxd_dashboard::selection::{SelectionState, DEFAULT_STATION};

pub mod catalog;
pub mod dashboard;
pub mod render;

/// Station/period/metric selection shared by the dashboard subcommands.
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Station id to include (repeat for several stations)
    #[arg(short = 's', long = "station", default_values_t = [DEFAULT_STATION.to_string()])]
    pub stations: Vec<String>,

    /// Aggregation window: 1d, 7d, 30d or ytd
    #[arg(short = 'p', long, default_value_t = Period::default())]
    pub period: Period,

    /// Metric column to chart (e.g. temp_avg, precip_total)
    #[arg(short = 'm', long, default_value = wxd_core::metric::DEFAULT_METRIC)]
    pub metric: String,
}

impl SelectionArgs {
    pub fn to_selection(&self) -> SelectionState {
        SelectionState::new(
            self.stations.iter().cloned(),
            self.period,
            Metric::new(self.metric.clone()),
        )
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the combined "right now" reading for the selected stations
    Now {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Show the selected metric for each station on a shared label axis
    Trend {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Print the chart payload as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Poll the API and print the combined reading on every cycle
    Watch {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Seconds between refreshes
        #[arg(short = 'i', long, default_value_t = 60)]
        interval_secs: u64,

        /// Stop after this many refreshes (runs until interrupted if omitted)
        #[arg(short = 'n', long)]
        count: Option<u64>,
    },

    /// Regenerate backend summaries for the selected period and show them
    Summaries {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// List metric columns the API can chart
    Metrics,

    /// List the configured stations
    Stations,
}

/// Connection and display settings resolved from flags and environment.
#[derive(Args, Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the dashboard API
    #[arg(
        long,
        env = "WXD_API_BASE",
        default_value = wxd_core::api::DEFAULT_API_BASE,
        global = true
    )]
    pub api_base: String,

    /// IANA time zone for "as of" times
    #[arg(
        long,
        env = "WXD_TIMEZONE",
        default_value_t = wxd_utils::dates::DEFAULT_DISPLAY_TIMEZONE,
        global = true
    )]
    pub timezone: Tz,
}

pub async fn run(config: ApiConfig, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Now { selection } => {
            dashboard::run_now(&config, &selection.to_selection()).await
        }
        Command::Trend { selection, json } => {
            dashboard::run_trend(&config, &selection.to_selection(), json).await
        }
        Command::Watch {
            selection,
            interval_secs,
            count,
        } => {
            dashboard::run_watch(&config, &selection.to_selection(), interval_secs, count).await
        }
        Command::Summaries { selection } => {
            catalog::run_summaries(&config, &selection.to_selection()).await
        }
        Command::Metrics => catalog::run_metrics(&config).await,
        Command::Stations => catalog::run_stations(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        config: ApiConfig,
        #[command(subcommand)]
        command: Command,
    }

    #[test]
    fn test_selection_defaults() {
        let cli = TestCli::parse_from(["wxd", "now"]);
        let Command::Now { selection } = cli.command else {
            panic!("expected now");
        };
        assert_eq!(selection.to_selection(), SelectionState::default());
    }

    #[test]
    fn test_selection_flags() {
        let cli = TestCli::parse_from([
            "wxd", "trend", "-s", "A", "-s", "B", "-s", "A", "--period", "ytd", "-m", "uv_max",
            "--json",
        ]);
        let Command::Trend { selection, json } = cli.command else {
            panic!("expected trend");
        };
        assert!(json);
        let state = selection.to_selection();
        assert_eq!(state.selected_stations(), &["A", "B"]);
        assert_eq!(state.period(), Period::YearToDate);
        assert_eq!(state.metric().column(), "uv_max");
    }

    #[test]
    fn test_invalid_period_rejected() {
        let result = TestCli::try_parse_from(["wxd", "now", "--period", "fortnight"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_api_base_flag() {
        let cli = TestCli::parse_from(["wxd", "metrics", "--api-base", "http://api.test"]);
        assert_eq!(cli.config.api_base, "http://api.test");
    }

    #[test]
    fn test_timezone_flag() {
        let cli = TestCli::parse_from(["wxd", "now"]);
        assert_eq!(cli.config.timezone, chrono_tz::America::Los_Angeles);

        let cli = TestCli::parse_from(["wxd", "now", "--timezone", "America/Chicago"]);
        assert_eq!(cli.config.timezone, chrono_tz::America::Chicago);

        assert!(TestCli::try_parse_from(["wxd", "now", "--timezone", "Mars/Base"]).is_err());
    }

    #[test]
    fn test_summaries_subcommand() {
        let cli = TestCli::parse_from(["wxd", "summaries", "-p", "7d", "-s", "dustprop"]);
        let Command::Summaries { selection } = cli.command else {
            panic!("expected summaries");
        };
        let state = selection.to_selection();
        assert_eq!(state.period(), Period::SevenDays);
        assert_eq!(state.selected_stations(), &["dustprop"]);
    }
}
