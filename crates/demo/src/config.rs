// File: crates/demo/src/config.rs
// Summary: Demo configuration loaded from TOML; every field optional.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use fintrack_chart::{BarChartConfig, CandlestickConfig, LineChartConfig, SwitcherConfig};
use fintrack_metrics::Period;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Theme preset name (`light`, `dark`, `high-contrast-dark`).
    pub theme: String,
    pub output_dir: PathBuf,
    /// Optional CSV with `date,kind,amount,category,description` rows; sample data otherwise.
    pub transactions: Option<PathBuf>,
    pub page_size: usize,
    /// Reference day for periods and due dates; defaults to the local date.
    pub today: Option<NaiveDate>,
    pub period: Period,
    pub line: LineChartConfig,
    pub bar: BarChartConfig,
    pub candlestick: CandlestickConfig,
    pub switcher: SwitcherConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            output_dir: PathBuf::from("target/out"),
            transactions: None,
            page_size: 5,
            today: None,
            period: Period::Month,
            line: LineChartConfig::default(),
            bar: BarChartConfig::default(),
            candlestick: CandlestickConfig::default(),
            switcher: SwitcherConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let mut cfg: DemoConfig = toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        // relative CSV paths resolve against the config file
        if let (Some(csv), Some(dir)) = (cfg.transactions.as_mut(), path.parent()) {
            if csv.is_relative() {
                *csv = dir.join(&*csv);
            }
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg: DemoConfig = toml::from_str(
            r#"
            theme = "dark"
            today = "2024-03-10"
            period = "week"

            [line]
            show_points = true
            duration_ms = 250

            [bar]
            height = 180.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.theme, "dark");
        assert_eq!(cfg.today, NaiveDate::from_ymd_opt(2024, 3, 10));
        assert_eq!(cfg.period, Period::Week);
        assert!(cfg.line.show_points);
        assert_eq!(cfg.line.duration, Duration::from_millis(250));
        assert_eq!(cfg.line.width, 350.0);
        assert_eq!(cfg.bar.height, 180.0);
        assert_eq!(cfg.page_size, 5);
        assert!(cfg.transactions.is_none());
    }
}
