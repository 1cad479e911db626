// Dashboard domain model
use super::alert::{RecentAlertRow, TopAlertRow};
use super::error::RangeWarning;
use super::summary::{DashboardSummary, DateRange};
use serde::Serialize;

pub const TURNAROUND_PROGRESS_PERCENT: u32 = 75;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub range: DateRange,
    pub summary: DashboardSummary,
    pub tiles: Vec<TileData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<ChartData>,
    pub breakdown: ChartData,
    pub turnaround: TurnaroundData,
    pub recent_alerts: Vec<RecentAlertRow>,
    pub top_alerts: Vec<TopAlertRow>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<RangeWarning>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileData {
    pub id: String,
    pub title: String,
    pub value: u64,
}

impl TileData {
    pub fn new(id: &str, title: &str, value: u64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            value,
        }
    }

    /// Counter tiles shown across the top of the dashboard.
    pub fn from_summary(summary: &DashboardSummary) -> Vec<TileData> {
        vec![
            TileData::new("alertCount", "Alert Count", summary.alert_count),
            TileData::new("criticalAlerts", "Critical", summary.critical_alerts),
            TileData::new("openAlerts", "Open", summary.open_alerts),
            TileData::new("closedAlerts", "Closed", summary.closed_alerts),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesData {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub values: Vec<f64>,
}

impl SeriesData {
    pub fn new(id: &str, name: &str, color: Option<&str>, values: Vec<f64>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            color: color.map(str::to_string),
            values,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Line,
    Doughnut,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<SeriesData>,
    /// Per-label colors, used by doughnut charts.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,
}

impl ChartData {
    pub fn new(
        id: &str,
        title: &str,
        kind: ChartKind,
        labels: Vec<String>,
        series: Vec<SeriesData>,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            kind,
            labels,
            series,
            colors: Vec::new(),
        }
    }

    /// Severity doughnut. Slice values are the summary's fixed percentages.
    pub fn breakdown(summary: &DashboardSummary) -> Self {
        let labels = ["SSL Alerts", "Data Leaks", "Others"]
            .into_iter()
            .map(String::from)
            .collect();
        let slices = SeriesData::new(
            "share",
            "Share",
            None,
            vec![
                f64::from(summary.ssl_alerts),
                f64::from(summary.data_leaks),
                f64::from(summary.others),
            ],
        );

        let mut chart =
            ChartData::new("breakdown", "Alert Types", ChartKind::Doughnut, labels, vec![slices]);
        chart.colors = BREAKDOWN_COLORS.iter().map(|c| c.to_string()).collect();
        chart
    }
}

/// Colors for the breakdown slices, in label order.
pub const BREAKDOWN_COLORS: [&str; 3] = ["#3b82f6", "#ef4444", "#f59e0b"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnaroundData {
    pub time: String,
    pub progress_percent: u32,
}

impl TurnaroundData {
    pub fn from_summary(summary: &DashboardSummary) -> Self {
        Self {
            time: summary.turnaround_time.clone(),
            progress_percent: TURNAROUND_PROGRESS_PERCENT,
        }
    }
}
