// Messages sent over the progressive dashboard stream
use super::alert::{RecentAlertRow, TopAlertRow};
use super::dashboard::{ChartData, ChartKind};
use super::error::RangeWarning;
use super::summary::{DashboardSummary, DateRange};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileSkeleton {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSkeleton {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSkeleton {
    pub tiles: Vec<TileSkeleton>,
    pub charts: Vec<ChartSkeleton>,
    pub tables: Vec<String>,
}

impl DashboardSkeleton {
    pub fn widget_count(&self) -> usize {
        self.tiles.len() + self.charts.len() + self.tables.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StreamMessage {
    Skeleton {
        skeleton: DashboardSkeleton,
    },
    #[serde(rename_all = "camelCase")]
    Summary {
        range: DateRange,
        summary: DashboardSummary,
        warnings: Vec<RangeWarning>,
    },
    TileUpdate {
        id: String,
        value: u64,
    },
    ChartUpdate {
        chart: ChartData,
    },
    RecentAlerts {
        rows: Vec<RecentAlertRow>,
    },
    TopAlerts {
        rows: Vec<TopAlertRow>,
    },
    #[serde(rename_all = "camelCase")]
    Complete {
        total_widgets: usize,
        duration_ms: u64,
    },
}
