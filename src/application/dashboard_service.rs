// Dashboard service - Use case for recalculating and building dashboards
use crate::application::alert_repository::AlertRepository;
use crate::application::summary_state::{SummarySnapshot, SummaryState};
use crate::domain::alert::{AlertTypeFilter, RecentAlert, RecentAlertRow, TopAlertRow};
use crate::domain::dashboard::{ChartData, Dashboard, TileData, TurnaroundData};
use crate::domain::error::{DashboardError, RangeWarning};
use crate::domain::summary::{BaselineRecord, DateRange, recompute};
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A parsed range together with any non-fatal findings about it.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeCheck {
    pub range: DateRange,
    pub warnings: Vec<RangeWarning>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeUpdate {
    #[serde(flatten)]
    pub snapshot: SummarySnapshot,
    pub warnings: Vec<RangeWarning>,
}

/// Raw inputs from the dashboard's filter bar.
#[derive(Debug, Clone, Default)]
pub struct DashboardInput {
    pub from: Option<String>,
    pub to: Option<String>,
    pub alert_type: AlertTypeFilter,
    pub search: Option<String>,
}

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn AlertRepository>,
    baseline: BaselineRecord,
    state: Arc<SummaryState>,
}

impl DashboardService {
    pub fn new(
        repository: Arc<dyn AlertRepository>,
        baseline: BaselineRecord,
        initial_range: DateRange,
    ) -> Self {
        let snapshot = SummarySnapshot {
            range: initial_range,
            summary: recompute(&initial_range, &baseline),
        };

        Self {
            repository,
            baseline,
            state: Arc::new(SummaryState::new(snapshot)),
        }
    }

    pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, DashboardError> {
        NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
            DashboardError::InvalidDate {
                field,
                value: value.to_string(),
            }
        })
    }

    pub fn parse_range(from: &str, to: &str) -> Result<RangeCheck, DashboardError> {
        let range = DateRange::new(Self::parse_date("from", from)?, Self::parse_date("to", to)?);

        let mut warnings = Vec::new();
        if range.is_inverted() {
            warnings.push(RangeWarning::InvertedRange {
                from: range.from,
                to: range.to,
            });
        }

        Ok(RangeCheck { range, warnings })
    }

    /// Recompute the summary for a new range and replace the held state.
    /// Rejected input leaves the previous summary in place.
    pub async fn update_range(&self, from: &str, to: &str) -> Result<RangeUpdate, DashboardError> {
        let check = Self::parse_range(from, to).inspect_err(|e| {
            tracing::warn!("Rejected date range from={:?} to={:?}: {}", from, to, e);
        })?;

        if !check.warnings.is_empty() {
            tracing::warn!(
                "Inverted date range {} > {}, using minimum multiplier",
                check.range.from,
                check.range.to
            );
        }

        let summary = recompute(&check.range, &self.baseline);
        tracing::debug!(
            "Recomputed summary for {}..{} ({} days): {} alerts",
            check.range.from,
            check.range.to,
            check.range.days(),
            summary.alert_count
        );

        let snapshot = SummarySnapshot {
            range: check.range,
            summary,
        };
        self.state.replace(snapshot.clone()).await;

        Ok(RangeUpdate {
            snapshot,
            warnings: check.warnings,
        })
    }

    pub async fn current_summary(&self) -> SummarySnapshot {
        self.state.current().await
    }

    /// Apply the range from the inputs when both dates are given, otherwise
    /// fall back to the held summary.
    pub async fn resolve_range(
        &self,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<RangeUpdate, DashboardError> {
        match (from, to) {
            (Some(from), Some(to)) => self.update_range(from, to).await,
            (None, None) => Ok(RangeUpdate {
                snapshot: self.current_summary().await,
                warnings: Vec::new(),
            }),
            (Some(_), None) => Err(DashboardError::MissingDate { field: "to" }),
            (None, Some(_)) => Err(DashboardError::MissingDate { field: "from" }),
        }
    }

    pub async fn build_dashboard(&self, input: &DashboardInput) -> Result<Dashboard, DashboardError> {
        let update = self
            .resolve_range(input.from.as_deref(), input.to.as_deref())
            .await?;

        // TODO: apply alert_type and search to the alert tables; both inputs
        // are accepted but the tables always show every record.
        tracing::debug!(
            "Building dashboard (alert_type={:?}, search={:?})",
            input.alert_type,
            input.search
        );

        let alerts = self.fetch_alerts().await;
        let summary = update.snapshot.summary;

        Ok(Dashboard {
            range: update.snapshot.range,
            tiles: TileData::from_summary(&summary),
            trend: self.fetch_trend().await,
            breakdown: ChartData::breakdown(&summary),
            turnaround: TurnaroundData::from_summary(&summary),
            recent_alerts: alerts.iter().map(RecentAlert::to_recent_row).collect(),
            top_alerts: alerts.iter().map(RecentAlert::to_top_row).collect(),
            summary,
            warnings: update.warnings,
        })
    }

    pub async fn recent_alerts(&self) -> Vec<RecentAlertRow> {
        self.fetch_alerts()
            .await
            .iter()
            .map(RecentAlert::to_recent_row)
            .collect()
    }

    pub async fn top_alerts(&self) -> Vec<TopAlertRow> {
        self.fetch_alerts()
            .await
            .iter()
            .map(RecentAlert::to_top_row)
            .collect()
    }

    async fn fetch_alerts(&self) -> Vec<RecentAlert> {
        match self.repository.recent_alerts().await {
            Ok(alerts) => alerts,
            Err(e) => {
                tracing::error!("Error fetching recent alerts: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_trend(&self) -> Option<ChartData> {
        match self.repository.trend_chart().await {
            Ok(chart) => Some(chart),
            Err(e) => {
                tracing::error!("Error fetching trend chart: {}", e);
                None
            }
        }
    }
}
