// Repository trait for alert data access
use crate::domain::alert::RecentAlert;
use crate::domain::dashboard::ChartData;
use async_trait::async_trait;

#[async_trait]
pub trait AlertRepository: Send + Sync {
    /// Most recent alerts, newest first
    async fn recent_alerts(&self) -> anyhow::Result<Vec<RecentAlert>>;

    /// Alert trend chart (alerts and critical alerts over time)
    async fn trend_chart(&self) -> anyhow::Result<ChartData>;
}
