// Streaming dashboard service - Progressive loading with length-prefixed chunks
use crate::application::dashboard_service::{DashboardInput, DashboardService};
use crate::domain::dashboard::Dashboard;
use crate::domain::error::DashboardError;
use crate::domain::stream::{ChartSkeleton, DashboardSkeleton, StreamMessage, TileSkeleton};
use std::time::Instant;
use tokio::sync::mpsc;

const CHANNEL_CAPACITY: usize = 100;

#[derive(Clone)]
pub struct StreamingDashboardService {
    dashboard_service: DashboardService,
}

impl StreamingDashboardService {
    pub fn new(dashboard_service: DashboardService) -> Self {
        Self { dashboard_service }
    }

    /// Resolve the range up front so bad input fails the request instead of
    /// the stream. The channel closes after the completion message.
    pub async fn stream_dashboard(
        &self,
        input: &DashboardInput,
    ) -> Result<mpsc::Receiver<StreamMessage>, DashboardError> {
        let start_time = Instant::now();
        let dashboard = self.dashboard_service.build_dashboard(input).await?;
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);

        tokio::spawn(async move {
            let skeleton = Self::build_skeleton(&dashboard);
            let total_widgets = skeleton.widget_count();
            let messages = Self::messages(skeleton, dashboard);
            let total = messages.len();

            for msg in messages {
                if tx.send(msg).await.is_err() {
                    tracing::debug!("Dashboard stream receiver dropped");
                    return;
                }
            }

            tracing::debug!("Streamed {} dashboard messages", total);
            let _ = tx
                .send(StreamMessage::Complete {
                    total_widgets,
                    duration_ms: start_time.elapsed().as_millis() as u64,
                })
                .await;
        });

        Ok(rx)
    }

    /// Skeleton and summary followed by one message per widget.
    fn messages(skeleton: DashboardSkeleton, dashboard: Dashboard) -> Vec<StreamMessage> {
        let mut messages = vec![
            StreamMessage::Skeleton { skeleton },
            StreamMessage::Summary {
                range: dashboard.range,
                summary: dashboard.summary,
                warnings: dashboard.warnings,
            },
        ];

        messages.extend(dashboard.tiles.into_iter().map(|tile| StreamMessage::TileUpdate {
            id: tile.id,
            value: tile.value,
        }));

        if let Some(trend) = dashboard.trend {
            messages.push(StreamMessage::ChartUpdate { chart: trend });
        }
        messages.push(StreamMessage::ChartUpdate {
            chart: dashboard.breakdown,
        });

        messages.push(StreamMessage::RecentAlerts {
            rows: dashboard.recent_alerts,
        });
        messages.push(StreamMessage::TopAlerts {
            rows: dashboard.top_alerts,
        });

        messages
    }

    fn build_skeleton(dashboard: &Dashboard) -> DashboardSkeleton {
        let tiles = dashboard
            .tiles
            .iter()
            .map(|t| TileSkeleton {
                id: t.id.clone(),
                title: t.title.clone(),
            })
            .collect();

        let charts = dashboard
            .trend
            .iter()
            .chain(std::iter::once(&dashboard.breakdown))
            .map(|c| ChartSkeleton {
                id: c.id.clone(),
                title: c.title.clone(),
                kind: c.kind,
            })
            .collect();

        DashboardSkeleton {
            tiles,
            charts,
            tables: vec!["recentAlerts".to_string(), "topAlerts".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::summary::BaselineRecord;
    use crate::infrastructure::fixture_repository::FixtureRepository;
    use std::sync::Arc;

    fn service() -> StreamingDashboardService {
        let range = DashboardService::parse_range("2024-04-01", "2024-05-01")
            .unwrap()
            .range;
        let dashboard_service = DashboardService::new(
            Arc::new(FixtureRepository::new()),
            BaselineRecord::default(),
            range,
        );
        StreamingDashboardService::new(dashboard_service)
    }

    async fn collect(mut rx: mpsc::Receiver<StreamMessage>) -> Vec<StreamMessage> {
        let mut messages = Vec::new();
        while let Some(msg) = rx.recv().await {
            messages.push(msg);
        }
        messages
    }

    #[tokio::test]
    async fn test_stream_order_and_completion() {
        let rx = service()
            .stream_dashboard(&DashboardInput::default())
            .await
            .unwrap();
        let messages = collect(rx).await;

        let skeleton = match &messages[0] {
            StreamMessage::Skeleton { skeleton } => skeleton.clone(),
            other => panic!("expected skeleton, got {other:?}"),
        };
        assert_eq!(skeleton.tiles.len(), 4);
        assert_eq!(skeleton.charts.len(), 2);
        assert_eq!(skeleton.widget_count(), 8);

        assert!(matches!(messages[1], StreamMessage::Summary { .. }));
        assert_eq!(
            messages[2],
            StreamMessage::TileUpdate {
                id: "alertCount".to_string(),
                value: 324
            }
        );

        match messages.last() {
            Some(StreamMessage::Complete { total_widgets, .. }) => assert_eq!(*total_widgets, 8),
            other => panic!("expected completion, got {other:?}"),
        }
        assert_eq!(messages.len(), 11);
    }

    #[tokio::test]
    async fn test_stream_carries_inversion_warning() {
        let input = DashboardInput {
            from: Some("2024-05-01".to_string()),
            to: Some("2024-04-01".to_string()),
            ..Default::default()
        };
        let messages = collect(service().stream_dashboard(&input).await.unwrap()).await;

        match &messages[1] {
            StreamMessage::Summary { summary, warnings, .. } => {
                assert_eq!(summary.alert_count, 162);
                assert_eq!(warnings.len(), 1);
            }
            other => panic!("expected summary, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_stream_rejects_invalid_range() {
        let input = DashboardInput {
            from: Some("04/01/2024".to_string()),
            to: Some("2024-05-01".to_string()),
            ..Default::default()
        };
        let err = service().stream_dashboard(&input).await.unwrap_err();
        assert!(matches!(err, DashboardError::InvalidDate { field: "from", .. }));
    }
}
