// In-memory alert repository backed by sample records
use crate::application::alert_repository::AlertRepository;
use crate::domain::alert::{RecentAlert, Severity};
use crate::domain::dashboard::{ChartData, ChartKind, SeriesData};
use anyhow::Result;
use async_trait::async_trait;

const TREND_LABELS: [&str; 6] = ["Apr 1", "Apr 7", "Apr 13", "Apr 19", "Apr 25", "May 1"];
const TREND_ALERTS: [f64; 6] = [30.0, 25.0, 40.0, 55.0, 45.0, 60.0];
const TREND_CRITICAL: [f64; 6] = [20.0, 15.0, 25.0, 35.0, 30.0, 40.0];

#[derive(Debug, Clone)]
pub struct FixtureRepository {
    alerts: Vec<RecentAlert>,
}

impl FixtureRepository {
    pub fn new() -> Self {
        Self {
            alerts: Self::sample_alerts(),
        }
    }

    fn sample_alerts() -> Vec<RecentAlert> {
        vec![
            RecentAlert {
                date: "04/15/2024".to_string(),
                time: "10:35 AM".to_string(),
                alert_type: "Malware".to_string(),
                severity: Severity::High,
                description: "Malware detected".to_string(),
                ip: "192.168.1.12".to_string(),
                count: 120,
                critical: 45,
            },
            RecentAlert {
                date: "04/15/2024".to_string(),
                time: "09:21 AM".to_string(),
                alert_type: "Unauthorized Access".to_string(),
                severity: Severity::Medium,
                description: "Suspicious login".to_string(),
                ip: "App Server 3".to_string(),
                count: 95,
                critical: 33,
            },
            RecentAlert {
                date: "04/15/2024".to_string(),
                time: "08:25 AM".to_string(),
                alert_type: "Expired SSL".to_string(),
                severity: Severity::Medium,
                description: "Expired SSL certificate".to_string(),
                ip: "Firewall A".to_string(),
                count: 50,
                critical: 10,
            },
        ]
    }
}

impl Default for FixtureRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AlertRepository for FixtureRepository {
    async fn recent_alerts(&self) -> Result<Vec<RecentAlert>> {
        tracing::debug!("Serving {} fixture alerts", self.alerts.len());
        Ok(self.alerts.clone())
    }

    async fn trend_chart(&self) -> Result<ChartData> {
        let labels = TREND_LABELS.iter().map(|l| l.to_string()).collect();
        let series = vec![
            SeriesData::new("alerts", "Alerts", Some("#8b5cf6"), TREND_ALERTS.to_vec()),
            SeriesData::new("critical", "Critical", Some("#ef4444"), TREND_CRITICAL.to_vec()),
        ];

        Ok(ChartData::new("trend", "Alert Trends", ChartKind::Line, labels, series))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recent_alerts_verbatim() {
        let alerts = FixtureRepository::new().recent_alerts().await.unwrap();
        assert_eq!(alerts.len(), 3);

        let types: Vec<&str> = alerts.iter().map(|a| a.alert_type.as_str()).collect();
        assert_eq!(types, vec!["Malware", "Unauthorized Access", "Expired SSL"]);

        let severities: Vec<Severity> = alerts.iter().map(|a| a.severity).collect();
        assert_eq!(severities, vec![Severity::High, Severity::Medium, Severity::Medium]);

        assert_eq!(alerts[1].description, "Suspicious login");
        assert_eq!(alerts[2].ip, "Firewall A");
        assert_eq!((alerts[2].count, alerts[2].critical), (50, 10));
        assert!(alerts.iter().all(|a| a.date == "04/15/2024"));
    }

    #[tokio::test]
    async fn test_trend_chart_series() {
        let chart = FixtureRepository::new().trend_chart().await.unwrap();
        assert_eq!(chart.kind, ChartKind::Line);
        assert_eq!(chart.labels.first().map(String::as_str), Some("Apr 1"));
        assert_eq!(chart.labels.last().map(String::as_str), Some("May 1"));
        assert_eq!(chart.series[0].values, vec![30.0, 25.0, 40.0, 55.0, 45.0, 60.0]);
        assert_eq!(chart.series[1].color.as_deref(), Some("#ef4444"));
    }
}
