// Alert domain models
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Medium,
    High,
}

/// Alert-type selector offered next to the breakdown chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlertTypeFilter {
    #[default]
    All,
    #[serde(rename = "SSL Alerts")]
    SslAlerts,
    #[serde(rename = "Data Leaks")]
    DataLeaks,
    Others,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentAlert {
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub severity: Severity,
    pub description: String,
    /// Source system or IP address.
    pub ip: String,
    pub count: u32,
    pub critical: u32,
}

impl RecentAlert {
    pub fn to_recent_row(&self) -> RecentAlertRow {
        RecentAlertRow {
            date: self.date.clone(),
            time: self.time.clone(),
            alert_type: self.alert_type.clone(),
            severity: self.severity,
        }
    }

    pub fn to_top_row(&self) -> TopAlertRow {
        TopAlertRow {
            source: self.ip.clone(),
            count: self.count,
            critical: self.critical,
        }
    }
}

/// Row of the "Recent Alerts" table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentAlertRow {
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub severity: Severity,
}

/// Row of the "Top Alerts" table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopAlertRow {
    pub source: String,
    pub count: u32,
    pub critical: u32,
}
