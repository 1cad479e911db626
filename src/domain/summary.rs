// Dashboard summary domain model and the date-range recalculation
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Length of the period the baseline counts describe.
pub const BASELINE_PERIOD_DAYS: f64 = 30.0;
/// Lower bound on the scaling factor.
pub const MIN_MULTIPLIER: f64 = 0.5;

pub const SSL_ALERTS_PERCENT: u32 = 60;
pub const DATA_LEAKS_PERCENT: u32 = 30;
pub const OTHERS_PERCENT: u32 = 10;
pub const TURNAROUND_TIME: &str = "1h 45min";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Signed whole days from `from` to `to`. Negative when the range is inverted.
    pub fn days(&self) -> i64 {
        (self.to - self.from).num_days()
    }

    pub fn is_inverted(&self) -> bool {
        self.to < self.from
    }
}

/// Reference counts for a nominal 30-day period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineRecord {
    pub alert_count: u64,
    pub critical_alerts: u64,
    pub open_alerts: u64,
    pub closed_alerts: u64,
}

impl Default for BaselineRecord {
    fn default() -> Self {
        Self {
            alert_count: 324,
            critical_alerts: 85,
            open_alerts: 56,
            closed_alerts: 183,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub alert_count: u64,
    pub critical_alerts: u64,
    pub open_alerts: u64,
    pub closed_alerts: u64,
    pub ssl_alerts: u32,
    pub data_leaks: u32,
    pub others: u32,
    pub turnaround_time: String,
}

/// Scaling factor for a range of `days` length, floored at `MIN_MULTIPLIER`.
pub fn multiplier(days: i64) -> f64 {
    (days as f64 / BASELINE_PERIOD_DAYS).max(MIN_MULTIPLIER)
}

fn scale(value: u64, multiplier: f64) -> u64 {
    (value as f64 * multiplier).floor() as u64
}

/// Derive the summary for `range` by linearly scaling `baseline`.
///
/// Only the four counters follow the range. The breakdown percentages and the
/// turnaround time are fixed values and are copied through unchanged.
pub fn recompute(range: &DateRange, baseline: &BaselineRecord) -> DashboardSummary {
    let factor = multiplier(range.days());

    DashboardSummary {
        alert_count: scale(baseline.alert_count, factor),
        critical_alerts: scale(baseline.critical_alerts, factor),
        open_alerts: scale(baseline.open_alerts, factor),
        closed_alerts: scale(baseline.closed_alerts, factor),
        ssl_alerts: SSL_ALERTS_PERCENT,
        data_leaks: DATA_LEAKS_PERCENT,
        others: OTHERS_PERCENT,
        turnaround_time: TURNAROUND_TIME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn summary_for(from: &str, to: &str) -> DashboardSummary {
        recompute(&DateRange::new(date(from), date(to)), &BaselineRecord::default())
    }

    fn counts(s: &DashboardSummary) -> (u64, u64, u64, u64) {
        (s.alert_count, s.critical_alerts, s.open_alerts, s.closed_alerts)
    }

    #[test]
    fn test_thirty_day_range_matches_baseline() {
        let summary = summary_for("2024-04-01", "2024-05-01");
        assert_eq!(counts(&summary), (324, 85, 56, 183));
    }

    #[test]
    fn test_same_day_range_uses_floor() {
        let summary = summary_for("2024-04-01", "2024-04-01");
        assert_eq!(counts(&summary), (162, 42, 28, 91));
    }

    #[test]
    fn test_ninety_day_range_triples_counts() {
        let range = DateRange::new(date("2024-04-01"), date("2024-06-30"));
        assert_eq!(range.days(), 90);
        assert_eq!(multiplier(range.days()), 3.0);

        let summary = recompute(&range, &BaselineRecord::default());
        assert_eq!(counts(&summary), (972, 255, 168, 549));
    }

    #[test]
    fn test_inverted_range_clamps_to_same_day_result() {
        let range = DateRange::new(date("2024-05-01"), date("2024-04-01"));
        assert!(range.is_inverted());
        assert_eq!(range.days(), -30);

        let inverted = recompute(&range, &BaselineRecord::default());
        assert_eq!(inverted, summary_for("2024-04-01", "2024-04-01"));
    }

    #[test]
    fn test_multiplier_is_linear_from_fifteen_days() {
        for days in 15..400 {
            assert_eq!(multiplier(days), days as f64 / 30.0, "days={days}");
        }
    }

    #[test]
    fn test_multiplier_floor_below_fifteen_days() {
        for days in -400..15 {
            assert_eq!(multiplier(days), 0.5, "days={days}");
        }
    }

    #[test]
    fn test_fixed_fields_ignore_range() {
        let ranges = [
            ("2024-04-01", "2024-04-01"),
            ("2024-04-01", "2024-05-01"),
            ("2024-05-01", "2024-04-01"),
            ("2000-01-01", "2030-12-31"),
        ];
        for (from, to) in ranges {
            let summary = summary_for(from, to);
            assert_eq!(summary.ssl_alerts, 60);
            assert_eq!(summary.data_leaks, 30);
            assert_eq!(summary.others, 10);
            assert_eq!(summary.turnaround_time, "1h 45min");
        }
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let range = DateRange::new(date("2024-02-10"), date("2024-03-27"));
        let baseline = BaselineRecord::default();
        assert_eq!(recompute(&range, &baseline), recompute(&range, &baseline));
    }

    #[test]
    fn test_custom_baseline_is_scaled() {
        let baseline = BaselineRecord {
            alert_count: 10,
            critical_alerts: 3,
            open_alerts: 1,
            closed_alerts: 0,
        };
        let range = DateRange::new(date("2024-01-01"), date("2024-01-16"));
        let summary = recompute(&range, &baseline);
        assert_eq!(counts(&summary), (5, 1, 0, 0));
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let json = serde_json::to_value(summary_for("2024-04-01", "2024-05-01")).unwrap();
        assert_eq!(json["alertCount"], 324);
        assert_eq!(json["criticalAlerts"], 85);
        assert_eq!(json["sslAlerts"], 60);
        assert_eq!(json["turnaroundTime"], "1h 45min");
    }
}
