// Held dashboard summary shared across requests
use crate::domain::summary::{DashboardSummary, DateRange};
use serde::Serialize;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummarySnapshot {
    pub range: DateRange,
    pub summary: DashboardSummary,
}

/// Current range and summary. Replaced as a whole, never patched.
#[derive(Debug)]
pub struct SummaryState {
    inner: RwLock<SummarySnapshot>,
}

impl SummaryState {
    pub fn new(snapshot: SummarySnapshot) -> Self {
        Self {
            inner: RwLock::new(snapshot),
        }
    }

    pub async fn current(&self) -> SummarySnapshot {
        self.inner.read().await.clone()
    }

    /// Only the recalculation in `DashboardService` writes here.
    pub(in crate::application) async fn replace(&self, snapshot: SummarySnapshot) {
        *self.inner.write().await = snapshot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::summary::{BaselineRecord, recompute};
    use chrono::NaiveDate;

    fn snapshot(from: (i32, u32, u32), to: (i32, u32, u32)) -> SummarySnapshot {
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(from.0, from.1, from.2).unwrap(),
            NaiveDate::from_ymd_opt(to.0, to.1, to.2).unwrap(),
        );
        SummarySnapshot {
            range,
            summary: recompute(&range, &BaselineRecord::default()),
        }
    }

    #[tokio::test]
    async fn test_replace_swaps_whole_snapshot() {
        let initial = snapshot((2024, 4, 1), (2024, 5, 1));
        let state = SummaryState::new(initial.clone());
        assert_eq!(state.current().await, initial);

        let next = snapshot((2024, 4, 1), (2024, 6, 30));
        state.replace(next.clone()).await;

        let current = state.current().await;
        assert_eq!(current, next);
        assert_eq!(current.summary.alert_count, 972);
    }
}
