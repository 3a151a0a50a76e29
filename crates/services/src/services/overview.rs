//! Read-only summary figures across the four logs.

use std::{collections::BTreeSet, sync::Arc};

use chrono::{DateTime, Days, Utc};
use db::{
    models::{batch::Batch, cleaning_log::CleaningLog, order::Order, stock_item::StockItem},
    store::{RecordStore, Snapshot},
};
use serde::Serialize;
use tokio::sync::watch;
use ts_rs::TS;

use super::clock::Clock;

/// Cleanings scheduled at or before now plus this many days are due soon.
pub const DUE_SOON_WINDOW_DAYS: u64 = 2;

pub const EMPTY_OVERVIEW_MESSAGE: &str =
    "No data available yet. Add batches, orders, stock, or cleaning logs to see insights.";

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
pub struct OverviewSummary {
    pub batch_count: usize,
    pub order_count: usize,
    pub total_revenue: f64,
    pub low_stock_count: usize,
    pub cleanings_due_soon: usize,
    /// Distinct allergens across all batches, sorted. Absent when there are none.
    pub allergens: Option<Vec<String>>,
    pub repeat_customer_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Overview {
    Empty { message: String },
    Summary(OverviewSummary),
}

pub fn summarize(
    batches: &[Batch],
    orders: &[Order],
    stock: &[StockItem],
    cleaning: &[CleaningLog],
    now: DateTime<Utc>,
) -> Overview {
    if batches.is_empty() && orders.is_empty() && stock.is_empty() && cleaning.is_empty() {
        return Overview::Empty {
            message: EMPTY_OVERVIEW_MESSAGE.to_string(),
        };
    }

    let due_by = now
        .checked_add_days(Days::new(DUE_SOON_WINDOW_DAYS))
        .unwrap_or(now);
    let allergens: BTreeSet<&str> = batches
        .iter()
        .flat_map(|batch| batch.allergens.iter().map(String::as_str))
        .collect();

    Overview::Summary(OverviewSummary {
        batch_count: batches.len(),
        order_count: orders.len(),
        total_revenue: orders.iter().map(|order| order.total_amount).sum(),
        low_stock_count: stock.iter().filter(|item| item.is_low()).count(),
        cleanings_due_soon: cleaning
            .iter()
            .filter(|log| log.next_scheduled_cleaning <= due_by)
            .count(),
        allergens: (!allergens.is_empty())
            .then(|| allergens.into_iter().map(str::to_string).collect()),
        repeat_customer_count: orders.iter().filter(|order| order.is_repeat_customer).count(),
    })
}

/// Recomputes the overview whenever any of the four stores changes.
pub struct OverviewAggregator {
    batches: watch::Receiver<Snapshot<Batch>>,
    orders: watch::Receiver<Snapshot<Order>>,
    stock: watch::Receiver<Snapshot<StockItem>>,
    cleaning: watch::Receiver<Snapshot<CleaningLog>>,
    clock: Arc<dyn Clock>,
}

impl OverviewAggregator {
    pub fn new(
        batches: &RecordStore<Batch>,
        orders: &RecordStore<Order>,
        stock: &RecordStore<StockItem>,
        cleaning: &RecordStore<CleaningLog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            batches: batches.subscribe(),
            orders: orders.subscribe(),
            stock: stock.subscribe(),
            cleaning: cleaning.subscribe(),
            clock,
        }
    }

    pub fn current(&self) -> Overview {
        summarize(
            &self.batches.borrow(),
            &self.orders.borrow(),
            &self.stock.borrow(),
            &self.cleaning.borrow(),
            self.clock.now(),
        )
    }

    /// Waits until any store changes, then recomputes. `None` once the
    /// stores are gone.
    pub async fn next_change(&mut self) -> Option<Overview> {
        let changed = tokio::select! {
            r = self.batches.changed() => r,
            r = self.orders.changed() => r,
            r = self.stock.changed() => r,
            r = self.cleaning.changed() => r,
        };
        changed.ok()?;

        let batches = self.batches.borrow_and_update().clone();
        let orders = self.orders.borrow_and_update().clone();
        let stock = self.stock.borrow_and_update().clone();
        let cleaning = self.cleaning.borrow_and_update().clone();
        Some(summarize(
            &batches,
            &orders,
            &stock,
            &cleaning,
            self.clock.now(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use db::storage::MemoryStorage;

    use super::*;
    use crate::services::{clock::FixedClock, samples};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn summary(overview: Overview) -> OverviewSummary {
        match overview {
            Overview::Summary(summary) => summary,
            Overview::Empty { .. } => panic!("expected a summary"),
        }
    }

    #[test]
    fn test_all_empty_renders_placeholder() {
        assert_eq!(
            summarize(&[], &[], &[], &[], now()),
            Overview::Empty {
                message: EMPTY_OVERVIEW_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_revenue_and_repeat_customers() {
        let orders = samples::orders(now());
        let summary = summary(summarize(&[], &orders, &[], &[], now()));
        assert_eq!(summary.order_count, 2);
        assert_eq!(summary.total_revenue, 102.0);
        assert_eq!(summary.repeat_customer_count, 1);
        assert_eq!(summary.allergens, None);
    }

    #[test]
    fn test_no_orders_means_zero_revenue() {
        let batches = samples::batches(now());
        let summary = summary(summarize(&batches, &[], &[], &[], now()));
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.repeat_customer_count, 0);
        assert_eq!(
            summary.allergens,
            Some(vec!["Dairy".to_string(), "Nuts".to_string()])
        );
    }

    #[test]
    fn test_low_stock_counts_at_or_below_threshold() {
        let mut stock = samples::stock_items(now());
        stock[0].quantity_available = 4.5;
        stock[0].restock_threshold = 2.0;
        stock[1].quantity_available = 1.0;
        stock[1].restock_threshold = 2.0;
        let summary = summary(summarize(&[], &[], &stock, &[], now()));
        assert_eq!(summary.low_stock_count, 1);
    }

    #[test]
    fn test_due_soon_includes_overdue_and_boundary() {
        let mut logs = samples::cleaning_logs(now());
        let template = logs[0].clone();
        logs.clear();
        for offset in [-3, 0, 2, 3] {
            let mut log = template.clone();
            log.next_scheduled_cleaning = now() + chrono::Duration::days(offset);
            logs.push(log);
        }
        let summary = summary(summarize(&[], &[], &[], &logs, now()));
        assert_eq!(summary.cleanings_due_soon, 3);
    }

    #[tokio::test]
    async fn test_aggregator_recomputes_on_store_change() {
        let storage: Arc<dyn db::storage::KeyValueStorage> = Arc::new(MemoryStorage::new());
        let batches = RecordStore::<Batch>::open_default(storage.clone()).await;
        let orders = RecordStore::<Order>::open_default(storage.clone()).await;
        let stock = RecordStore::<StockItem>::open_default(storage.clone()).await;
        let cleaning = RecordStore::<CleaningLog>::open_default(storage).await;
        let mut aggregator = OverviewAggregator::new(
            &batches,
            &orders,
            &stock,
            &cleaning,
            Arc::new(FixedClock(now())),
        );
        assert!(matches!(aggregator.current(), Overview::Empty { .. }));

        for order in samples::orders(now()) {
            orders.upsert(order).await.unwrap();
        }
        let summary = summary(aggregator.next_change().await.unwrap());
        assert_eq!(summary.order_count, 2);
        assert_eq!(summary.total_revenue, 102.0);
    }
}
