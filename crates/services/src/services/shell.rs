//! Root of the application: the four stores and the tab layout over them.

use std::sync::Arc;

use db::{
    models::{batch::Batch, cleaning_log::CleaningLog, order::Order, stock_item::StockItem},
    record::{Record, RecordKind},
    storage::KeyValueStorage,
    store::{RecordStore, StoreError},
};
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{info, warn};
use ts_rs::TS;

use super::{
    clock::Clock,
    config::Config,
    form::FormController,
    listing::ListPresenter,
    overview::OverviewAggregator,
    samples,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS, EnumString, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Tab {
    Batches,
    Orders,
    Ingredients,
    Cleaning,
    Overview,
}

impl Tab {
    pub fn kind(&self) -> Option<RecordKind> {
        match self {
            Tab::Batches => Some(RecordKind::Batch),
            Tab::Orders => Some(RecordKind::Order),
            Tab::Ingredients => Some(RecordKind::StockItem),
            Tab::Cleaning => Some(RecordKind::CleaningLog),
            Tab::Overview => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self.kind() {
            Some(kind) => kind.tab_label(),
            None => "Overview",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
pub struct TabInfo {
    pub tab: Tab,
    pub label: String,
    /// Records in the tab's store; absent for the overview.
    pub count: Option<usize>,
}

/// A record variant owned by the shell.
pub trait ShellRecord: Record {
    fn store(shell: &AppShell) -> &Arc<RecordStore<Self>>;
}

impl ShellRecord for Batch {
    fn store(shell: &AppShell) -> &Arc<RecordStore<Self>> {
        &shell.batches
    }
}

impl ShellRecord for Order {
    fn store(shell: &AppShell) -> &Arc<RecordStore<Self>> {
        &shell.orders
    }
}

impl ShellRecord for StockItem {
    fn store(shell: &AppShell) -> &Arc<RecordStore<Self>> {
        &shell.stock
    }
}

impl ShellRecord for CleaningLog {
    fn store(shell: &AppShell) -> &Arc<RecordStore<Self>> {
        &shell.cleaning
    }
}

pub struct AppShell {
    batches: Arc<RecordStore<Batch>>,
    orders: Arc<RecordStore<Order>>,
    stock: Arc<RecordStore<StockItem>>,
    cleaning: Arc<RecordStore<CleaningLog>>,
    clock: Arc<dyn Clock>,
}

impl AppShell {
    /// Opens every store from `storage` and seeds sample data if configured.
    pub async fn open(
        storage: Arc<dyn KeyValueStorage>,
        config: &Config,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let keys = &config.storage_keys;
        let shell = Self {
            batches: Arc::new(
                RecordStore::open(storage.clone(), keys.for_kind(RecordKind::Batch)).await,
            ),
            orders: Arc::new(
                RecordStore::open(storage.clone(), keys.for_kind(RecordKind::Order)).await,
            ),
            stock: Arc::new(
                RecordStore::open(storage.clone(), keys.for_kind(RecordKind::StockItem)).await,
            ),
            cleaning: Arc::new(
                RecordStore::open(storage, keys.for_kind(RecordKind::CleaningLog)).await,
            ),
            clock,
        };

        if config.seed_sample_data {
            if let Err(e) = shell.seed_samples().await {
                warn!(error = %e, "Failed to persist sample data");
            }
        }
        shell
    }

    pub fn store<R: ShellRecord>(&self) -> &Arc<RecordStore<R>> {
        R::store(self)
    }

    pub fn presenter<R: ShellRecord>(&self) -> ListPresenter<R> {
        ListPresenter::new(self.store::<R>().clone())
    }

    pub fn open_add<R: ShellRecord>(&self) -> FormController<R> {
        FormController::open_add(self.clock.as_ref())
    }

    pub fn overview(&self) -> OverviewAggregator {
        OverviewAggregator::new(
            &self.batches,
            &self.orders,
            &self.stock,
            &self.cleaning,
            self.clock.clone(),
        )
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn tabs(&self) -> Vec<TabInfo> {
        Tab::iter()
            .map(|tab| TabInfo {
                tab,
                label: tab.label().to_string(),
                count: tab.kind().map(|kind| self.count(kind)),
            })
            .collect()
    }

    fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Batch => self.batches.len(),
            RecordKind::Order => self.orders.len(),
            RecordKind::StockItem => self.stock.len(),
            RecordKind::CleaningLog => self.cleaning.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        RecordKind::iter().all(|kind| self.count(kind) == 0)
    }

    /// Adds two example records per log. Does nothing unless every log is empty.
    pub async fn seed_samples(&self) -> Result<bool, StoreError> {
        if !self.is_empty() {
            return Ok(false);
        }
        let now = self.clock.now();
        for batch in samples::batches(now) {
            self.batches.upsert(batch).await?;
        }
        for order in samples::orders(now) {
            self.orders.upsert(order).await?;
        }
        for item in samples::stock_items(now) {
            self.stock.upsert(item).await?;
        }
        for log in samples::cleaning_logs(now) {
            self.cleaning.upsert(log).await?;
        }
        info!("Seeded sample data");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use db::storage::MemoryStorage;

    use super::*;
    use crate::services::{clock::FixedClock, listing::ListView, overview::Overview};

    fn clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock(Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()))
    }

    #[tokio::test]
    async fn test_fresh_shell_is_empty_without_seeding() {
        let shell = AppShell::open(Arc::new(MemoryStorage::new()), &Config::default(), clock()).await;
        assert!(shell.is_empty());
        assert!(matches!(shell.presenter::<Order>().render(), ListView::Empty { .. }));
        assert!(matches!(shell.overview().current(), Overview::Empty { .. }));

        let labels: Vec<String> = shell.tabs().into_iter().map(|tab| tab.label).collect();
        assert_eq!(
            labels,
            vec!["Batches", "Orders", "Ingredients", "Cleaning", "Overview"]
        );
    }

    #[tokio::test]
    async fn test_seeding_fills_every_log_once() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let config = Config {
            seed_sample_data: true,
            ..Config::default()
        };
        let shell = AppShell::open(storage.clone(), &config, clock()).await;
        let counts: Vec<Option<usize>> = shell.tabs().into_iter().map(|tab| tab.count).collect();
        assert_eq!(counts, vec![Some(2), Some(2), Some(2), Some(2), None]);
        assert!(!shell.seed_samples().await.unwrap());

        let reopened = AppShell::open(storage, &config, clock()).await;
        assert_eq!(reopened.store::<Batch>().len(), 2);
        assert_eq!(reopened.store::<CleaningLog>().list(), shell.store::<CleaningLog>().list());
    }

    #[tokio::test]
    async fn test_custom_storage_keys_isolate_stores() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
        let mut config = Config::default();
        config.storage_keys.orders = "OrdersStaging".to_string();

        let shell = AppShell::open(storage.clone(), &config, clock()).await;
        let mut form = shell.open_add::<Order>();
        form.draft_mut().set_text("customer_name", "Ana");
        form.draft_mut().set_text("filling_type", "Rajas");
        form.draft_mut().set_text("quantity_ordered", "6");
        form.draft_mut().set_text("total_amount", "15");
        form.draft_mut().set_text("order_taken_by", "Luis");
        form.draft_mut().set_text("estimated_prep_time_minutes", "30");
        form.save(shell.store::<Order>()).await.unwrap();

        assert!(storage.read("OrdersStaging").await.unwrap().is_some());
        assert!(storage.read("TamaleOrderEntries").await.unwrap().is_none());
    }
}
