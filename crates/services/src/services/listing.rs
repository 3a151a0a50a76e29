use std::sync::Arc;

use db::{
    record::{Record, RecordCard},
    store::{RecordStore, Snapshot, StoreError},
};
use serde::Serialize;
use tokio::sync::watch;
use ts_rs::TS;
use uuid::Uuid;

use super::{clock::Clock, form::FormController};

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ListView {
    Empty { message: String },
    Cards { cards: Vec<RecordCard> },
}

impl ListView {
    fn from_records<R: Record>(records: &[R]) -> Self {
        if records.is_empty() {
            ListView::Empty {
                message: R::KIND.empty_message().to_string(),
            }
        } else {
            ListView::Cards {
                cards: records.iter().map(Record::card).collect(),
            }
        }
    }
}

/// Renders one store as cards and routes add/edit/delete intents.
pub struct ListPresenter<R: Record> {
    store: Arc<RecordStore<R>>,
    updates: watch::Receiver<Snapshot<R>>,
}

impl<R: Record> ListPresenter<R> {
    pub fn new(store: Arc<RecordStore<R>>) -> Self {
        let updates = store.subscribe();
        Self { store, updates }
    }

    pub fn render(&self) -> ListView {
        ListView::from_records(&self.store.snapshot())
    }

    /// Waits for the store's next change and renders it.
    pub async fn next_render(&mut self) -> Option<ListView> {
        self.updates.changed().await.ok()?;
        let snapshot = self.updates.borrow_and_update().clone();
        Some(ListView::from_records(&snapshot))
    }

    /// Opens an edit session on the selected card, if it still exists.
    pub fn select(&self, id: Uuid) -> Option<FormController<R>> {
        self.store.get(id).map(|record| FormController::open_edit(&record))
    }

    pub fn add(&self, clock: &dyn Clock) -> FormController<R> {
        FormController::open_add(clock)
    }

    /// No confirmation, no undo.
    pub async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use db::{models::stock_item::StockItem, storage::MemoryStorage};
    use serde_json::json;

    use super::*;
    use crate::services::{clock::FixedClock, form::FormMode};

    async fn presenter() -> ListPresenter<StockItem> {
        let store = RecordStore::open_default(Arc::new(MemoryStorage::new())).await;
        ListPresenter::new(Arc::new(store))
    }

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap())
    }

    async fn add_item(presenter: &ListPresenter<StockItem>, name: &str) -> StockItem {
        let mut form = presenter.add(&clock());
        form.apply(
            json!({
                "name": name,
                "quantity_available": 4.5,
                "restock_threshold": 2,
                "received_by": "Mateo",
                "cost_per_unit": 3.4,
            })
            .as_object()
            .unwrap(),
        )
        .unwrap();
        form.save(&presenter.store).await.unwrap()
    }

    #[tokio::test]
    async fn test_empty_store_renders_placeholder() {
        let presenter = presenter().await;
        assert_eq!(
            presenter.render(),
            ListView::Empty {
                message: "No ingredient stock yet. Tap + to add a new item.".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_cards_follow_store_order() {
        let presenter = presenter().await;
        add_item(&presenter, "Corn Flour").await;
        add_item(&presenter, "Fresh Jalapeños").await;

        let ListView::Cards { cards } = presenter.render() else {
            panic!("expected cards");
        };
        let titles: Vec<&str> = cards.iter().map(|card| card.title.as_str()).collect();
        assert_eq!(titles, vec!["Corn Flour", "Fresh Jalapeños"]);
    }

    #[tokio::test]
    async fn test_select_and_delete_route_to_store() {
        let presenter = presenter().await;
        let item = add_item(&presenter, "Lard").await;

        let form = presenter.select(item.id).unwrap();
        assert_eq!(form.mode(), FormMode::Edit(item.id));
        assert!(presenter.select(Uuid::new_v4()).is_none());

        assert!(presenter.delete(item.id).await.unwrap());
        assert!(!presenter.delete(item.id).await.unwrap());
        assert!(matches!(presenter.render(), ListView::Empty { .. }));
    }

    #[tokio::test]
    async fn test_next_render_follows_mutations() {
        let mut presenter = presenter().await;
        let item = add_item(&presenter, "Corn Husks").await;

        let Some(ListView::Cards { cards }) = presenter.next_render().await else {
            panic!("expected cards");
        };
        assert_eq!(cards[0].id, item.id);
    }
}
