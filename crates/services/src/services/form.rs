//! Add/edit sessions over one record variant.

use db::{
    record::Record,
    schema::{Draft, FieldSpec, ValidationErrors, validate},
    store::{RecordStore, StoreError, UpsertOutcome},
};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use super::clock::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit(Uuid),
}

impl FormMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormMode::Add => "add",
            FormMode::Edit(_) => "edit",
        }
    }

    pub fn id(&self) -> Option<Uuid> {
        match self {
            FormMode::Add => None,
            FormMode::Edit(id) => Some(*id),
        }
    }
}

#[derive(Debug, Error)]
pub enum FormError<R: Record> {
    /// The save-gate refused the draft. The session is handed back for correction.
    #[error("{errors}")]
    Invalid {
        form: Box<FormController<R>>,
        errors: ValidationErrors,
    },
    /// The record is in the store but its slot could not be written.
    #[error("record saved in memory but not persisted: {source}")]
    Persist {
        record: R,
        #[source]
        source: StoreError,
    },
}

/// One editing session. Saving or cancelling consumes it.
#[derive(Debug, Clone)]
pub struct FormController<R: Record> {
    mode: FormMode,
    draft: Draft,
    original: Option<R>,
}

impl<R: Record> FormController<R> {
    pub fn open_add(clock: &dyn Clock) -> Self {
        Self {
            mode: FormMode::Add,
            draft: Draft::with_defaults(R::fields(), clock.now()),
            original: None,
        }
    }

    /// Populates the draft from `record`. Choice values outside the current
    /// option sets fall back to the first option.
    pub fn open_edit(record: &R) -> Self {
        let mut draft = record.to_draft();
        let corrected = draft.reconcile_choices(R::fields());
        if !corrected.is_empty() {
            debug!(
                kind = %R::KIND,
                id = %record.id(),
                fields = ?corrected,
                "Replaced unrecognized choice values"
            );
        }
        Self {
            mode: FormMode::Edit(record.id()),
            draft,
            original: Some(record.clone()),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn original(&self) -> Option<&R> {
        self.original.as_ref()
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        R::fields()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    /// Merges submitted values into the draft; nothing changes on error.
    pub fn apply(&mut self, values: &Map<String, Value>) -> Result<(), ValidationErrors> {
        self.draft.apply_json(R::fields(), values)
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate(R::fields(), &self.draft)
    }

    /// Runs the save-gate, builds the record and upserts it.
    pub async fn save(self, store: &RecordStore<R>) -> Result<R, FormError<R>> {
        if let Err(errors) = self.validate() {
            debug!(kind = %R::KIND, count = errors.errors.len(), "Save refused");
            return Err(FormError::Invalid {
                form: Box::new(self),
                errors,
            });
        }

        let id = match self.mode {
            FormMode::Add => Uuid::new_v4(),
            FormMode::Edit(id) => id,
        };
        let record = match R::from_draft(id, &self.draft) {
            Ok(record) => record,
            Err(errors) => {
                return Err(FormError::Invalid {
                    form: Box::new(self),
                    errors,
                });
            }
        };

        match store.upsert(record.clone()).await {
            Ok(outcome) => {
                info!(
                    kind = %R::KIND,
                    id = %id,
                    created = outcome == UpsertOutcome::Inserted,
                    "Saved record"
                );
                Ok(record)
            }
            Err(source) => Err(FormError::Persist { record, source }),
        }
    }

    /// Discards the draft.
    pub fn cancel(self) {
        debug!(kind = %R::KIND, mode = ?self.mode, "Form cancelled");
    }

    pub fn view(&self) -> FormView {
        FormView {
            mode: self.mode.as_str(),
            id: self.mode.id(),
            fields: R::fields(),
            draft: self.draft.clone(),
        }
    }
}

/// Serializable state of an open form.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub mode: &'static str,
    pub id: Option<Uuid>,
    pub fields: &'static [FieldSpec],
    pub draft: Draft,
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use db::{
        models::{cleaning_log::CleaningLog, order::Order},
        storage::MemoryStorage,
    };
    use serde_json::json;

    use super::*;
    use crate::services::clock::FixedClock;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap())
    }

    fn order_values() -> Map<String, Value> {
        json!({
            "customer_name": "Jorge Rivera",
            "filling_type": "Vegetarian",
            "quantity_ordered": 12,
            "total_amount": "30",
            "order_taken_by": "Manuel",
            "estimated_prep_time_minutes": 45,
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[tokio::test]
    async fn test_refused_save_leaves_store_untouched() {
        let store = RecordStore::<Order>::open_default(Arc::new(MemoryStorage::new())).await;
        let mut form = FormController::<Order>::open_add(&clock());
        form.apply(&order_values()).unwrap();
        form.draft_mut().set_text("customer_name", "  ");

        let Err(FormError::Invalid { form, errors }) = form.save(&store).await else {
            panic!("save should be refused");
        };
        assert!(errors.for_field("customer_name").is_some());
        assert_eq!(store.len(), 0);

        let mut form = *form;
        form.draft_mut().set_text("customer_name", "Jorge Rivera");
        let saved = form.save(&store).await.unwrap();
        assert_eq!(store.list(), vec![saved]);
    }

    #[tokio::test]
    async fn test_edit_keeps_identifier_and_position() {
        let store = RecordStore::<Order>::open_default(Arc::new(MemoryStorage::new())).await;
        let mut first = FormController::<Order>::open_add(&clock());
        first.apply(&order_values()).unwrap();
        let first = first.save(&store).await.unwrap();

        let mut second = FormController::<Order>::open_add(&clock());
        second.apply(&order_values()).unwrap();
        let second = second.save(&store).await.unwrap();
        assert_ne!(first.id, second.id);

        let mut edit = FormController::open_edit(&first);
        assert_eq!(edit.mode(), FormMode::Edit(first.id));
        edit.apply(json!({"payment_status": "Paid"}).as_object().unwrap())
            .unwrap();
        let edited = edit.save(&store).await.unwrap();

        assert_eq!(edited.id, first.id);
        assert_eq!(edited.payment_status, "Paid");
        assert_eq!(store.list(), vec![edited, second]);
    }

    #[tokio::test]
    async fn test_edit_falls_back_on_stale_choice() {
        let store =
            RecordStore::<CleaningLog>::open_default(Arc::new(MemoryStorage::new())).await;
        let mut form = FormController::<CleaningLog>::open_add(&clock());
        form.apply(
            json!({
                "equipment_name": "Tamale Steamer Unit A",
                "cleaned_by": "Lupita",
                "cleaning_products_used": "SteamJet",
                "approved_by": "Ana",
                "cleaning_duration_minutes": 40,
                "cleaning_frequency_days": 7,
            })
            .as_object()
            .unwrap(),
        )
        .unwrap();
        let mut log = form.save(&store).await.unwrap();
        log.sanitation_level = "Extreme".to_string();
        log.equipment_material = "Aluminum".to_string();

        let form = FormController::open_edit(&log);
        assert_eq!(form.draft().text("sanitation_level"), "High");
        assert_eq!(form.draft().text("equipment_material"), "Aluminum");
        assert_eq!(form.original(), Some(&log));
    }

    #[tokio::test]
    async fn test_cancel_discards_draft() {
        let store = RecordStore::<Order>::open_default(Arc::new(MemoryStorage::new())).await;
        let mut form = FormController::<Order>::open_add(&clock());
        form.apply(&order_values()).unwrap();
        form.cancel();
        assert!(store.is_empty());
    }

    #[test]
    fn test_rejected_apply_changes_nothing() {
        let mut form = FormController::<Order>::open_add(&clock());
        let err = form
            .apply(json!({"is_repeat_customer": "yes", "customer_name": "Ana"}).as_object().unwrap())
            .unwrap_err();
        assert!(err.for_field("is_repeat_customer").is_some());
        assert_eq!(form.draft().text("customer_name"), "");
    }

    #[test]
    fn test_view_serializes_mode() {
        let form = FormController::<Order>::open_add(&clock());
        let view = serde_json::to_value(form.view()).unwrap();
        assert_eq!(view["mode"], "add");
        assert!(view["id"].is_null());
        assert_eq!(view["draft"]["payment_status"], "Pending");
    }
}
