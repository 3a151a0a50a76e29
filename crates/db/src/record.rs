use std::fmt::Debug;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use strum_macros::{Display, EnumIter, EnumString};
use ts_rs::TS;
use uuid::Uuid;

use crate::schema::{Draft, FieldSpec, ValidationErrors};

/// The four independent operational logs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS, EnumString, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RecordKind {
    Batch,
    Order,
    StockItem,
    CleaningLog,
}

impl RecordKind {
    /// Storage slot used when no explicit key is configured.
    pub fn default_storage_key(&self) -> &'static str {
        match self {
            RecordKind::Batch => "TamaleBatchLogEntries",
            RecordKind::Order => "TamaleOrderEntries",
            RecordKind::StockItem => "IngredientStockEntries",
            RecordKind::CleaningLog => "EquipmentCleaningLogEntries",
        }
    }

    pub fn tab_label(&self) -> &'static str {
        match self {
            RecordKind::Batch => "Batches",
            RecordKind::Order => "Orders",
            RecordKind::StockItem => "Ingredients",
            RecordKind::CleaningLog => "Cleaning",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            RecordKind::Batch => "No tamale batches yet. Tap + to add a new one.",
            RecordKind::Order => "No tamale orders yet. Tap + to add a new one.",
            RecordKind::StockItem => "No ingredient stock yet. Tap + to add a new item.",
            RecordKind::CleaningLog => "No cleaning logs yet. Tap + to add a new one.",
        }
    }
}

/// Summary of one record as shown in its list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct RecordCard {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Vec<String>,
    pub metrics: Vec<String>,
    pub notes: Vec<String>,
}

impl RecordCard {
    pub fn new(id: Uuid, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            subtitle: Vec::new(),
            metrics: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn subtitle(mut self, line: impl Into<String>) -> Self {
        self.subtitle.push(line.into());
        self
    }

    pub fn metric(mut self, line: impl Into<String>) -> Self {
        self.metrics.push(line.into());
        self
    }

    pub fn note_if(mut self, condition: bool, line: impl Into<String>) -> Self {
        if condition {
            self.notes.push(line.into());
        }
        self
    }

    pub fn note_opt(mut self, prefix: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.notes.push(format!("{prefix}{value}"));
        }
        self
    }
}

/// A persisted entity of one log variant.
///
/// Records are only built from a validated [`Draft`]; `to_draft` is the
/// inverse used to open an edit session.
pub trait Record:
    Clone + Debug + PartialEq + Send + Sync + Serialize + DeserializeOwned + 'static
{
    const KIND: RecordKind;

    fn id(&self) -> Uuid;

    /// Ordered form schema.
    fn fields() -> &'static [FieldSpec];

    fn to_draft(&self) -> Draft;

    fn from_draft(id: Uuid, draft: &Draft) -> Result<Self, ValidationErrors>;

    fn card(&self) -> RecordCard;
}
