use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::VariantNames;
use ts_rs::TS;
use uuid::Uuid;

use super::options::{ReorderStatus, StockUnit};
use crate::{
    record::{Record, RecordCard, RecordKind},
    schema::{Draft, FieldSpec, ValidationErrors},
};

/// An ingredient on hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct StockItem {
    pub id: Uuid,
    pub name: String,
    pub quantity_available: f64,
    pub unit: String,
    pub is_perishable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_name: Option<String>,
    pub restock_threshold: f64,
    pub auto_reorder_enabled: bool,
    pub last_restocked_date: DateTime<Utc>,
    pub received_by: String,
    pub storage_location: String,
    pub reorder_status: String,
    pub cost_per_unit: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_notes: Option<String>,
    pub organic_certified: bool,
    pub batch_lot_code: String,
    pub stock_verified_by: String,
    pub moisture_sensitive: bool,
}

impl StockItem {
    /// At or below its restock threshold.
    pub fn is_low(&self) -> bool {
        self.quantity_available <= self.restock_threshold
    }
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Name").mandatory(),
    FieldSpec::decimal("quantity_available", "Quantity Available"),
    FieldSpec::choice("unit", "Unit", StockUnit::VARIANTS),
    FieldSpec::flag("is_perishable", "Perishable", false),
    FieldSpec::optional_date("expiry_date", "Expiry Date"),
    FieldSpec::text("supplier_name", "Supplier").nullable(),
    FieldSpec::decimal("restock_threshold", "Restock Threshold"),
    FieldSpec::flag("auto_reorder_enabled", "Auto Reorder", false),
    FieldSpec::date("last_restocked_date", "Last Restocked"),
    FieldSpec::text("received_by", "Received By").mandatory(),
    FieldSpec::text("storage_location", "Storage Location"),
    FieldSpec::choice("reorder_status", "Reorder Status", ReorderStatus::VARIANTS),
    FieldSpec::decimal("cost_per_unit", "Cost per Unit"),
    FieldSpec::text("stock_notes", "Notes").nullable(),
    FieldSpec::flag("organic_certified", "Organic Certified", false),
    FieldSpec::text("batch_lot_code", "Batch/Lot Code"),
    FieldSpec::text("stock_verified_by", "Verified By"),
    FieldSpec::flag("moisture_sensitive", "Moisture Sensitive", false),
];

impl Record for StockItem {
    const KIND: RecordKind = RecordKind::StockItem;

    fn id(&self) -> Uuid {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn to_draft(&self) -> Draft {
        Draft::new()
            .with_text("name", &self.name)
            .with_number("quantity_available", self.quantity_available)
            .with_text("unit", &self.unit)
            .with_flag("is_perishable", self.is_perishable)
            .with_date("expiry_date", self.expiry_date)
            .with_optional_text("supplier_name", self.supplier_name.as_deref())
            .with_number("restock_threshold", self.restock_threshold)
            .with_flag("auto_reorder_enabled", self.auto_reorder_enabled)
            .with_date("last_restocked_date", Some(self.last_restocked_date))
            .with_text("received_by", &self.received_by)
            .with_text("storage_location", &self.storage_location)
            .with_text("reorder_status", &self.reorder_status)
            .with_number("cost_per_unit", self.cost_per_unit)
            .with_optional_text("stock_notes", self.stock_notes.as_deref())
            .with_flag("organic_certified", self.organic_certified)
            .with_text("batch_lot_code", &self.batch_lot_code)
            .with_text("stock_verified_by", &self.stock_verified_by)
            .with_flag("moisture_sensitive", self.moisture_sensitive)
    }

    fn from_draft(id: Uuid, draft: &Draft) -> Result<Self, ValidationErrors> {
        let mut r = draft.reader();
        let item = StockItem {
            id,
            name: r.text("name"),
            quantity_available: r.decimal("quantity_available"),
            unit: r.text("unit"),
            is_perishable: r.flag("is_perishable"),
            expiry_date: r.optional_date("expiry_date"),
            supplier_name: r.optional_text("supplier_name"),
            restock_threshold: r.decimal("restock_threshold"),
            auto_reorder_enabled: r.flag("auto_reorder_enabled"),
            last_restocked_date: r.date("last_restocked_date"),
            received_by: r.text("received_by"),
            storage_location: r.text("storage_location"),
            reorder_status: r.text("reorder_status"),
            cost_per_unit: r.decimal("cost_per_unit"),
            stock_notes: r.optional_text("stock_notes"),
            organic_certified: r.flag("organic_certified"),
            batch_lot_code: r.text("batch_lot_code"),
            stock_verified_by: r.text("stock_verified_by"),
            moisture_sensitive: r.flag("moisture_sensitive"),
        };
        r.finish(item)
    }

    fn card(&self) -> RecordCard {
        let lot = Some(self.batch_lot_code.as_str()).filter(|code| !code.trim().is_empty());
        RecordCard::new(self.id, &self.name)
            .subtitle(self.last_restocked_date.format("%b %-d, %Y").to_string())
            .subtitle(&self.received_by)
            .subtitle(&self.storage_location)
            .subtitle(&self.reorder_status)
            .metric(format!("{:.1} {}", self.quantity_available, self.unit))
            .metric(format!("${:.2}", self.cost_per_unit))
            .metric(format!("Threshold {:.1}", self.restock_threshold))
            .note_opt("Notes: ", self.stock_notes.as_deref())
            .note_opt("Lot: ", lot)
            .note_if(self.moisture_sensitive, "Moisture Sensitive")
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::schema::validate;

    fn draft() -> Draft {
        Draft::with_defaults(
            StockItem::fields(),
            Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap(),
        )
        .with_text("name", "Corn Flour")
        .with_text("quantity_available", "25")
        .with_text("restock_threshold", "5")
        .with_text("received_by", "Ana")
        .with_text("cost_per_unit", "1.8")
        .with_text("batch_lot_code", "CF-0327")
    }

    #[test]
    fn test_low_stock_includes_threshold() {
        let mut item = StockItem::from_draft(Uuid::new_v4(), &draft()).unwrap();
        assert!(!item.is_low());
        item.quantity_available = 5.0;
        assert!(item.is_low());
    }

    #[test]
    fn test_mandatory_text_and_numbers_gate_save() {
        let draft = draft()
            .with_text("received_by", "")
            .with_text("quantity_available", "lots");
        let errors = validate(StockItem::fields(), &draft).unwrap_err();
        assert!(errors.for_field("received_by").is_some());
        assert!(errors.for_field("quantity_available").is_some());
        assert_eq!(errors.errors.len(), 2);
    }

    #[test]
    fn test_card_formats_quantities() {
        let item = StockItem::from_draft(Uuid::new_v4(), &draft()).unwrap();
        let card = item.card();
        assert_eq!(card.metrics, vec!["25.0 kg", "$1.80", "Threshold 5.0"]);
        assert_eq!(card.notes, vec!["Lot: CF-0327"]);
        assert_eq!(card.subtitle[3], "Stock OK");
    }
}
