use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::VariantNames;
use ts_rs::TS;
use uuid::Uuid;

use super::options::{CookingMethod, LeafWrapping, RegionalStyle, SpiceLevel, WrappingSource};
use crate::{
    record::{Record, RecordCard, RecordKind},
    schema::{Draft, FieldSpec, ValidationErrors},
};

/// One production run of tamales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct Batch {
    pub id: Uuid,
    pub date_prepared: DateTime<Utc>,
    pub filling_type: String,
    pub quantity_made: i32,
    pub preparation_time_minutes: i32,
    pub masa_brand: String,
    /// e.g. "2:1 Water:Masa"
    pub masa_hydration_ratio: String,
    pub wrapping_type: String,
    pub spice_level: String,
    pub cooking_method: String,
    pub cook_duration_minutes: i32,
    pub batch_supervisor: String,
    pub taste_tested: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_notes: Option<String>,
    #[serde(default)]
    pub allergens: Vec<String>,
    pub is_for_preorder: bool,
    pub shelf_life_days: i32,
    pub regional_style: String,
    pub wrapping_source: String,
    pub humidity_level_during_prep: f64,
    pub electricity_used_kwh: f64,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::date("date_prepared", "Date Prepared"),
    FieldSpec::text("filling_type", "Filling Type").mandatory(),
    FieldSpec::integer("quantity_made", "Quantity Made"),
    FieldSpec::integer("preparation_time_minutes", "Preparation Time (min)"),
    FieldSpec::text("masa_brand", "Masa Brand"),
    FieldSpec::text("masa_hydration_ratio", "Masa Hydration Ratio"),
    FieldSpec::choice("wrapping_type", "Wrapping Type", LeafWrapping::VARIANTS),
    FieldSpec::choice("spice_level", "Spice Level", SpiceLevel::VARIANTS),
    FieldSpec::choice("cooking_method", "Cooking Method", CookingMethod::VARIANTS),
    FieldSpec::integer("cook_duration_minutes", "Cook Duration (min)"),
    FieldSpec::text("batch_supervisor", "Batch Supervisor").mandatory(),
    FieldSpec::flag("taste_tested", "Taste Tested", false),
    FieldSpec::text("quality_notes", "Quality Notes").nullable(),
    FieldSpec::tags("allergens", "Allergens"),
    FieldSpec::flag("is_for_preorder", "For Preorder", false),
    FieldSpec::integer("shelf_life_days", "Shelf Life (days)"),
    FieldSpec::choice("regional_style", "Regional Style", RegionalStyle::VARIANTS),
    FieldSpec::choice("wrapping_source", "Wrapping Source", WrappingSource::VARIANTS),
    FieldSpec::decimal("humidity_level_during_prep", "Humidity During Prep (%)"),
    FieldSpec::decimal("electricity_used_kwh", "Electricity Used (kWh)"),
];

impl Record for Batch {
    const KIND: RecordKind = RecordKind::Batch;

    fn id(&self) -> Uuid {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn to_draft(&self) -> Draft {
        Draft::new()
            .with_date("date_prepared", Some(self.date_prepared))
            .with_text("filling_type", &self.filling_type)
            .with_number("quantity_made", self.quantity_made)
            .with_number("preparation_time_minutes", self.preparation_time_minutes)
            .with_text("masa_brand", &self.masa_brand)
            .with_text("masa_hydration_ratio", &self.masa_hydration_ratio)
            .with_text("wrapping_type", &self.wrapping_type)
            .with_text("spice_level", &self.spice_level)
            .with_text("cooking_method", &self.cooking_method)
            .with_number("cook_duration_minutes", self.cook_duration_minutes)
            .with_text("batch_supervisor", &self.batch_supervisor)
            .with_flag("taste_tested", self.taste_tested)
            .with_optional_text("quality_notes", self.quality_notes.as_deref())
            .with_tags("allergens", &self.allergens)
            .with_flag("is_for_preorder", self.is_for_preorder)
            .with_number("shelf_life_days", self.shelf_life_days)
            .with_text("regional_style", &self.regional_style)
            .with_text("wrapping_source", &self.wrapping_source)
            .with_number("humidity_level_during_prep", self.humidity_level_during_prep)
            .with_number("electricity_used_kwh", self.electricity_used_kwh)
    }

    fn from_draft(id: Uuid, draft: &Draft) -> Result<Self, ValidationErrors> {
        let mut r = draft.reader();
        let batch = Batch {
            id,
            date_prepared: r.date("date_prepared"),
            filling_type: r.text("filling_type"),
            quantity_made: r.integer("quantity_made"),
            preparation_time_minutes: r.integer("preparation_time_minutes"),
            masa_brand: r.text("masa_brand"),
            masa_hydration_ratio: r.text("masa_hydration_ratio"),
            wrapping_type: r.text("wrapping_type"),
            spice_level: r.text("spice_level"),
            cooking_method: r.text("cooking_method"),
            cook_duration_minutes: r.integer("cook_duration_minutes"),
            batch_supervisor: r.text("batch_supervisor"),
            taste_tested: r.flag("taste_tested"),
            quality_notes: r.optional_text("quality_notes"),
            allergens: r.tags("allergens"),
            is_for_preorder: r.flag("is_for_preorder"),
            shelf_life_days: r.integer("shelf_life_days"),
            regional_style: r.text("regional_style"),
            wrapping_source: r.text("wrapping_source"),
            humidity_level_during_prep: r.decimal("humidity_level_during_prep"),
            electricity_used_kwh: r.decimal("electricity_used_kwh"),
        };
        r.finish(batch)
    }

    fn card(&self) -> RecordCard {
        RecordCard::new(self.id, &self.filling_type)
            .subtitle(self.date_prepared.format("%b %-d, %Y").to_string())
            .subtitle(&self.batch_supervisor)
            .subtitle(&self.spice_level)
            .subtitle(&self.cooking_method)
            .metric(format!("{} made", self.quantity_made))
            .metric(format!("{} min", self.cook_duration_minutes))
            .metric(format!("{} days", self.shelf_life_days))
            .note_if(
                !self.allergens.is_empty(),
                format!("Allergens: {}", self.allergens.join(", ")),
            )
    }
}
