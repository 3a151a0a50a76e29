use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::VariantNames;
use ts_rs::TS;
use uuid::Uuid;

use super::options::{EquipmentMaterial, SanitationLevel};
use crate::{
    record::{Record, RecordCard, RecordKind},
    schema::{Draft, FieldDefault, FieldSpec, ValidationErrors},
};

/// Days ahead the next cleaning is scheduled when a log is started.
pub const DEFAULT_CLEANING_INTERVAL_DAYS: u64 = 5;

/// A cleaning event for one piece of equipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct CleaningLog {
    pub id: Uuid,
    pub equipment_name: String,
    pub cleaned_date: DateTime<Utc>,
    pub cleaned_by: String,
    pub cleaning_products_used: String,
    pub sanitation_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues_found: Option<String>,
    pub is_sanitized: bool,
    pub requires_repairs: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repair_notes: Option<String>,
    pub cleaning_duration_minutes: i32,
    pub next_scheduled_cleaning: DateTime<Utc>,
    pub approved_by: String,
    pub cleaning_frequency_days: i32,
    pub equipment_material: String,
    /// No odor after cleaning.
    pub post_clean_smell_check: bool,
    pub temp_check_passed: bool,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("equipment_name", "Equipment Name").mandatory(),
    FieldSpec::date("cleaned_date", "Cleaned Date"),
    FieldSpec::text("cleaned_by", "Cleaned By").mandatory(),
    FieldSpec::text("cleaning_products_used", "Cleaning Products Used").mandatory(),
    FieldSpec::choice("sanitation_level", "Sanitation Level", SanitationLevel::VARIANTS),
    FieldSpec::text("issues_found", "Issues Found").nullable(),
    FieldSpec::flag("is_sanitized", "Sanitized", true),
    FieldSpec::flag("requires_repairs", "Requires Repairs", false),
    FieldSpec::text("repair_notes", "Repair Notes").nullable(),
    FieldSpec::integer("cleaning_duration_minutes", "Cleaning Duration (min)"),
    FieldSpec::date("next_scheduled_cleaning", "Next Scheduled Cleaning")
        .defaulting_to(FieldDefault::DaysFromNow(DEFAULT_CLEANING_INTERVAL_DAYS)),
    FieldSpec::text("approved_by", "Approved By").mandatory(),
    FieldSpec::integer("cleaning_frequency_days", "Cleaning Frequency (days)"),
    FieldSpec::choice(
        "equipment_material",
        "Equipment Material",
        EquipmentMaterial::VARIANTS,
    ),
    FieldSpec::flag("post_clean_smell_check", "Smell Check Passed", true),
    FieldSpec::flag("temp_check_passed", "Temperature Check Passed", true),
];

impl Record for CleaningLog {
    const KIND: RecordKind = RecordKind::CleaningLog;

    fn id(&self) -> Uuid {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn to_draft(&self) -> Draft {
        Draft::new()
            .with_text("equipment_name", &self.equipment_name)
            .with_date("cleaned_date", Some(self.cleaned_date))
            .with_text("cleaned_by", &self.cleaned_by)
            .with_text("cleaning_products_used", &self.cleaning_products_used)
            .with_text("sanitation_level", &self.sanitation_level)
            .with_optional_text("issues_found", self.issues_found.as_deref())
            .with_flag("is_sanitized", self.is_sanitized)
            .with_flag("requires_repairs", self.requires_repairs)
            .with_optional_text("repair_notes", self.repair_notes.as_deref())
            .with_number("cleaning_duration_minutes", self.cleaning_duration_minutes)
            .with_date("next_scheduled_cleaning", Some(self.next_scheduled_cleaning))
            .with_text("approved_by", &self.approved_by)
            .with_number("cleaning_frequency_days", self.cleaning_frequency_days)
            .with_text("equipment_material", &self.equipment_material)
            .with_flag("post_clean_smell_check", self.post_clean_smell_check)
            .with_flag("temp_check_passed", self.temp_check_passed)
    }

    fn from_draft(id: Uuid, draft: &Draft) -> Result<Self, ValidationErrors> {
        let mut r = draft.reader();
        let log = CleaningLog {
            id,
            equipment_name: r.text("equipment_name"),
            cleaned_date: r.date("cleaned_date"),
            cleaned_by: r.text("cleaned_by"),
            cleaning_products_used: r.text("cleaning_products_used"),
            sanitation_level: r.text("sanitation_level"),
            issues_found: r.optional_text("issues_found"),
            is_sanitized: r.flag("is_sanitized"),
            requires_repairs: r.flag("requires_repairs"),
            repair_notes: r.optional_text("repair_notes"),
            cleaning_duration_minutes: r.integer("cleaning_duration_minutes"),
            next_scheduled_cleaning: r.date("next_scheduled_cleaning"),
            approved_by: r.text("approved_by"),
            cleaning_frequency_days: r.integer("cleaning_frequency_days"),
            equipment_material: r.text("equipment_material"),
            post_clean_smell_check: r.flag("post_clean_smell_check"),
            temp_check_passed: r.flag("temp_check_passed"),
        };
        r.finish(log)
    }

    fn card(&self) -> RecordCard {
        RecordCard::new(self.id, &self.equipment_name)
            .subtitle(self.cleaned_date.format("%b %-d, %Y").to_string())
            .subtitle(&self.cleaned_by)
            .subtitle(&self.sanitation_level)
            .subtitle(&self.equipment_material)
            .metric(format!("{} min", self.cleaning_duration_minutes))
            .metric(format!("{} days", self.cleaning_frequency_days))
            .metric(if self.requires_repairs {
                "Repairs: Yes"
            } else {
                "Repairs: No"
            })
            .note_opt("Issue: ", self.issues_found.as_deref())
            .note_opt("Repair: ", self.repair_notes.as_deref())
            .note_if(!self.post_clean_smell_check, "Odor Detected")
            .note_if(!self.temp_check_passed, "Temp Check Failed")
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::schema::validate;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_add_defaults_schedule_and_checks() {
        let draft = Draft::with_defaults(CleaningLog::fields(), now());
        assert_eq!(
            draft.date("next_scheduled_cleaning"),
            Some(Utc.with_ymd_and_hms(2026, 10, 24, 12, 0, 0).unwrap())
        );
        assert!(draft.flag("is_sanitized"));
        assert!(!draft.flag("requires_repairs"));
        assert!(draft.flag("temp_check_passed"));
        assert_eq!(draft.text("sanitation_level"), "High");
    }

    #[test]
    fn test_all_four_names_are_required() {
        let draft = Draft::with_defaults(CleaningLog::fields(), now())
            .with_text("cleaning_duration_minutes", "20")
            .with_text("cleaning_frequency_days", "7");
        let errors = validate(CleaningLog::fields(), &draft).unwrap_err();
        let fields: Vec<&str> = errors.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "equipment_name",
                "cleaned_by",
                "cleaning_products_used",
                "approved_by"
            ]
        );
    }

    #[test]
    fn test_card_flags_failed_checks() {
        let draft = Draft::with_defaults(CleaningLog::fields(), now())
            .with_text("equipment_name", "Mixing Bowl Station B")
            .with_text("cleaned_by", "Pedro")
            .with_text("cleaning_products_used", "Vinegar solution")
            .with_text("approved_by", "Rosa")
            .with_text("cleaning_duration_minutes", "20")
            .with_text("cleaning_frequency_days", "5")
            .with_text("repair_notes", "Replace gasket")
            .with_flag("requires_repairs", true)
            .with_flag("temp_check_passed", false);
        let log = CleaningLog::from_draft(Uuid::new_v4(), &draft).unwrap();
        let card = log.card();
        assert_eq!(card.metrics, vec!["20 min", "5 days", "Repairs: Yes"]);
        assert_eq!(card.notes, vec!["Repair: Replace gasket", "Temp Check Failed"]);
        assert_eq!(CleaningLog::from_draft(log.id, &log.to_draft()).unwrap(), log);
    }
}
