//! Field schemas, drafts and the save-gate shared by every record variant.

use std::collections::BTreeMap;

use chrono::{DateTime, Days, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "options", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
    Flag,
    Date,
    OptionalDate,
    /// One of a fixed set of display strings.
    Choice(&'static [&'static str]),
    Tags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// Text must be non-blank, numbers must parse, dates must be set.
    Mandatory,
    /// Stored verbatim, may be empty.
    Free,
    /// Blank becomes absent.
    Nullable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldDefault {
    Blank,
    Text(&'static str),
    Flag(bool),
    Now,
    DaysFromNow(u64),
    FirstOption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub requirement: Requirement,
    pub default: FieldDefault,
}

impl FieldSpec {
    const fn new(
        name: &'static str,
        label: &'static str,
        kind: FieldKind,
        requirement: Requirement,
        default: FieldDefault,
    ) -> Self {
        Self {
            name,
            label,
            kind,
            requirement,
            default,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text, Requirement::Free, FieldDefault::Blank)
    }

    pub const fn integer(name: &'static str, label: &'static str) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Integer,
            Requirement::Mandatory,
            FieldDefault::Blank,
        )
    }

    pub const fn decimal(name: &'static str, label: &'static str) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Decimal,
            Requirement::Mandatory,
            FieldDefault::Blank,
        )
    }

    pub const fn flag(name: &'static str, label: &'static str, default: bool) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Flag,
            Requirement::Free,
            FieldDefault::Flag(default),
        )
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Date,
            Requirement::Mandatory,
            FieldDefault::Now,
        )
    }

    pub const fn optional_date(name: &'static str, label: &'static str) -> Self {
        Self::new(
            name,
            label,
            FieldKind::OptionalDate,
            Requirement::Nullable,
            FieldDefault::Blank,
        )
    }

    pub const fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Choice(options),
            Requirement::Mandatory,
            FieldDefault::FirstOption,
        )
    }

    pub const fn tags(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Tags, Requirement::Free, FieldDefault::Blank)
    }

    pub const fn mandatory(self) -> Self {
        Self {
            requirement: Requirement::Mandatory,
            ..self
        }
    }

    pub const fn nullable(self) -> Self {
        Self {
            requirement: Requirement::Nullable,
            ..self
        }
    }

    pub const fn defaulting_to(self, default: FieldDefault) -> Self {
        Self { default, ..self }
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self.kind {
            FieldKind::Choice(options) => options,
            _ => &[],
        }
    }

    /// The add-mode value of this field.
    pub fn default_value(&self, now: DateTime<Utc>) -> FieldValue {
        match (self.kind, self.default) {
            (FieldKind::Flag, FieldDefault::Flag(value)) => FieldValue::Flag(value),
            (FieldKind::Flag, _) => FieldValue::Flag(false),
            (FieldKind::Tags, _) => FieldValue::Tags(Vec::new()),
            (FieldKind::Date | FieldKind::OptionalDate, FieldDefault::Now) => {
                FieldValue::Date(Some(now))
            }
            (FieldKind::Date | FieldKind::OptionalDate, FieldDefault::DaysFromNow(days)) => {
                FieldValue::Date(now.checked_add_days(Days::new(days)).or(Some(now)))
            }
            (FieldKind::Date, _) => FieldValue::Date(Some(now)),
            (FieldKind::OptionalDate, _) => FieldValue::Date(None),
            (FieldKind::Choice(options), FieldDefault::FirstOption) => {
                FieldValue::Text(options.first().copied().unwrap_or_default().to_string())
            }
            (_, FieldDefault::Text(value)) => FieldValue::Text(value.to_string()),
            _ => FieldValue::Text(String::new()),
        }
    }
}

pub fn find_field<'a>(fields: &'a [FieldSpec], name: &str) -> Option<&'a FieldSpec> {
    fields.iter().find(|spec| spec.name == name)
}

/// One draft value. Numeric entries are held as text until save.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Date(Option<DateTime<Utc>>),
    Tags(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(field, message)],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field == field)
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn parse_integer(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}

fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Mutable field values of one record being edited.
#[derive(Debug, Clone, PartialEq, Default, Serialize, TS)]
pub struct Draft(BTreeMap<String, FieldValue>);

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add-mode draft: every field takes its schema default.
    pub fn with_defaults(fields: &[FieldSpec], now: DateTime<Utc>) -> Self {
        Self(
            fields
                .iter()
                .map(|spec| (spec.name.to_string(), spec.default_value(now)))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn set(&mut self, name: &str, value: FieldValue) {
        self.0.insert(name.to_string(), value);
    }

    pub fn with_text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, FieldValue::Text(value.into()));
        self
    }

    /// Numbers are staged as their text entry.
    pub fn with_number(self, name: &str, value: impl ToString) -> Self {
        self.with_text(name, value.to_string())
    }

    pub fn with_optional_text(self, name: &str, value: Option<&str>) -> Self {
        self.with_text(name, value.unwrap_or_default())
    }

    pub fn with_flag(mut self, name: &str, value: bool) -> Self {
        self.set(name, FieldValue::Flag(value));
        self
    }

    pub fn with_date(mut self, name: &str, value: Option<DateTime<Utc>>) -> Self {
        self.set(name, FieldValue::Date(value));
        self
    }

    pub fn with_tags(mut self, name: &str, value: &[String]) -> Self {
        self.set(name, FieldValue::Tags(value.to_vec()));
        self
    }

    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        self.set(name, FieldValue::Text(value.into()));
    }

    pub fn set_flag(&mut self, name: &str, value: bool) {
        self.set(name, FieldValue::Flag(value));
    }

    pub fn set_date(&mut self, name: &str, value: Option<DateTime<Utc>>) {
        self.set(name, FieldValue::Date(value));
    }

    pub fn text(&self, name: &str) -> &str {
        match self.0.get(name) {
            Some(FieldValue::Text(value)) => value,
            _ => "",
        }
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.0.get(name), Some(FieldValue::Flag(true)))
    }

    pub fn date(&self, name: &str) -> Option<DateTime<Utc>> {
        match self.0.get(name) {
            Some(FieldValue::Date(value)) => *value,
            _ => None,
        }
    }

    pub fn tags(&self, name: &str) -> &[String] {
        match self.0.get(name) {
            Some(FieldValue::Tags(values)) => values,
            _ => &[],
        }
    }

    /// Appends a trimmed tag. Blank input is ignored.
    pub fn add_tag(&mut self, name: &str, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() {
            return false;
        }
        match self.0.get_mut(name) {
            Some(FieldValue::Tags(values)) => values.push(tag.to_string()),
            _ => self.set(name, FieldValue::Tags(vec![tag.to_string()])),
        }
        true
    }

    /// Removes the first occurrence of `tag`.
    pub fn remove_tag(&mut self, name: &str, tag: &str) -> bool {
        let Some(FieldValue::Tags(values)) = self.0.get_mut(name) else {
            return false;
        };
        match values.iter().position(|value| value == tag) {
            Some(index) => {
                values.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replaces choice values outside the recognized option set with the first option.
    /// Returns the names of the corrected fields.
    pub fn reconcile_choices(&mut self, fields: &[FieldSpec]) -> Vec<&'static str> {
        let mut corrected = Vec::new();
        for spec in fields {
            let FieldKind::Choice(options) = spec.kind else {
                continue;
            };
            let Some(first) = options.first() else {
                continue;
            };
            if !options.contains(&self.text(spec.name)) {
                self.set_text(spec.name, *first);
                corrected.push(spec.name);
            }
        }
        corrected
    }

    pub fn from_json(
        fields: &[FieldSpec],
        object: &Map<String, Value>,
    ) -> Result<Self, ValidationErrors> {
        let mut draft = Self::new();
        draft.apply_json(fields, object)?;
        Ok(draft)
    }

    /// Merges a submitted JSON object into the draft. Nothing is applied when
    /// any entry is rejected.
    pub fn apply_json(
        &mut self,
        fields: &[FieldSpec],
        object: &Map<String, Value>,
    ) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let mut staged = Vec::with_capacity(object.len());

        for (name, value) in object {
            let Some(spec) = find_field(fields, name) else {
                errors.push(FieldError::new(name.as_str(), "is not a known field"));
                continue;
            };
            match json_to_field_value(spec, value) {
                Ok(value) => staged.push((spec.name, value)),
                Err(message) => errors.push(FieldError::new(spec.name, message)),
            }
        }

        errors.into_result()?;
        for (name, value) in staged {
            self.set(name, value);
        }
        Ok(())
    }

    pub fn reader(&self) -> DraftReader<'_> {
        DraftReader {
            draft: self,
            errors: ValidationErrors::default(),
        }
    }
}

fn json_to_field_value(spec: &FieldSpec, value: &Value) -> Result<FieldValue, String> {
    match (spec.kind, value) {
        (FieldKind::Text | FieldKind::Choice(_), Value::String(text)) => {
            Ok(FieldValue::Text(text.clone()))
        }
        (FieldKind::Integer | FieldKind::Decimal, Value::String(text)) => {
            Ok(FieldValue::Text(text.clone()))
        }
        (FieldKind::Integer | FieldKind::Decimal, Value::Number(number)) => {
            Ok(FieldValue::Text(number.to_string()))
        }
        (
            FieldKind::Text | FieldKind::Choice(_) | FieldKind::Integer | FieldKind::Decimal,
            Value::Null,
        ) => Ok(FieldValue::Text(String::new())),
        (FieldKind::Flag, Value::Bool(flag)) => Ok(FieldValue::Flag(*flag)),
        (FieldKind::Date | FieldKind::OptionalDate, Value::Null) => Ok(FieldValue::Date(None)),
        (FieldKind::Date | FieldKind::OptionalDate, Value::String(text)) => {
            DateTime::parse_from_rfc3339(text)
                .map(|date| FieldValue::Date(Some(date.with_timezone(&Utc))))
                .map_err(|_| "must be an RFC 3339 timestamp".to_string())
        }
        (FieldKind::Tags, Value::Array(items)) => {
            let mut tags = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Value::String(tag) if !tag.trim().is_empty() => {
                        tags.push(tag.trim().to_string())
                    }
                    Value::String(_) => {}
                    _ => return Err("must be a list of strings".to_string()),
                }
            }
            Ok(FieldValue::Tags(tags))
        }
        (FieldKind::Flag, _) => Err("must be true or false".to_string()),
        (FieldKind::Tags, _) => Err("must be a list of strings".to_string()),
        (FieldKind::Date | FieldKind::OptionalDate, _) => {
            Err("must be an RFC 3339 timestamp".to_string())
        }
        _ => Err("must be a string".to_string()),
    }
}

/// The save-gate: every failure is reported, not just the first.
pub fn validate(fields: &[FieldSpec], draft: &Draft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    for spec in fields {
        let mandatory = spec.requirement == Requirement::Mandatory;
        match spec.kind {
            FieldKind::Text => {
                if mandatory && draft.text(spec.name).trim().is_empty() {
                    errors.push(FieldError::new(spec.name, format!("{} is required", spec.label)));
                }
            }
            FieldKind::Choice(options) => {
                let value = draft.text(spec.name);
                if value.trim().is_empty() {
                    if mandatory {
                        errors.push(FieldError::new(
                            spec.name,
                            format!("{} is required", spec.label),
                        ));
                    }
                } else if !options.contains(&value) {
                    errors.push(FieldError::new(
                        spec.name,
                        format!("{} must be one of: {}", spec.label, options.join(", ")),
                    ));
                }
            }
            FieldKind::Integer | FieldKind::Decimal => {
                let raw = draft.text(spec.name);
                if raw.trim().is_empty() {
                    if spec.requirement != Requirement::Nullable {
                        errors.push(FieldError::new(
                            spec.name,
                            format!("{} is required", spec.label),
                        ));
                    }
                    continue;
                }
                let parsed = match spec.kind {
                    FieldKind::Integer => parse_integer(raw).is_some(),
                    _ => parse_decimal(raw).is_some(),
                };
                if !parsed {
                    let expected = match spec.kind {
                        FieldKind::Integer => "a whole number",
                        _ => "a number",
                    };
                    errors.push(FieldError::new(
                        spec.name,
                        format!("{} must be {}", spec.label, expected),
                    ));
                }
            }
            FieldKind::Date => {
                if draft.date(spec.name).is_none() {
                    errors.push(FieldError::new(spec.name, format!("{} is required", spec.label)));
                }
            }
            FieldKind::Flag | FieldKind::OptionalDate | FieldKind::Tags => {}
        }
    }

    errors.into_result()
}

/// Typed access to a draft while building a record. Conversion failures are
/// collected and reported by [`DraftReader::finish`].
pub struct DraftReader<'a> {
    draft: &'a Draft,
    errors: ValidationErrors,
}

impl DraftReader<'_> {
    pub fn text(&mut self, name: &str) -> String {
        self.draft.text(name).to_string()
    }

    /// Blank text becomes `None`.
    pub fn optional_text(&mut self, name: &str) -> Option<String> {
        let value = self.draft.text(name);
        if value.trim().is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    pub fn integer(&mut self, name: &str) -> i32 {
        match parse_integer(self.draft.text(name)) {
            Some(value) => value,
            None => {
                self.errors
                    .push(FieldError::new(name, "must be a whole number"));
                0
            }
        }
    }

    pub fn optional_integer(&mut self, name: &str) -> Option<i32> {
        if self.draft.text(name).trim().is_empty() {
            return None;
        }
        Some(self.integer(name))
    }

    pub fn decimal(&mut self, name: &str) -> f64 {
        match parse_decimal(self.draft.text(name)) {
            Some(value) => value,
            None => {
                self.errors.push(FieldError::new(name, "must be a number"));
                0.0
            }
        }
    }

    pub fn flag(&mut self, name: &str) -> bool {
        self.draft.flag(name)
    }

    pub fn date(&mut self, name: &str) -> DateTime<Utc> {
        match self.draft.date(name) {
            Some(value) => value,
            None => {
                self.errors.push(FieldError::new(name, "is required"));
                DateTime::<Utc>::default()
            }
        }
    }

    pub fn optional_date(&mut self, name: &str) -> Option<DateTime<Utc>> {
        self.draft.date(name)
    }

    pub fn tags(&mut self, name: &str) -> Vec<String> {
        self.draft.tags(name).to_vec()
    }

    pub fn finish<T>(self, value: T) -> Result<T, ValidationErrors> {
        self.errors.into_result().map(|()| value)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    const LEVELS: &[&str] = &["High", "Moderate", "Low"];

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::text("name", "Name").mandatory(),
        FieldSpec::text("notes", "Notes").nullable(),
        FieldSpec::integer("minutes", "Minutes"),
        FieldSpec::integer("rating", "Rating").nullable(),
        FieldSpec::decimal("amount", "Amount"),
        FieldSpec::choice("level", "Level", LEVELS),
        FieldSpec::flag("checked", "Checked", true),
        FieldSpec::date("cleaned", "Cleaned"),
        FieldSpec::date("next", "Next").defaulting_to(FieldDefault::DaysFromNow(5)),
        FieldSpec::optional_date("expiry", "Expiry"),
        FieldSpec::tags("allergens", "Allergens"),
    ];

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn valid_draft() -> Draft {
        Draft::with_defaults(FIELDS, now())
            .with_text("name", "Steamer")
            .with_text("minutes", "40")
            .with_text("amount", "12.5")
    }

    #[test]
    fn test_defaults_follow_schema() {
        let draft = Draft::with_defaults(FIELDS, now());
        assert_eq!(draft.text("name"), "");
        assert_eq!(draft.text("level"), "High");
        assert!(draft.flag("checked"));
        assert_eq!(draft.date("cleaned"), Some(now()));
        assert_eq!(
            draft.date("next"),
            Some(Utc.with_ymd_and_hms(2026, 10, 24, 12, 0, 0).unwrap())
        );
        assert_eq!(draft.date("expiry"), None);
        assert!(draft.tags("allergens").is_empty());
    }

    #[test]
    fn test_validate_reports_every_failure() {
        let draft = Draft::with_defaults(FIELDS, now()).with_text("minutes", "forty");
        let errors = validate(FIELDS, &draft).unwrap_err();

        assert_eq!(
            errors.for_field("name").map(|e| e.message.as_str()),
            Some("Name is required")
        );
        assert_eq!(
            errors.for_field("minutes").map(|e| e.message.as_str()),
            Some("Minutes must be a whole number")
        );
        assert_eq!(
            errors.for_field("amount").map(|e| e.message.as_str()),
            Some("Amount is required")
        );
        assert!(errors.for_field("rating").is_none());
        assert!(errors.for_field("notes").is_none());
        assert_eq!(errors.errors.len(), 3);
    }

    #[test]
    fn test_validate_accepts_complete_draft() {
        assert!(validate(FIELDS, &valid_draft()).is_ok());
    }

    #[test]
    fn test_validate_rejects_whitespace_and_non_finite() {
        let draft = valid_draft()
            .with_text("name", "   ")
            .with_text("amount", "NaN")
            .with_text("rating", "4.5");
        let errors = validate(FIELDS, &draft).unwrap_err();
        assert!(errors.for_field("name").is_some());
        assert!(errors.for_field("amount").is_some());
        assert!(errors.for_field("rating").is_some());
    }

    #[test]
    fn test_validate_rejects_unknown_choice() {
        let draft = valid_draft().with_text("level", "Sparkling");
        let errors = validate(FIELDS, &draft).unwrap_err();
        assert_eq!(
            errors.for_field("level").map(|e| e.message.as_str()),
            Some("Level must be one of: High, Moderate, Low")
        );
    }

    #[test]
    fn test_reconcile_choices_falls_back_to_first_option() {
        let mut draft = valid_draft().with_text("level", "Extreme");
        assert_eq!(draft.reconcile_choices(FIELDS), vec!["level"]);
        assert_eq!(draft.text("level"), "High");

        let mut draft = valid_draft().with_text("level", "Low");
        assert!(draft.reconcile_choices(FIELDS).is_empty());
        assert_eq!(draft.text("level"), "Low");
    }

    #[test]
    fn test_reader_normalizes_blank_optionals() {
        let draft = valid_draft().with_text("notes", "  ").with_text("rating", "");
        let mut reader = draft.reader();
        assert_eq!(reader.optional_text("notes"), None);
        assert_eq!(reader.optional_integer("rating"), None);
        assert_eq!(reader.integer("minutes"), 40);
        assert_eq!(reader.decimal("amount"), 12.5);
        assert!(reader.finish(()).is_ok());
    }

    #[test]
    fn test_reader_collects_parse_failures() {
        let draft = valid_draft().with_text("minutes", "x");
        let mut reader = draft.reader();
        let _ = reader.integer("minutes");
        let errors = reader.finish(()).unwrap_err();
        assert_eq!(errors.errors, vec![FieldError::new("minutes", "must be a whole number")]);
    }

    #[test]
    fn test_tags_add_and_remove() {
        let mut draft = valid_draft();
        assert!(draft.add_tag("allergens", " Nuts "));
        assert!(!draft.add_tag("allergens", "   "));
        assert!(draft.add_tag("allergens", "Dairy"));
        assert_eq!(draft.tags("allergens"), ["Nuts".to_string(), "Dairy".to_string()]);

        assert!(draft.remove_tag("allergens", "Nuts"));
        assert!(!draft.remove_tag("allergens", "Soy"));
        assert_eq!(draft.tags("allergens"), ["Dairy".to_string()]);
    }

    #[test]
    fn test_apply_json_converts_by_kind() {
        let mut draft = Draft::with_defaults(FIELDS, now());
        let submitted = json!({
            "name": "Mixer",
            "minutes": 30,
            "amount": "4.25",
            "checked": false,
            "expiry": "2026-11-01T00:00:00Z",
            "allergens": ["Soy", " "],
        });
        draft
            .apply_json(FIELDS, submitted.as_object().unwrap())
            .unwrap();

        assert_eq!(draft.text("name"), "Mixer");
        assert_eq!(draft.text("minutes"), "30");
        assert_eq!(draft.text("amount"), "4.25");
        assert!(!draft.flag("checked"));
        assert_eq!(
            draft.date("expiry"),
            Some(Utc.with_ymd_and_hms(2026, 11, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(draft.tags("allergens"), ["Soy".to_string()]);
    }

    #[test]
    fn test_apply_json_is_all_or_nothing() {
        let mut draft = Draft::with_defaults(FIELDS, now());
        let submitted = json!({
            "name": "Mixer",
            "checked": "yes",
            "colour": "red",
        });
        let errors = draft
            .apply_json(FIELDS, submitted.as_object().unwrap())
            .unwrap_err();

        assert!(errors.for_field("checked").is_some());
        assert_eq!(
            errors.for_field("colour").map(|e| e.message.as_str()),
            Some("is not a known field")
        );
        assert_eq!(draft.text("name"), "");
    }
}
