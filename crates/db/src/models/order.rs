use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::VariantNames;
use ts_rs::TS;
use uuid::Uuid;

use super::options::{
    DeliveryMethod, DeliveryStatus, OrderSource, PackagingType, PaymentStatus, SpiceLevel,
};
use crate::{
    record::{Record, RecordCard, RecordKind},
    schema::{Draft, FieldDefault, FieldSpec, ValidationErrors},
};

/// A customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct Order {
    pub id: Uuid,
    pub customer_name: String,
    pub contact_number: String,
    pub order_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<DateTime<Utc>>,
    pub filling_type: String,
    pub quantity_ordered: i32,
    pub wrapping_type: String,
    pub spice_level: String,
    pub delivery_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub payment_status: String,
    pub total_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_code_used: Option<String>,
    pub order_taken_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_rating: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_notes: Option<String>,
    pub is_repeat_customer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    pub order_source: String,
    pub delivery_status: String,
    pub packaging_type: String,
    pub estimated_prep_time_minutes: i32,
}

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("customer_name", "Customer Name").mandatory(),
    FieldSpec::text("contact_number", "Contact Number"),
    FieldSpec::date("order_date", "Order Date"),
    FieldSpec::optional_date("delivery_date", "Delivery Date"),
    FieldSpec::text("filling_type", "Filling Type").mandatory(),
    FieldSpec::integer("quantity_ordered", "Quantity Ordered"),
    FieldSpec::choice("wrapping_type", "Wrapping Type", PackagingType::VARIANTS),
    FieldSpec::choice("spice_level", "Spice Level", SpiceLevel::VARIANTS),
    FieldSpec::choice("delivery_method", "Delivery Method", DeliveryMethod::VARIANTS),
    FieldSpec::text("address", "Address").nullable(),
    FieldSpec::choice("payment_status", "Payment Status", PaymentStatus::VARIANTS)
        .defaulting_to(FieldDefault::Text("Pending")),
    FieldSpec::decimal("total_amount", "Total Amount"),
    FieldSpec::text("promo_code_used", "Promo Code").nullable(),
    FieldSpec::text("order_taken_by", "Order Taken By").mandatory(),
    FieldSpec::text("delivery_person", "Delivery Person").nullable(),
    FieldSpec::integer("feedback_rating", "Feedback Rating").nullable(),
    FieldSpec::text("feedback_notes", "Feedback Notes").nullable(),
    FieldSpec::flag("is_repeat_customer", "Repeat Customer", false),
    FieldSpec::text("special_instructions", "Special Instructions").nullable(),
    FieldSpec::choice("order_source", "Order Source", OrderSource::VARIANTS),
    FieldSpec::choice("delivery_status", "Delivery Status", DeliveryStatus::VARIANTS),
    FieldSpec::choice("packaging_type", "Packaging Type", PackagingType::VARIANTS),
    FieldSpec::integer("estimated_prep_time_minutes", "Estimated Prep Time (min)"),
];

impl Record for Order {
    const KIND: RecordKind = RecordKind::Order;

    fn id(&self) -> Uuid {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn to_draft(&self) -> Draft {
        let draft = Draft::new()
            .with_text("customer_name", &self.customer_name)
            .with_text("contact_number", &self.contact_number)
            .with_date("order_date", Some(self.order_date))
            .with_date("delivery_date", self.delivery_date)
            .with_text("filling_type", &self.filling_type)
            .with_number("quantity_ordered", self.quantity_ordered)
            .with_text("wrapping_type", &self.wrapping_type)
            .with_text("spice_level", &self.spice_level)
            .with_text("delivery_method", &self.delivery_method)
            .with_optional_text("address", self.address.as_deref())
            .with_text("payment_status", &self.payment_status)
            .with_number("total_amount", self.total_amount)
            .with_optional_text("promo_code_used", self.promo_code_used.as_deref())
            .with_text("order_taken_by", &self.order_taken_by)
            .with_optional_text("delivery_person", self.delivery_person.as_deref())
            .with_optional_text("feedback_notes", self.feedback_notes.as_deref())
            .with_flag("is_repeat_customer", self.is_repeat_customer)
            .with_optional_text(
                "special_instructions",
                self.special_instructions.as_deref(),
            )
            .with_text("order_source", &self.order_source)
            .with_text("delivery_status", &self.delivery_status)
            .with_text("packaging_type", &self.packaging_type)
            .with_number(
                "estimated_prep_time_minutes",
                self.estimated_prep_time_minutes,
            );
        match self.feedback_rating {
            Some(rating) => draft.with_number("feedback_rating", rating),
            None => draft.with_text("feedback_rating", ""),
        }
    }

    fn from_draft(id: Uuid, draft: &Draft) -> Result<Self, ValidationErrors> {
        let mut r = draft.reader();
        let order = Order {
            id,
            customer_name: r.text("customer_name"),
            contact_number: r.text("contact_number"),
            order_date: r.date("order_date"),
            delivery_date: r.optional_date("delivery_date"),
            filling_type: r.text("filling_type"),
            quantity_ordered: r.integer("quantity_ordered"),
            wrapping_type: r.text("wrapping_type"),
            spice_level: r.text("spice_level"),
            delivery_method: r.text("delivery_method"),
            address: r.optional_text("address"),
            payment_status: r.text("payment_status"),
            total_amount: r.decimal("total_amount"),
            promo_code_used: r.optional_text("promo_code_used"),
            order_taken_by: r.text("order_taken_by"),
            delivery_person: r.optional_text("delivery_person"),
            feedback_rating: r.optional_integer("feedback_rating"),
            feedback_notes: r.optional_text("feedback_notes"),
            is_repeat_customer: r.flag("is_repeat_customer"),
            special_instructions: r.optional_text("special_instructions"),
            order_source: r.text("order_source"),
            delivery_status: r.text("delivery_status"),
            packaging_type: r.text("packaging_type"),
            estimated_prep_time_minutes: r.integer("estimated_prep_time_minutes"),
        };
        r.finish(order)
    }

    fn card(&self) -> RecordCard {
        RecordCard::new(self.id, &self.customer_name)
            .subtitle(self.order_date.format("%b %-d, %Y").to_string())
            .subtitle(&self.order_taken_by)
            .subtitle(&self.spice_level)
            .subtitle(&self.delivery_method)
            .metric(format!("{} tamales", self.quantity_ordered))
            .metric(format!("{} min", self.estimated_prep_time_minutes))
            .metric(format!("${:.2}", self.total_amount))
            .note_opt("Instructions: ", self.special_instructions.as_deref())
            .note_opt("Feedback: ", self.feedback_notes.as_deref())
    }
}
