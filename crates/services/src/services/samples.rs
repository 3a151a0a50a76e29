//! Example records used to seed an empty installation.

use chrono::{DateTime, Duration, Utc};
use db::models::{
    batch::Batch,
    cleaning_log::CleaningLog,
    options::{
        CookingMethod, DeliveryMethod, DeliveryStatus, EquipmentMaterial, LeafWrapping,
        OrderSource, PackagingType, PaymentStatus, RegionalStyle, ReorderStatus,
        SanitationLevel, SpiceLevel, StockUnit, WrappingSource,
    },
    order::Order,
    stock_item::StockItem,
};
use uuid::Uuid;

fn days(now: DateTime<Utc>, offset: i64) -> DateTime<Utc> {
    now + Duration::days(offset)
}

pub fn batches(now: DateTime<Utc>) -> Vec<Batch> {
    vec![
        Batch {
            id: Uuid::new_v4(),
            date_prepared: now,
            filling_type: "Chicken Verde".to_string(),
            quantity_made: 120,
            preparation_time_minutes: 180,
            masa_brand: "Masa Harina Premium".to_string(),
            masa_hydration_ratio: "2:1 Water:Masa".to_string(),
            wrapping_type: LeafWrapping::CornHusk.to_string(),
            spice_level: SpiceLevel::Medium.to_string(),
            cooking_method: CookingMethod::Steamed.to_string(),
            cook_duration_minutes: 90,
            batch_supervisor: "Lupita".to_string(),
            taste_tested: true,
            quality_notes: Some("Excellent flavor and texture.".to_string()),
            allergens: vec!["Dairy".to_string()],
            is_for_preorder: true,
            shelf_life_days: 4,
            regional_style: RegionalStyle::Oaxacan.to_string(),
            wrapping_source: WrappingSource::LocalMarket.to_string(),
            humidity_level_during_prep: 48.5,
            electricity_used_kwh: 3.2,
        },
        Batch {
            id: Uuid::new_v4(),
            date_prepared: days(now, -2),
            filling_type: "Sweet Pineapple".to_string(),
            quantity_made: 80,
            preparation_time_minutes: 120,
            masa_brand: "El Molino Blanco".to_string(),
            masa_hydration_ratio: "1.5:1 Water:Masa".to_string(),
            wrapping_type: LeafWrapping::BananaLeaf.to_string(),
            spice_level: SpiceLevel::Mild.to_string(),
            cooking_method: CookingMethod::OvenBaked.to_string(),
            cook_duration_minutes: 75,
            batch_supervisor: "Mateo".to_string(),
            taste_tested: false,
            quality_notes: Some("Needs more sweetness next time.".to_string()),
            allergens: vec!["Nuts".to_string()],
            is_for_preorder: false,
            shelf_life_days: 3,
            regional_style: RegionalStyle::Salvadoran.to_string(),
            wrapping_source: WrappingSource::FarmSource.to_string(),
            humidity_level_during_prep: 52.0,
            electricity_used_kwh: 2.6,
        },
    ]
}

pub fn orders(now: DateTime<Utc>) -> Vec<Order> {
    vec![
        Order {
            id: Uuid::new_v4(),
            customer_name: "María López".to_string(),
            contact_number: "123-456-7890".to_string(),
            order_date: now,
            delivery_date: Some(days(now, 1)),
            filling_type: "Beef Mole".to_string(),
            quantity_ordered: 24,
            wrapping_type: PackagingType::Foil.to_string(),
            spice_level: SpiceLevel::Medium.to_string(),
            delivery_method: DeliveryMethod::HomeDelivery.to_string(),
            address: Some("456 Fiesta Lane, Puebla".to_string()),
            payment_status: PaymentStatus::Paid.to_string(),
            total_amount: 72.0,
            promo_code_used: Some("TAMALE10".to_string()),
            order_taken_by: "Lucia".to_string(),
            delivery_person: Some("Carlos".to_string()),
            feedback_rating: Some(5),
            feedback_notes: Some("Absolutely delicious!".to_string()),
            is_repeat_customer: true,
            special_instructions: Some("Extra mole on the side.".to_string()),
            order_source: OrderSource::WhatsApp.to_string(),
            delivery_status: DeliveryStatus::Delivered.to_string(),
            packaging_type: PackagingType::EcoBox.to_string(),
            estimated_prep_time_minutes: 90,
        },
        Order {
            id: Uuid::new_v4(),
            customer_name: "Jorge Rivera".to_string(),
            contact_number: "555-987-6543".to_string(),
            order_date: now,
            delivery_date: None,
            filling_type: "Vegetarian".to_string(),
            quantity_ordered: 12,
            wrapping_type: PackagingType::PaperWrap.to_string(),
            spice_level: SpiceLevel::Mild.to_string(),
            delivery_method: DeliveryMethod::Pickup.to_string(),
            address: None,
            payment_status: PaymentStatus::Pending.to_string(),
            total_amount: 30.0,
            promo_code_used: None,
            order_taken_by: "Manuel".to_string(),
            delivery_person: None,
            feedback_rating: None,
            feedback_notes: None,
            is_repeat_customer: false,
            special_instructions: None,
            order_source: OrderSource::StreetStall.to_string(),
            delivery_status: DeliveryStatus::Pending.to_string(),
            packaging_type: PackagingType::PaperWrap.to_string(),
            estimated_prep_time_minutes: 45,
        },
    ]
}

pub fn stock_items(now: DateTime<Utc>) -> Vec<StockItem> {
    vec![
        StockItem {
            id: Uuid::new_v4(),
            name: "Corn Flour".to_string(),
            quantity_available: 25.0,
            unit: StockUnit::Kilogram.to_string(),
            is_perishable: false,
            expiry_date: None,
            supplier_name: Some("Harina Mills".to_string()),
            restock_threshold: 5.0,
            auto_reorder_enabled: true,
            last_restocked_date: days(now, -3),
            received_by: "Carlos".to_string(),
            storage_location: "Pantry Shelf 3".to_string(),
            reorder_status: ReorderStatus::StockOk.to_string(),
            cost_per_unit: 1.25,
            stock_notes: Some("Stored in airtight container".to_string()),
            organic_certified: true,
            batch_lot_code: "CF-0327-HM".to_string(),
            stock_verified_by: "Lucia".to_string(),
            moisture_sensitive: false,
        },
        StockItem {
            id: Uuid::new_v4(),
            name: "Fresh Jalapeños".to_string(),
            quantity_available: 4.5,
            unit: StockUnit::Kilogram.to_string(),
            is_perishable: true,
            expiry_date: Some(days(now, 5)),
            supplier_name: Some("GreenFarm Supply".to_string()),
            restock_threshold: 2.0,
            auto_reorder_enabled: false,
            last_restocked_date: days(now, -1),
            received_by: "Mateo".to_string(),
            storage_location: "Refrigerated Bin A".to_string(),
            reorder_status: ReorderStatus::MonitorClosely.to_string(),
            cost_per_unit: 3.40,
            stock_notes: Some("Use oldest stock first".to_string()),
            organic_certified: false,
            batch_lot_code: "JLP-9053-GF".to_string(),
            stock_verified_by: "Diana".to_string(),
            moisture_sensitive: true,
        },
    ]
}

pub fn cleaning_logs(now: DateTime<Utc>) -> Vec<CleaningLog> {
    vec![
        CleaningLog {
            id: Uuid::new_v4(),
            equipment_name: "Tamale Steamer Unit A".to_string(),
            cleaned_date: days(now, -1),
            cleaned_by: "Lupita".to_string(),
            cleaning_products_used: "EcoSafe Degreaser, SteamJet".to_string(),
            sanitation_level: SanitationLevel::High.to_string(),
            issues_found: Some("Minor residue at base".to_string()),
            is_sanitized: true,
            requires_repairs: false,
            repair_notes: None,
            cleaning_duration_minutes: 40,
            next_scheduled_cleaning: days(now, 7),
            approved_by: "Supervisor Ana".to_string(),
            cleaning_frequency_days: 7,
            equipment_material: EquipmentMaterial::Steel.to_string(),
            post_clean_smell_check: true,
            temp_check_passed: true,
        },
        CleaningLog {
            id: Uuid::new_v4(),
            equipment_name: "Mixing Bowl Station B".to_string(),
            cleaned_date: days(now, -2),
            cleaned_by: "Jorge".to_string(),
            cleaning_products_used: "Citrus Enzyme Cleaner".to_string(),
            sanitation_level: SanitationLevel::Moderate.to_string(),
            issues_found: Some("Handle cracked, leaking seal".to_string()),
            is_sanitized: true,
            requires_repairs: true,
            repair_notes: Some("Schedule maintenance next week.".to_string()),
            cleaning_duration_minutes: 30,
            next_scheduled_cleaning: days(now, 5),
            approved_by: "Supervisor Mateo".to_string(),
            cleaning_frequency_days: 5,
            equipment_material: EquipmentMaterial::Aluminum.to_string(),
            post_clean_smell_check: true,
            temp_check_passed: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use db::{record::Record, schema::validate};

    use super::*;

    fn passes_save_gate<R: Record>(records: &[R]) -> bool {
        records
            .iter()
            .all(|record| validate(R::fields(), &record.to_draft()).is_ok())
    }

    #[test]
    fn test_samples_pass_the_save_gate() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        assert!(passes_save_gate(&batches(now)));
        assert!(passes_save_gate(&orders(now)));
        assert!(passes_save_gate(&stock_items(now)));
        assert!(passes_save_gate(&cleaning_logs(now)));
    }
}
