//! Recognized option sets for enumerated fields, in display order.
//!
//! Records store the display string, so a stored value outside these sets
//! still decodes; edit sessions fall back to the first option.

use strum_macros::{Display, EnumIter, EnumString, VariantNames};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, VariantNames)]
pub enum SpiceLevel {
    Mild,
    Medium,
    Hot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, VariantNames)]
pub enum CookingMethod {
    Steamed,
    #[strum(to_string = "Oven-Baked")]
    OvenBaked,
}

/// Leaf a batch is wrapped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, VariantNames)]
pub enum LeafWrapping {
    #[strum(to_string = "Corn husk")]
    CornHusk,
    #[strum(to_string = "Banana leaf")]
    BananaLeaf,
    #[strum(to_string = "Plantain leaf")]
    PlantainLeaf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, VariantNames)]
pub enum RegionalStyle {
    Oaxacan,
    Salvadoran,
    Yucateco,
    #[strum(to_string = "Tex-Mex")]
    TexMex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, VariantNames)]
pub enum WrappingSource {
    #[strum(to_string = "Local Market")]
    LocalMarket,
    #[strum(to_string = "Farm Source")]
    FarmSource,
    #[strum(to_string = "Store-Bought")]
    StoreBought,
}

/// Used for both the wrapping and the packaging of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, VariantNames)]
pub enum PackagingType {
    #[strum(to_string = "Paper Wrap")]
    PaperWrap,
    Foil,
    #[strum(to_string = "Eco Box")]
    EcoBox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, VariantNames)]
pub enum DeliveryMethod {
    Pickup,
    #[strum(to_string = "Home Delivery")]
    HomeDelivery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, VariantNames)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Partial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, VariantNames)]
pub enum OrderSource {
    Phone,
    WhatsApp,
    #[strum(to_string = "Street Stall")]
    StreetStall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, VariantNames)]
pub enum DeliveryStatus {
    Pending,
    #[strum(to_string = "Out for Delivery")]
    OutForDelivery,
    Delivered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, VariantNames)]
pub enum StockUnit {
    #[strum(to_string = "kg")]
    Kilogram,
    #[strum(to_string = "g")]
    Gram,
    #[strum(to_string = "lb")]
    Pound,
    #[strum(to_string = "L")]
    Liter,
    #[strum(to_string = "ml")]
    Milliliter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, VariantNames)]
pub enum ReorderStatus {
    #[strum(to_string = "Stock OK")]
    StockOk,
    #[strum(to_string = "Monitor Closely")]
    MonitorClosely,
    #[strum(to_string = "Reorder Needed")]
    ReorderNeeded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, VariantNames)]
pub enum SanitationLevel {
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter, VariantNames)]
pub enum EquipmentMaterial {
    Steel,
    Aluminum,
    Plastic,
}
