//! Export row model and the shared field-shaping logic both serializers use.

use serde::{Deserialize, Serialize};

use super::schema::ExportField;

/// Literal token the destination system expects for a set boolean flag.
/// A cleared flag must produce an empty field/cell, never a falsy string.
pub const FLAG_SET: &str = "OUI";

/// The five delivery option flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryFlags {
    /// Parcel is fragile.
    pub fragile: bool,
    /// Exchange delivery.
    pub exchange: bool,
    /// Carrier pickup at sender.
    pub pickup: bool,
    /// Cash on delivery (recouvrement).
    pub cash_on_delivery: bool,
    /// Delivery to a carrier desk (stop desk) instead of the door.
    pub desk_delivery: bool,
}

/// One delivery export record, derived from order/customer domain objects.
///
/// Built fresh per export request from the current order query result; the
/// pipeline never caches rows across exports. `amount` is the rounded,
/// non-negative cash-on-delivery total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    /// Order reference.
    pub reference: String,
    /// Recipient full name.
    pub customer_name: String,
    /// Primary phone number.
    pub phone: String,
    /// Secondary phone number.
    pub phone_alt: Option<String>,
    /// Wilaya (province) code.
    pub wilaya_code: String,
    /// Wilaya display name.
    pub wilaya_name: String,
    /// Commune display name.
    pub commune: String,
    /// Street address.
    pub address: String,
    /// Product description.
    pub product: String,
    /// Parcel weight in kg.
    pub weight_kg: Option<f64>,
    /// Cash-on-delivery amount.
    pub amount: u64,
    /// Free-form remarks.
    pub remarks: Option<String>,
    /// Delivery option flags.
    pub flags: DeliveryFlags,
    /// Link to the delivery location on a map.
    pub map_link: Option<String>,
}

/// A destination-shaped value for one cell/field of an export row.
///
/// `Empty` means "write nothing": an empty CSV field, and an untouched cell in
/// the workbook template (so template defaults and conditional formatting
/// survive).
#[derive(Debug, Clone, PartialEq)]
pub enum ExportValue {
    /// Nothing to write.
    Empty,
    /// Text cell/field.
    Text(String),
    /// Integer cell/field (the amount).
    Integer(u64),
    /// Floating-point cell/field (the weight).
    Float(f64),
}

impl ExportRow {
    /// Shape the value for one schema field.
    ///
    /// This is the single place encoding both serializers' shared rules:
    /// flags become [`FLAG_SET`] or `Empty`; phone-like fields get a leading
    /// apostrophe so spreadsheet consumers keep leading zeros; optional
    /// fields become `Empty` when absent.
    pub fn value_for(&self, field: ExportField) -> ExportValue {
        match field {
            ExportField::Reference => ExportValue::Text(self.reference.clone()),
            ExportField::CustomerName => ExportValue::Text(self.customer_name.clone()),
            ExportField::Phone => phone_value(&self.phone),
            ExportField::PhoneAlt => match self.phone_alt.as_deref() {
                Some(p) if !p.is_empty() => phone_value(p),
                _ => ExportValue::Empty,
            },
            ExportField::WilayaCode => ExportValue::Text(self.wilaya_code.clone()),
            ExportField::WilayaName => ExportValue::Text(self.wilaya_name.clone()),
            ExportField::Commune => ExportValue::Text(self.commune.clone()),
            ExportField::Address => ExportValue::Text(self.address.clone()),
            ExportField::Product => ExportValue::Text(self.product.clone()),
            ExportField::Weight => match self.weight_kg {
                Some(w) => ExportValue::Float(w),
                None => ExportValue::Empty,
            },
            ExportField::Amount => ExportValue::Integer(self.amount),
            ExportField::Remarks => optional_text(self.remarks.as_deref()),
            ExportField::Fragile => flag_value(self.flags.fragile),
            ExportField::Exchange => flag_value(self.flags.exchange),
            ExportField::Pickup => flag_value(self.flags.pickup),
            ExportField::CashOnDelivery => flag_value(self.flags.cash_on_delivery),
            ExportField::DeskDelivery => flag_value(self.flags.desk_delivery),
            ExportField::MapLink => optional_text(self.map_link.as_deref()),
        }
    }
}

fn phone_value(phone: &str) -> ExportValue {
    if phone.is_empty() {
        return ExportValue::Empty;
    }
    // Leading apostrophe forces text interpretation in spreadsheet consumers
    // that auto-detect numeric columns (keeps the leading zero).
    ExportValue::Text(format!("'{phone}"))
}

fn optional_text(value: Option<&str>) -> ExportValue {
    match value {
        Some(s) if !s.is_empty() => ExportValue::Text(s.to_owned()),
        _ => ExportValue::Empty,
    }
}

fn flag_value(set: bool) -> ExportValue {
    if set {
        ExportValue::Text(FLAG_SET.to_owned())
    } else {
        ExportValue::Empty
    }
}
