//! The fixed column schema agreed with the delivery partner's intake system.
//!
//! Both serializers consume the same ordered list of
//! (logical field, destination header label, destination column letter)
//! triples; only the encodings differ.

/// Logical fields of one delivery export row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportField {
    /// Order reference.
    Reference,
    /// Recipient full name.
    CustomerName,
    /// Primary phone (exported as literal text to keep leading zeros).
    Phone,
    /// Secondary phone (optional).
    PhoneAlt,
    /// Wilaya (province) code.
    WilayaCode,
    /// Wilaya display name.
    WilayaName,
    /// Commune display name.
    Commune,
    /// Street address.
    Address,
    /// Product description.
    Product,
    /// Parcel weight in kg (optional).
    Weight,
    /// Cash-on-delivery amount (non-negative integer).
    Amount,
    /// Free-form remarks (optional).
    Remarks,
    /// FRAGILE flag.
    Fragile,
    /// ECHANGE (exchange) flag.
    Exchange,
    /// PICK UP flag.
    Pickup,
    /// RECOUVREMENT (cash-on-delivery) flag.
    CashOnDelivery,
    /// STOP DESK (desk delivery) flag.
    DeskDelivery,
    /// Map link (optional).
    MapLink,
}

/// One column of the destination schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportColumn {
    /// Logical field written into this column.
    pub field: ExportField,
    /// Destination header label (CSV header row; matches the template legend).
    pub header: &'static str,
    /// Destination cell column letter in the workbook template.
    pub letter: &'static str,
}

/// First data row in the workbook template. Rows 1..=11 hold the template's
/// pre-formatted header and legend block and must stay untouched.
pub const DATA_START_ROW: u32 = 12;

/// The delivery-partner column schema, in destination order (columns B..S).
pub const DELIVERY_COLUMNS: [ExportColumn; 18] = [
    ExportColumn {
        field: ExportField::Reference,
        header: "reference commande",
        letter: "B",
    },
    ExportColumn {
        field: ExportField::CustomerName,
        header: "nom et prenom du destinataire*",
        letter: "C",
    },
    ExportColumn {
        field: ExportField::Phone,
        header: "telephone*",
        letter: "D",
    },
    ExportColumn {
        field: ExportField::PhoneAlt,
        header: "telephone 2",
        letter: "E",
    },
    ExportColumn {
        field: ExportField::WilayaCode,
        header: "code wilaya*",
        letter: "F",
    },
    ExportColumn {
        field: ExportField::WilayaName,
        header: "wilaya de livraison",
        letter: "G",
    },
    ExportColumn {
        field: ExportField::Commune,
        header: "commune de livraison*",
        letter: "H",
    },
    ExportColumn {
        field: ExportField::Address,
        header: "adresse de livraison*",
        letter: "I",
    },
    ExportColumn {
        field: ExportField::Product,
        header: "produit*",
        letter: "J",
    },
    ExportColumn {
        field: ExportField::Weight,
        header: "poids (kg)",
        letter: "K",
    },
    ExportColumn {
        field: ExportField::Amount,
        header: "montant du colis*",
        letter: "L",
    },
    ExportColumn {
        field: ExportField::Remarks,
        header: "remarque",
        letter: "M",
    },
    ExportColumn {
        field: ExportField::Fragile,
        header: "FRAGILE",
        letter: "N",
    },
    ExportColumn {
        field: ExportField::Exchange,
        header: "ECHANGE",
        letter: "O",
    },
    ExportColumn {
        field: ExportField::Pickup,
        header: "PICK UP",
        letter: "P",
    },
    ExportColumn {
        field: ExportField::CashOnDelivery,
        header: "RECOUVREMENT",
        letter: "Q",
    },
    ExportColumn {
        field: ExportField::DeskDelivery,
        header: "STOP DESK",
        letter: "R",
    },
    ExportColumn {
        field: ExportField::MapLink,
        header: "Lien map",
        letter: "S",
    },
];
