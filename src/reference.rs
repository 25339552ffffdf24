//! Administrative-regions reference data (wilayas and communes).
//!
//! Export rows carry region *codes*; the destination schema wants
//! human-readable names next to them. The lookup table is injected by the
//! caller (typically loaded once from the static regions dataset) and treated
//! as read-only, which keeps the pipeline testable in isolation.

use std::collections::HashMap;
use std::io::Read;

use serde::Deserialize;

/// One wilaya (province) record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WilayaRecord {
    /// Numeric wilaya code, as a string (e.g. `"16"`).
    pub code: String,
    /// Display name (e.g. `"Alger"`).
    pub name: String,
}

/// One commune record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommuneRecord {
    /// Commune identifier, a composite of name and wilaya code
    /// (e.g. `"Ouled Fayet_16"`).
    pub id: String,
    /// Display name (e.g. `"Ouled Fayet"`).
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct RegionData {
    #[serde(default)]
    wilayas: Vec<WilayaRecord>,
    #[serde(default)]
    communes: Vec<CommuneRecord>,
}

/// Read-only name lookup over the regions dataset.
#[derive(Debug, Clone, Default)]
pub struct RegionIndex {
    wilayas: HashMap<String, String>,
    communes: HashMap<String, String>,
}

impl RegionIndex {
    /// Build an index from record lists.
    pub fn new(wilayas: Vec<WilayaRecord>, communes: Vec<CommuneRecord>) -> Self {
        Self {
            wilayas: wilayas.into_iter().map(|w| (w.code, w.name)).collect(),
            communes: communes.into_iter().map(|c| (c.id, c.name)).collect(),
        }
    }

    /// Load an index from the regions dataset JSON
    /// (`{"wilayas": [...], "communes": [...]}`).
    pub fn from_json_reader(reader: impl Read) -> serde_json::Result<Self> {
        let data: RegionData = serde_json::from_reader(reader)?;
        Ok(Self::new(data.wilayas, data.communes))
    }

    /// Display name for a wilaya code, if known.
    pub fn wilaya_name(&self, code: &str) -> Option<&str> {
        self.wilayas.get(code).map(String::as_str)
    }

    /// Display name for a commune id, if known.
    pub fn commune_name(&self, id: &str) -> Option<&str> {
        self.communes.get(id).map(String::as_str)
    }

    /// Resolve a raw commune value to its display name.
    ///
    /// Order forms store communes as composite `Name_CODE` identifiers. The
    /// table lookup wins; for ids missing from the table the name part of the
    /// composite is used; plain names pass through unchanged.
    pub fn commune_display_name(&self, raw: &str) -> String {
        if let Some(name) = self.commune_name(raw) {
            return name.to_owned();
        }
        match raw.split_once('_') {
            Some((name, _code)) => name.trim().to_owned(),
            None => raw.to_owned(),
        }
    }
}
