use serde::{Deserialize, Serialize};

/// A single plant record.
///
/// Records come from the seed file and are identified by `id`; ids are
/// expected to be unique but never generated by this program. `images`
/// holds a single path or URL (the plural name is part of the external
/// contract).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    pub id: i32,
    pub name: String,

    #[serde(rename = "type")]
    pub plant_type: String,

    pub color: String,
    pub height: i32,
    pub location: String,
    pub images: String,
}
