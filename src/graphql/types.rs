use async_graphql::{ID, SimpleObject};

use crate::model::Plant as ModelPlant;

/// A plant as exposed through the GraphQL API.
///
/// `id` is a GraphQL `ID` (string on the wire) even though the catalog
/// stores integers; clients send ids back as strings and the store coerces
/// them at its boundary.
#[derive(SimpleObject)]
pub struct Plant {
    pub id: ID,
    pub name: String,

    #[graphql(name = "type")]
    pub plant_type: String,

    pub color: String,
    pub height: i32,
    pub location: String,
    pub images: String,
}

impl From<ModelPlant> for Plant {
    fn from(p: ModelPlant) -> Self {
        Self {
            id: ID(p.id.to_string()),
            name: p.name,
            plant_type: p.plant_type,
            color: p.color,
            height: p.height,
            location: p.location,
            images: p.images,
        }
    }
}
