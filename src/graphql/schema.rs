use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::store::{PlantStore, PlantUpdate};

use super::types::Plant;

pub type GreenhouseSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: Arc<PlantStore>) -> GreenhouseSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

fn get_store(ctx: &Context<'_>) -> Arc<PlantStore> {
    ctx.data::<Arc<PlantStore>>().unwrap().clone()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// List every plant in the catalog
    async fn get_all_plants(&self, ctx: &Context<'_>) -> Vec<Plant> {
        get_store(ctx).list().into_iter().map(Into::into).collect()
    }

    /// Find plants whose name contains the given text (case-insensitive)
    async fn get_plants_by_name(&self, ctx: &Context<'_>, name: String) -> Vec<Plant> {
        get_store(ctx)
            .find_by_name(&name)
            .into_iter()
            .map(Into::into)
            .collect()
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Replace a plant's details, keeping its id and position
    async fn update_plant_details(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
        #[graphql(name = "type")] plant_type: String,
        color: String,
        height: i32,
        location: String,
        images: String,
    ) -> async_graphql::Result<Plant> {
        let store = get_store(ctx);
        let plant = store.replace(
            id.as_str(),
            PlantUpdate {
                name,
                plant_type,
                color,
                height,
                location,
                images,
            },
        )?;
        Ok(plant.into())
    }

    /// Delete a plant and return the removed record
    async fn delete_plant_details(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Plant> {
        let store = get_store(ctx);
        let plant = store.remove(id.as_str())?;
        Ok(plant.into())
    }
}
