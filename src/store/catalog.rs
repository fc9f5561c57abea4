use std::collections::HashSet;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::error::{GreenhouseError, Result};
use crate::model::Plant;

/// Replacement fields accepted by [`PlantStore::replace`].
///
/// The record id is not part of the update; the matched record keeps its
/// existing id.
#[derive(Debug, Clone)]
pub struct PlantUpdate {
    pub name: String,
    pub plant_type: String,
    pub color: String,
    pub height: i32,
    pub location: String,
    pub images: String,
}

impl PlantUpdate {
    fn into_plant(self, id: i32) -> Plant {
        Plant {
            id,
            name: self.name,
            plant_type: self.plant_type,
            color: self.color,
            height: self.height,
            location: self.location,
            images: self.images,
        }
    }
}

/// The in-memory plant catalog.
///
/// Holds records in insertion order behind a mutex. Each operation runs its
/// lookup and mutation under a single lock acquisition, so concurrent
/// requests cannot interleave between a mutation's find and its write.
#[derive(Debug)]
pub struct PlantStore {
    plants: Mutex<Vec<Plant>>,
}

impl PlantStore {
    pub fn new(plants: Vec<Plant>) -> Self {
        Self {
            plants: Mutex::new(plants),
        }
    }

    /// Load the catalog from a JSON seed file.
    ///
    /// The file must contain an array of plant objects. Duplicate ids are
    /// accepted (operations match the first occurrence) but logged.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let plants: Vec<Plant> = serde_json::from_str(&content)?;

        let mut seen = HashSet::new();
        for plant in &plants {
            if !seen.insert(plant.id) {
                tracing::warn!(id = plant.id, "duplicate plant id in seed data");
            }
        }

        tracing::info!(count = plants.len(), path = %path.display(), "loaded plant catalog");
        Ok(Self::new(plants))
    }

    fn guard(&self) -> MutexGuard<'_, Vec<Plant>> {
        self.plants.lock().expect("plant catalog lock poisoned")
    }

    /// Every record, insertion order preserved.
    pub fn list(&self) -> Vec<Plant> {
        self.guard().clone()
    }

    /// Records whose name contains `name`, case-insensitively.
    ///
    /// The empty string matches everything.
    pub fn find_by_name(&self, name: &str) -> Vec<Plant> {
        let needle = name.to_lowercase();
        self.guard()
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Replace the record with the given id.
    ///
    /// `id` arrives as text from the transport layer and is coerced to an
    /// integer here; input that fails to parse is treated as no match. The
    /// new record keeps the matched record's id and position. Returns the
    /// new record.
    pub fn replace(&self, id: &str, update: PlantUpdate) -> Result<Plant> {
        let mut plants = self.guard();
        let index = Self::position(&plants, id)?;
        let plant = update.into_plant(plants[index].id);
        plants[index] = plant.clone();
        Ok(plant)
    }

    /// Remove and return the record with the given id.
    ///
    /// Same id coercion policy as [`PlantStore::replace`]. Subsequent
    /// records shift down one position.
    pub fn remove(&self, id: &str) -> Result<Plant> {
        let mut plants = self.guard();
        let index = Self::position(&plants, id)?;
        Ok(plants.remove(index))
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    fn position(plants: &[Plant], id: &str) -> Result<usize> {
        parse_id(id)
            .and_then(|numeric| plants.iter().position(|p| p.id == numeric))
            .ok_or_else(|| GreenhouseError::NotFound(id.to_string()))
    }
}

fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(id: i32, name: &str) -> Plant {
        Plant {
            id,
            name: name.to_string(),
            plant_type: "Indoor".to_string(),
            color: "Green".to_string(),
            height: 30,
            location: "Living room".to_string(),
            images: format!("/images/{}.jpg", name.to_lowercase()),
        }
    }

    fn sample_store() -> PlantStore {
        PlantStore::new(vec![plant(1, "Fern"), plant(2, "Oak")])
    }

    fn update(name: &str) -> PlantUpdate {
        PlantUpdate {
            name: name.to_string(),
            plant_type: "Outdoor".to_string(),
            color: "Brown".to_string(),
            height: 500,
            location: "Backyard".to_string(),
            images: "/images/updated.jpg".to_string(),
        }
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = sample_store();
        let names: Vec<_> = store.list().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Fern", "Oak"]);
    }

    #[test]
    fn test_find_by_name_case_insensitive() {
        let store = sample_store();
        let matches = store.find_by_name("oa");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, 2);
        assert_eq!(matches[0].name, "Oak");
    }

    #[test]
    fn test_find_by_name_empty_matches_all() {
        let store = sample_store();
        assert_eq!(store.find_by_name("").len(), 2);
    }

    #[test]
    fn test_find_by_name_no_match() {
        let store = sample_store();
        assert!(store.find_by_name("cactus").is_empty());
    }

    #[test]
    fn test_find_by_name_preserves_order() {
        let store = PlantStore::new(vec![
            plant(1, "Snake Plant"),
            plant(2, "Oak"),
            plant(3, "Spider Plant"),
        ]);
        let ids: Vec<_> = store.find_by_name("plant").into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_replace_keeps_position_and_id() {
        let store = sample_store();
        let replaced = store.replace("1", update("Boston Fern")).unwrap();
        assert_eq!(replaced.id, 1);
        assert_eq!(replaced.name, "Boston Fern");

        let plants = store.list();
        assert_eq!(plants.len(), 2);
        assert_eq!(plants[0].id, 1);
        assert_eq!(plants[0].name, "Boston Fern");
        assert_eq!(plants[1].name, "Oak");
    }

    #[test]
    fn test_replace_stores_submitted_images() {
        let store = sample_store();
        store.replace("2", update("Oak")).unwrap();
        assert_eq!(store.list()[1].images, "/images/updated.jpg");
    }

    #[test]
    fn test_replace_unknown_id_leaves_store_unchanged() {
        let store = sample_store();
        let before = store.list();

        let err = store.replace("99", update("Ghost")).unwrap_err();
        assert!(matches!(err, GreenhouseError::NotFound(_)));
        assert_eq!(err.to_string(), "Plant not found: 99");
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_replace_non_numeric_id_is_not_found() {
        let store = sample_store();
        let err = store.replace("fern", update("Fern")).unwrap_err();
        assert!(matches!(err, GreenhouseError::NotFound(_)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_returns_record_and_shrinks() {
        let store = sample_store();
        let removed = store.remove("1").unwrap();
        assert_eq!(removed.name, "Fern");

        let plants = store.list();
        assert_eq!(plants.len(), 1);
        assert_eq!(plants[0].id, 2);
        assert!(store.find_by_name("fern").is_empty());
    }

    #[test]
    fn test_remove_unknown_id_leaves_store_unchanged() {
        let store = sample_store();
        let before = store.list();

        let err = store.remove("99").unwrap_err();
        assert!(matches!(err, GreenhouseError::NotFound(_)));
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_remove_twice_fails_second_time() {
        let store = sample_store();
        store.remove("2").unwrap();
        assert!(store.remove("2").is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_id_coercion_ignores_surrounding_whitespace() {
        let store = sample_store();
        let removed = store.remove(" 2 ").unwrap();
        assert_eq!(removed.name, "Oak");
    }

    #[test]
    fn test_load_from_seed_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":1,"name":"Fern","type":"Indoor","color":"Green","height":30,"location":"Living room","images":"/images/fern.jpg"}}]"#
        )
        .unwrap();

        let store = PlantStore::load(file.path()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].name, "Fern");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = PlantStore::load(Path::new("/nonexistent/plants.json")).unwrap_err();
        assert!(matches!(err, GreenhouseError::Io(_)));
    }

    #[test]
    fn test_load_malformed_file_is_json_error() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = PlantStore::load(file.path()).unwrap_err();
        assert!(matches!(err, GreenhouseError::Json(_)));
    }

    #[test]
    fn test_duplicate_ids_match_first_occurrence() {
        let store = PlantStore::new(vec![plant(1, "Fern"), plant(1, "Shadow Fern")]);
        let removed = store.remove("1").unwrap();
        assert_eq!(removed.name, "Fern");
        assert_eq!(store.list()[0].name, "Shadow Fern");
    }
}
