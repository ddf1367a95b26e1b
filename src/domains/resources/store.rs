//! In-memory resource store.
//!
//! The store owns the resource sequence and the identifier counter and is
//! the single source of truth for resource state. It lives only for the
//! process lifetime: construct one at startup, share it behind a lock, and
//! let it drop on exit.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use super::error::ResourceError;
use super::model::{Resource, ResourceInput, ResourcePatch};

/// The store handle shared across request handlers.
///
/// The axum runtime is multi-threaded, so every store operation runs under
/// this lock to keep the uniqueness and ordering invariants intact.
pub type SharedStore = Arc<RwLock<ResourceStore>>;

/// Owns the sequence of resources and the identifier counter.
#[derive(Debug)]
pub struct ResourceStore {
    records: Vec<Resource>,
    next_id: u64,
}

impl Default for ResourceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceStore {
    /// Create a new, empty store. The first issued id will be 1.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Wrap a fresh store in the shared handle.
    pub fn shared() -> SharedStore {
        Arc::new(RwLock::new(Self::new()))
    }

    /// All resources in insertion order.
    pub fn list(&self) -> &[Resource] {
        &self.records
    }

    /// Look up a resource by id.
    pub fn get(&self, id: u64) -> Result<&Resource, ResourceError> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or(ResourceError::NotFound)
    }

    /// Append a new resource under a freshly allocated id.
    ///
    /// Ids are issued strictly increasing from 1 and never reused, even
    /// after deletions.
    pub fn create(&mut self, input: ResourceInput) -> Resource {
        let resource = Resource {
            id: self.next_id,
            name: input.name,
            description: input.description,
        };
        self.next_id += 1;
        self.records.push(resource.clone());
        debug!(id = resource.id, "resource created");
        resource
    }

    /// Merge `patch` into the resource with the given id.
    ///
    /// Fields absent from the patch keep their prior value; the id is
    /// never altered.
    pub fn update(&mut self, id: u64, patch: ResourcePatch) -> Result<Resource, ResourceError> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ResourceError::NotFound)?;

        if let Some(name) = patch.name {
            record.name = name;
        }
        if let Some(description) = patch.description {
            record.description = description;
        }
        debug!(id, "resource updated");
        Ok(record.clone())
    }

    /// Remove the resource with the given id, returning the removed id.
    ///
    /// The counter is not decremented; a deleted id stays retired forever.
    pub fn delete(&mut self, id: u64) -> Result<u64, ResourceError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(ResourceError::NotFound)?;

        self.records.remove(index);
        debug!(id, "resource deleted");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, description: &str) -> ResourceInput {
        ResourceInput {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_ids_strictly_increasing_from_one() {
        let mut store = ResourceStore::new();
        let ids: Vec<u64> = (0..5)
            .map(|i| store.create(input(&format!("r{i}"), "d")).id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_create_then_get_round_trip() {
        let mut store = ResourceStore::new();
        let created = store.create(input("alpha", "first"));
        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched, &created);
    }

    #[test]
    fn test_get_unknown_id() {
        let store = ResourceStore::new();
        assert_eq!(store.get(9999), Err(ResourceError::NotFound));
    }

    #[test]
    fn test_update_merges_and_preserves_id() {
        let mut store = ResourceStore::new();
        let created = store.create(input("alpha", "first"));

        let updated = store
            .update(
                created.id,
                ResourcePatch {
                    name: Some("beta".to_string()),
                    description: None,
                },
            )
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "beta");
        // Absent patch field keeps the prior value.
        assert_eq!(updated.description, "first");
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = ResourceStore::new();
        let result = store.update(42, ResourcePatch::default());
        assert_eq!(result, Err(ResourceError::NotFound));
    }

    #[test]
    fn test_delete_removes_exactly_one_in_order() {
        let mut store = ResourceStore::new();
        store.create(input("a", "d1"));
        store.create(input("b", "d2"));
        store.create(input("c", "d3"));

        assert_eq!(store.delete(2), Ok(2));

        let ids: Vec<u64> = store.list().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(store.get(2), Err(ResourceError::NotFound));
    }

    #[test]
    fn test_deleted_ids_are_never_reused() {
        let mut store = ResourceStore::new();
        store.create(input("a", "d"));
        store.create(input("b", "d"));
        store.delete(2).unwrap();

        let next = store.create(input("c", "d"));
        assert_eq!(next.id, 3);
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut store = ResourceStore::new();
        assert_eq!(store.delete(1), Err(ResourceError::NotFound));
    }
}
