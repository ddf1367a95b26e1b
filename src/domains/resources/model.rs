//! The resource entity and its write payloads.

use serde::{Deserialize, Serialize};

/// A single resource record.
///
/// `id` is assigned by the store and never taken from client input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique identifier, issued in strictly increasing order from 1.
    pub id: u64,

    /// Display name of the resource.
    pub name: String,

    /// Free-form description.
    pub description: String,
}

/// Validated body of a create or update request.
///
/// Produced by the schema check in [`super::schema`]; both fields are
/// guaranteed present because the write schema requires them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceInput {
    pub name: String,
    pub description: String,
}

/// Field-wise patch applied by [`super::store::ResourceStore::update`].
///
/// Absent fields keep their prior value on the stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<ResourceInput> for ResourcePatch {
    fn from(input: ResourceInput) -> Self {
        Self {
            name: Some(input.name),
            description: Some(input.description),
        }
    }
}
