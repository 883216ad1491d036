//! # PeerConnect Store (`store`)
//!
//! Storage boundary for profile records. The matching engine never talks to a
//! database directly; it consumes the two read operations of
//! [`ProfileStore`] (`resolve` and `list_others`). The remaining operations
//! (create, list, update, delete) exist for the transport layer.
//!
//! ## Backends
//!
//! - [`InMemoryStore`]: `RwLock`-guarded `BTreeMap`, used by the server and
//!   by tests. Ids are assigned from a monotonically increasing counter and
//!   listings come back in ascending id order.
//!
//! Other persistence technologies plug in by implementing [`ProfileStore`].
//!
//! ## Example
//!
//! ```
//! use profile::{NewProfile, TagSet};
//! use store::{InMemoryStore, ProfileStore};
//!
//! let store = InMemoryStore::new();
//! let alice = store
//!     .create(
//!         NewProfile::new("Alice Data", "alice@example.com")
//!             .with_skills(TagSet::from_strs(["python"])),
//!     )
//!     .unwrap();
//! let bob = store
//!     .create(NewProfile::new("Bob Analyst", "bob@example.com"))
//!     .unwrap();
//!
//! let others = store.list_others(alice.id).unwrap();
//! assert_eq!(others.len(), 1);
//! assert_eq!(others[0].as_ref().unwrap().id, bob.id);
//! ```

mod config;
mod memory;
pub mod seed;

use profile::{NewProfile, Profile, ProfileError, ProfileId, ProfilePatch};
use thiserror::Error;

pub use crate::config::StoreConfig;
pub use crate::memory::InMemoryStore;

/// Default page size for [`ProfileStore::list`].
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// One entry of a candidate listing. A single entry may fail to load without
/// failing the whole listing.
pub type CandidateEntry = Result<Profile, StoreError>;

/// Errors produced by store backends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("profile {0} not found")]
    NotFound(ProfileId),

    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    #[error("invalid profile: {0}")]
    Invalid(#[from] ProfileError),

    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub(crate) fn backend(msg: impl Into<String>) -> Self {
        StoreError::Backend(msg.into())
    }
}

/// Profile persistence adapter.
pub trait ProfileStore: Send + Sync {
    /// Fetch a single profile snapshot.
    fn resolve(&self, id: ProfileId) -> Result<Profile, StoreError>;

    /// Every profile except `exclude`, in a stable order.
    fn list_others(&self, exclude: ProfileId) -> Result<Vec<CandidateEntry>, StoreError>;

    /// Validate and insert a new profile, assigning its id.
    fn create(&self, new: NewProfile) -> Result<Profile, StoreError>;

    /// Page through profiles in id order.
    fn list(&self, skip: usize, limit: usize) -> Result<Vec<Profile>, StoreError>;

    /// Apply a partial update and return the new snapshot.
    fn update(&self, id: ProfileId, patch: ProfilePatch) -> Result<Profile, StoreError>;

    fn delete(&self, id: ProfileId) -> Result<(), StoreError>;

    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}
