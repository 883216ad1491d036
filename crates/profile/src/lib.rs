//! # PeerConnect Profiles (`profile`)
//!
//! Data model shared by the store, the matching engine and the HTTP layer.
//!
//! ## Core Types
//!
//! - [`ProfileId`]: store-assigned identifier.
//! - [`TagSet`]: deduplicated, case-sensitive tag collection. Constructing or
//!   deserializing one is the only normalization step skills and interests
//!   ever go through.
//! - [`Profile`]: a stored profile snapshot.
//! - [`NewProfile`] / [`ProfilePatch`]: create and partial-update payloads with
//!   field validation.
//!
//! ## Example
//!
//! ```
//! use profile::{NewProfile, ProfileId, TagSet};
//!
//! let alice = NewProfile::new("Alice Data", "alice@example.com")
//!     .with_skills(TagSet::from_strs(["python", "pandas", "python"]))
//!     .validate()
//!     .expect("valid payload")
//!     .into_profile(ProfileId(1));
//!
//! assert_eq!(alice.skills.len(), 2);
//! assert!(alice.interests.is_empty());
//! ```

mod error;
mod tags;
mod types;
pub mod validate;

pub use crate::error::ProfileError;
pub use crate::tags::TagSet;
pub use crate::types::{NewProfile, Profile, ProfileId, ProfilePatch};
