use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use profile::{NewProfile, Profile, ProfileId, ProfilePatch};
use tracing::{debug, info};

use crate::{CandidateEntry, ProfileStore, StoreError};

/// An in-memory store using a `RwLock` around a `BTreeMap`.
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    records: BTreeMap<ProfileId, Profile>,
    // lower-cased email -> owner
    emails: HashMap<String, ProfileId>,
    next_id: u64,
}

fn email_key(email: &str) -> String {
    email.to_lowercase()
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                ..Inner::default()
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner
            .read()
            .map_err(|_| StoreError::backend("poisoned lock"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner
            .write()
            .map_err(|_| StoreError::backend("poisoned lock"))
    }

    /// Look a profile up by email, ignoring case.
    pub fn find_by_email(&self, email: &str) -> Result<Option<Profile>, StoreError> {
        let guard = self.read()?;
        Ok(guard
            .emails
            .get(&email_key(email.trim()))
            .and_then(|id| guard.records.get(id))
            .cloned())
    }

    /// Insert `new`, or overwrite the profile already registered under the
    /// same email.
    pub fn upsert_by_email(&self, new: NewProfile) -> Result<Profile, StoreError> {
        let new = new.validate()?;
        let mut guard = self.write()?;
        let key = email_key(&new.email);
        match guard.emails.get(&key).copied() {
            Some(id) => {
                let updated = new.into_profile(id);
                guard.records.insert(id, updated.clone());
                debug!(profile_id = %id, "profile_upserted");
                Ok(updated)
            }
            None => Ok(insert_locked(&mut guard, new)),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn insert_locked(inner: &mut Inner, new: NewProfile) -> Profile {
    let id = ProfileId(inner.next_id);
    inner.next_id += 1;
    inner.emails.insert(email_key(&new.email), id);
    let profile = new.into_profile(id);
    inner.records.insert(id, profile.clone());
    info!(profile_id = %id, "profile_created");
    profile
}

impl ProfileStore for InMemoryStore {
    fn resolve(&self, id: ProfileId) -> Result<Profile, StoreError> {
        self.read()?
            .records
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn list_others(&self, exclude: ProfileId) -> Result<Vec<CandidateEntry>, StoreError> {
        let guard = self.read()?;
        Ok(guard
            .records
            .values()
            .filter(|p| p.id != exclude)
            .cloned()
            .map(Ok)
            .collect())
    }

    fn create(&self, new: NewProfile) -> Result<Profile, StoreError> {
        let new = new.validate()?;
        let mut guard = self.write()?;
        if guard.emails.contains_key(&email_key(&new.email)) {
            return Err(StoreError::DuplicateEmail(new.email));
        }
        Ok(insert_locked(&mut guard, new))
    }

    fn list(&self, skip: usize, limit: usize) -> Result<Vec<Profile>, StoreError> {
        Ok(self
            .read()?
            .records
            .values()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    fn update(&self, id: ProfileId, patch: ProfilePatch) -> Result<Profile, StoreError> {
        let mut guard = self.write()?;
        let profile = guard.records.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        let fields = patch.touched_fields();
        patch.apply(profile)?;
        debug!(profile_id = %id, ?fields, "profile_updated");
        Ok(profile.clone())
    }

    fn delete(&self, id: ProfileId) -> Result<(), StoreError> {
        let mut guard = self.write()?;
        let removed = guard.records.remove(&id).ok_or(StoreError::NotFound(id))?;
        guard.emails.remove(&email_key(&removed.email));
        info!(profile_id = %id, "profile_deleted");
        Ok(())
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.records.len())
    }
}
