//! Demo profiles for local development.
//!
//! Seeding is an upsert keyed on email, so running it against a store that
//! already holds these users refreshes them instead of failing.

use profile::{NewProfile, Profile, TagSet};
use tracing::info;

use crate::{InMemoryStore, StoreError};

/// The three demo users: Alice (NLP), Bob (BI) and Carol (recsys).
pub fn demo_profiles() -> Vec<NewProfile> {
    vec![
        NewProfile::new("Alice Data", "alice@example.com")
            .with_headline("NLP enthusiast")
            .with_skills(TagSet::from_strs(["python", "pandas", "nlp"]))
            .with_interests(TagSet::from_strs(["recsys", "vector-search"]))
            .with_github_url("https://github.com/example/alice"),
        NewProfile::new("Bob Analyst", "bob@example.com")
            .with_headline("Viz + BI")
            .with_skills(TagSet::from_strs(["sql", "tableau", "viz"]))
            .with_interests(TagSet::from_strs(["python", "pandas", "ml"])),
        NewProfile::new("Carol ML", "carol@example.com")
            .with_headline("Recsys tinkerer")
            .with_skills(TagSet::from_strs(["ml", "recsys", "python"]))
            .with_interests(TagSet::from_strs(["nlp", "vector-search", "sql"]))
            .with_github_url("https://github.com/example/carol"),
    ]
}

/// Upsert the demo profiles into `store`.
pub fn seed_demo(store: &InMemoryStore) -> Result<Vec<Profile>, StoreError> {
    let seeded = demo_profiles()
        .into_iter()
        .map(|p| store.upsert_by_email(p))
        .collect::<Result<Vec<_>, _>>()?;
    info!(count = seeded.len(), "demo_profiles_seeded");
    Ok(seeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProfileStore;

    #[test]
    fn seeding_twice_is_idempotent() {
        let store = InMemoryStore::new();
        let first = seed_demo(&store).unwrap();
        let second = seed_demo(&store).unwrap();
        assert_eq!(store.len().unwrap(), 3);
        assert_eq!(first, second);
    }
}
