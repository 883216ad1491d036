use serde::{Deserialize, Serialize};

use crate::seed::seed_demo;
use crate::{InMemoryStore, StoreError};

/// Runtime options for building the profile store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Load the demo profiles at startup.
    #[serde(default)]
    pub seed_demo: bool,
}

impl StoreConfig {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn with_demo_seed(mut self, seed: bool) -> Self {
        self.seed_demo = seed;
        self
    }

    /// Build the store described by this configuration.
    pub fn build(&self) -> Result<InMemoryStore, StoreError> {
        let store = InMemoryStore::new();
        if self.seed_demo {
            seed_demo(&store)?;
        }
        Ok(store)
    }
}
