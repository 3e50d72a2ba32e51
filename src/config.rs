use crate::errors::StoreResult;
use crate::store::SqliteStore;
use std::path::PathBuf;

/// Database location used when neither the flag nor the environment names one.
pub const DEFAULT_DATABASE_PATH: &str = "data/pokedex.db";

/// Environment variable that overrides [`DEFAULT_DATABASE_PATH`].
pub const DATABASE_ENV: &str = "POKEDEX_DB";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DexConfig {
    pub database_path: PathBuf,
}

impl Default for DexConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_PATH)
    }
}

impl DexConfig {
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }

    pub fn open_store(&self) -> StoreResult<SqliteStore> {
        SqliteStore::new(self.database_path.clone())
    }
}
