#![allow(dead_code)]

use refdoc::storage::{JsonFileStore, KeyValueStore, MemoryStore};
use refdoc::{initialize, AppState, Config};
use std::path::Path;

/// Viewer over the bundled document with in-memory stores.
pub fn viewer() -> AppState {
    initialize(
        &Config::default(),
        Box::new(MemoryStore::new()),
        Box::new(MemoryStore::new()),
    )
    .expect("bundled document loads")
}

/// Viewer over the bundled document persisting into `dir`.
pub fn viewer_in(dir: &Path) -> AppState {
    initialize(&Config::default(), store(dir), store(dir)).expect("bundled document loads")
}

pub fn store(dir: &Path) -> Box<dyn KeyValueStore> {
    Box::new(JsonFileStore::new(dir).expect("open store"))
}
