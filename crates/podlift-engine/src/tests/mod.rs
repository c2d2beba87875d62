//! Shared test fixture helpers.

use crate::syntax::AdapterRegistry;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub fn create_test_source_dir() -> TempDir {
    TempDir::new().expect("create temp dir")
}

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(&path, content).expect("write test file");
    path
}

pub fn test_registry() -> Arc<AdapterRegistry> {
    AdapterRegistry::with_builtins().expect("built-in adapters")
}
