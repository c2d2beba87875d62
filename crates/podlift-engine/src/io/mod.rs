//! Document locator: recursive discovery of POD-bearing source files.

use crate::models::Document;
use crate::syntax::AdapterRegistry;
use relative_path::RelativePath;
use std::fs;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Invalid source directory: {0}")]
    InvalidSourceDir(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Recursively collect documents containing POD under a base directory,
/// optionally restricted to a relative subdirectory.
///
/// Dot-prefixed entries (hidden files and directories) are skipped.
/// Files whose instruction list comes back empty are dropped; the rest
/// are returned sorted by path.
pub fn find_documents(
    base_dir: &Path,
    subdir: Option<&RelativePath>,
    registry: &Arc<AdapterRegistry>,
) -> Result<Vec<Document>, IoError> {
    let start = match subdir {
        Some(rel) => rel.to_path(base_dir),
        None => base_dir.to_path_buf(),
    };
    validate_source_dir(&start)?;

    let mut documents = Vec::new();
    scan_directory_recursive(&start, registry, &mut documents)?;
    documents.sort_by(|a, b| a.path().cmp(b.path()));
    Ok(documents)
}

fn scan_directory_recursive(
    dir: &Path,
    registry: &Arc<AdapterRegistry>,
    documents: &mut Vec<Document>,
) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            scan_directory_recursive(&path, registry, documents)?;
        } else {
            let mut document = Document::new(path, Arc::clone(registry));
            if !document.instructions().is_empty() {
                documents.push(document);
            }
        }
    }

    Ok(())
}

pub fn validate_source_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidSourceDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_source_dir, test_registry};

    const POD: &str = "//=head1 NAME\nDocumented\n=cut";
    const NO_POD: &str = "function undocumented() {}";

    #[test]
    fn finds_only_documented_files() {
        let dir = create_test_source_dir();
        create_test_file(&dir, "documented.js", POD);
        create_test_file(&dir, "bare.js", NO_POD);

        let docs = find_documents(dir.path(), None, &test_registry()).unwrap();
        assert_eq!(docs.len(), 1);
        assert!(docs[0].path().ends_with("documented.js"));
    }

    #[test]
    fn recurses_into_subdirectories() {
        let dir = create_test_source_dir();
        create_test_file(&dir, "top.js", POD);
        create_test_file(&dir, "nested/inner.js", POD);

        let docs = find_documents(dir.path(), None, &test_registry()).unwrap();
        assert_eq!(docs.len(), 2);
    }

    #[test]
    fn skips_dot_prefixed_entries() {
        let dir = create_test_source_dir();
        create_test_file(&dir, "visible.js", POD);
        create_test_file(&dir, ".hidden.js", POD);
        create_test_file(&dir, ".git/config.js", POD);

        let docs = find_documents(dir.path(), None, &test_registry()).unwrap();
        assert_eq!(docs.len(), 1);
        assert!(docs[0].path().ends_with("visible.js"));
    }

    #[test]
    fn results_are_sorted_by_path() {
        let dir = create_test_source_dir();
        create_test_file(&dir, "zeta.js", POD);
        create_test_file(&dir, "alpha.js", POD);
        create_test_file(&dir, "mid/beta.js", POD);

        let docs = find_documents(dir.path(), None, &test_registry()).unwrap();
        let paths: Vec<_> = docs.iter().map(|d| d.path().to_path_buf()).collect();
        let mut sorted = paths.clone();
        sorted.sort();
        assert_eq!(paths, sorted);
    }

    #[test]
    fn restricts_to_a_relative_subdirectory() {
        let dir = create_test_source_dir();
        create_test_file(&dir, "outside.js", POD);
        create_test_file(&dir, "lib/inside.js", POD);

        let docs =
            find_documents(dir.path(), Some(RelativePath::new("lib")), &test_registry()).unwrap();
        assert_eq!(docs.len(), 1);
        assert!(docs[0].path().ends_with("inside.js"));
    }

    #[test]
    fn invalid_base_directory_is_an_error() {
        let result = find_documents(Path::new("/no/such/dir"), None, &test_registry());
        assert!(matches!(result, Err(IoError::InvalidSourceDir(_))));
    }
}
