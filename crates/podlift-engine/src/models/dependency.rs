use std::path::PathBuf;

/// One resolved or unresolved dependency reference.
///
/// The name comes from an `=item` title inside a DEPENDENCIES section,
/// with all whitespace stripped. When a search root contained a matching
/// file, `path` holds that root; an unresolved name is still recorded,
/// just without a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    pub path: Option<PathBuf>,
}

impl Dependency {
    pub fn resolved(&self) -> bool {
        self.path.is_some()
    }
}
