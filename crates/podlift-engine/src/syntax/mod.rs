//! Comment-syntax adapters.
//!
//! One adapter per source language: it strips that language's comment
//! lead-in from a line, recognises POD instruction lines, and maps a
//! class/module name to the relative file path expected to contain it.
//! Adapters are compiled in and looked up by file extension through the
//! [`AdapterRegistry`]; a plain adapter handles everything else.

use regex::Regex;
use relative_path::RelativePathBuf;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

mod js;
mod php;
mod plain;
mod rust;

pub use js::JsSyntax;
pub use php::PhpSyntax;
pub use plain::PlainSyntax;
pub use rust::RustSyntax;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("no comment-syntax adapters installed")]
    NoAdapters,
}

/// Pattern for a POD instruction line: `=` + word tag + optional title.
fn instruction_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^=(\w+)\s*(.*)$").expect("valid instruction pattern"))
}

/// Per-language comment syntax policy.
pub trait CommentSyntax: Send + Sync {
    /// File extensions (lowercase, no dot) this adapter handles.
    fn extensions(&self) -> &[&str];

    /// Recognise a POD instruction line, returning `(tag, title)`.
    ///
    /// The title is trimmed and may be empty. Returns `None` for
    /// anything that is not an instruction line.
    fn classify(&self, line: &str) -> Option<(String, String)> {
        instruction_pattern()
            .captures(line)
            .map(|caps| (caps[1].to_string(), caps[2].trim_end().to_string()))
    }

    /// Strip the language's single/multi-line comment lead-in, if any.
    fn strip_comment<'a>(&self, line: &'a str) -> &'a str {
        line
    }

    /// Map a class/module name to the relative path of its source file.
    fn class_to_path(&self, name: &str) -> RelativePathBuf {
        RelativePathBuf::from(name)
    }
}

/// Static registry mapping file extensions to adapters.
///
/// Built once at startup from the compiled-in adapter set; shared
/// read-only between documents afterwards.
pub struct AdapterRegistry {
    by_extension: HashMap<String, Arc<dyn CommentSyntax>>,
    default: Arc<dyn CommentSyntax>,
}

impl AdapterRegistry {
    /// Build a registry from the built-in adapters.
    pub fn with_builtins() -> Result<Arc<Self>, RegistryError> {
        Self::from_adapters(vec![
            Arc::new(JsSyntax) as Arc<dyn CommentSyntax>,
            Arc::new(PhpSyntax),
            Arc::new(RustSyntax),
        ])
    }

    /// Build a registry from an explicit adapter set.
    ///
    /// The plain adapter always serves as the fallback for unknown
    /// extensions. An empty adapter set is a configuration error.
    pub fn from_adapters(
        adapters: Vec<Arc<dyn CommentSyntax>>,
    ) -> Result<Arc<Self>, RegistryError> {
        if adapters.is_empty() {
            return Err(RegistryError::NoAdapters);
        }

        let mut by_extension = HashMap::new();
        for adapter in adapters {
            for ext in adapter.extensions() {
                by_extension.insert(ext.to_lowercase(), Arc::clone(&adapter));
            }
        }

        Ok(Arc::new(Self {
            by_extension,
            default: Arc::new(PlainSyntax),
        }))
    }

    /// Look up the adapter for a file extension, falling back to the
    /// plain adapter.
    pub fn for_extension(&self, extension: &str) -> Arc<dyn CommentSyntax> {
        self.by_extension
            .get(&extension.to_lowercase())
            .map(Arc::clone)
            .unwrap_or_else(|| Arc::clone(&self.default))
    }
}
