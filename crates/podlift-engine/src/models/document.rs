//! Document model: one source file's extracted POD state.
//!
//! A document lazily parses its instruction list and derives the
//! classname and dependency list from it. All derived state is cached
//! and dropped when the bound path changes, so rebinding behaves like
//! constructing a fresh document.

use crate::models::Dependency;
use crate::parsing::{self, Instruction};
use crate::render::{self, RenderOptions};
use crate::syntax::{AdapterRegistry, CommentSyntax};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub struct Document {
    path: PathBuf,
    registry: Arc<AdapterRegistry>,
    instructions: Option<Vec<Instruction>>,
    dependencies: Option<Vec<Dependency>>,
}

impl Document {
    /// Bind a document to a file path. Nothing is read until the
    /// instruction list is first requested.
    pub fn new(path: impl Into<PathBuf>, registry: Arc<AdapterRegistry>) -> Self {
        Self {
            path: path.into(),
            registry,
            instructions: None,
            dependencies: None,
        }
    }

    /// Bind a document to a class name within a directory.
    ///
    /// The adapter for `extension` translates the name to a relative
    /// path using its language's separator and extension conventions.
    pub fn for_class(
        dir: &Path,
        class: &str,
        extension: &str,
        registry: Arc<AdapterRegistry>,
    ) -> Self {
        let relative = registry.for_extension(extension).class_to_path(class);
        Self::new(relative.to_path(dir), registry)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rebind to a different file, dropping every derived cache.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
        self.instructions = None;
        self.dependencies = None;
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn adapter(&self) -> Arc<dyn CommentSyntax> {
        self.registry.for_extension(&self.extension())
    }

    /// The parsed instruction list, computed on first access.
    ///
    /// An unreadable file yields an empty list; batch extraction never
    /// aborts on one bad input.
    pub fn instructions(&mut self) -> &[Instruction] {
        if self.instructions.is_none() {
            let adapter = self.adapter();
            self.instructions = Some(parsing::parse_file(&self.path, adapter.as_ref()));
        }
        match &self.instructions {
            Some(list) => list,
            None => &[],
        }
    }

    /// First content paragraph of the first heading titled "NAME".
    pub fn classname(&mut self) -> Option<String> {
        self.instructions()
            .iter()
            .find(|inst| inst.is_heading() && inst.title.eq_ignore_ascii_case("name"))
            .and_then(|inst| inst.content.first())
            .cloned()
    }

    /// Render the document's POD as an HTML fragment.
    pub fn to_html(&mut self, options: &RenderOptions) -> String {
        let instructions = self.instructions();
        render::render(instructions, options)
    }

    /// The flattened transitive dependency list declared in the
    /// document's DEPENDENCIES section, in first-discovery order.
    ///
    /// Each entry is resolved against the search roots; the result is
    /// cached on this document after the first call.
    pub fn dependencies(&mut self, search_roots: &[PathBuf]) -> &[Dependency] {
        if self.dependencies.is_none() {
            let mut visited = HashSet::new();
            let resolved = self.resolve_dependencies(search_roots, &mut visited);
            self.dependencies = Some(resolved);
        }
        match &self.dependencies {
            Some(list) => list,
            None => &[],
        }
    }

    /// Recursive resolution step. The visited set is shared across
    /// sibling and child calls within one top-level resolution; that is
    /// what suppresses cycles and duplicates.
    fn resolve_dependencies(
        &mut self,
        search_roots: &[PathBuf],
        visited: &mut HashSet<String>,
    ) -> Vec<Dependency> {
        let extension = self.extension();
        let registry = Arc::clone(&self.registry);
        let mut resolved: Vec<Dependency> = Vec::new();
        let mut in_dependencies = false;

        for inst in self.instructions() {
            if !in_dependencies {
                if inst.is_heading() && inst.title.eq_ignore_ascii_case("dependencies") {
                    in_dependencies = true;
                }
                continue;
            }
            if inst.element == "back" || inst.is_heading() {
                in_dependencies = false;
                continue;
            }
            if inst.element != "item" {
                continue;
            }

            let name: String = inst.title.chars().filter(|c| !c.is_whitespace()).collect();
            if visited.contains(&name) || name.eq_ignore_ascii_case("none") {
                continue;
            }
            visited.insert(name.clone());
            resolved.push(Dependency {
                name: name.clone(),
                path: None,
            });
            let entry = resolved.len() - 1;

            for root in search_roots {
                let mut child =
                    Document::for_class(root, &name, &extension, Arc::clone(&registry));
                if !child.exists() {
                    continue;
                }
                resolved[entry].path = Some(root.clone());
                let transitive = child.resolve_dependencies(search_roots, visited);
                resolved.extend(transitive);
            }
        }

        resolved
    }
}
