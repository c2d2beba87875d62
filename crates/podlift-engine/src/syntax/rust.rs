use super::CommentSyntax;
use relative_path::RelativePathBuf;

/// Adapter for POD in Rust sources.
///
/// Doc comment markers (`///`, `//!`) are stripped before plain `//` so
/// the longer prefix wins. Module paths map to slash-separated `.rs`
/// paths.
pub struct RustSyntax;

impl CommentSyntax for RustSyntax {
    fn extensions(&self) -> &[&str] {
        &["rs"]
    }

    fn strip_comment<'a>(&self, line: &'a str) -> &'a str {
        line.strip_prefix("///")
            .or_else(|| line.strip_prefix("//!"))
            .or_else(|| line.strip_prefix("//"))
            .or_else(|| line.strip_prefix("/*"))
            .unwrap_or(line)
    }

    fn class_to_path(&self, name: &str) -> RelativePathBuf {
        RelativePathBuf::from(format!("{}.rs", name.replace("::", "/")))
    }
}
