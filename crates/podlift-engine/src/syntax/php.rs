use super::CommentSyntax;
use relative_path::RelativePathBuf;

/// Adapter for POD in PHP sources.
///
/// Accepts `//`, `#` or `/*` comment lead-ins, and maps
/// backslash-namespaced class names to slash-separated `.php` paths.
pub struct PhpSyntax;

impl CommentSyntax for PhpSyntax {
    fn extensions(&self) -> &[&str] {
        &["php"]
    }

    fn strip_comment<'a>(&self, line: &'a str) -> &'a str {
        line.strip_prefix("/*")
            .or_else(|| line.strip_prefix("//"))
            .or_else(|| line.strip_prefix("#"))
            .unwrap_or(line)
    }

    fn class_to_path(&self, name: &str) -> RelativePathBuf {
        RelativePathBuf::from(format!("{}.php", name.replace('\\', "/")))
    }
}
