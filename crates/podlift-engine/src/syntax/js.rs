use super::CommentSyntax;
use relative_path::RelativePathBuf;

/// Adapter for POD in JavaScript sources.
///
/// Accepts single-line (`//`) or multi-line (`/*`) comment lead-ins, and
/// maps dotted module names to slash-separated `.js` paths.
pub struct JsSyntax;

impl CommentSyntax for JsSyntax {
    fn extensions(&self) -> &[&str] {
        &["js"]
    }

    fn strip_comment<'a>(&self, line: &'a str) -> &'a str {
        line.strip_prefix("//")
            .or_else(|| line.strip_prefix("/*"))
            .unwrap_or(line)
    }

    fn class_to_path(&self, name: &str) -> RelativePathBuf {
        RelativePathBuf::from(format!("{}.js", name.replace('.', "/")))
    }
}
