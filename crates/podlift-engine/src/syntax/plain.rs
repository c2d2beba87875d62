use super::CommentSyntax;

/// Default adapter: no comment stripping, names map to themselves.
///
/// Serves files whose extension no installed adapter claims.
pub struct PlainSyntax;

impl CommentSyntax for PlainSyntax {
    fn extensions(&self) -> &[&str] {
        &[]
    }
}
