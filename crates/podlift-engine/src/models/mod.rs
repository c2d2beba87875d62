pub mod dependency;
pub mod document;

pub use dependency::Dependency;
pub use document::Document;
