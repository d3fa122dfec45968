//! Custom extractors for request validation at the HTTP boundary.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
