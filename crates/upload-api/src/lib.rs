//! API resource serialization for the image-upload plugin.
//!
//! Projects persisted split records into the stable attribute shape exposed
//! through the host's JSON:API-style responses.

pub mod record;
pub mod serializer;

pub use record::SplitRecord;
pub use serializer::{SPLIT_RESOURCE_TYPE, SplitResource, SplitSerializer};
