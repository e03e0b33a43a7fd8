//! Split record projection
//!
//! Maps a [`SplitRecord`] to its external resource shape: `url` from the
//! stored file reference and `post_id` as an integer, tagged with the fixed
//! resource type. Pure and synchronous; no other fields are exposed.

use serde::{Deserialize, Serialize};

use crate::record::SplitRecord;

/// Type discriminator for serialized split resources.
pub const SPLIT_RESOURCE_TYPE: &str = "split";

/// External representation of a split record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitResource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub url: String,
    pub post_id: i64,
}

/// Projects split records into [`SplitResource`]s.
pub struct SplitSerializer;

impl SplitSerializer {
    pub fn serialize(record: &SplitRecord) -> SplitResource {
        SplitResource {
            resource_type: SPLIT_RESOURCE_TYPE.to_string(),
            url: record.file_name(),
            post_id: record.post_id(),
        }
    }
}
