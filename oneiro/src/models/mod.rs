use derive_builder::Builder;
use serde::{Deserialize, Serialize};

pub mod prelude {
    pub use crate::models::{DreamEntry, DreamEntryBuilder};
}

/// One recorded dream from a journal.
///
/// Only `content` is read by analysis; the remaining fields are journal
/// bookkeeping that travels with the entry untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct DreamEntry {
    /// Free text describing the dream. A missing field is treated as an
    /// empty entry.
    #[serde(default)]
    #[builder(default)]
    pub content: String,

    /// When the dream was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub date: Option<String>,

    /// Classification recorded by the journal itself.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    #[builder(default)]
    pub kind: Option<String>,
}
