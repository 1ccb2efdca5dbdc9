use serde::{Deserialize, Serialize};

/// A single answer attached to a question.
///
/// Responses have no identity of their own: they are owned by their parent
/// question, ordered by submission, and never edited or removed once
/// given. The serialized field names (`name`, `response`) are part of the
/// board's fixed on-disk format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(rename = "name")]
    pub author: String,
    #[serde(rename = "response")]
    pub body: String,
}

/// Input for appending a response to a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateResponseInput {
    pub author: String,
    pub body: String,
}
