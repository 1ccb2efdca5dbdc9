use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use super::response::Response;

/// Identifier of a question.
///
/// Generated as a UUID v4 string at creation. Boards written by earlier
/// versions carry JSON *numbers* here; deserialization accepts both and
/// normalizes a number to its canonical string rendering. All lookups
/// compare these normalized string forms — equality is by value, never by
/// the representation the identifier happened to arrive in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The canonical string form used for comparison and display.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Loose equality over canonical string forms.
    pub fn matches(&self, other: &QuestionId) -> bool {
        self.0 == other.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(s) => QuestionId(s),
            Repr::Number(n) => QuestionId(n.to_string()),
        })
    }
}

/// A user-submitted topic awaiting responses.
///
/// Questions are the unit of the board: posted from the creation form,
/// grown by appended responses, removed when resolved. The serialized
/// field names (`question` for the body, `name`/`response` inside each
/// response) are the board's historical on-disk format and must not
/// change; stores written by earlier versions remain loadable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub subject: String,
    /// The question text itself.
    #[serde(rename = "question")]
    pub body: String,
    /// Responses in the order they were given. Append-only.
    #[serde(default)]
    pub responses: Vec<Response>,
}

/// Input for posting a new question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuestionInput {
    pub subject: String,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_deserializes_from_string() {
        let id: QuestionId = serde_json::from_str("\"abc-123\"").unwrap();
        assert_eq!(id.as_str(), "abc-123");
    }

    #[test]
    fn id_deserializes_from_legacy_number() {
        let id: QuestionId = serde_json::from_str("0.7431944364333231").unwrap();
        assert_eq!(id.as_str(), "0.7431944364333231");
        assert!(id.matches(&QuestionId::from("0.7431944364333231")));
    }

    #[test]
    fn id_serializes_as_plain_string() {
        let json = serde_json::to_string(&QuestionId::from("0.5")).unwrap();
        assert_eq!(json, "\"0.5\"");
    }

    #[test]
    fn generated_ids_differ() {
        assert!(!QuestionId::generate().matches(&QuestionId::generate()));
    }

    #[test]
    fn question_uses_the_wire_field_names() {
        let question = Question {
            id: QuestionId::from("q1"),
            subject: "Printer jam".to_string(),
            body: "How do I fix it?".to_string(),
            responses: vec![Response {
                author: "Alex".to_string(),
                body: "Check the tray".to_string(),
            }],
        };

        let json: serde_json::Value = serde_json::to_value(&question).unwrap();
        assert_eq!(json["question"], "How do I fix it?");
        assert_eq!(json["responses"][0]["name"], "Alex");
        assert_eq!(json["responses"][0]["response"], "Check the tray");
        assert!(json.get("body").is_none());
    }

    #[test]
    fn responses_default_to_empty_when_absent() {
        let question: Question =
            serde_json::from_str(r#"{"id": 1, "subject": "s", "question": "q"}"#).unwrap();
        assert!(question.responses.is_empty());
        assert_eq!(question.id.as_str(), "1");
    }
}
