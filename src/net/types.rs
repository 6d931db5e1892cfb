//! Wire DTOs for the ClarityOS backend.
//!
//! DESIGN
//! ======
//! Response types are lenient: every field is optional or defaulted so a
//! partial answer still renders. Text fields accept numbers and lists, and a
//! malformed mentor card is skipped on its own. Only a body that is not a
//! JSON object is a decode failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Author of a history entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    /// Older backends label assistant turns `"bot"`.
    #[serde(alias = "bot")]
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One turn of the conversation as sent back to the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

/// Body of `POST /chat/message`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    /// Full transcript, oldest first, including the turn being sent.
    pub history: Vec<Message>,
    /// Extracted text of the active upload; serialized as `null` when absent.
    pub file_context: Option<String>,
}

/// Body of a `POST /chat/message` response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChatReply {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub reply: Option<String>,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub document_saved: bool,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub document_path: Option<String>,
    #[serde(default, deserialize_with = "deserialize_cards")]
    pub cards: Option<Vec<MentorCard>>,
    /// Set while a generated document is awaiting the user's review.
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub show_review_buttons: bool,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub document_preview: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub conversation_state: Option<String>,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub message_count: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub show_mentors: bool,
    /// Error detail on failure responses (FastAPI style).
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ChatReply {
    pub fn cards(&self) -> &[MentorCard] {
        self.cards.as_deref().unwrap_or_default()
    }

    /// Path of the saved document, when the reply reports one.
    pub fn saved_document_path(&self) -> Option<&str> {
        if !self.document_saved {
            return None;
        }
        self.document_path.as_deref().filter(|path| !path.is_empty())
    }
}

/// A recommended mentor as returned in `cards`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentorCard {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub bio: Option<String>,
    /// Some backends send a list of outcomes; it is joined with `, `.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub outcomes: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub why_this_mentor: Option<String>,
}

impl MentorCard {
    /// Tooltip text: the backend's reason, or one derived from the bio's
    /// first sentence. `None` when there is nothing to say.
    pub fn rationale(&self) -> Option<String> {
        match self.why_this_mentor.as_deref() {
            Some(reason) if !reason.trim().is_empty() => Some(reason.to_owned()),
            _ => {
                let bio = self.bio.as_deref().unwrap_or_default();
                let first_sentence = bio.split('.').next().unwrap_or_default().trim();
                (!first_sentence.is_empty()).then(|| format!("Expert in {first_sentence}"))
            }
        }
    }

    /// Click target; anything other than a web or mail link becomes `#`.
    pub fn href(&self) -> &str {
        match self.link.as_deref() {
            Some(link) if is_safe_href(link) => link,
            _ => "#",
        }
    }
}

/// Body of a `POST /upload` response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UploadReply {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub status: Option<String>,
    /// Extracted text of the uploaded file.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub filename: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl UploadReply {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}

/// Body of `GET /`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub mentors_indexed: Option<u64>,
    #[serde(default)]
    pub model: Option<String>,
}

/// A decoded response together with its HTTP status.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpReply<T> {
    pub status: u16,
    pub body: T,
}

impl<T> HttpReply<T> {
    pub fn new(status: u16, body: T) -> Self {
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Human-readable form of a `detail` field.
///
/// Strings pass through; structured details (e.g. validation error lists)
/// are shown as compact JSON. Empty or null details yield `None`.
pub fn detail_text(detail: Option<&serde_json::Value>) -> Option<String> {
    match detail? {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) if text.is_empty() => None,
        serde_json::Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Whether a link may be opened from rendered content.
pub fn is_safe_href(link: &str) -> bool {
    let lower = link.trim_start().to_ascii_lowercase();
    ["http://", "https://", "mailto:"].iter().any(|scheme| lower.starts_with(scheme))
}

/// Accept JSON truthiness (`true`, non-zero numbers, non-empty strings) as a flag.
fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(flag) => flag,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    })
}

/// Text from a JSON scalar or list; lists are joined with `, `.
/// Null, booleans and objects yield `None`.
pub fn value_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) => Some(text.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Array(items) => Some(
            items
                .iter()
                .map(|item| match item {
                    serde_json::Value::String(text) => text.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
        ),
        serde_json::Value::Null | serde_json::Value::Bool(_) | serde_json::Value::Object(_) => None,
    }
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value_text(&value))
}

/// Non-negative integral counts, whether sent as `3`, `3.0` or `"3"`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|v| v.is_finite() && *v >= 0.0 && v.fract() == 0.0)
                .map(|v| v as u64)
        }),
        serde_json::Value::String(s) => match s.trim().parse() {
            Ok(count) => Some(count),
            Err(_) => None,
        },
        _ => None,
    })
}

/// Mentor cards, decoded one at a time so a malformed entry is skipped.
fn deserialize_cards<'de, D>(deserializer: D) -> Result<Option<Vec<MentorCard>>, D::Error>
where
    D: Deserializer<'de>,
{
    let serde_json::Value::Array(items) = serde_json::Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    let cards = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<MentorCard>(item) {
            Ok(card) => Some(card),
            Err(err) => {
                log::warn!("skipping malformed mentor card: {err}");
                None
            }
        })
        .collect();
    Ok(Some(cards))
}
