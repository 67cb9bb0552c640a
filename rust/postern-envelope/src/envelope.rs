use serde::{Deserialize, Deserializer, Serialize};

/// The discriminant tag of a [ResultEnvelope].
///
/// Tags this client does not recognize deserialize as [EnvelopeKind::Fail],
/// so a server newer than the client still classifies as a failure rather
/// than being dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnvelopeKind {
    /// An informational outcome; the content is a message for the user.
    Info,
    /// The requested resource does not exist.
    NotFound,
    /// The session is missing, expired, or insufficient for the operation.
    Unauthorized,
    /// The operation succeeded; the content is a message for the user.
    Success,
    /// The operation failed; the content describes the failure.
    Fail,
}

impl<'de> Deserialize<'de> for EnvelopeKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "Info" => Self::Info,
            "NotFound" => Self::NotFound,
            "Unauthorized" => Self::Unauthorized,
            "Success" => Self::Success,
            _ => Self::Fail,
        })
    }
}

/// A tagged wrapper around one server response.
///
/// Envelopes are immutable and carry no identity; the `kind` tag decides the
/// semantics of `content`. Both fields are optional on the wire - a response
/// without a tag is malformed and classification of it is a deliberate
/// no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    /// The discriminant tag; absent on malformed responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EnvelopeKind>,

    /// Message or payload, with semantics depending on `kind`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ResultEnvelope {
    /// Create an envelope with the given tag and content.
    pub fn new(kind: EnvelopeKind, content: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            content: Some(content.into()),
        }
    }

    /// A [EnvelopeKind::Success] envelope carrying the given message.
    pub fn success(content: impl Into<String>) -> Self {
        Self::new(EnvelopeKind::Success, content)
    }

    /// A [EnvelopeKind::Fail] envelope carrying the given message.
    pub fn fail(content: impl Into<String>) -> Self {
        Self::new(EnvelopeKind::Fail, content)
    }
}
