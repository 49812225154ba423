//! Permissive request body decoding.
//!
//! Bodies are expected to carry a single `message` field, either as a JSON
//! object (`{"message":"disk full"}`), as a bare pair (`"message": "disk full"`)
//! or as a loose `message: disk full` line. Anything else is kept verbatim as
//! an unknown-type payload; decoding never fails.

use serde_json::{Map, Value};

/// The only recognised body field.
pub const MESSAGE_KEY: &str = "message";

/// Message content extracted from an ingest request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagePayload {
    /// The value of the body's `message` field, quotes removed.
    Message(String),
    /// The raw body of a request whose shape was not recognised.
    Unknown(String),
}

impl MessagePayload {
    /// Decode a request body.
    ///
    /// Leading and trailing line breaks are ignored while looking for the
    /// `message` field. An unrecognised body is returned unmodified (only
    /// invalid UTF-8 sequences are replaced).
    pub fn decode(body: &[u8]) -> Self {
        let raw = String::from_utf8_lossy(body);
        let content = raw.trim_matches(['\n', '\r']);

        let message = match parse_object(content)
            .or_else(|| parse_object(&format!("{{{content}}}")))
        {
            Some(fields) => message_field(&fields),
            None => loose_pair(content),
        };

        match message {
            Some(text) => Self::Message(text),
            None => Self::Unknown(raw.into_owned()),
        }
    }

    /// The stored text, whichever variant this is.
    pub fn text(&self) -> &str {
        match self {
            Self::Message(text) | Self::Unknown(text) => text,
        }
    }

    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

fn parse_object(content: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str(content).ok()? {
        Value::Object(fields) => Some(fields),
        _ => None,
    }
}

/// Scalar `message` values are accepted; containers and `null` are not.
fn message_field(fields: &Map<String, Value>) -> Option<String> {
    match fields.get(MESSAGE_KEY)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// `message: text` with optional quotes around either side.
fn loose_pair(content: &str) -> Option<String> {
    let (key, value) = content.split_once(':')?;
    (trim_quotes(key) == MESSAGE_KEY).then(|| trim_quotes(value).to_owned())
}

fn trim_quotes(s: &str) -> &str {
    s.trim().trim_matches('"')
}
