//! Log record types and their persisted line format.
//!
//! A record is stored as one JSON object per line:
//!
//! ```text
//! {"level":"info","id":"42","raw":"disk full","time":"2026-10-16T12:00:00Z"}
//! {"level":"info","id":"7","UNKNOWN_MESSAGE_TYPE":"not-json-at-all","time":"2026-10-16T12:00:01Z"}
//! ```

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::payload::MessagePayload;

/// Field name used for unrecognised bodies in the persisted format.
///
/// serde `rename` attributes need a literal, so the wire structs below spell
/// it out; the two must stay equal.
pub const UNKNOWN_MESSAGE_TYPE_KEY: &str = "UNKNOWN_MESSAGE_TYPE";

const LEVEL: &str = "info";

/// A record to be appended. The store assigns the timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLogRecord {
    /// Caller-supplied identifier. Not unique, not validated.
    pub id: String,
    pub payload: MessagePayload,
}

impl NewLogRecord {
    pub fn new(id: impl Into<String>, payload: MessagePayload) -> Self {
        Self {
            id: id.into(),
            payload,
        }
    }

    /// Stamp the record with a write time, truncated to whole seconds.
    pub fn stamp(self, time: DateTime<Utc>) -> LogRecord {
        LogRecord {
            id: self.id,
            payload: self.payload,
            time: time.trunc_subsecs(0),
        }
    }
}

/// A persisted, immutable log record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub id: String,
    pub payload: MessagePayload,
    pub time: DateTime<Utc>,
}

#[derive(Serialize)]
struct WireRecordRef<'a> {
    level: &'static str,
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<&'a str>,
    #[serde(
        rename = "UNKNOWN_MESSAGE_TYPE",
        skip_serializing_if = "Option::is_none"
    )]
    unknown: Option<&'a str>,
    time: String,
}

#[derive(Deserialize)]
struct WireRecord {
    id: String,
    raw: Option<String>,
    #[serde(rename = "UNKNOWN_MESSAGE_TYPE")]
    unknown: Option<String>,
    time: DateTime<Utc>,
}

impl LogRecord {
    /// Serialize to a single `\n`-terminated line.
    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        let (raw, unknown) = match &self.payload {
            MessagePayload::Message(text) => (Some(text.as_str()), None),
            MessagePayload::Unknown(text) => (None, Some(text.as_str())),
        };
        let wire = WireRecordRef {
            level: LEVEL,
            id: &self.id,
            raw,
            unknown,
            time: self.time.to_rfc3339_opts(SecondsFormat::Secs, true),
        };

        let mut line = serde_json::to_string(&wire)?;
        line.push('\n');
        Ok(line)
    }

    /// Parse one persisted line (trailing newline optional).
    pub fn from_line(line: &str) -> Result<Self, serde_json::Error> {
        let wire: WireRecord = serde_json::from_str(line.trim_end())?;
        let payload = match (wire.raw, wire.unknown) {
            (Some(text), None) => MessagePayload::Message(text),
            (None, Some(text)) => MessagePayload::Unknown(text),
            _ => {
                return Err(serde::de::Error::custom(format!(
                    "record must carry exactly one of `raw` or `{UNKNOWN_MESSAGE_TYPE_KEY}`"
                )));
            }
        };

        Ok(Self {
            id: wire.id,
            payload,
            time: wire.time,
        })
    }
}
