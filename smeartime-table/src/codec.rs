//! Text and JSON renderings of the catalog message.
//!
//! The text form is protobuf text format restricted to what the
//! three-field message can contain: one `field: value` pair per line,
//! `#` comments, blank lines ignored. The JSON form follows the protobuf
//! JSON mapping (camelCase names, empty and absent fields omitted).

use crate::proto::LeapTableProto;
use serde::Serialize;
use std::fmt::Write as _;
use thiserror::Error;

/// A text-format catalog that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct TextFormatError {
    pub line: usize,
    pub message: String,
}

impl TextFormatError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        TextFormatError {
            line,
            message: message.into(),
        }
    }
}

/// Parses the text form of a catalog. Later `end_jdn` lines override
/// earlier ones, matching text-format semantics for optional scalars.
pub fn from_text(input: &str) -> Result<LeapTableProto, TextFormatError> {
    let mut proto = LeapTableProto::default();
    for (idx, raw) in input.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or(raw).trim();
        if line.is_empty() {
            continue;
        }
        let (field, value) = line
            .split_once(':')
            .ok_or_else(|| TextFormatError::new(idx + 1, "expected `field: value`"))?;
        let value: i32 = value.trim().parse().map_err(|_| {
            TextFormatError::new(idx + 1, format!("invalid integer {:?}", value.trim()))
        })?;
        match field.trim() {
            "positive_leaps" => proto.positive_leaps.push(value),
            "negative_leaps" => proto.negative_leaps.push(value),
            "end_jdn" => proto.end_jdn = Some(value),
            other => {
                return Err(TextFormatError::new(
                    idx + 1,
                    format!("unknown field {other:?}"),
                ))
            }
        }
    }
    Ok(proto)
}

/// Renders the text form, one field per line in tag order.
pub fn to_text(proto: &LeapTableProto) -> String {
    let mut out = String::new();
    for jdn in &proto.positive_leaps {
        let _ = writeln!(out, "positive_leaps: {jdn}");
    }
    for jdn in &proto.negative_leaps {
        let _ = writeln!(out, "negative_leaps: {jdn}");
    }
    if let Some(end_jdn) = proto.end_jdn {
        let _ = writeln!(out, "end_jdn: {end_jdn}");
    }
    out
}

fn slice_is_empty(v: &&[i32]) -> bool {
    v.is_empty()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LeapTableJson<'a> {
    #[serde(skip_serializing_if = "slice_is_empty")]
    positive_leaps: &'a [i32],
    #[serde(skip_serializing_if = "slice_is_empty")]
    negative_leaps: &'a [i32],
    #[serde(skip_serializing_if = "Option::is_none")]
    end_jdn: Option<i32>,
}

/// Renders the protobuf JSON mapping of the catalog.
pub fn to_json(proto: &LeapTableProto) -> serde_json::Result<String> {
    serde_json::to_string(&LeapTableJson {
        positive_leaps: &proto.positive_leaps,
        negative_leaps: &proto.negative_leaps,
        end_jdn: proto.end_jdn,
    })
}
