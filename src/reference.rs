//! Message reference parsing
//!
//! Accepts either a Slack permalink or an explicit channel + timestamp pair
//! and produces a validated `MessageRef`. No network access happens here.
//!
//! Permalink shape: `https://<workspace>.slack.com/archives/<CHANNEL>/p<16 digits>`
//! (thread permalinks carry a `?thread_ts=...` query, which is ignored).
//! The 16 digits split into 10 digits of seconds and 6 of microseconds.

use crate::model::MessageRef;
use thiserror::Error;
use url::Url;

const SECONDS_DIGITS: usize = 10;
const MICROS_DIGITS: usize = 6;

/// Input validation failures, all reported before contacting Slack
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("Specify either a message URL or both a channel ID and a timestamp")]
    InputConflict,

    #[error("Invalid Slack message URL: {url} (expected .../archives/<CHANNEL>/p<16 digits>)")]
    MalformedUrl { url: String },

    #[error("Invalid message timestamp: {timestamp} (expected 1234567890.123456)")]
    MalformedTimestamp { timestamp: String },
}

/// Normalize the two accepted input forms into a `MessageRef`
///
/// Exactly one of `url` or (`channel` and `timestamp`) must be supplied.
///
/// # Errors
///
/// * `InputConflict` - both forms, neither form, or half of the explicit form
/// * `MalformedUrl` - the URL does not have the permalink shape
/// * `MalformedTimestamp` - the explicit timestamp is not `\d{10}\.\d{6}`
pub fn parse_reference(
    url: Option<&str>,
    channel: Option<&str>,
    timestamp: Option<&str>,
) -> Result<MessageRef, ReferenceError> {
    match (url, channel, timestamp) {
        (Some(url), None, None) => parse_permalink(url),
        (None, Some(channel), Some(timestamp)) => MessageRef::new(channel, timestamp),
        _ => Err(ReferenceError::InputConflict),
    }
}

/// Extract channel and timestamp from a permalink
pub fn parse_permalink(url: &str) -> Result<MessageRef, ReferenceError> {
    let malformed = || ReferenceError::MalformedUrl {
        url: url.to_string(),
    };

    let parsed = Url::parse(url).map_err(|_| malformed())?;
    let segments: Vec<&str> = parsed
        .path_segments()
        .ok_or_else(malformed)?
        .filter(|s| !s.is_empty())
        .collect();

    let archives = segments
        .iter()
        .position(|s| *s == "archives")
        .ok_or_else(malformed)?;

    let (channel, packed) = match &segments[archives + 1..] {
        [channel, packed] => (*channel, *packed),
        _ => return Err(malformed()),
    };

    let digits = packed.strip_prefix('p').ok_or_else(malformed)?;
    if channel.is_empty()
        || digits.len() != SECONDS_DIGITS + MICROS_DIGITS
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(malformed());
    }

    let (seconds, micros) = digits.split_at(SECONDS_DIGITS);
    MessageRef::new(channel, format!("{seconds}.{micros}"))
}

/// Strip one pair of surrounding colons (`:thumbsup:` becomes `thumbsup`)
///
/// Only the outer colons go; the name itself is never rewritten, so skin
/// tone variants such as `thumbsup::skin-tone-2` stay distinct.
pub fn trim_emoji_colons(name: &str) -> &str {
    name.strip_prefix(':')
        .and_then(|n| n.strip_suffix(':'))
        .filter(|n| !n.is_empty())
        .unwrap_or(name)
}

/// Check the `SSSSSSSSSS.UUUUUU` timestamp shape
pub fn is_valid_timestamp(timestamp: &str) -> bool {
    match timestamp.split_once('.') {
        Some((seconds, micros)) => {
            seconds.len() == SECONDS_DIGITS
                && micros.len() == MICROS_DIGITS
                && seconds.bytes().all(|b| b.is_ascii_digit())
                && micros.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}
