//! Normalization of Data API video items into [`VideoRecord`]s.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use ytops_core::VideoRecord;

use crate::error::YoutubeError;
use crate::types::{Thumbnails, VideoItem};

static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^P(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$")
        .expect("valid duration regex")
});

/// Decodes an ISO-8601 duration (`PT#H#M#S`) into whole seconds.
///
/// Every component is optional and missing ones count as zero, so `"PT"`
/// decodes to 0. A leading day component (`"P1DT2H"`, `"P0D"`) is accepted
/// because long live archives report one. Returns `None` for anything else,
/// including overflow.
#[must_use]
pub fn parse_iso8601_duration(raw: &str) -> Option<u64> {
    let caps = DURATION_RE.captures(raw)?;
    if caps.get(1).is_none() && !raw.contains('T') {
        // bare "P"
        return None;
    }

    let component = |idx: usize| -> Option<u64> {
        caps.get(idx)
            .map_or(Some(0), |m| m.as_str().parse::<u64>().ok())
    };

    let days = component(1)?;
    let hours = component(2)?;
    let minutes = component(3)?;
    let seconds = component(4)?;

    days.checked_mul(86_400)?
        .checked_add(hours.checked_mul(3_600)?)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)
}

/// Parses an RFC 3339 publish timestamp into UTC.
#[must_use]
pub fn parse_published_at(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// Coerces a statistics counter to `u64`.
///
/// The API sends counters as decimal strings; absent, negative, or
/// non-numeric values become 0.
pub(crate) fn coerce_count(value: Option<&serde_json::Value>) -> u64 {
    match value {
        Some(serde_json::Value::String(s))
            if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) =>
        {
            s.parse::<u64>().unwrap_or(0)
        }
        Some(serde_json::Value::Number(n)) => n.as_u64().unwrap_or(0),
        _ => 0,
    }
}

/// Best available thumbnail: maxres, standard, high, medium, then default.
pub(crate) fn pick_thumbnail(thumbnails: &Thumbnails) -> Option<String> {
    [
        &thumbnails.maxres,
        &thumbnails.standard,
        &thumbnails.high,
        &thumbnails.medium,
        &thumbnails.default,
    ]
    .into_iter()
    .flatten()
    .next()
    .map(|t| t.url.clone())
}

/// Converts a `videos` API item into a [`VideoRecord`].
///
/// # Errors
///
/// Returns [`YoutubeError::Decode`] when the duration is missing or malformed,
/// or when a publish timestamp is present but malformed. Zeroing a bad
/// duration would silently move the upload into the shorts bucket.
pub fn normalize_video(item: VideoItem) -> Result<VideoRecord, YoutubeError> {
    let raw_duration = item
        .content_details
        .and_then(|details| details.duration)
        .unwrap_or_default();
    let duration_seconds =
        parse_iso8601_duration(&raw_duration).ok_or_else(|| YoutubeError::Decode {
            video_id: item.id.clone(),
            field: "duration",
            value: raw_duration.clone(),
        })?;

    let published_at = match item.snippet.published_at.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(parse_published_at(raw).ok_or_else(|| YoutubeError::Decode {
            video_id: item.id.clone(),
            field: "publishedAt",
            value: raw.to_owned(),
        })?),
    };

    let thumbnail = pick_thumbnail(&item.snippet.thumbnails);

    Ok(VideoRecord {
        likes: coerce_count(item.statistics.like_count.as_ref()),
        comments: coerce_count(item.statistics.comment_count.as_ref()),
        id: item.id,
        title: item.snippet.title,
        published_at,
        duration_seconds,
        thumbnail,
    })
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
