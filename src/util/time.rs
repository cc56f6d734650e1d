// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Time formatting helpers.
//!
//! This module converts between the `mm:ss` positions used for events
//! inside a video and durations, and renders alert timestamps relative
//! to the current time.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Parse an `mm:ss` position into an offset.
pub fn parse_position(position: &str) -> Option<Duration> {
    let (minutes, seconds) = position.trim().split_once(':')?;
    let minutes: u64 = minutes.parse().ok()?;
    let seconds: u64 = seconds.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    Some(Duration::from_secs(minutes * 60 + seconds))
}

/// Render `timestamp` relative to `now`: minutes within the last hour,
/// hours within the last day, the calendar date otherwise.
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    let minutes = elapsed.num_minutes().max(0);

    if minutes < 60 {
        format!("{}m ago", minutes)
    } else if elapsed.num_hours() < 24 {
        format!("{}h ago", elapsed.num_hours())
    } else {
        timestamp.format("%Y-%m-%d").to_string()
    }
}
