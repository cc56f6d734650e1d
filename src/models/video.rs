// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Saved footage and the moments detected within it.

use crate::models::notification::Severity;
use crate::util::time::parse_position;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One detected moment within a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedEvent {
    /// Offset into the video as `mm:ss`.
    #[serde(rename = "timestamp")]
    pub position: String,
    pub description: String,
    #[serde(rename = "isDangerous", default)]
    pub dangerous: bool,
}

impl TimedEvent {
    pub fn new(position: impl Into<String>, description: impl Into<String>, dangerous: bool) -> Self {
        Self {
            position: position.into(),
            description: description.into(),
            dangerous,
        }
    }

    /// Offset from the start of the video, if the position is well formed.
    pub fn offset(&self) -> Option<Duration> {
        parse_position(&self.position)
    }
}

/// A saved recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub name: String,
    #[serde(rename = "url")]
    pub media_url: String,
    pub thumbnail_url: String,
    pub created_at: DateTime<Utc>,
    /// Events in the order they were recorded.
    #[serde(rename = "timestamps", default)]
    pub events: Vec<TimedEvent>,
}

impl Video {
    /// Number of events flagged as dangerous.
    pub fn alert_count(&self) -> usize {
        self.events.iter().filter(|e| e.dangerous).count()
    }

    /// Overall threat level from the share of dangerous events.
    pub fn threat_level(&self) -> Severity {
        if self.events.is_empty() {
            return Severity::Low;
        }

        let ratio = self.alert_count() as f64 / self.events.len() as f64;
        if ratio > 0.7 {
            Severity::High
        } else if ratio > 0.3 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}
