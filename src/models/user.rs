// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Signed-in user records.

use serde::{Deserialize, Serialize};

const DEMO_EMAIL: &str = "demo@hawkwatch.com";
const DEMO_NAME: &str = "Demo User";
const DEMO_ORGANIZATION: &str = "Security Solutions Inc.";
const DEMO_ROLE: &str = "Security Manager";
const DEMO_JOIN_DATE: &str = "2025-01-01T00:00:00Z";

/// User record as returned by the hosted auth service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

impl User {
    /// Display name stored in the user's metadata, if any.
    pub fn full_name(&self) -> Option<&str> {
        self.user_metadata.get("full_name").and_then(|v| v.as_str())
    }
}

/// Display fields for the profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub full_name: String,
    pub organization: Option<String>,
    pub role: Option<String>,
    pub join_date: String,
}

impl UserProfile {
    /// Build a profile from the signed-in user, or the demo profile when
    /// nobody is signed in. Missing fields fall back to the demo values.
    pub fn from_user(user: Option<&User>) -> Self {
        let email = user
            .and_then(|u| u.email.clone())
            .unwrap_or_else(|| DEMO_EMAIL.to_string());
        let full_name = user
            .and_then(|u| u.full_name())
            .unwrap_or(DEMO_NAME)
            .to_string();
        let join_date = user
            .and_then(|u| u.created_at.clone())
            .unwrap_or_else(|| DEMO_JOIN_DATE.to_string());

        Self {
            email,
            full_name,
            organization: Some(DEMO_ORGANIZATION.to_string()),
            role: Some(DEMO_ROLE.to_string()),
            join_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_profile_without_user() {
        let profile = UserProfile::from_user(None);
        assert_eq!(profile.email, DEMO_EMAIL);
        assert_eq!(profile.full_name, DEMO_NAME);
        assert_eq!(profile.join_date, DEMO_JOIN_DATE);
    }

    #[test]
    fn test_profile_from_user_metadata() {
        let user: User = serde_json::from_str(
            r#"{
                "id": "u-1",
                "email": "guard@example.com",
                "created_at": "2025-03-02T09:00:00Z",
                "user_metadata": {"full_name": "Sam Guard"}
            }"#,
        )
        .unwrap();

        let profile = UserProfile::from_user(Some(&user));
        assert_eq!(profile.email, "guard@example.com");
        assert_eq!(profile.full_name, "Sam Guard");
        assert_eq!(profile.join_date, "2025-03-02T09:00:00Z");
    }

    #[test]
    fn test_profile_fills_missing_name() {
        let user: User = serde_json::from_str(r#"{"id": "u-2", "email": "a@b.c"}"#).unwrap();
        assert_eq!(UserProfile::from_user(Some(&user)).full_name, DEMO_NAME);
    }
}
