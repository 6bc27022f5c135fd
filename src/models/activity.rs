// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity and participant models as served by the signup service.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::fmt;

/// One signup activity as returned by `GET /activities`.
#[derive(Debug, Clone, Deserialize)]
pub struct Activity {
    /// Human-readable description
    pub description: String,
    /// Schedule text (e.g. "Fridays, 3:30 PM - 5:00 PM")
    pub schedule: String,
    /// Capacity bound
    pub max_participants: u32,
    /// Current roster, in server order (missing on the wire means empty)
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl Activity {
    /// Remaining capacity. Signed: an over-full roster is not expected,
    /// but it must render rather than panic.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// A registrant: either a bare email string or a record with optional
/// `name`/`email` fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Participant {
    Email(String),
    Record(Map<String, Value>),
}

impl Participant {
    /// Display text, which doubles as the unregistration key: the `email`
    /// query parameter sent to the service must be exactly this string.
    ///
    /// Precedence: non-empty `name`, then non-empty `email`, then the raw
    /// JSON of the whole record.
    pub fn display_text(&self) -> String {
        match self {
            Participant::Email(email) => email.clone(),
            Participant::Record(fields) => field_text(fields, "name")
                .or_else(|| field_text(fields, "email"))
                .unwrap_or_else(|| Value::Object(fields.clone()).to_string()),
        }
    }
}

fn field_text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// The full activity snapshot: name -> Activity, in server-provided order.
///
/// Replaced wholesale on every successful fetch; never merged or patched.
/// Order matters to the UI, so deserialization collects map entries into a
/// `Vec` instead of going through an unordered map type.
#[derive(Debug, Clone, Default)]
pub struct ActivityCollection {
    entries: Vec<(String, Activity)>,
}

impl ActivityCollection {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate activities in server order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries
            .iter()
            .map(|(name, activity)| (name.as_str(), activity))
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity)
    }
}

impl<'de> Deserialize<'de> for ActivityCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = ActivityCollection;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    entries.push((name, activity));
                }
                Ok(ActivityCollection { entries })
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}
