use std::collections::BTreeMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::location::Location;

const DEFAULT_HEADER_FIELDS: &[&str] = &["x-api-key", "auth-token", "authtoken", "password"];
const DEFAULT_OUTPUT_FIELDS: &[&str] = &["auth_token", "authtoken", "sek", "rek"];
const DEFAULT_DATA_FIELDS: &[&str] = &["app_key", "password", "otp", "sek"];
const DEFAULT_BODY_FIELDS: &[&str] = &["password", "Password", "app_key", "AppKey"];

lazy_static! {
    /// Sensitive field names every API variant starts from
    pub static ref DEFAULT_MASK_MAP: SensitiveFieldMapping = SensitiveFieldMapping::from_patterns([
        (Location::Headers, DEFAULT_HEADER_FIELDS),
        (Location::Output, DEFAULT_OUTPUT_FIELDS),
        (Location::Data, DEFAULT_DATA_FIELDS),
        (Location::Body, DEFAULT_BODY_FIELDS),
    ]);
}

/// Sensitive field names per location.
///
/// A mapping always holds an entry for each of the four locations. Field
/// names are matched by exact, case-sensitive equality with a key name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensitiveFieldMapping {
    locations: BTreeMap<Location, Vec<String>>,
}

impl SensitiveFieldMapping {
    /// Build a mapping from static pattern lists. Locations not listed get an
    /// empty pattern list.
    pub fn from_patterns<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Location, &'a [&'a str])>,
    {
        let mut locations: BTreeMap<Location, Vec<String>> =
            Location::ALL.iter().map(|l| (*l, Vec::new())).collect();
        for (location, patterns) in entries {
            locations.insert(
                location,
                patterns.iter().map(|p| (*p).to_string()).collect(),
            );
        }
        Self { locations }
    }

    /// The built-in default mapping
    pub fn default_mapping() -> &'static SensitiveFieldMapping {
        &DEFAULT_MASK_MAP
    }

    pub fn patterns(&self, location: Location) -> &[String] {
        self.locations
            .get(&location)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_sensitive(&self, location: Location, key: &str) -> bool {
        self.patterns(location).iter().any(|pattern| pattern == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Location, &[String])> {
        self.locations.iter().map(|(l, p)| (*l, p.as_slice()))
    }

    /// Overlay `overrides` on this mapping.
    ///
    /// Every location named by the overrides has its list replaced outright;
    /// the others keep their current list.
    pub fn with_overrides(&self, overrides: &SensitiveFieldOverrides) -> Self {
        let mut mapping = self.clone();
        for (location, patterns) in overrides.iter() {
            mapping.locations.insert(location, patterns.to_vec());
        }
        mapping
    }
}

impl Default for SensitiveFieldMapping {
    fn default() -> Self {
        DEFAULT_MASK_MAP.clone()
    }
}

/// Per-variant replacement of one or more locations' pattern lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensitiveFieldOverrides {
    locations: BTreeMap<Location, Vec<String>>,
}

impl SensitiveFieldOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pattern list for `location`
    pub fn set<I, S>(mut self, location: Location, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.locations
            .insert(location, patterns.into_iter().map(Into::into).collect());
        self
    }

    pub fn get(&self, location: Location) -> Option<&[String]> {
        self.locations.get(&location).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Location, &[String])> {
        self.locations.iter().map(|(l, p)| (*l, p.as_slice()))
    }
}
