use std::fmt;
use std::str::FromStr;

use error_common::ComplianceError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Logical container inside an API call log record.
///
/// Each location carries its own list of sensitive field names, so a name
/// that is sensitive as a header is not automatically sensitive in the
/// response output or the request data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Location {
    /// Request headers, stored on the record as `request_headers`
    Headers,
    /// Response payload
    Output,
    /// Request data (params and an optional nested `body`)
    Data,
    /// Request body, either top-level or nested under `data`
    Body,
}

impl Location {
    pub const ALL: [Location; 4] = [
        Location::Headers,
        Location::Output,
        Location::Data,
        Location::Body,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Headers => "headers",
            Self::Output => "output",
            Self::Data => "data",
            Self::Body => "body",
        }
    }

    /// Name of the field holding this location on a log record
    pub fn record_field(&self) -> &'static str {
        match self {
            Self::Headers => "request_headers",
            Self::Output => "output",
            Self::Data => "data",
            Self::Body => "body",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = ComplianceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "headers" => Ok(Self::Headers),
            "output" => Ok(Self::Output),
            "data" => Ok(Self::Data),
            "body" => Ok(Self::Body),
            other => Err(ComplianceError::UnknownLocation(other.to_string())),
        }
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}
