use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::location::Location;
use crate::mapping::SensitiveFieldMapping;
use crate::record::ApiLogRecord;

/// Value written over every sensitive field
pub const PLACEHOLDER: &str = "*****";

/// Number of fields masked per location during one call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaskingSummary {
    masked: BTreeMap<Location, usize>,
}

impl MaskingSummary {
    fn record(&mut self, location: Location, count: usize) {
        if count > 0 {
            *self.masked.entry(location).or_default() += count;
        }
    }

    pub fn masked(&self, location: Location) -> usize {
        self.masked.get(&location).copied().unwrap_or_default()
    }

    pub fn total(&self) -> usize {
        self.masked.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.masked.is_empty()
    }
}

/// Replaces the values of sensitive fields in API call logs.
///
/// Only values change: keys are never added, removed or reordered, and
/// fields whose name is not configured for their location keep their
/// original value and type. Masking twice gives the same record as masking
/// once.
#[derive(Debug, Clone, Default)]
pub struct SensitiveInfoMasker {
    mapping: SensitiveFieldMapping,
}

impl SensitiveInfoMasker {
    pub fn new(mapping: SensitiveFieldMapping) -> Self {
        Self { mapping }
    }

    pub fn mapping(&self) -> &SensitiveFieldMapping {
        &self.mapping
    }

    /// Mask a log record in place.
    ///
    /// `data` is masked with the `data` patterns, then an object nested at
    /// `data.body` is masked with the `body` patterns. Absent locations are
    /// skipped.
    pub fn mask(&self, log: &mut ApiLogRecord) -> MaskingSummary {
        let mut summary = MaskingSummary::default();

        if let Some(headers) = log.request_headers.as_mut() {
            summary.record(Location::Headers, self.mask_map(Location::Headers, headers));
        }
        if let Some(output) = log.output.as_mut() {
            summary.record(Location::Output, self.mask_map(Location::Output, output));
        }
        if let Some(data) = log.data.as_mut() {
            self.mask_data(data, &mut summary);
        }
        if let Some(body) = log.body.as_mut() {
            summary.record(Location::Body, self.mask_map(Location::Body, body));
        }

        debug!(
            masked_fields = summary.total(),
            summary = ?summary.masked,
            "masked sensitive info in api log"
        );
        summary
    }

    /// Mask a raw JSON log record in place.
    ///
    /// Works on the same field names as [`ApiLogRecord`]. Locations that are
    /// present but not objects are left as they are.
    pub fn mask_value(&self, log: &mut Value) -> MaskingSummary {
        let mut summary = MaskingSummary::default();
        let Some(record) = log.as_object_mut() else {
            warn!("api log is not a json object, nothing masked");
            return summary;
        };

        for location in Location::ALL {
            match record.get_mut(location.record_field()) {
                None | Some(Value::Null) => {}
                Some(Value::Object(map)) if location == Location::Data => {
                    self.mask_data(map, &mut summary);
                }
                Some(Value::Object(map)) => {
                    summary.record(location, self.mask_map(location, map));
                }
                Some(_) => {
                    warn!(location = %location, "api log location is not an object, skipped");
                }
            }
        }

        debug!(masked_fields = summary.total(), "masked sensitive info in raw api log");
        summary
    }

    /// Mask the keys of a single mapping using the patterns for `location`.
    /// Returns the number of values replaced.
    pub fn mask_map(&self, location: Location, map: &mut Map<String, Value>) -> usize {
        let mut masked = 0;
        for (key, value) in map.iter_mut() {
            if self.mapping.is_sensitive(location, key) {
                *value = Value::String(PLACEHOLDER.to_string());
                masked += 1;
            }
        }
        masked
    }

    fn mask_data(&self, data: &mut Map<String, Value>, summary: &mut MaskingSummary) {
        summary.record(Location::Data, self.mask_map(Location::Data, data));
        if let Some(Value::Object(body)) = data.get_mut("body") {
            summary.record(Location::Body, self.mask_map(Location::Body, body));
        }
    }
}
