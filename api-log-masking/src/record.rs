use error_common::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One outbound API call as captured by the HTTP client layer.
///
/// The four maskable locations are optional: a JSON `null` and a missing
/// field both deserialize to `None`. Every other field of the record is kept
/// verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiLogRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_headers: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Map<String, Value>>,

    /// Request data; may hold a nested `body` object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Map<String, Value>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ApiLogRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a record from a JSON value. A present location that is not an
    /// object is rejected.
    pub fn from_json(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn with_request_headers(mut self, headers: Map<String, Value>) -> Self {
        self.request_headers = Some(headers);
        self
    }

    pub fn with_output(mut self, output: Map<String, Value>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_body(mut self, body: Map<String, Value>) -> Self {
        self.body = Some(body);
        self
    }

    /// The `body` object nested under `data`, if any
    pub fn nested_body(&self) -> Option<&Map<String, Value>> {
        self.data.as_ref()?.get("body")?.as_object()
    }
}
