//! Masking configuration
use std::path::Path;

use error_common::{ComplianceError, Result};
use serde::{Deserialize, Serialize};

use crate::location::Location;
use crate::mapping::SensitiveFieldOverrides;

/// Environment prefix, e.g. `COMPLY_MASKING__OVERRIDES__HEADERS=x-api-key,x-client-secret`
pub const ENV_PREFIX: &str = "COMPLY_MASKING";

/// Separator for pattern lists given through the environment
pub const ENV_LIST_SEPARATOR: &str = ",";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaskingConfig {
    /// Location name → replacement list of sensitive field names
    #[serde(default)]
    pub overrides: SensitiveFieldOverrides,
}

impl MaskingConfig {
    /// Load from an optional file (YAML, TOML or JSON by extension) and
    /// `COMPLY_MASKING__*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env_prefix(path, ENV_PREFIX)
    }

    pub fn load_with_env_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path));
        }

        let mut environment = ::config::Environment::with_prefix(env_prefix)
            .separator("__")
            .list_separator(ENV_LIST_SEPARATOR);
        for location in Location::ALL {
            environment = environment.with_list_parse_key(&format!("overrides.{location}"));
        }
        builder = builder.add_source(environment);

        let settings = builder
            .build()
            .map_err(|e| ComplianceError::Config(e.to_string()))?;
        settings
            .try_deserialize()
            .map_err(|e| ComplianceError::Config(e.to_string()))
    }
}
