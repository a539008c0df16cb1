use crate::config::MaskingConfig;
use crate::mapping::{SensitiveFieldMapping, SensitiveFieldOverrides};
use crate::masker::{MaskingSummary, SensitiveInfoMasker};
use crate::record::ApiLogRecord;

/// An API client whose call logs are masked before storage.
///
/// Implementors only need to override [`ApiVariant::sensitive_info_overrides`]
/// to declare different sensitive field names; each location they name
/// replaces the default list for that location.
pub trait ApiVariant {
    /// Per-location replacements of the default field names
    fn sensitive_info_overrides(&self) -> SensitiveFieldOverrides {
        SensitiveFieldOverrides::default()
    }

    /// Effective mapping: the defaults with this variant's overrides applied
    fn sensitive_field_mapping(&self) -> SensitiveFieldMapping {
        SensitiveFieldMapping::default_mapping().with_overrides(&self.sensitive_info_overrides())
    }

    fn masker(&self) -> SensitiveInfoMasker {
        SensitiveInfoMasker::new(self.sensitive_field_mapping())
    }

    fn mask_sensitive_info(&self, log: &mut ApiLogRecord) -> MaskingSummary {
        self.masker().mask(log)
    }
}

/// Variant using the default mapping unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseApi;

impl ApiVariant for BaseApi {}

/// Variant whose overrides come from a [`MaskingConfig`]
#[derive(Debug, Clone, Default)]
pub struct ConfiguredApi {
    config: MaskingConfig,
}

impl ConfiguredApi {
    pub fn new(config: MaskingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MaskingConfig {
        &self.config
    }
}

impl ApiVariant for ConfiguredApi {
    fn sensitive_info_overrides(&self) -> SensitiveFieldOverrides {
        self.config.overrides.clone()
    }
}
