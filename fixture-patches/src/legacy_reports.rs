use error_common::{log_error, ErrorContext, Result};
use serde::Serialize;
use tracing::info;

use crate::store::ReportStore;

pub const PATCH_NAME: &str = "remove_legacy_report_fixtures";

/// Reports shipped as fixtures by earlier releases and since replaced
pub const LEGACY_REPORTS: [&str; 5] = [
    "GSTR-1",
    "GST Sales Register Beta",
    "GST Purchase Register Beta",
    "GST Itemised Sales Register",
    "GST Itemised Purchase Register",
];

/// Result of a best-effort patch run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PatchOutcome {
    Applied { deleted: usize },
    Failed { reason: String },
}

impl PatchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Delete the legacy report fixtures and every report derived from them.
///
/// Runs as part of an upgrade batch, so a failure here must not block the
/// other patches: errors are logged and reported in the outcome, never
/// returned. With nothing to delete this is a no-op.
pub async fn remove_legacy_report_fixtures(store: &dyn ReportStore) -> PatchOutcome {
    match delete_legacy_reports(store).await {
        Ok(deleted) => {
            info!(patch = PATCH_NAME, deleted, "legacy report fixtures removed");
            PatchOutcome::Applied { deleted }
        }
        Err(e) => {
            let context = ErrorContext::new()
                .with_operation(PATCH_NAME)
                .add_context("title", format!("{PATCH_NAME} failed"));
            log_error(&context, &e);
            PatchOutcome::Failed {
                reason: e.to_string(),
            }
        }
    }
}

async fn delete_legacy_reports(store: &dyn ReportStore) -> Result<usize> {
    let legacy: Vec<String> = LEGACY_REPORTS.iter().map(|n| (*n).to_string()).collect();
    let derived = store.find_reports_referencing(&legacy).await?;

    let mut names = legacy;
    names.extend(derived);
    store.delete_reports(&names).await
}
