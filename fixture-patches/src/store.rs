use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use error_common::{ComplianceError, Result};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

/// A report record as far as fixture patches are concerned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub name: String,
    /// Report this one was derived from, if any
    #[serde(default)]
    pub reference_report: Option<String>,
}

impl Report {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            reference_report: None,
        }
    }

    pub fn referencing<S: Into<String>>(mut self, reference: S) -> Self {
        self.reference_report = Some(reference.into());
        self
    }
}

/// Storage for report records
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Names of reports whose `reference_report` is one of `names`
    async fn find_reports_referencing(&self, names: &[String]) -> Result<Vec<String>>;

    /// Permanently delete the named reports. Names that do not exist are
    /// ignored. Returns the number of reports removed.
    async fn delete_reports(&self, names: &[String]) -> Result<usize>;
}

/// In-memory report store for testing and development
pub struct InMemoryReportStore {
    reports: Arc<DashMap<String, Report>>,
}

impl InMemoryReportStore {
    pub fn new() -> Self {
        Self {
            reports: Arc::new(DashMap::new()),
        }
    }

    pub fn with_reports<I: IntoIterator<Item = Report>>(reports: I) -> Self {
        let store = Self::new();
        for report in reports {
            store.insert(report);
        }
        store
    }

    pub fn insert(&self, report: Report) {
        self.reports.insert(report.name.clone(), report);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.reports.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

impl Default for InMemoryReportStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportStore for InMemoryReportStore {
    async fn find_reports_referencing(&self, names: &[String]) -> Result<Vec<String>> {
        let mut found: Vec<String> = self
            .reports
            .iter()
            .filter(|entry| {
                entry
                    .value()
                    .reference_report
                    .as_ref()
                    .is_some_and(|reference| names.contains(reference))
            })
            .map(|entry| entry.key().clone())
            .collect();
        found.sort();
        Ok(found)
    }

    async fn delete_reports(&self, names: &[String]) -> Result<usize> {
        Ok(names
            .iter()
            .filter(|name| self.reports.remove(name.as_str()).is_some())
            .count())
    }
}

/// Report store backed by a JSON file holding an array of reports.
///
/// The whole file is read and rewritten on every change.
pub struct JsonFileReportStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileReportStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Vec<Report>> {
        let raw = tokio::fs::read(&self.path).await.map_err(|e| {
            ComplianceError::Storage(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        Ok(serde_json::from_slice(&raw)?)
    }

    async fn save(&self, reports: &[Report]) -> Result<()> {
        let raw = serde_json::to_vec_pretty(reports)?;
        tokio::fs::write(&self.path, raw).await.map_err(|e| {
            ComplianceError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl ReportStore for JsonFileReportStore {
    async fn find_reports_referencing(&self, names: &[String]) -> Result<Vec<String>> {
        let _guard = self.lock.lock().await;
        let reports = self.load().await?;
        Ok(reports
            .into_iter()
            .filter(|r| r.reference_report.as_ref().is_some_and(|n| names.contains(n)))
            .map(|r| r.name)
            .collect())
    }

    async fn delete_reports(&self, names: &[String]) -> Result<usize> {
        let _guard = self.lock.lock().await;
        let reports = self.load().await?;
        let doomed: BTreeSet<&str> = names.iter().map(String::as_str).collect();

        let before = reports.len();
        let kept: Vec<Report> = reports
            .into_iter()
            .filter(|r| !doomed.contains(r.name.as_str()))
            .collect();
        let deleted = before.saturating_sub(kept.len());

        if deleted > 0 {
            self.save(&kept).await?;
        }
        debug!(path = %self.path.display(), deleted, "deleted reports from fixture file");
        Ok(deleted)
    }
}
