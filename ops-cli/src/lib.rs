//! Operations CLI for the GST compliance engine
//!
//! ```bash
//! # Mask a captured api log before attaching it to a support ticket
//! complyctl mask --input call.json --pretty
//! cat call.json | complyctl mask --config masking.yaml
//!
//! # Show which field names are masked per location
//! complyctl mapping --config masking.yaml
//!
//! # Run the legacy report cleanup against a fixture export
//! complyctl patch remove-legacy-reports --store reports.json
//! ```

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use api_log_masking::{ApiVariant, ConfiguredApi, MaskingConfig};
use clap::{Parser, Subcommand};
use fixture_patches::{remove_legacy_report_fixtures, JsonFileReportStore, PatchOutcome};
use serde_json::Value;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "complyctl")]
#[command(about = "Mask API call logs and run fixture patches", version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Mask sensitive info in a JSON api log record
    Mask {
        /// Log record file; stdin when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Masking configuration file
        #[arg(short, long, env = "COMPLY_MASKING_CONFIG")]
        config: Option<PathBuf>,

        /// Pretty-print the masked record
        #[arg(long)]
        pretty: bool,
    },

    /// Print the effective sensitive field mapping
    Mapping {
        /// Masking configuration file
        #[arg(short, long, env = "COMPLY_MASKING_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Run a one-shot fixture patch
    #[command(subcommand)]
    Patch(PatchCommand),
}

#[derive(Subcommand, Debug)]
pub enum PatchCommand {
    /// Delete legacy GST report fixtures and reports derived from them
    RemoveLegacyReports {
        /// JSON file holding the report records
        #[arg(long)]
        store: PathBuf,
    },
}

pub async fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    match cli.command {
        Command::Mask {
            input,
            config,
            pretty,
        } => {
            let raw = read_input(input.as_deref())?;
            let masked = mask_log(&raw, config.as_deref())?;
            write_json(out, &masked, pretty)?;
        }
        Command::Mapping { config } => {
            let api = ConfiguredApi::new(MaskingConfig::load(config.as_deref())?);
            write_json(out, &serde_json::to_value(api.sensitive_field_mapping())?, true)?;
        }
        Command::Patch(PatchCommand::RemoveLegacyReports { store }) => {
            let outcome = remove_legacy_report_fixtures(&JsonFileReportStore::new(store)).await;
            if let PatchOutcome::Failed { reason } = &outcome {
                warn!(%reason, "patch failed, continuing");
            }
            write_json(out, &serde_json::to_value(&outcome)?, false)?;
        }
    }
    Ok(())
}

/// Mask one raw JSON api log with the configured variant. The record is
/// written back with its keys in the order they were read.
pub fn mask_log(raw: &str, config: Option<&Path>) -> anyhow::Result<Value> {
    let api = ConfiguredApi::new(MaskingConfig::load(config)?);
    let mut record: Value = serde_json::from_str(raw)?;

    let summary = api.masker().mask_value(&mut record);
    info!(masked_fields = summary.total(), "api log masked");

    Ok(record)
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

fn write_json<W: Write>(out: &mut W, value: &Value, pretty: bool) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_log_masking::PLACEHOLDER;
    use serde_json::json;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("complyctl").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parse_mask() {
        let cli = parse(&["mask", "--input", "call.json", "--pretty", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Command::Mask { input: Some(ref input), pretty: true, config: None }
                if input == &PathBuf::from("call.json")
        ));
    }

    #[test]
    fn test_parse_patch() {
        let cli = parse(&["patch", "remove-legacy-reports", "--store", "reports.json"]);
        assert!(matches!(
            cli.command,
            Command::Patch(PatchCommand::RemoveLegacyReports { store }) if store == PathBuf::from("reports.json")
        ));
    }

    #[test]
    fn test_mask_log_with_defaults() {
        let raw = r#"{
            "url": "https://gsp.example.com/auth",
            "request_headers": {"x-api-key": "k", "accept": "application/json"},
            "output": {"auth_token": "t", "status": 1}
        }"#;

        let masked = mask_log(raw, None).unwrap();

        assert_eq!(masked["request_headers"]["x-api-key"], json!(PLACEHOLDER));
        assert_eq!(masked["request_headers"]["accept"], json!("application/json"));
        assert_eq!(masked["output"]["auth_token"], json!(PLACEHOLDER));
        assert_eq!(masked["output"]["status"], json!(1));
        assert_eq!(masked["url"], json!("https://gsp.example.com/auth"));
    }

    #[test]
    fn test_mask_log_keeps_key_order() {
        let raw = r#"{"url":"u","request_headers":{"x-api-key":"k","accept":"a"},"output":{"zeta":1,"alpha":2},"data":{"body":{"username":"u","password":"p"}}}"#;

        let masked = serde_json::to_string(&mask_log(raw, None).unwrap()).unwrap();

        assert_eq!(
            masked,
            r#"{"url":"u","request_headers":{"x-api-key":"*****","accept":"a"},"output":{"zeta":1,"alpha":2},"data":{"body":{"username":"u","password":"*****"}}}"#
        );
    }

    #[test]
    fn test_mask_log_rejects_invalid_json() {
        assert!(mask_log("{", None).is_err());
    }

    #[tokio::test]
    async fn test_run_mask_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("call.json");
        std::fs::write(&input, r#"{"data": {"body": {"password": "p", "user": "u"}}}"#).unwrap();
        let config = dir.path().join("masking.yaml");
        std::fs::write(&config, "overrides:\n  body:\n    - user\n").unwrap();

        let cli = Cli {
            verbose: false,
            command: Command::Mask {
                input: Some(input),
                config: Some(config),
                pretty: false,
            },
        };
        let mut out = Vec::new();
        run(cli, &mut out).await.unwrap();

        let masked: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(masked["data"]["body"]["user"], json!(PLACEHOLDER));
        assert_eq!(masked["data"]["body"]["password"], json!("p"));
    }

    #[tokio::test]
    async fn test_run_mapping() {
        let cli = Cli {
            verbose: false,
            command: Command::Mapping { config: None },
        };
        let mut out = Vec::new();
        run(cli, &mut out).await.unwrap();

        let mapping: Value = serde_json::from_slice(&out).unwrap();
        assert!(mapping["headers"]
            .as_array()
            .unwrap()
            .contains(&json!("x-api-key")));
    }

    #[tokio::test]
    async fn test_run_patch_never_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            verbose: false,
            command: Command::Patch(PatchCommand::RemoveLegacyReports {
                store: dir.path().join("missing.json"),
            }),
        };
        let mut out = Vec::new();
        run(cli, &mut out).await.unwrap();

        let outcome: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(outcome["status"], json!("failed"));
    }

    #[tokio::test]
    async fn test_run_patch_applies() {
        let dir = tempfile::tempdir().unwrap();
        let store = dir.path().join("reports.json");
        std::fs::write(&store, r#"[{"name": "GSTR-1"}, {"name": "GSTR-3B"}]"#).unwrap();

        let cli = Cli {
            verbose: false,
            command: Command::Patch(PatchCommand::RemoveLegacyReports { store }),
        };
        let mut out = Vec::new();
        run(cli, &mut out).await.unwrap();

        let outcome: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(outcome, json!({"status": "applied", "deleted": 1}));
    }
}
