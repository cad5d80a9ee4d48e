//! Validates one AD document and reports the result for an orchestrator.
//!
//! Exit codes: 0 PASS, 1 FAIL (violations on stdout), 2 usage or internal error.

use ad_core::config::{ValidatorConfig, DEFAULT_AUDIT_DIR, DEFAULT_COMPENDIUM_PATH};
use ad_core::error::{CoreError, CoreResult};
use ad_core::run::controller::RunController;
use ad_core::validator::checklist::load_checklist;
use clap::Parser;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

const EXIT_ERROR: i32 = 2;

#[derive(Debug, Parser)]
#[command(
    name = "ad_validator",
    about = "Validate an AD block against the AEC.S2 header schema"
)]
struct Cli {
    /// Document to validate, or `-` for stdin
    #[arg(required_unless_present = "list_checks")]
    path: Option<PathBuf>,

    #[arg(
        long,
        env = "AD_VALIDATOR_AUDIT_DIR",
        default_value = DEFAULT_AUDIT_DIR
    )]
    audit_dir: PathBuf,

    #[arg(
        long,
        env = "AD_VALIDATOR_COMPENDIUM",
        default_value = DEFAULT_COMPENDIUM_PATH
    )]
    compendium: PathBuf,

    /// Print the embedded check catalog and exit
    #[arg(long)]
    list_checks: bool,
}

impl Cli {
    fn config(&self) -> ValidatorConfig {
        ValidatorConfig {
            audit_dir: self.audit_dir.clone(),
            compendium_path: self.compendium.clone(),
            ..ValidatorConfig::default()
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let mut out = std::io::stdout().lock();
    let result = run(&cli, std::io::stdin().lock(), &mut out);
    if let Err(e) = &result {
        eprintln!("validator error: {}", e);
    }
    std::process::exit(exit_code(&result));
}

fn exit_code(result: &CoreResult<i32>) -> i32 {
    match result {
        Ok(code) => *code,
        Err(_) => EXIT_ERROR,
    }
}

fn run(cli: &Cli, stdin: impl Read, out: &mut impl Write) -> CoreResult<i32> {
    if cli.list_checks {
        let catalog = serde_json::to_string_pretty(&load_checklist()?)?;
        writeln!(out, "{}", catalog)?;
        return Ok(0);
    }
    let path = cli
        .path
        .as_deref()
        .ok_or_else(|| CoreError::InvalidInput("missing document path".to_string()))?;
    let document = read_document(path, stdin)?;

    let mut controller = RunController::new(cli.config())?;
    let report = controller.run(&document)?;
    writeln!(out, "{}", report.to_pretty_json()?)?;
    Ok(report.exit_code())
}

fn read_document(path: &Path, mut stdin: impl Read) -> CoreResult<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        stdin.read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{empty, Cursor};

    const WORKED_EXAMPLE: &str = "```markdown\nAD-HEADER\nGOAL: x\nSCOPE: y\nAD-END\n```";
    const COMPLETE: &str =
        "```markdown\nAD-HEADER\nGOAL\nSCOPE\nWORKING SET IMPACT\nPOLICY-B IMPACT\nAD-END\n```";

    fn parse(args: &[&str]) -> Cli {
        let argv = std::iter::once("ad_validator").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap()
    }

    fn stdin_cli(audit: &Path) -> Cli {
        parse(&["--audit-dir", audit.to_str().unwrap(), "-"])
    }

    #[test]
    fn path_is_required_without_list_checks() {
        assert!(Cli::try_parse_from(["ad_validator"]).is_err());
        assert!(Cli::try_parse_from(["ad_validator", "--list-checks"]).is_ok());
    }

    #[test]
    fn flags_override_config() {
        let cli = parse(&[
            "--audit-dir",
            "/tmp/audit",
            "--compendium",
            "rules.txt",
            "ad.md",
        ]);
        let cfg = cli.config();
        assert_eq!(cfg.audit_dir, PathBuf::from("/tmp/audit"));
        assert_eq!(cfg.compendium_path, PathBuf::from("rules.txt"));
        assert_eq!(cfg.retry_count, 0);
    }

    #[test]
    fn file_with_missing_block_exits_1() {
        let tmp = tempfile::tempdir().unwrap();
        let doc = tmp.path().join("ad.md");
        std::fs::write(&doc, "no block").unwrap();
        let audit = tmp.path().join("audit");
        let cli = parse(&[
            "--audit-dir",
            audit.to_str().unwrap(),
            doc.to_str().unwrap(),
        ]);
        let mut out: Vec<u8> = Vec::new();
        assert_eq!(run(&cli, empty(), &mut out).unwrap(), 1);
        assert!(audit.is_dir());
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v[0]["violation_id"], "VEC-001");
    }

    #[test]
    fn complete_file_exits_0_with_pass_marker() {
        let tmp = tempfile::tempdir().unwrap();
        let doc = tmp.path().join("ad.md");
        std::fs::write(&doc, COMPLETE).unwrap();
        let cli = parse(&[
            "--audit-dir",
            tmp.path().join("audit").to_str().unwrap(),
            doc.to_str().unwrap(),
        ]);
        let mut out: Vec<u8> = Vec::new();
        let result = run(&cli, empty(), &mut out);
        assert_eq!(exit_code(&result), 0);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\n  \"status\": \"PASS\"\n}\n"
        );
    }

    #[test]
    fn dash_reads_document_from_stdin() {
        let tmp = tempfile::tempdir().unwrap();
        let cli = stdin_cli(&tmp.path().join("audit"));
        let mut out: Vec<u8> = Vec::new();
        let code = run(&cli, Cursor::new(WORKED_EXAMPLE), &mut out).unwrap();
        assert_eq!(code, 1);
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let expected: Vec<&str> = v
            .as_array()
            .unwrap()
            .iter()
            .map(|x| x["expected_state"].as_str().unwrap())
            .collect();
        assert_eq!(
            expected,
            vec![
                "Header Field: WORKING SET IMPACT",
                "Header Field: POLICY-B IMPACT",
            ]
        );
    }

    #[test]
    fn stdin_complete_block_exits_0() {
        let tmp = tempfile::tempdir().unwrap();
        let cli = stdin_cli(&tmp.path().join("audit"));
        let mut out: Vec<u8> = Vec::new();
        let code = run(&cli, Cursor::new(COMPLETE), &mut out).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn invalid_utf8_on_stdin_exits_2() {
        let tmp = tempfile::tempdir().unwrap();
        let cli = stdin_cli(&tmp.path().join("audit"));
        let mut out: Vec<u8> = Vec::new();
        let result = run(&cli, Cursor::new(b"\xff\xfe"), &mut out);
        assert!(matches!(result, Err(CoreError::Io(_))));
        assert_eq!(exit_code(&result), 2);
        assert!(out.is_empty());
    }

    #[test]
    fn list_checks_prints_catalog_and_exits_0() {
        let cli = parse(&["--list-checks"]);
        let mut out: Vec<u8> = Vec::new();
        assert_eq!(run(&cli, empty(), &mut out).unwrap(), 0);
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["checklist_version"], "ad_checklist_v1");
        assert_eq!(v["timestamp_format"], "RFC3339 UTC");
        let ids: Vec<&str> = v["checks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["check_id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["VEC-001", "VEC-002"]);
    }

    #[test]
    fn unreadable_document_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let cli = parse(&[
            "--audit-dir",
            tmp.path().join("a").to_str().unwrap(),
            tmp.path().join("absent.md").to_str().unwrap(),
        ]);
        let result = run(&cli, empty(), &mut Vec::<u8>::new());
        assert!(matches!(result, Err(CoreError::Io(_))));
        assert_eq!(exit_code(&result), 2);
    }
}
