//! Full run integration tests.
//!
//! Runs every check against fixture repositories with scripted tools and
//! verifies the findings and the exit status.

use crate::mocks::{FixtureRepo, MockReply, ScriptedRunner, HOSTS, WORK_HOST};
use calnix_validate::engine::result::ValidationReport;
use calnix_validate::{run_validation, Severity, ValidatorConfig};

fn validate(repo: &FixtureRepo, runner: &ScriptedRunner) -> (ValidationReport, String) {
    validate_with(ValidatorConfig::with_root(repo.path()), runner)
}

fn validate_with(config: ValidatorConfig, runner: &ScriptedRunner) -> (ValidationReport, String) {
    let mut progress = Vec::new();
    let report = run_validation(&config, runner, &mut progress);
    (report, String::from_utf8(progress).unwrap())
}

fn messages(report: &ValidationReport, severity: Severity) -> Vec<String> {
    report
        .findings
        .iter()
        .filter(|f| f.severity == severity)
        .map(|f| f.message.clone())
        .collect()
}

// End-to-end outcomes

#[test]
fn test_healthy_repo_passes() {
    let repo = FixtureRepo::healthy();
    let runner = ScriptedRunner::all_tools_succeed();

    let (report, progress) = validate(&repo, &runner);

    assert!(report.findings.is_empty(), "{:?}", report.findings);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(
        report.checks,
        vec!["FS-001", "SYN-001", "FLK-001", "POL-001", "POL-002", "RB-001"]
    );
    assert!(progress.contains("🔍 Starting configuration validation..."));
    assert!(progress.contains("✅ rebuild.sh has detect_host function"));
}

#[test]
fn test_every_nix_file_is_parsed_from_root() {
    let repo = FixtureRepo::healthy();
    let runner = ScriptedRunner::all_tools_succeed();

    validate(&repo, &runner);

    assert_eq!(runner.calls_to("nix-instantiate"), repo.count_nix_files());
    for call in runner.calls() {
        assert_eq!(call.cwd, repo.path());
        if call.program == "nix-instantiate" {
            assert_eq!(call.args[0], "--parse");
        }
    }
}

#[test]
fn test_missing_tools_only_warn() {
    let repo = FixtureRepo::healthy();
    let runner = ScriptedRunner::no_tools();

    let (report, _) = validate(&repo, &runner);

    assert!(messages(&report, Severity::Error).is_empty());
    assert_eq!(
        messages(&report, Severity::Warning),
        vec![
            "nix-instantiate not found, skipping syntax validation",
            "nix not found, skipping flake output validation",
        ]
    );
    assert_eq!(runner.calls_to("nix-instantiate"), 1);
    assert_eq!(runner.calls_to("nix"), 1);
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_flake_spawn_failure_is_error() {
    let repo = FixtureRepo::healthy();
    let runner = ScriptedRunner::all_tools_succeed().spawn_failure("nix");

    let (report, _) = validate(&repo, &runner);

    let errors = messages(&report, Severity::Error);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].starts_with("Failed to validate flake outputs: failed to run nix:"));
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_warnings_alone_exit_zero() {
    let repo = FixtureRepo::healthy();
    repo.set_executable("rebuild.sh", false);
    let runner = ScriptedRunner::all_tools_succeed().not_found("nix-instantiate");

    let (report, _) = validate(&repo, &runner);

    let summary = report.summary();
    assert_eq!(summary.errors, 0);
    #[cfg(unix)]
    assert_eq!(summary.warnings, 2);
    assert_eq!(report.exit_code(), 0);
}

// File structure

#[test]
fn test_one_missing_file_is_one_error() {
    let repo = FixtureRepo::healthy();
    repo.remove("python-dev.nix");
    let runner = ScriptedRunner::all_tools_succeed();

    let (report, _) = validate(&repo, &runner);

    assert_eq!(
        messages(&report, Severity::Error),
        vec!["Missing required file: python-dev.nix"]
    );
    assert_eq!(report.for_check("FS-001").count(), 1);
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_empty_root_still_runs_every_check() {
    let repo = FixtureRepo::empty();
    let runner = ScriptedRunner::all_tools_succeed();

    let (report, _) = validate(&repo, &runner);

    assert_eq!(report.for_check("FS-001").count(), 10);
    assert_eq!(report.for_check("SYN-001").count(), 0);
    assert_eq!(report.for_check("POL-001").count(), 0);
    assert_eq!(report.for_check("POL-002").count(), 0);
    assert_eq!(
        report.for_check("RB-001").map(|f| f.message.as_str()).collect::<Vec<_>>(),
        vec!["rebuild.sh not found"]
    );
    assert_eq!(report.checks.len(), 6);
}

// Syntax

#[test]
fn test_one_bad_file_is_one_error() {
    let repo = FixtureRepo::healthy();
    let runner = ScriptedRunner::all_tools_succeed().for_file(
        "modules/base.nix",
        MockReply::Exit {
            status: 1,
            stdout: String::new(),
            stderr: "error: syntax error, unexpected '}'".to_string(),
        },
    );

    let (report, _) = validate(&repo, &runner);

    assert_eq!(
        messages(&report, Severity::Error),
        vec!["Syntax error in modules/base.nix: error: syntax error, unexpected '}'"]
    );
}

#[test]
fn test_spawn_failure_is_per_file_error() {
    let repo = FixtureRepo::healthy();
    let runner = ScriptedRunner::all_tools_succeed().spawn_failure("nix-instantiate");

    let (report, _) = validate(&repo, &runner);

    assert_eq!(report.for_check("SYN-001").count(), repo.count_nix_files());
    assert!(report
        .for_check("SYN-001")
        .all(|f| f.severity == Severity::Error && f.message.starts_with("Could not check syntax of")));
}

// Flake outputs

#[test]
fn test_flake_failure_reports_stderr() {
    let repo = FixtureRepo::healthy();
    let runner = ScriptedRunner::all_tools_succeed().exit(
        "nix",
        1,
        "",
        "error: experimental Nix feature 'flakes' is disabled",
    );

    let (report, _) = validate(&repo, &runner);

    assert_eq!(
        messages(&report, Severity::Error),
        vec!["Flake validation failed: error: experimental Nix feature 'flakes' is disabled"]
    );
}

#[test]
fn test_flake_missing_host() {
    let repo = FixtureRepo::healthy();
    let runner = ScriptedRunner::all_tools_succeed().exit(
        "nix",
        0,
        r#"{"nixosConfigurations": {"thinker": {}}}"#,
        "",
    );

    let (report, _) = validate(&repo, &runner);

    assert_eq!(
        messages(&report, Severity::Error),
        vec![
            "Missing nixosConfiguration: 1337book",
            "Missing nixosConfiguration: work-wsl",
        ]
    );
}

// Policies

#[test]
fn test_work_profile_importing_gaming_is_error() {
    let repo = FixtureRepo::healthy();
    repo.write(
        WORK_HOST,
        "{ imports = [ ../../modules/base.nix ../../modules/gaming.nix ]; }\n",
    );
    let runner = ScriptedRunner::all_tools_succeed();

    let (report, _) = validate(&repo, &runner);

    assert_eq!(
        messages(&report, Severity::Error),
        vec!["work-wsl config imports gaming.nix - this defeats the purpose!"]
    );
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_work_profile_with_steam_only_warns() {
    let repo = FixtureRepo::healthy();
    repo.write(
        WORK_HOST,
        "{ pkgs, ... }: { imports = [ ../../modules/base.nix ]; environment.systemPackages = [ pkgs.steam ]; }\n",
    );
    let runner = ScriptedRunner::all_tools_succeed();

    let (report, _) = validate(&repo, &runner);

    assert!(messages(&report, Severity::Error).is_empty());
    assert_eq!(
        messages(&report, Severity::Warning),
        vec!["Gaming package 'steam' found in work-wsl config"]
    );
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_host_missing_base_import() {
    let repo = FixtureRepo::healthy();
    repo.write(HOSTS[0], "{ imports = [ ./hardware-configuration.nix ]; }\n");
    let runner = ScriptedRunner::all_tools_succeed();

    let (report, _) = validate(&repo, &runner);

    assert_eq!(
        messages(&report, Severity::Error),
        vec!["hosts/thinker/configuration.nix missing base module import"]
    );
}

#[test]
fn test_unreadable_host_config_does_not_stop_the_run() {
    let repo = FixtureRepo::healthy();
    repo.remove(WORK_HOST);
    std::fs::create_dir(repo.path().join(WORK_HOST)).unwrap();
    let runner = ScriptedRunner::all_tools_succeed();

    let (report, progress) = validate(&repo, &runner);

    let pol001: Vec<&str> = report.for_check("POL-001").map(|f| f.message.as_str()).collect();
    let pol002: Vec<&str> = report.for_check("POL-002").map(|f| f.message.as_str()).collect();
    assert_eq!(pol001.len(), 1);
    assert!(pol001[0].starts_with("Could not read hosts/work-wsl/configuration.nix:"));
    assert_eq!(pol002.len(), 1);
    assert!(pol002[0].starts_with("Could not read hosts/work-wsl/configuration.nix:"));
    assert_eq!(report.checks.len(), 6);
    assert!(progress.contains("✅ rebuild.sh has detect_host function"));
}

// Rebuild script

#[cfg(unix)]
#[test]
fn test_non_executable_rebuild_script_warns_once() {
    let repo = FixtureRepo::healthy();
    repo.set_executable("rebuild.sh", false);
    let runner = ScriptedRunner::all_tools_succeed();

    let (report, _) = validate(&repo, &runner);

    assert_eq!(
        messages(&report, Severity::Warning),
        vec!["rebuild.sh is not executable"]
    );
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_rebuild_script_without_detect_host() {
    let repo = FixtureRepo::healthy();
    repo.write("rebuild.sh", "#!/bin/sh\nsudo nixos-rebuild switch --flake .\n");
    repo.set_executable("rebuild.sh", true);
    let runner = ScriptedRunner::all_tools_succeed();

    let (report, _) = validate(&repo, &runner);

    assert_eq!(
        messages(&report, Severity::Error),
        vec!["rebuild.sh missing detect_host function"]
    );
}

// Ordering and selection

#[test]
fn test_findings_follow_check_order() {
    let repo = FixtureRepo::healthy();
    repo.remove("rebuild.sh");
    repo.write(WORK_HOST, "{ imports = [ ../../modules/gaming.nix ]; }\n");
    let runner = ScriptedRunner::all_tools_succeed();

    let (report, _) = validate(&repo, &runner);

    let order: Vec<&str> = report.findings.iter().map(|f| f.check_id.as_str()).collect();
    assert_eq!(order, vec!["FS-001", "POL-001", "POL-002", "RB-001"]);
}

#[test]
fn test_only_and_skip_filter_checks() {
    let repo = FixtureRepo::empty();
    let runner = ScriptedRunner::all_tools_succeed();

    let mut config = ValidatorConfig::with_root(repo.path());
    config.only = vec!["RB-001".to_string(), "FLK-001".to_string()];
    config.skip = vec!["FLK-001".to_string()];

    let (report, _) = validate_with(config, &runner);

    assert_eq!(report.checks, vec!["RB-001"]);
    assert_eq!(runner.calls().len(), 0);
    assert_eq!(
        messages(&report, Severity::Error),
        vec!["rebuild.sh not found"]
    );
}
