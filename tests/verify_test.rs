//! End-to-end verification runs against a scripted host.

use std::fs;
use std::path::PathBuf;

use rackcheck::checks::{CheckContext, DEFAULT_CHECKS};
use rackcheck::config::VerifierSettings;
use rackcheck::runner::{verify, CheckRunner, RunSummary};
use rackcheck::shell::MockRunner;
use rackcheck::ui::MockUI;
use tempfile::TempDir;

const IMPORTS: [&str; 5] = [
    "python3 -c import customtkinter",
    "python3 -c import yaml",
    "python3 -c import paramiko",
    "python3 -c import psutil",
    "python3 -c import requests",
];

/// A host where every external command behaves.
fn healthy_host() -> MockRunner {
    IMPORTS
        .iter()
        .fold(MockRunner::new(), |runner, cmd| runner.with_stdout(cmd, ""))
        .with_stdout("python3 --version", "Python 3.11.2\n")
        .with_stdout("ollama --version", "ollama version is 0.5.7\n")
        .with_stdout("systemctl is-active ollama", "active\n")
        .with_stdout("vcgencmd measure_temp", "temp=47.2'C\n")
}

struct Workspace {
    project: TempDir,
    home: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let project = TempDir::new().unwrap();
        fs::write(
            project.path().join("config.yaml"),
            "nodes:\n  - name: pi-01\n    host: 10.0.0.11\n  - name: pi-02\n    host: 10.0.0.12\n",
        )
        .unwrap();

        let home = TempDir::new().unwrap();
        fs::create_dir_all(home.path().join(".ssh")).unwrap();
        fs::write(home.path().join(".ssh").join("id_rsa"), "placeholder").unwrap();

        Self { project, home }
    }

    fn home_dir(&self) -> Option<PathBuf> {
        Some(self.home.path().to_path_buf())
    }

    fn run(&self, host: &MockRunner) -> (RunSummary, MockUI) {
        let settings = VerifierSettings::default();
        let ctx = CheckContext::new(
            &settings,
            host,
            self.project.path().to_path_buf(),
            self.home_dir(),
        );
        let mut ui = MockUI::new();
        let summary = verify(&CheckRunner::default(), &ctx, &mut ui);
        (summary, ui)
    }
}

#[test]
fn healthy_host_passes_every_check() {
    let workspace = Workspace::new();
    let (summary, ui) = workspace.run(&healthy_host());

    assert_eq!(summary.total(), DEFAULT_CHECKS.len());
    assert_eq!(summary.passed(), 7);
    assert_eq!(summary.exit_code(), 0);
    assert!(ui.has_line("Passed: 7/7"));
    assert!(ui.has_line("All tests passed! You can now run:"));
    assert!(ui.has_line("./run.sh"));
    assert!(ui.has_line("Testing config.yaml... OK (2 nodes configured)"));

    let transcript = ui.transcript();
    let banner = transcript.find("ServerRack Installation Test").unwrap();
    let first_check = transcript.find("Testing Python version").unwrap();
    let summary_pos = transcript.find("Summary").unwrap();
    assert!(banner < first_check && first_check < summary_pos);
}

#[test]
fn one_missing_package_fails_the_run() {
    let workspace = Workspace::new();
    let host = healthy_host().with_exit("python3 -c import paramiko", 1, "");
    let (summary, ui) = workspace.run(&host);

    assert_eq!(summary.passed(), 6);
    assert_eq!(summary.exit_code(), 1);
    assert!(ui.has_line("Testing Paramiko... FAILED"));
    assert!(ui.has_line("Python Packages: FAIL"));
    assert!(ui.has_line("Passed: 6/7"));
    assert!(ui.has_line("Some tests failed. Please check the output above."));
}

#[test]
fn missing_config_still_reports_everything() {
    let workspace = Workspace::new();
    fs::remove_file(workspace.project.path().join("config.yaml")).unwrap();
    let (summary, ui) = workspace.run(&healthy_host());

    assert_eq!(summary.total(), 7);
    assert_eq!(summary.passed(), 6);
    assert!(ui.has_line("Testing config.yaml... FAILED (not found)"));
    assert!(ui.has_line("Configuration: FAIL"));
    assert!(ui.has_line("Temperature Monitoring: PASS"));
}

#[test]
fn warnings_show_live_but_collapse_to_fail() {
    let workspace = Workspace::new();
    let host = healthy_host().with_exit("systemctl is-active ollama", 3, "inactive\n");
    let (summary, ui) = workspace.run(&host);

    assert!(ui.has_line("Testing Ollama service... WARNING (inactive)"));
    assert!(ui.has_line("  Run: sudo systemctl start ollama"));
    assert!(ui.has_line("Ollama Service: FAIL"));
    assert_eq!(summary.exit_code(), 1);
}

#[test]
fn bare_host_fails_without_aborting() {
    let workspace = Workspace::new();
    let (summary, ui) = workspace.run(&MockRunner::new());

    assert_eq!(summary.total(), 7);
    // only the config file and SSH key survive a host with no tools
    assert_eq!(summary.passed(), 2);
    assert!(ui.has_line("Testing Ollama installation... FAILED (not installed)"));
    assert!(ui.has_line("Testing temperature monitoring... WARNING (vcgencmd not available)"));
    assert!(ui.errors().is_empty());
}

#[test]
fn timeouts_are_failures_not_aborts() {
    let workspace = Workspace::new();
    let host = healthy_host()
        .with_timeout("ollama --version")
        .with_timeout("vcgencmd measure_temp");
    let (summary, ui) = workspace.run(&host);

    assert_eq!(summary.passed(), 5);
    assert!(ui.has_line("Testing Ollama installation... FAILED (timeout)"));
    assert!(ui.has_line("Temperature Monitoring: FAIL"));
}

#[test]
fn live_outcomes_follow_check_order() {
    let workspace = Workspace::new();
    let (_, ui) = workspace.run(&healthy_host());

    let labels: Vec<_> = ui.outcomes().iter().map(|(label, _)| label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "Python version",
            "CustomTkinter",
            "PyYAML",
            "Paramiko",
            "psutil",
            "Requests",
            "Ollama installation",
            "Ollama service",
            "config.yaml",
            "SSH keys",
            "temperature monitoring",
        ]
    );
}
