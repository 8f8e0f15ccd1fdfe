use assert_cmd::Command;

/// Helper to get a Command for the a11yguard binary.
#[allow(deprecated)]
fn a11yguard_cmd() -> Command {
    Command::cargo_bin("a11yguard").unwrap()
}

#[test]
fn help_works() {
    a11yguard_cmd().arg("--help").assert().success();
}

#[test]
fn subcommand_help_works() {
    a11yguard_cmd().args(["scan-pdf", "--help"]).assert().success();
    a11yguard_cmd().args(["scan-url", "--help"]).assert().success();
    a11yguard_cmd().args(["md", "--help"]).assert().success();
}

#[test]
fn scan_pdf_requires_files() {
    a11yguard_cmd().arg("scan-pdf").assert().failure();
}
