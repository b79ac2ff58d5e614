use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const EXPECTED_DOCUMENT: &str = "<img src=\"https://banes-lab.com/assets/images/banes_lab/700px_Main_Animated.gif\" width=\"70\" />\n\n## 📂 Project Structure\n```\n├─ 📘 README.md\n└─ 📂 src\n    └─ 🐍 main.py\n```";

fn treemark_cmd(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("treemark").unwrap();
    cmd.current_dir(root).env_remove("PROJECT_ROOT");
    cmd
}

fn scaffold_project(root: &Path) {
    fs::write(root.join("README.md"), "# demo").unwrap();
    fs::create_dir(root.join("src")).unwrap();
    fs::write(root.join("src/main.py"), "print()").unwrap();
    fs::create_dir(root.join(".git")).unwrap();
    fs::write(root.join(".git/config"), "").unwrap();
}

#[test]
fn generate_writes_document_to_project_root() {
    let tmp = TempDir::new().unwrap();
    scaffold_project(tmp.path());

    treemark_cmd(tmp.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project tree saved to:"));

    let document = fs::read_to_string(tmp.path().join("PROJECT_TREE.md")).unwrap();
    assert_eq!(document, EXPECTED_DOCUMENT);
}

#[test]
fn generate_stdout_prints_document_without_writing_a_file() {
    let tmp = TempDir::new().unwrap();
    scaffold_project(tmp.path());

    treemark_cmd(tmp.path())
        .args(["generate", "--stdout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 📂 Project Structure"))
        .stdout(predicate::str::contains("└─ 📂 src"));

    assert!(!tmp.path().join("PROJECT_TREE.md").exists());
}

#[test]
fn generate_quiet_suppresses_the_confirmation() {
    let tmp = TempDir::new().unwrap();
    scaffold_project(tmp.path());

    treemark_cmd(tmp.path())
        .args(["generate", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(tmp.path().join("PROJECT_TREE.md").exists());
}

#[test]
fn generate_output_flag_writes_custom_path() {
    let tmp = TempDir::new().unwrap();
    scaffold_project(tmp.path());

    treemark_cmd(tmp.path())
        .args(["generate", "-o", "docs/TREE.md"])
        .assert()
        .success();

    let document = fs::read_to_string(tmp.path().join("docs/TREE.md")).unwrap();
    assert!(document.starts_with("<img "));
    assert!(!tmp.path().join("PROJECT_TREE.md").exists());
}

#[test]
fn generate_rejects_stdout_combined_with_output() {
    let tmp = TempDir::new().unwrap();
    scaffold_project(tmp.path());

    treemark_cmd(tmp.path())
        .args(["generate", "--stdout", "-o", "TREE.md"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn generate_cli_excludes_hide_entries() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("secrets")).unwrap();
    fs::write(tmp.path().join("secrets/token.txt"), "").unwrap();
    fs::write(tmp.path().join("keep.py"), "").unwrap();

    treemark_cmd(tmp.path())
        .args(["generate", "--stdout", "--exclude", "secrets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keep.py"))
        .stdout(predicate::str::contains("secrets").not());
}

#[test]
fn generated_document_never_lists_itself() {
    let tmp = TempDir::new().unwrap();
    scaffold_project(tmp.path());

    treemark_cmd(tmp.path()).arg("generate").assert().success();
    let first = fs::read_to_string(tmp.path().join("PROJECT_TREE.md")).unwrap();

    treemark_cmd(tmp.path()).arg("generate").assert().success();
    let second = fs::read_to_string(tmp.path().join("PROJECT_TREE.md")).unwrap();

    assert_eq!(first, second);
    assert!(!second.contains("PROJECT_TREE.md"));
}

#[test]
fn config_file_overrides_are_applied() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("spec_notes.txt"), "").unwrap();
    fs::write(
        tmp.path().join("treemark.toml"),
        "[output]\nfilename = \"TREE.md\"\n\n[[markers.name_patterns]]\npattern = \"spec\"\nmarker = \"📐\"\n",
    )
    .unwrap();

    treemark_cmd(tmp.path()).arg("generate").assert().success();

    let document = fs::read_to_string(tmp.path().join("TREE.md")).unwrap();
    assert!(document.contains("📐 spec_notes.txt"));
    assert!(!tmp.path().join("PROJECT_TREE.md").exists());
}

#[test]
fn missing_project_root_exits_with_io_code() {
    let tmp = TempDir::new().unwrap();

    treemark_cmd(tmp.path())
        .args(["generate", "--project-root", "does-not-exist"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn broken_config_file_exits_with_config_code() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("treemark.toml"), "not valid toml [").unwrap();

    treemark_cmd(tmp.path())
        .arg("generate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("treemark.toml"));
}

#[test]
fn stats_prints_summary_table() {
    let tmp = TempDir::new().unwrap();
    scaffold_project(tmp.path());

    treemark_cmd(tmp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tree Summary"))
        .stdout(predicate::str::contains("Directories:"))
        .stdout(predicate::str::contains("Marker Breakdown"));
}

#[test]
fn stats_json_reports_counts() {
    let tmp = TempDir::new().unwrap();
    scaffold_project(tmp.path());

    treemark_cmd(tmp.path())
        .args(["stats", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"directories\": 1"))
        .stdout(predicate::str::contains("\"files\": 2"));
}

#[test]
fn show_excludes_lists_builtin_entries() {
    let tmp = TempDir::new().unwrap();

    treemark_cmd(tmp.path())
        .args(["show", "excludes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".git"))
        .stdout(predicate::str::contains("PROJECT_TREE.md"));
}

#[test]
fn show_markers_lists_tables() {
    let tmp = TempDir::new().unwrap();

    treemark_cmd(tmp.path())
        .args(["show", "markers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("readme"))
        .stdout(predicate::str::contains("📘"))
        .stdout(predicate::str::contains(".py"));
}

#[test]
fn show_excludes_honors_explicit_text_format() {
    let tmp = TempDir::new().unwrap();

    treemark_cmd(tmp.path())
        .args(["show", "-f", "text", "excludes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Effective Exclusion Set ---"))
        .stdout(predicate::str::contains("- .git"));
}

#[test]
fn show_markers_honors_explicit_text_format() {
    let tmp = TempDir::new().unwrap();

    treemark_cmd(tmp.path())
        .args(["show", "-f", "text", "markers"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "--- Effective Classification Tables ---",
        ))
        .stdout(predicate::str::contains("Name Patterns"));
}

#[test]
fn show_config_prints_effective_toml() {
    let tmp = TempDir::new().unwrap();

    treemark_cmd(tmp.path())
        .args(["show", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("use_default_excludes = true"))
        .stdout(predicate::str::contains("[output]"));
}

#[test]
fn config_prints_default_structure() {
    let tmp = TempDir::new().unwrap();

    treemark_cmd(tmp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("filename = \"PROJECT_TREE.md\""));
}

#[test]
fn config_save_writes_default_file() {
    let tmp = TempDir::new().unwrap();

    treemark_cmd(tmp.path())
        .args(["config", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Default configuration saved to:"));

    let saved = fs::read_to_string(tmp.path().join("treemark.toml")).unwrap();
    assert!(saved.contains("use_default_markers = true"));

    // Quiet mode refuses to overwrite instead of prompting.
    treemark_cmd(tmp.path())
        .args(["config", "--save", "-q"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn completion_generates_script_for_known_shells() {
    let tmp = TempDir::new().unwrap();

    treemark_cmd(tmp.path())
        .args(["completion", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("treemark"));
}

#[test]
fn completion_rejects_unknown_shell() {
    let tmp = TempDir::new().unwrap();

    treemark_cmd(tmp.path())
        .args(["completion", "--shell", "powershell"])
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("Unsupported shell"));
}

#[test]
fn help_describes_the_tool() {
    let tmp = TempDir::new().unwrap();

    // --help renders the long about text, -h the short one.
    treemark_cmd(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("walks a project directory"))
        .stdout(predicate::str::contains("generate"));

    treemark_cmd(tmp.path())
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Render an annotated project tree",
        ));
}

#[test]
fn bare_invocation_shows_usage_error() {
    let tmp = TempDir::new().unwrap();

    treemark_cmd(tmp.path()).assert().failure().code(2);
}
