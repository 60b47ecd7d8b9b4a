use std::path::Path;
use std::process::Command;

fn docid_cmd(fixture: &str) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_docid"));
    cmd.current_dir(Path::new("tests/fixtures").join(fixture));
    cmd
}

#[test]
fn derive_emits_expected_identifiers() {
    let output = docid_cmd("basic").args(["derive", "graph.json"]).output().unwrap();
    assert!(
        output.status.success(),
        "derive failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("M:MyNamespace.SampleClass.SampleMethod(System.Int32,System.Object@)"));
    assert!(stdout.contains("MyNamespace.SampleClass/SampleMethod(System.Int32,System.Object-)"));
    assert!(stdout.contains("M:MyNamespace.SampleClass.#ctor"));
    assert!(stdout.contains("F:MyNamespace.SampleClass.SampleField"));
    assert!(stdout.contains("T:MyNamespace.Widget`1"));
    assert!(stdout.contains("M:MyNamespace.Widget`1.Store(`0)"));
    assert!(stdout.contains("MyNamespace.Widget<TItem>.Store"));
}

#[test]
fn derive_is_byte_stable_across_runs() {
    let first = docid_cmd("basic").args(["derive", "graph.json"]).output().unwrap();
    let second = docid_cmd("basic").args(["derive", "graph.json"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn malformed_symbol_is_skipped_not_fatal() {
    let output = docid_cmd("malformed").args(["derive", "graph.json"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1), "expected skip exit code");

    // The healthy symbols still derive.
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("M:SampleClass.SampleMethod"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unrecognized Explicit Interface Name"));
}

#[test]
fn check_passes_on_a_clean_graph() {
    let output = docid_cmd("basic").args(["check", "graph.json"]).output().unwrap();
    assert!(
        output.status.success(),
        "check failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    // check never prints records.
    assert!(output.stdout.is_empty());
}

#[test]
fn filter_limits_derivation_to_matching_names() {
    let output = docid_cmd("basic")
        .args(["derive", "graph.json", "--filter", "^SampleMethod$"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("M:MyNamespace.SampleClass.SampleMethod"));
    assert!(!stdout.contains("#ctor"));
    assert!(!stdout.contains("SampleField"));
}

#[test]
fn missing_graph_is_a_runtime_error() {
    let output = docid_cmd("basic").args(["derive", "no-such.json"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Graph Not Found"));
}

#[test]
fn config_include_restricts_namespaces() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("graph.json"),
        r#"{
            "symbols": [
                { "kind": "type", "name": "Kept", "namespace": "Alpha" },
                { "kind": "type", "name": "Dropped", "namespace": "Beta" }
            ]
        }"#,
    )
    .unwrap();
    std::fs::write(dir.path().join(".docid.toml"), "include = [\"Alpha\"]\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_docid"))
        .current_dir(dir.path())
        .args(["derive", "graph.json"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "derive failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("T:Alpha.Kept"));
    assert!(!stdout.contains("Beta.Dropped"));
}

#[test]
fn directory_argument_discovers_graph_files() {
    let output = docid_cmd("basic").args(["derive", "."]).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("M:MyNamespace.SampleClass.#ctor"));
}
