use std::fs;
use std::process::Command;
use tempfile::TempDir;

#[test]
fn test_view_command_basic() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("SharedResource.en.resx");
    fs::write(
        &input_file,
        r#"<root>
            <data name="Greeting"><value>Hello</value></data>
            <data name="Farewell"><value>Goodbye</value><comment>logout</comment></data>
        </root>"#,
    )
    .unwrap();

    let output = Command::new("cargo")
        .args(["run", "--", "view", "-i", input_file.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Entries: 2"));
    assert!(stdout.contains("Greeting"));
    assert!(stdout.contains("Comment: logout"));
}

#[test]
fn test_view_command_truncates_long_values() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("SharedResource.en.resx");
    let long_value = "x".repeat(80);
    fs::write(
        &input_file,
        format!(r#"<root><data name="Long"><value>{}</value></data></root>"#, long_value),
    )
    .unwrap();

    let output = Command::new("cargo")
        .args(["run", "--", "view", "-i", input_file.to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("{}...", "x".repeat(50))));
    assert!(!stdout.contains(&long_value));

    // --full prints the whole value
    let output = Command::new("cargo")
        .args(["run", "--", "view", "-i", input_file.to_str().unwrap(), "--full"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&long_value));
}

#[test]
fn test_view_command_missing_file() {
    let output = Command::new("cargo")
        .args(["run", "--", "view", "-i", "nonexistent.resx"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("File does not exist"));
}
