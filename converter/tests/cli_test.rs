use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const HEADER: &str = "roastery,name,priceEurKg,arabica,robusta,strength,caffeine,roastLevel,crema";

fn run_coffeeconv(input: &Path, output: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_coffeeconv"))
        .arg("--in")
        .arg(input)
        .arg("--out")
        .arg(output)
        .output()
        .expect("run coffeeconv")
}

fn write_csv(dir: &Path, rows: &[&str]) -> PathBuf {
    let path = dir.join("coffee.csv");
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    fs::write(&path, content).expect("temporary csv should be writable");
    path
}

#[test]
fn converts_file_and_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(
        dir.path(),
        &[
            r#"Lavazza,Qualità Oro,"18,5",100,0,3,2,4,3"#,
            "Illy,Classico,31.90,100,0,3,2,3,4",
        ],
    );
    let output = dir.path().join("coffee.json");

    let result = run_coffeeconv(&input, &output);
    assert!(
        result.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&result.stderr)
    );

    let stdout = String::from_utf8(result.stdout).unwrap();
    assert!(stdout.starts_with("args: {\n  \"in\": "));
    assert!(stdout.trim_end().ends_with("done"));
    assert!(stdout.contains("processed 2 coffee CSV records"));
    assert!(stdout.contains("generated 2 coffee JSON records"));
    assert!(stdout.contains("\"name\": \"Qualità Oro\""));

    let written = fs::read_to_string(&output).unwrap();
    assert!(stdout.contains(&written));
    assert!(written.starts_with("[\n  {\n    \"roastery\": \"Lavazza\""));
    assert!(written.contains("\"priceEurKg\": 18.5,"));
    assert!(written.contains("\"priceEurKg\": 31.90,"));
    assert!(!written.contains("\\u00e0"));
}

#[test]
fn missing_input_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.csv");
    let output = dir.path().join("coffee.json");

    let result = run_coffeeconv(&input, &output);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("does not exist"));
    assert!(!output.exists());
}

#[test]
fn existing_output_is_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(dir.path(), &["Illy,Classico,31.9,100,0,3,2,3,4"]);
    let output = dir.path().join("coffee.json");
    fs::write(&output, "keep me").unwrap();

    let result = run_coffeeconv(&input, &output);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("already exists"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");
}

#[test]
fn malformed_decimal_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(
        dir.path(),
        &[
            "Illy,Classico,31.9,100,0,3,2,3,4",
            "Kimbo,Aroma Gold,20,100,zero,3,2,3,3",
        ],
    );
    let output = dir.path().join("coffee.json");

    let result = run_coffeeconv(&input, &output);
    assert!(!result.status.success());

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("robusta"));
    assert!(stderr.contains("zero"));
    assert!(!output.exists());
}

#[test]
fn wrong_field_count_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(dir.path(), &["Lavazza,Qualità Oro,18,5,100,0,3,2,4,3"]);
    let output = dir.path().join("coffee.json");

    let result = run_coffeeconv(&input, &output);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("expected 9 fields, found 10"));
    assert!(!output.exists());
}

#[test]
fn header_only_input_writes_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_csv(dir.path(), &[]);
    let output = dir.path().join("coffee.json");

    let result = run_coffeeconv(&input, &output);
    assert!(result.status.success());

    let stdout = String::from_utf8(result.stdout).unwrap();
    assert!(stdout.contains("processed 0 coffee CSV records"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "[]");
}
