use assert_cmd::cargo;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// With --json every diagnostic line on stderr is a JSON object; stdout keeps the plain report.
#[test]
fn json_logs_go_to_stderr() {
    let td = tempdir().unwrap();
    let src = td.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("a.txt"), "a").unwrap();

    let me = cargo::cargo_bin!("datesort");
    let out = Command::new(me)
        .arg("--from")
        .arg(&src)
        .arg("--to")
        .arg(td.path().join("out"))
        .arg("--json")
        .arg("--log-level")
        .arg("normal")
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("contains 1 files"));

    let stderr = String::from_utf8_lossy(&out.stderr);
    let events: Vec<serde_json::Value> = stderr
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("not JSON ({e}): {l}")))
        .collect();
    assert!(
        events
            .iter()
            .any(|e| e["fields"]["message"] == "Relocation finished" && e["fields"]["files"] == 1),
        "stderr: {stderr}"
    );
}

#[test]
fn log_file_receives_events() {
    let td = tempdir().unwrap();
    let src = td.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("a.txt"), "a").unwrap();
    let log = td.path().join("logs").join("datesort.log");

    let me = cargo::cargo_bin!("datesort");
    let out = Command::new(me)
        .arg("--from")
        .arg(&src)
        .arg("--log-file")
        .arg(&log)
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    let contents = fs::read_to_string(&log).unwrap_or_default();
    assert!(contents.contains("Relocation finished"), "log file: {contents}");
}
