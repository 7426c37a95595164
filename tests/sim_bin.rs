use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["8", "1"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 8);
    assert_eq!(v["all_won"], true);
    assert!(v["max_turns"].as_u64().unwrap() <= 100);
}

#[test]
fn sim_binary_rejects_bad_layout() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "1", "--layout", "9,3"])
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}

#[test]
fn sim_binary_accepts_vertical_layout_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["2", "5", "--layout", "-60,5,24,2"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 2);
    assert_eq!(v["all_won"], true);
}

#[test]
fn sim_binary_rejects_positional_layout() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "1", "9,3"])
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
