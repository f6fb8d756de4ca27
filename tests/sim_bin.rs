use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["seed"], 1);
    let outcome = v["outcome"].as_str().expect("outcome is a string");
    assert!(outcome == "Won" || outcome == "Exhausted");
    assert!(v["misses"].as_u64().unwrap() <= 20);
}
