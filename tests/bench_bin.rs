use std::process::Command;

#[test]
fn bench_binary_prints_json() {
    let output = Command::new("cargo")
        .args([
            "run", "--quiet", "--bin", "heatseeker", "--", "bench", "--games", "2", "--seed", "1",
            "--simulations", "20",
        ])
        .env("HEATSEEKER_LOG", "info")
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run heatseeker binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["games"], 2);
    assert!(v["mean_shots"].is_number());
    assert_eq!(v["reports"].as_array().map(Vec::len), Some(2));
}
