//! End-to-end tests of the `jyoti` binary's JSON output.

use std::process::{Command, Output};

use serde_json::Value;

fn jyoti(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jyoti"))
        .env_remove("JYOTI_CONFIG")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap()
}

fn json(args: &[&str]) -> Value {
    let out = jyoti(args);
    assert!(
        out.status.success(),
        "jyoti {args:?} failed:\n{}",
        String::from_utf8_lossy(&out.stderr)
    );
    serde_json::from_slice(&out.stdout).unwrap()
}

#[test]
fn rashi_json() {
    let v = json(&["--json", "rashi", "95", "--reference", "Aries"]);
    assert_eq!(v["rashi"]["rashi"], "Cancer");
    assert_eq!(v["house"], 4);
}

#[test]
fn nakshatra_by_name() {
    let v = json(&["nakshatra", "--name", "Moola", "--json"]);
    assert_eq!(v["nakshatra"], "Mula");
    assert_eq!(v["resolved"], true);
    assert_eq!(v["dashaLord"], "Ketu");
}

#[test]
fn match_identical() {
    let v = json(&[
        "--json",
        "match",
        "--sign-a",
        "Aries",
        "--nakshatra-a",
        "Ashwini",
        "--sign-b",
        "Aries",
        "--nakshatra-b",
        "Ashwini",
    ]);
    assert_eq!(v["totalObtained"], 25);
    assert_eq!(v["rating"], "Good");
}

#[test]
fn dasha_at_birth() {
    let v = json(&[
        "--json",
        "dasha",
        "--nakshatra",
        "Krittika",
        "--birth",
        "1990-05-15T06:30",
        "--now",
        "1990-05-15T06:30",
    ]);
    assert_eq!(v["mahadasha"]["planet"], "Sun");
    assert_eq!(v["antardasha"]["planet"], "Sun");
}

#[test]
fn sade_sati_for_aries() {
    let v = json(&["--json", "sade-sati", "--moon-sign", "Aries", "--at", "Jun 2026"]);
    assert_eq!(v["inSadeSati"], true);
    assert_eq!(v["activePhase"], "12th");
}

#[test]
fn house_rejects_short_cusps() {
    let out = jyoti(&["house", "10", "--cusps", "0,30,60"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("12 house cusps"), "stderr: {stderr}");
}

#[test]
fn config_fallback_applies() {
    let path = std::env::temp_dir().join(format!("jyoti_cli_{}.toml", std::process::id()));
    std::fs::write(&path, "[saturn]\nfallback = \"Leo\"\n").unwrap();
    let p = path.to_string_lossy().to_string();
    let v = json(&[
        "--config",
        &p,
        "--json",
        "sade-sati",
        "--moon-sign",
        "Leo",
        "--at",
        "Jan 2070",
    ]);
    let _ = std::fs::remove_file(&path);
    assert_eq!(v["saturn"]["sign"], "Leo");
    assert_eq!(v["activePhase"], "1st");
    assert_eq!(v["warnings"][0]["kind"], "staleTable");
}
