use std::process::Command;

use serde_json::Value;

use energy_savings_sim::config::ScenarioConfig;

fn run_json(args: &[&str]) -> Value {
    let output = Command::new(env!("CARGO_BIN_EXE_energy-savings-sim"))
        .args(args)
        .output()
        .expect("energy-savings-sim process should run");

    assert!(
        output.status.success(),
        "run failed for {args:?}: stderr={} ",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("stdout should be valid UTF-8");
    serde_json::from_str(&stdout).expect("stdout should be JSON")
}

fn number(doc: &Value, pointer: &str) -> f64 {
    doc.pointer(pointer)
        .and_then(Value::as_f64)
        .unwrap_or_else(|| panic!("missing number at `{pointer}` in {doc}"))
}

#[test]
fn scenario_files_parse_and_validate() {
    for path in ["scenarios/suburban_gas.toml", "scenarios/winter_retrofit.toml"] {
        let cfg = ScenarioConfig::from_toml_file(std::path::Path::new(path))
            .unwrap_or_else(|e| panic!("{path}: {e}"));
        let errors = cfg.validate();
        assert!(errors.is_empty(), "{path} should be valid: {errors:?}");
    }
}

#[test]
fn scenario_files_produce_distinct_savings() {
    let suburban = run_json(&["savings", "--scenario", "scenarios/suburban_gas.toml", "--format", "json"]);
    let winter = run_json(&["savings", "--scenario", "scenarios/winter_retrofit.toml", "--format", "json"]);

    assert!(number(&suburban, "/transport_savings") > 0.0);
    assert_eq!(number(&winter, "/transport_savings"), 0.0);
    assert!(number(&suburban, "/hot_water_savings") > 0.0);
    assert!(number(&winter, "/heating_savings") > 0.0);
    assert!(
        (number(&suburban, "/total_savings") - number(&winter, "/total_savings")).abs() > 1.0
    );
    assert_eq!(
        suburban.pointer("/projection/legacy").and_then(Value::as_array).map(Vec::len),
        Some(16)
    );
}

#[test]
fn every_preset_runs_both_models() {
    for name in ScenarioConfig::PRESETS {
        let savings = run_json(&["savings", "--preset", name, "--format", "json"]);
        assert!(number(&savings, "/total_savings").is_finite(), "preset {name}");

        let day = run_json(&["simulate", "--preset", name, "--format", "json"]);
        let records = day.pointer("/records").and_then(Value::as_array).map(Vec::len);
        assert_eq!(records, Some(24), "preset {name}");
        assert!(number(&day, "/summary/total_consumption_kwh") > 0.0);
    }
}

#[test]
fn winter_preset_is_colder_than_baseline() {
    let baseline = run_json(&["simulate", "--preset", "baseline", "--format", "json"]);
    let winter = run_json(&["simulate", "--preset", "winter_leaky", "--format", "json"]);
    assert!(
        number(&winter, "/summary/total_solar_kwh") < number(&baseline, "/summary/total_solar_kwh")
    );
    assert!(winter.pointer("/summary/comfort_warning").is_some_and(Value::is_string));
}

#[test]
fn share_fragment_reproduces_savings() {
    let output = Command::new(env!("CARGO_BIN_EXE_energy-savings-sim"))
        .args(["share", "--preset", "pool_owner"])
        .output()
        .expect("share should run");
    assert!(output.status.success());
    let fragment = String::from_utf8(output.stdout).expect("utf-8");
    let fragment = fragment.trim();
    assert!(fragment.starts_with("#bill="));

    let from_preset = run_json(&["savings", "--preset", "pool_owner", "--format", "json"]);
    let from_fragment = run_json(&["savings", "--fragment", fragment, "--format", "json"]);
    assert_eq!(
        number(&from_preset, "/total_savings"),
        number(&from_fragment, "/total_savings")
    );
}

#[test]
fn unknown_preset_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_energy-savings-sim"))
        .args(["savings", "--preset", "nonexistent"])
        .output()
        .expect("process should run");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown preset"));
}
