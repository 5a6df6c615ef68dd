mod support;

use std::fs;

use tempfile::tempdir;

use support::{run_pelt, spawn_http_server_or_skip};

#[test]
fn e2e_fixed_rate_writes_json_record() -> Result<(), String> {
    let Some((url, _server)) = spawn_http_server_or_skip()? else {
        return Ok(());
    };
    let dir = tempdir().map_err(|err| format!("tempdir failed: {}", err))?;
    let output_path = dir.path().join("result.json");
    let output_arg = output_path.to_string_lossy().into_owned();

    let output = run_pelt([
        url.as_str(),
        "-t",
        "2",
        "--rate-limit",
        "5",
        "--quiet",
        "-o",
        output_arg.as_str(),
    ])?;
    if !output.status.success() {
        return Err(format!(
            "stdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    if String::from_utf8_lossy(&output.stdout).contains("**Summary**") {
        return Err("Expected --quiet to suppress the summary".to_owned());
    }

    let content = fs::read_to_string(&output_path)
        .map_err(|err| format!("read output file failed: {}", err))?;
    let record: serde_json::Value =
        serde_json::from_str(&content).map_err(|err| format!("parse record failed: {}", err))?;

    let n_requests = record
        .get("n_requests")
        .and_then(serde_json::Value::as_u64)
        .ok_or_else(|| format!("missing n_requests: {}", record))?;
    let n_success = record
        .get("n_success")
        .and_then(serde_json::Value::as_u64)
        .ok_or_else(|| format!("missing n_success: {}", record))?;
    let n_failure = record
        .get("n_failure")
        .and_then(serde_json::Value::as_u64)
        .ok_or_else(|| format!("missing n_failure: {}", record))?;

    // Two guaranteed one-second ticks at rate 5, at most one straddling tick.
    if !(10..=15).contains(&n_requests) {
        return Err(format!("Expected 10..=15 requests, got {}", n_requests));
    }
    if n_failure != 0 || n_success != n_requests {
        return Err(format!(
            "Expected a fully successful run, got {}/{} successes",
            n_success, n_requests
        ));
    }
    if record.get("rate_limit").and_then(serde_json::Value::as_u64) != Some(5) {
        return Err(format!("Expected rate_limit 5 in record: {}", record));
    }
    for key in ["min_latency", "max_latency", "avg_latency"] {
        if record.get(key).and_then(serde_json::Value::as_f64).is_none() {
            return Err(format!("Expected '{}' in record: {}", key, record));
        }
    }
    Ok(())
}

#[test]
fn e2e_summary_prints_by_default() -> Result<(), String> {
    let Some((url, _server)) = spawn_http_server_or_skip()? else {
        return Ok(());
    };

    let output = run_pelt([url.as_str(), "-t", "1"])?;
    if !output.status.success() {
        return Err(format!(
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        ));
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.contains("**Summary**") || !stdout.contains("Success:") {
        return Err(format!("Unexpected summary output: {}", stdout));
    }
    Ok(())
}

#[test]
fn e2e_invalid_address_exits_nonzero() -> Result<(), String> {
    let output = run_pelt(["not a url", "-t", "1"])?;
    if output.status.success() {
        return Err("Expected a nonzero exit for an invalid address".to_owned());
    }
    Ok(())
}
