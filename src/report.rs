//! Text summary of a finished run.
use crate::engine::RunResult;

/// Prints the human-readable run summary to stdout.
pub fn print_summary(result: &RunResult) {
    println!();
    println!("**Summary**");
    println!("   Address: {}", result.address);
    println!("    Method: {}", result.http_method);
    println!("  Duration: {}s", result.duration);
    if let Some(rate) = result.rate_limit {
        println!(" QPS Limit: {}", rate);
    }
    if let Some(timeout) = result.timeout {
        println!("   Timeout: {}s", timeout);
    }

    println!();
    println!("**Results**");
    let width = result.n_requests.to_string().len();
    println!(
        " Success: {:>width$}/{}",
        result.n_success, result.n_requests
    );
    println!(
        " Failure: {:>width$}/{}",
        result.n_failure, result.n_requests
    );

    println!();
    println!("**Latencies**");
    if result.latencies.is_empty() {
        println!(" No latencies recorded...");
    } else {
        if let Some(min) = result.min_latency {
            println!(" Min: {:.6}s", min);
        }
        if let Some(max) = result.max_latency {
            println!(" Max: {:.6}s", max);
        }
        if let Some(avg) = result.avg_latency {
            println!(" Avg: {:.6}s", avg);
        }
        if let Some(std) = result.std_latency {
            println!(" Std: {:.6}s", std);
        }
    }

    println!();
}
