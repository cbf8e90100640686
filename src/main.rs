use std::path::Path;
use std::process::ExitCode;

use log::{error, warn};

use sort_classics_rs::bench::{self, BenchConfig};
use sort_classics_rs::{host, report};

const REPORT_PATH: &str = "benchmark_results.txt";
const CHART_PATH: &str = "benchmark_results.svg";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let info = host::collect();
    println!("System Details:");
    println!("Host Name: {}", info.host_name.as_deref().unwrap_or("unknown"));
    println!("CPU: {}", info.cpu.as_deref().unwrap_or("unknown"));
    println!("Memory: {:.2} GB", info.total_memory_gb());
    println!("Total Cores: {}", info.logical_cores);
    println!("Crate Version: {}", env!("CARGO_PKG_VERSION"));
    println!("\nExecuting benchmarks...\n");

    let config = BenchConfig::default();
    let table = match bench::run(&config) {
        Ok(table) => table,
        Err(err) => {
            error!("benchmark run failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = report::save_report(&table, Path::new(REPORT_PATH)) {
        error!("writing {REPORT_PATH} failed: {err}");
        return ExitCode::FAILURE;
    }
    println!("Results written to {REPORT_PATH}");

    // The measurements are already on disk at this point; a chart failure
    // (read-only directory, malformed backend output) must not undo that.
    if let Err(err) = report::render_chart(&table, Path::new(CHART_PATH)) {
        warn!("chart rendering failed, continuing: {err}");
    } else {
        println!("Chart written to {CHART_PATH}");
    }

    ExitCode::SUCCESS
}
