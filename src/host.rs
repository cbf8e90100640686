//! Best-effort host details for informational display. Collection gaps show
//! up as `None`; they never block benchmarking.

use sysinfo::System;

#[derive(Debug, Clone)]
pub struct HostInfo {
    pub host_name: Option<String>,
    pub cpu: Option<String>,
    pub total_memory_bytes: u64,
    pub logical_cores: usize,
}

impl HostInfo {
    pub fn total_memory_gb(&self) -> f64 {
        self.total_memory_bytes as f64 / (1024.0 * 1024.0 * 1024.0)
    }
}

pub fn collect() -> HostInfo {
    let sys = System::new_all();
    HostInfo {
        host_name: System::host_name(),
        cpu: sys.cpus().first().map(|cpu| cpu.brand().trim().to_string()),
        total_memory_bytes: sys.total_memory(),
        logical_cores: sys.cpus().len(),
    }
}
