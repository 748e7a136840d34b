//! Process gauges collected at scrape time.
//!
//! `process_start_time_seconds` is always present: the OS-reported start time
//! when `sysinfo` can inspect the current process, otherwise `started_at`.
//! Memory gauges are skipped when the process cannot be inspected.

use std::time::{SystemTime, UNIX_EPOCH};

use sysinfo::System;

use super::metrics::GaugeSample;

/// Collect process gauges. `started_at` is the fallback start time recorded by `AppState`.
pub fn collect(started_at: SystemTime) -> Vec<GaugeSample> {
    let mut start_secs = started_at
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64();
    let mut memory = Vec::with_capacity(2);

    match sysinfo::get_current_pid() {
        Ok(pid) => {
            let mut sys = System::new();
            if sys.refresh_process(pid) {
                if let Some(p) = sys.process(pid) {
                    if p.start_time() > 0 {
                        start_secs = p.start_time() as f64;
                    }
                    memory.push(GaugeSample {
                        name: "process_virtual_memory_bytes",
                        help: "Virtual memory size in bytes.",
                        value: p.virtual_memory() as f64,
                    });
                    memory.push(GaugeSample {
                        name: "process_resident_memory_bytes",
                        help: "Resident memory size in bytes.",
                        value: p.memory() as f64,
                    });
                }
            }
        }
        Err(e) => tracing::debug!(error = %e, "process gauges unavailable"),
    }

    let mut out = Vec::with_capacity(1 + memory.len());
    out.push(start_time(start_secs));
    out.extend(memory);
    out
}

fn start_time(secs: f64) -> GaugeSample {
    GaugeSample {
        name: "process_start_time_seconds",
        help: "Start time of the process since unix epoch in seconds.",
        value: secs,
    }
}
