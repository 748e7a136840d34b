//! In-process metrics registry for the server.
//!
//! Counters are keyed by dynamic label sets backed by `DashMap`. Labels are
//! flattened into sorted key vectors to keep deterministic ordering. Rendering
//! follows the Prometheus text exposition format (version 0.0.4).

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Content type of the text exposition format served on `/metrics`.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

/// Helper to escape help text (quotes are legal there).
fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

fn unix_now_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}

struct CounterCell {
    value: AtomicU64,
    created: f64,
}

impl CounterCell {
    fn new() -> Self {
        Self { value: AtomicU64::new(0), created: unix_now_secs() }
    }
}

/// Monotonic counter family with dynamic labels.
///
/// A label set appears in the exposition only after its first increment.
#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, CounterCell>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) -> u64 {
        self.add(labels, 1)
    }

    /// Increment by an arbitrary value, returning the new count.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) -> u64 {
        let cell = self.map.entry(label_key(labels)).or_insert_with(CounterCell::new);
        cell.value.fetch_add(v, Ordering::Relaxed) + v
    }

    /// Current count for a label set (0 if never incremented).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.value.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render as `<name>_total` samples plus `<name>_created` timestamps.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let help = escape_help(help);
        let mut rows: Vec<(String, u64, f64)> = self
            .map
            .iter()
            .map(|r| {
                let label_str = r
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                (label_str, r.value().value.load(Ordering::Relaxed), r.value().created)
            })
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));

        let _ = writeln!(out, "# HELP {name}_total {help}");
        let _ = writeln!(out, "# TYPE {name}_total counter");
        for (labels, val, _) in &rows {
            let _ = writeln!(out, "{name}_total{{{labels}}} {val}");
        }
        let _ = writeln!(out, "# HELP {name}_created {help}");
        let _ = writeln!(out, "# TYPE {name}_created gauge");
        for (labels, _, created) in &rows {
            let _ = writeln!(out, "{name}_created{{{labels}}} {created:.3}");
        }
    }
}

/// A point-in-time gauge sample supplied by callers at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSample {
    pub name: &'static str,
    pub help: &'static str,
    pub value: f64,
}

#[derive(Default)]
pub struct AppMetrics {
    pub request_count: CounterVec,
}

impl AppMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all registered metrics plus any extra gauges provided by callers.
    pub fn render(&self, extra: &[GaugeSample]) -> String {
        let mut out = String::new();
        self.request_count.render("request_count", "App Request Count", &mut out);

        for g in extra {
            let _ = writeln!(out, "# HELP {} {}", g.name, escape_help(g.help));
            let _ = writeln!(out, "# TYPE {} gauge", g.name);
            let _ = writeln!(out, "{} {}", g.name, g.value);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const GREETING: [(&str, &str); 2] = [("method", "GET"), ("endpoint", "/")];

    #[test]
    fn empty_registry_renders_metadata_only() {
        let m = AppMetrics::new();
        let out = m.render(&[]);
        assert!(out.contains("# HELP request_count_total App Request Count"));
        assert!(out.contains("# TYPE request_count_total counter"));
        assert!(!out.contains("request_count_total{"));
        assert_eq!(m.request_count.get(&GREETING), 0);
    }

    #[test]
    fn labels_render_sorted_and_count() {
        let m = AppMetrics::new();
        for _ in 0..3 {
            m.request_count.inc(&GREETING);
        }
        let out = m.render(&[]);
        assert!(out.contains("request_count_total{endpoint=\"/\",method=\"GET\"} 3\n"), "{out}");
        assert!(out.contains("request_count_created{endpoint=\"/\",method=\"GET\"} "));
    }

    #[test]
    fn label_order_does_not_split_series() {
        let c = CounterVec::default();
        c.inc(&[("method", "GET"), ("endpoint", "/")]);
        c.inc(&[("endpoint", "/"), ("method", "GET")]);
        assert_eq!(c.get(&GREETING), 2);
    }

    #[test]
    fn add_returns_new_count() {
        let c = CounterVec::default();
        assert_eq!(c.inc(&GREETING), 1);
        assert_eq!(c.add(&GREETING, 4), 5);
    }

    #[test]
    fn label_values_are_escaped() {
        let c = CounterVec::default();
        c.inc(&[("path", "a\"b\\c\nd")]);
        let mut out = String::new();
        c.render("x", "help", &mut out);
        assert!(out.contains(r#"x_total{path="a\"b\\c\nd"} 1"#), "{out}");
    }

    #[test]
    fn extra_gauges_are_rendered_with_metadata() {
        let m = AppMetrics::new();
        let out = m.render(&[GaugeSample {
            name: "process_resident_memory_bytes",
            help: "Resident memory size in bytes.",
            value: 7.0,
        }]);
        assert!(
            out.contains("# TYPE process_resident_memory_bytes gauge\nprocess_resident_memory_bytes 7\n"),
            "{out}"
        );
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        let m = Arc::new(AppMetrics::new());
        let handles: Vec<_> = (0..100)
            .map(|_| {
                let m = Arc::clone(&m);
                std::thread::spawn(move || {
                    m.request_count.inc(&GREETING);
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(m.request_count.get(&GREETING), 100);
    }
}
