// profiler.rs
// Per-section timing for the force and integration passes, enabled with the `profiling` feature

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::info;

/// Accumulated time and hit count of one named section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionStats {
    pub total: Duration,
    pub calls: u32,
}

impl SectionStats {
    pub fn mean(&self) -> Duration {
        if self.calls == 0 {
            Duration::ZERO
        } else {
            self.total / self.calls
        }
    }
}

#[derive(Debug, Default)]
pub struct Profiler {
    sections: HashMap<&'static str, SectionStats>,
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, section: &'static str, elapsed: Duration) {
        let stats = self.sections.entry(section).or_default();
        stats.total += elapsed;
        stats.calls += 1;
    }

    pub fn section(&self, section: &str) -> Option<SectionStats> {
        self.sections.get(section).copied()
    }

    /// Sections ordered by total time, slowest first.
    pub fn report_sorted(&self) -> Vec<(&'static str, SectionStats)> {
        let mut report: Vec<_> = self.sections.iter().map(|(&name, &stats)| (name, stats)).collect();
        report.sort_by(|a, b| b.1.total.cmp(&a.1.total).then(a.0.cmp(b.0)));
        report
    }

    /// Log every section at info level, then forget them.
    pub fn print_and_clear(&mut self) {
        for (section, stats) in self.report_sorted() {
            info!(
                section,
                calls = stats.calls,
                total = ?stats.total,
                mean = ?stats.mean(),
                "profile"
            );
        }
        self.sections.clear();
    }
}

/// Times the enclosing scope. With `profiling` on, the elapsed time lands in
/// `crate::PROFILER` on drop.
pub struct ScopeTimer {
    section: &'static str,
    started: Instant,
}

impl ScopeTimer {
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

pub fn start(section: &'static str) -> ScopeTimer {
    ScopeTimer { section, started: Instant::now() }
}

#[cfg(feature = "profiling")]
impl Drop for ScopeTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        crate::PROFILER.lock().record(self.section, elapsed);
    }
}

/// Time the rest of the current scope under `$name`. Compiles to nothing
/// without the `profiling` feature.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _scope_timer = $crate::profiler::start($name);
    };
}
