//! Clock and resource-usage sampling around a solve.

use std::time::Instant;

/// Source of timestamps and peak memory readings.
///
/// Solvers call [`now`](ResourceProbe::now) before and after solving and
/// read [`peak_memory_kb`](ResourceProbe::peak_memory_kb) once at the end.
pub trait ResourceProbe {
    fn now(&self) -> Instant {
        Instant::now()
    }

    /// Peak resident set size of the process in kilobytes, if available.
    fn peak_memory_kb(&self) -> Option<u64>;
}

/// Monotonic clock plus `getrusage(RUSAGE_SELF)` on unix.
///
/// Peak memory is process-wide, so concurrent runs in one process report
/// the same high-water mark.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl ResourceProbe for SystemProbe {
    #[cfg(unix)]
    fn peak_memory_kb(&self) -> Option<u64> {
        let mut usage = std::mem::MaybeUninit::<libc::rusage>::zeroed();
        // SAFETY: `usage` points to writable memory sized for `rusage`.
        let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
        if rc != 0 {
            return None;
        }
        // SAFETY: getrusage succeeded and filled the struct.
        let usage = unsafe { usage.assume_init() };
        let max_rss = u64::try_from(usage.ru_maxrss).ok()?;
        // macOS reports bytes, Linux and the BSDs kilobytes.
        if cfg!(target_os = "macos") {
            Some(max_rss / 1024)
        } else {
            Some(max_rss)
        }
    }

    #[cfg(not(unix))]
    fn peak_memory_kb(&self) -> Option<u64> {
        None
    }
}
