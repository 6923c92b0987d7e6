// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! A wall-clock stopwatch for coarse performance measurements.

use std::time::{Duration, Instant};

/// Measures elapsed wall-clock time since it was started.
///
/// # Examples
///
/// ```rust
/// # use vcl_core::utils::perf::PerfMeter;
/// let meter = PerfMeter::new();
/// let _work: u64 = (0..1000).sum();
/// assert!(meter.elapsed_ms() >= 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PerfMeter {
    started_at: Instant,
}

impl PerfMeter {
    /// Creates a running meter.
    #[inline]
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }

    /// Restarts the measurement from now.
    #[inline]
    pub fn start(&mut self) {
        self.started_at = Instant::now();
    }

    /// Returns the time elapsed since the last start.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Returns the time elapsed since the last start, in milliseconds.
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for PerfMeter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::range::in_range_closed_open;
    use std::thread::sleep;

    #[test]
    fn test_measures_sleep() {
        let meter = PerfMeter::new();
        sleep(Duration::from_millis(20));
        let elapsed = meter.elapsed_ms();
        assert!(elapsed >= 20.0, "elapsed {elapsed} ms");
    }

    #[test]
    fn test_restart_resets_origin() {
        let mut meter = PerfMeter::default();
        sleep(Duration::from_millis(30));
        let before = meter.elapsed();
        meter.start();
        let after = meter.elapsed();
        assert!(after < before);
        assert!(in_range_closed_open(after.as_secs_f64(), 0.0, 30.0));
    }
}
