use std::time::{Duration, Instant};

use log::{info, log_enabled, trace, Level};

/// Accumulated frame timing data across a run of frames.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameProfiler {
    pub step_time: Duration,
    pub render_time: Duration,
    pub total_frame_time: Duration,

    pub frames: u64,
    pub over_budget_frames: u64,
    pub particle_count: usize,
    pub reflections: usize,
}

impl FrameProfiler {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn average_frame_time(&self) -> Duration {
        if self.frames == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.total_frame_time.as_secs_f64() / self.frames as f64)
    }

    pub fn report(&self) {
        let total_us = self.total_frame_time.as_micros() as f32;
        if total_us < 1.0 {
            return;
        }

        info!("--- Frame Profile ---");
        info!(
            "Frames: {}, Over budget: {}, Particles: {}, Reflections: {}",
            self.frames, self.over_budget_frames, self.particle_count, self.reflections
        );
        info!(
            "Total: {:.2} ms (avg {:.3} ms/frame)",
            self.total_frame_time.as_secs_f32() * 1000.0,
            self.average_frame_time().as_secs_f32() * 1000.0
        );
        info!(
            "  Physics: {:.2} ms ({:.1}%)",
            self.step_time.as_secs_f32() * 1000.0,
            (self.step_time.as_micros() as f32 / total_us) * 100.0
        );
        info!(
            "  Render:  {:.2} ms ({:.1}%)",
            self.render_time.as_secs_f32() * 1000.0,
            (self.render_time.as_micros() as f32 / total_us) * 100.0
        );
    }
}

/// Times its scope: traces the label on entry and exit and, when built with
/// [`ScopedTimer::accumulate`], adds the elapsed time to a counter on drop.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Instant,
    output: Option<&'a mut Duration>,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        Self::begin(label, None)
    }

    pub fn accumulate(label: &'a str, output: &'a mut Duration) -> Self {
        Self::begin(label, Some(output))
    }

    fn begin(label: &'a str, output: Option<&'a mut Duration>) -> Self {
        if log_enabled!(Level::Trace) {
            trace!("start {label}");
        }
        Self {
            label,
            start: Instant::now(),
            output,
        }
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        if let Some(output) = self.output.as_deref_mut() {
            *output += elapsed;
        }
        if log_enabled!(Level::Trace) {
            trace!("end {} ({} µs)", self.label, elapsed.as_micros());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_timer_accumulates() {
        let mut total = Duration::ZERO;
        {
            let _timer = ScopedTimer::accumulate("sleep", &mut total);
            std::thread::sleep(Duration::from_millis(2));
        }
        assert!(total >= Duration::from_millis(2));
    }

    #[test]
    fn trace_only_timer_needs_no_counter() {
        let _timer = ScopedTimer::new("noop");
    }

    #[test]
    fn average_survives_frame_counts_beyond_u32() {
        let profiler = FrameProfiler {
            total_frame_time: Duration::from_secs(1 << 33),
            frames: (u32::MAX as u64) + 1,
            ..FrameProfiler::default()
        };
        let average = profiler.average_frame_time();
        assert!((average.as_secs_f64() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn average_divides_total_by_frames() {
        let profiler = FrameProfiler {
            total_frame_time: Duration::from_millis(30),
            frames: 3,
            ..FrameProfiler::default()
        };
        assert!((profiler.average_frame_time().as_secs_f64() - 0.010).abs() < 1e-9);
    }

    #[test]
    fn average_of_no_frames_is_zero() {
        assert_eq!(FrameProfiler::default().average_frame_time(), Duration::ZERO);
    }
}
