//! Degree-stepped rotation clock for spinner rings.
//!
//! ## Usage
//!
//! Owned by a ring controller; the component starts and cancels the clock
//! when its spinner configuration changes and advances it on every frame.

use std::time::{Duration, Instant};

/// Rotation clock that advances one degree per tick.
///
/// The tick interval is the cycle duration divided by 360, so one full cycle
/// rotates the ring by a full turn. The accumulated angle is unbounded and
/// survives cancellation.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinnerClock {
    phase: SpinnerPhase,
    rotation_degrees: f64,
}

#[derive(Debug, Clone, PartialEq)]
enum SpinnerPhase {
    Stopped,
    Running {
        started: Instant,
        ticked: u64,
        tick_interval: Duration,
        step_degrees: f64,
    },
}

/// Tick interval for a full-turn cycle duration.
pub fn tick_interval(cycle_duration: Duration) -> Duration {
    cycle_duration.max(Duration::from_nanos(360)) / 360
}

impl Default for SpinnerClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinnerClock {
    /// Creates a stopped clock at zero rotation.
    pub fn new() -> Self {
        Self {
            phase: SpinnerPhase::Stopped,
            rotation_degrees: 0.0,
        }
    }

    /// Starts ticking. A running clock with the same configuration is left
    /// alone; a changed configuration restarts the tick schedule without
    /// resetting the accumulated angle.
    pub fn start(&mut self, cycle_duration: Duration, clockwise: bool) {
        self.start_at(Instant::now(), cycle_duration, clockwise);
    }

    fn start_at(&mut self, now: Instant, cycle_duration: Duration, clockwise: bool) {
        let interval = tick_interval(cycle_duration);
        let step = if clockwise { 1.0 } else { -1.0 };
        if let SpinnerPhase::Running {
            tick_interval,
            step_degrees,
            ..
        } = &self.phase
            && *tick_interval == interval
            && *step_degrees == step
        {
            return;
        }
        tracing::debug!(?interval, clockwise, "spinner clock started");
        self.phase = SpinnerPhase::Running {
            started: now,
            ticked: 0,
            tick_interval: interval,
            step_degrees: step,
        };
    }

    /// Stops ticking, keeping the accumulated angle. Idempotent.
    pub fn cancel(&mut self) {
        if self.phase != SpinnerPhase::Stopped {
            tracing::debug!(rotation = self.rotation_degrees, "spinner clock canceled");
            self.phase = SpinnerPhase::Stopped;
        }
    }

    /// Consumes every whole tick elapsed since the last advance.
    pub fn advance(&mut self) {
        self.advance_to(Instant::now());
    }

    fn advance_to(&mut self, now: Instant) {
        let SpinnerPhase::Running {
            started,
            ticked,
            tick_interval,
            step_degrees,
        } = &mut self.phase
        else {
            return;
        };
        let elapsed = now.saturating_duration_since(*started);
        let total = (elapsed.as_nanos() / tick_interval.as_nanos().max(1)) as u64;
        if total > *ticked {
            self.rotation_degrees += (total - *ticked) as f64 * *step_degrees;
            *ticked = total;
        }
    }

    /// Whether the clock is currently ticking.
    pub fn is_running(&self) -> bool {
        matches!(self.phase, SpinnerPhase::Running { .. })
    }

    /// Accumulated rotation in degrees. Unbounded; not normalized.
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation_degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_interval_is_cycle_over_360() {
        assert_eq!(
            tick_interval(Duration::from_secs(1)),
            Duration::from_secs(1) / 360
        );
        assert_eq!(
            tick_interval(Duration::from_secs(2)),
            Duration::from_secs(2) / 360
        );
    }

    #[test]
    fn test_full_cycle_returns_to_start_modulo_360() {
        let mut clock = SpinnerClock::new();
        let t0 = Instant::now();
        clock.start_at(t0, Duration::from_secs(1), true);
        clock.advance_to(t0 + Duration::from_secs(1));
        assert_eq!(clock.rotation_degrees(), 360.0);
        assert_eq!(clock.rotation_degrees() % 360.0, 0.0);
    }

    #[test]
    fn test_one_degree_per_tick() {
        let mut clock = SpinnerClock::new();
        let t0 = Instant::now();
        clock.start_at(t0, Duration::from_secs(1), true);
        let interval = tick_interval(Duration::from_secs(1));
        clock.advance_to(t0 + interval);
        assert_eq!(clock.rotation_degrees(), 1.0);
        // Partial ticks do not move the angle.
        clock.advance_to(t0 + interval + interval / 2);
        assert_eq!(clock.rotation_degrees(), 1.0);
        clock.advance_to(t0 + interval * 5);
        assert_eq!(clock.rotation_degrees(), 5.0);
    }

    #[test]
    fn test_counter_clockwise_decrements() {
        let mut clock = SpinnerClock::new();
        let t0 = Instant::now();
        clock.start_at(t0, Duration::from_secs(1), false);
        clock.advance_to(t0 + Duration::from_millis(500));
        assert_eq!(clock.rotation_degrees(), -180.0);
    }

    #[test]
    fn test_cancel_is_idempotent_and_keeps_rotation() {
        let mut clock = SpinnerClock::new();
        let t0 = Instant::now();
        clock.start_at(t0, Duration::from_secs(1), true);
        clock.advance_to(t0 + Duration::from_millis(250));
        assert_eq!(clock.rotation_degrees(), 90.0);

        clock.cancel();
        assert!(!clock.is_running());
        clock.cancel();
        assert_eq!(clock.rotation_degrees(), 90.0);

        // A stopped clock no longer moves.
        clock.advance_to(t0 + Duration::from_secs(10));
        assert_eq!(clock.rotation_degrees(), 90.0);
    }

    #[test]
    fn test_restart_with_same_config_is_a_no_op() {
        let mut clock = SpinnerClock::new();
        let t0 = Instant::now();
        clock.start_at(t0, Duration::from_secs(1), true);
        clock.advance_to(t0 + Duration::from_millis(500));
        // Re-starting with identical parameters must not reset the schedule.
        clock.start_at(t0 + Duration::from_millis(500), Duration::from_secs(1), true);
        clock.advance_to(t0 + Duration::from_secs(1));
        assert_eq!(clock.rotation_degrees(), 360.0);
    }

    #[test]
    fn test_direction_change_keeps_accumulated_angle() {
        let mut clock = SpinnerClock::new();
        let t0 = Instant::now();
        clock.start_at(t0, Duration::from_secs(1), true);
        clock.advance_to(t0 + Duration::from_millis(250));
        assert_eq!(clock.rotation_degrees(), 90.0);

        let t1 = t0 + Duration::from_millis(250);
        clock.start_at(t1, Duration::from_secs(1), false);
        clock.advance_to(t1 + Duration::from_millis(250));
        assert_eq!(clock.rotation_degrees(), 0.0);
    }

    #[test]
    fn test_never_started_clock_stays_at_zero() {
        let mut clock = SpinnerClock::new();
        clock.advance_to(Instant::now() + Duration::from_secs(5));
        assert!(!clock.is_running());
        assert_eq!(clock.rotation_degrees(), 0.0);
    }
}
