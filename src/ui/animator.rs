//! Fade-animator — driver overlayns opacitet från 1.0 till 0.0

use std::time::{Duration, Instant};

const DEFAULT_FADE_DURATION_MS: u64 = 1000;

/// Tidsdriven interpolation av overlayns opacitet.
///
/// Värdet börjar på 1.0 (helt täckande) och körs linjärt till 0.0 över en
/// fast duration. Animatorn äger värdet ensam; renderingsvägen läser bara
/// ögonblicksbilder via [`value`](Self::value). Tiden skickas in utifrån så
/// att värdens repaint-loop driver uppdateringarna och tester kan fabricera
/// klockor.
pub struct FadeAnimator {
    duration: Duration,
    started_at: Option<Instant>,
    value: f32,
    finished: bool,
}

impl FadeAnimator {
    pub fn new() -> Self {
        Self::with_duration(Duration::from_millis(DEFAULT_FADE_DURATION_MS))
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            duration,
            started_at: None,
            value: 1.0,
            finished: false,
        }
    }

    /// Starta faden. Idempotent: ett andra anrop medan den redan går
    /// (eller efter att den är klar) är en no-op.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() && !self.finished {
            self.started_at = Some(now);
        }
    }

    /// Räkna om värdet från förfluten tid.
    ///
    /// Returnerar `true` exakt en gång: på den tick där faden når 0.0.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.finished {
            return false;
        }
        let Some(started_at) = self.started_at else {
            return false;
        };

        let elapsed = now.saturating_duration_since(started_at);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };

        self.value = 1.0 - progress;

        if progress >= 1.0 {
            self.finished = true;
            return true;
        }

        false
    }

    /// Aktuell opacitet, icke-blockerande läsning utan sidoeffekter
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Default for FadeAnimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_initial_value_is_opaque() {
        let animator = FadeAnimator::new();
        assert_eq!(animator.value(), 1.0);
        assert!(!animator.is_started());
        assert!(!animator.is_finished());
    }

    #[test]
    fn test_tick_before_start_does_nothing() {
        let mut animator = FadeAnimator::new();
        assert!(!animator.tick(Instant::now()));
        assert_eq!(animator.value(), 1.0);
    }

    #[test]
    fn test_linear_progression() {
        let t0 = Instant::now();
        let mut animator = FadeAnimator::with_duration(ms(1000));
        animator.start(t0);

        assert!(!animator.tick(t0 + ms(250)));
        assert!((animator.value() - 0.75).abs() < 1e-3);

        assert!(!animator.tick(t0 + ms(500)));
        assert!((animator.value() - 0.5).abs() < 1e-3);

        assert!(!animator.tick(t0 + ms(999)));
        assert!(animator.value() > 0.0);
        assert!(!animator.is_finished());
    }

    #[test]
    fn test_completion_edge_fires_exactly_once() {
        let t0 = Instant::now();
        let mut animator = FadeAnimator::with_duration(ms(1000));
        animator.start(t0);

        assert!(animator.tick(t0 + ms(1000)));
        assert_eq!(animator.value(), 0.0);
        assert!(animator.is_finished());

        // Fler ticks efter mål ger aldrig en andra kant
        assert!(!animator.tick(t0 + ms(1500)));
        assert!(!animator.tick(t0 + ms(5000)));
        assert_eq!(animator.value(), 0.0);
    }

    #[test]
    fn test_value_monotonically_decreasing() {
        let t0 = Instant::now();
        let mut animator = FadeAnimator::with_duration(ms(1000));
        animator.start(t0);

        let mut previous = animator.value();
        for step in 1..=20 {
            animator.tick(t0 + ms(step * 75));
            assert!(animator.value() <= previous);
            previous = animator.value();
        }
    }

    #[test]
    fn test_second_start_mid_flight_is_noop() {
        let t0 = Instant::now();
        let mut animator = FadeAnimator::with_duration(ms(1000));
        animator.start(t0);
        animator.tick(t0 + ms(400));

        // Omstart halvvägs ska inte flytta tillbaka startpunkten
        animator.start(t0 + ms(400));
        animator.tick(t0 + ms(600));
        assert!((animator.value() - 0.4).abs() < 1e-3);

        assert!(animator.tick(t0 + ms(1000)));
    }

    #[test]
    fn test_start_after_finish_is_noop() {
        let t0 = Instant::now();
        let mut animator = FadeAnimator::with_duration(ms(100));
        animator.start(t0);
        assert!(animator.tick(t0 + ms(100)));

        animator.start(t0 + ms(200));
        assert!(!animator.tick(t0 + ms(300)));
        assert_eq!(animator.value(), 0.0);
    }

    #[test]
    fn test_zero_duration_completes_on_first_tick() {
        let t0 = Instant::now();
        let mut animator = FadeAnimator::with_duration(ms(0));
        animator.start(t0);
        assert!(animator.tick(t0));
        assert_eq!(animator.value(), 0.0);
    }
}
