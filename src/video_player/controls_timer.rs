// SPDX-License-Identifier: MPL-2.0
//! Auto-hide timer for the player controls.
//!
//! Controls are shown on pointer movement and hidden after a fixed delay
//! while playing. There is at most one pending deadline: re-arming replaces
//! it. Time is passed in explicitly so the host decides the clock.

use std::time::{Duration, Instant};

/// Visibility of the player controls plus the single pending hide deadline.
#[derive(Debug, Clone)]
pub struct ControlsTimer {
    visible: bool,
    hide_at: Option<Instant>,
    delay: Duration,
}

impl ControlsTimer {
    /// Creates a timer with controls visible and nothing scheduled.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            visible: true,
            hide_at: None,
            delay,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The instant at which the controls will hide, if scheduled.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.hide_at
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Shows the controls. While `playing`, (re-)arms the hide deadline.
    ///
    /// Returns true if the controls were hidden before.
    pub fn show(&mut self, now: Instant, playing: bool) -> bool {
        let was_hidden = !self.visible;
        self.visible = true;
        self.hide_at = playing.then(|| now + self.delay);
        was_hidden
    }

    /// Shows the controls and drops any pending deadline (paused, ended).
    ///
    /// Returns true if the controls were hidden before.
    pub fn pin(&mut self) -> bool {
        let was_hidden = !self.visible;
        self.visible = true;
        self.hide_at = None;
        was_hidden
    }

    /// Hides the controls if the deadline has passed.
    ///
    /// Returns true exactly once per armed deadline: the deadline is
    /// consumed when it fires.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(at) if now >= at => {
                self.hide_at = None;
                let was_visible = self.visible;
                self.visible = false;
                was_visible
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(3000);

    #[test]
    fn starts_visible_without_deadline() {
        let timer = ControlsTimer::new(DELAY);
        assert!(timer.is_visible());
        assert!(timer.deadline().is_none());
    }

    #[test]
    fn hides_once_after_delay_while_playing() {
        let t0 = Instant::now();
        let mut timer = ControlsTimer::new(DELAY);
        timer.show(t0, true);

        assert!(!timer.tick(t0 + Duration::from_millis(2999)));
        assert!(timer.is_visible());

        assert!(timer.tick(t0 + DELAY));
        assert!(!timer.is_visible());

        // Deadline consumed: later ticks report nothing
        assert!(!timer.tick(t0 + Duration::from_secs(10)));
        assert!(!timer.tick(t0 + Duration::from_secs(20)));
    }

    #[test]
    fn movement_re_arms_the_single_deadline() {
        let t0 = Instant::now();
        let mut timer = ControlsTimer::new(DELAY);
        timer.show(t0, true);
        timer.show(t0 + Duration::from_millis(2000), true);

        assert_eq!(
            timer.deadline(),
            Some(t0 + Duration::from_millis(5000))
        );
        assert!(!timer.tick(t0 + Duration::from_millis(4000)));
        assert!(timer.is_visible());
        assert!(timer.tick(t0 + Duration::from_millis(5000)));
    }

    #[test]
    fn show_while_paused_does_not_schedule() {
        let t0 = Instant::now();
        let mut timer = ControlsTimer::new(DELAY);
        timer.show(t0, false);
        assert!(timer.deadline().is_none());
        assert!(!timer.tick(t0 + Duration::from_secs(60)));
        assert!(timer.is_visible());
    }

    #[test]
    fn pin_cancels_deadline_and_reveals() {
        let t0 = Instant::now();
        let mut timer = ControlsTimer::new(DELAY);
        timer.show(t0, true);
        timer.tick(t0 + DELAY);
        assert!(!timer.is_visible());

        assert!(timer.pin());
        assert!(timer.is_visible());
        assert!(timer.deadline().is_none());
    }
}
