use std::time::Duration;

pub const MAX_INTERVAL_SECS: u8 = 10;
pub const DEFAULT_INTERVAL_SECS: u8 = 5;

/// What a timer tick should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// First tick after (re)arming: arms the real cadence, changes nothing.
    Prime,
    /// Advance to the next image.
    Advance,
}

/// Auto-play control state.
///
/// The timer runs iff `enabled`. The first tick after enabling or after an
/// interval change is a prime tick: it fires near-immediately and does not
/// advance the image, so the user gets instant feedback without waiting a
/// full interval. Every tick after that advances.
#[derive(Debug, Clone)]
pub struct AutoPlayState {
    enabled: bool,
    interval_secs: u8,
    primed: bool,
}

impl AutoPlayState {
    pub fn new() -> Self {
        Self {
            enabled: false,
            interval_secs: DEFAULT_INTERVAL_SECS,
            primed: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn interval_secs(&self) -> u8 {
        self.interval_secs
    }

    /// Start or stop auto-play. Starting rearms the prime tick.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if enabled {
            self.primed = false;
        }
    }

    /// Change the interval, discarding any elapsed countdown.
    ///
    /// The next tick is a prime tick again, whether or not playback is
    /// currently running.
    pub fn set_interval(&mut self, secs: u8) {
        self.interval_secs = secs.min(MAX_INTERVAL_SECS);
        self.primed = false;
    }

    /// Consume one timer tick.
    pub fn tick(&mut self) -> Tick {
        if self.primed {
            Tick::Advance
        } else {
            self.primed = true;
            Tick::Prime
        }
    }

    /// Timer period for the current interval.
    ///
    /// Zero seconds is a legal interval meaning the shortest representable
    /// delay, not "disabled"; only `enabled` stops the timer.
    pub fn period(&self) -> Duration {
        Duration::from_secs(u64::from(self.interval_secs)).max(Duration::from_millis(1))
    }
}

impl Default for AutoPlayState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_disabled_with_the_default_interval() {
        let state = AutoPlayState::new();
        assert!(!state.is_enabled());
        assert_eq!(state.interval_secs(), DEFAULT_INTERVAL_SECS);
    }

    #[test]
    fn first_tick_primes_and_later_ticks_advance() {
        let mut state = AutoPlayState::new();
        state.set_enabled(true);

        assert_eq!(state.tick(), Tick::Prime);
        assert_eq!(state.tick(), Tick::Advance);
        assert_eq!(state.tick(), Tick::Advance);
    }

    #[test]
    fn interval_change_rearms_the_prime_tick() {
        let mut state = AutoPlayState::new();
        state.set_enabled(true);
        state.tick();
        state.tick();

        state.set_interval(3);
        assert_eq!(state.tick(), Tick::Prime);
        assert_eq!(state.tick(), Tick::Advance);
    }

    #[test]
    fn re_enabling_rearms_the_prime_tick() {
        let mut state = AutoPlayState::new();
        state.set_enabled(true);
        state.tick();
        state.tick();

        state.set_enabled(false);
        state.set_enabled(true);
        assert_eq!(state.tick(), Tick::Prime);
    }

    #[test]
    fn interval_is_clamped_to_the_slider_range() {
        let mut state = AutoPlayState::new();
        state.set_interval(200);
        assert_eq!(state.interval_secs(), MAX_INTERVAL_SECS);
    }

    #[test]
    fn zero_interval_means_shortest_delay_not_disabled() {
        let mut state = AutoPlayState::new();
        state.set_enabled(true);
        state.set_interval(0);

        assert!(state.is_enabled());
        assert_eq!(state.period(), Duration::from_millis(1));
    }

    #[test]
    fn period_follows_the_interval() {
        let mut state = AutoPlayState::new();
        state.set_interval(3);
        assert_eq!(state.period(), Duration::from_secs(3));
    }
}
