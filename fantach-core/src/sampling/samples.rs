//! Current/previous ADC sample pair

/// One-deep sample history written by the ADC-complete handler
///
/// `previous` is always whatever `current` held before the latest update.
/// The first conversion after power-on seeds both, so the power-on zero is
/// never reported as a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampleState {
    current: u8,
    previous: u8,
    primed: bool,
    fresh: bool,
}

impl SampleState {
    /// Empty history
    pub const fn new() -> Self {
        Self {
            current: 0,
            previous: 0,
            primed: false,
            fresh: false,
        }
    }

    /// Record a completed conversion
    pub fn record(&mut self, sample: u8) {
        if self.primed {
            self.previous = self.current;
        } else {
            self.previous = sample;
            self.primed = true;
        }
        self.current = sample;
        self.fresh = true;
    }

    /// Latest sample
    pub const fn current(&self) -> u8 {
        self.current
    }

    /// Sample before the latest
    pub const fn previous(&self) -> u8 {
        self.previous
    }

    /// Whether any conversion has completed yet
    pub const fn is_primed(&self) -> bool {
        self.primed
    }

    /// Consume the latest update
    ///
    /// Returns the new sample if it differs from the one before it. Each
    /// update is reported at most once.
    pub fn take_change(&mut self) -> Option<u8> {
        if !core::mem::take(&mut self.fresh) {
            return None;
        }
        (self.current != self.previous).then_some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_primes_both() {
        let mut samples = SampleState::new();
        assert!(!samples.is_primed());

        samples.record(10);
        assert!(samples.is_primed());
        assert_eq!(samples.current(), 10);
        assert_eq!(samples.previous(), 10);
        assert_eq!(samples.take_change(), None);
    }

    #[test]
    fn test_previous_tracks_last_current() {
        let mut samples = SampleState::new();
        for sample in [3, 9, 27] {
            samples.record(sample);
        }
        assert_eq!(samples.current(), 27);
        assert_eq!(samples.previous(), 9);
    }

    #[test]
    fn test_change_reported_once() {
        let mut samples = SampleState::new();
        samples.record(10);
        samples.record(42);

        assert_eq!(samples.take_change(), Some(42));
        assert_eq!(samples.take_change(), None);
    }

    #[test]
    fn test_repeat_is_not_a_change() {
        let mut samples = SampleState::new();
        samples.record(42);
        samples.record(42);
        assert_eq!(samples.take_change(), None);
    }
}
