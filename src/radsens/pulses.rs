/// How the device's pulse counter register behaves between reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CounterMode {
    /// The device zeroes its counter whenever it is read, so every reading is a delta.
    #[default]
    ClearOnRead,
    /// The device counter keeps running and wraps at `u16::MAX`.  Deltas are taken between
    /// successive readings.
    FreeRunning,
}

/// Host side running total of detector pulses.  Only ever grows, wrapping at `u32::MAX`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct PulseAccumulator {
    mode: CounterMode,
    total: u32,
    last_raw: u16,
}

impl PulseAccumulator {
    pub(crate) const fn new() -> Self {
        Self {
            mode: CounterMode::ClearOnRead,
            total: 0,
            last_raw: 0,
        }
    }

    pub(crate) const fn mode(&self) -> CounterMode {
        self.mode
    }

    pub(crate) fn set_mode(&mut self, mode: CounterMode) {
        self.mode = mode;
    }

    pub(crate) const fn total(&self) -> u32 {
        self.total
    }

    /// Zeroes the total.  The next free running reading is taken as a baseline against the
    /// last one seen, so pulses that arrived before the reset are not counted again.
    pub(crate) fn reset(&mut self) {
        self.total = 0;
    }

    pub(crate) fn add(&mut self, raw: u16) -> u32 {
        let delta = match self.mode {
            CounterMode::ClearOnRead => raw,
            CounterMode::FreeRunning => raw.wrapping_sub(self.last_raw),
        };
        self.last_raw = raw;
        self.total = self.total.wrapping_add(u32::from(delta));
        self.total
    }
}

#[cfg(all(test, not(all(target_arch = "arm", target_os = "none"))))]
mod pulses_test {
    use super::{CounterMode, PulseAccumulator};

    #[test]
    pub fn clear_on_read_sums_deltas() {
        let mut pulses = PulseAccumulator::new();
        assert_eq!(pulses.add(12), 12);
        assert_eq!(pulses.add(0), 12);
        assert_eq!(pulses.add(300), 312);
    }

    #[test]
    pub fn grouping_does_not_matter() {
        let mut one_by_one = PulseAccumulator::new();
        one_by_one.add(7);
        one_by_one.add(9);
        one_by_one.add(11);

        let mut combined = PulseAccumulator::new();
        combined.add(7 + 9);
        combined.add(11);

        assert_eq!(one_by_one.total(), combined.total());
    }

    #[test]
    pub fn total_wraps() {
        let mut pulses = PulseAccumulator {
            mode: CounterMode::ClearOnRead,
            total: u32::MAX - 1,
            last_raw: 0,
        };
        assert_eq!(pulses.add(3), 1);
    }

    #[test]
    pub fn free_running_takes_differences() {
        let mut pulses = PulseAccumulator::new();
        pulses.set_mode(CounterMode::FreeRunning);
        assert_eq!(pulses.add(100), 100);
        assert_eq!(pulses.add(150), 150);
        assert_eq!(pulses.add(150), 150);
    }

    #[test]
    pub fn free_running_counter_wraps() {
        let mut pulses = PulseAccumulator::new();
        pulses.set_mode(CounterMode::FreeRunning);
        pulses.add(0xFFF0);
        assert_eq!(pulses.add(0x0010), 0xFFF0 + 0x20);
    }

    #[test]
    pub fn reset_keeps_baseline() {
        let mut pulses = PulseAccumulator::new();
        pulses.set_mode(CounterMode::FreeRunning);
        pulses.add(500);
        pulses.reset();
        assert_eq!(pulses.total(), 0);
        assert_eq!(pulses.add(520), 20);
    }
}
