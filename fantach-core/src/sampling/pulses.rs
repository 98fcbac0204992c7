//! Tachometer pulse accumulation

use crate::config::EDGES_PER_REVOLUTION;

/// Raw edge counter for the running epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseAccumulator {
    edges: u16,
}

impl PulseAccumulator {
    /// Counter at zero
    pub const fn new() -> Self {
        Self { edges: 0 }
    }

    /// Count one edge. Saturates rather than wrapping.
    pub fn record_edge(&mut self) {
        self.edges = self.edges.saturating_add(1);
    }

    /// Edges counted so far
    pub const fn edges(&self) -> u16 {
        self.edges
    }

    /// Read and reset in one step, returning edges counted
    pub fn take(&mut self) -> u16 {
        core::mem::take(&mut self.edges)
    }
}

/// Whole fan revolutions for an edge count
pub const fn revolutions(edges: u16) -> u16 {
    edges / EDGES_PER_REVOLUTION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_resets() {
        let mut pulses = PulseAccumulator::new();
        for _ in 0..20 {
            pulses.record_edge();
        }
        assert_eq!(pulses.take(), 20);
        assert_eq!(pulses.edges(), 0);
    }

    #[test]
    fn test_saturates() {
        let mut pulses = PulseAccumulator { edges: u16::MAX };
        pulses.record_edge();
        assert_eq!(pulses.edges(), u16::MAX);
    }

    #[test]
    fn test_two_edges_per_revolution() {
        assert_eq!(revolutions(20), 10);
        assert_eq!(revolutions(21), 10);
        assert_eq!(revolutions(1), 0);
    }
}
