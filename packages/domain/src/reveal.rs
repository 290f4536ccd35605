//! Scroll-triggered reveal state and stagger timing.
//!
//! A section owns one [`RevealPhase`] flag, flipped at most once by a
//! viewport-intersection signal. The per-card schedule is explicit: card `i`
//! starts its animation `i × stagger` after the flip, so the ordering
//! guarantee holds regardless of render timing.

use std::time::Duration;

/// Vertical offset applied to hidden cards, in CSS pixels.
pub const HIDDEN_OFFSET_PX: u32 = 20;

/// Two-state visibility flag owned by a section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealPhase {
    /// The section has not entered the viewport yet; cards are transparent
    /// and offset down.
    #[default]
    Hidden,
    /// The section was seen once; cards animate to rest and stay there.
    Revealed,
}

impl RevealPhase {
    /// Transition to `Revealed`. Returns `true` on the transition itself and
    /// `false` for every later call; repeated intersection signals are
    /// no-ops.
    pub fn trigger(&mut self) -> bool {
        match self {
            Self::Hidden => {
                *self = Self::Revealed;
                true
            }
            Self::Revealed => false,
        }
    }

    /// Whether the section has been revealed.
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// Timing constants of the card reveal animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    /// Delay between the start of consecutive card reveals.
    pub stagger: Duration,
    /// Duration of one card's opacity/offset animation.
    pub duration: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            stagger: Duration::from_millis(200),
            duration: Duration::from_millis(500),
        }
    }
}

impl RevealTiming {
    /// Reveal start offset of card `index`: `index × stagger`.
    pub fn delay_for(&self, index: usize) -> Duration {
        self.stagger.saturating_mul(index as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_fires_exactly_once() {
        let mut phase = RevealPhase::default();
        assert!(!phase.is_revealed());

        assert!(phase.trigger());
        assert!(phase.is_revealed());

        // Later intersection signals change nothing.
        assert!(!phase.trigger());
        assert!(!phase.trigger());
        assert!(phase.is_revealed());
    }

    #[test]
    fn delay_is_index_times_stagger() {
        let timing = RevealTiming::default();
        assert_eq!(timing.delay_for(0), Duration::ZERO);
        assert_eq!(timing.delay_for(1), Duration::from_millis(200));
        assert_eq!(timing.delay_for(4), Duration::from_millis(800));
    }

    #[test]
    fn schedule_is_strictly_monotone() {
        let timing = RevealTiming {
            stagger: Duration::from_millis(150),
            duration: Duration::from_millis(500),
        };
        for index in 1..10 {
            assert!(timing.delay_for(index) > timing.delay_for(index - 1));
            assert_eq!(
                timing.delay_for(index) - timing.delay_for(index - 1),
                timing.stagger
            );
        }
    }
}
