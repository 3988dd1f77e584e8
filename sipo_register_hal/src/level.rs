//! Logic levels and control line polarity

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The logical level of a single output line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub enum Level {
    /// Logic high
    High,
    /// Logic low
    Low,
}

impl Level {
    /// Returns the opposite level
    pub const fn inverted(self) -> Self {
        match self {
            Level::High => Level::Low,
            Level::Low => Level::High,
        }
    }

    /// The level the DATA line needs to shift in an output bit (`true` is on)
    pub const fn from_bit(bit: bool) -> Self {
        if bit {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Which logic level "engages" a control line such as CLEAR or OUTPUT-ENABLE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Polarity {
    /// The line is engaged when driven high
    ActiveHigh,
    /// The line is engaged when driven low. This is how the 74HC595 wires
    /// both `SRCLR` and `OE`.
    #[default]
    ActiveLow,
}

impl Polarity {
    /// The level that engages the line
    pub const fn active(self) -> Level {
        match self {
            Polarity::ActiveHigh => Level::High,
            Polarity::ActiveLow => Level::Low,
        }
    }

    /// The resting level of the line
    pub const fn inactive(self) -> Level {
        self.active().inverted()
    }

    /// True if `level` engages a line with this polarity
    pub fn is_active(self, level: Level) -> bool {
        level == self.active()
    }
}
