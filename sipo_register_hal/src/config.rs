//! Construction time options for a [crate::ShiftRegister]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::level::Polarity;

/// Describes how a shift register is wired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShiftRegisterConfig {
    /// Number of parallel outputs across the whole chain
    pub width: usize,

    /// Polarity of the clear line. Ignored if no clear pin is wired.
    pub clear_polarity: Polarity,

    /// Polarity of the output enable line. Ignored if no enable pin is wired.
    pub enable_polarity: Polarity,
}

impl Default for ShiftRegisterConfig {
    /// A single 74HC595: eight outputs, active-low `SRCLR` and `OE`
    fn default() -> Self {
        Self {
            width: 8,
            clear_polarity: Polarity::ActiveLow,
            enable_polarity: Polarity::ActiveLow,
        }
    }
}

impl ShiftRegisterConfig {
    /// A configuration for `width` outputs with the default polarities
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Sets the polarity of the clear line
    pub fn with_clear_polarity(mut self, polarity: Polarity) -> Self {
        self.clear_polarity = polarity;
        self
    }

    /// Sets the polarity of the output enable line
    pub fn with_enable_polarity(mut self, polarity: Polarity) -> Self {
        self.enable_polarity = polarity;
        self
    }
}
