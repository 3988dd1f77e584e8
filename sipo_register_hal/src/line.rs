//! A single output line that remembers what it was last driven to

use embedded_hal::digital::v2::{OutputPin, StatefulOutputPin};

use crate::{error::Error, level::Level};

/// Wraps one output pin and caches its last written [Level], so repeated
/// writes of the same level never reach the hardware.
pub struct PulsedLine<P> {
    pin: P,
    /// Always equal to the last level successfully written to `pin`
    level: Level,
}

impl<P: OutputPin> PulsedLine<P> {
    /// Takes ownership of an output pin and drives it to `level`. The write
    /// happens even if the pin is already at that level, as the state of the
    /// hardware is not known yet. Fails if the pin can't be driven, since
    /// there would be no known level to cache.
    pub fn new(mut pin: P, level: Level) -> Result<Self, Error> {
        if drive(&mut pin, level) {
            Ok(Self { pin, level })
        } else {
            #[cfg(feature = "logging")]
            defmt::warn!("PulsedLine failed to drive new pin {}", level);

            Err(Error::PinWrite)
        }
    }

    /// The level this line was last driven to
    pub fn level(&self) -> Level {
        self.level
    }

    /// True if the line was last driven high
    pub fn is_high(&self) -> bool {
        self.level == Level::High
    }

    /// True if the line was last driven low
    pub fn is_low(&self) -> bool {
        self.level == Level::Low
    }

    /// Drives the line to `level` if it isn't there already
    pub fn set(&mut self, level: Level) {
        if self.level == level {
            return;
        }

        if drive(&mut self.pin, level) {
            self.level = level;
        } else {
            #[cfg(feature = "logging")]
            defmt::warn!("PulsedLine failed to drive pin {}", level);
        }
    }

    /// Drives the line high if it isn't already
    pub fn set_high(&mut self) {
        self.set(Level::High);
    }

    /// Drives the line low if it isn't already
    pub fn set_low(&mut self) {
        self.set(Level::Low);
    }

    /// Forces the line through the opposite level and back, producing exactly
    /// one rising and one falling edge whatever the resting level.
    pub fn pulse(&mut self) {
        let resting = self.level;
        self.set(resting.inverted());
        self.set(resting);
    }

    /// Releases the underlying pin
    pub fn free(self) -> P {
        self.pin
    }
}

impl<P: OutputPin + StatefulOutputPin> PulsedLine<P> {
    /// Takes ownership of an output pin that is already configured, reading
    /// its current level back instead of writing one. If the pin can't be
    /// read it is driven low instead.
    pub fn from_stateful(pin: P) -> Result<Self, Error> {
        match pin.is_set_high() {
            Ok(true) => Ok(Self {
                pin,
                level: Level::High,
            }),
            Ok(false) => Ok(Self {
                pin,
                level: Level::Low,
            }),
            Err(_) => {
                #[cfg(feature = "logging")]
                defmt::warn!("PulsedLine could not read pin back, driving it low");

                Self::new(pin, Level::Low)
            }
        }
    }
}

/// Writes `level` to `pin`, returning true if the write succeeded
fn drive<P: OutputPin>(pin: &mut P, level: Level) -> bool {
    let result = match level {
        Level::High => pin.set_high(),
        Level::Low => pin.set_low(),
    };

    result.is_ok()
}
