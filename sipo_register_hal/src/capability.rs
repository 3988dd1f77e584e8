//! Optional CLEAR and OUTPUT-ENABLE lines. Either may be left unwired, in
//! which case the driver falls back to doing the same work in software where
//! it can.

use embedded_hal::digital::v2::OutputPin;

use crate::{
    error::{Capability, Error},
    level::{Level, Polarity},
    line::PulsedLine,
};

/// Hardware control of the register's `CLEAR` line, if wired
pub struct ClearControl<P> {
    line: Option<PulsedLine<P>>,
    polarity: Polarity,
}

impl<P: OutputPin> ClearControl<P> {
    /// Takes the clear pin, if any, and parks it at its inactive level
    pub fn new(pin: Option<P>, polarity: Polarity) -> Result<Self, Error> {
        Ok(Self {
            line: pin
                .map(|pin| PulsedLine::new(pin, polarity.inactive()))
                .transpose()?,
            polarity,
        })
    }

    /// True if a clear pin is wired
    pub fn is_controlled(&self) -> bool {
        self.line.is_some()
    }

    /// The configured polarity of the clear line
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// The level the clear line was last driven to
    pub fn level(&self) -> Result<Level, Error> {
        match self.line {
            Some(ref line) => Ok(line.level()),
            None => Err(Error::CapabilityUnavailable(Capability::Clear)),
        }
    }

    /// True if the clear line is currently held at its active level
    pub fn is_asserted(&self) -> Result<bool, Error> {
        self.level().map(|level| self.polarity.is_active(level))
    }

    /// Drives the clear line back to its inactive level
    pub fn release(&mut self) -> Result<(), Error> {
        match self.line {
            Some(ref mut line) => {
                line.set(self.polarity.inactive());
                Ok(())
            }
            None => Err(Error::CapabilityUnavailable(Capability::Clear)),
        }
    }

    /// Pulses the clear line through its active level, emptying the device's
    /// internal chain. The parallel outputs only follow after a latch.
    pub fn clear(&mut self) -> Result<(), Error> {
        match self.line {
            Some(ref mut line) => {
                line.set(self.polarity.inactive());
                line.pulse();
                Ok(())
            }
            None => Err(Error::CapabilityUnavailable(Capability::Clear)),
        }
    }

    /// Releases the clear pin, if any
    pub fn free(self) -> Option<P> {
        self.line.map(PulsedLine::free)
    }
}

/// Hardware control of the register's `OUTPUT-ENABLE` line, if wired.
///
/// Without a pin the outputs are always visible: [EnableControl::enabled]
/// is always true and enabling or disabling does nothing.
pub struct EnableControl<P> {
    line: Option<PulsedLine<P>>,
    polarity: Polarity,
}

impl<P: OutputPin> EnableControl<P> {
    /// Takes the enable pin, if any, and enables the outputs
    pub fn new(pin: Option<P>, polarity: Polarity) -> Result<Self, Error> {
        Ok(Self {
            line: pin
                .map(|pin| PulsedLine::new(pin, polarity.active()))
                .transpose()?,
            polarity,
        })
    }

    /// True if an output enable pin is wired
    pub fn is_controlled(&self) -> bool {
        self.line.is_some()
    }

    /// The configured polarity of the enable line
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// The level the enable line was last driven to
    pub fn level(&self) -> Result<Level, Error> {
        match self.line {
            Some(ref line) => Ok(line.level()),
            None => Err(Error::CapabilityUnavailable(Capability::Enable)),
        }
    }

    /// True if the parallel outputs are currently driven
    pub fn enabled(&self) -> bool {
        match self.line {
            Some(ref line) => self.polarity.is_active(line.level()),
            None => true,
        }
    }

    /// Drives the enable line to its active level, if it isn't already
    pub fn enable(&mut self) {
        if let Some(ref mut line) = self.line {
            line.set(self.polarity.active());
        }
    }

    /// Drives the enable line to its inactive level, if it isn't already
    pub fn disable(&mut self) {
        if let Some(ref mut line) = self.line {
            line.set(self.polarity.inactive());
        }
    }

    /// Releases the enable pin, if any
    pub fn free(self) -> Option<P> {
        self.line.map(PulsedLine::free)
    }
}
