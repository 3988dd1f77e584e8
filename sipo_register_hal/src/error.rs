//! Errors returned by the shift register driver

use thiserror::Error;

/// An optional control line of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub enum Capability {
    /// The `CLEAR` (`SRCLR`) line
    Clear,
    /// The `OUTPUT-ENABLE` (`OE`) line
    Enable,
}

impl Capability {
    /// The name of the line, as used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Capability::Clear => "clear",
            Capability::Enable => "output enable",
        }
    }
}

/// Errors that can occur when driving a shift register. All of these are
/// caused by the caller and are never worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub enum Error {
    /// More bits were given than the register has outputs
    #[error("{len} bits do not fit in {width} outputs")]
    VectorTooLong {
        /// Number of bits requested
        len: usize,
        /// Number of outputs on the register
        width: usize,
    },
    /// An output index past the end of the register
    #[error("output {index} is out of range for {width} outputs")]
    OutputOutOfRange {
        /// The offending index
        index: usize,
        /// Number of outputs on the register
        width: usize,
    },
    /// The operation needs a hardware line that was not wired
    #[error("the {} pin is not being controlled", .0.name())]
    CapabilityUnavailable(Capability),
    /// The register width doesn't fit in the driver's storage
    #[error("width {width} exceeds capacity {capacity}")]
    InvalidWidth {
        /// Requested width
        width: usize,
        /// Storage capacity of the driver
        capacity: usize,
    },
    /// A line could not be driven while setting up the register
    #[error("a pin could not be driven")]
    PinWrite,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::CapabilityUnavailable(Capability::Enable).to_string(),
            "the output enable pin is not being controlled"
        );
        assert_eq!(
            Error::VectorTooLong { len: 2, width: 1 }.to_string(),
            "2 bits do not fit in 1 outputs"
        );
        assert_eq!(Error::PinWrite.to_string(), "a pin could not be driven");
    }
}
