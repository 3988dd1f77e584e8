#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(warnings)]
#![cfg_attr(not(test), no_std)]

//! SIPO REGISTER HAL
//!
//! This is a higher level abstraction of a serial to parallel
//! shift register, such as the 74HC595. It pushes an output vector
//! in over DATA / CLOCK / LATCH lines and presents it on the parallel
//! outputs, optionally using the CLEAR and OUTPUT-ENABLE lines when
//! they are wired. Registers may be daisy chained up to `N` outputs.
//!
//! The driver keeps a shadow of what has been clocked into the chain,
//! so rewriting a vector only clocks in the bits that are not already
//! in place.
//!
//! Built using [`embedded-hal`] traits
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal/0.2

pub mod capability;
pub mod config;
pub mod error;
pub mod level;
pub mod line;
pub mod register;
pub mod shadow;

#[cfg(test)]
mod mock;

pub use capability::{ClearControl, EnableControl};
pub use config::ShiftRegisterConfig;
pub use error::{Capability, Error};
pub use level::{Level, Polarity};
pub use line::PulsedLine;
pub use register::{BitOrder, Pins, ShiftRegister};
pub use shadow::ShadowRegister;
