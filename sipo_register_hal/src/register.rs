//! The serial-in / parallel-out driver itself

use embedded_hal::digital::v2::OutputPin;
use num_traits::PrimInt;

use crate::{
    capability::{ClearControl, EnableControl},
    config::ShiftRegisterConfig,
    error::Error,
    level::{Level, Polarity},
    line::PulsedLine,
    shadow::ShadowRegister,
};

/// The order in which [ShiftRegister::shift_out] serialises a word
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "logging", derive(defmt::Format))]
pub enum BitOrder {
    /// Most significant bit first
    MsbFirst,
    /// Least significant bit first
    LsbFirst,
}

/// The pins handed back by [ShiftRegister::free]
pub struct Pins<P> {
    /// Serial data input (`SER`)
    pub data: P,
    /// Shift clock (`SRCLK`)
    pub clock: P,
    /// Storage register clock (`RCLK`)
    pub latch: P,
    /// Shift register clear (`SRCLR`), if wired
    pub clear: Option<P>,
    /// Output enable (`OE`), if wired
    pub enable: Option<P>,
}

/// A driver for a serial-in / parallel-out shift register such as the
/// 74HC595, or a daisy chain of them presenting up to `N` outputs.
///
/// Bits are clocked into the first stage of the chain one at a time, pushing
/// everything already written one stage along. Nothing shows on the parallel
/// outputs until the register is latched. The driver keeps a shadow of the
/// chain so that [ShiftRegister::write_vector] can skip bits that are
/// already in place.
pub struct ShiftRegister<const N: usize, P> {
    /// The number of outputs in use, at most `N`
    width: usize,

    /// Serial data line
    data: PulsedLine<P>,

    /// Rising edges on this line shift `data` into the chain
    clock: PulsedLine<P>,

    /// Rising edges on this line copy the chain onto the outputs
    latch: PulsedLine<P>,

    clear: ClearControl<P>,
    enable: EnableControl<P>,

    /// Bits shifted in since construction, newest first
    written: ShadowRegister<N>,

    /// The bits copied to the outputs at the last latch, only the first
    /// `width` are meaningful
    output: [bool; N],

    /// Clock edges since the last latch
    unlatched: usize,
}

impl<const N: usize, P: OutputPin> ShiftRegister<N, P> {
    /// Creates a driver for a register with only the three required lines
    pub fn new(config: ShiftRegisterConfig, data: P, clock: P, latch: P) -> Result<Self, Error> {
        Self::new_with_controls(config, data, clock, latch, None, None)
    }

    /// Creates a driver with optional clear and output enable lines. All the
    /// lines are driven to their idle levels, and the outputs are enabled.
    /// Fails with [Error::PinWrite] if any line can't be driven.
    ///
    /// The device is not cleared, so the shadow of the chain starts out
    /// unknown. Call [ShiftRegister::clear] to start from a known state.
    pub fn new_with_controls(
        config: ShiftRegisterConfig,
        data: P,
        clock: P,
        latch: P,
        clear: Option<P>,
        enable: Option<P>,
    ) -> Result<Self, Error> {
        if config.width > N {
            return Err(Error::InvalidWidth {
                width: config.width,
                capacity: N,
            });
        }

        #[cfg(feature = "logging")]
        defmt::debug!("ShiftRegister created: {}", config);

        Ok(Self {
            width: config.width,
            data: PulsedLine::new(data, Level::Low)?,
            clock: PulsedLine::new(clock, Level::Low)?,
            latch: PulsedLine::new(latch, Level::Low)?,
            clear: ClearControl::new(clear, config.clear_polarity)?,
            enable: EnableControl::new(enable, config.enable_polarity)?,
            written: ShadowRegister::new(config.width),
            output: [false; N],
            unlatched: 0,
        })
    }

    /// Number of parallel outputs driven
    pub fn width(&self) -> usize {
        self.width
    }

    /// The bits shown on the outputs since the last latch, output 0 first
    pub fn output(&self) -> &[bool] {
        &self.output[..self.width]
    }

    /// The bits in the chain, output 0 first. Only bits shifted in since
    /// construction are known, so this may be shorter than the width.
    pub fn written(&self) -> heapless::Vec<bool, N> {
        self.written.to_vec()
    }

    /// True if everything written is showing on the outputs
    pub fn latched(&self) -> bool {
        self.unlatched == 0
    }

    /// Number of bits written since the last latch
    pub fn unlatched_count(&self) -> usize {
        self.unlatched
    }

    /// Current level of the data line
    pub fn data_level(&self) -> Level {
        self.data.level()
    }

    /// Current level of the clock line
    pub fn clock_level(&self) -> Level {
        self.clock.level()
    }

    /// Current level of the latch line
    pub fn latch_level(&self) -> Level {
        self.latch.level()
    }

    /// True if a hardware clear line is wired
    pub fn has_clear_control(&self) -> bool {
        self.clear.is_controlled()
    }

    /// True if a hardware output enable line is wired
    pub fn has_enable_control(&self) -> bool {
        self.enable.is_controlled()
    }

    /// The configured polarity of the clear line
    pub fn clear_polarity(&self) -> Polarity {
        self.clear.polarity()
    }

    /// The configured polarity of the output enable line
    pub fn enable_polarity(&self) -> Polarity {
        self.enable.polarity()
    }

    /// Current level of the clear line
    pub fn clear_level(&self) -> Result<Level, Error> {
        self.clear.level()
    }

    /// Current level of the output enable line
    pub fn enable_level(&self) -> Result<Level, Error> {
        self.enable.level()
    }

    /// Shifts a single bit into the first stage of the chain. Nothing is
    /// latched.
    pub fn write_bit(&mut self, value: bool) {
        self.data.set(Level::from_bit(value));
        self.clock.set_low();
        self.clock.pulse();

        self.written.push(value);
        self.unlatched = self.unlatched.saturating_add(1);
    }

    /// Shifts a single bit in and latches
    pub fn write_bit_and_latch(&mut self, value: bool) {
        self.write_bit(value);
        self.latch();
    }

    /// Copies the chain onto the parallel outputs
    pub fn latch(&mut self) {
        self.latch.pulse();

        self.written.snapshot(&mut self.output[..self.width]);
        self.unlatched = 0;
    }

    /// Shifts an off bit in and latches, pushing every output one along
    pub fn shift_zero(&mut self) {
        self.write_bit_and_latch(false);
    }

    /// Writes `bits` so that `bits[0]` ends up on output 0, latching
    /// afterwards if `latch_after` is set.
    ///
    /// With `reuse_previous`, bits already sitting in the right place in the
    /// chain are not clocked in again. The end result is the same either way,
    /// only the number of line transitions changes.
    pub fn write_vector(
        &mut self,
        bits: &[bool],
        latch_after: bool,
        reuse_previous: bool,
    ) -> Result<(), Error> {
        if bits.len() > self.width {
            return Err(Error::VectorTooLong {
                len: bits.len(),
                width: self.width,
            });
        }

        let reused = if reuse_previous {
            self.reusable_len(bits)
        } else {
            0
        };

        #[cfg(feature = "logging")]
        defmt::trace!(
            "ShiftRegister writing {} bits, reusing {}",
            bits.len() - reused,
            reused
        );

        self.write_serial(&bits[..bits.len() - reused], latch_after);
        Ok(())
    }

    /// Writes `bits`, reusing what is already in the chain, then latches
    pub fn set_outputs(&mut self, bits: &[bool]) -> Result<(), Error> {
        self.write_vector(bits, true, true)
    }

    /// Turns on the listed outputs and every other output off
    pub fn write_sparse(
        &mut self,
        active_outputs: &[usize],
        latch_after: bool,
        reuse_previous: bool,
    ) -> Result<(), Error> {
        let mut bits = [false; N];

        for &index in active_outputs {
            if index >= self.width {
                return Err(Error::OutputOutOfRange {
                    index,
                    width: self.width,
                });
            }
            bits[index] = true;
        }

        self.write_vector(&bits[..self.width], latch_after, reuse_previous)
    }

    /// Clocks `value` into every stage of the chain, latching afterwards if
    /// `latch_after` is set
    pub fn fill(&mut self, value: bool, latch_after: bool) {
        for _ in 0..self.width {
            self.write_bit(value);
        }

        if latch_after {
            self.latch();
        }
    }

    /// Turns every output off. Uses the clear line if one is wired,
    /// otherwise clocks zeros through the whole chain.
    pub fn clear(&mut self) {
        match self.clear.clear() {
            Ok(()) => {
                #[cfg(feature = "logging")]
                defmt::trace!("ShiftRegister cleared by hardware");

                self.written.fill(false);
                self.latch();
            }
            Err(_) => {
                #[cfg(feature = "logging")]
                defmt::trace!("ShiftRegister cleared by shifting {} zeros", self.width);

                let zeros = [false; N];
                self.write_serial(&zeros[..self.width], true);
            }
        }
    }

    /// Serialises `word` into the chain one bit at a time without latching.
    /// The last bit sent ends up on output 0.
    pub fn shift_out<T: PrimInt>(&mut self, word: T, order: BitOrder) {
        let bits = T::zero().count_zeros() as usize;

        for i in 0..bits {
            let shift = match order {
                BitOrder::MsbFirst => bits - 1 - i,
                BitOrder::LsbFirst => i,
            };
            let bit = (word >> shift) & T::one();
            self.write_bit(bit != T::zero());
        }
    }

    /// Turns the parallel outputs on. Does nothing without an enable line.
    pub fn enable(&mut self) {
        self.enable.enable();
    }

    /// Turns the parallel outputs off (high impedance). Does nothing without
    /// an enable line.
    pub fn disable(&mut self) {
        self.enable.disable();
    }

    /// True if the parallel outputs are driven. Always true without an
    /// enable line.
    pub fn enabled(&self) -> bool {
        self.enable.enabled()
    }

    /// Consumes the driver, handing back its pins
    pub fn free(self) -> Pins<P> {
        Pins {
            data: self.data.free(),
            clock: self.clock.free(),
            latch: self.latch.free(),
            clear: self.clear.free(),
            enable: self.enable.free(),
        }
    }

    /// Clocks `bits` in last first, so that `bits[0]` ends up in the first
    /// stage of the chain
    fn write_serial(&mut self, bits: &[bool], latch_after: bool) {
        for &bit in bits.iter().rev() {
            self.write_bit(bit);
        }

        if latch_after {
            self.latch();
        }
    }

    /// The length of the longest suffix of `bits` that is already in the
    /// chain and doesn't need clocking in again.
    ///
    /// Writing only `bits[..i]` leaves the old chain shifted by `i` stages
    /// rather than `bits.len()`, so a suffix is only reused if the stages
    /// behind `bits` come out the same either way. Slots never written don't
    /// match anything.
    fn reusable_len(&self, bits: &[bool]) -> usize {
        let len = bits.len();

        for i in 0..len {
            let suffix_matches = self.written.starts_with(&bits[i..]);
            let tail_matches = (len..self.width).all(|stage| {
                let reused = self.written.get(stage - i);
                reused.is_some() && reused == self.written.get(stage - len)
            });

            if suffix_matches && tail_matches {
                return len - i;
            }
        }

        0
    }
}
