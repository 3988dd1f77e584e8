//! Mocked pins for testing the ShiftRegister library. Every pin shares a
//! [Wiring] log so tests can count edges across lines.

use std::{cell::RefCell, rc::Rc, vec::Vec};

use embedded_hal::digital::v2::{OutputPin, StatefulOutputPin};

/// A single recorded write: the pin name and whether it was driven high
pub type Write = (&'static str, bool);

/// Shared log of every write made to any pin created from it
#[derive(Clone, Default)]
pub struct Wiring {
    log: Rc<RefCell<Vec<Write>>>,
}

impl Wiring {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pin that starts low
    pub fn pin(&self, name: &'static str) -> MockPin {
        MockPin {
            name,
            state: false,
            log: self.log.clone(),
        }
    }

    pub fn writes(&self) -> Vec<Write> {
        self.log.borrow().clone()
    }

    pub fn reset(&self) {
        self.log.borrow_mut().clear();
    }

    /// Number of low -> high transitions on the named pin since the last
    /// reset. The pin is assumed low before its first logged write.
    pub fn rising_edges(&self, name: &str) -> usize {
        let log = self.log.borrow();
        let mut previous = false;
        let mut edges = 0;

        for (_, high) in log.iter().filter(|(pin, _)| *pin == name) {
            if *high && !previous {
                edges += 1;
            }
            previous = *high;
        }

        edges
    }

    /// Number of writes made to the named pin since the last reset
    pub fn writes_to(&self, name: &str) -> usize {
        self.log.borrow().iter().filter(|(pin, _)| *pin == name).count()
    }
}

pub struct MockPin {
    name: &'static str,
    state: bool,
    log: Rc<RefCell<Vec<Write>>>,
}

type MockError = &'static str;

impl OutputPin for MockPin {
    type Error = MockError;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state = false;
        self.log.borrow_mut().push((self.name, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.state = true;
        self.log.borrow_mut().push((self.name, true));
        Ok(())
    }
}

impl StatefulOutputPin for MockPin {
    fn is_set_high(&self) -> Result<bool, Self::Error> {
        Ok(self.state)
    }

    fn is_set_low(&self) -> Result<bool, Self::Error> {
        Ok(!self.state)
    }
}

/// A pin that accepts a fixed number of writes and then fails every write.
/// Reading it back always fails.
pub struct FlakyPin {
    writes_left: usize,
}

impl FlakyPin {
    pub fn new(writes_left: usize) -> Self {
        Self { writes_left }
    }

    pub fn writes_left(&self) -> usize {
        self.writes_left
    }

    fn write(&mut self) -> Result<(), MockError> {
        if self.writes_left == 0 {
            return Err("broken");
        }

        self.writes_left -= 1;
        Ok(())
    }
}

impl OutputPin for FlakyPin {
    type Error = MockError;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write()
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write()
    }
}

impl StatefulOutputPin for FlakyPin {
    fn is_set_high(&self) -> Result<bool, Self::Error> {
        Err("unreadable")
    }

    fn is_set_low(&self) -> Result<bool, Self::Error> {
        Err("unreadable")
    }
}
