use rppal::gpio::{Gpio, Level, OutputPin};

use crate::Result;

/// The two output lines driving the stepper. Kept behind a trait so the
/// pulse generator can be exercised against recorded writes instead of
/// real hardware.
pub trait MotorPins {
    fn write_dir(&mut self, level: Level);

    fn write_step(&mut self, level: Level);
}

pub struct GpioPins {
    dir: OutputPin,
    step: OutputPin,
}

impl GpioPins {
    pub fn new(dir_pin: u8, step_pin: u8) -> Result<Self> {
        let dir = Gpio::new()?.get(dir_pin)?.into_output_low();
        let step = Gpio::new()?.get(step_pin)?.into_output_low();

        Ok(Self { dir, step })
    }
}

impl MotorPins for GpioPins {
    fn write_dir(&mut self, level: Level) {
        self.dir.write(level)
    }

    fn write_step(&mut self, level: Level) {
        self.step.write(level)
    }
}

#[cfg(test)]
pub mod mock {
    use std::sync::{Arc, Mutex};

    use rppal::gpio::Level;

    use super::MotorPins;

    #[derive(Default)]
    pub struct Log {
        pub dir: Vec<Level>,
        pub step: Vec<Level>,
    }

    /// Records every pin write; clones share the same log.
    #[derive(Clone, Default)]
    pub struct MockPins {
        log: Arc<Mutex<Log>>,
    }

    impl MockPins {
        pub fn pulses(&self) -> usize {
            let log = self.log.lock().unwrap();
            log.step.iter().filter(|l| **l == Level::High).count()
        }

        pub fn last_dir(&self) -> Option<Level> {
            self.log.lock().unwrap().dir.last().copied()
        }

        pub fn dir_writes(&self) -> usize {
            self.log.lock().unwrap().dir.len()
        }

        pub fn step_ends_low(&self) -> bool {
            self.log.lock().unwrap().step.last() == Some(&Level::Low)
        }

        pub fn clear(&self) {
            let mut log = self.log.lock().unwrap();
            log.dir.clear();
            log.step.clear();
        }
    }

    impl MotorPins for MockPins {
        fn write_dir(&mut self, level: Level) {
            self.log.lock().unwrap().dir.push(level);
        }

        fn write_step(&mut self, level: Level) {
            self.log.lock().unwrap().step.push(level);
        }
    }
}
