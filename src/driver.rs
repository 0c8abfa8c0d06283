use std::fmt::{Display, Formatter};
use std::time::Duration;

use rppal::gpio::Level;
use rppal::gpio::Level::*;

use Direction::*;

use crate::pins::MotorPins;

/// Open-loop step pulse generator. One pulse is a HIGH-then-LOW transition
/// on the step line; rotation speed is set by the delay between pulses.
pub struct StepDriver<P> {
    pins: P,
    interval: Duration,
}

impl<P: MotorPins> StepDriver<P> {
    pub fn new(pins: P, interval: Duration) -> Self {
        Self { pins, interval }
    }

    /// Move the curtain by a signed percentage of full travel. Returns the
    /// number of pulses emitted.
    pub async fn move_percent(&mut self, delta_percent: i64, full_revolution_steps: i64) -> u64 {
        match delta_percent.signum() {
            -1 => {
                println!("UP");
                self.pins.write_dir(Up.into());
            }
            1 => {
                println!("DOWN");
                self.pins.write_dir(Down.into());
            }
            _ => println!("NO CHANGE"),
        }

        let steps = (full_revolution_steps.saturating_mul(delta_percent.abs()) / 100) as u64;
        self.pulse(steps).await;
        steps
    }

    /// Move by a raw signed step count, bypassing the percentage scale.
    pub async fn move_steps(&mut self, steps: i64) -> u64 {
        let dir = if steps < 0 { Up } else { Down };
        self.pins.write_dir(dir.into());
        println!("moving {} steps ({})", steps.unsigned_abs(), dir);

        self.pulse(steps.unsigned_abs()).await;
        steps.unsigned_abs()
    }

    async fn pulse(&mut self, count: u64) {
        for _ in 0..count {
            self.pins.write_step(High);
            self.pins.write_step(Low);

            tokio::time::sleep(self.interval).await;
        }

        // leave the step line in a known state
        self.pins.write_step(Low);
    }
}

#[derive(Copy, Clone, Debug)]
enum Direction {
    Up,
    Down,
}

impl From<Direction> for Level {
    fn from(d: Direction) -> Self {
        match d {
            Up => High,
            Down => Low,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Up => f.write_str("Up"),
            Down => f.write_str("Down"),
        }
    }
}
