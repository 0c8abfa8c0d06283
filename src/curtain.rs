use std::time::Duration;

use tokio::sync::mpsc;

use crate::api::{Command, Preset};
use crate::driver::StepDriver;
use crate::pins::MotorPins;
use crate::position::Tracker;

pub struct MotorConfig {
    pub full_revolution_steps: i64,
    pub pulse_interval: Duration,
}

/// Handle for talking to the curtain actor.
#[derive(Clone)]
pub struct CurtainRef {
    pub sender: mpsc::Sender<Command>,
}

impl CurtainRef {
    pub fn new<P>(pins: P, config: MotorConfig) -> Self
    where
        P: MotorPins + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(10);
        let actor = Curtain::new(rx, pins, config);
        tokio::spawn(run_curtain(actor));
        CurtainRef { sender: tx }
    }
}

/// Owns the position tracker, the step driver, and the motor configuration.
/// All motor operations funnel through its command bus, so only one pulse
/// sequence can be in flight at a time; concurrent requests queue.
pub struct Curtain<P> {
    cmdbus: mpsc::Receiver<Command>,
    tracker: Tracker,
    driver: StepDriver<P>,
    full_revolution_steps: i64,
}

impl<P: MotorPins> Curtain<P> {
    fn new(rx: mpsc::Receiver<Command>, pins: P, config: MotorConfig) -> Self {
        Curtain {
            cmdbus: rx,
            tracker: Tracker::new(),
            driver: StepDriver::new(pins, config.pulse_interval),
            full_revolution_steps: config.full_revolution_steps,
        }
    }

    async fn handle(&mut self, cmd: Command) {
        match cmd {
            Command::MoveTo { percent, done } => {
                let delta = self.tracker.set_target(percent);
                let steps = self
                    .driver
                    .move_percent(delta, self.full_revolution_steps)
                    .await;
                eprintln!("took {} steps, curtain at {}%", steps, self.tracker.current());
                let _ = done.send(());
            }
            Command::MoveSteps { steps, done } => {
                self.tracker.apply_steps(steps, self.full_revolution_steps);
                self.driver.move_steps(steps).await;
                let _ = done.send(());
            }
            Command::SetCurrent { preset, done } => {
                match preset {
                    Preset::Up => self.tracker.set_up(),
                    Preset::Down => self.tracker.set_down(),
                }
                eprintln!("current is {}", self.tracker.current());
                let _ = done.send(());
            }
            Command::SetSteps { steps, done } => {
                self.full_revolution_steps = steps;
                eprintln!("full revolution steps: {}", steps);
                let _ = done.send(());
            }
            Command::GetCurrent { reply } => {
                let _ = reply.send(self.tracker.current());
            }
        }
    }
}

async fn run_curtain<P: MotorPins>(mut actor: Curtain<P>) {
    while let Some(cmd) = actor.cmdbus.recv().await {
        actor.handle(cmd).await;
    }
    eprintln!("curtain actor shutting down");
}
