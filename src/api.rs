use std::str::FromStr;

use serde::Serialize;
use tokio::sync::oneshot;

/// Messages accepted by the curtain actor. Motor-driving commands carry an
/// ack channel so the caller can wait for the motion to finish.
pub enum Command {
    MoveTo { percent: i64, done: oneshot::Sender<()> },
    MoveSteps { steps: i64, done: oneshot::Sender<()> },
    SetCurrent { preset: Preset, done: oneshot::Sender<()> },
    SetSteps { steps: i64, done: oneshot::Sender<()> },
    GetCurrent { reply: oneshot::Sender<i64> },
}

/// The two calibration positions a client may declare the curtain to be at.
#[derive(Debug, Clone, Copy)]
pub enum Preset {
    Up,
    Down,
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Preset::Up),
            "down" => Ok(Preset::Down),
            unsupported => Err(format!("{} is not a valid position", unsupported)),
        }
    }
}

#[derive(Serialize)]
pub struct StatusReply {
    pub status: u16,
}

impl StatusReply {
    pub fn ok() -> Self {
        StatusReply { status: 200 }
    }
}

#[derive(Serialize)]
pub struct DataReply {
    pub data: String,
    pub status: u16,
}

#[derive(Serialize)]
pub struct ErrorReply {
    pub message: String,
    pub status: u16,
}
