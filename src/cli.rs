use std::str::FromStr;

use clap::Parser;
use git_version::git_version;

const GIT_VERSION: &str = git_version!(fallback = "unknown");

/// HTTP controller for a stepper-driven curtain.
#[derive(Parser)]
#[clap(name = "Shademan", version = GIT_VERSION)]
pub struct Opts {
    #[clap(long, default_value = "0.0.0.0")]
    pub address: NetInterface,

    #[clap(long, default_value = "5000")]
    pub port: u16,

    #[clap(long, default_value = "20")]
    pub dir_pin: u8,

    #[clap(long, default_value = "26")]
    pub step_pin: u8,

    /// Step pulses for 100% of curtain travel
    #[clap(short, long, default_value = "200")]
    pub steps: i64,

    /// Delay between step pulses, in milliseconds
    #[clap(short, long, default_value = "10")]
    pub interval: u64,
}

#[derive(Debug)]
pub enum NetInterface {
    Loopback,
    OOOO,
}

impl FromStr for NetInterface {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "127.0.0.1" => Ok(NetInterface::Loopback),
            "0.0.0.0" => Ok(NetInterface::OOOO),
            unsupported => Err(format!("{} is not a valid interface", unsupported)),
        }
    }
}

impl From<NetInterface> for [u8; 4] {
    fn from(i: NetInterface) -> Self {
        match i {
            NetInterface::Loopback => [127, 0, 0, 1],
            NetInterface::OOOO => [0, 0, 0, 0],
        }
    }
}
