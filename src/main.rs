use std::time::Duration;

use clap::Parser;

use shademan::cli::Opts;
use shademan::curtain::{CurtainRef, MotorConfig};
use shademan::pins::GpioPins;
use shademan::routes::routes;
use shademan::{Error, Result};

/// # Shademan Webservice
/// HTTP service that drives a stepper motor to open and close a curtain.
///
/// ## Surface
/// 1. Move the curtain to a target percentage of openness
/// 2. Recalibrate the tracked position to fully up or fully down
/// 3. Reconfigure how many step pulses make up 100% of travel
/// 4. Raw step moves for debugging the motor wiring
///
/// All motor commands are serviced by a single actor, so only one pulse
/// sequence runs at a time and concurrent requests queue behind it.
///
#[tokio::main]
async fn main() -> Result<()> {
    let opts: Opts = Opts::parse();

    if opts.steps <= 0 {
        return Err(Error::ConfigurationError(format!(
            "full revolution steps must be positive, got {}",
            opts.steps
        )));
    }

    let pins = GpioPins::new(opts.dir_pin, opts.step_pin)?;
    let curtain = CurtainRef::new(
        pins,
        MotorConfig {
            full_revolution_steps: opts.steps,
            pulse_interval: Duration::from_millis(opts.interval),
        },
    );

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let mut shutdown_tx = Some(shutdown_tx);
    ctrlc::set_handler(move || {
        if let Some(tx) = shutdown_tx.take() {
            let _ = tx.send(());
        }
    })?;

    let address: [u8; 4] = opts.address.into();
    let (addr, server) =
        warp::serve(routes(curtain)).bind_with_graceful_shutdown((address, opts.port), async {
            shutdown_rx.await.ok();
        });

    eprintln!("listening on {}", addr);
    server.await;
    eprintln!("shutting down");

    Ok(())
}
