//! RustFit - Workout Statistics Engine
//!
//! Sample driver: decodes a fixed batch of sensor packages and prints one
//! summary line per record.

use anyhow::Result;
use rustfit::SensorPackage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting RustFit v{}", env!("CARGO_PKG_VERSION"));

    let packages = [
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ];

    for package in &packages {
        let training = package.decode()?;
        tracing::debug!(workout_type = %training.workout_type(), "decoded sensor package");
        println!("{}", training.summary());
    }

    Ok(())
}
