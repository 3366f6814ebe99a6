//! Preheat, home and print a file.
//!
//! Run with: cargo run --example job_control -- benchy.gcode

use octoapi::{Axis, OctoClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> octoapi::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "benchy.gcode".to_string());

    let client = OctoClient::new()?;

    // Preheat
    client.bed().target(60.0).await?;
    client.tool().target_tool0(210.0).await?;
    println!("Preheating bed to 60 °C and nozzle to 210 °C");

    client.printhead().home(&Axis::ALL).await?;
    println!("Homed all axes");

    client.files().print(&file).await?;
    println!("Started printing {}", file);

    Ok(())
}
