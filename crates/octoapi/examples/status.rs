//! Print a summary of the printer and the current job.
//!
//! Reads the API key and URL from ~/.octoapi.conf.
//!
//! Run with: cargo run --example status
//! Set RUST_LOG=octoapi=debug to see every request.

use octoapi::OctoClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> octoapi::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let client = OctoClient::new()?;

    let version = client.misc().version().await?;
    println!("Connected to {}", version["text"]);

    let connection = client.connection().info().await?;
    println!("Connection: {}", connection["current"]["state"]);

    let state = client.printer().state().await?;
    if let Some(temps) = state["temperature"].as_object() {
        for (heater, reading) in temps {
            println!(
                "  {:<6} {:>6} / {} °C",
                heater, reading["actual"], reading["target"]
            );
        }
    }

    if client.printer().is_printing().await? {
        let job = client.job().info().await?;
        println!("\nPrinting {}", job["job"]["file"]["name"]);

        let completion = client.job().completion().await?.unwrap_or_default();
        println!("  {:.1}% complete", completion);

        match client.job().print_time_left().await? {
            Some(left) => println!("  {}m {}s remaining", left / 60, left % 60),
            None => println!("  remaining time unknown"),
        }
    } else {
        println!("\nIdle");
    }

    Ok(())
}
