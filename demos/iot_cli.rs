//! CLI application for controlling Yandex IoT lights.
//!
//! Run with: cargo run --example iot_cli -- --help

use clap::{Parser, Subcommand};
use std::time::Duration;
use yandex_iot_lights::{ClientConfig, CommandOutcome, Hub, Light, Locale, PowerMode};

#[derive(Parser)]
#[command(name = "iot-cli")]
#[command(about = "Control Yandex IoT lights from the command line", long_about = None)]
struct Cli {
    /// OAuth token of the Yandex account
    #[arg(short, long, global = true, env = "YANDEX_IOT_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// API endpoint (default: https://api.iot.yandex.net)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether the token is accepted
    Validate,

    /// List all devices of the account
    Devices,

    /// List the light bulbs of the account
    List,

    /// Get the current status of a light
    Status {
        /// Device id as shown by `list`
        id: String,
    },

    /// Turn a light on
    On { id: String },

    /// Turn a light off
    Off { id: String },

    /// Toggle a light on/off
    Toggle { id: String },

    /// Get detailed diagnostics for a light
    Diagnostics { id: String },
}

async fn find_light(hub: &Hub, id: &str) -> Result<Light, Box<dyn std::error::Error>> {
    hub.lights()
        .await?
        .into_iter()
        .find(|light| light.id() == id)
        .ok_or_else(|| format!("no light with id {}", id).into())
}

fn report(outcome: CommandOutcome) {
    match outcome {
        CommandOutcome::Applied(PowerMode::On) => println!("Light turned ON"),
        CommandOutcome::Applied(PowerMode::Off) => println!("Light turned OFF"),
        CommandOutcome::Rejected { status } => eprintln!("Command rejected: HTTP {}", status),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let token = cli
        .token
        .ok_or("A token is required. Use --token <TOKEN> or set YANDEX_IOT_TOKEN")?;

    let mut config = ClientConfig::new();
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(timeout) = cli.timeout {
        config = config.with_timeout(Duration::from_secs(timeout));
    }
    let hub = Hub::with_config(&token, &config)?;

    match cli.command {
        Commands::Validate => {
            if hub.is_invalid_token().await? {
                println!("Token is INVALID");
            } else {
                println!("Token is valid");
            }
        }

        Commands::Devices => {
            let devices = hub.devices().await?;
            println!("Found {} device(s):", devices.len());
            for device in devices {
                println!(
                    "  {:38}  {:16}  {}",
                    device.id,
                    device.device_type.display_name(Locale::En),
                    device.name
                );
            }
        }

        Commands::List => {
            let lights = hub.lights().await?;
            if lights.is_empty() {
                println!("No lights found.");
            } else {
                println!("Found {} light(s):", lights.len());
                for light in lights {
                    println!(
                        "  {:38}  {:3}  {}",
                        light.id(),
                        if light.is_on() { "ON" } else { "OFF" },
                        light.name()
                    );
                }
            }
        }

        Commands::Status { id } => {
            let mut light = find_light(&hub, &id).await?;
            light.refresh().await?;
            println!("\nLight Status:");
            println!("  Name: {}", light.name());
            println!("  Power: {}", if light.is_on() { "ON" } else { "OFF" });
            if let Some(brightness) = light.brightness() {
                println!(
                    "  Brightness: {}/255 ({}%)",
                    brightness.value(),
                    brightness.percent()
                );
            }
        }

        Commands::On { id } => {
            let mut light = find_light(&hub, &id).await?;
            report(light.turn_on().await?);
        }

        Commands::Off { id } => {
            let mut light = find_light(&hub, &id).await?;
            report(light.turn_off().await?);
        }

        Commands::Toggle { id } => {
            let mut light = find_light(&hub, &id).await?;
            report(light.toggle().await?);
        }

        Commands::Diagnostics { id } => {
            let mut light = find_light(&hub, &id).await?;
            if let Err(e) = light.refresh().await {
                eprintln!("Error refreshing light: {}", e);
            }
            println!(
                "\nDiagnostics:\n{}",
                serde_json::to_string_pretty(&light.diagnostics())?
            );
        }
    }

    Ok(())
}
