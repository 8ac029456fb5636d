use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;

use wfd_info_lib::commands::{self, DecodedInfo, EncodedInfo};
use wfd_info_lib::config::{AppConfig, CONFIG_FILE_NAME};
use wfd_info_lib::logging;

/// Encode and decode Wi-Fi Display device information subelements
#[derive(Parser)]
#[command(name = "wfd-info", version, about = "WFD device info helper")]
struct Cli {
    /// Configuration file holding the WFD profile
    #[arg(long, global = true, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Override the configured log level
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode the configured profile into subelement hex and a wire record
    Encode,
    /// Decode a hex encoded 20-byte wire record
    DecodeWire {
        /// Wire record in hex (40 digits)
        wire: String,
    },
    /// Decode a device info subelement
    DecodeHex {
        /// Device info subelement in hex (12 digits)
        device_info: String,
        /// R2 device info subelement in hex (8 digits)
        #[arg(long)]
        r2: Option<String>,
    },
    /// Write the default configuration file
    Init {
        /// Replace an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rt = tokio::runtime::Runtime::new().context("Failed to create Tokio runtime")?;
    rt.block_on(run(cli))
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = match cli.command {
        Command::Init { .. } => AppConfig::default(),
        Command::Encode => AppConfig::load_config(&cli.config).await?,
        // Decoding only needs the logging section
        Command::DecodeWire { .. } | Command::DecodeHex { .. } => {
            AppConfig::load_config_or_default(&cli.config).await
        }
    };
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    logging::init_logging(&config.logging);
    info!("Using configuration {:?}", cli.config);

    match cli.command {
        Command::Encode => {
            let encoded = commands::encode_profile(&config.profile);
            print_encoded(&encoded, cli.json)?;
        }
        Command::DecodeWire { wire } => {
            let decoded = commands::decode_wire(&wire)?;
            print_decoded(&decoded, cli.json)?;
        }
        Command::DecodeHex { device_info, r2 } => {
            let decoded = commands::decode_device_info_hex(&device_info, r2.as_deref())?;
            print_decoded(&decoded, cli.json)?;
        }
        Command::Init { force } => {
            config.create_config(&cli.config, force).await?;
            println!("wrote {}", cli.config.display());
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_encoded(encoded: &EncodedInfo, json: bool) -> Result<()> {
    if json {
        return print_json(encoded);
    }
    println!("device_info: {}", encoded.device_info_hex);
    if let Some(r2) = &encoded.r2_device_info_hex {
        println!("r2_device_info: {}", r2);
    }
    println!("wire: {}", encoded.wire_hex);
    Ok(())
}

fn print_decoded(decoded: &DecodedInfo, json: bool) -> Result<()> {
    if json {
        return print_json(decoded);
    }
    println!("{}", decoded.wfd_info);
    println!(" WFD SessionAvailable: {}", decoded.wfd_info.is_session_available());
    Ok(())
}
