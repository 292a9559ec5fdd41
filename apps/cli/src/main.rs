use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::{error, info};

use radioflash_core::dfu::DfuDevice;
use radioflash_core::fw::{self, FirmwareSupport};
use radioflash_core::session::{FlashConfig, FlashSession};
use radioflash_core::transport::NusbTransport;

#[derive(Parser, Debug)]
#[command(author, version, about = "Firmware flashing tool for TYT radios", long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a firmware file to a connected radio
    Flash {
        /// Path to the firmware container file
        firmware: PathBuf,

        /// Load session settings from a TOML config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Skip the device model check
        #[arg(long)]
        force: bool,

        /// USB vendor ID override (hex)
        #[arg(long, value_parser = parse_hex_u16)]
        vid: Option<u16>,

        /// USB product ID override (hex)
        #[arg(long, value_parser = parse_hex_u16)]
        pid: Option<u16>,
    },
    /// Print information about a firmware file
    Info {
        /// Path to the firmware container file
        firmware: PathBuf,
    },
    /// Decrypt a firmware file and write the raw payload out
    Unwrap {
        /// Path to the firmware container file
        firmware: PathBuf,

        /// Output path for the decrypted binary
        output: PathBuf,
    },
    /// Wrap a raw binary into an encrypted firmware container
    Wrap {
        /// Path to the raw binary
        input: PathBuf,

        /// Output path for the container
        output: PathBuf,

        /// Target radio model (e.g. MD9600, UV3X0)
        #[arg(long)]
        radio: String,

        /// Flash address the binary is linked for (hex)
        #[arg(long, value_parser = parse_hex_u32, default_value = "0x0800c000")]
        address: u32,
    },
    /// Query the model string of a connected radio
    Identify,
}

fn parse_hex_u16(s: &str) -> Result<u16, String> {
    let s = s.trim_start_matches("0x").trim_start_matches("0X");
    u16::from_str_radix(s, 16).map_err(|e| e.to_string())
}

fn parse_hex_u32(s: &str) -> Result<u32, String> {
    let s = s.trim_start_matches("0x").trim_start_matches("0X");
    u32::from_str_radix(s, 16).map_err(|e| e.to_string())
}

fn main() {
    let args = Args::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(if args.verbose {
                    tracing::Level::DEBUG.into()
                } else {
                    tracing::Level::INFO.into()
                })
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    if let Err(e) = run(args.command) {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Flash {
            firmware,
            config,
            force,
            vid,
            pid,
        } => {
            let mut cfg = match config {
                Some(path) => FlashConfig::load_from_file(&path)
                    .with_context(|| format!("reading config {}", path.display()))?,
                None => FlashConfig::default(),
            };
            cfg.firmware_path = firmware.display().to_string();
            cfg.skip_model_check |= force;
            if vid.is_some() {
                cfg.vendor_id = vid;
            }
            if pid.is_some() {
                cfg.product_id = pid;
            }

            let mut session = FlashSession::new(cfg);
            session.run()
        }
        Command::Info { firmware } => {
            let fw = fw::read_file(&firmware)?;
            println!("{}", fw.describe());
            Ok(())
        }
        Command::Unwrap { firmware, output } => {
            let mut fw = fw::read_file(&firmware)?;
            fw.decrypt()?;
            let payload: Vec<u8> = fw
                .segments()
                .iter()
                .flat_map(|s| s.data.iter().copied())
                .collect();
            std::fs::write(&output, payload)?;
            info!(path = %output.display(), "Wrote decrypted payload");
            Ok(())
        }
        Command::Wrap {
            input,
            output,
            radio,
            address,
        } => {
            let data = std::fs::read(&input)?;
            let mut container = fw::tyt::TytFirmware::for_model(&radio)?;
            container.append_segment(address, &data)?;
            container.encrypt()?;
            container.write_to(&output)?;
            info!(path = %output.display(), "Wrote firmware container");
            Ok(())
        }
        Command::Identify => {
            let transport = NusbTransport::open()?;
            let dfu = DfuDevice::new(transport);
            let model = dfu.identify()?;
            if model.is_empty() {
                bail!("Radio returned an empty model string");
            }
            println!("{model}");
            Ok(())
        }
    }
}
