use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ydn23_rs::{
    frame_checksum, init_logger, link_stats, log_info, pack_frame, parse_frame, ExchangeConfig,
    MasterStation, ProtocolDataUnit, SerialConfig, Ydn23DeviceHandle,
};

#[derive(Parser)]
#[command(name = "ydn23-cli")]
#[command(about = "CLI tool for the YD/T 1363 (YDN23) protocol")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a frame from header bytes and an optional hex INFO payload
    Encode {
        #[arg(value_parser = hex_byte)]
        ver: u8,
        #[arg(value_parser = hex_byte)]
        addr: u8,
        #[arg(value_parser = hex_byte)]
        cid1: u8,
        #[arg(value_parser = hex_byte)]
        cid2: u8,
        #[arg(default_value = "")]
        info: String,
    },
    /// Decode a frame given as hex-encoded raw bytes
    Decode {
        frame: String,
        #[arg(long)]
        json: bool,
    },
    /// Compute the frame checksum over an ASCII body
    Checksum { body: String },
    /// Send a command over a serial port and print the device's response
    Query {
        port: String,
        #[arg(short, long, default_value = "9600")]
        baudrate: u32,
        #[arg(value_parser = hex_byte)]
        ver: u8,
        #[arg(value_parser = hex_byte)]
        addr: u8,
        #[arg(value_parser = hex_byte)]
        cid1: u8,
        #[arg(value_parser = hex_byte)]
        cid2: u8,
        #[arg(default_value = "")]
        info: String,
        #[arg(short, long, default_value = "2")]
        retries: u32,
    },
}

fn hex_byte(s: &str) -> Result<u8, String> {
    u8::from_str_radix(s.trim_start_matches("0x"), 16).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            ver,
            addr,
            cid1,
            cid2,
            info,
        } => {
            let info = hex::decode(&info).context("INFO must be an even-length hex string")?;
            let pdu = ProtocolDataUnit::new(ver, addr, cid1, cid2, info);
            let adu = pack_frame(&pdu)?;
            println!("{}", hex::encode_upper(&adu));
            println!("{}", String::from_utf8_lossy(&adu).trim_end());
        }
        Commands::Decode { frame, json } => {
            let cleaned: String = frame.chars().filter(|c| !c.is_whitespace()).collect();
            let adu = hex::decode(&cleaned).context("frame must be hex-encoded raw bytes")?;
            let pdu = parse_frame(&adu)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&pdu)?);
            } else {
                println!(
                    "ver=0x{:02X} addr=0x{:02X} cid1=0x{:02X} cid2=0x{:02X} info={}",
                    pdu.ver,
                    pdu.addr,
                    pdu.cid1,
                    pdu.cid2,
                    hex::encode_upper(&pdu.info)
                );
            }
        }
        Commands::Checksum { body } => {
            println!("{}", frame_checksum(body.as_bytes()));
        }
        Commands::Query {
            port,
            baudrate,
            ver,
            addr,
            cid1,
            cid2,
            info,
            retries,
        } => {
            let info = hex::decode(&info).context("INFO must be an even-length hex string")?;
            let config = SerialConfig {
                baudrate,
                ..SerialConfig::default()
            };
            let handle = Ydn23DeviceHandle::connect_with_config(&port, config)
                .await
                .with_context(|| format!("opening {port}"))?;
            log_info(&format!("Connected to {port} at {baudrate} baud"));

            let mut master = MasterStation::with_config(handle, ExchangeConfig { retries });
            let request = ProtocolDataUnit::new(ver, addr, cid1, cid2, info);
            let response = master.transact(&request).await?;

            println!(
                "rtn=0x{:02X} info={}",
                response.cid2,
                hex::encode_upper(&response.info)
            );
            println!("stats: {}", serde_json::to_string(&link_stats(addr))?);
        }
    }

    Ok(())
}
