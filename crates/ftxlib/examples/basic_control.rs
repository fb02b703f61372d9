//! Basic FTX-1 control example.
//!
//! Demonstrates connecting to an FTX-1 over its USB serial port, reading
//! the current frequency and mode, and tuning to the 20-meter FT8
//! frequency.
//!
//! # Requirements
//!
//! - An FTX-1 connected via USB
//! - The serial port path adjusted for your system (e.g., `/dev/ttyUSB0`
//!   on Linux, `COM3` on Windows)
//!
//! # Usage
//!
//! ```sh
//! cargo run -p ftxlib --example basic_control
//! ```

use std::time::Duration;

use ftxlib::models::ftx1_field;
use ftxlib::{Ftx1Builder, OperatingMode, Side, format_freq_mhz, s_units_from_raw};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Adjust this to match your system's serial port.
    let serial_port = "/dev/ttyUSB0";

    println!("Connecting to FTX-1 on {}...", serial_port);

    let rig = Ftx1Builder::new(ftx1_field())
        .serial_port(serial_port)
        .command_timeout(Duration::from_millis(500))
        .build()
        .await?;

    // Print model info and capabilities.
    let model = rig.model();
    let caps = rig.capabilities();
    println!("Connected: {}", model.name);
    println!("Max power: {} W", caps.max_power_watts);
    println!("Has split: {}", caps.has_split);

    // Confirm we are really talking to an FTX-1.
    let id = rig.get_id().await?;
    println!("CAT ID: {}", id);

    // Read the current frequency on the MAIN band.
    let side = Side::Main;
    let freq = rig.get_frequency(side).await?;
    println!("{}: {} ({} Hz)", side, format_freq_mhz(freq), freq);

    // Read the current mode.
    let mode = rig.get_mode(side).await?;
    println!("Mode: {}", mode);

    // Read the S-meter.
    let raw = rig.get_s_meter(side).await?;
    println!("S-meter: {} (raw {})", s_units_from_raw(raw), raw);

    // Tune to 14.074 MHz (FT8 on 20 meters).
    let new_freq = 14_074_000;
    println!("\nSetting frequency to {} Hz...", new_freq);
    rig.set_frequency(side, new_freq).await?;

    // Verify the change.
    let freq = rig.get_frequency(side).await?;
    println!("Frequency now: {}", format_freq_mhz(freq));

    // FT8 runs in the upper-sideband data mode.
    println!("Setting mode to DATA-U...");
    rig.set_mode(side, OperatingMode::DataUpper).await?;

    let mode = rig.get_mode(side).await?;
    println!("Mode now: {}", mode);

    println!("\nDone.");
    Ok(())
}
