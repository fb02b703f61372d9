//! Band survey with S-meter readings.
//!
//! Demonstrates stepping across a frequency range on a connected FTX-1,
//! reading the S-meter at each step. This is useful for finding open
//! frequencies or monitoring band activity.
//!
//! The example surveys the 20-meter band (14.000 - 14.350 MHz) in 10 kHz
//! steps, pausing briefly at each frequency to let the AGC settle before
//! reading the signal strength.
//!
//! # Requirements
//!
//! - An FTX-1 connected via USB
//! - Serial port path adjusted for your system
//!
//! # Usage
//!
//! ```sh
//! cargo run -p ftxlib --example band_survey
//! ```

use std::time::Duration;

use ftxlib::models::ftx1_field;
use ftxlib::{Ftx1Builder, Side, format_freq_mhz, s_units_from_raw};

/// Survey parameters.
const START_FREQ: u64 = 14_000_000; // 14.000 MHz
const END_FREQ: u64 = 14_350_000; // 14.350 MHz
const STEP_HZ: u64 = 10_000; // 10 kHz steps
const SETTLE_MS: u64 = 200; // AGC settle time

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let serial_port = "/dev/ttyUSB0";

    println!("Connecting to FTX-1 on {}...", serial_port);

    let rig = Ftx1Builder::new(ftx1_field())
        .serial_port(serial_port)
        .build()
        .await?;

    println!("Connected: {}", rig.model().name);

    let side = Side::Main;

    // Save the current frequency so we can restore it later.
    let original_freq = rig.get_frequency(side).await?;
    println!("Original frequency: {}\n", format_freq_mhz(original_freq));

    println!(
        "Surveying {} - {} in {} kHz steps...\n",
        format_freq_mhz(START_FREQ),
        format_freq_mhz(END_FREQ),
        STEP_HZ / 1_000
    );

    println!("{:<16} {:>8}", "Frequency", "Signal");
    println!("{:-<16} {:-<8}", "", "");

    let mut freq = START_FREQ;
    while freq <= END_FREQ {
        // Tune to the frequency.
        rig.set_frequency(side, freq).await?;

        // Let the AGC settle before reading the meter.
        tokio::time::sleep(Duration::from_millis(SETTLE_MS)).await;

        // Read the S-meter (raw 0-255 scale).
        let raw = rig.get_s_meter(side).await?;

        // Format a simple bar graph.
        let bar_len = (raw as usize / 6).min(40);
        let bar: String = "#".repeat(bar_len);

        println!(
            "{:<16} {:>8}  {}",
            format_freq_mhz(freq),
            s_units_from_raw(raw),
            bar
        );

        freq += STEP_HZ;
    }

    // Restore original frequency.
    println!("\nRestoring original frequency...");
    rig.set_frequency(side, original_freq).await?;
    println!("Restored: {}", format_freq_mhz(original_freq));

    Ok(())
}
