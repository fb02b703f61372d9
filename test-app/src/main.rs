// ftxlib test application -- CLI tool for exercising the FTX-1 CAT
// protocol implementation against real hardware or a mock transport.
//
// Usage:
//   ftxlib-test-app --port /dev/ttyUSB0 info
//   ftxlib-test-app --port /dev/ttyUSB0 freq get
//   ftxlib-test-app --port /dev/ttyUSB0 freq set 14250000
//   ftxlib-test-app --port /dev/ttyUSB0 mode set usb
//   ftxlib-test-app --port /dev/ttyUSB0 --model spa1 power 100
//   ftxlib-test-app --port /dev/ttyUSB0 meter --type swr
//   ftxlib-test-app --port /dev/ttyUSB0 stress --count 200
//   ftxlib-test-app --mock info
//
// Set RUST_LOG=ftxlib=trace to see every CAT frame on the wire.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rand::Rng;

use ftxlib::commands::{CAT_ID, FREQUENCY_RANGE_HZ};
use ftxlib::models::{ftx1_field, ftx1_spa1};
use ftxlib::{
    AgcMode, Band, FirmwareCpu, Ftx1Builder, Ftx1Rig, MeterType, OperatingMode, ScanMode, Side,
    format_freq_mhz, s_units_from_raw,
};
use ftxlib_test_harness::MockTransport;

// ---------------------------------------------------------------------------
// CLI argument definitions
// ---------------------------------------------------------------------------

/// ftxlib test application -- exercises the FTX-1 CAT protocol from the
/// command line.
#[derive(Parser)]
#[command(name = "ftxlib-test-app", version, about)]
struct Cli {
    /// Serial port path (e.g. /dev/ttyUSB0, COM3).
    /// Required unless --mock is used.
    #[arg(long)]
    port: Option<String>,

    /// Station configuration: "field" (10 W head) or "spa1" (100 W amp).
    /// Controls the power range accepted by `power`.
    #[arg(long, default_value = "field")]
    model: String,

    /// Override the default baud rate (38400).
    #[arg(long)]
    baud: Option<u32>,

    /// Override the reply timeout in milliseconds (default 1000).
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Override the post-write settle delay in milliseconds (default 50).
    #[arg(long)]
    write_delay_ms: Option<u64>,

    /// Use a mock transport instead of a real serial port.
    /// Useful for verifying CLI parsing and builder wiring without
    /// hardware; most commands will report a protocol error because the
    /// mock never answers.
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show static model information and capabilities (no radio I/O).
    Info,
    /// Read the CAT identity and a firmware version from the radio.
    Id {
        /// CPU to query: main, display, sdr, dsp, spa1, fc80.
        #[arg(long, default_value = "main")]
        cpu: String,
    },
    /// Poll the radio and print a one-screen operating snapshot.
    Status,
    /// Read or set the operating frequency.
    Freq {
        #[command(subcommand)]
        action: FreqAction,
    },
    /// Read or set the operating mode.
    Mode {
        #[command(subcommand)]
        action: ModeAction,
    },
    /// Read or control the transmitter keying state.
    Ptt {
        #[command(subcommand)]
        action: PttAction,
    },
    /// Read the power level, or set it when a wattage is given.
    Power {
        /// Target power in watts (1-10 for field, 5-100 for spa1).
        watts: Option<u32>,
    },
    /// Read or set the AGC mode.
    Agc {
        #[command(subcommand)]
        action: AgcAction,
    },
    /// Read or set AF gain and squelch levels.
    Level {
        #[command(subcommand)]
        action: LevelAction,
    },
    /// Read a meter.
    Meter {
        /// Meter to read: s, s-sub, comp, alc, po, swr, idd, vdd.
        #[arg(long = "type", default_value = "s")]
        meter_type: String,
    },
    /// Read or control split operation.
    Split {
        #[command(subcommand)]
        action: SplitAction,
    },
    /// Control the clarifier.
    Clar {
        #[command(subcommand)]
        action: ClarAction,
    },
    /// Select a band or step through bands.
    Band {
        #[command(subcommand)]
        action: BandAction,
    },
    /// Memory channel operations.
    Mem {
        #[command(subcommand)]
        action: MemAction,
    },
    /// CW keyer, speed, pitch and break-in.
    Cw {
        #[command(subcommand)]
        action: CwAction,
    },
    /// Noise blanker, noise reduction and digital notch.
    Noise {
        #[command(subcommand)]
        action: NoiseAction,
    },
    /// IF shift, filter width and narrow filter.
    Filter {
        #[command(subcommand)]
        action: FilterAction,
    },
    /// Start or stop scanning.
    Scan {
        /// Scan mode: stop, up, down.
        mode: String,
        #[arg(long, default_value = "main")]
        side: String,
    },
    /// Lock or unlock the front panel.
    Lock {
        #[command(subcommand)]
        action: LockAction,
    },
    /// Swap the MAIN and SUB bands.
    Swap,
    /// Run repeated random frequency set/get cycles against the radio.
    Stress {
        /// Number of set/get cycles to run.
        #[arg(long, default_value_t = 100)]
        count: u32,
        #[arg(long, default_value = "main")]
        side: String,
    },
}

#[derive(Subcommand)]
enum FreqAction {
    /// Read the current frequency.
    Get {
        #[arg(long, default_value = "main")]
        side: String,
    },
    /// Set the frequency in Hz (e.g. 14250000).
    Set {
        freq_hz: u64,
        #[arg(long, default_value = "main")]
        side: String,
    },
}

#[derive(Subcommand)]
enum ModeAction {
    /// Read the current operating mode.
    Get {
        #[arg(long, default_value = "main")]
        side: String,
    },
    /// Set the operating mode (e.g. usb, lsb, cw, fm, data-u).
    Set {
        mode: String,
        #[arg(long, default_value = "main")]
        side: String,
    },
}

#[derive(Subcommand)]
enum PttAction {
    /// Read the transmit state.
    Get,
    /// Key the transmitter (asks for confirmation).
    On,
    /// Unkey the transmitter.
    Off,
}

#[derive(Subcommand)]
enum AgcAction {
    /// Read the AGC mode.
    Get {
        #[arg(long, default_value = "main")]
        side: String,
    },
    /// Set the AGC mode: off, fast, mid, slow, auto.
    Set {
        mode: String,
        #[arg(long, default_value = "main")]
        side: String,
    },
}

#[derive(Subcommand)]
enum LevelAction {
    /// Read the AF gain, or set it when a level is given.
    Af {
        /// Level, 0-255.
        level: Option<u8>,
        #[arg(long, default_value = "main")]
        side: String,
    },
    /// Read the squelch level, or set it when a level is given.
    Squelch {
        /// Level, 0-255.
        level: Option<u8>,
        #[arg(long, default_value = "main")]
        side: String,
    },
}

#[derive(Subcommand)]
enum SplitAction {
    /// Read the split state.
    Get,
    /// Enable split operation.
    On,
    /// Disable split operation.
    Off,
}

#[derive(Subcommand)]
enum ClarAction {
    /// Set the clarifier offset and RX/TX enables.
    Set {
        /// Offset in Hz, -9995 to +9995.
        #[arg(allow_hyphen_values = true)]
        offset_hz: i32,
        /// Apply the offset on receive.
        #[arg(long)]
        rx: bool,
        /// Apply the offset on transmit.
        #[arg(long)]
        tx: bool,
        #[arg(long, default_value = "main")]
        side: String,
    },
    /// Disable the clarifier and zero the offset.
    Off {
        #[arg(long, default_value = "main")]
        side: String,
    },
}

#[derive(Subcommand)]
enum BandAction {
    /// Jump to a band (e.g. 20m, 40m, 2m, air, gen).
    Set {
        band: String,
        #[arg(long, default_value = "main")]
        side: String,
    },
    /// Step up to the next band.
    Up {
        #[arg(long, default_value = "main")]
        side: String,
    },
    /// Step down to the previous band.
    Down {
        #[arg(long, default_value = "main")]
        side: String,
    },
}

#[derive(Subcommand)]
enum MemAction {
    /// Recall a memory channel (1-99).
    Recall {
        channel: u8,
        #[arg(long, default_value = "main")]
        side: String,
    },
    /// Copy the current memory channel contents to the VFO.
    ToVfo {
        #[arg(long, default_value = "main")]
        side: String,
    },
    /// Toggle between VFO and memory operation.
    Toggle {
        #[arg(long, default_value = "main")]
        side: String,
    },
}

#[derive(Subcommand)]
enum CwAction {
    /// Enable the internal keyer.
    KeyerOn,
    /// Disable the internal keyer.
    KeyerOff,
    /// Read the keyer speed, or set it when a speed is given.
    Speed {
        /// Speed in WPM, 4-60.
        wpm: Option<u8>,
    },
    /// Set the sidetone pitch in Hz (300-1050, 10 Hz steps).
    Pitch { hz: u16 },
    /// Enable full break-in.
    BreakInOn,
    /// Disable full break-in.
    BreakInOff,
}

#[derive(Subcommand)]
enum NoiseAction {
    /// Set the noise blanker level (0 disables, 1-10).
    Blanker {
        level: u8,
        #[arg(long, default_value = "main")]
        side: String,
    },
    /// Set the noise reduction level (0 disables, 1-10).
    Reduction {
        level: u8,
        #[arg(long, default_value = "main")]
        side: String,
    },
    /// Enable the automatic digital notch.
    NotchOn {
        #[arg(long, default_value = "main")]
        side: String,
    },
    /// Disable the automatic digital notch.
    NotchOff {
        #[arg(long, default_value = "main")]
        side: String,
    },
}

#[derive(Subcommand)]
enum FilterAction {
    /// Set the IF shift in Hz (-1200 to +1200, 20 Hz steps).
    Shift {
        #[arg(allow_hyphen_values = true)]
        hz: i16,
        #[arg(long, default_value = "main")]
        side: String,
    },
    /// Set the filter width code (0-23).
    Width {
        code: u8,
        #[arg(long, default_value = "main")]
        side: String,
    },
    /// Select the narrow filter.
    NarrowOn {
        #[arg(long, default_value = "main")]
        side: String,
    },
    /// Select the normal filter.
    NarrowOff {
        #[arg(long, default_value = "main")]
        side: String,
    },
}

#[derive(Subcommand)]
enum LockAction {
    /// Lock the front panel.
    On,
    /// Unlock the front panel.
    Off,
}

// ---------------------------------------------------------------------------
// Small helpers
// ---------------------------------------------------------------------------

/// Prompt for confirmation before a potentially disruptive action.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "YES"))
}

fn parse_side(s: &str) -> Result<Side> {
    s.parse::<Side>()
        .map_err(|e| anyhow::anyhow!("{e} (expected MAIN or SUB)"))
}

fn on_off(state: bool) -> &'static str {
    if state { "on" } else { "off" }
}

fn yes_no(state: bool) -> &'static str {
    if state { "yes" } else { "no" }
}

// ---------------------------------------------------------------------------
// Rig construction
// ---------------------------------------------------------------------------

/// Build an [`Ftx1Rig`] from the global CLI options, either over a real
/// serial port or a mock transport.
async fn create_rig(cli: &Cli) -> Result<Ftx1Rig> {
    let model = match cli.model.to_lowercase().as_str() {
        "field" => ftx1_field(),
        "spa1" | "spa-1" => ftx1_spa1(),
        other => bail!("unknown model '{other}' (expected field or spa1)"),
    };
    let model_name = model.name;
    let baud = cli.baud.unwrap_or(model.default_baud_rate);

    let mut builder = Ftx1Builder::new(model);
    if let Some(baud) = cli.baud {
        builder = builder.baud_rate(baud);
    }
    if let Some(ms) = cli.timeout_ms {
        builder = builder.command_timeout(Duration::from_millis(ms));
    }
    if let Some(ms) = cli.write_delay_ms {
        builder = builder.write_delay(Duration::from_millis(ms));
    }

    if cli.mock {
        if cli.port.is_some() {
            bail!("--mock and --port are mutually exclusive");
        }
        let rig = builder.build_with_transport(Box::new(MockTransport::new()));
        println!("Connected (mock transport) -- {model_name}");
        return Ok(rig);
    }

    let port = cli
        .port
        .as_deref()
        .context("--port is required when not using --mock")?;
    let rig = builder
        .serial_port(port)
        .build()
        .await
        .with_context(|| format!("failed to open {port}"))?;
    println!("Connected to {port} at {baud} baud -- {model_name}");
    Ok(rig)
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_info(rig: &Ftx1Rig) {
    let model = rig.model();
    let caps = rig.capabilities();
    let (min_w, max_w) = model.amp.power_range();
    println!("Model:         {}", model.name);
    println!("Power stage:   {} ({min_w}-{max_w} W)", model.amp);
    println!("Default baud:  {}", model.default_baud_rate);
    println!("Receive range: {}", caps.receive_range);
    println!("Sub receiver:  {}", yes_no(caps.has_sub_receiver));
    println!("Split:         {}", yes_no(caps.has_split));
    println!("CW keyer:      {}", yes_no(caps.has_cw_keyer));
    let modes: Vec<String> = caps.supported_modes.iter().map(|m| m.to_string()).collect();
    println!("Modes:         {}", modes.join(", "));
}

async fn cmd_id(rig: &Ftx1Rig, cpu: &str) -> Result<()> {
    let cpu: FirmwareCpu = cpu
        .parse()
        .map_err(|e| anyhow::anyhow!("{e} (expected main, display, sdr, dsp, spa1 or fc80)"))?;
    let id = rig.get_id().await?;
    if id == CAT_ID {
        println!("CAT ID:   {id} (FTX-1)");
    } else {
        println!("CAT ID:   {id} (WARNING: expected {CAT_ID})");
    }
    let version = rig.get_firmware_version(cpu).await?;
    println!("Firmware: {cpu} {version}");
    Ok(())
}

async fn cmd_status(rig: &Ftx1Rig) -> Result<()> {
    let info = rig.get_radio_info().await?;
    let ptt = rig.get_ptt().await?;
    let split = rig.get_split().await?;
    println!("Frequency:  {}", format_freq_mhz(info.frequency_hz));
    if let Some(band) = Band::from_freq(info.frequency_hz) {
        println!("Band:       {band}");
    }
    println!("Mode:       {}", info.mode);
    println!("Memory ch:  {}", info.memory_channel);
    println!(
        "Clarifier:  {:+} Hz (rx {}, tx {})",
        info.clarifier_offset_hz,
        on_off(info.rx_clarifier),
        on_off(info.tx_clarifier)
    );
    println!("PTT:        {}", if ptt { "transmitting" } else { "receiving" });
    println!("Split:      {}", on_off(split));
    Ok(())
}

async fn cmd_freq(rig: &Ftx1Rig, action: &FreqAction) -> Result<()> {
    match action {
        FreqAction::Get { side } => {
            let side = parse_side(side)?;
            let freq = rig.get_frequency(side).await?;
            println!("{side}: {} ({freq} Hz)", format_freq_mhz(freq));
        }
        FreqAction::Set { freq_hz, side } => {
            let side = parse_side(side)?;
            rig.set_frequency(side, *freq_hz).await?;
            println!("{side} set to {}", format_freq_mhz(*freq_hz));
        }
    }
    Ok(())
}

async fn cmd_mode(rig: &Ftx1Rig, action: &ModeAction) -> Result<()> {
    match action {
        ModeAction::Get { side } => {
            let side = parse_side(side)?;
            let mode = rig.get_mode(side).await?;
            println!("{side}: {mode}");
        }
        ModeAction::Set { mode, side } => {
            let side = parse_side(side)?;
            let mode: OperatingMode = mode
                .parse()
                .map_err(|e| anyhow::anyhow!("{e} (e.g. usb, lsb, cw, fm, data-u)"))?;
            rig.set_mode(side, mode).await?;
            println!("{side} set to {mode}");
        }
    }
    Ok(())
}

async fn cmd_ptt(rig: &Ftx1Rig, action: &PttAction) -> Result<()> {
    match action {
        PttAction::Get => {
            let ptt = rig.get_ptt().await?;
            println!("{}", if ptt { "transmitting" } else { "receiving" });
        }
        PttAction::On => {
            println!("WARNING: This will key the transmitter.");
            if !confirm("Continue? [y/N] ")? {
                println!("Aborted.");
                return Ok(());
            }
            rig.set_ptt(true).await?;
            println!("Transmitter keyed.");
        }
        PttAction::Off => {
            rig.set_ptt(false).await?;
            println!("Transmitter unkeyed.");
        }
    }
    Ok(())
}

async fn cmd_power(rig: &Ftx1Rig, watts: Option<u32>) -> Result<()> {
    match watts {
        None => {
            let (amp, watts) = rig.get_power().await?;
            println!("{watts} W ({amp})");
        }
        Some(watts) => {
            rig.set_power(watts).await?;
            println!("Power set to {watts} W");
        }
    }
    Ok(())
}

async fn cmd_agc(rig: &Ftx1Rig, action: &AgcAction) -> Result<()> {
    match action {
        AgcAction::Get { side } => {
            let side = parse_side(side)?;
            let agc = rig.get_agc(side).await?;
            println!("{side}: {agc}");
        }
        AgcAction::Set { mode, side } => {
            let side = parse_side(side)?;
            let agc: AgcMode = mode
                .parse()
                .map_err(|e| anyhow::anyhow!("{e} (expected off, fast, mid, slow or auto)"))?;
            rig.set_agc(side, agc).await?;
            println!("{side} AGC set to {agc}");
        }
    }
    Ok(())
}

async fn cmd_level(rig: &Ftx1Rig, action: &LevelAction) -> Result<()> {
    match action {
        LevelAction::Af { level, side } => {
            let side = parse_side(side)?;
            match level {
                None => println!("{side} AF gain: {}", rig.get_af_gain(side).await?),
                Some(level) => {
                    rig.set_af_gain(side, *level).await?;
                    println!("{side} AF gain set to {level}");
                }
            }
        }
        LevelAction::Squelch { level, side } => {
            let side = parse_side(side)?;
            match level {
                None => println!("{side} squelch: {}", rig.get_squelch(side).await?),
                Some(level) => {
                    rig.set_squelch(side, *level).await?;
                    println!("{side} squelch set to {level}");
                }
            }
        }
    }
    Ok(())
}

async fn cmd_meter(rig: &Ftx1Rig, meter_type: &str) -> Result<()> {
    let meter: MeterType = meter_type
        .parse()
        .map_err(|e| anyhow::anyhow!("{e} (expected s, s-sub, comp, alc, po, swr, idd or vdd)"))?;
    match meter {
        MeterType::SMeterMain | MeterType::SMeterSub => {
            let side = if meter == MeterType::SMeterMain {
                Side::Main
            } else {
                Side::Sub
            };
            let raw = rig.get_s_meter(side).await?;
            println!("{meter}: {} (raw {raw})", s_units_from_raw(raw));
        }
        _ => {
            let reading = rig.get_meter(meter).await?;
            println!(
                "{meter}: primary {} secondary {} (raw)",
                reading.primary, reading.secondary
            );
        }
    }
    Ok(())
}

async fn cmd_split(rig: &Ftx1Rig, action: &SplitAction) -> Result<()> {
    match action {
        SplitAction::Get => {
            let split = rig.get_split().await?;
            println!("split {}", on_off(split));
        }
        SplitAction::On => {
            rig.set_split(true).await?;
            println!("split on");
        }
        SplitAction::Off => {
            rig.set_split(false).await?;
            println!("split off");
        }
    }
    Ok(())
}

async fn cmd_clar(rig: &Ftx1Rig, action: &ClarAction) -> Result<()> {
    match action {
        ClarAction::Set {
            offset_hz,
            rx,
            tx,
            side,
        } => {
            let side = parse_side(side)?;
            rig.set_clarifier(side, *rx, *tx, *offset_hz).await?;
            println!(
                "{side} clarifier {:+} Hz (rx {}, tx {})",
                offset_hz,
                on_off(*rx),
                on_off(*tx)
            );
        }
        ClarAction::Off { side } => {
            let side = parse_side(side)?;
            rig.set_clarifier(side, false, false, 0).await?;
            println!("{side} clarifier off");
        }
    }
    Ok(())
}

async fn cmd_band(rig: &Ftx1Rig, action: &BandAction) -> Result<()> {
    match action {
        BandAction::Set { band, side } => {
            let side = parse_side(side)?;
            let band: Band = band
                .parse()
                .map_err(|e| anyhow::anyhow!("{e} (e.g. 20m, 40m, 2m, air, gen)"))?;
            rig.set_band(side, band).await?;
            println!("{side} band set to {band}");
        }
        BandAction::Up { side } => {
            let side = parse_side(side)?;
            rig.band_up(side).await?;
            println!("{side} band up");
        }
        BandAction::Down { side } => {
            let side = parse_side(side)?;
            rig.band_down(side).await?;
            println!("{side} band down");
        }
    }
    Ok(())
}

async fn cmd_mem(rig: &Ftx1Rig, action: &MemAction) -> Result<()> {
    match action {
        MemAction::Recall { channel, side } => {
            let side = parse_side(side)?;
            rig.set_memory_channel(side, *channel).await?;
            println!("{side} memory channel {channel} recalled");
        }
        MemAction::ToVfo { side } => {
            let side = parse_side(side)?;
            rig.memory_to_vfo(side).await?;
            println!("{side} memory copied to VFO");
        }
        MemAction::Toggle { side } => {
            let side = parse_side(side)?;
            rig.toggle_vfo_memory(side).await?;
            println!("{side} VFO/memory toggled");
        }
    }
    Ok(())
}

async fn cmd_cw(rig: &Ftx1Rig, action: &CwAction) -> Result<()> {
    match action {
        CwAction::KeyerOn => {
            rig.set_keyer(true).await?;
            println!("keyer on");
        }
        CwAction::KeyerOff => {
            rig.set_keyer(false).await?;
            println!("keyer off");
        }
        CwAction::Speed { wpm: None } => {
            let wpm = rig.get_keyer_speed().await?;
            println!("keyer speed: {wpm} WPM");
        }
        CwAction::Speed { wpm: Some(wpm) } => {
            rig.set_keyer_speed(*wpm).await?;
            println!("keyer speed set to {wpm} WPM");
        }
        CwAction::Pitch { hz } => {
            rig.set_cw_pitch(*hz).await?;
            println!("sidetone pitch set to {hz} Hz");
        }
        CwAction::BreakInOn => {
            rig.set_break_in(true).await?;
            println!("break-in on");
        }
        CwAction::BreakInOff => {
            rig.set_break_in(false).await?;
            println!("break-in off");
        }
    }
    Ok(())
}

async fn cmd_noise(rig: &Ftx1Rig, action: &NoiseAction) -> Result<()> {
    match action {
        NoiseAction::Blanker { level, side } => {
            let side = parse_side(side)?;
            rig.set_noise_blanker(side, *level).await?;
            println!("{side} noise blanker level {level}");
        }
        NoiseAction::Reduction { level, side } => {
            let side = parse_side(side)?;
            rig.set_noise_reduction(side, *level).await?;
            println!("{side} noise reduction level {level}");
        }
        NoiseAction::NotchOn { side } => {
            let side = parse_side(side)?;
            rig.set_digital_notch(side, true).await?;
            println!("{side} digital notch on");
        }
        NoiseAction::NotchOff { side } => {
            let side = parse_side(side)?;
            rig.set_digital_notch(side, false).await?;
            println!("{side} digital notch off");
        }
    }
    Ok(())
}

async fn cmd_filter(rig: &Ftx1Rig, action: &FilterAction) -> Result<()> {
    match action {
        FilterAction::Shift { hz, side } => {
            let side = parse_side(side)?;
            rig.set_if_shift(side, *hz).await?;
            println!("{side} IF shift {hz:+} Hz");
        }
        FilterAction::Width { code, side } => {
            let side = parse_side(side)?;
            rig.set_filter_width(side, *code).await?;
            println!("{side} filter width code {code}");
        }
        FilterAction::NarrowOn { side } => {
            let side = parse_side(side)?;
            rig.set_narrow(side, true).await?;
            println!("{side} narrow filter on");
        }
        FilterAction::NarrowOff { side } => {
            let side = parse_side(side)?;
            rig.set_narrow(side, false).await?;
            println!("{side} narrow filter off");
        }
    }
    Ok(())
}

async fn cmd_scan(rig: &Ftx1Rig, mode: &str, side: &str) -> Result<()> {
    let side = parse_side(side)?;
    let mode: ScanMode = mode
        .parse()
        .map_err(|e| anyhow::anyhow!("{e} (expected stop, up or down)"))?;
    rig.set_scan(side, mode).await?;
    println!("{side} scan {mode}");
    Ok(())
}

async fn cmd_lock(rig: &Ftx1Rig, action: &LockAction) -> Result<()> {
    match action {
        LockAction::On => {
            rig.set_lock(true).await?;
            println!("panel locked");
        }
        LockAction::Off => {
            rig.set_lock(false).await?;
            println!("panel unlocked");
        }
    }
    Ok(())
}

/// Random frequency set/get cycles, restoring the starting frequency
/// afterwards. Exercises the whole transaction path under load.
async fn cmd_stress(rig: &Ftx1Rig, count: u32, side: &str) -> Result<()> {
    let side = parse_side(side)?;
    println!("Running stress test: {count} random frequency set/get cycles on {side}");

    let base_freq = rig
        .get_frequency(side)
        .await
        .context("failed to read the starting frequency")?;
    println!("Starting frequency: {}", format_freq_mhz(base_freq));

    let (range_low, range_high) = FREQUENCY_RANGE_HZ;
    let mut rng = rand::thread_rng();
    let mut failures = 0u32;
    let start = Instant::now();

    for i in 0..count {
        let offset: i64 = rng.gen_range(-500_000..=500_000);
        let target =
            (base_freq as i64 + offset).clamp(range_low as i64, range_high as i64) as u64;

        if let Err(e) = rig.set_frequency(side, target).await {
            failures += 1;
            eprintln!("  cycle {}: set failed: {e}", i + 1);
            continue;
        }
        match rig.get_frequency(side).await {
            Ok(readback) if readback == target => {}
            Ok(readback) => {
                failures += 1;
                eprintln!(
                    "  cycle {}: readback mismatch: sent {target}, got {readback}",
                    i + 1
                );
            }
            Err(e) => {
                failures += 1;
                eprintln!("  cycle {}: get failed: {e}", i + 1);
            }
        }

        if (i + 1) % 25 == 0 {
            println!("  {}/{count} cycles", i + 1);
        }
    }

    let elapsed = start.elapsed();
    let rate = count as f64 / elapsed.as_secs_f64();
    println!(
        "Completed {count} cycles in {:.1} s ({rate:.1} cycles/s), {failures} failures",
        elapsed.as_secs_f64()
    );

    rig.set_frequency(side, base_freq)
        .await
        .context("failed to restore the starting frequency")?;
    println!("Restored {}", format_freq_mhz(base_freq));

    if failures > 0 {
        bail!("stress test had {failures} failures");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let rig = create_rig(&cli).await?;

    match &cli.command {
        Command::Info => cmd_info(&rig),
        Command::Id { cpu } => cmd_id(&rig, cpu).await?,
        Command::Status => cmd_status(&rig).await?,
        Command::Freq { action } => cmd_freq(&rig, action).await?,
        Command::Mode { action } => cmd_mode(&rig, action).await?,
        Command::Ptt { action } => cmd_ptt(&rig, action).await?,
        Command::Power { watts } => cmd_power(&rig, *watts).await?,
        Command::Agc { action } => cmd_agc(&rig, action).await?,
        Command::Level { action } => cmd_level(&rig, action).await?,
        Command::Meter { meter_type } => cmd_meter(&rig, meter_type).await?,
        Command::Split { action } => cmd_split(&rig, action).await?,
        Command::Clar { action } => cmd_clar(&rig, action).await?,
        Command::Band { action } => cmd_band(&rig, action).await?,
        Command::Mem { action } => cmd_mem(&rig, action).await?,
        Command::Cw { action } => cmd_cw(&rig, action).await?,
        Command::Noise { action } => cmd_noise(&rig, action).await?,
        Command::Filter { action } => cmd_filter(&rig, action).await?,
        Command::Scan { mode, side } => cmd_scan(&rig, mode, side).await?,
        Command::Lock { action } => cmd_lock(&rig, action).await?,
        Command::Swap => {
            rig.swap_vfo().await?;
            println!("MAIN and SUB swapped");
        }
        Command::Stress { count, side } => cmd_stress(&rig, *count, side).await?,
    }

    rig.close().await?;
    Ok(())
}
