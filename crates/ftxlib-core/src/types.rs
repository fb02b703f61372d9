//! Core types used throughout ftxlib.
//!
//! These types are the typed vocabulary of the CAT protocol: closed
//! enumerations for every wire code set, plus the composite values decoded
//! from replies. The character-level wire mappings themselves live in the
//! `ftxlib` command catalog; nothing here knows about frame layout.

use std::fmt;
use std::str::FromStr;

/// Receiver/VFO side selector.
///
/// Most per-VFO commands carry a single-digit side field distinguishing the
/// MAIN receiver (0) from the SUB receiver (1). Global commands (PTT, split,
/// identity, lock) take no side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// MAIN receiver/VFO (side digit 0).
    #[default]
    Main,
    /// SUB receiver/VFO (side digit 1).
    Sub,
}

impl Side {
    /// Return the numeric side index used on the wire (0 = MAIN, 1 = SUB).
    pub fn index(&self) -> u8 {
        match self {
            Side::Main => 0,
            Side::Sub => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Main => write!(f, "MAIN"),
            Side::Sub => write!(f, "SUB"),
        }
    }
}

impl FromStr for Side {
    type Err = ParseModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MAIN" | "0" | "A" => Ok(Side::Main),
            "SUB" | "1" | "B" => Ok(Side::Sub),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Operating mode of the transceiver.
///
/// A closed set matching the radio's 17 mode codes. Covers the analog
/// modes, their narrow variants, the data sub-modes used by sound-card
/// digital software, and the two C4FM digital voice modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatingMode {
    /// Lower sideband voice.
    LSB,
    /// Upper sideband voice.
    USB,
    /// CW (morse) with upper sideband offset.
    CwUpper,
    /// Frequency modulation.
    FM,
    /// Amplitude modulation.
    AM,
    /// Radio teletype (FSK), lower sideband.
    RttyLower,
    /// CW with lower sideband offset.
    CwLower,
    /// Data mode using lower sideband.
    DataLower,
    /// Radio teletype (FSK), upper sideband.
    RttyUpper,
    /// Data mode using FM.
    DataFM,
    /// Narrow FM.
    FmNarrow,
    /// Data mode using upper sideband (AFSK, sound-card digital).
    DataUpper,
    /// Narrow AM.
    AmNarrow,
    /// Phase-shift keying.
    PSK,
    /// Data mode using narrow FM.
    DataFmNarrow,
    /// C4FM digital voice, DN (digital narrow) mode.
    C4fmDN,
    /// C4FM digital voice, VW (voice wide) mode.
    C4fmVW,
}

impl OperatingMode {
    /// All 17 modes, in wire-code order.
    pub const ALL: [OperatingMode; 17] = [
        OperatingMode::LSB,
        OperatingMode::USB,
        OperatingMode::CwUpper,
        OperatingMode::FM,
        OperatingMode::AM,
        OperatingMode::RttyLower,
        OperatingMode::CwLower,
        OperatingMode::DataLower,
        OperatingMode::RttyUpper,
        OperatingMode::DataFM,
        OperatingMode::FmNarrow,
        OperatingMode::DataUpper,
        OperatingMode::AmNarrow,
        OperatingMode::PSK,
        OperatingMode::DataFmNarrow,
        OperatingMode::C4fmDN,
        OperatingMode::C4fmVW,
    ];
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OperatingMode::LSB => "LSB",
            OperatingMode::USB => "USB",
            OperatingMode::CwUpper => "CW-U",
            OperatingMode::FM => "FM",
            OperatingMode::AM => "AM",
            OperatingMode::RttyLower => "RTTY-L",
            OperatingMode::CwLower => "CW-L",
            OperatingMode::DataLower => "DATA-L",
            OperatingMode::RttyUpper => "RTTY-U",
            OperatingMode::DataFM => "DATA-FM",
            OperatingMode::FmNarrow => "FM-N",
            OperatingMode::DataUpper => "DATA-U",
            OperatingMode::AmNarrow => "AM-N",
            OperatingMode::PSK => "PSK",
            OperatingMode::DataFmNarrow => "DATA-FM-N",
            OperatingMode::C4fmDN => "C4FM-DN",
            OperatingMode::C4fmVW => "C4FM-VW",
        };
        write!(f, "{s}")
    }
}

/// Error returned when a string cannot be parsed into one of the closed
/// enumerations in this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError(String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mode: {}", self.0)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for OperatingMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LSB" => Ok(OperatingMode::LSB),
            "USB" => Ok(OperatingMode::USB),
            "CW" | "CW-U" | "CWU" => Ok(OperatingMode::CwUpper),
            "FM" => Ok(OperatingMode::FM),
            "AM" => Ok(OperatingMode::AM),
            "RTTY" | "RTTY-L" | "RTTYL" => Ok(OperatingMode::RttyLower),
            "CW-L" | "CWL" | "CWR" => Ok(OperatingMode::CwLower),
            "DATA-L" | "DATAL" => Ok(OperatingMode::DataLower),
            "RTTY-U" | "RTTYU" => Ok(OperatingMode::RttyUpper),
            "DATA-FM" | "DATAFM" => Ok(OperatingMode::DataFM),
            "FM-N" | "FMN" => Ok(OperatingMode::FmNarrow),
            "DATA-U" | "DATAU" => Ok(OperatingMode::DataUpper),
            "AM-N" | "AMN" => Ok(OperatingMode::AmNarrow),
            "PSK" => Ok(OperatingMode::PSK),
            "DATA-FM-N" | "DATAFMN" => Ok(OperatingMode::DataFmNarrow),
            "C4FM-DN" | "C4FMDN" | "DN" => Ok(OperatingMode::C4fmDN),
            "C4FM-VW" | "C4FMVW" | "VW" => Ok(OperatingMode::C4fmVW),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// AGC (Automatic Gain Control) time-constant setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgcMode {
    /// AGC disabled.
    Off,
    /// Fast AGC — quick attack and release, typical for CW.
    Fast,
    /// Mid AGC — balanced for SSB voice.
    Mid,
    /// Slow AGC — long time constant, useful for AM monitoring.
    Slow,
    /// Automatic selection by operating mode.
    Auto,
}

impl fmt::Display for AgcMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AgcMode::Off => "OFF",
            AgcMode::Fast => "FAST",
            AgcMode::Mid => "MID",
            AgcMode::Slow => "SLOW",
            AgcMode::Auto => "AUTO",
        };
        write!(f, "{s}")
    }
}

impl FromStr for AgcMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OFF" => Ok(AgcMode::Off),
            "FAST" => Ok(AgcMode::Fast),
            "MID" | "MEDIUM" => Ok(AgcMode::Mid),
            "SLOW" => Ok(AgcMode::Slow),
            "AUTO" => Ok(AgcMode::Auto),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Meter selectable through the dual-value meter query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeterType {
    /// S-meter, MAIN receiver.
    SMeterMain,
    /// S-meter, SUB receiver.
    SMeterSub,
    /// Speech compression level.
    Compression,
    /// Automatic level control.
    Alc,
    /// Power output.
    PowerOutput,
    /// Standing wave ratio.
    Swr,
    /// Final-stage drain current (IDD).
    DrainCurrent,
    /// Supply voltage (VDD).
    SupplyVoltage,
}

impl fmt::Display for MeterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MeterType::SMeterMain => "S-MAIN",
            MeterType::SMeterSub => "S-SUB",
            MeterType::Compression => "COMP",
            MeterType::Alc => "ALC",
            MeterType::PowerOutput => "PO",
            MeterType::Swr => "SWR",
            MeterType::DrainCurrent => "IDD",
            MeterType::SupplyVoltage => "VDD",
        };
        write!(f, "{s}")
    }
}

impl FromStr for MeterType {
    type Err = ParseModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "S" | "S-MAIN" | "SMAIN" => Ok(MeterType::SMeterMain),
            "S-SUB" | "SSUB" => Ok(MeterType::SMeterSub),
            "COMP" => Ok(MeterType::Compression),
            "ALC" => Ok(MeterType::Alc),
            "PO" | "POWER" => Ok(MeterType::PowerOutput),
            "SWR" => Ok(MeterType::Swr),
            "IDD" => Ok(MeterType::DrainCurrent),
            "VDD" => Ok(MeterType::SupplyVoltage),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// A dual-value meter reading: two adjacent fixed-width fields from one
/// meter reply. The meaning of the secondary value depends on the meter
/// type and firmware; both are raw counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterReading {
    /// Primary meter value (raw counts).
    pub primary: u16,
    /// Secondary meter value (raw counts).
    pub secondary: u16,
}

/// Which power amplifier a power command addresses.
///
/// The FTX-1 head runs 1–10 W on its own; docked to the SPA-1 station
/// amplifier the output range becomes 5–100 W.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerAmp {
    /// The FTX-1 Field head unit (1–10 W).
    Field,
    /// The SPA-1 station amplifier (5–100 W).
    Spa1,
}

impl PowerAmp {
    /// The valid RF power range for this amplifier, in watts (inclusive).
    pub fn power_range(&self) -> (u32, u32) {
        match self {
            PowerAmp::Field => (1, 10),
            PowerAmp::Spa1 => (5, 100),
        }
    }
}

impl fmt::Display for PowerAmp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerAmp::Field => write!(f, "Field"),
            PowerAmp::Spa1 => write!(f, "SPA-1"),
        }
    }
}

impl FromStr for PowerAmp {
    type Err = ParseModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FIELD" | "1" => Ok(PowerAmp::Field),
            "SPA-1" | "SPA1" | "2" => Ok(PowerAmp::Spa1),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// CPU selectable through the firmware-version query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FirmwareCpu {
    /// Main CPU.
    Main,
    /// Display CPU.
    Display,
    /// SDR CPU.
    Sdr,
    /// DSP CPU.
    Dsp,
    /// SPA-1 amplifier CPU.
    Spa1,
    /// FC-80 antenna tuner CPU.
    Fc80,
}

impl fmt::Display for FirmwareCpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FirmwareCpu::Main => "MAIN",
            FirmwareCpu::Display => "DISPLAY",
            FirmwareCpu::Sdr => "SDR",
            FirmwareCpu::Dsp => "DSP",
            FirmwareCpu::Spa1 => "SPA-1",
            FirmwareCpu::Fc80 => "FC-80",
        };
        write!(f, "{s}")
    }
}

impl FromStr for FirmwareCpu {
    type Err = ParseModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MAIN" | "0" => Ok(FirmwareCpu::Main),
            "DISPLAY" | "1" => Ok(FirmwareCpu::Display),
            "SDR" | "2" => Ok(FirmwareCpu::Sdr),
            "DSP" | "3" => Ok(FirmwareCpu::Dsp),
            "SPA-1" | "SPA1" | "4" => Ok(FirmwareCpu::Spa1),
            "FC-80" | "FC80" | "5" => Ok(FirmwareCpu::Fc80),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Scan control setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanMode {
    /// Stop scanning.
    Stop,
    /// Scan toward higher frequencies.
    Up,
    /// Scan toward lower frequencies.
    Down,
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScanMode::Stop => "STOP",
            ScanMode::Up => "UP",
            ScanMode::Down => "DOWN",
        };
        write!(f, "{s}")
    }
}

impl FromStr for ScanMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "STOP" | "OFF" | "0" => Ok(ScanMode::Stop),
            "UP" | "1" => Ok(ScanMode::Up),
            "DOWN" | "2" => Ok(ScanMode::Down),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Composite radio state decoded from one information reply.
///
/// All fields come from a single fixed-layout reply body; none are read
/// separately. Single-character status fields whose code tables are not
/// part of this crate's typed surface (tone mode, repeater shift,
/// VFO-or-memory flag) are kept as their raw wire characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioInfo {
    /// Memory channel field, kept as the 5-character wire text (the radio
    /// reports PMS and emergency channels in ranges beyond plain numbers).
    pub memory_channel: String,
    /// Operating frequency in hertz.
    pub frequency_hz: u64,
    /// Signed clarifier offset in hertz.
    pub clarifier_offset_hz: i32,
    /// Whether the RX clarifier is enabled.
    pub rx_clarifier: bool,
    /// Whether the TX clarifier is enabled.
    pub tx_clarifier: bool,
    /// Operating mode.
    pub mode: OperatingMode,
    /// VFO-or-memory flag (raw wire character).
    pub vfo_memory: char,
    /// CTCSS/DCS tone mode (raw wire character).
    pub tone_mode: char,
    /// Repeater shift direction (raw wire character).
    pub repeater_shift: char,
}

/// A contiguous frequency range in hertz, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyRange {
    /// Lower bound of the range in hertz (inclusive).
    pub low_hz: u64,
    /// Upper bound of the range in hertz (inclusive).
    pub high_hz: u64,
}

impl FrequencyRange {
    /// Create a new frequency range.
    pub fn new(low_hz: u64, high_hz: u64) -> Self {
        FrequencyRange { low_hz, high_hz }
    }

    /// Check whether a frequency (in hertz) falls within this range.
    pub fn contains(&self, freq_hz: u64) -> bool {
        freq_hz >= self.low_hz && freq_hz <= self.high_hz
    }
}

impl fmt::Display for FrequencyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} Hz", self.low_hz, self.high_hz)
    }
}

/// Capabilities and limits of a station configuration.
///
/// Populated by the model definitions in `ftxlib::models` so callers can
/// adapt their behavior (e.g. hiding SUB-side controls when
/// `has_sub_receiver` is false).
#[derive(Debug, Clone)]
pub struct Capabilities {
    /// Whether the radio has an independent SUB receiver.
    pub has_sub_receiver: bool,
    /// Whether split-frequency TX/RX operation is supported.
    pub has_split: bool,
    /// Whether the radio has a built-in CW keyer with adjustable speed.
    pub has_cw_keyer: bool,
    /// The set of operating modes the radio supports.
    pub supported_modes: Vec<OperatingMode>,
    /// The receiver tuning range.
    pub receive_range: FrequencyRange,
    /// Maximum transmit power in watts for this configuration.
    pub max_power_watts: f32,
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities {
            has_sub_receiver: false,
            has_split: false,
            has_cw_keyer: false,
            supported_modes: Vec::new(),
            receive_range: FrequencyRange::new(0, 0),
            max_power_watts: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_index() {
        assert_eq!(Side::Main.index(), 0);
        assert_eq!(Side::Sub.index(), 1);
        assert_ne!(Side::Main, Side::Sub);
    }

    #[test]
    fn side_display() {
        assert_eq!(Side::Main.to_string(), "MAIN");
        assert_eq!(Side::Sub.to_string(), "SUB");
    }

    #[test]
    fn side_from_str() {
        assert_eq!("main".parse::<Side>().unwrap(), Side::Main);
        assert_eq!("SUB".parse::<Side>().unwrap(), Side::Sub);
        assert_eq!("0".parse::<Side>().unwrap(), Side::Main);
        assert_eq!("1".parse::<Side>().unwrap(), Side::Sub);
        assert!("2".parse::<Side>().is_err());
    }

    #[test]
    fn mode_display_round_trip() {
        for mode in &OperatingMode::ALL {
            let s = mode.to_string();
            let parsed: OperatingMode = s.parse().expect("should parse back");
            assert_eq!(*mode, parsed, "round-trip failed for {mode}");
        }
    }

    #[test]
    fn mode_from_str_case_insensitive() {
        assert_eq!("usb".parse::<OperatingMode>().unwrap(), OperatingMode::USB);
        assert_eq!(
            "cw".parse::<OperatingMode>().unwrap(),
            OperatingMode::CwUpper
        );
        assert_eq!(
            "data-u".parse::<OperatingMode>().unwrap(),
            OperatingMode::DataUpper
        );
        assert_eq!(
            "DATAU".parse::<OperatingMode>().unwrap(),
            OperatingMode::DataUpper
        );
    }

    #[test]
    fn mode_from_str_invalid() {
        assert!("UNKNOWN".parse::<OperatingMode>().is_err());
    }

    #[test]
    fn mode_all_is_exhaustive() {
        assert_eq!(OperatingMode::ALL.len(), 17);
    }

    #[test]
    fn agc_display_round_trip() {
        let modes = [
            AgcMode::Off,
            AgcMode::Fast,
            AgcMode::Mid,
            AgcMode::Slow,
            AgcMode::Auto,
        ];
        for mode in &modes {
            let parsed: AgcMode = mode.to_string().parse().expect("should parse back");
            assert_eq!(*mode, parsed);
        }
    }

    #[test]
    fn meter_type_from_str() {
        assert_eq!("s".parse::<MeterType>().unwrap(), MeterType::SMeterMain);
        assert_eq!("SWR".parse::<MeterType>().unwrap(), MeterType::Swr);
        assert_eq!("vdd".parse::<MeterType>().unwrap(), MeterType::SupplyVoltage);
        assert!("bogus".parse::<MeterType>().is_err());
    }

    #[test]
    fn power_amp_ranges() {
        assert_eq!(PowerAmp::Field.power_range(), (1, 10));
        assert_eq!(PowerAmp::Spa1.power_range(), (5, 100));
    }

    #[test]
    fn power_amp_from_str() {
        assert_eq!("field".parse::<PowerAmp>().unwrap(), PowerAmp::Field);
        assert_eq!("spa-1".parse::<PowerAmp>().unwrap(), PowerAmp::Spa1);
        assert_eq!("2".parse::<PowerAmp>().unwrap(), PowerAmp::Spa1);
    }

    #[test]
    fn firmware_cpu_from_str() {
        assert_eq!("main".parse::<FirmwareCpu>().unwrap(), FirmwareCpu::Main);
        assert_eq!("fc-80".parse::<FirmwareCpu>().unwrap(), FirmwareCpu::Fc80);
        assert_eq!("3".parse::<FirmwareCpu>().unwrap(), FirmwareCpu::Dsp);
    }

    #[test]
    fn scan_mode_from_str() {
        assert_eq!("stop".parse::<ScanMode>().unwrap(), ScanMode::Stop);
        assert_eq!("up".parse::<ScanMode>().unwrap(), ScanMode::Up);
        assert_eq!("2".parse::<ScanMode>().unwrap(), ScanMode::Down);
    }

    #[test]
    fn frequency_range_contains() {
        let range = FrequencyRange::new(30_000, 470_000_000);
        assert!(range.contains(30_000));
        assert!(range.contains(14_250_000));
        assert!(range.contains(470_000_000));
        assert!(!range.contains(29_999));
        assert!(!range.contains(470_000_001));
    }

    #[test]
    fn frequency_range_display() {
        let range = FrequencyRange::new(7_000_000, 7_300_000);
        assert_eq!(range.to_string(), "7000000-7300000 Hz");
    }

    #[test]
    fn capabilities_default() {
        let caps = Capabilities::default();
        assert!(!caps.has_sub_receiver);
        assert!(caps.supported_modes.is_empty());
        assert_eq!(caps.max_power_watts, 0.0);
    }
}
