//! CAT command builders and reply parsers for the FTX-1.
//!
//! This module provides functions to construct CAT command bodies for the
//! radio's operations (frequency, mode, PTT, power, AGC, audio levels,
//! meters, VFO/memory, split, clarifier, band, scan, CW, filters, noise
//! reduction, info/identity, utility toggles) and to parse the
//! corresponding replies.
//!
//! All functions are pure -- they produce or consume strings without
//! performing any I/O. The transaction engine in [`crate::rig`] sends the
//! bodies over a transport and feeds received reply bodies back into the
//! parsers.
//!
//! # Reply parsing
//!
//! Replies echo the command mnemonic (plus side digit where present), so
//! every parser takes the **full** reply body and slices its fields at
//! fixed character offsets. The offset tables come from the FTX-1 CAT
//! reference; a reply shorter than a parser's layout fails with
//! [`Error::Protocol`] rather than decoding partially. Frequencies are
//! always 9 ASCII digits in hertz, zero-padded on the left. Mode codes
//! are single characters (`1`-`9`, `A`-`F`, `H`, `I`).

use std::ops::Range;

use ftxlib_core::{
    AgcMode, Band, Error, FirmwareCpu, MeterReading, MeterType, OperatingMode, PowerAmp,
    RadioInfo, Result, ScanMode, Side,
};

use crate::protocol::is_error_reply;

/// CAT identity reported by the FTX-1 (`ID;` reply payload).
pub const CAT_ID: &str = "0840";

/// Frequency range the receiver tunes, in hertz (inclusive).
pub const FREQUENCY_RANGE_HZ: (u64, u64) = (30_000, 470_000_000);

// ---------------------------------------------------------------
// Wire code mappings
// ---------------------------------------------------------------

/// Convert an [`OperatingMode`] to its CAT mode code character.
fn mode_to_wire(mode: OperatingMode) -> char {
    match mode {
        OperatingMode::LSB => '1',
        OperatingMode::USB => '2',
        OperatingMode::CwUpper => '3',
        OperatingMode::FM => '4',
        OperatingMode::AM => '5',
        OperatingMode::RttyLower => '6',
        OperatingMode::CwLower => '7',
        OperatingMode::DataLower => '8',
        OperatingMode::RttyUpper => '9',
        OperatingMode::DataFM => 'A',
        OperatingMode::FmNarrow => 'B',
        OperatingMode::DataUpper => 'C',
        OperatingMode::AmNarrow => 'D',
        OperatingMode::PSK => 'E',
        OperatingMode::DataFmNarrow => 'F',
        OperatingMode::C4fmDN => 'H',
        OperatingMode::C4fmVW => 'I',
    }
}

/// Convert a CAT mode code character to an [`OperatingMode`].
///
/// Mode codes are:
/// - `1` = LSB, `2` = USB, `3` = CW-U, `4` = FM, `5` = AM
/// - `6` = RTTY-L, `7` = CW-L, `8` = DATA-L, `9` = RTTY-U
/// - `A` = DATA-FM, `B` = FM-N, `C` = DATA-U, `D` = AM-N
/// - `E` = PSK, `F` = DATA-FM-N, `H` = C4FM DN, `I` = C4FM VW
///
/// Code `G` is unassigned on this radio.
fn mode_from_wire(code: char) -> Result<OperatingMode> {
    match code {
        '1' => Ok(OperatingMode::LSB),
        '2' => Ok(OperatingMode::USB),
        '3' => Ok(OperatingMode::CwUpper),
        '4' => Ok(OperatingMode::FM),
        '5' => Ok(OperatingMode::AM),
        '6' => Ok(OperatingMode::RttyLower),
        '7' => Ok(OperatingMode::CwLower),
        '8' => Ok(OperatingMode::DataLower),
        '9' => Ok(OperatingMode::RttyUpper),
        'A' => Ok(OperatingMode::DataFM),
        'B' => Ok(OperatingMode::FmNarrow),
        'C' => Ok(OperatingMode::DataUpper),
        'D' => Ok(OperatingMode::AmNarrow),
        'E' => Ok(OperatingMode::PSK),
        'F' => Ok(OperatingMode::DataFmNarrow),
        'H' => Ok(OperatingMode::C4fmDN),
        'I' => Ok(OperatingMode::C4fmVW),
        _ => Err(Error::Protocol(format!("unknown mode code: {code:?}"))),
    }
}

/// Convert an [`AgcMode`] to its CAT digit.
fn agc_to_wire(agc: AgcMode) -> char {
    match agc {
        AgcMode::Off => '0',
        AgcMode::Fast => '1',
        AgcMode::Mid => '2',
        AgcMode::Slow => '3',
        AgcMode::Auto => '4',
    }
}

/// Convert a CAT AGC digit to an [`AgcMode`].
fn agc_from_wire(code: char) -> Result<AgcMode> {
    match code {
        '0' => Ok(AgcMode::Off),
        '1' => Ok(AgcMode::Fast),
        '2' => Ok(AgcMode::Mid),
        '3' => Ok(AgcMode::Slow),
        '4' => Ok(AgcMode::Auto),
        _ => Err(Error::Protocol(format!("unknown AGC code: {code:?}"))),
    }
}

/// Meter selector digit for the `RM` command.
fn meter_code(meter: MeterType) -> char {
    match meter {
        MeterType::SMeterMain => '1',
        MeterType::SMeterSub => '2',
        MeterType::Compression => '3',
        MeterType::Alc => '4',
        MeterType::PowerOutput => '5',
        MeterType::Swr => '6',
        MeterType::DrainCurrent => '7',
        MeterType::SupplyVoltage => '8',
    }
}

/// Amplifier selector digit for the `PC` command.
fn amp_code(amp: PowerAmp) -> char {
    match amp {
        PowerAmp::Field => '1',
        PowerAmp::Spa1 => '2',
    }
}

/// Convert a `PC` reply amplifier digit to a [`PowerAmp`].
fn amp_from_code(code: char) -> Result<PowerAmp> {
    match code {
        '1' => Ok(PowerAmp::Field),
        '2' => Ok(PowerAmp::Spa1),
        _ => Err(Error::Protocol(format!("unknown amplifier code: {code:?}"))),
    }
}

/// CPU selector digit for the `VE` command.
fn cpu_code(cpu: FirmwareCpu) -> char {
    match cpu {
        FirmwareCpu::Main => '0',
        FirmwareCpu::Display => '1',
        FirmwareCpu::Sdr => '2',
        FirmwareCpu::Dsp => '3',
        FirmwareCpu::Spa1 => '4',
        FirmwareCpu::Fc80 => '5',
    }
}

/// Scan control digit for the `SC` command.
fn scan_code(mode: ScanMode) -> char {
    match mode {
        ScanMode::Stop => '0',
        ScanMode::Up => '1',
        ScanMode::Down => '2',
    }
}

/// Band-select code for the `BS` command (two digits on the wire).
fn band_code(band: Band) -> u8 {
    match band {
        Band::Band160m => 0,
        Band::Band80m => 1,
        Band::Band60m => 2,
        Band::Band40m => 3,
        Band::Band30m => 4,
        Band::Band20m => 5,
        Band::Band17m => 6,
        Band::Band15m => 7,
        Band::Band12m => 8,
        Band::Band10m => 9,
        Band::Band6m => 10,
        Band::Gen => 11,
        Band::Air => 12,
        Band::Band2m => 13,
        Band::Band70cm => 14,
    }
}

/// Frequency mnemonic for a side: `FA` = MAIN, `FB` = SUB.
fn freq_mnemonic(side: Side) -> &'static str {
    match side {
        Side::Main => "FA",
        Side::Sub => "FB",
    }
}

fn flag(on: bool) -> char {
    if on { '1' } else { '0' }
}

// ---------------------------------------------------------------
// Reply field accessors
// ---------------------------------------------------------------

/// Check that a reply body echoes the expected command prefix.
///
/// Also recognizes the rig's `?` error reply, which it reports as a
/// protocol error naming the rejected command. A timed-out transaction
/// hands the parsers an empty body, which fails here as well.
fn expect_reply(body: &str, prefix: &str) -> Result<()> {
    if is_error_reply(body) {
        return Err(Error::Protocol(format!(
            "rig rejected {prefix} command with error reply"
        )));
    }
    if !body.starts_with(prefix) {
        return Err(Error::Protocol(format!(
            "expected {prefix} reply, got: {body:?}"
        )));
    }
    Ok(())
}

/// Slice a fixed-offset field out of a reply body, failing if the body is
/// too short to contain it.
fn field<'a>(body: &'a str, range: Range<usize>, what: &str) -> Result<&'a str> {
    let end = range.end;
    body.get(range).ok_or_else(|| {
        Error::Protocol(format!(
            "reply too short for {what}: need {end} characters, got {}: {body:?}",
            body.len()
        ))
    })
}

/// Single character at a fixed offset in a reply body.
fn char_field(body: &str, index: usize, what: &str) -> Result<char> {
    let s = field(body, index..index + 1, what)?;
    s.chars()
        .next()
        .ok_or_else(|| Error::Protocol(format!("empty {what} field in reply: {body:?}")))
}

/// Parse a fixed-offset field as an integer.
fn int_field<T>(body: &str, range: Range<usize>, what: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let s = field(body, range, what)?;
    s.parse::<T>()
        .map_err(|e| Error::Protocol(format!("invalid {what} digits: {s:?} ({e})")))
}

/// Parse a `{sign}{4 digits}` field as a signed offset in hertz.
fn signed_field(body: &str, sign_index: usize, what: &str) -> Result<i32> {
    let sign = match char_field(body, sign_index, what)? {
        '+' => 1i32,
        '-' => -1i32,
        other => {
            return Err(Error::Protocol(format!(
                "expected + or - for {what} sign, got {other:?}"
            )));
        }
    };
    let magnitude: i32 = int_field(body, sign_index + 1..sign_index + 5, what)?;
    Ok(sign * magnitude)
}

// ---------------------------------------------------------------
// Command builders — frequency and mode
// ---------------------------------------------------------------

/// Build a "read VFO frequency" command body (`FA` for MAIN, `FB` for SUB).
pub fn cmd_read_frequency(side: Side) -> String {
    freq_mnemonic(side).to_string()
}

/// Build a "set VFO frequency" command body (`FA{freq:09}` / `FB{freq:09}`).
///
/// The frequency is encoded as exactly 9 zero-padded ASCII digits in hertz.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the frequency is outside the
/// receiver's 30 kHz - 470 MHz coverage.
pub fn cmd_set_frequency(side: Side, freq_hz: u64) -> Result<String> {
    let (low, high) = FREQUENCY_RANGE_HZ;
    if freq_hz < low || freq_hz > high {
        return Err(Error::InvalidParameter(format!(
            "frequency {freq_hz} Hz out of range ({low}-{high} Hz)"
        )));
    }
    Ok(format!("{}{freq_hz:09}", freq_mnemonic(side)))
}

/// Build a "read operating mode" command body (`MD{side}`).
pub fn cmd_read_mode(side: Side) -> String {
    format!("MD{}", side.index())
}

/// Build a "set operating mode" command body (`MD{side}{code}`).
pub fn cmd_set_mode(side: Side, mode: OperatingMode) -> String {
    format!("MD{}{}", side.index(), mode_to_wire(mode))
}

// ---------------------------------------------------------------
// Command builders — PTT and power
// ---------------------------------------------------------------

/// Build a "read PTT state" command body (`TX`).
pub fn cmd_read_ptt() -> String {
    "TX".to_string()
}

/// Build a "set PTT" command body.
///
/// - `TX1` keys the transmitter.
/// - `TX0` returns to receive.
pub fn cmd_set_ptt(on: bool) -> String {
    format!("TX{}", flag(on))
}

/// Build a "read RF power" command body (`PC`).
pub fn cmd_read_power() -> String {
    "PC".to_string()
}

/// Build a "set RF power" command body (`PC{amp}{watts:03}`).
///
/// The amplifier selector addresses either the Field head (1-10 W) or the
/// SPA-1 station amplifier (5-100 W).
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `watts` is outside the selected
/// amplifier's range.
pub fn cmd_set_power(amp: PowerAmp, watts: u32) -> Result<String> {
    let (min, max) = amp.power_range();
    if watts < min || watts > max {
        return Err(Error::InvalidParameter(format!(
            "power {watts} W out of range for {amp} ({min}-{max} W)"
        )));
    }
    Ok(format!("PC{}{watts:03}", amp_code(amp)))
}

// ---------------------------------------------------------------
// Command builders — AGC, audio levels, meters
// ---------------------------------------------------------------

/// Build a "read AGC mode" command body (`GT{side}`).
pub fn cmd_read_agc(side: Side) -> String {
    format!("GT{}", side.index())
}

/// Build a "set AGC mode" command body (`GT{side}{code}`).
pub fn cmd_set_agc(side: Side, agc: AgcMode) -> String {
    format!("GT{}{}", side.index(), agc_to_wire(agc))
}

/// Build a "read AF gain" command body (`AG{side}`).
pub fn cmd_read_af_gain(side: Side) -> String {
    format!("AG{}", side.index())
}

/// Build a "set AF gain" command body (`AG{side}{level:03}`).
///
/// The level is the full 0-255 wire range; the `u8` argument covers it
/// exactly, so no further validation applies.
pub fn cmd_set_af_gain(side: Side, level: u8) -> String {
    format!("AG{}{level:03}", side.index())
}

/// Build a "read squelch level" command body (`SQ{side}`).
pub fn cmd_read_squelch(side: Side) -> String {
    format!("SQ{}", side.index())
}

/// Build a "set squelch level" command body (`SQ{side}{level:03}`).
pub fn cmd_set_squelch(side: Side, level: u8) -> String {
    format!("SQ{}{level:03}", side.index())
}

/// Build a "read S-meter" command body (`SM{side}`).
///
/// The reply carries a 3-digit raw count from 000 to 255.
pub fn cmd_read_s_meter(side: Side) -> String {
    format!("SM{}", side.index())
}

/// Build a "read meter" command body (`RM{type}`).
///
/// The reply carries two adjacent 3-digit raw counts; see
/// [`parse_meter_reply`].
pub fn cmd_read_meter(meter: MeterType) -> String {
    format!("RM{}", meter_code(meter))
}

// ---------------------------------------------------------------
// Command builders — VFO, memory, split
// ---------------------------------------------------------------

/// Build a "toggle VFO/memory mode" command body (`VM{side}`).
pub fn cmd_vfo_memory_toggle(side: Side) -> String {
    format!("VM{}", side.index())
}

/// Build a "select memory channel" command body (`MC{side}{channel:05}`).
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `channel` is outside 1-99.
pub fn cmd_set_memory_channel(side: Side, channel: u8) -> Result<String> {
    if channel < 1 || channel > 99 {
        return Err(Error::InvalidParameter(format!(
            "memory channel {channel} out of range (1-99)"
        )));
    }
    Ok(format!("MC{}{channel:05}", side.index()))
}

/// Build a "copy memory to VFO" command body (`MA` for MAIN, `MB` for SUB).
pub fn cmd_memory_to_vfo(side: Side) -> String {
    match side {
        Side::Main => "MA".to_string(),
        Side::Sub => "MB".to_string(),
    }
}

/// Build a "read split state" command body (`ST`).
pub fn cmd_read_split() -> String {
    "ST".to_string()
}

/// Build a "set split" command body (`ST1` / `ST0`).
pub fn cmd_set_split(on: bool) -> String {
    format!("ST{}", flag(on))
}

/// Build a "swap VFO" command body (`SV`).
///
/// Exchanges the MAIN and SUB VFO contents.
pub fn cmd_swap_vfo() -> String {
    "SV".to_string()
}

// ---------------------------------------------------------------
// Command builders — clarifier
// ---------------------------------------------------------------

/// Build the clarifier on/off sub-command body (`CF{side}00{rx}{tx}000`).
///
/// Setting the clarifier is two sequential transactions: this flags
/// sub-command first, then [`cmd_set_clarifier_offset`]. The radio
/// addresses them with the `00`/`01` sub-selector field.
pub fn cmd_set_clarifier_flags(side: Side, rx_on: bool, tx_on: bool) -> String {
    format!("CF{}00{}{}000", side.index(), flag(rx_on), flag(tx_on))
}

/// Build the clarifier offset sub-command body (`CF{side}01{sign}{offset:04}`).
///
/// The offset encodes an explicit `+` or `-` followed by the 4-digit
/// zero-padded magnitude. Zero encodes as `+0000`.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the offset magnitude exceeds
/// 9995 Hz.
pub fn cmd_set_clarifier_offset(side: Side, offset_hz: i32) -> Result<String> {
    if offset_hz < -9995 || offset_hz > 9995 {
        return Err(Error::InvalidParameter(format!(
            "clarifier offset {offset_hz} Hz out of range (-9995 to +9995 Hz)"
        )));
    }
    let sign = if offset_hz < 0 { '-' } else { '+' };
    Ok(format!(
        "CF{}01{sign}{:04}",
        side.index(),
        offset_hz.unsigned_abs()
    ))
}

// ---------------------------------------------------------------
// Command builders — band and scan
// ---------------------------------------------------------------

/// Build a "band up" command body (`BU{side}`).
pub fn cmd_band_up(side: Side) -> String {
    format!("BU{}", side.index())
}

/// Build a "band down" command body (`BD{side}`).
pub fn cmd_band_down(side: Side) -> String {
    format!("BD{}", side.index())
}

/// Build a "band select" command body (`BS{side}{band:02}`).
pub fn cmd_set_band(side: Side, band: Band) -> String {
    format!("BS{}{:02}", side.index(), band_code(band))
}

/// Build a "scan control" command body (`SC{side}{mode}`).
pub fn cmd_set_scan(side: Side, mode: ScanMode) -> String {
    format!("SC{}{}", side.index(), scan_code(mode))
}

// ---------------------------------------------------------------
// Command builders — CW
// ---------------------------------------------------------------

/// Build a "keyer on/off" command body (`KR1` / `KR0`).
pub fn cmd_set_keyer(on: bool) -> String {
    format!("KR{}", flag(on))
}

/// Build a "read keyer speed" command body (`KS`).
pub fn cmd_read_keyer_speed() -> String {
    "KS".to_string()
}

/// Build a "set keyer speed" command body (`KS{wpm:03}`).
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `wpm` is outside 4-60.
pub fn cmd_set_keyer_speed(wpm: u8) -> Result<String> {
    if wpm < 4 || wpm > 60 {
        return Err(Error::InvalidParameter(format!(
            "CW speed {wpm} WPM out of range (4-60)"
        )));
    }
    Ok(format!("KS{wpm:03}"))
}

/// Build a "set CW pitch" command body (`KP{code:02}`).
///
/// The pitch encodes as a derived index: `(pitch_hz - 300) / 10`. The
/// radio steps pitch in 10 Hz increments from 300 to 1050 Hz; inputs that
/// are not a multiple of 10 Hz round **down** to the nearest step.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `pitch_hz` is outside
/// 300-1050 Hz.
pub fn cmd_set_cw_pitch(pitch_hz: u16) -> Result<String> {
    if pitch_hz < 300 || pitch_hz > 1050 {
        return Err(Error::InvalidParameter(format!(
            "CW pitch {pitch_hz} Hz out of range (300-1050 Hz)"
        )));
    }
    let code = (pitch_hz - 300) / 10;
    Ok(format!("KP{code:02}"))
}

/// Build a "break-in on/off" command body (`BI1` / `BI0`).
pub fn cmd_set_break_in(on: bool) -> String {
    format!("BI{}", flag(on))
}

// ---------------------------------------------------------------
// Command builders — filters and noise reduction
// ---------------------------------------------------------------

/// Build a "set IF shift" command body (`IS{side}0{sign}{shift:04}`).
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if the shift is outside
/// -1200..=1200 Hz or not a multiple of the radio's 20 Hz step.
pub fn cmd_set_if_shift(side: Side, shift_hz: i16) -> Result<String> {
    if shift_hz < -1200 || shift_hz > 1200 {
        return Err(Error::InvalidParameter(format!(
            "IF shift {shift_hz} Hz out of range (-1200 to +1200 Hz)"
        )));
    }
    if shift_hz % 20 != 0 {
        return Err(Error::InvalidParameter(format!(
            "IF shift {shift_hz} Hz is not a multiple of 20 Hz"
        )));
    }
    let sign = if shift_hz < 0 { '-' } else { '+' };
    Ok(format!(
        "IS{}0{sign}{:04}",
        side.index(),
        shift_hz.unsigned_abs()
    ))
}

/// Build a "set filter width" command body (`SH{side}0{width:02}`).
///
/// The width is an index into the mode-dependent bandwidth table, not a
/// value in hertz.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `width` is outside 0-23.
pub fn cmd_set_filter_width(side: Side, width: u8) -> Result<String> {
    if width > 23 {
        return Err(Error::InvalidParameter(format!(
            "filter width code {width} out of range (0-23)"
        )));
    }
    Ok(format!("SH{}0{width:02}", side.index()))
}

/// Build a "narrow filter on/off" command body (`NA{side}{flag}`).
pub fn cmd_set_narrow(side: Side, on: bool) -> String {
    format!("NA{}{}", side.index(), flag(on))
}

/// Build a "set noise blanker level" command body (`NL{side}{level:03}`).
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `level` is outside 0-10.
pub fn cmd_set_noise_blanker(side: Side, level: u8) -> Result<String> {
    if level > 10 {
        return Err(Error::InvalidParameter(format!(
            "noise blanker level {level} out of range (0-10)"
        )));
    }
    Ok(format!("NL{}{level:03}", side.index()))
}

/// Build a "set noise reduction level" command body (`RL{side}{level:02}`).
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `level` is outside 0-10.
pub fn cmd_set_noise_reduction(side: Side, level: u8) -> Result<String> {
    if level > 10 {
        return Err(Error::InvalidParameter(format!(
            "noise reduction level {level} out of range (0-10)"
        )));
    }
    Ok(format!("RL{}{level:02}", side.index()))
}

/// Build a "digital notch on/off" command body (`BC{side}{flag}`).
pub fn cmd_set_digital_notch(side: Side, on: bool) -> String {
    format!("BC{}{}", side.index(), flag(on))
}

// ---------------------------------------------------------------
// Command builders — information and utility
// ---------------------------------------------------------------

/// Build an "information" command body (`IF`).
///
/// The reply is a fixed-layout composite of the MAIN VFO state; see
/// [`parse_radio_info_reply`].
pub fn cmd_read_info() -> String {
    "IF".to_string()
}

/// Build a "read CAT identity" command body (`ID`).
pub fn cmd_read_id() -> String {
    "ID".to_string()
}

/// Build a "read firmware version" command body (`VE{cpu}`).
pub fn cmd_read_firmware_version(cpu: FirmwareCpu) -> String {
    format!("VE{}", cpu_code(cpu))
}

/// Build a "set auto-information" command body (`AI1` / `AI0`).
///
/// With auto-information on, the rig pushes unsolicited state-change
/// frames; this crate's request/reply engine expects it off.
pub fn cmd_set_auto_information(on: bool) -> String {
    format!("AI{}", flag(on))
}

/// Build a "set dial/panel lock" command body (`LK1` / `LK0`).
pub fn cmd_set_lock(on: bool) -> String {
    format!("LK{}", flag(on))
}

// ---------------------------------------------------------------
// Reply parsers
// ---------------------------------------------------------------

/// Parse a frequency reply (`FA{freq:09}` / `FB{freq:09}`).
///
/// # Errors
///
/// Returns [`Error::Protocol`] if the reply does not echo the expected
/// mnemonic, is not exactly 9 digits of payload, or contains non-digit
/// characters.
pub fn parse_frequency_reply(body: &str, side: Side) -> Result<u64> {
    let mnemonic = freq_mnemonic(side);
    expect_reply(body, mnemonic)?;
    if body.len() != 11 {
        return Err(Error::Protocol(format!(
            "expected 9 digits for frequency, got {} characters: {:?}",
            body.len().saturating_sub(2),
            &body[2..]
        )));
    }
    int_field(body, 2..11, "frequency")
}

/// Parse an operating-mode reply (`MD{side}{code}`).
pub fn parse_mode_reply(body: &str, side: Side) -> Result<OperatingMode> {
    expect_reply(body, &format!("MD{}", side.index()))?;
    mode_from_wire(char_field(body, 3, "mode code")?)
}

/// Parse a PTT reply (`TX{state}`).
///
/// State `2` is CAT-initiated transmit; `0` is receive and `1` is
/// mic-initiated transmit. Only `2` reads as transmitting.
pub fn parse_ptt_reply(body: &str) -> Result<bool> {
    expect_reply(body, "TX")?;
    Ok(char_field(body, 2, "PTT state")? == '2')
}

/// Parse an RF power reply (`PC{amp}{watts:03}`).
///
/// Returns the amplifier the setting applies to and the power in watts.
pub fn parse_power_reply(body: &str) -> Result<(PowerAmp, u32)> {
    expect_reply(body, "PC")?;
    let amp = amp_from_code(char_field(body, 2, "amplifier code")?)?;
    let watts = int_field(body, 3..6, "power")?;
    Ok((amp, watts))
}

/// Parse an AGC reply (`GT{side}{code}`).
pub fn parse_agc_reply(body: &str, side: Side) -> Result<AgcMode> {
    expect_reply(body, &format!("GT{}", side.index()))?;
    agc_from_wire(char_field(body, 3, "AGC code")?)
}

fn parse_level_reply(body: &str, mnemonic: &str, side: Side, what: &str) -> Result<u8> {
    expect_reply(body, &format!("{mnemonic}{}", side.index()))?;
    int_field(body, 3..6, what)
}

/// Parse an AF gain reply (`AG{side}{level:03}`). Levels run 0-255.
pub fn parse_af_gain_reply(body: &str, side: Side) -> Result<u8> {
    parse_level_reply(body, "AG", side, "AF gain")
}

/// Parse a squelch reply (`SQ{side}{level:03}`). Levels run 0-255.
pub fn parse_squelch_reply(body: &str, side: Side) -> Result<u8> {
    parse_level_reply(body, "SQ", side, "squelch")
}

/// Parse an S-meter reply (`SM{side}{value:03}`).
///
/// The value is the raw meter count (0-255), not dBm or S-units; see
/// [`ftxlib_core::s_units_from_raw`] for display conversion.
pub fn parse_s_meter_reply(body: &str, side: Side) -> Result<u16> {
    expect_reply(body, &format!("SM{}", side.index()))?;
    int_field(body, 3..6, "S-meter")
}

/// Parse a meter reply (`RM{type}{primary:03}{secondary:03}`).
///
/// Both values are raw counts; their meaning depends on the meter type.
pub fn parse_meter_reply(body: &str, meter: MeterType) -> Result<MeterReading> {
    expect_reply(body, &format!("RM{}", meter_code(meter)))?;
    let primary = int_field(body, 3..6, "primary meter value")?;
    let secondary = int_field(body, 6..9, "secondary meter value")?;
    Ok(MeterReading { primary, secondary })
}

/// Parse a split reply (`ST{state}`). State `1` means split on.
pub fn parse_split_reply(body: &str) -> Result<bool> {
    expect_reply(body, "ST")?;
    Ok(char_field(body, 2, "split state")? == '1')
}

/// Parse a keyer speed reply (`KS{wpm:03}`).
pub fn parse_keyer_speed_reply(body: &str) -> Result<u8> {
    expect_reply(body, "KS")?;
    int_field(body, 2..5, "keyer speed")
}

/// Parse the composite information reply (`IF...`).
///
/// The reply is a single fixed-layout body; every offset is fixed by the
/// protocol:
///
/// | Offset | Length | Field                           |
/// |--------|--------|---------------------------------|
/// | 2      | 5      | Memory channel                  |
/// | 7      | 9      | Frequency (Hz)                  |
/// | 16     | 1      | Clarifier direction (`+`/`-`)   |
/// | 17     | 4      | Clarifier offset magnitude (Hz) |
/// | 21     | 1      | RX clarifier on/off             |
/// | 22     | 1      | TX clarifier on/off             |
/// | 23     | 1      | Mode code                       |
/// | 24     | 1      | VFO/memory flag                 |
/// | 25     | 1      | CTCSS/DCS tone mode             |
/// | 26     | 2      | (reserved)                      |
/// | 28     | 1      | Repeater shift                  |
///
/// # Errors
///
/// Returns [`Error::Protocol`] if the body is shorter than the 29
/// characters this layout requires, or any field fails to decode.
pub fn parse_radio_info_reply(body: &str) -> Result<RadioInfo> {
    expect_reply(body, "IF")?;
    if body.len() < 29 {
        return Err(Error::Protocol(format!(
            "IF reply too short: expected at least 29 characters, got {}: {body:?}",
            body.len()
        )));
    }
    Ok(RadioInfo {
        memory_channel: field(body, 2..7, "memory channel")?.to_string(),
        frequency_hz: int_field(body, 7..16, "frequency")?,
        clarifier_offset_hz: signed_field(body, 16, "clarifier offset")?,
        rx_clarifier: char_field(body, 21, "RX clarifier flag")? == '1',
        tx_clarifier: char_field(body, 22, "TX clarifier flag")? == '1',
        mode: mode_from_wire(char_field(body, 23, "mode code")?)?,
        vfo_memory: char_field(body, 24, "VFO/memory flag")?,
        tone_mode: char_field(body, 25, "tone mode")?,
        repeater_shift: char_field(body, 28, "repeater shift")?,
    })
}

/// Parse a CAT identity reply (`ID{id}`).
///
/// Returns the identity payload as an opaque string; the FTX-1 reports
/// [`CAT_ID`].
pub fn parse_id_reply(body: &str) -> Result<String> {
    expect_reply(body, "ID")?;
    Ok(body[2..].to_string())
}

/// Parse a firmware version reply (`VE{cpu}{version}`).
///
/// Returns the version text after the echoed mnemonic and CPU digit as an
/// opaque string.
pub fn parse_firmware_version_reply(body: &str, cpu: FirmwareCpu) -> Result<String> {
    expect_reply(body, &format!("VE{}", cpu_code(cpu)))?;
    Ok(body[3..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---------------------------------------------------------------
    // Command building — frequency and mode
    // ---------------------------------------------------------------

    #[test]
    fn cmd_read_frequency_bodies() {
        assert_eq!(cmd_read_frequency(Side::Main), "FA");
        assert_eq!(cmd_read_frequency(Side::Sub), "FB");
    }

    #[test]
    fn cmd_set_frequency_main_14250() {
        let cmd = cmd_set_frequency(Side::Main, 14_250_000).unwrap();
        assert_eq!(cmd, "FA014250000");
    }

    #[test]
    fn cmd_set_frequency_sub_7074() {
        let cmd = cmd_set_frequency(Side::Sub, 7_074_000).unwrap();
        assert_eq!(cmd, "FB007074000");
    }

    #[test]
    fn cmd_set_frequency_zero_padded() {
        let cmd = cmd_set_frequency(Side::Main, 1_800_000).unwrap();
        assert_eq!(cmd, "FA001800000");
    }

    #[test]
    fn cmd_set_frequency_coverage_edges() {
        assert_eq!(cmd_set_frequency(Side::Main, 30_000).unwrap(), "FA000030000");
        assert_eq!(
            cmd_set_frequency(Side::Main, 470_000_000).unwrap(),
            "FA470000000"
        );
    }

    #[test]
    fn cmd_set_frequency_rejects_out_of_coverage() {
        assert!(matches!(
            cmd_set_frequency(Side::Main, 29_999),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            cmd_set_frequency(Side::Main, 470_000_001),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn cmd_read_mode_bodies() {
        assert_eq!(cmd_read_mode(Side::Main), "MD0");
        assert_eq!(cmd_read_mode(Side::Sub), "MD1");
    }

    #[test]
    fn cmd_set_mode_main_usb() {
        assert_eq!(cmd_set_mode(Side::Main, OperatingMode::USB), "MD02");
    }

    #[test]
    fn cmd_set_mode_sub_cw() {
        assert_eq!(cmd_set_mode(Side::Sub, OperatingMode::CwUpper), "MD13");
    }

    #[test]
    fn cmd_set_mode_data_upper() {
        assert_eq!(cmd_set_mode(Side::Main, OperatingMode::DataUpper), "MD0C");
    }

    #[test]
    fn cmd_set_mode_c4fm() {
        assert_eq!(cmd_set_mode(Side::Main, OperatingMode::C4fmDN), "MD0H");
        assert_eq!(cmd_set_mode(Side::Main, OperatingMode::C4fmVW), "MD0I");
    }

    // ---------------------------------------------------------------
    // Command building — PTT and power
    // ---------------------------------------------------------------

    #[test]
    fn cmd_ptt_bodies() {
        assert_eq!(cmd_read_ptt(), "TX");
        assert_eq!(cmd_set_ptt(true), "TX1");
        assert_eq!(cmd_set_ptt(false), "TX0");
    }

    #[test]
    fn cmd_set_power_field_5w() {
        assert_eq!(cmd_set_power(PowerAmp::Field, 5).unwrap(), "PC1005");
    }

    #[test]
    fn cmd_set_power_spa1_100w() {
        assert_eq!(cmd_set_power(PowerAmp::Spa1, 100).unwrap(), "PC2100");
    }

    #[test]
    fn cmd_set_power_field_range() {
        assert_eq!(cmd_set_power(PowerAmp::Field, 1).unwrap(), "PC1001");
        assert_eq!(cmd_set_power(PowerAmp::Field, 10).unwrap(), "PC1010");
        assert!(matches!(
            cmd_set_power(PowerAmp::Field, 0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            cmd_set_power(PowerAmp::Field, 11),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn cmd_set_power_spa1_range() {
        assert_eq!(cmd_set_power(PowerAmp::Spa1, 5).unwrap(), "PC2005");
        assert!(matches!(
            cmd_set_power(PowerAmp::Spa1, 4),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            cmd_set_power(PowerAmp::Spa1, 101),
            Err(Error::InvalidParameter(_))
        ));
    }

    // ---------------------------------------------------------------
    // Command building — AGC, levels, meters
    // ---------------------------------------------------------------

    #[test]
    fn cmd_agc_bodies() {
        assert_eq!(cmd_read_agc(Side::Main), "GT0");
        assert_eq!(cmd_read_agc(Side::Sub), "GT1");
        assert_eq!(cmd_set_agc(Side::Main, AgcMode::Auto), "GT04");
        assert_eq!(cmd_set_agc(Side::Sub, AgcMode::Slow), "GT13");
        assert_eq!(cmd_set_agc(Side::Main, AgcMode::Off), "GT00");
    }

    #[test]
    fn cmd_af_gain_bodies() {
        assert_eq!(cmd_read_af_gain(Side::Main), "AG0");
        assert_eq!(cmd_set_af_gain(Side::Main, 255), "AG0255");
        assert_eq!(cmd_set_af_gain(Side::Sub, 0), "AG1000");
    }

    #[test]
    fn cmd_squelch_bodies() {
        assert_eq!(cmd_read_squelch(Side::Sub), "SQ1");
        assert_eq!(cmd_set_squelch(Side::Main, 64), "SQ0064");
    }

    #[test]
    fn cmd_s_meter_bodies() {
        assert_eq!(cmd_read_s_meter(Side::Main), "SM0");
        assert_eq!(cmd_read_s_meter(Side::Sub), "SM1");
    }

    #[test]
    fn cmd_meter_bodies() {
        assert_eq!(cmd_read_meter(MeterType::SMeterMain), "RM1");
        assert_eq!(cmd_read_meter(MeterType::SMeterSub), "RM2");
        assert_eq!(cmd_read_meter(MeterType::Compression), "RM3");
        assert_eq!(cmd_read_meter(MeterType::Alc), "RM4");
        assert_eq!(cmd_read_meter(MeterType::PowerOutput), "RM5");
        assert_eq!(cmd_read_meter(MeterType::Swr), "RM6");
        assert_eq!(cmd_read_meter(MeterType::DrainCurrent), "RM7");
        assert_eq!(cmd_read_meter(MeterType::SupplyVoltage), "RM8");
    }

    // ---------------------------------------------------------------
    // Command building — VFO, memory, split
    // ---------------------------------------------------------------

    #[test]
    fn cmd_vfo_memory_bodies() {
        assert_eq!(cmd_vfo_memory_toggle(Side::Main), "VM0");
        assert_eq!(cmd_vfo_memory_toggle(Side::Sub), "VM1");
        assert_eq!(cmd_memory_to_vfo(Side::Main), "MA");
        assert_eq!(cmd_memory_to_vfo(Side::Sub), "MB");
        assert_eq!(cmd_swap_vfo(), "SV");
    }

    #[test]
    fn cmd_set_memory_channel_bodies() {
        assert_eq!(cmd_set_memory_channel(Side::Main, 1).unwrap(), "MC000001");
        assert_eq!(cmd_set_memory_channel(Side::Main, 42).unwrap(), "MC000042");
        assert_eq!(cmd_set_memory_channel(Side::Sub, 99).unwrap(), "MC100099");
    }

    #[test]
    fn cmd_set_memory_channel_rejects_out_of_range() {
        assert!(matches!(
            cmd_set_memory_channel(Side::Main, 0),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            cmd_set_memory_channel(Side::Main, 100),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn cmd_split_bodies() {
        assert_eq!(cmd_read_split(), "ST");
        assert_eq!(cmd_set_split(true), "ST1");
        assert_eq!(cmd_set_split(false), "ST0");
    }

    // ---------------------------------------------------------------
    // Command building — clarifier
    // ---------------------------------------------------------------

    #[test]
    fn cmd_clarifier_flags_bodies() {
        assert_eq!(cmd_set_clarifier_flags(Side::Main, true, false), "CF00010000");
        assert_eq!(cmd_set_clarifier_flags(Side::Main, true, true), "CF00011000");
        assert_eq!(cmd_set_clarifier_flags(Side::Sub, false, false), "CF10000000");
    }

    #[test]
    fn cmd_clarifier_offset_positive() {
        assert_eq!(
            cmd_set_clarifier_offset(Side::Main, 600).unwrap(),
            "CF001+0600"
        );
    }

    #[test]
    fn cmd_clarifier_offset_negative() {
        assert_eq!(
            cmd_set_clarifier_offset(Side::Main, -125).unwrap(),
            "CF001-0125"
        );
    }

    #[test]
    fn cmd_clarifier_offset_zero_is_positive() {
        assert_eq!(
            cmd_set_clarifier_offset(Side::Sub, 0).unwrap(),
            "CF101+0000"
        );
    }

    #[test]
    fn cmd_clarifier_offset_edges() {
        assert_eq!(
            cmd_set_clarifier_offset(Side::Main, 9995).unwrap(),
            "CF001+9995"
        );
        assert_eq!(
            cmd_set_clarifier_offset(Side::Main, -9995).unwrap(),
            "CF001-9995"
        );
        assert!(matches!(
            cmd_set_clarifier_offset(Side::Main, 9996),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            cmd_set_clarifier_offset(Side::Main, -9996),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn clarifier_offset_sign_round_trip() {
        // One sign character plus a 4-digit magnitude, reconstructible
        // to the original signed value.
        for offset in [-9995, -1, 0, 1, 9995] {
            let body = cmd_set_clarifier_offset(Side::Main, offset).unwrap();
            assert_eq!(body.len(), 10, "body for {offset}: {body:?}");
            let sign_count = body.chars().filter(|c| *c == '+' || *c == '-').count();
            assert_eq!(sign_count, 1, "body for {offset}: {body:?}");

            let sign = if body.as_bytes()[5] == b'-' { -1 } else { 1 };
            let magnitude: i32 = body[6..10].parse().unwrap();
            assert_eq!(sign * magnitude, offset);
        }
    }

    // ---------------------------------------------------------------
    // Command building — band and scan
    // ---------------------------------------------------------------

    #[test]
    fn cmd_band_step_bodies() {
        assert_eq!(cmd_band_up(Side::Main), "BU0");
        assert_eq!(cmd_band_down(Side::Sub), "BD1");
    }

    #[test]
    fn cmd_set_band_bodies() {
        assert_eq!(cmd_set_band(Side::Main, Band::Band160m), "BS000");
        assert_eq!(cmd_set_band(Side::Main, Band::Band20m), "BS005");
        assert_eq!(cmd_set_band(Side::Main, Band::Gen), "BS011");
        assert_eq!(cmd_set_band(Side::Main, Band::Air), "BS012");
        assert_eq!(cmd_set_band(Side::Sub, Band::Band70cm), "BS114");
    }

    #[test]
    fn cmd_set_scan_bodies() {
        assert_eq!(cmd_set_scan(Side::Main, ScanMode::Stop), "SC00");
        assert_eq!(cmd_set_scan(Side::Main, ScanMode::Up), "SC01");
        assert_eq!(cmd_set_scan(Side::Sub, ScanMode::Down), "SC12");
    }

    // ---------------------------------------------------------------
    // Command building — CW
    // ---------------------------------------------------------------

    #[test]
    fn cmd_keyer_bodies() {
        assert_eq!(cmd_set_keyer(true), "KR1");
        assert_eq!(cmd_set_keyer(false), "KR0");
        assert_eq!(cmd_set_break_in(true), "BI1");
        assert_eq!(cmd_set_break_in(false), "BI0");
    }

    #[test]
    fn cmd_keyer_speed_bodies() {
        assert_eq!(cmd_read_keyer_speed(), "KS");
        assert_eq!(cmd_set_keyer_speed(25).unwrap(), "KS025");
        assert_eq!(cmd_set_keyer_speed(4).unwrap(), "KS004");
        assert_eq!(cmd_set_keyer_speed(60).unwrap(), "KS060");
    }

    #[test]
    fn cmd_keyer_speed_rejects_out_of_range() {
        assert!(matches!(
            cmd_set_keyer_speed(3),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            cmd_set_keyer_speed(61),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn cmd_cw_pitch_encodes_derived_index() {
        assert_eq!(cmd_set_cw_pitch(300).unwrap(), "KP00");
        assert_eq!(cmd_set_cw_pitch(700).unwrap(), "KP40");
        assert_eq!(cmd_set_cw_pitch(1050).unwrap(), "KP75");
    }

    #[test]
    fn cmd_cw_pitch_rounds_down_to_step() {
        assert_eq!(cmd_set_cw_pitch(305).unwrap(), "KP00");
        assert_eq!(cmd_set_cw_pitch(449).unwrap(), "KP14");
    }

    #[test]
    fn cmd_cw_pitch_rejects_out_of_range() {
        assert!(matches!(
            cmd_set_cw_pitch(299),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            cmd_set_cw_pitch(1051),
            Err(Error::InvalidParameter(_))
        ));
    }

    // ---------------------------------------------------------------
    // Command building — filters and noise reduction
    // ---------------------------------------------------------------

    #[test]
    fn cmd_if_shift_bodies() {
        assert_eq!(cmd_set_if_shift(Side::Main, 1200).unwrap(), "IS00+1200");
        assert_eq!(cmd_set_if_shift(Side::Main, -200).unwrap(), "IS00-0200");
        assert_eq!(cmd_set_if_shift(Side::Sub, 0).unwrap(), "IS10+0000");
    }

    #[test]
    fn cmd_if_shift_rejects_out_of_range() {
        assert!(matches!(
            cmd_set_if_shift(Side::Main, 1220),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            cmd_set_if_shift(Side::Main, -1220),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn cmd_if_shift_rejects_misaligned() {
        assert!(matches!(
            cmd_set_if_shift(Side::Main, 10),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            cmd_set_if_shift(Side::Main, -1190),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn cmd_filter_width_bodies() {
        assert_eq!(cmd_set_filter_width(Side::Main, 0).unwrap(), "SH0000");
        assert_eq!(cmd_set_filter_width(Side::Main, 12).unwrap(), "SH0012");
        assert_eq!(cmd_set_filter_width(Side::Sub, 23).unwrap(), "SH1023");
        assert!(matches!(
            cmd_set_filter_width(Side::Main, 24),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn cmd_narrow_bodies() {
        assert_eq!(cmd_set_narrow(Side::Main, true), "NA01");
        assert_eq!(cmd_set_narrow(Side::Sub, false), "NA10");
    }

    #[test]
    fn cmd_noise_blanker_bodies() {
        assert_eq!(cmd_set_noise_blanker(Side::Main, 5).unwrap(), "NL0005");
        assert_eq!(cmd_set_noise_blanker(Side::Main, 10).unwrap(), "NL0010");
        assert!(matches!(
            cmd_set_noise_blanker(Side::Main, 11),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn cmd_noise_reduction_bodies() {
        assert_eq!(cmd_set_noise_reduction(Side::Main, 7).unwrap(), "RL007");
        assert_eq!(cmd_set_noise_reduction(Side::Sub, 0).unwrap(), "RL100");
        assert!(matches!(
            cmd_set_noise_reduction(Side::Main, 11),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn cmd_digital_notch_bodies() {
        assert_eq!(cmd_set_digital_notch(Side::Main, true), "BC01");
        assert_eq!(cmd_set_digital_notch(Side::Sub, false), "BC10");
    }

    // ---------------------------------------------------------------
    // Command building — information and utility
    // ---------------------------------------------------------------

    #[test]
    fn cmd_info_bodies() {
        assert_eq!(cmd_read_info(), "IF");
        assert_eq!(cmd_read_id(), "ID");
    }

    #[test]
    fn cmd_firmware_version_bodies() {
        assert_eq!(cmd_read_firmware_version(FirmwareCpu::Main), "VE0");
        assert_eq!(cmd_read_firmware_version(FirmwareCpu::Dsp), "VE3");
        assert_eq!(cmd_read_firmware_version(FirmwareCpu::Fc80), "VE5");
    }

    #[test]
    fn cmd_utility_toggle_bodies() {
        assert_eq!(cmd_set_auto_information(true), "AI1");
        assert_eq!(cmd_set_auto_information(false), "AI0");
        assert_eq!(cmd_set_lock(true), "LK1");
        assert_eq!(cmd_set_lock(false), "LK0");
    }

    // ---------------------------------------------------------------
    // Reply parsing — frequency
    // ---------------------------------------------------------------

    #[test]
    fn parse_freq_main() {
        let freq = parse_frequency_reply("FA014250000", Side::Main).unwrap();
        assert_eq!(freq, 14_250_000);
    }

    #[test]
    fn parse_freq_sub() {
        let freq = parse_frequency_reply("FB007074000", Side::Sub).unwrap();
        assert_eq!(freq, 7_074_000);
    }

    #[test]
    fn parse_freq_wrong_mnemonic() {
        assert!(parse_frequency_reply("FB007074000", Side::Main).is_err());
    }

    #[test]
    fn parse_freq_wrong_length() {
        assert!(parse_frequency_reply("FA0142500", Side::Main).is_err());
        assert!(parse_frequency_reply("FA0142500000", Side::Main).is_err());
    }

    #[test]
    fn parse_freq_non_digit() {
        assert!(parse_frequency_reply("FA01425000A", Side::Main).is_err());
    }

    #[test]
    fn parse_freq_empty_reply() {
        // A timed-out transaction yields an empty body.
        assert!(parse_frequency_reply("", Side::Main).is_err());
    }

    #[test]
    fn parse_freq_error_reply() {
        assert!(parse_frequency_reply("?", Side::Main).is_err());
    }

    #[test]
    fn frequency_round_trip() {
        for freq in [30_000u64, 1_840_000, 14_250_000, 144_174_000, 470_000_000] {
            let body = cmd_set_frequency(Side::Main, freq).unwrap();
            let parsed = parse_frequency_reply(&body, Side::Main).unwrap();
            assert_eq!(parsed, freq);
        }
    }

    // ---------------------------------------------------------------
    // Reply parsing — mode
    // ---------------------------------------------------------------

    #[test]
    fn parse_mode_usb() {
        assert_eq!(
            parse_mode_reply("MD02", Side::Main).unwrap(),
            OperatingMode::USB
        );
    }

    #[test]
    fn parse_mode_sub_side() {
        assert_eq!(
            parse_mode_reply("MD17", Side::Sub).unwrap(),
            OperatingMode::CwLower
        );
    }

    #[test]
    fn parse_mode_wrong_side() {
        assert!(parse_mode_reply("MD12", Side::Main).is_err());
    }

    #[test]
    fn parse_mode_unknown_code() {
        assert!(parse_mode_reply("MD0G", Side::Main).is_err());
        assert!(parse_mode_reply("MD0Z", Side::Main).is_err());
    }

    #[test]
    fn mode_round_trip_all_codes() {
        for mode in OperatingMode::ALL {
            let body = cmd_set_mode(Side::Main, mode);
            let parsed = parse_mode_reply(&body, Side::Main).unwrap();
            assert_eq!(parsed, mode, "round-trip failed for {mode}");
        }
    }

    // ---------------------------------------------------------------
    // Reply parsing — PTT and power
    // ---------------------------------------------------------------

    #[test]
    fn parse_ptt_transmitting() {
        assert!(parse_ptt_reply("TX2").unwrap());
    }

    #[test]
    fn parse_ptt_receiving() {
        assert!(!parse_ptt_reply("TX0").unwrap());
    }

    #[test]
    fn parse_ptt_mic_keyed_reads_as_receive() {
        // Only CAT-initiated transmit (state 2) reads as transmitting.
        assert!(!parse_ptt_reply("TX1").unwrap());
    }

    #[test]
    fn parse_ptt_short_reply() {
        assert!(parse_ptt_reply("TX").is_err());
        assert!(parse_ptt_reply("").is_err());
    }

    #[test]
    fn parse_power_field() {
        assert_eq!(
            parse_power_reply("PC1005").unwrap(),
            (PowerAmp::Field, 5)
        );
    }

    #[test]
    fn parse_power_spa1() {
        assert_eq!(
            parse_power_reply("PC2100").unwrap(),
            (PowerAmp::Spa1, 100)
        );
    }

    #[test]
    fn parse_power_unknown_amp() {
        assert!(parse_power_reply("PC3050").is_err());
    }

    #[test]
    fn parse_power_short_reply() {
        assert!(parse_power_reply("PC105").is_err());
    }

    // ---------------------------------------------------------------
    // Reply parsing — AGC, levels, meters
    // ---------------------------------------------------------------

    #[test]
    fn parse_agc_values() {
        assert_eq!(parse_agc_reply("GT00", Side::Main).unwrap(), AgcMode::Off);
        assert_eq!(parse_agc_reply("GT04", Side::Main).unwrap(), AgcMode::Auto);
        assert_eq!(parse_agc_reply("GT13", Side::Sub).unwrap(), AgcMode::Slow);
    }

    #[test]
    fn parse_agc_unknown_code() {
        assert!(parse_agc_reply("GT09", Side::Main).is_err());
    }

    #[test]
    fn parse_agc_wrong_side() {
        assert!(parse_agc_reply("GT13", Side::Main).is_err());
    }

    #[test]
    fn parse_af_gain_values() {
        assert_eq!(parse_af_gain_reply("AG0255", Side::Main).unwrap(), 255);
        assert_eq!(parse_af_gain_reply("AG1000", Side::Sub).unwrap(), 0);
    }

    #[test]
    fn parse_squelch_values() {
        assert_eq!(parse_squelch_reply("SQ0064", Side::Main).unwrap(), 64);
    }

    #[test]
    fn parse_s_meter_values() {
        assert_eq!(parse_s_meter_reply("SM0093", Side::Main).unwrap(), 93);
        assert_eq!(parse_s_meter_reply("SM1000", Side::Sub).unwrap(), 0);
        assert_eq!(parse_s_meter_reply("SM0255", Side::Main).unwrap(), 255);
    }

    #[test]
    fn parse_s_meter_short_reply() {
        assert!(parse_s_meter_reply("SM00", Side::Main).is_err());
    }

    #[test]
    fn parse_meter_dual_values() {
        let reading = parse_meter_reply("RM6045123", MeterType::Swr).unwrap();
        assert_eq!(reading.primary, 45);
        assert_eq!(reading.secondary, 123);
    }

    #[test]
    fn parse_meter_wrong_type_echo() {
        assert!(parse_meter_reply("RM6045123", MeterType::Alc).is_err());
    }

    // ---------------------------------------------------------------
    // Reply parsing — split and keyer speed
    // ---------------------------------------------------------------

    #[test]
    fn parse_split_states() {
        assert!(parse_split_reply("ST1").unwrap());
        assert!(!parse_split_reply("ST0").unwrap());
    }

    #[test]
    fn parse_keyer_speed_values() {
        assert_eq!(parse_keyer_speed_reply("KS025").unwrap(), 25);
        assert_eq!(parse_keyer_speed_reply("KS004").unwrap(), 4);
    }

    #[test]
    fn parse_keyer_speed_non_digit() {
        assert!(parse_keyer_speed_reply("KS0A5").is_err());
    }

    // ---------------------------------------------------------------
    // Reply parsing — composite info
    // ---------------------------------------------------------------

    #[test]
    fn parse_info_full_layout() {
        // mem 00005, 14.250 MHz, clar +100 Hz, RX clar on, TX clar off,
        // USB, VFO, no tone, simplex.
        let body = "IF00005014250000+010010200000";
        assert_eq!(body.len(), 29);

        let info = parse_radio_info_reply(body).unwrap();
        assert_eq!(info.memory_channel, "00005");
        assert_eq!(info.frequency_hz, 14_250_000);
        assert_eq!(info.clarifier_offset_hz, 100);
        assert!(info.rx_clarifier);
        assert!(!info.tx_clarifier);
        assert_eq!(info.mode, OperatingMode::USB);
        assert_eq!(info.vfo_memory, '0');
        assert_eq!(info.tone_mode, '0');
        assert_eq!(info.repeater_shift, '0');
    }

    #[test]
    fn parse_info_negative_clarifier() {
        let body = "IF00001007074000-025011700000";
        assert_eq!(body.len(), 29);

        let info = parse_radio_info_reply(body).unwrap();
        assert_eq!(info.frequency_hz, 7_074_000);
        assert_eq!(info.clarifier_offset_hz, -250);
        assert!(info.rx_clarifier);
        assert!(info.tx_clarifier);
        assert_eq!(info.mode, OperatingMode::CwLower);
    }

    #[test]
    fn parse_info_too_short() {
        assert!(parse_radio_info_reply("IF00005014250000+0100").is_err());
    }

    #[test]
    fn parse_info_bad_sign() {
        // 29 characters but a digit where the clarifier sign belongs.
        assert!(parse_radio_info_reply("IF000050142500000010010200000").is_err());
    }

    // ---------------------------------------------------------------
    // Reply parsing — identity and firmware
    // ---------------------------------------------------------------

    #[test]
    fn parse_id_payload() {
        assert_eq!(parse_id_reply("ID0840").unwrap(), "0840");
        assert_eq!(parse_id_reply("ID0840").unwrap(), CAT_ID);
    }

    #[test]
    fn parse_id_error_reply() {
        assert!(parse_id_reply("?").is_err());
    }

    #[test]
    fn parse_firmware_version_payload() {
        assert_eq!(
            parse_firmware_version_reply("VE001.07", FirmwareCpu::Main).unwrap(),
            "01.07"
        );
        assert_eq!(
            parse_firmware_version_reply("VE51.00", FirmwareCpu::Fc80).unwrap(),
            "1.00"
        );
    }

    #[test]
    fn parse_firmware_version_wrong_cpu() {
        assert!(parse_firmware_version_reply("VE001.07", FirmwareCpu::Dsp).is_err());
    }
}
