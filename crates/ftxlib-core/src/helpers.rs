//! Formatting and conversion helpers for amateur radio applications.
//!
//! These are small utility functions that virtually every consuming
//! application (loggers, panadapter UIs, CLI tools) needs.

/// Format a frequency in hertz as a human-readable MHz string.
///
/// Returns a string like `"14.074000 MHz"` with six decimal places,
/// which is the standard display precision for amateur radio frequencies.
///
/// # Example
///
/// ```
/// use ftxlib_core::format_freq_mhz;
///
/// assert_eq!(format_freq_mhz(14_074_000), "14.074000 MHz");
/// assert_eq!(format_freq_mhz(432_100_000), "432.100000 MHz");
/// ```
pub fn format_freq_mhz(freq_hz: u64) -> String {
    let mhz = freq_hz as f64 / 1_000_000.0;
    format!("{mhz:.6} MHz")
}

/// Convert a raw S-meter count (0–255) to an S-unit string.
///
/// The radio reports meter deflection as raw counts rather than dBm. The
/// factory calibration puts S9 at a count of about 115, with the top of
/// the scale (255) at roughly S9+60 dB:
/// - Counts 0–115 map linearly onto S0–S9
/// - Counts above 115 map linearly onto "S9+N dB" up to S9+60
///
/// # Example
///
/// ```
/// use ftxlib_core::s_units_from_raw;
///
/// assert_eq!(s_units_from_raw(0), "S0");
/// assert_eq!(s_units_from_raw(115), "S9");
/// assert_eq!(s_units_from_raw(255), "S9+60 dB");
/// ```
pub fn s_units_from_raw(raw: u16) -> String {
    const S9_COUNT: f32 = 115.0;
    const FULL_SCALE: f32 = 255.0;
    let raw = (raw as f32).min(FULL_SCALE);
    if raw > S9_COUNT {
        let over = ((raw - S9_COUNT) / (FULL_SCALE - S9_COUNT) * 60.0).round() as i32;
        format!("S9+{over} dB")
    } else {
        let s = (raw / S9_COUNT * 9.0).round() as i32;
        format!("S{s}")
    }
}
