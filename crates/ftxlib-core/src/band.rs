//! Band identification for the FTX-1 band-select table.
//!
//! Provides a [`Band`] enum covering the fifteen entries of the radio's
//! band-select command: the amateur bands from 160 meters through 70
//! centimeters plus the AIR band and the general-coverage (GEN) entry.
//! The primary use cases are converting a raw frequency (in hertz) to its
//! band designation and driving per-band sweeps.
//!
//! # Example
//!
//! ```
//! use ftxlib_core::Band;
//!
//! let band = Band::from_freq(14_074_000).unwrap();
//! assert_eq!(band, Band::Band20m);
//! assert_eq!(band.to_string(), "20m");
//! assert!(!band.is_warc());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::FrequencyRange;

/// An entry in the radio's band-select table.
///
/// Ordered to match the radio's own band list. Band edges follow ITU
/// Region 2 allocations where regions differ; the radio accepts direct
/// frequency entry outside these edges on the GEN band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// 160 meters (1.8–2.0 MHz).
    Band160m,
    /// 80 meters (3.5–4.0 MHz).
    Band80m,
    /// 60 meters (5.3305–5.4035 MHz).
    Band60m,
    /// 40 meters (7.0–7.3 MHz).
    Band40m,
    /// 30 meters (10.1–10.15 MHz). WARC band.
    Band30m,
    /// 20 meters (14.0–14.35 MHz).
    Band20m,
    /// 17 meters (18.068–18.168 MHz). WARC band.
    Band17m,
    /// 15 meters (21.0–21.45 MHz).
    Band15m,
    /// 12 meters (24.89–24.99 MHz). WARC band.
    Band12m,
    /// 10 meters (28.0–29.7 MHz).
    Band10m,
    /// 6 meters (50.0–54.0 MHz).
    Band6m,
    /// General coverage — everything the receiver tunes outside the
    /// amateur allocations (labelled 70 MHz on European units).
    Gen,
    /// Airband (108–137 MHz, AM aviation).
    Air,
    /// 2 meters (144.0–148.0 MHz).
    Band2m,
    /// 70 centimeters (430.0–450.0 MHz).
    Band70cm,
}

/// All bands in the radio's band-select order.
const ALL_BANDS: &[Band] = &[
    Band::Band160m,
    Band::Band80m,
    Band::Band60m,
    Band::Band40m,
    Band::Band30m,
    Band::Band20m,
    Band::Band17m,
    Band::Band15m,
    Band::Band12m,
    Band::Band10m,
    Band::Band6m,
    Band::Gen,
    Band::Air,
    Band::Band2m,
    Band::Band70cm,
];

impl Band {
    /// Returns the band containing the given frequency.
    ///
    /// GEN spans the whole receive range, so it is checked last and only
    /// matches frequencies no other band claims. Returns `None` only for
    /// frequencies outside the receiver's coverage entirely.
    pub fn from_freq(freq_hz: u64) -> Option<Band> {
        ALL_BANDS
            .iter()
            .copied()
            .filter(|band| *band != Band::Gen)
            .find(|band| band.freq_range().contains(freq_hz))
            .or_else(|| Band::Gen.freq_range().contains(freq_hz).then_some(Band::Gen))
    }

    /// Returns the frequency range (lower and upper edges) for this band.
    pub fn freq_range(&self) -> FrequencyRange {
        match self {
            Band::Band160m => FrequencyRange::new(1_800_000, 2_000_000),
            Band::Band80m => FrequencyRange::new(3_500_000, 4_000_000),
            Band::Band60m => FrequencyRange::new(5_330_500, 5_403_500),
            Band::Band40m => FrequencyRange::new(7_000_000, 7_300_000),
            Band::Band30m => FrequencyRange::new(10_100_000, 10_150_000),
            Band::Band20m => FrequencyRange::new(14_000_000, 14_350_000),
            Band::Band17m => FrequencyRange::new(18_068_000, 18_168_000),
            Band::Band15m => FrequencyRange::new(21_000_000, 21_450_000),
            Band::Band12m => FrequencyRange::new(24_890_000, 24_990_000),
            Band::Band10m => FrequencyRange::new(28_000_000, 29_700_000),
            Band::Band6m => FrequencyRange::new(50_000_000, 54_000_000),
            Band::Gen => FrequencyRange::new(30_000, 470_000_000),
            Band::Air => FrequencyRange::new(108_000_000, 137_000_000),
            Band::Band2m => FrequencyRange::new(144_000_000, 148_000_000),
            Band::Band70cm => FrequencyRange::new(430_000_000, 450_000_000),
        }
    }

    /// Returns `true` if this is a WARC band (30m, 17m, or 12m).
    ///
    /// The World Administrative Radio Conference bands are excluded from
    /// most amateur radio contests.
    pub fn is_warc(&self) -> bool {
        matches!(self, Band::Band30m | Band::Band17m | Band::Band12m)
    }

    /// Returns the short band name (e.g. "20m", "70cm", "AIR").
    pub fn name(&self) -> &'static str {
        match self {
            Band::Band160m => "160m",
            Band::Band80m => "80m",
            Band::Band60m => "60m",
            Band::Band40m => "40m",
            Band::Band30m => "30m",
            Band::Band20m => "20m",
            Band::Band17m => "17m",
            Band::Band15m => "15m",
            Band::Band12m => "12m",
            Band::Band10m => "10m",
            Band::Band6m => "6m",
            Band::Gen => "GEN",
            Band::Air => "AIR",
            Band::Band2m => "2m",
            Band::Band70cm => "70cm",
        }
    }

    /// Returns a slice of all bands in the radio's band-select order.
    pub fn all() -> &'static [Band] {
        ALL_BANDS
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when a string cannot be parsed into a [`Band`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBandError(String);

impl fmt::Display for ParseBandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown band: '{}'", self.0)
    }
}

impl std::error::Error for ParseBandError {}

impl FromStr for Band {
    type Err = ParseBandError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "160m" | "160" => Ok(Band::Band160m),
            "80m" | "80" => Ok(Band::Band80m),
            "60m" | "60" => Ok(Band::Band60m),
            "40m" | "40" => Ok(Band::Band40m),
            "30m" | "30" => Ok(Band::Band30m),
            "20m" | "20" => Ok(Band::Band20m),
            "17m" | "17" => Ok(Band::Band17m),
            "15m" | "15" => Ok(Band::Band15m),
            "12m" | "12" => Ok(Band::Band12m),
            "10m" | "10" => Ok(Band::Band10m),
            "6m" | "6" => Ok(Band::Band6m),
            "gen" => Ok(Band::Gen),
            "air" => Ok(Band::Air),
            "2m" | "2" => Ok(Band::Band2m),
            "70cm" | "70" => Ok(Band::Band70cm),
            _ => Err(ParseBandError(s.to_string())),
        }
    }
}
