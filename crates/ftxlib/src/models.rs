//! Station model definitions for the FTX-1.
//!
//! The FTX-1 is a modular station: the Field head on its own transmits up
//! to 10 W, and docked to the SPA-1 station amplifier it reaches 100 W.
//! Both configurations speak the same CAT protocol; what differs is the
//! valid power range and which amplifier the `PC` command addresses. The
//! model definition captures that difference so the builder and the rig
//! can validate power settings before they reach the wire.

use ftxlib_core::{Capabilities, FrequencyRange, OperatingMode, PowerAmp};

/// A concrete FTX-1 station configuration.
#[derive(Debug, Clone)]
pub struct Ftx1Model {
    /// Human-readable model name, e.g. "FTX-1 Field".
    pub name: &'static str,
    /// Which amplifier the power setting addresses.
    pub amp: PowerAmp,
    /// Factory-default CAT baud rate.
    pub default_baud_rate: u32,
    /// Capability summary for this configuration.
    pub capabilities: Capabilities,
}

fn base_capabilities(max_power_watts: f32) -> Capabilities {
    Capabilities {
        has_sub_receiver: true,
        has_split: true,
        has_cw_keyer: true,
        supported_modes: OperatingMode::ALL.to_vec(),
        receive_range: FrequencyRange::new(30_000, 470_000_000),
        max_power_watts,
    }
}

/// The FTX-1 Field head on its own (1-10 W).
pub fn ftx1_field() -> Ftx1Model {
    Ftx1Model {
        name: "FTX-1 Field",
        amp: PowerAmp::Field,
        default_baud_rate: 38_400,
        capabilities: base_capabilities(10.0),
    }
}

/// The FTX-1 docked to the SPA-1 station amplifier (5-100 W).
pub fn ftx1_spa1() -> Ftx1Model {
    Ftx1Model {
        name: "FTX-1 SPA-1",
        amp: PowerAmp::Spa1,
        default_baud_rate: 38_400,
        capabilities: base_capabilities(100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_model() {
        let model = ftx1_field();
        assert_eq!(model.name, "FTX-1 Field");
        assert_eq!(model.amp, PowerAmp::Field);
        assert_eq!(model.default_baud_rate, 38_400);
        assert!((model.capabilities.max_power_watts - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn spa1_model() {
        let model = ftx1_spa1();
        assert_eq!(model.amp, PowerAmp::Spa1);
        assert!((model.capabilities.max_power_watts - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn models_share_receiver_capabilities() {
        for model in [ftx1_field(), ftx1_spa1()] {
            assert!(model.capabilities.has_sub_receiver);
            assert!(model.capabilities.has_split);
            assert!(model.capabilities.has_cw_keyer);
            assert_eq!(model.capabilities.supported_modes.len(), 17);
            assert!(model.capabilities.receive_range.contains(14_250_000));
            assert!(model.capabilities.receive_range.contains(435_000_000));
        }
    }

    #[test]
    fn power_range_tracks_amp() {
        assert_eq!(ftx1_field().amp.power_range(), (1, 10));
        assert_eq!(ftx1_spa1().amp.power_range(), (5, 100));
    }
}
