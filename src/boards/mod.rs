//! Board identities and ESP8266 pin tables.
//!
//! Each supported NuMaker board has a helper struct with its pin assignments as
//! associated constants, in the same spirit as a board support package. The
//! [`Board`] enum ties them together and answers the only question the selector
//! asks: which pins does the ESP8266 use for a given [`AttachmentMode`]?
//!
//! # Supported Boards
//!
//! | Board | On-board ESP8266 | External ESP8266 |
//! |-------|------------------|------------------|
//! | NuMaker-IoT-M487 | yes | yes |
//! | NuMaker-PFM-M487 | no | yes |
//! | NuMaker-PFM-M2351 | yes (power switched) | yes |
//! | NuMaker-PFM-NANO130 | no | yes |
//! | NuMaker-PFM-NUC472 | no | yes |
//! | NuMaker-PFM-M453 | no | yes |
//!
//! Anything else is [`Board::Generic`] and has no table entry.

pub mod numaker_iot_m487;
pub mod numaker_pfm_m2351;
pub mod numaker_pfm_m453;
pub mod numaker_pfm_m487;
pub mod numaker_pfm_nano130;
pub mod numaker_pfm_nuc472;

pub use numaker_iot_m487::NumakerIotM487;
pub use numaker_pfm_m2351::NumakerPfmM2351;
pub use numaker_pfm_m453::NumakerPfmM453;
pub use numaker_pfm_m487::NumakerPfmM487;
pub use numaker_pfm_nano130::NumakerPfmNano130;
pub use numaker_pfm_nuc472::NumakerPfmNuc472;

use crate::config::AttachmentMode;

// =============================================================================
// Pin Identifiers
// =============================================================================

/// GPIO port letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl Port {
    const fn letter(self) -> char {
        match self {
            Port::A => 'A',
            Port::B => 'B',
            Port::C => 'C',
            Port::D => 'D',
            Port::E => 'E',
            Port::F => 'F',
            Port::G => 'G',
            Port::H => 'H',
        }
    }
}

/// Board pin identifier
///
/// Either a GPIO port pin (`PH_8`) or an Arduino UNO header alias (`D1`, `A3`)
/// that the board package resolves to a port pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pin {
    /// Port pin, e.g. `PD_15`
    Port(Port, u8),
    /// Arduino digital header pin `D0`..`D15`
    Digital(u8),
    /// Arduino analog header pin `A0`..`A5`
    Analog(u8),
}

impl Pin {
    /// Port pin shorthand
    #[must_use]
    pub const fn port(port: Port, index: u8) -> Self {
        Pin::Port(port, index)
    }
}

impl core::fmt::Display for Pin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Pin::Port(port, index) => write!(f, "P{}_{}", port.letter(), index),
            Pin::Digital(n) => write!(f, "D{n}"),
            Pin::Analog(n) => write!(f, "A{n}"),
        }
    }
}

// =============================================================================
// Power Enable
// =============================================================================

/// Electrical sense of a module power-control line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerPolarity {
    /// Driving the line high powers the module
    ActiveHigh,
    /// Driving the line high cuts power (a "power-off" line)
    ActiveLow,
}

/// Module power-control line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerEnable {
    /// Control pin
    pub pin: Pin,
    /// Which level powers the module
    pub polarity: PowerPolarity,
}

// =============================================================================
// ESP8266 Pin Assignment
// =============================================================================

/// ESP8266 AT-module wiring
///
/// `None` fields are not connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Esp8266Pins {
    /// UART TX (MCU to module)
    pub tx: Pin,
    /// UART RX (module to MCU)
    pub rx: Pin,
    /// UART RTS
    pub rts: Option<Pin>,
    /// UART CTS
    pub cts: Option<Pin>,
    /// Module hardware reset
    pub reset: Option<Pin>,
    /// Module power control
    pub power: Option<PowerEnable>,
}

impl Esp8266Pins {
    /// UART-only wiring: TX, RX, RTS, CTS and reset
    #[must_use]
    pub const fn uart(
        tx: Pin,
        rx: Pin,
        rts: Option<Pin>,
        cts: Option<Pin>,
        reset: Option<Pin>,
    ) -> Self {
        Self {
            tx,
            rx,
            rts,
            cts,
            reset,
            power: None,
        }
    }

    /// Add a power-control line
    #[must_use]
    pub const fn with_power(mut self, power: PowerEnable) -> Self {
        self.power = Some(power);
        self
    }

    /// True if UART hardware flow control is wired
    #[must_use]
    pub const fn has_flow_control(&self) -> bool {
        self.rts.is_some() && self.cts.is_some()
    }
}

// =============================================================================
// Board Identity
// =============================================================================

/// Board being built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Board {
    /// NuMaker-IoT-M487
    NumakerIotM487,
    /// NuMaker-PFM-M487
    NumakerPfmM487,
    /// NuMaker-PFM-M2351
    NumakerPfmM2351,
    /// NuMaker-PFM-NANO130
    NumakerPfmNano130,
    /// NuMaker-PFM-NUC472
    NumakerPfmNuc472,
    /// NuMaker-PFM-M453
    NumakerPfmM453,
    /// Any target without a pin table
    #[default]
    Generic,
}

impl Board {
    /// Every board with a pin table
    pub const ALL: [Board; 6] = [
        Board::NumakerIotM487,
        Board::NumakerPfmM487,
        Board::NumakerPfmM2351,
        Board::NumakerPfmNano130,
        Board::NumakerPfmNuc472,
        Board::NumakerPfmM453,
    ];

    /// Build-system target name, e.g. `NUMAKER_IOT_M487`
    #[must_use]
    pub const fn target_name(self) -> &'static str {
        match self {
            Board::NumakerIotM487 => NumakerIotM487::TARGET_NAME,
            Board::NumakerPfmM487 => NumakerPfmM487::TARGET_NAME,
            Board::NumakerPfmM2351 => NumakerPfmM2351::TARGET_NAME,
            Board::NumakerPfmNano130 => NumakerPfmNano130::TARGET_NAME,
            Board::NumakerPfmNuc472 => NumakerPfmNuc472::TARGET_NAME,
            Board::NumakerPfmM453 => NumakerPfmM453::TARGET_NAME,
            Board::Generic => "GENERIC",
        }
    }

    /// Parse a build-system target name (case-insensitive, optional `TARGET_` prefix)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let name = name
            .get(..7)
            .filter(|p| p.eq_ignore_ascii_case("TARGET_"))
            .map_or(name, |_| &name[7..]);
        Self::ALL
            .iter()
            .copied()
            .find(|b| b.target_name().eq_ignore_ascii_case(name))
    }

    /// ESP8266 wiring for `mode`, `None` if the board has no table entry
    #[must_use]
    pub const fn esp8266_pins(self, mode: AttachmentMode) -> Option<Esp8266Pins> {
        match mode {
            AttachmentMode::OnBoard => match self {
                Board::NumakerIotM487 => Some(NumakerIotM487::ONBOARD_ESP8266),
                Board::NumakerPfmM2351 => Some(NumakerPfmM2351::ONBOARD_ESP8266),
                _ => None,
            },
            AttachmentMode::External => match self {
                Board::NumakerIotM487 => Some(NumakerIotM487::EXTERNAL_ESP8266),
                Board::NumakerPfmM487 => Some(NumakerPfmM487::EXTERNAL_ESP8266),
                Board::NumakerPfmM2351 => Some(NumakerPfmM2351::EXTERNAL_ESP8266),
                Board::NumakerPfmNano130 => Some(NumakerPfmNano130::EXTERNAL_ESP8266),
                Board::NumakerPfmNuc472 => Some(NumakerPfmNuc472::EXTERNAL_ESP8266),
                Board::NumakerPfmM453 => Some(NumakerPfmM453::EXTERNAL_ESP8266),
                Board::Generic => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::string::ToString;

    use super::*;

    #[test]
    fn pin_display_uses_board_package_spelling() {
        assert_eq!(Pin::port(Port::H, 8).to_string(), "PH_8");
        assert_eq!(Pin::port(Port::D, 15).to_string(), "PD_15");
        assert_eq!(Pin::Digital(1).to_string(), "D1");
        assert_eq!(Pin::Analog(3).to_string(), "A3");
    }

    #[test]
    fn board_names_round_trip() {
        for board in Board::ALL {
            assert_eq!(Board::from_name(board.target_name()), Some(board));
        }
        assert_eq!(Board::from_name("target_numaker_pfm_m453"), Some(Board::NumakerPfmM453));
        assert_eq!(Board::from_name("NUCLEO_F429ZI"), None);
    }

    #[test]
    fn every_board_has_an_external_table() {
        for board in Board::ALL {
            assert!(board.esp8266_pins(AttachmentMode::External).is_some(), "{board:?}");
        }
    }

    #[test]
    fn only_two_boards_have_onboard_modules() {
        let onboard: usize = Board::ALL
            .iter()
            .filter(|b| b.esp8266_pins(AttachmentMode::OnBoard).is_some())
            .count();
        assert_eq!(onboard, 2);
        assert!(Board::NumakerPfmM487.esp8266_pins(AttachmentMode::OnBoard).is_none());
    }

    #[test]
    fn generic_board_has_no_tables() {
        assert!(Board::Generic.esp8266_pins(AttachmentMode::OnBoard).is_none());
        assert!(Board::Generic.esp8266_pins(AttachmentMode::External).is_none());
        assert_eq!(Board::default(), Board::Generic);
    }

    #[test]
    fn only_m2351_onboard_is_power_switched() {
        for board in Board::ALL {
            for mode in [AttachmentMode::OnBoard, AttachmentMode::External] {
                let Some(pins) = board.esp8266_pins(mode) else {
                    continue;
                };
                let expect = board == Board::NumakerPfmM2351 && mode == AttachmentMode::OnBoard;
                assert_eq!(pins.power.is_some(), expect, "{board:?} {mode:?}");
            }
        }
    }
}
