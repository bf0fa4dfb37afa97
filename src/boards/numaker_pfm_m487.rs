//! NuMaker-PFM-M487 board configuration.
//!
//! No radio on board; an ESP8266 shield plugs into the Arduino header.

use super::{Esp8266Pins, Pin};

/// NuMaker-PFM-M487 board constants.
pub struct NumakerPfmM487;

impl NumakerPfmM487 {
    /// Shield wiring: TX D1, RX D0, RTS A2, CTS A3, reset D2.
    pub const EXTERNAL_ESP8266: Esp8266Pins = Esp8266Pins::uart(
        Pin::Digital(1),
        Pin::Digital(0),
        Some(Pin::Analog(2)),
        Some(Pin::Analog(3)),
        Some(Pin::Digital(2)),
    );

    /// Build-system target name.
    pub const TARGET_NAME: &'static str = "NUMAKER_PFM_M487";

    /// Board name.
    pub const BOARD_NAME: &'static str = "NuMaker-PFM-M487";
}
