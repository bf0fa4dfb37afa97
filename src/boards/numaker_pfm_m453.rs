//! NuMaker-PFM-M453 board configuration.

use super::{Esp8266Pins, Pin};

/// NuMaker-PFM-M453 board constants.
pub struct NumakerPfmM453;

impl NumakerPfmM453 {
    /// Shield wiring. The M453 routes its spare UART to the analog header.
    pub const EXTERNAL_ESP8266: Esp8266Pins = Esp8266Pins::uart(
        Pin::Analog(3),
        Pin::Analog(2),
        Some(Pin::Analog(5)),
        Some(Pin::Analog(4)),
        Some(Pin::Digital(2)),
    );

    /// Build-system target name.
    pub const TARGET_NAME: &'static str = "NUMAKER_PFM_M453";

    /// Board name.
    pub const BOARD_NAME: &'static str = "NuMaker-PFM-M453";
}
