//! NuMaker-PFM-NANO130 board configuration.

use super::{Esp8266Pins, Pin, Port};

/// NuMaker-PFM-NANO130 board constants.
pub struct NumakerPfmNano130;

impl NumakerPfmNano130 {
    /// Shield wiring. Flow control uses port pins PB_6/PB_7 instead of the
    /// analog header.
    pub const EXTERNAL_ESP8266: Esp8266Pins = Esp8266Pins::uart(
        Pin::Digital(1),
        Pin::Digital(0),
        Some(Pin::port(Port::B, 6)),
        Some(Pin::port(Port::B, 7)),
        Some(Pin::Digital(2)),
    );

    /// Build-system target name.
    pub const TARGET_NAME: &'static str = "NUMAKER_PFM_NANO130";

    /// Board name.
    pub const BOARD_NAME: &'static str = "NuMaker-PFM-NANO130";
}
