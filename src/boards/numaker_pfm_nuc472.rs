//! NuMaker-PFM-NUC472 board configuration.
//!
//! The NUC472 header UART is not on D0/D1, so the shield is wired to port
//! pins directly; only reset goes through the header.

use super::{Esp8266Pins, Pin, Port};

/// NuMaker-PFM-NUC472 board constants.
pub struct NumakerPfmNuc472;

impl NumakerPfmNuc472 {
    /// Shield wiring: TX PD_15, RX PF_0, RTS PD_14, CTS PD_13, reset D2.
    pub const EXTERNAL_ESP8266: Esp8266Pins = Esp8266Pins::uart(
        Pin::port(Port::D, 15),
        Pin::port(Port::F, 0),
        Some(Pin::port(Port::D, 14)),
        Some(Pin::port(Port::D, 13)),
        Some(Pin::Digital(2)),
    );

    /// Build-system target name.
    pub const TARGET_NAME: &'static str = "NUMAKER_PFM_NUC472";

    /// Board name.
    pub const BOARD_NAME: &'static str = "NuMaker-PFM-NUC472";
}
