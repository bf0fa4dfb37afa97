//! NuMaker-IoT-M487 board configuration (M487 + on-board ESP8266).
//!
//! The IoT board carries an ESP-12 module on UART1 with its reset line on
//! PH_3. The Arduino header can also host an external ESP8266 shield, wired
//! the same way as on the PFM-M487.

use super::{Esp8266Pins, Pin, Port};

/// NuMaker-IoT-M487 board constants.
pub struct NumakerIotM487;

impl NumakerIotM487 {
    // =========================================================================
    // On-board ESP8266
    // =========================================================================

    /// UART TX to the on-board module.
    pub const ESP_TX: Pin = Pin::port(Port::H, 8);

    /// UART RX from the on-board module.
    pub const ESP_RX: Pin = Pin::port(Port::H, 9);

    /// Module reset (active low).
    pub const ESP_RST: Pin = Pin::port(Port::H, 3);

    /// On-board module wiring. No hardware flow control.
    pub const ONBOARD_ESP8266: Esp8266Pins =
        Esp8266Pins::uart(Self::ESP_TX, Self::ESP_RX, None, None, Some(Self::ESP_RST));

    // =========================================================================
    // External ESP8266 (Arduino header)
    // =========================================================================

    /// Shield wiring on the Arduino header.
    pub const EXTERNAL_ESP8266: Esp8266Pins = Esp8266Pins::uart(
        Pin::Digital(1),
        Pin::Digital(0),
        Some(Pin::Analog(2)),
        Some(Pin::Analog(3)),
        Some(Pin::Digital(2)),
    );

    // =========================================================================
    // Board Identification
    // =========================================================================

    /// Build-system target name.
    pub const TARGET_NAME: &'static str = "NUMAKER_IOT_M487";

    /// Board name.
    pub const BOARD_NAME: &'static str = "NuMaker-IoT-M487";

    /// Get a human-readable description of the board.
    #[must_use]
    pub const fn description() -> &'static str {
        "NuMaker-IoT-M487: M487 + on-board ESP8266 (UART1 PH_8/PH_9, reset PH_3)"
    }
}
