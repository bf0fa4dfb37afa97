//! NuMaker-PFM-M2351 board configuration (M2351 + power-switched ESP8266).
//!
//! The on-board ESP8266 sits behind a load switch controlled by PD_7. The line
//! is a power-*off* control: high cuts the module supply, low powers it. It
//! comes out of reset high, so the module is unpowered until the WiFi
//! interface is first brought up.

use super::{Esp8266Pins, Pin, Port, PowerEnable, PowerPolarity};

/// NuMaker-PFM-M2351 board constants.
pub struct NumakerPfmM2351;

impl NumakerPfmM2351 {
    // =========================================================================
    // On-board ESP8266
    // =========================================================================

    /// UART TX to the on-board module.
    pub const ESP_TX: Pin = Pin::port(Port::D, 1);

    /// UART RX from the on-board module.
    pub const ESP_RX: Pin = Pin::port(Port::D, 0);

    /// UART RTS.
    pub const ESP_RTS: Pin = Pin::port(Port::D, 3);

    /// UART CTS.
    pub const ESP_CTS: Pin = Pin::port(Port::D, 2);

    /// Module power-off line (high = unpowered).
    pub const ESP_PWR_OFF: PowerEnable = PowerEnable {
        pin: Pin::port(Port::D, 7),
        polarity: PowerPolarity::ActiveLow,
    };

    /// On-board module wiring. The reset line is not routed.
    pub const ONBOARD_ESP8266: Esp8266Pins = Esp8266Pins::uart(
        Self::ESP_TX,
        Self::ESP_RX,
        Some(Self::ESP_RTS),
        Some(Self::ESP_CTS),
        None,
    )
    .with_power(Self::ESP_PWR_OFF);

    // =========================================================================
    // External ESP8266 (Arduino header)
    // =========================================================================

    /// Shield wiring. RTS/CTS are swapped relative to the M487 header.
    pub const EXTERNAL_ESP8266: Esp8266Pins = Esp8266Pins::uart(
        Pin::Digital(1),
        Pin::Digital(0),
        Some(Pin::Analog(3)),
        Some(Pin::Analog(2)),
        Some(Pin::Digital(2)),
    );

    // =========================================================================
    // Board Identification
    // =========================================================================

    /// Build-system target name.
    pub const TARGET_NAME: &'static str = "NUMAKER_PFM_M2351";

    /// Board name.
    pub const BOARD_NAME: &'static str = "NuMaker-PFM-M2351";

    /// Get a human-readable description of the board.
    #[must_use]
    pub const fn description() -> &'static str {
        "NuMaker-PFM-M2351: M2351 + on-board ESP8266 (UART PD_1/PD_0, RTS/CTS PD_3/PD_2, power-off PD_7)"
    }
}
