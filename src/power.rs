//! WiFi module power control
//!
//! Some boards gate the ESP8266 supply through a GPIO-driven load switch. The
//! module needs its rail to settle on both sides of the transition, so
//! [`PowerSwitch::power_on`] waits [`POWER_SETTLE_MS`] before and after
//! driving the line. The wait is a blocking [`DelayNs`] call on the caller.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

use crate::boards::PowerPolarity;
use crate::constants::POWER_SETTLE_MS;
use crate::error::{ConfigError, ConfigResult};

/// Module power switch driven by a GPIO
///
/// # Example
///
/// ```ignore
/// let pwr_off = Output::new(peripherals.PD7, Level::High);
/// let mut switch = PowerSwitch::new(pwr_off, PowerPolarity::ActiveLow);
/// switch.power_on(&mut delay)?;
/// ```
#[derive(Debug)]
pub struct PowerSwitch<P> {
    pin: P,
    polarity: PowerPolarity,
}

impl<P: StatefulOutputPin> PowerSwitch<P> {
    /// Wrap `pin`; its current output level is left untouched
    pub fn new(pin: P, polarity: PowerPolarity) -> Self {
        Self { pin, polarity }
    }

    /// Line polarity
    pub fn polarity(&self) -> PowerPolarity {
        self.polarity
    }

    /// True if the line currently powers the module
    pub fn is_powered(&mut self) -> ConfigResult<bool> {
        let high = self.pin.is_set_high().map_err(|_| ConfigError::GpioError)?;
        Ok(match self.polarity {
            PowerPolarity::ActiveHigh => high,
            PowerPolarity::ActiveLow => !high,
        })
    }

    /// Power the module if it is off
    ///
    /// Returns `true` if the line was switched (and both settling waits ran),
    /// `false` if the module was already powered.
    pub fn power_on<D: DelayNs>(&mut self, delay: &mut D) -> ConfigResult<bool> {
        if self.is_powered()? {
            return Ok(false);
        }

        delay.delay_ms(POWER_SETTLE_MS);
        self.drive(true)?;
        delay.delay_ms(POWER_SETTLE_MS);

        Ok(true)
    }

    /// Cut module power. No settling wait.
    pub fn power_off(&mut self) -> ConfigResult<()> {
        self.drive(false)
    }

    /// Get mutable access to the pin
    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    /// Consume the switch and return the pin
    pub fn into_pin(self) -> P {
        self.pin
    }

    fn drive(&mut self, powered: bool) -> ConfigResult<()> {
        let high = match self.polarity {
            PowerPolarity::ActiveHigh => powered,
            PowerPolarity::ActiveLow => !powered,
        };
        let result = if high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| ConfigError::GpioError)
    }
}

/// Placeholder pin type for selectors without a power switch
///
/// Reads as low and ignores writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPowerPin;

impl ErrorType for NoPowerPin {
    type Error = Infallible;
}

impl OutputPin for NoPowerPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl StatefulOutputPin for NoPowerPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(false)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(true)
    }
}
