//! Default interface selector
//!
//! [`DefaultInterfaces`] owns the interface drivers for one board. Each family
//! is built on first access and lives as long as the selector; there is no
//! path back to "unconstructed". Because every accessor takes `&mut self`, two
//! instances of the same family can never coexist.
//!
//! # Resolution
//!
//! | Interface type | Credentials | [`default_interface`](DefaultInterfaces::default_interface) |
//! |----------------|-------------|------|
//! | Ethernet | any | `Ok(Some(Ethernet))` |
//! | WiFi | configured | `Ok(Some(Wifi))`, credentials applied |
//! | WiFi | none | `Ok(None)` |
//! | unset, Mesh, Cellular | any | `Err(NoDefaultInterface)` |
//!
//! # Example
//!
//! ```ignore
//! let config = NetworkConfig::from_build_env()?;
//! let pwr_off = Output::new(peripherals.PD7, Level::High);
//!
//! let mut net = DefaultInterfaces::new(config, Factory, delay).with_power_pin(pwr_off);
//!
//! if let Some(mut iface) = net.default_interface()? {
//!     iface.connect()?;
//! }
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::StatefulOutputPin;

use crate::boards::PowerPolarity;
use crate::config::{BoardFallback, InterfaceType, NetworkConfig};
use crate::constants::ESP8266_DEBUG_DEFAULT;
use crate::error::{ConfigError, ConfigResult, Result};
use crate::netif::{DefaultInterface, InterfaceFactory, WifiModule, apply_wifi_defaults};
use crate::power::{NoPowerPin, PowerSwitch};

/// Owner of the board's default network interfaces
pub struct DefaultInterfaces<'a, F: InterfaceFactory, D, P = NoPowerPin> {
    config: NetworkConfig<'a>,
    factory: F,
    delay: D,
    power: Option<PowerSwitch<P>>,
    ethernet: Option<F::Ethernet>,
    wifi: Option<F::Wifi>,
}

impl<'a, F: InterfaceFactory, D: DelayNs> DefaultInterfaces<'a, F, D, NoPowerPin> {
    /// Create a selector; no driver is constructed yet
    pub fn new(config: NetworkConfig<'a>, factory: F, delay: D) -> Self {
        Self {
            config,
            factory,
            delay,
            power: None,
            ethernet: None,
            wifi: None,
        }
    }
}

impl<'a, F: InterfaceFactory, D: DelayNs, P: StatefulOutputPin> DefaultInterfaces<'a, F, D, P> {
    /// Attach the WiFi module power pin
    ///
    /// Polarity is taken from the board's pin table, or active-high if the
    /// table has no power line for the configured attachment mode.
    pub fn with_power_pin<Q: StatefulOutputPin>(self, pin: Q) -> DefaultInterfaces<'a, F, D, Q> {
        let polarity = self
            .config
            .board
            .esp8266_pins(self.config.attachment)
            .and_then(|pins| pins.power)
            .map_or(PowerPolarity::ActiveHigh, |power| power.polarity);
        self.with_power_switch(PowerSwitch::new(pin, polarity))
    }

    /// Attach an explicitly configured power switch
    pub fn with_power_switch<Q: StatefulOutputPin>(
        self,
        switch: PowerSwitch<Q>,
    ) -> DefaultInterfaces<'a, F, D, Q> {
        DefaultInterfaces {
            config: self.config,
            factory: self.factory,
            delay: self.delay,
            power: Some(switch),
            ethernet: self.ethernet,
            wifi: self.wifi,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &NetworkConfig<'a> {
        &self.config
    }

    /// Interface factory
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Power switch, if one was attached
    pub fn power_switch(&mut self) -> Option<&mut PowerSwitch<P>> {
        self.power.as_mut()
    }

    /// True once the Ethernet driver exists
    pub fn has_ethernet(&self) -> bool {
        self.ethernet.is_some()
    }

    /// True once the WiFi driver exists
    pub fn has_wifi(&self) -> bool {
        self.wifi.is_some()
    }

    /// The Ethernet interface, constructed on first call
    pub fn ethernet(&mut self) -> &mut F::Ethernet {
        let factory = &mut self.factory;
        self.ethernet.get_or_insert_with(|| {
            debug!("constructing default Ethernet interface");
            factory.ethernet()
        })
    }

    /// The WiFi interface, constructed on first call
    ///
    /// Credentials are *not* applied; see
    /// [`set_default_wifi_parameters`](Self::set_default_wifi_parameters).
    ///
    /// On first call this may power up the module, blocking for the two
    /// settling intervals. That only happens when the board's pin table has a
    /// power line; an attached power pin is otherwise left untouched.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnsupportedBoard`] if the board has no pin table and
    ///   the fallback policy is [`BoardFallback::Reject`]
    /// - [`ConfigError::PowerPinMissing`] if the board switches module power
    ///   but no power pin was attached
    /// - [`ConfigError::GpioError`] if the power pin fails
    pub fn wifi(&mut self) -> Result<&mut F::Wifi> {
        let wifi = match self.wifi.take() {
            Some(wifi) => wifi,
            None => self.build_wifi()?,
        };
        Ok(self.wifi.insert(wifi))
    }

    /// Apply the configured default credentials to the WiFi interface
    ///
    /// No-op if no SSID is configured or the WiFi interface has not been
    /// constructed yet.
    pub fn set_default_wifi_parameters(&mut self) {
        if let Some(wifi) = self.wifi.as_mut() {
            apply_wifi_defaults(wifi, self.config.credentials.as_ref());
        }
    }

    /// The board's default network interface
    ///
    /// WiFi without a configured SSID is not considered usable and yields
    /// `Ok(None)` without constructing the driver.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NoDefaultInterface`] if the interface type is unset,
    ///   Mesh or Cellular
    /// - any error from [`wifi`](Self::wifi)
    pub fn default_interface(
        &mut self,
    ) -> Result<Option<DefaultInterface<'_, F::Ethernet, F::Wifi>>> {
        match self.config.interface {
            Some(InterfaceType::Ethernet) => Ok(Some(DefaultInterface::Ethernet(self.ethernet()))),
            Some(InterfaceType::Wifi) => {
                let Some(credentials) = self.config.credentials else {
                    debug!("WiFi selected but no default SSID configured");
                    return Ok(None);
                };
                let wifi = self.wifi()?;
                apply_wifi_defaults(wifi, Some(&credentials));
                Ok(Some(DefaultInterface::Wifi {
                    wifi,
                    defaults: Some(credentials),
                }))
            }
            other => {
                warn!("no default interface for {:?}", other);
                Err(ConfigError::NoDefaultInterface.into())
            }
        }
    }

    fn wifi_module(&self) -> ConfigResult<WifiModule> {
        let NetworkConfig {
            board,
            attachment,
            fallback,
            ..
        } = self.config;

        match board.esp8266_pins(attachment) {
            Some(pins) => Ok(WifiModule::Wired {
                pins,
                debug: ESP8266_DEBUG_DEFAULT,
            }),
            None => match fallback {
                BoardFallback::DriverDefaults => {
                    debug!("{:?} has no {:?} pin table, using driver defaults", board, attachment);
                    Ok(WifiModule::DriverDefaults)
                }
                BoardFallback::Reject => Err(ConfigError::UnsupportedBoard),
            },
        }
    }

    fn build_wifi(&mut self) -> Result<F::Wifi> {
        let module = self.wifi_module()?;

        // Only table entries with a power line get sequenced; that is the
        // on-board M2351 module.
        let needs_power = module.pins().is_some_and(|pins| pins.power.is_some());
        match (needs_power, self.power.as_mut()) {
            (true, Some(switch)) => {
                if switch.power_on(&mut self.delay)? {
                    info!("WiFi module powered on");
                }
            }
            (true, None) => return Err(ConfigError::PowerPinMissing.into()),
            (false, Some(_)) => {
                warn!("{:?} has no WiFi power line, power pin left untouched", self.config.board);
            }
            (false, None) => {}
        }

        debug!("constructing default WiFi interface");
        Ok(self.factory.wifi(&module))
    }
}
