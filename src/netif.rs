//! Network interface capability traits
//!
//! The selector never talks to a concrete driver. Integrators implement
//! [`EthInterface`] and [`WifiInterface`] for their drivers and hand the
//! selector an [`InterfaceFactory`] that builds them.
//!
//! # Example
//!
//! ```ignore
//! struct Factory;
//!
//! impl InterfaceFactory for Factory {
//!     type Ethernet = NuEmac;
//!     type Wifi = Esp8266<Uart1>;
//!
//!     fn ethernet(&mut self) -> NuEmac {
//!         NuEmac::new()
//!     }
//!
//!     fn wifi(&mut self, module: &WifiModule) -> Esp8266<Uart1> {
//!         match module {
//!             WifiModule::Wired { pins, debug } => Esp8266::with_pins(pins, *debug),
//!             WifiModule::DriverDefaults => Esp8266::default(),
//!         }
//!     }
//! }
//! ```

use crate::boards::Esp8266Pins;
use crate::config::{Credentials, InterfaceType, Security};
use crate::error::InterfaceResult;

// =============================================================================
// Capability Traits
// =============================================================================

/// Common interface operations
pub trait NetworkInterface {
    /// Interface family
    fn interface_type(&self) -> InterfaceType;

    /// Bring the interface up and join the network
    fn connect(&mut self) -> InterfaceResult<()>;

    /// Leave the network
    fn disconnect(&mut self) -> InterfaceResult<()>;

    /// Load statically configured defaults
    ///
    /// Interfaces without configurable defaults keep this no-op.
    fn set_default_parameters(&mut self) {}
}

/// Ethernet interface
pub trait EthInterface: NetworkInterface {}

/// WiFi station interface
pub trait WifiInterface: NetworkInterface {
    /// Set the access point to join on the next [`connect`](NetworkInterface::connect)
    fn set_credentials(
        &mut self,
        ssid: &str,
        password: Option<&str>,
        security: Security,
    ) -> InterfaceResult<()>;
}

/// Apply default WiFi credentials to `wifi`
///
/// No-op when `defaults` is `None`. A driver rejection is logged and dropped;
/// it shows up again when the interface tries to connect.
pub fn apply_wifi_defaults<W: WifiInterface + ?Sized>(
    wifi: &mut W,
    defaults: Option<&Credentials<'_>>,
) {
    let Some(creds) = defaults else {
        return;
    };

    debug!("applying default credentials for {}", creds.ssid());
    if let Err(e) = wifi.set_credentials(creds.ssid(), creds.password(), creds.security()) {
        warn!("default credentials rejected: {:?}", e);
    }
}

// =============================================================================
// Construction
// =============================================================================

/// How the WiFi driver should be constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WifiModule {
    /// Board pin table entry
    Wired {
        /// Module wiring
        pins: Esp8266Pins,
        /// AT-command debug output
        debug: bool,
    },
    /// No table entry; use the driver's compiled-in defaults
    DriverDefaults,
}

impl WifiModule {
    /// Pin table entry, if any
    #[must_use]
    pub const fn pins(&self) -> Option<&Esp8266Pins> {
        match self {
            WifiModule::Wired { pins, .. } => Some(pins),
            WifiModule::DriverDefaults => None,
        }
    }
}

/// Builds the concrete interface drivers
///
/// Construction is infallible; drivers report problems on `connect`.
pub trait InterfaceFactory {
    /// Ethernet driver type
    type Ethernet: EthInterface;
    /// WiFi driver type
    type Wifi: WifiInterface;

    /// Construct the Ethernet driver
    fn ethernet(&mut self) -> Self::Ethernet;

    /// Construct the WiFi driver for `module`
    fn wifi(&mut self, module: &WifiModule) -> Self::Wifi;
}

// =============================================================================
// Default Interface Handle
// =============================================================================

/// Borrowed handle to the board's default interface
///
/// The WiFi variant keeps the configured default credentials, so
/// [`set_default_parameters`](NetworkInterface::set_default_parameters) on
/// the handle (or on [`as_dyn`](Self::as_dyn)) re-applies them.
#[derive(Debug)]
pub enum DefaultInterface<'a, E, W> {
    /// Ethernet default
    Ethernet(&'a mut E),
    /// WiFi default, credentials already applied
    Wifi {
        /// WiFi driver
        wifi: &'a mut W,
        /// Configured default credentials
        defaults: Option<Credentials<'a>>,
    },
}

impl<E: EthInterface, W: WifiInterface> DefaultInterface<'_, E, W> {
    /// Interface family of the handle
    pub fn kind(&self) -> InterfaceType {
        match self {
            DefaultInterface::Ethernet(_) => InterfaceType::Ethernet,
            DefaultInterface::Wifi { .. } => InterfaceType::Wifi,
        }
    }

    /// The WiFi interface, if this is the WiFi default
    pub fn as_wifi(&mut self) -> Option<&mut W> {
        match self {
            DefaultInterface::Wifi { wifi, .. } => Some(wifi),
            DefaultInterface::Ethernet(_) => None,
        }
    }

    /// The Ethernet interface, if this is the Ethernet default
    pub fn as_ethernet(&mut self) -> Option<&mut E> {
        match self {
            DefaultInterface::Ethernet(e) => Some(e),
            DefaultInterface::Wifi { .. } => None,
        }
    }

    /// View as a trait object
    pub fn as_dyn(&mut self) -> &mut dyn NetworkInterface {
        self
    }
}

impl<E: EthInterface, W: WifiInterface> NetworkInterface for DefaultInterface<'_, E, W> {
    fn interface_type(&self) -> InterfaceType {
        match self {
            DefaultInterface::Ethernet(e) => e.interface_type(),
            DefaultInterface::Wifi { wifi, .. } => wifi.interface_type(),
        }
    }

    fn connect(&mut self) -> InterfaceResult<()> {
        match self {
            DefaultInterface::Ethernet(e) => e.connect(),
            DefaultInterface::Wifi { wifi, .. } => wifi.connect(),
        }
    }

    fn disconnect(&mut self) -> InterfaceResult<()> {
        match self {
            DefaultInterface::Ethernet(e) => e.disconnect(),
            DefaultInterface::Wifi { wifi, .. } => wifi.disconnect(),
        }
    }

    fn set_default_parameters(&mut self) {
        match self {
            DefaultInterface::Ethernet(e) => e.set_default_parameters(),
            DefaultInterface::Wifi { wifi, defaults } => {
                apply_wifi_defaults(&mut **wifi, defaults.as_ref());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockEthernet, MockWifi};

    #[test]
    fn apply_defaults_none_is_noop() {
        let mut wifi = MockWifi::new();
        apply_wifi_defaults(&mut wifi, None);
        assert_eq!(wifi.credentials(), None);
        assert_eq!(wifi.set_credentials_calls(), 0);
    }

    #[test]
    fn apply_defaults_forwards_credentials() {
        let creds = Credentials::new("lab", Some("12345678"), Security::WpaWpa2);
        let mut wifi = MockWifi::new();
        apply_wifi_defaults(&mut wifi, Some(&creds));

        let (ssid, pass, security) = wifi.credentials().unwrap();
        assert_eq!(ssid, "lab");
        assert_eq!(pass.as_deref(), Some("12345678"));
        assert_eq!(security, Security::WpaWpa2);
    }

    #[test]
    fn apply_defaults_swallows_driver_rejection() {
        let creds = Credentials::open("lab");
        let mut wifi = MockWifi::new();
        wifi.reject_credentials(true);
        apply_wifi_defaults(&mut wifi, Some(&creds));
        assert_eq!(wifi.set_credentials_calls(), 1);
        assert_eq!(wifi.credentials(), None);
    }

    #[test]
    fn generic_set_default_parameters_is_noop() {
        let mut eth = MockEthernet::new();
        eth.set_default_parameters();
        eth.set_default_parameters();
        assert_eq!(eth.connects(), 0);
    }

    #[test]
    fn handle_delegates_to_inner_interface() {
        let mut eth = MockEthernet::new();
        let mut handle: DefaultInterface<'_, MockEthernet, MockWifi> =
            DefaultInterface::Ethernet(&mut eth);

        assert_eq!(handle.kind(), InterfaceType::Ethernet);
        assert_eq!(handle.interface_type(), InterfaceType::Ethernet);
        assert!(handle.as_wifi().is_none());
        handle.connect().unwrap();
        handle.as_dyn().disconnect().unwrap();

        assert_eq!(eth.connects(), 1);
        assert!(!eth.is_connected());
    }

    #[test]
    fn wifi_handle_reapplies_defaults() {
        let creds = Credentials::open("lab");
        let mut wifi = MockWifi::new();
        let mut handle: DefaultInterface<'_, MockEthernet, MockWifi> = DefaultInterface::Wifi {
            wifi: &mut wifi,
            defaults: Some(creds),
        };

        handle.set_default_parameters();
        handle.as_dyn().set_default_parameters();
        assert_eq!(handle.as_dyn().interface_type(), InterfaceType::Wifi);

        assert_eq!(wifi.set_credentials_calls(), 2);
        let (ssid, pass, security) = wifi.credentials().unwrap();
        assert_eq!(ssid, "lab");
        assert_eq!(pass, None);
        assert_eq!(security, Security::None);
    }

    #[test]
    fn wifi_handle_without_defaults_leaves_driver_alone() {
        let mut wifi = MockWifi::new();
        let mut handle: DefaultInterface<'_, MockEthernet, MockWifi> = DefaultInterface::Wifi {
            wifi: &mut wifi,
            defaults: None,
        };

        handle.as_dyn().set_default_parameters();
        assert_eq!(wifi.set_credentials_calls(), 0);
    }

    #[test]
    fn module_pins_accessor() {
        assert!(WifiModule::DriverDefaults.pins().is_none());
        let module = WifiModule::Wired {
            pins: crate::boards::NumakerIotM487::ONBOARD_ESP8266,
            debug: false,
        };
        assert_eq!(module.pins(), Some(&crate::boards::NumakerIotM487::ONBOARD_ESP8266));
    }
}
