//! Testing utilities and mock implementations
//!
//! Mock pins, delays and interface drivers for exercising the selector on the
//! host without hardware.
//!
//! Only available when running `cargo test`.

#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::rc::Rc;
use std::string::{String, ToString};
use std::vec::Vec;

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin, StatefulOutputPin};

use crate::config::{InterfaceType, Security};
use crate::error::{InterfaceError, InterfaceResult};
use crate::netif::{EthInterface, InterfaceFactory, NetworkInterface, WifiInterface, WifiModule};

// =============================================================================
// Hardware Event Log
// =============================================================================

/// Observable hardware side effect, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwEvent {
    /// Blocking delay, in nanoseconds
    Delay(u32),
    SetHigh,
    SetLow,
}

/// Shared, ordered record of pin writes and delays
#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<HwEvent>>>);

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: HwEvent) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<HwEvent> {
        self.0.borrow().clone()
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: u64,
    log: Option<EventLog>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock delay that also records into `log`
    pub fn with_log(log: EventLog) -> Self {
        Self {
            total_ns: 0,
            log: Some(log),
        }
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        self.total_ns
    }

    /// Get total milliseconds that were "delayed"
    pub fn total_ms(&self) -> u64 {
        self.total_ns() / 1_000_000
    }

    fn record(&mut self, ns: u64) {
        self.total_ns += ns;
        if let Some(log) = &self.log {
            log.push(HwEvent::Delay(u32::try_from(ns).unwrap_or(u32::MAX)));
        }
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.record(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.record(u64::from(us) * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(u64::from(ms) * 1_000_000);
    }
}

// =============================================================================
// Mock Output Pin
// =============================================================================

/// Stateful output pin with a shared event log and injectable write failures
#[derive(Debug)]
pub struct MockPin {
    high: bool,
    fail_writes: bool,
    log: EventLog,
}

impl MockPin {
    pub fn new(initially_high: bool, log: EventLog) -> Self {
        Self {
            high: initially_high,
            fail_writes: false,
            log,
        }
    }

    /// Current output level (`true` = high)
    pub fn level(&self) -> bool {
        self.high
    }

    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    fn write(&mut self, high: bool) -> Result<(), ErrorKind> {
        if self.fail_writes {
            return Err(ErrorKind::Other);
        }
        self.high = high;
        self.log.push(if high { HwEvent::SetHigh } else { HwEvent::SetLow });
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = ErrorKind;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true)
    }
}

impl StatefulOutputPin for MockPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high)
    }
}

// =============================================================================
// Mock Interfaces
// =============================================================================

/// Ethernet driver double
#[derive(Debug, Default)]
pub struct MockEthernet {
    connected: bool,
    connects: usize,
}

impl MockEthernet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn connects(&self) -> usize {
        self.connects
    }
}

impl NetworkInterface for MockEthernet {
    fn interface_type(&self) -> InterfaceType {
        InterfaceType::Ethernet
    }

    fn connect(&mut self) -> InterfaceResult<()> {
        self.connects += 1;
        self.connected = true;
        Ok(())
    }

    fn disconnect(&mut self) -> InterfaceResult<()> {
        self.connected = false;
        Ok(())
    }
}

impl EthInterface for MockEthernet {}

/// Stored credentials: (SSID, password, security)
pub type StoredCredentials = (String, Option<String>, Security);

/// WiFi driver double
#[derive(Debug, Default)]
pub struct MockWifi {
    module: Option<WifiModule>,
    credentials: Option<StoredCredentials>,
    set_credentials_calls: usize,
    reject_credentials: bool,
    connected: bool,
}

impl MockWifi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_module(module: WifiModule) -> Self {
        Self {
            module: Some(module),
            ..Self::default()
        }
    }

    pub fn module(&self) -> Option<WifiModule> {
        self.module
    }

    pub fn credentials(&self) -> Option<StoredCredentials> {
        self.credentials.clone()
    }

    pub fn set_credentials_calls(&self) -> usize {
        self.set_credentials_calls
    }

    pub fn reject_credentials(&mut self, reject: bool) {
        self.reject_credentials = reject;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

impl NetworkInterface for MockWifi {
    fn interface_type(&self) -> InterfaceType {
        InterfaceType::Wifi
    }

    fn connect(&mut self) -> InterfaceResult<()> {
        if self.credentials.is_none() {
            return Err(InterfaceError::Parameter);
        }
        self.connected = true;
        Ok(())
    }

    fn disconnect(&mut self) -> InterfaceResult<()> {
        if !self.connected {
            return Err(InterfaceError::NoConnection);
        }
        self.connected = false;
        Ok(())
    }
}

impl WifiInterface for MockWifi {
    fn set_credentials(
        &mut self,
        ssid: &str,
        password: Option<&str>,
        security: Security,
    ) -> InterfaceResult<()> {
        self.set_credentials_calls += 1;
        if self.reject_credentials {
            return Err(InterfaceError::Parameter);
        }
        self.credentials = Some((ssid.to_string(), password.map(ToString::to_string), security));
        Ok(())
    }
}

// =============================================================================
// Mock Factory
// =============================================================================

/// Factory that records every construction request
#[derive(Debug, Default)]
pub struct MockFactory {
    ethernet_builds: usize,
    wifi_modules: Vec<WifiModule>,
}

impl MockFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ethernet_builds(&self) -> usize {
        self.ethernet_builds
    }

    pub fn wifi_builds(&self) -> usize {
        self.wifi_modules.len()
    }

    /// Modules passed to `wifi()`, in call order
    pub fn wifi_modules(&self) -> Vec<WifiModule> {
        self.wifi_modules.clone()
    }
}

impl InterfaceFactory for MockFactory {
    type Ethernet = MockEthernet;
    type Wifi = MockWifi;

    fn ethernet(&mut self) -> MockEthernet {
        self.ethernet_builds += 1;
        MockEthernet::new()
    }

    fn wifi(&mut self, module: &WifiModule) -> MockWifi {
        self.wifi_modules.push(*module);
        MockWifi::for_module(*module)
    }
}

#[cfg(test)]
mod tests {
    use std::vec;

    use super::*;
    use embedded_hal::delay::DelayNs;

    #[test]
    fn mock_delay_tracking() {
        let mut delay = MockDelay::new();

        delay.delay_ns(1000);
        delay.delay_us(2);
        assert_eq!(delay.total_ns(), 3000);
        assert_eq!(delay.total_ms(), 0);

        delay.delay_ms(1);
        assert_eq!(delay.total_ms(), 1);
    }

    #[test]
    fn pin_and_delay_share_one_log() {
        let log = EventLog::new();
        let mut delay = MockDelay::with_log(log.clone());
        let mut pin = MockPin::new(false, log.clone());

        pin.set_high().unwrap();
        delay.delay_ms(5);
        pin.set_low().unwrap();

        assert_eq!(
            log.events(),
            vec![HwEvent::SetHigh, HwEvent::Delay(5_000_000), HwEvent::SetLow]
        );
    }

    #[test]
    fn failing_pin_keeps_level() {
        let mut pin = MockPin::new(true, EventLog::new());
        pin.fail_writes(true);
        assert!(pin.set_low().is_err());
        assert!(pin.level());
    }

    #[test]
    fn mock_wifi_requires_credentials_to_connect() {
        let mut wifi = MockWifi::new();
        assert_eq!(wifi.connect(), Err(InterfaceError::Parameter));
        wifi.set_credentials("lab", None, Security::None).unwrap();
        wifi.connect().unwrap();
        assert!(wifi.is_connected());
    }

    #[test]
    fn mock_factory_records_modules() {
        let mut factory = MockFactory::new();
        let wifi = factory.wifi(&WifiModule::DriverDefaults);
        assert_eq!(wifi.module(), Some(WifiModule::DriverDefaults));
        assert_eq!(factory.wifi_modules(), vec![WifiModule::DriverDefaults]);
    }
}
