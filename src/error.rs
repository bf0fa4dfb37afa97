//! Error types for default network interface selection
//!
//! Errors are organized by domain:
//! - [`ConfigError`]: configuration, board wiring and credential problems
//! - [`InterfaceError`]: failures reported by the underlying interface drivers
//!
//! The unified [`Error`] enum wraps both. Note that "WiFi selected but no SSID
//! configured" is *not* an error: the selector reports it as `Ok(None)`.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Configuration and bring-up errors
///
/// These are raised while building a [`NetworkConfig`](crate::NetworkConfig)
/// or while constructing the default interfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A configuration value could not be parsed
    InvalidConfig,
    /// Board has no pin table for the selected attachment mode
    UnsupportedBoard,
    /// Board needs a power-enable pin but none was supplied
    PowerPinMissing,
    /// Power-enable GPIO could not be read or driven
    GpioError,
    /// No default interface exists for the selected interface type
    NoDefaultInterface,
    /// SSID is empty or longer than 32 bytes
    InvalidSsid,
    /// Password is missing or has the wrong length for the security mode
    InvalidPassword,
    /// Security mode is not supported by the WiFi module
    UnsupportedSecurity,
    /// Shared selector was already initialized
    AlreadyInitialized,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::InvalidConfig => "invalid configuration",
            ConfigError::UnsupportedBoard => "unsupported board for attachment mode",
            ConfigError::PowerPinMissing => "power-enable pin missing",
            ConfigError::GpioError => "GPIO error",
            ConfigError::NoDefaultInterface => "no default interface for interface type",
            ConfigError::InvalidSsid => "invalid SSID",
            ConfigError::InvalidPassword => "invalid password",
            ConfigError::UnsupportedSecurity => "unsupported security mode",
            ConfigError::AlreadyInitialized => "already initialized",
        }
    }
}

// =============================================================================
// Interface Errors
// =============================================================================

/// Runtime errors reported by interface drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterfaceError {
    /// Invalid parameter passed to the driver
    Parameter,
    /// Not connected to a network
    NoConnection,
    /// Connection attempt timed out
    ConnectionTimeout,
    /// Access point rejected the credentials
    AuthFailure,
    /// Driver is busy with another operation
    Busy,
    /// Module did not respond or reported a failure
    DeviceError,
    /// Operation not supported by this driver
    Unsupported,
}

impl core::fmt::Display for InterfaceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl InterfaceError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            InterfaceError::Parameter => "invalid parameter",
            InterfaceError::NoConnection => "not connected",
            InterfaceError::ConnectionTimeout => "connection timed out",
            InterfaceError::AuthFailure => "authentication failure",
            InterfaceError::Busy => "device busy",
            InterfaceError::DeviceError => "device error",
            InterfaceError::Unsupported => "unsupported operation",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// ```ignore
/// match result {
///     Err(Error::Config(ConfigError::PowerPinMissing)) => { /* ... */ }
///     Err(Error::Interface(InterfaceError::AuthFailure)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// Interface driver error
    Interface(InterfaceError),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Interface(e) => write!(f, "interface: {}", e.as_str()),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<InterfaceError> for Error {
    fn from(e: InterfaceError) -> Self {
        Error::Interface(e)
    }
}

/// Result type alias for selector operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for interface driver operations
pub type InterfaceResult<T> = core::result::Result<T, InterfaceError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    extern crate std;
    use std::format;

    use super::*;

    #[test]
    fn config_error_as_str_non_empty() {
        let variants = [
            ConfigError::InvalidConfig,
            ConfigError::UnsupportedBoard,
            ConfigError::PowerPinMissing,
            ConfigError::GpioError,
            ConfigError::NoDefaultInterface,
            ConfigError::InvalidSsid,
            ConfigError::InvalidPassword,
            ConfigError::UnsupportedSecurity,
            ConfigError::AlreadyInitialized,
        ];

        for variant in variants {
            assert!(!variant.as_str().is_empty(), "{variant:?} has empty string");
        }
    }

    #[test]
    fn interface_error_display() {
        assert_eq!(format!("{}", InterfaceError::AuthFailure), "authentication failure");
    }

    #[test]
    fn error_from_config_error() {
        let err: Error = ConfigError::PowerPinMissing.into();
        assert_eq!(err, Error::Config(ConfigError::PowerPinMissing));
    }

    #[test]
    fn error_from_interface_error() {
        let err: Error = InterfaceError::Busy.into();
        assert_eq!(err, Error::Interface(InterfaceError::Busy));
    }

    #[test]
    fn error_display_is_prefixed_by_domain() {
        let display = format!("{}", Error::Config(ConfigError::InvalidSsid));
        assert!(display.starts_with("config"));
        assert!(display.contains("SSID"));

        let display = format!("{}", Error::Interface(InterfaceError::NoConnection));
        assert!(display.starts_with("interface"));
    }
}
