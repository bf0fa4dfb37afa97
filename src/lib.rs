//! NuMaker Default Network Interface
//!
//! A `no_std`, `no_alloc` crate that picks and builds the default network
//! interface for Nuvoton NuMaker boards: the on-chip Ethernet MAC or an
//! ESP8266 AT-command WiFi module.
//!
//! The crate never drives a network itself. It decides *which* interface the
//! application gets by default, wires the ESP8266 to the right pins for the
//! board, powers the module up when the board gates its supply, and applies
//! the statically configured WiFi credentials.
//!
//! # Architecture
//!
//! 1. **Configuration** ([`config`]): interface type, attachment mode and
//!    credentials, optionally read from build-time environment variables
//! 2. **Boards** ([`boards`]): per-board ESP8266 pin tables
//! 3. **Selector** ([`selector`]): lazily constructed, cached interface
//!    singletons and the default-interface decision
//!
//! Drivers plug in through the traits in [`netif`].
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting and logging
//! - `log`: Route internal logging through the `log` facade
//! - `critical-section`: Enable ISR-safe [`SharedDefaultInterfaces`] wrapper
//!
//! # Build-time Configuration
//!
//! [`NetworkConfig::from_build_env`] reads these variables at compile time:
//!
//! | Variable | Values |
//! |----------|--------|
//! | `NETIF_DEFAULT_INTERFACE_TYPE` | `ETHERNET`, `WIFI`, `MESH`, `CELLULAR` |
//! | `NETIF_TARGET_BOARD` | e.g. `NUMAKER_PFM_M2351` |
//! | `NETIF_ESP8266_AT_SEL` | `ONBOARD`, `EXTERNAL` |
//! | `NETIF_DEFAULT_WIFI_SSID` | access point name |
//! | `NETIF_DEFAULT_WIFI_PASSWORD` | passphrase or key |
//! | `NETIF_DEFAULT_WIFI_SECURITY` | e.g. `WPA_WPA2` |
//!
//! The WiFi variables are only read when the interface type is `WIFI`, and
//! the credentials are passed to the driver unvalidated. A missing
//! `NETIF_ESP8266_AT_SEL` resolves to `ONBOARD`. The build script warns about
//! that only when `NETIF_DEFAULT_INTERFACE_TYPE` selects WiFi; Ethernet builds
//! never read the setting, so they get no warning.
//!
//! # Example
//!
//! ```ignore
//! use numaker_netif::{DefaultInterfaces, NetworkConfig, NetworkInterface};
//!
//! let config = NetworkConfig::from_build_env()?;
//! let mut net = DefaultInterfaces::new(config, MyFactory::new(), delay)
//!     .with_power_pin(pwr_off);
//!
//! if let Some(mut iface) = net.default_interface()? {
//!     iface.connect()?;
//! }
//! ```

#![no_std]
#![deny(missing_docs)]
#![forbid(unsafe_code)]
// Clippy lint levels live here; config is in Cargo.toml.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// Must come first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

// =============================================================================
// Modules
// =============================================================================

pub mod boards;
pub mod config;
pub mod constants;
pub mod error;
pub mod netif;
pub mod power;
pub mod selector;

#[cfg(feature = "critical-section")]
#[cfg_attr(docsrs, doc(cfg(feature = "critical-section")))]
pub mod sync;

// Test utilities (only available during testing)
#[cfg(test)]
mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use boards::{Board, Esp8266Pins, Pin, PowerEnable, PowerPolarity};
pub use config::{
    AttachmentMode, BUILD_ENV, BoardFallback, BuildEnv, Credentials, InterfaceType,
    NetworkConfig, Security,
};
pub use error::{
    ConfigError, ConfigResult, Error, InterfaceError, InterfaceResult, Result,
};
pub use netif::{
    DefaultInterface, EthInterface, InterfaceFactory, NetworkInterface, WifiInterface,
    WifiModule, apply_wifi_defaults,
};
pub use power::{NoPowerPin, PowerSwitch};
pub use selector::DefaultInterfaces;

// Re-export sync types when critical-section is enabled
#[cfg(feature = "critical-section")]
pub use sync::SharedDefaultInterfaces;
