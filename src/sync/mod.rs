//! Static, ISR-safe access to the default interfaces
//!
//! Firmware that wants the selector reachable from anywhere (including
//! interrupt handlers) can park it in a [`SharedDefaultInterfaces`] static.
//! Initialization is accepted exactly once; every access runs inside a
//! critical section.
//!
//! # Feature Flags
//!
//! - `critical-section`: enables this module
//!
//! # Example
//!
//! ```ignore
//! use numaker_netif::sync::SharedDefaultInterfaces;
//!
//! static NET: SharedDefaultInterfaces<DefaultInterfaces<'static, Factory, Delay, Output>> =
//!     SharedDefaultInterfaces::new();
//!
//! fn main() {
//!     NET.init(DefaultInterfaces::new(config, Factory, delay).with_power_pin(pwr_off))
//!         .unwrap();
//!
//!     NET.with(|net| {
//!         if let Ok(Some(mut iface)) = net.default_interface() {
//!             iface.connect().ok();
//!         }
//!     });
//! }
//! ```

mod primitives;

pub use primitives::CriticalSectionCell;

mod shared;

pub use shared::SharedDefaultInterfaces;
