//! Build-environment checks for the default network interface selection.
//!
//! The selection itself happens at runtime from `NetworkConfig`, but firmware
//! that uses `NetworkConfig::from_build_env()` bakes these variables in via
//! `option_env!`, so cargo must rebuild when they change.
//!
//! The missing `NETIF_ESP8266_AT_SEL` warning is limited to WiFi builds, the
//! only ones that read it.

use std::env;

const TRACKED_VARS: &[&str] = &[
    "NETIF_DEFAULT_INTERFACE_TYPE",
    "NETIF_TARGET_BOARD",
    "NETIF_ESP8266_AT_SEL",
    "NETIF_DEFAULT_WIFI_SSID",
    "NETIF_DEFAULT_WIFI_PASSWORD",
    "NETIF_DEFAULT_WIFI_SECURITY",
];

fn main() {
    for var in TRACKED_VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let wifi_selected = env::var("NETIF_DEFAULT_INTERFACE_TYPE")
        .map(|v| matches!(v.trim().to_ascii_uppercase().as_str(), "WIFI" | "2"))
        .unwrap_or(false);

    if wifi_selected && env::var_os("NETIF_ESP8266_AT_SEL").is_none() {
        println!("cargo:warning=NETIF_ESP8266_AT_SEL missing. Defaults to ONBOARD.");
    }
}
