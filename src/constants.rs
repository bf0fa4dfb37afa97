//! Centralized Constants
//!
//! Single source of truth for the timing values and length limits used by
//! the selector, the power sequencing and credential validation.

// =============================================================================
// Timing
// =============================================================================

/// Settling time on each side of the WiFi module power-on transition (ms)
pub const POWER_SETTLE_MS: u32 = 50;

// =============================================================================
// Credential Limits (IEEE 802.11 / ESP8266 AT firmware)
// =============================================================================

/// Maximum SSID length in bytes
pub const SSID_MAX_LEN: usize = 32;

/// Minimum WPA passphrase length
pub const WPA_PASSPHRASE_MIN_LEN: usize = 8;

/// Maximum WPA passphrase length (ASCII form)
pub const WPA_PASSPHRASE_MAX_LEN: usize = 63;

/// Length of a raw WPA pre-shared key given as hex digits
pub const WPA_PSK_HEX_LEN: usize = 64;

/// Valid WEP key lengths (40/104-bit, ASCII then hex form)
pub const WEP_KEY_LENGTHS: [usize; 4] = [5, 10, 13, 26];

// =============================================================================
// ESP8266 Driver Defaults
// =============================================================================

/// AT-command debug output used for every board pin table entry
pub const ESP8266_DEBUG_DEFAULT: bool = false;
