//! Configuration types for default interface selection
//!
//! [`NetworkConfig`] replaces the board-package compile-time switches with a
//! single value resolved once at start-up. It can be built explicitly with the
//! `with_*` methods or loaded from the build environment with
//! [`NetworkConfig::from_build_env`].

use crate::boards::Board;
use crate::constants::{
    SSID_MAX_LEN, WEP_KEY_LENGTHS, WPA_PASSPHRASE_MAX_LEN, WPA_PASSPHRASE_MIN_LEN, WPA_PSK_HEX_LEN,
};
use crate::error::{ConfigError, ConfigResult};

/// Network interface family
///
/// Discriminants match the numeric codes used by the board-package
/// `default-interface-type` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum InterfaceType {
    /// Wired Ethernet
    Ethernet = 1,
    /// WiFi station
    Wifi = 2,
    /// 6LoWPAN / Thread mesh (reserved, no default here)
    Mesh = 3,
    /// Cellular modem (reserved, no default here)
    Cellular = 4,
}

impl InterfaceType {
    /// Parse a numeric code (`1`..=`4`)
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Ethernet),
            2 => Some(Self::Wifi),
            3 => Some(Self::Mesh),
            4 => Some(Self::Cellular),
            _ => None,
        }
    }

    /// Parse a setting name (`ETHERNET`, `WIFI`, `MESH`, `CELLULAR`) or code
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        const NAMES: [(&str, InterfaceType); 4] = [
            ("ETHERNET", InterfaceType::Ethernet),
            ("WIFI", InterfaceType::Wifi),
            ("MESH", InterfaceType::Mesh),
            ("CELLULAR", InterfaceType::Cellular),
        ];
        NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, t)| *t)
            .or_else(|| name.parse().ok().and_then(Self::from_code))
    }

    /// Numeric code of this interface type
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// How the WiFi radio is attached to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AttachmentMode {
    /// Radio module soldered on the board
    #[default]
    OnBoard = 1,
    /// Radio module wired to the board headers
    External = 2,
}

impl AttachmentMode {
    /// Parse `ONBOARD` / `EXTERN` / `EXTERNAL` or the codes `1` / `2`
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("ONBOARD") || name == "1" {
            Some(Self::OnBoard)
        } else if name.eq_ignore_ascii_case("EXTERN")
            || name.eq_ignore_ascii_case("EXTERNAL")
            || name == "2"
        {
            Some(Self::External)
        } else {
            None
        }
    }
}

/// WiFi security mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Security {
    /// Open network
    #[default]
    None,
    /// WEP
    Wep,
    /// WPA (TKIP)
    Wpa,
    /// WPA2 (AES)
    Wpa2,
    /// WPA or WPA2 mixed mode
    WpaWpa2,
    /// PPP PAP
    Pap,
    /// PPP CHAP
    Chap,
    /// EAP-TLS
    EapTls,
    /// PEAP
    Peap,
    /// WPA2 Enterprise
    Wpa2Ent,
    /// WPA3 SAE
    Wpa3,
    /// WPA3 / WPA2 transition mode
    Wpa3Wpa2,
    /// Unknown or unrecognized mode
    Unknown,
}

impl Security {
    const NAMES: [(&'static str, Security); 13] = [
        ("NONE", Security::None),
        ("WEP", Security::Wep),
        ("WPA", Security::Wpa),
        ("WPA2", Security::Wpa2),
        ("WPA_WPA2", Security::WpaWpa2),
        ("PAP", Security::Pap),
        ("CHAP", Security::Chap),
        ("EAP_TLS", Security::EapTls),
        ("PEAP", Security::Peap),
        ("WPA2_ENT", Security::Wpa2Ent),
        ("WPA3", Security::Wpa3),
        ("WPA3_WPA2", Security::Wpa3Wpa2),
        ("UNKNOWN", Security::Unknown),
    ];

    /// Parse a security name, with or without the `NSAPI_SECURITY_` prefix
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        let name = name
            .get(..15)
            .filter(|p| p.eq_ignore_ascii_case("NSAPI_SECURITY_"))
            .map_or(name, |_| &name[15..]);
        Self::NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, s)| *s)
    }

    /// Canonical setting name
    #[must_use]
    pub fn name(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(_, s)| *s == self)
            .map_or("UNKNOWN", |(n, _)| *n)
    }

    /// True for the WPA/WPA2/WPA3 personal family
    #[must_use]
    pub const fn is_wpa_personal(self) -> bool {
        matches!(
            self,
            Security::Wpa | Security::Wpa2 | Security::WpaWpa2 | Security::Wpa3 | Security::Wpa3Wpa2
        )
    }
}

/// Default WiFi credentials
///
/// A plain value: whatever was configured is forwarded unchanged to the
/// driver's `set_credentials`, which is the only place a rejection happens.
/// [`Credentials::validate`] runs the ESP8266 parameter checks up front for
/// callers that want them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Credentials<'a> {
    ssid: &'a str,
    password: Option<&'a str>,
    security: Security,
}

impl<'a> Credentials<'a> {
    /// Create credentials
    #[must_use]
    pub const fn new(ssid: &'a str, password: Option<&'a str>, security: Security) -> Self {
        Self {
            ssid,
            password,
            security,
        }
    }

    /// Credentials for an open network
    #[must_use]
    pub const fn open(ssid: &'a str) -> Self {
        Self::new(ssid, None, Security::None)
    }

    /// Network name
    pub fn ssid(&self) -> &'a str {
        self.ssid
    }

    /// Password, `None` when not configured
    pub fn password(&self) -> Option<&'a str> {
        self.password
    }

    /// Security mode
    pub fn security(&self) -> Security {
        self.security
    }

    /// Check the credentials against the ESP8266 driver's parameter rules
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidSsid`] if the SSID is empty or over 32 bytes
    /// - [`ConfigError::InvalidPassword`] if the password does not fit the
    ///   security mode
    /// - [`ConfigError::UnsupportedSecurity`] for enterprise/PPP/unknown modes
    pub fn validate(&self) -> ConfigResult<()> {
        if self.ssid.is_empty() || self.ssid.len() > SSID_MAX_LEN {
            return Err(ConfigError::InvalidSsid);
        }

        match self.security {
            Security::None => Ok(()),
            Security::Wep => {
                let pass = self.password.ok_or(ConfigError::InvalidPassword)?;
                if WEP_KEY_LENGTHS.contains(&pass.len()) {
                    Ok(())
                } else {
                    Err(ConfigError::InvalidPassword)
                }
            }
            s if s.is_wpa_personal() => {
                let pass = self.password.ok_or(ConfigError::InvalidPassword)?;
                if is_valid_wpa_passphrase(pass) {
                    Ok(())
                } else {
                    Err(ConfigError::InvalidPassword)
                }
            }
            _ => Err(ConfigError::UnsupportedSecurity),
        }
    }
}

fn is_valid_wpa_passphrase(pass: &str) -> bool {
    let len = pass.len();
    (WPA_PASSPHRASE_MIN_LEN..=WPA_PASSPHRASE_MAX_LEN).contains(&len)
        || (len == WPA_PSK_HEX_LEN && pass.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// What to do when the board has no pin table for the attachment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardFallback {
    /// Construct the driver with its compiled-in defaults (board-package behavior)
    #[default]
    DriverDefaults,
    /// Refuse with [`ConfigError::UnsupportedBoard`]
    Reject,
}

/// Default network interface configuration
///
/// # Example
///
/// ```ignore
/// let config = NetworkConfig::new(Board::NumakerPfmM2351)
///     .with_interface(InterfaceType::Wifi)
///     .with_attachment(AttachmentMode::OnBoard)
///     .with_credentials(Credentials::new("lab", Some("hunter22"), Security::Wpa2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NetworkConfig<'a> {
    /// Board being built for
    pub board: Board,
    /// Default interface family, `None` when unset
    pub interface: Option<InterfaceType>,
    /// WiFi radio attachment
    pub attachment: AttachmentMode,
    /// Default WiFi credentials
    pub credentials: Option<Credentials<'a>>,
    /// Policy for boards without a pin table
    pub fallback: BoardFallback,
}

impl<'a> NetworkConfig<'a> {
    /// Configuration for `board` with no interface type selected
    #[must_use]
    pub const fn new(board: Board) -> Self {
        Self {
            board,
            interface: None,
            attachment: AttachmentMode::OnBoard,
            credentials: None,
            fallback: BoardFallback::DriverDefaults,
        }
    }

    /// Set the default interface family
    #[must_use]
    pub const fn with_interface(mut self, interface: InterfaceType) -> Self {
        self.interface = Some(interface);
        self
    }

    /// Set the WiFi attachment mode
    #[must_use]
    pub const fn with_attachment(mut self, attachment: AttachmentMode) -> Self {
        self.attachment = attachment;
        self
    }

    /// Set the default WiFi credentials
    #[must_use]
    pub const fn with_credentials(mut self, credentials: Credentials<'a>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the policy for boards without a pin table
    #[must_use]
    pub const fn with_fallback(mut self, fallback: BoardFallback) -> Self {
        self.fallback = fallback;
        self
    }
}

// =============================================================================
// Build Environment
// =============================================================================

/// Raw build-environment values, as captured by `option_env!`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildEnv {
    /// `NETIF_DEFAULT_INTERFACE_TYPE`
    pub interface_type: Option<&'static str>,
    /// `NETIF_TARGET_BOARD`
    pub board: Option<&'static str>,
    /// `NETIF_ESP8266_AT_SEL`
    pub esp8266_at_sel: Option<&'static str>,
    /// `NETIF_DEFAULT_WIFI_SSID`
    pub wifi_ssid: Option<&'static str>,
    /// `NETIF_DEFAULT_WIFI_PASSWORD`
    pub wifi_password: Option<&'static str>,
    /// `NETIF_DEFAULT_WIFI_SECURITY`
    pub wifi_security: Option<&'static str>,
}

/// Values baked in when this crate was compiled
pub const BUILD_ENV: BuildEnv = BuildEnv {
    interface_type: option_env!("NETIF_DEFAULT_INTERFACE_TYPE"),
    board: option_env!("NETIF_TARGET_BOARD"),
    esp8266_at_sel: option_env!("NETIF_ESP8266_AT_SEL"),
    wifi_ssid: option_env!("NETIF_DEFAULT_WIFI_SSID"),
    wifi_password: option_env!("NETIF_DEFAULT_WIFI_PASSWORD"),
    wifi_security: option_env!("NETIF_DEFAULT_WIFI_SECURITY"),
};

impl NetworkConfig<'static> {
    /// Load the configuration baked in at build time
    ///
    /// # Errors
    ///
    /// See [`NetworkConfig::from_env_values`].
    pub fn from_build_env() -> ConfigResult<Self> {
        Self::from_env_values(&BUILD_ENV)
    }

    /// Resolve a configuration from raw environment values
    ///
    /// An unknown board name resolves to [`Board::Generic`]; a missing
    /// attachment mode resolves to on-board. The WiFi SSID, password and
    /// security are only read when WiFi is the selected interface type;
    /// password and security default to none. Credentials are not validated.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidConfig`] for unparsable values.
    pub fn from_env_values(env: &BuildEnv) -> ConfigResult<Self> {
        let board = match env.board {
            Some(name) => Board::from_name(name).unwrap_or_else(|| {
                warn!("unknown board {}, no pin table", name);
                Board::Generic
            }),
            None => Board::Generic,
        };

        let mut config = NetworkConfig::new(board);

        if let Some(name) = env.interface_type {
            let interface = InterfaceType::from_name(name).ok_or(ConfigError::InvalidConfig)?;
            config = config.with_interface(interface);
        }

        if let Some(name) = env.esp8266_at_sel {
            let attachment = AttachmentMode::from_name(name).ok_or(ConfigError::InvalidConfig)?;
            config = config.with_attachment(attachment);
        }

        if config.interface != Some(InterfaceType::Wifi) {
            return Ok(config);
        }

        if let Some(ssid) = env.wifi_ssid {
            let security = match env.wifi_security {
                Some(name) => Security::from_name(name).ok_or(ConfigError::InvalidConfig)?,
                None => Security::None,
            };
            config = config.with_credentials(Credentials::new(ssid, env.wifi_password, security));
        }

        Ok(config)
    }
}
