//! # Shellbroker Configuration System
//!
//! Turns an operator-authored YAML file into a validated, immutable
//! server configuration for the shell-brokering service.
//!
//! ## Features
//! - **Single Model**: one schema shared by both session backends, with
//!   the mandatory-field set selected by [`SessionBackend`]
//! - **Batched Diagnostics**: every missing required field is reported
//!   in a single error, so one edit cycle fixes the whole file
//! - **Promotion, Not Copy**: validation moves the raw value into
//!   [`Config`] without rebuilding it

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fs;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Format, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

mod error;
mod level;
mod params;
mod validation;

pub use error::ConfigError;
pub use error::LoadError;
pub use error::ValidationError;
pub use level::LogLevel;
pub use params::ServerParams;
pub use validation::SessionBackend;

/// Decoded but not yet validated server configuration.
///
/// Every field is optional at this stage: an absent key decodes to the
/// field's zero value, indistinguishable from an explicitly empty one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RawConfig {
    /// Name of the LXD image used to create session containers.
    pub image_name: String,

    /// Addresses of the current Juju controller.
    pub juju_addrs: Vec<String>,

    /// CA certificate used to validate the controller's certificate,
    /// in PEM format.
    pub juju_cert: String,

    /// Verbosity of the server log.
    pub log_level: LogLevel,

    /// Port on which the server listens.
    pub port: u16,

    /// Manually supplied TLS certificate and key, in PEM format.
    pub tls_cert: String,
    pub tls_key: String,

    /// Users allowed to open a session; empty admits everyone.
    pub allowed_users: Vec<String>,

    /// DNS name for automatic certificate retrieval. Mutually
    /// exclusive with `tls-cert`/`tls-key` and pins the port to 443.
    pub dns_name: String,

    /// LXD profiles applied to session containers.
    pub profiles: Vec<String>,

    /// Path to the LXD unix socket.
    pub lxd_socket_path: PathBuf,

    /// Minutes of inactivity after which a session is torn down;
    /// 0 means sessions never expire.
    pub session_timeout: i64,

    /// Message shown to users when their session starts.
    pub welcome_message: String,
}

impl RawConfig {
    /// Read and decode the configuration file at `path`.
    ///
    /// No defaults beyond the format's own zero values are applied and
    /// nothing is validated: the result is raw operator input.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Figment::from(Yaml::string(&data))
            .extract()
            .map_err(|source| LoadError::Decode {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Validate against the mandatory-field profile of `backend`,
    /// promoting the raw value into a [`Config`].
    pub fn validate(self, backend: SessionBackend) -> Result<Config, ValidationError> {
        validation::run(&self, backend)?;
        Ok(Config(self))
    }
}

/// Validated server configuration.
///
/// Constructed only through [`RawConfig::validate`] or [`Config::load`]
/// and immutable afterwards; a configuration change means a fresh
/// load-and-validate cycle producing a new value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Config(RawConfig);

impl Config {
    /// Read, decode and validate the configuration file at `path` for
    /// the given session backend.
    pub fn load<P: AsRef<Path>>(path: P, backend: SessionBackend) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = RawConfig::read(path)?;
        raw.validate(backend).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Name of the LXD image used to create session containers.
    pub fn image_name(&self) -> &str {
        &self.0.image_name
    }

    /// Addresses of the current Juju controller.
    pub fn juju_addrs(&self) -> &[String] {
        &self.0.juju_addrs
    }

    /// CA certificate of the controller, in PEM format.
    pub fn juju_cert(&self) -> &str {
        &self.0.juju_cert
    }

    /// Verbosity the logging subsystem should be initialised with.
    pub fn log_level(&self) -> LogLevel {
        self.0.log_level
    }

    /// Port on which the server listens.
    pub fn port(&self) -> u16 {
        self.0.port
    }

    /// Manually supplied TLS certificate, in PEM format.
    pub fn tls_cert(&self) -> &str {
        &self.0.tls_cert
    }

    /// Manually supplied TLS key, in PEM format.
    pub fn tls_key(&self) -> &str {
        &self.0.tls_key
    }

    /// Users allowed to open a session; empty admits everyone.
    pub fn allowed_users(&self) -> &[String] {
        &self.0.allowed_users
    }

    /// DNS name for automatic certificate retrieval.
    pub fn dns_name(&self) -> &str {
        &self.0.dns_name
    }

    /// LXD profiles applied to session containers.
    pub fn profiles(&self) -> &[String] {
        &self.0.profiles
    }

    /// Path to the LXD unix socket.
    pub fn lxd_socket_path(&self) -> &Path {
        &self.0.lxd_socket_path
    }

    /// Minutes of inactivity after which a session is torn down;
    /// 0 means sessions never expire.
    pub fn session_timeout(&self) -> i64 {
        self.0.session_timeout
    }

    /// Message shown to users when their session starts.
    pub fn welcome_message(&self) -> &str {
        &self.0.welcome_message
    }
}
