//! Error types for configuration loading and validation

use std::path::PathBuf;

use thiserror::Error;

/// Failure to read or decode a configuration file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("cannot read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a well-formed configuration document, or a key
    /// holds a value of the wrong kind.
    #[error("cannot parse {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: figment::Error,
    },
}

/// Rejection of a decoded configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields are empty. Collected in a single
    /// pass so the operator can fix the whole file in one edit.
    #[error("missing fields {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// `dns-name` and manually supplied TLS material are mutually
    /// exclusive.
    #[error("cannot specify both dns-name and tls-cert or tls-key")]
    TlsConflict,

    /// Automatic certificate retrieval requires listening on port 443.
    #[error("dns-name requires port 443, not {0}")]
    DnsPortMismatch(u16),

    /// The session inactivity timeout cannot be negative.
    #[error("session-timeout cannot be negative, got {0} minutes")]
    NegativeTimeout(i64),
}

/// Any failure of the load-then-validate chain.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("invalid configuration at {}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
}
