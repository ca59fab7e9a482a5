//! Validation rules for the decoded configuration.
//!
//! Missing-field checks accumulate into one error listing every empty
//! required field in schema order. Cross-field rules run afterwards
//! and fail one at a time.

use crate::error::ValidationError;
use crate::RawConfig;

/// Port fixed by the ACME convention when `dns-name` is set.
const ACME_PORT: u16 = 443;

/// Which backend hosts the brokered shell sessions.
///
/// The backend selects the mandatory-field profile the configuration
/// is validated against; the schema itself is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionBackend {
    /// Shells attach directly to the Juju controller, so its CA
    /// certificate must be supplied.
    Controller,
    /// Shells run in LXD containers provisioned on this host.
    Lxd,
}

/// Run every rule applicable to `backend` against `raw`.
pub(crate) fn run(raw: &RawConfig, backend: SessionBackend) -> Result<(), ValidationError> {
    let missing = missing_fields(raw, backend);
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }
    check_tls(raw)?;
    check_timeout(raw)
}

/// Names of every empty required field, in schema declaration order.
fn missing_fields(raw: &RawConfig, backend: SessionBackend) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if raw.image_name.is_empty() {
        missing.push("image-name");
    }
    if raw.juju_addrs.is_empty() {
        missing.push("juju-addrs");
    }
    if backend == SessionBackend::Controller && raw.juju_cert.is_empty() {
        missing.push("juju-cert");
    }
    if raw.port == 0 {
        missing.push("port");
    }
    if backend == SessionBackend::Lxd {
        if raw.profiles.is_empty() {
            missing.push("profiles");
        }
        if raw.lxd_socket_path.as_os_str().is_empty() {
            missing.push("lxd-socket-path");
        }
    }
    missing
}

/// A `dns-name` rules out manual TLS material and pins the port.
fn check_tls(raw: &RawConfig) -> Result<(), ValidationError> {
    if raw.dns_name.is_empty() {
        return Ok(());
    }
    if !raw.tls_cert.is_empty() || !raw.tls_key.is_empty() {
        return Err(ValidationError::TlsConflict);
    }
    if raw.port != ACME_PORT {
        return Err(ValidationError::DnsPortMismatch(raw.port));
    }
    Ok(())
}

fn check_timeout(raw: &RawConfig) -> Result<(), ValidationError> {
    if raw.session_timeout < 0 {
        return Err(ValidationError::NegativeTimeout(raw.session_timeout));
    }
    Ok(())
}
