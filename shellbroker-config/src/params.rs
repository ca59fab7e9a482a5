//! Hand-off to the request-routing layer.

use crate::Config;

/// The subset of the configuration consumed when registering the
/// server's request-handling routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerParams {
    /// Name of the LXD image used to create session containers.
    pub image_name: String,
    /// Addresses of the current Juju controller.
    pub juju_addrs: Vec<String>,
    /// CA certificate of the controller, in PEM format.
    pub juju_cert: String,
}

impl Config {
    /// Extract the parameters the route-registration layer needs.
    pub fn server_params(&self) -> ServerParams {
        ServerParams {
            image_name: self.image_name().to_owned(),
            juju_addrs: self.juju_addrs().to_vec(),
            juju_cert: self.juju_cert().to_owned(),
        }
    }
}
