//! Loader behaviour against real files.

use std::io::Write;

use shellbroker_config::{Config, ConfigError, LoadError, LogLevel, RawConfig, SessionBackend};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn full_document_decodes() {
    let file = write_config(
        r#"
image-name: termserver
juju-addrs:
  - 10.0.0.1:17070
  - 10.0.0.2:17070
juju-cert: controller cert
log-level: debug
port: 8047
tls-cert: server cert
tls-key: server key
allowed-users:
  - who
dns-name: shell.example.com
profiles: [default, termserver]
lxd-socket-path: /var/snap/lxd/common/lxd/unix.socket
session-timeout: 30
welcome-message: "Welcome to the shell."
"#,
    );
    let raw = RawConfig::read(file.path()).unwrap();
    assert_eq!(raw.image_name, "termserver");
    assert_eq!(raw.juju_addrs, vec!["10.0.0.1:17070", "10.0.0.2:17070"]);
    assert_eq!(raw.log_level, LogLevel::Debug);
    assert_eq!(raw.port, 8047);
    assert_eq!(raw.profiles, vec!["default", "termserver"]);
    assert_eq!(
        raw.lxd_socket_path.to_str(),
        Some("/var/snap/lxd/common/lxd/unix.socket")
    );
    assert_eq!(raw.session_timeout, 30);
}

#[test]
fn absent_keys_decode_to_zero_values() {
    let file = write_config("image-name: ubuntu\n");
    let raw = RawConfig::read(file.path()).unwrap();
    assert_eq!(raw.image_name, "ubuntu");
    assert!(raw.juju_addrs.is_empty());
    assert_eq!(raw.port, 0);
    assert_eq!(raw.log_level, LogLevel::Info);
    assert_eq!(raw.session_timeout, 0);
    assert!(raw.welcome_message.is_empty());
}

#[test]
fn unreadable_file_reports_the_path() {
    let err = RawConfig::read("/no/such/config.yaml").unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("/no/such/config.yaml"));
}

#[test]
fn malformed_document_fails_to_decode() {
    let file = write_config("{ image-name: [\n");
    let err = RawConfig::read(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Decode { .. }));
}

#[test]
fn mistyped_value_fails_to_decode() {
    let file = write_config("image-name: ubuntu\nport: not-a-number\n");
    let err = RawConfig::read(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Decode { .. }));
}

#[test]
fn load_chains_read_and_validation() {
    let file = write_config(
        r#"
image-name: ubuntu
juju-addrs: ["10.0.0.1:17070"]
juju-cert: "-----BEGIN CERTIFICATE-----"
port: 17070
"#,
    );
    let config = Config::load(file.path(), SessionBackend::Controller).unwrap();
    assert_eq!(config.port(), 17070);
}

#[test]
fn load_reports_validation_failures_with_the_path() {
    let file = write_config("image-name: ubuntu\n");
    let err = Config::load(file.path(), SessionBackend::Controller).unwrap_err();
    match err {
        ConfigError::Invalid { ref path, .. } => assert_eq!(path, file.path()),
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn validated_config_round_trips_through_yaml() {
    let raw = RawConfig {
        image_name: "termserver".into(),
        juju_addrs: vec!["10.0.0.1:17070".into()],
        log_level: LogLevel::Warn,
        port: 443,
        dns_name: "shell.example.com".into(),
        profiles: vec!["default".into()],
        lxd_socket_path: "/var/lib/lxd/unix.socket".into(),
        session_timeout: 20,
        welcome_message: "hi".into(),
        ..Default::default()
    };
    let config = raw.validate(SessionBackend::Lxd).unwrap();

    let encoded = serde_yaml::to_string(&config).unwrap();
    let file = write_config(&encoded);
    let reloaded = Config::load(file.path(), SessionBackend::Lxd).unwrap();
    assert_eq!(reloaded, config);
}
