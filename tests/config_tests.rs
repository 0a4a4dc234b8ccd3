//! Tests for configuration and credential resolution.

mod common;

use std::io::Write;

use orbit_synth::config::{load_env_file, SynthConfig, API_KEY_ENV, BASE_URL_ENV};
use orbit_synth::error::{ErrorKind, SynthError};

use common::{env_lock_guard, EnvGuard};

#[test]
fn key_is_read_at_resolve_time() {
    let _env_lock = env_lock_guard();
    let _env_guard = EnvGuard::cleared();

    let config = SynthConfig::from_env();
    let err = config.resolve_api_key().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingCredential);

    std::env::set_var(API_KEY_ENV, "sk-late");
    assert_eq!(config.resolve_api_key().unwrap(), "sk-late");
}

#[test]
fn explicit_key_takes_precedence_over_env() {
    let _env_lock = env_lock_guard();
    let _env_guard = EnvGuard::cleared();
    std::env::set_var(API_KEY_ENV, "sk-env");

    let config = SynthConfig::new().with_api_key("sk-explicit");
    assert_eq!(config.resolve_api_key().unwrap(), "sk-explicit");
}

#[test]
fn from_env_applies_base_url_override() {
    let _env_lock = env_lock_guard();
    let _env_guard = EnvGuard::cleared();
    std::env::set_var(BASE_URL_ENV, "http://localhost:9999");

    let config = SynthConfig::from_env();
    assert_eq!(config.base_url, "http://localhost:9999");
}

#[test]
fn blank_base_url_env_is_ignored() {
    let _env_lock = env_lock_guard();
    let _env_guard = EnvGuard::cleared();
    std::env::set_var(BASE_URL_ENV, "  ");

    let config = SynthConfig::from_env();
    assert_eq!(config.base_url, "https://api.cartesia.ai");
}

#[test]
fn env_file_supplies_missing_key() {
    let _env_lock = env_lock_guard();
    let _env_guard = EnvGuard::cleared();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "CARTESIA_API_KEY=sk-from-file").unwrap();

    load_env_file(file.path()).unwrap();

    let config = SynthConfig::new();
    assert_eq!(config.resolve_api_key().unwrap(), "sk-from-file");
}

#[test]
fn env_file_does_not_override_existing_key() {
    let _env_lock = env_lock_guard();
    let _env_guard = EnvGuard::cleared();
    std::env::set_var(API_KEY_ENV, "sk-process");

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "CARTESIA_API_KEY=sk-from-file").unwrap();

    load_env_file(file.path()).unwrap();

    assert_eq!(SynthConfig::new().resolve_api_key().unwrap(), "sk-process");
}

#[cfg(unix)]
#[test]
fn non_unicode_key_is_configuration_error() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let _env_lock = env_lock_guard();
    let _env_guard = EnvGuard::cleared();
    std::env::set_var(API_KEY_ENV, OsString::from_vec(vec![0x73, 0x6b, 0xff]));

    let err = SynthConfig::new().resolve_api_key().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert!(err.to_string().contains("not valid Unicode"));
}

#[test]
fn missing_env_file_is_configuration_error() {
    let err = load_env_file(std::path::Path::new("/definitely/not/here.env")).unwrap_err();
    assert!(matches!(err, SynthError::Configuration(_)));
}
