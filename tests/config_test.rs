use std::collections::HashMap;

use spotlens::{config::Settings, errors::ConfigError};

fn required_vars() -> HashMap<&'static str, String> {
    HashMap::from([
        ("SPOTIFY_CLIENT_ID", "client".to_string()),
        ("SPOTIFY_CLIENT_SECRET", "very-secret".to_string()),
        ("SPOTIFY_REDIRECT_URI", "http://localhost:3000/callback".to_string()),
        ("SESSION_SECRET", "keyboard cat".to_string()),
    ])
}

fn settings(vars: &HashMap<&'static str, String>) -> Result<Settings, ConfigError> {
    Settings::from_lookup(|name| vars.get(name).cloned())
}

#[test]
fn test_defaults_applied() {
    let settings = settings(&required_vars()).unwrap();

    assert_eq!(settings.client_id, "client");
    assert_eq!(settings.server_address, "0.0.0.0:3000");
    assert_eq!(settings.session_ttl_secs, 86_400);
    assert_eq!(settings.auth_url, "https://accounts.spotify.com/authorize");
    assert_eq!(settings.token_url, "https://accounts.spotify.com/api/token");
    assert_eq!(settings.api_url, "https://api.spotify.com/v1");
}

#[test]
fn test_overrides_applied() {
    let mut vars = required_vars();
    vars.insert("SERVER_ADDRESS", "127.0.0.1:8080".to_string());
    vars.insert("SESSION_TTL_SECS", "60".to_string());
    vars.insert("SPOTIFY_API_URL", "http://localhost:9999/v1/".to_string());

    let settings = settings(&vars).unwrap();
    assert_eq!(settings.server_address, "127.0.0.1:8080");
    assert_eq!(settings.session_ttl_secs, 60);
    // Trailing slash is dropped so paths can be appended
    assert_eq!(settings.api_url, "http://localhost:9999/v1");
}

#[test]
fn test_missing_required_variable() {
    for name in [
        "SPOTIFY_CLIENT_ID",
        "SPOTIFY_CLIENT_SECRET",
        "SPOTIFY_REDIRECT_URI",
        "SESSION_SECRET",
    ] {
        let mut vars = required_vars();
        vars.remove(name);
        match settings(&vars) {
            Err(ConfigError::Missing(missing)) => assert_eq!(missing, name),
            other => panic!("expected Missing({}), got {:?}", name, other),
        }

        // Blank counts as missing
        let mut vars = required_vars();
        vars.insert(name, "   ".to_string());
        assert!(matches!(settings(&vars), Err(ConfigError::Missing(_))));
    }
}

#[test]
fn test_invalid_ttl() {
    let mut vars = required_vars();
    vars.insert("SESSION_TTL_SECS", "one hour".to_string());

    match settings(&vars) {
        Err(ConfigError::Invalid { name, value }) => {
            assert_eq!(name, "SESSION_TTL_SECS");
            assert_eq!(value, "one hour");
        }
        other => panic!("expected Invalid, got {:?}", other),
    }
}

#[test]
fn test_debug_redacts_secrets() {
    let settings = settings(&required_vars()).unwrap();
    let debug = format!("{:?}", settings);

    assert!(debug.contains("client"));
    assert!(!debug.contains("very-secret"));
    assert!(!debug.contains("keyboard cat"));
}

#[test]
fn test_invalid_endpoint_url() {
    let mut vars = required_vars();
    vars.insert("SPOTIFY_API_TOKEN_URL", "accounts.spotify.com/api/token".to_string());

    assert!(matches!(
        settings(&vars),
        Err(ConfigError::Invalid { name: "SPOTIFY_API_TOKEN_URL", .. })
    ));
}

#[test]
fn test_ttl_above_one_year_rejected() {
    for value in ["31536001", "9223372036854775807", "18446744073709551615"] {
        let mut vars = required_vars();
        vars.insert("SESSION_TTL_SECS", value.to_string());

        match settings(&vars) {
            Err(ConfigError::Invalid { name, value: got }) => {
                assert_eq!(name, "SESSION_TTL_SECS");
                assert_eq!(got, value);
            }
            other => panic!("expected Invalid for {}, got {:?}", value, other),
        }
    }

    // The bound itself is accepted
    let mut vars = required_vars();
    vars.insert("SESSION_TTL_SECS", "31536000".to_string());
    assert_eq!(settings(&vars).unwrap().session_ttl_secs, 31_536_000);
}
