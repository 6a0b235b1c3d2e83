//! API key resolution.

use super::constants::API_KEY_ENV;
use crate::core::FmpError;

/// Picks the key to use: an explicit non-blank key wins, then the env value.
///
/// Kept free of `std::env` so the precedence rules are testable without
/// touching process state.
pub(crate) fn resolve_api_key(
    explicit: Option<&str>,
    from_env: Option<String>,
) -> Result<String, FmpError> {
    if let Some(key) = explicit.map(str::trim).filter(|k| !k.is_empty()) {
        return Ok(key.to_string());
    }

    from_env
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .ok_or(FmpError::MissingCredential { env: API_KEY_ENV })
}

/// Reads `FMP_API_KEY`, treating a non-unicode value as absent.
pub(crate) fn key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_wins_over_env() {
        let key = resolve_api_key(Some("explicit"), Some("env".into())).unwrap();
        assert_eq!(key, "explicit");
    }

    #[test]
    fn blank_explicit_key_falls_back_to_env() {
        let key = resolve_api_key(Some("   "), Some(" env-key ".into())).unwrap();
        assert_eq!(key, "env-key");
    }

    #[test]
    fn missing_everywhere_is_missing_credential() {
        let err = resolve_api_key(None, None).unwrap_err();
        assert!(matches!(err, FmpError::MissingCredential { env } if env == API_KEY_ENV));

        let err = resolve_api_key(Some(""), Some(String::new())).unwrap_err();
        assert!(err.is_auth());
    }
}
