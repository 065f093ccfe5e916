//! Configuration
//!
//! The WASM bundle has no process environment at runtime, so the backend
//! location is baked in at build time from the `API_URL` variable
//! (e.g. `API_URL=https://api.example.com trunk build --release`).

/// Backend used when `API_URL` is unset or blank
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Base URL of the backend API, without a trailing slash
pub fn api_base() -> String {
    normalize_base(option_env!("API_URL"))
}

/// Normalize a configured base URL: trim whitespace and trailing slashes,
/// falling back to [`DEFAULT_API_URL`] when nothing usable is left.
pub fn normalize_base(configured: Option<&str>) -> String {
    let url = configured
        .map(|url| url.trim().trim_end_matches('/'))
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_URL);

    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_unset() {
        assert_eq!(normalize_base(None), DEFAULT_API_URL);
    }

    #[test]
    fn test_default_when_blank() {
        assert_eq!(normalize_base(Some("   ")), DEFAULT_API_URL);
        assert_eq!(normalize_base(Some("/")), DEFAULT_API_URL);
    }

    #[test]
    fn test_trailing_slashes_trimmed() {
        assert_eq!(
            normalize_base(Some(" https://api.example.com// ")),
            "https://api.example.com"
        );
    }
}
