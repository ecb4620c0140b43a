//! Configuration management.
//!
//! All runtime parameters are carried explicitly in [`Config`] and handed to
//! the portal client once at startup. Values missing from the command line
//! fall back to environment variables.

use url::Url;

/// Environment variable holding the course identifier
pub const COURSE_ID_VAR: &str = "D2L_COURSE_ID";
/// Environment variable holding the captured session cookie
pub const COOKIE_VAR: &str = "D2L_COOKIE";
/// Environment variable overriding the portal base URL
pub const PORTAL_URL_VAR: &str = "D2L_PORTAL_URL";

/// Portal used when neither `--portal` nor `D2L_PORTAL_URL` is given
pub const DEFAULT_PORTAL_URL: &str = "https://brightspace.nyu.edu";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Brightspace portal, without a trailing slash
    pub portal_url: Url,

    /// Numeric course identifier (visible in the course home URL)
    pub course_id: u64,

    /// Session cookie captured from an authenticated browser session
    pub cookie: String,
}

/// Errors raised while assembling the configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("course id not provided (use --course-id or {COURSE_ID_VAR})")]
    MissingCourseId,

    #[error("invalid course id: {0}")]
    InvalidCourseId(String),

    #[error("session cookie not provided (use --cookie or {COOKIE_VAR})")]
    MissingCookie,

    #[error("invalid portal URL {url}: {source}")]
    InvalidPortalUrl {
        url: String,
        source: url::ParseError,
    },
}

impl Config {
    /// Build a configuration from explicit values with environment fallback.
    ///
    /// Each `None` argument is looked up in the corresponding environment
    /// variable; the portal URL additionally falls back to
    /// [`DEFAULT_PORTAL_URL`].
    pub fn resolve(
        course_id: Option<u64>,
        cookie: Option<String>,
        portal_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let course_id = match course_id {
            Some(id) => id,
            None => {
                let raw = std::env::var(COURSE_ID_VAR)
                    .map_err(|_| ConfigError::MissingCourseId)?;
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidCourseId(raw))?
            }
        };

        let cookie = cookie
            .or_else(|| std::env::var(COOKIE_VAR).ok())
            .filter(|c| !c.trim().is_empty())
            .ok_or(ConfigError::MissingCookie)?;

        let raw_url = portal_url
            .or_else(|| std::env::var(PORTAL_URL_VAR).ok())
            .unwrap_or_else(|| DEFAULT_PORTAL_URL.to_string());
        let portal_url =
            Url::parse(raw_url.trim_end_matches('/')).map_err(|source| {
                ConfigError::InvalidPortalUrl {
                    url: raw_url,
                    source,
                }
            })?;

        Ok(Self {
            portal_url,
            course_id,
            cookie,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_values_win() {
        let config = Config::resolve(
            Some(436017),
            Some("session=abc".to_string()),
            Some("http://localhost:9999/".to_string()),
        )
        .unwrap();

        assert_eq!(config.course_id, 436017);
        assert_eq!(config.cookie, "session=abc");
        // Trailing slash is stripped before parsing
        assert_eq!(config.portal_url.as_str(), "http://localhost:9999/");
        assert_eq!(config.portal_url.host_str(), Some("localhost"));
    }

    #[test]
    fn test_missing_cookie_is_an_error() {
        std::env::remove_var(COOKIE_VAR);
        let result = Config::resolve(Some(1), None, None);
        assert!(matches!(result, Err(ConfigError::MissingCookie)));
    }

    #[test]
    fn test_default_portal() {
        let config =
            Config::resolve(Some(1), Some("c=1".to_string()), None).unwrap();
        assert!(config
            .portal_url
            .as_str()
            .starts_with("https://brightspace.nyu.edu"));
    }

    #[test]
    fn test_invalid_portal_url() {
        let result = Config::resolve(
            Some(1),
            Some("c=1".to_string()),
            Some("not a url".to_string()),
        );
        assert!(matches!(result, Err(ConfigError::InvalidPortalUrl { .. })));
    }
}
