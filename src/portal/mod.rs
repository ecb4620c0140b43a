//! Authenticated HTTP client for the Brightspace (D2L) portal.
//!
//! No login flow is implemented: every request carries a fixed
//! browser-identifying user agent plus a session cookie captured from an
//! authenticated browser session and assumed valid.

use reqwest::header::{HeaderMap, HeaderValue, COOKIE, REFERER};
use reqwest::{Client, Response, StatusCode};
use scraper::{Html, Selector};
use url::Url;

use crate::config::Config;
use crate::models::TocDocument;

/// Browser-identifying user agent sent with every request
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.0.0 Safari/537.36";

/// Referer path sent with file download requests, matching the in-browser
/// content viewer
const DOWNLOAD_REFERER_PATH: &str =
    "/d2l/ui/apps/smart-curriculum/3.11.23/index.html";

/// Site-wide prefix stripped from the landing page `<title>`
const TITLE_PREFIX: &str = "Brightspace - ";

/// Errors that can occur when talking to the portal
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// Network or transport error
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status
    #[error("portal returned status {status} for {url}")]
    Status { status: StatusCode, url: String },

    /// Malformed response body (JSON, HTML)
    #[error("parse error: {0}")]
    Parse(String),

    /// Configuration value unusable at the HTTP layer
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error (file system)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for PortalError {
    fn from(err: reqwest::Error) -> Self {
        PortalError::Network(err.to_string())
    }
}

/// HTTP client bound to one portal and one course
#[derive(Debug, Clone)]
pub struct PortalClient {
    client: Client,
    base: Url,
    course_id: u64,
}

impl PortalClient {
    /// Create a client carrying the session cookie on every request
    pub fn new(config: &Config) -> Result<Self, PortalError> {
        let cookie = HeaderValue::from_str(&config.cookie).map_err(|_| {
            PortalError::InvalidConfig(
                "cookie contains characters not allowed in an HTTP header"
                    .to_string(),
            )
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, cookie);

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base: config.portal_url.clone(),
            course_id: config.course_id,
        })
    }

    pub fn course_id(&self) -> u64 {
        self.course_id
    }

    fn base(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    fn home_url(&self) -> String {
        format!("{}/d2l/home/{}", self.base(), self.course_id)
    }

    /// Fetch the course landing page and extract its display title
    pub async fn course_title(&self) -> Result<String, PortalError> {
        let url = self.home_url();
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(PortalError::Status {
                status: response.status(),
                url,
            });
        }

        let body = response.text().await?;
        extract_course_title(&body).ok_or_else(|| {
            PortalError::Parse(
                "landing page has no usable <title> element".to_string(),
            )
        })
    }

    /// Fetch the course table-of-contents document
    pub async fn fetch_toc(&self) -> Result<TocDocument, PortalError> {
        let url = format!(
            "{}/d2l/api/le/unstable/{}/content/toc?loadDescription=true",
            self.base(),
            self.course_id
        );

        let response = self
            .client
            .get(&url)
            .header(REFERER, self.home_url())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PortalError::Status {
                status: response.status(),
                url,
            });
        }

        response
            .json::<TocDocument>()
            .await
            .map_err(|e| PortalError::Parse(format!("invalid TOC document: {}", e)))
    }

    /// Start a streamed download of a topic's file attachment.
    ///
    /// Returns the open response so the caller can consume the body in
    /// chunks; a non-success status is already turned into an error here.
    pub async fn download_topic(
        &self,
        topic_id: u64,
    ) -> Result<Response, PortalError> {
        let url = format!(
            "{}/d2l/le/content/{}/topics/files/download/{}/DirectFileTopicDownload",
            self.base(),
            self.course_id,
            topic_id
        );

        let response = self
            .client
            .get(&url)
            .header(REFERER, format!("{}{}", self.base(), DOWNLOAD_REFERER_PATH))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PortalError::Status {
                status: response.status(),
                url,
            });
        }

        Ok(response)
    }
}

/// Extract the `<title>` text from a landing page, stripping the site prefix
fn extract_course_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;
    let full = document
        .select(&selector)
        .next()?
        .text()
        .collect::<String>();
    let full = full.trim();

    // "Brightspace - CS-101" -> "CS-101"; pages without the prefix pass through
    let title = full.split(TITLE_PREFIX).last().unwrap_or(full).trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title_strips_prefix() {
        let html =
            "<html><head><title>Brightspace - Intro to Systems</title></head></html>";
        assert_eq!(
            extract_course_title(html).as_deref(),
            Some("Intro to Systems")
        );
    }

    #[test]
    fn test_extract_title_without_prefix() {
        let html = "<html><head><title> Plain Course </title></head></html>";
        assert_eq!(extract_course_title(html).as_deref(), Some("Plain Course"));
    }

    #[test]
    fn test_extract_title_missing_or_empty() {
        assert_eq!(extract_course_title("<html><body>x</body></html>"), None);
        assert_eq!(
            extract_course_title("<html><head><title></title></head></html>"),
            None
        );
    }

    #[test]
    fn test_client_rejects_control_characters_in_cookie() {
        let config = Config {
            portal_url: Url::parse("http://localhost").unwrap(),
            course_id: 1,
            cookie: "bad\ncookie".to_string(),
        };
        assert!(matches!(
            PortalClient::new(&config),
            Err(PortalError::InvalidConfig(_))
        ));
    }
}
