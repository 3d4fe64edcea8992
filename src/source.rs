//! Content sources: where documents come from.
//!
//! Fetching is the only fallible, blocking step of the pipeline, so it sits
//! behind a trait. Analysis never starts until a fetch has completed, and a
//! failed fetch is never analyzed.
//!
//! ```text
//! url ──fetch──▶ Ok(content) ──analyze──▶ Analysis
//!          └───▶ Err(ContentUnavailable)  (stop)
//! ```
//!
//! Retries are the caller's business: a source reports one attempt.

use tracing::{debug, warn};

use crate::{analyze_with, Analysis, Result, Stride};

/// Anything that can turn a URL into document text.
///
/// Closures work too, which is handy in tests:
///
/// ```rust
/// use wordtally::{ContentSource, Error};
///
/// let source = |url: &str| -> wordtally::Result<String> {
///     if url.ends_with("/ok") {
///         Ok("some page text".to_string())
///     } else {
///         Err(Error::ContentUnavailable("404".into()))
///     }
/// };
///
/// assert!(source.fetch("https://example.com/ok").is_ok());
/// assert!(source.fetch("https://example.com/missing").is_err());
/// ```
pub trait ContentSource {
    /// Fetch the text body at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContentUnavailable`](crate::Error::ContentUnavailable)
    /// when the document cannot be delivered.
    fn fetch(&self, url: &str) -> Result<String>;
}

impl<F> ContentSource for F
where
    F: Fn(&str) -> Result<String>,
{
    fn fetch(&self, url: &str) -> Result<String> {
        self(url)
    }
}

/// Fetch `url` from `source`, then analyze the body.
///
/// # Errors
///
/// Propagates the source's error; no analysis is attempted in that case.
pub fn fetch_and_analyze<S>(source: &S, url: &str, stride: Stride) -> Result<Analysis>
where
    S: ContentSource + ?Sized,
{
    let content = source.fetch(url).inspect_err(|e| {
        warn!(url, error = %e, "fetch failed");
    })?;
    debug!(url, bytes = content.len(), "fetched content");
    Ok(analyze_with(&content, stride))
}

#[cfg(feature = "http")]
pub use http::HttpSource;

#[cfg(feature = "http")]
mod http {
    use std::time::Duration;

    use tracing::debug;

    use super::ContentSource;
    use crate::{Error, Result};

    /// A blocking HTTP(S) content source.
    ///
    /// Non-success status codes are reported as
    /// [`Error::ContentUnavailable`], same as transport failures.
    #[derive(Debug, Clone)]
    pub struct HttpSource {
        client: reqwest::blocking::Client,
    }

    impl HttpSource {
        /// Page fetched when the caller has no URL of its own.
        pub const DEFAULT_URL: &'static str =
            "https://www.truecaller.com/blog/life-at-truecaller/life-as-an-android-engineer";

        /// Connect and overall request timeout.
        pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

        /// Create a source with the default timeouts.
        ///
        /// # Errors
        ///
        /// Returns [`Error::ContentUnavailable`] if the HTTP client cannot be
        /// initialized (e.g. no TLS backend).
        pub fn new() -> Result<Self> {
            Self::with_timeout(Self::DEFAULT_TIMEOUT)
        }

        /// Create a source with a custom timeout.
        ///
        /// # Errors
        ///
        /// Returns [`Error::ContentUnavailable`] if the HTTP client cannot be
        /// initialized.
        pub fn with_timeout(timeout: Duration) -> Result<Self> {
            let client = reqwest::blocking::Client::builder()
                .connect_timeout(timeout)
                .timeout(timeout)
                .build()
                .map_err(|e| Error::ContentUnavailable(format!("http client: {e}")))?;
            Ok(Self { client })
        }

        /// Wrap an existing client.
        #[must_use]
        pub fn from_client(client: reqwest::blocking::Client) -> Self {
            Self { client }
        }
    }

    impl ContentSource for HttpSource {
        fn fetch(&self, url: &str) -> Result<String> {
            debug!(url, "GET");
            self.client
                .get(url)
                .send()
                .and_then(reqwest::blocking::Response::error_for_status)
                .and_then(reqwest::blocking::Response::text)
                .map_err(|e| Error::ContentUnavailable(e.to_string()))
        }
    }
}
