//! Browser request guard for the development server.
//!
//! Chrome 129 breaks native ES module loading against unbundled dev servers.
//! When a request comes from that browser the guard answers with a short
//! explanation page instead of the application. Every other request,
//! including ones without a `User-Agent` header, is forwarded untouched.
//!
//! The guard is a pure function of the request headers. It keeps no state, so
//! it can run on any number of requests concurrently.

use axum::{
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use regex::Regex;
use std::sync::LazyLock;

/// Browser major version that gets the diagnostic page.
pub const BLOCKED_MAJOR: u32 = 129;

/// Body returned to intercepted browsers.
pub const INTERCEPT_BODY: &str = concat!(
    "<body><h1>Please use Chrome Canary for testing.</h1>",
    "<p>Chrome 129 has an issue with JavaScript modules & Vite local development, see ",
    "<a href=\"https://github.com/stackblitz/bolt.new/issues/86#issuecomment-2395519258\">",
    "for more information.</a></p>",
    "<p><b>Note:</b> This only impacts <u>local development</u>. ",
    "`pnpm run build` and `pnpm run start` will work fine in this browser.</p></body>",
);

static CHROME_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Chrom(?:e|ium)/([0-9]+)\.").expect("browser version pattern is valid")
});

/// Outcome of running the guard on a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Hand the request to the next service.
    Forward,
    /// Answer with the diagnostic page.
    Intercept { version: u32 },
}

impl Verdict {
    pub fn is_intercept(&self) -> bool {
        matches!(self, Verdict::Intercept { .. })
    }
}

/// Extract the Chrome/Chromium major version from a user agent string.
///
/// Only the first `Chrome/<digits>.` or `Chromium/<digits>.` token counts.
/// Returns `None` when there is no such token or the digits don't fit a `u32`.
///
/// # Examples
///
/// ```
/// use devgate::guard::match_version;
///
/// assert_eq!(match_version("Mozilla/5.0 Chrome/129.0.6668.59 Safari/537.36"), Some(129));
/// assert_eq!(match_version("Chromium/130.0"), Some(130));
/// assert_eq!(match_version("Mozilla/5.0 (X11; Linux x86_64; rv:131.0) Firefox/131.0"), None);
/// ```
pub fn match_version(user_agent: &str) -> Option<u32> {
    let captures = CHROME_VERSION.captures(user_agent)?;
    captures.get(1)?.as_str().parse().ok()
}

/// Decide what to do with a request carrying the given user agent.
pub fn evaluate(user_agent: Option<&str>) -> Verdict {
    match user_agent.and_then(match_version) {
        Some(version) if version == BLOCKED_MAJOR => Verdict::Intercept { version },
        _ => Verdict::Forward,
    }
}

/// Same as [`evaluate`], reading the `User-Agent` header.
///
/// Bytes outside ASCII (obs-text) are decoded lossily, so a
/// `Chrome/<digits>.` token next to them still counts.
pub fn evaluate_headers(headers: &HeaderMap) -> Verdict {
    let user_agent = headers
        .get(header::USER_AGENT)
        .map(|value| String::from_utf8_lossy(value.as_bytes()));

    evaluate(user_agent.as_deref())
}

/// Build the response sent to intercepted browsers.
pub fn intercept_response() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html")],
        INTERCEPT_BODY,
    )
        .into_response()
}

/// Axum middleware running the guard in front of the dev server routes.
pub async fn request_guard(req: Request, next: Next) -> Response {
    match evaluate_headers(req.headers()) {
        Verdict::Intercept { version } => {
            tracing::debug!(version, path = %req.uri().path(), "intercepted request from blocked browser");
            intercept_response()
        }
        Verdict::Forward => next.run(req).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_match_version_chrome() {
        let ua = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                  (KHTML, like Gecko) Chrome/129.0.6668.59 Safari/537.36";
        assert_eq!(match_version(ua), Some(129));
    }

    #[test]
    fn test_match_version_chromium() {
        assert_eq!(match_version("Chromium/129.0.1.1"), Some(129));
        assert_eq!(match_version("Chromium/130.0"), Some(130));
    }

    #[test]
    fn test_match_version_requires_minor_separator() {
        assert_eq!(match_version("Chrome/129"), None);
        assert_eq!(match_version("Chrome/129 Safari"), None);
        assert_eq!(match_version("Chrome/.1"), None);
    }

    #[test]
    fn test_match_version_is_case_sensitive() {
        assert_eq!(match_version("chrome/129.0"), None);
        assert_eq!(match_version("CHROME/129.0"), None);
    }

    #[test]
    fn test_match_version_uses_first_token() {
        assert_eq!(match_version("Chrome/128.0 Chromium/129.0"), Some(128));
        // A token without a minor part doesn't match, so scanning moves on.
        assert_eq!(match_version("Chrome/x Chrome/129.0"), Some(129));
    }

    #[test]
    fn test_match_version_overflow() {
        assert_eq!(match_version("Chrome/99999999999999999999.0"), None);
    }

    #[test]
    fn test_match_version_leading_zeros() {
        assert_eq!(match_version("Chrome/0129.0"), Some(129));
    }

    #[test]
    fn test_evaluate_intercepts_only_blocked_major() {
        assert_eq!(
            evaluate(Some("Chrome/129.0.6668.59")),
            Verdict::Intercept { version: 129 }
        );
        assert_eq!(evaluate(Some("Chrome/128.0")), Verdict::Forward);
        assert_eq!(evaluate(Some("Chromium/130.0")), Verdict::Forward);
        assert_eq!(evaluate(Some("Chrome/1290.0")), Verdict::Forward);
    }

    #[test]
    fn test_evaluate_missing_or_unrelated_header() {
        assert_eq!(evaluate(None), Verdict::Forward);
        assert_eq!(evaluate(Some("")), Verdict::Forward);
        assert_eq!(evaluate(Some("curl/8.4.0")), Verdict::Forward);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        for ua in ["Chrome/129.0", "Chrome/128.0", "Firefox/129.0", ""] {
            assert_eq!(evaluate(Some(ua)), evaluate(Some(ua)));
        }
    }

    #[test]
    fn test_evaluate_headers() {
        let mut headers = HeaderMap::new();
        assert_eq!(evaluate_headers(&headers), Verdict::Forward);

        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_static("Mozilla/5.0 Chrome/129.0.0.0 Safari/537.36"),
        );
        assert!(evaluate_headers(&headers).is_intercept());
    }

    #[test]
    fn test_evaluate_headers_obs_text_value() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_bytes(b"Mozilla/5.0 (\xe9t\xe9) Chrome/129.0.6668.59").unwrap(),
        );
        assert_eq!(
            evaluate_headers(&headers),
            Verdict::Intercept { version: 129 }
        );

        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_bytes(b"Chrome/128.0 \xff").unwrap(),
        );
        assert_eq!(evaluate_headers(&headers), Verdict::Forward);
    }

    #[test]
    fn test_intercept_response() {
        let response = intercept_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html"
        );
    }

    #[test]
    fn test_intercept_body_text() {
        assert!(INTERCEPT_BODY.contains("Please use Chrome Canary for testing."));
        assert!(INTERCEPT_BODY.contains("local development"));
        assert!(INTERCEPT_BODY.starts_with("<body>"));
        assert!(INTERCEPT_BODY.ends_with("</body>"));
    }
}
