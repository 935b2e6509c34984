use http::HeaderMap;
use http::header::EXPECT;

use crate::exchange::Exchange;
use crate::expect::ContinueConfig;

/// The only expectation this crate knows how to meet.
pub const CONTINUE: &str = "100-continue";

/// Whether any `Expect` header line lists `100-continue`.
///
/// Values that aren't visible ASCII are ignored rather than treated as errors.
pub fn expects_continue(headers: &HeaderMap) -> bool {
    headers
        .get_all(EXPECT)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .any(|element| element.trim().eq_ignore_ascii_case(CONTINUE))
}

/// Whether the server owes this exchange an interim `100 Continue` before reading its body.
///
/// False once a response was started or a continue already went out, and for protocol
/// versions `config` doesn't list as continue-capable.
pub fn requires_continue_response(exchange: &Exchange, config: &ContinueConfig) -> bool {
    config.supports_continue(exchange.version())
        && !exchange.is_response_started()
        && !exchange.is_continue_sent()
        && expects_continue(exchange.headers())
}

#[cfg(test)]
mod tests {
    use http::{HeaderValue, Request, StatusCode, Version};

    use super::*;
    use crate::exchange::MockExchangeSink;
    use crate::protocol::status_head;

    fn headers(values: &[&'static str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for value in values {
            headers.append(EXPECT, HeaderValue::from_static(*value));
        }
        headers
    }

    fn exchange(version: Version, expect: Option<&'static str>) -> Exchange {
        let mut builder = Request::builder().version(version).uri("/upload");
        if let Some(expect) = expect {
            builder = builder.header(EXPECT, expect);
        }
        Exchange::new(builder.body(()).unwrap(), MockExchangeSink::new())
    }

    #[test]
    fn matches_continue_case_insensitively() {
        assert!(expects_continue(&headers(&["100-continue"])));
        assert!(expects_continue(&headers(&["100-Continue"])));
        assert!(expects_continue(&headers(&[" 100-CONTINUE "])));
    }

    #[test]
    fn inspects_every_line_and_element() {
        assert!(expects_continue(&headers(&["foo", "100-continue"])));
        assert!(expects_continue(&headers(&["foo, 100-continue"])));
    }

    #[test]
    fn ignores_other_values() {
        assert!(!expects_continue(&HeaderMap::new()));
        assert!(!expects_continue(&headers(&[""])));
        assert!(!expects_continue(&headers(&["100-"])));
        assert!(!expects_continue(&headers(&["100-continue-later"])));

        let mut obs_text = HeaderMap::new();
        obs_text.insert(EXPECT, HeaderValue::from_bytes(b"100-continue\xff").unwrap());
        assert!(!expects_continue(&obs_text));
    }

    #[test]
    fn requires_continue_on_http11() {
        let config = ContinueConfig::default();

        assert!(requires_continue_response(&exchange(Version::HTTP_11, Some("100-continue")), &config));
        assert!(!requires_continue_response(&exchange(Version::HTTP_11, None), &config));
        assert!(!requires_continue_response(&exchange(Version::HTTP_11, Some("gzip")), &config));
    }

    #[test]
    fn old_versions_never_require_continue() {
        let config = ContinueConfig::default();

        assert!(!requires_continue_response(&exchange(Version::HTTP_10, Some("100-continue")), &config));
        assert!(!requires_continue_response(&exchange(Version::HTTP_09, Some("100-continue")), &config));
    }

    #[test]
    fn follows_configured_versions() {
        let config = ContinueConfig::default().with_continue_versions([Version::HTTP_10]);

        assert!(requires_continue_response(&exchange(Version::HTTP_10, Some("100-continue")), &config));
        assert!(!requires_continue_response(&exchange(Version::HTTP_11, Some("100-continue")), &config));
    }

    #[test]
    fn continue_sent_is_not_repeated() {
        let mut exchange = exchange(Version::HTTP_11, Some("100-continue"));
        exchange.mark_continue_sent();

        assert!(!requires_continue_response(&exchange, &ContinueConfig::default()));
    }

    #[tokio::test]
    async fn started_response_needs_no_continue() {
        let mut sink = MockExchangeSink::new();
        sink.expect_send_head().returning(|_| Ok(()));
        let request = Request::builder().header(EXPECT, "100-continue").body(()).unwrap();
        let mut exchange = Exchange::new(request, sink);

        exchange.send_response_head(status_head(StatusCode::OK)).await.unwrap();

        assert!(!requires_continue_response(&exchange, &ContinueConfig::default()));
    }
}
