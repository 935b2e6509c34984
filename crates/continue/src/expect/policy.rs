use http::header::CONTENT_LENGTH;

use crate::exchange::Exchange;

/// Decides whether an exchange announcing a body with `Expect: 100-continue` may send it.
pub trait AcceptPolicy: Send + Sync {
    fn accept(&self, exchange: &Exchange) -> bool;
}

struct FnPolicy<F: Fn(&Exchange) -> bool>(F);

impl<F: Fn(&Exchange) -> bool + Send + Sync> AcceptPolicy for FnPolicy<F> {
    fn accept(&self, exchange: &Exchange) -> bool {
        (self.0)(exchange)
    }
}

pub fn fn_policy<F>(f: F) -> impl AcceptPolicy
where
    F: Fn(&Exchange) -> bool + Send + Sync,
{
    FnPolicy(f)
}

pub fn always_accept() -> AlwaysAccept {
    AlwaysAccept
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysAccept;

impl AcceptPolicy for AlwaysAccept {
    #[inline]
    fn accept(&self, _exchange: &Exchange) -> bool {
        true
    }
}

/// Refuses bodies whose declared `Content-Length` is larger than `limit`.
///
/// Requests without a usable `Content-Length` (chunked, or an unparsable value) are accepted;
/// enforcing the size of those is up to whoever reads the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxContentLength {
    limit: u64,
}

impl MaxContentLength {
    pub const fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl AcceptPolicy for MaxContentLength {
    fn accept(&self, exchange: &Exchange) -> bool {
        let declared = exchange
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());

        match declared {
            Some(length) => length <= self.limit,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use http::Request;
    use http::header::AUTHORIZATION;

    use super::*;
    use crate::exchange::MockExchangeSink;

    fn exchange(name: http::HeaderName, value: &str) -> Exchange {
        let request = Request::builder().header(name, value).body(()).unwrap();
        Exchange::new(request, MockExchangeSink::new())
    }

    #[test]
    fn always_accepts() {
        assert!(always_accept().accept(&exchange(CONTENT_LENGTH, "1000000000")));
    }

    #[test]
    fn fn_policy_sees_headers() {
        let policy = fn_policy(|exchange: &Exchange| exchange.headers().contains_key(AUTHORIZATION));

        assert!(policy.accept(&exchange(AUTHORIZATION, "Bearer abc")));
        assert!(!policy.accept(&exchange(CONTENT_LENGTH, "10")));
    }

    #[test]
    fn max_content_length() {
        let policy = MaxContentLength::new(1024);

        assert!(policy.accept(&exchange(CONTENT_LENGTH, "1024")));
        assert!(!policy.accept(&exchange(CONTENT_LENGTH, "1025")));
        assert!(policy.accept(&exchange(CONTENT_LENGTH, "not a number")));
        assert!(policy.accept(&exchange(http::header::TRANSFER_ENCODING, "chunked")));
    }
}
