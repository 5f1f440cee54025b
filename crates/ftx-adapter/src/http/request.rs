/*
[INPUT]:  Endpoint method/path/auth flag plus caller-supplied params and body
[OUTPUT]: Immutable request descriptor and canonical signable payload
[POS]:    HTTP layer - request description before signing/transport
[UPDATE]: When changing the canonical payload format
*/

use std::collections::BTreeMap;

use reqwest::Method;
use serde::Serialize;

use crate::http::Result;

/// Immutable description of one intended API call.
///
/// Endpoint wrappers build a descriptor with the fixed method/path/auth
/// flag for their operation, fold typed arguments into query parameters
/// or a JSON body, then move it into the client. Nothing mutates a
/// descriptor after hand-off, so the signed payload and the transmitted
/// request cannot diverge.
///
/// Query parameters live in a `BTreeMap`: encoding iterates keys in
/// sorted order, so the same parameter set always produces the same
/// query string no matter the insertion order. The signature covers the
/// encoded string verbatim and depends on that stability.
pub(crate) struct Request {
    pub method: Method,
    pub path: String,
    pub params: BTreeMap<String, String>,
    pub body: Option<Vec<u8>>,
    pub auth: bool,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>, auth: bool) -> Self {
        Self {
            method,
            path: path.into(),
            params: BTreeMap::new(),
            body: None,
            auth,
        }
    }

    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.insert(key.to_string(), value.to_string());
        self
    }

    /// Add a query parameter only when the caller supplied a value.
    pub fn opt_param(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    pub fn json_body<B: Serialize>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }
}

/// Build the canonical signable payload:
/// `<nonce><METHOD><path>[?<query>][<body>]`, no separators.
///
/// `path` and `query` must come from the finalized request URL - the
/// exchange reconstructs this string from the literal request line and
/// body, so any divergence invalidates the signature.
pub(crate) fn canonical_payload(
    nonce: i64,
    method: &Method,
    path: &str,
    query: Option<&str>,
    body: Option<&[u8]>,
) -> Vec<u8> {
    let mut payload = format!("{nonce}{method}{path}").into_bytes();
    if let Some(query) = query {
        if !query.is_empty() {
            payload.push(b'?');
            payload.extend_from_slice(query.as_bytes());
        }
    }
    if let Some(body) = body {
        payload.extend_from_slice(body);
    }
    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_params_encode_sorted() {
        let forward = Request::new(Method::GET, "/markets", false)
            .param("a", "1")
            .param("b", "2");
        let reverse = Request::new(Method::GET, "/markets", false)
            .param("b", "2")
            .param("a", "1");

        let encode = |r: &Request| {
            r.params
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("&")
        };
        assert_eq!(encode(&forward), "a=1&b=2");
        assert_eq!(encode(&forward), encode(&reverse));
    }

    #[rstest]
    #[case(Method::GET, "/markets", None, None, "1588591856950GET/markets")]
    #[case(
        Method::GET,
        "/orders",
        Some("market=BTC-PERP"),
        None,
        "1588591856950GET/orders?market=BTC-PERP"
    )]
    #[case(
        Method::POST,
        "/orders",
        None,
        Some(r#"{"market":"BTC-PERP"}"#),
        r#"1588591856950POST/orders{"market":"BTC-PERP"}"#
    )]
    #[case(Method::DELETE, "/orders/123", Some(""), None, "1588591856950DELETE/orders/123")]
    fn test_canonical_payload(
        #[case] method: Method,
        #[case] path: &str,
        #[case] query: Option<&str>,
        #[case] body: Option<&str>,
        #[case] expected: &str,
    ) {
        let payload = canonical_payload(
            1_588_591_856_950,
            &method,
            path,
            query,
            body.map(str::as_bytes),
        );
        assert_eq!(payload, expected.as_bytes());
    }

    #[test]
    fn test_canonical_payload_appends_body_verbatim() {
        let body = br#"{"size":1,"price":100}"#;
        let payload = canonical_payload(1, &Method::POST, "/orders", None, Some(body));
        assert!(payload.ends_with(body));
    }
}
