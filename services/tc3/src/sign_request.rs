use crate::constants::{X_TC_ACTION, X_TC_TIMESTAMP, X_TC_TOKEN};
use crate::Credential;
use async_trait::async_trait;
use http::request::Parts;
use http::{header, HeaderValue, Method};
use log::debug;
use tcapi_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256};
use tcapi_core::time::{format_date, now, DateTime};
use tcapi_core::{Context, Error, Result, SignRequest, SigningRequest};

/// Algorithm name carried in the Authorization header and the string to sign.
const ALGORITHM: &str = "TC3-HMAC-SHA256";

/// Fixed terminator of the credential scope and the key derivation chain.
const TC3_REQUEST: &str = "tc3_request";

/// TC3 signs exactly these three headers, in exactly this order.
const SIGNED_HEADERS: &str = "content-type;host;x-tc-action";

/// RequestSigner that implements Tencent Cloud API 3.0 signing, also known
/// as TC3-HMAC-SHA256.
///
/// - [TC3 signature process](https://cloud.tencent.com/document/api/213/30654)
#[derive(Debug)]
pub struct RequestSigner {
    service: String,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new TC3 signer for the given service, e.g. `ocr` or `cvm`.
    pub fn new(service: &str) -> Self {
        Self {
            service: service.into(),

            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        payload: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid(
                "no credential available for signing",
            ));
        };

        let mut signing_req = SigningRequest::build(req)?;

        if signing_req.method != Method::POST {
            return Err(Error::request_invalid(format!(
                "TC3 only signs POST requests, got {}",
                signing_req.method
            )));
        }
        if !signing_req.query.is_empty() {
            return Err(Error::request_invalid(
                "TC3 does not sign query parameters, move them into the body",
            ));
        }

        // An existing X-TC-Timestamp header wins so that callers can pin the
        // signing time; otherwise stamp the current clock. Either way the
        // value on the wire is the value that got signed.
        let timestamp = match signing_req.headers.get(X_TC_TIMESTAMP) {
            Some(v) => v.to_str()?.parse::<i64>().map_err(|e| {
                Error::request_invalid("x-tc-timestamp header is not a unix timestamp")
                    .with_source(e)
            })?,
            None => self.time.unwrap_or_else(now).timestamp(),
        };

        let host = signing_req.authority.to_string();
        let action = signing_req.header_get_or_default(X_TC_ACTION)?.to_string();
        if action.is_empty() {
            return Err(Error::request_invalid(
                "x-tc-action header is required for signing",
            ));
        }
        let content_type = signing_req
            .header_get_or_default(header::CONTENT_TYPE.as_str())?
            .to_string();
        if content_type.is_empty() {
            return Err(Error::request_invalid(
                "content-type header is required for signing",
            ));
        }

        let authorization = build_authorization(
            cred,
            &self.service,
            &host,
            &action,
            &content_type,
            payload,
            timestamp,
        );

        let mut authorization = HeaderValue::from_str(&authorization)?;
        authorization.set_sensitive(true);
        signing_req
            .headers
            .insert(header::AUTHORIZATION, authorization);

        signing_req
            .headers
            .insert(header::HOST, HeaderValue::from_str(&host)?);
        signing_req.headers.insert(
            X_TC_TIMESTAMP,
            HeaderValue::from_str(&timestamp.to_string())?,
        );

        // The security token rides along unsigned; the service validates it
        // separately and it never enters the canonical request.
        if let Some(token) = &cred.security_token {
            let mut token = HeaderValue::from_str(token)?;
            token.set_sensitive(true);
            signing_req.headers.insert(X_TC_TOKEN, token);
        }

        signing_req.apply(req)
    }
}

/// Derive the complete `Authorization` header value for one request.
///
/// This is a pure function of its inputs: equal inputs always produce an
/// equal header, with no clock or randomness involved. `payload` must be the
/// exact body bytes that will be transmitted, `timestamp` is unix seconds
/// and feeds both the scope date (UTC) and the string to sign.
///
/// Host and action are lowercased in the canonical form; the signature
/// covers exactly `content-type;host;x-tc-action`.
pub fn build_authorization(
    cred: &Credential,
    service: &str,
    host: &str,
    action: &str,
    content_type: &str,
    payload: &[u8],
    timestamp: i64,
) -> String {
    let date = scope_date(timestamp);

    // Scope: "2023-11-14/<service>/tc3_request"
    let scope = format!("{date}/{service}/{TC3_REQUEST}");
    debug!("calculated scope: {scope}");

    let creq = canonical_request(host, action, content_type, payload);
    debug!("calculated canonical request: {creq}");

    // StringToSign:
    //
    // TC3-HMAC-SHA256
    // <timestamp>
    // <scope>
    // <hashed_canonical_request>
    let string_to_sign = format!(
        "{ALGORITHM}\n{timestamp}\n{scope}\n{}",
        hex_sha256(creq.as_bytes())
    );
    debug!("calculated string to sign: {string_to_sign}");

    let signing_key = generate_signing_key(&cred.secret_key, &date, service);
    let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

    format!(
        "{ALGORITHM} Credential={}/{scope}, SignedHeaders={SIGNED_HEADERS}, Signature={signature}",
        cred.secret_id
    )
}

fn canonical_request(host: &str, action: &str, content_type: &str, payload: &[u8]) -> String {
    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = String::with_capacity(256);

    // Method, path and query are fixed: API 3.0 endpoints only accept
    // `POST /` with an empty query string.
    f.push_str("POST\n/\n\n");
    f.push_str("content-type:");
    f.push_str(content_type);
    f.push('\n');
    f.push_str("host:");
    f.push_str(&host.to_lowercase());
    f.push('\n');
    f.push_str("x-tc-action:");
    f.push_str(&action.to_lowercase());
    f.push_str("\n\n");
    f.push_str(SIGNED_HEADERS);
    f.push('\n');
    f.push_str(&hex_sha256(payload));

    f
}

fn scope_date(timestamp: i64) -> String {
    // Timestamps outside chrono's range clamp to the epoch; the service
    // rejects such requests with its own error instead of us panicking.
    let time = DateTime::from_timestamp(timestamp, 0).unwrap_or_default();
    format_date(time)
}

fn generate_signing_key(secret: &str, date: &str, service: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("TC3{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), date.as_bytes());
    // Sign service
    let sign_service = hmac_sha256(sign_date.as_slice(), service.as_bytes());
    // Sign request
    hmac_sha256(sign_service.as_slice(), TC3_REQUEST.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tcapi_core::ErrorKind;

    const SECRET_ID: &str = "AKID_TEST";
    const SECRET_KEY: &str = "secret_TEST";
    const HOST: &str = "ocr.tencentcloudapi.com";
    const CONTENT_TYPE: &str = "application/json; charset=utf-8";
    const PAYLOAD: &[u8] = br#"{"ImageBase64":"","CardSide":"FRONT"}"#;
    const TIMESTAMP: i64 = 1700000000;

    const EXPECTED_AUTHORIZATION: &str = "TC3-HMAC-SHA256 \
         Credential=AKID_TEST/2023-11-14/ocr/tc3_request, \
         SignedHeaders=content-type;host;x-tc-action, \
         Signature=7b37c20a9157a5008f395b0b48d2a3eba814574ccc66721cfe18418b41cbf950";

    fn test_credential() -> Credential {
        Credential::new(SECRET_ID, SECRET_KEY)
    }

    fn test_parts() -> Parts {
        http::Request::builder()
            .method(Method::POST)
            .uri("https://ocr.tencentcloudapi.com/")
            .header(header::CONTENT_TYPE, CONTENT_TYPE)
            .header(X_TC_ACTION, "IDCardOCR")
            .body(())
            .expect("request must build")
            .into_parts()
            .0
    }

    #[test]
    fn test_canonical_request_matches_known_vector() {
        let creq = canonical_request(HOST, "IDCardOCR", CONTENT_TYPE, PAYLOAD);

        assert_eq!(
            creq,
            "POST\n\
             /\n\
             \n\
             content-type:application/json; charset=utf-8\n\
             host:ocr.tencentcloudapi.com\n\
             x-tc-action:idcardocr\n\
             \n\
             content-type;host;x-tc-action\n\
             af0101c770ea7ae734d2b313fd0c34fc1d01b695d9c75f6afe138dc8744796ba"
        );
    }

    #[test]
    fn test_authorization_matches_known_vector() {
        let authorization = build_authorization(
            &test_credential(),
            "ocr",
            HOST,
            "IDCardOCR",
            CONTENT_TYPE,
            PAYLOAD,
            TIMESTAMP,
        );

        assert_eq!(authorization, EXPECTED_AUTHORIZATION);
    }

    #[test]
    fn test_authorization_is_deterministic() {
        let sign = || {
            build_authorization(
                &test_credential(),
                "ocr",
                HOST,
                "IDCardOCR",
                CONTENT_TYPE,
                PAYLOAD,
                TIMESTAMP,
            )
        };

        assert_eq!(sign(), sign());
    }

    #[test]
    fn test_authorization_with_config_payload() {
        // Same request with a different card side, an image and a passthrough
        // config string, signed one second before UTC midnight.
        let payload = br#"{"ImageBase64":"aGVsbG8=","CardSide":"BACK","Config":"{\"CropIdCard\":true,\"CropPortrait\":true}"}"#;

        let authorization = build_authorization(
            &test_credential(),
            "ocr",
            HOST,
            "IDCardOCR",
            CONTENT_TYPE,
            payload,
            1700006399,
        );

        assert_eq!(
            authorization,
            "TC3-HMAC-SHA256 \
             Credential=AKID_TEST/2023-11-14/ocr/tc3_request, \
             SignedHeaders=content-type;host;x-tc-action, \
             Signature=0635bb7b0322561d65f0e8e2e920270f865aa644b36c4da5339235231fdbc945"
        );
    }

    #[test]
    fn test_scope_date_is_utc() {
        // One second later the scope date must roll over.
        assert_eq!(scope_date(1700006399), "2023-11-14");
        assert_eq!(scope_date(1700006400), "2023-11-15");

        let authorization = build_authorization(
            &test_credential(),
            "ocr",
            HOST,
            "IDCardOCR",
            CONTENT_TYPE,
            PAYLOAD,
            1700006400,
        );
        assert!(authorization.contains("Credential=AKID_TEST/2023-11-15/ocr/tc3_request,"));
    }

    #[test]
    fn test_authorization_shape() {
        let authorization = build_authorization(
            &test_credential(),
            "ocr",
            HOST,
            "IDCardOCR",
            CONTENT_TYPE,
            PAYLOAD,
            TIMESTAMP,
        );

        assert!(authorization.starts_with("TC3-HMAC-SHA256 Credential="));
        assert!(authorization.contains("SignedHeaders=content-type;host;x-tc-action"));

        let signature = authorization
            .rsplit("Signature=")
            .next()
            .expect("signature must be present");
        assert_eq!(signature.len(), 64);
        assert!(signature
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_payload_changes_signature() {
        let sign = |payload: &[u8]| {
            build_authorization(
                &test_credential(),
                "ocr",
                HOST,
                "IDCardOCR",
                CONTENT_TYPE,
                payload,
                TIMESTAMP,
            )
        };

        assert_ne!(sign(PAYLOAD), sign(br#"{"ImageBase64":"x"}"#));
    }

    #[tokio::test]
    async fn test_sign_request_inserts_headers() -> anyhow::Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut parts = test_parts();
        let signer = RequestSigner::new("ocr")
            .with_time(DateTime::from_timestamp(TIMESTAMP, 0).expect("timestamp must be valid"));

        signer
            .sign_request(&Context::new(), &mut parts, PAYLOAD, Some(&test_credential()))
            .await?;

        assert_eq!(
            parts.headers[header::AUTHORIZATION].to_str()?,
            EXPECTED_AUTHORIZATION
        );
        assert!(parts.headers[header::AUTHORIZATION].is_sensitive());
        assert_eq!(parts.headers[header::HOST].to_str()?, HOST);
        assert_eq!(parts.headers[X_TC_TIMESTAMP].to_str()?, "1700000000");
        assert!(parts.headers.get(X_TC_TOKEN).is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_sign_request_honors_existing_timestamp() -> anyhow::Result<()> {
        let mut parts = test_parts();
        parts
            .headers
            .insert(X_TC_TIMESTAMP, HeaderValue::from_static("1700000000"));

        // No with_time here: the pinned header must win over the clock.
        let signer = RequestSigner::new("ocr");
        signer
            .sign_request(&Context::new(), &mut parts, PAYLOAD, Some(&test_credential()))
            .await?;

        assert_eq!(
            parts.headers[header::AUTHORIZATION].to_str()?,
            EXPECTED_AUTHORIZATION
        );
        assert_eq!(parts.headers[X_TC_TIMESTAMP].to_str()?, "1700000000");

        Ok(())
    }

    #[tokio::test]
    async fn test_sign_request_keeps_security_token_out_of_signature() -> anyhow::Result<()> {
        let mut with_token = test_parts();
        let mut without_token = test_parts();

        let cred = Credential {
            security_token: Some("temporary_token".to_string()),
            ..test_credential()
        };

        let time = DateTime::from_timestamp(TIMESTAMP, 0).expect("timestamp must be valid");
        RequestSigner::new("ocr")
            .with_time(time)
            .sign_request(&Context::new(), &mut with_token, PAYLOAD, Some(&cred))
            .await?;
        RequestSigner::new("ocr")
            .with_time(time)
            .sign_request(
                &Context::new(),
                &mut without_token,
                PAYLOAD,
                Some(&test_credential()),
            )
            .await?;

        // Same signature either way, the token only travels as a header.
        assert_eq!(
            with_token.headers[header::AUTHORIZATION],
            without_token.headers[header::AUTHORIZATION]
        );
        assert_eq!(with_token.headers[X_TC_TOKEN].to_str()?, "temporary_token");
        assert!(with_token.headers[X_TC_TOKEN].is_sensitive());

        Ok(())
    }

    #[tokio::test]
    async fn test_sign_request_rejects_non_post() {
        let mut parts = http::Request::builder()
            .method(Method::GET)
            .uri("https://ocr.tencentcloudapi.com/")
            .header(header::CONTENT_TYPE, CONTENT_TYPE)
            .header(X_TC_ACTION, "IDCardOCR")
            .body(())
            .expect("request must build")
            .into_parts()
            .0;

        let err = RequestSigner::new("ocr")
            .sign_request(&Context::new(), &mut parts, PAYLOAD, Some(&test_credential()))
            .await
            .expect_err("GET must be rejected");
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }

    #[tokio::test]
    async fn test_sign_request_rejects_query_parameters() {
        let mut parts = http::Request::builder()
            .method(Method::POST)
            .uri("https://ocr.tencentcloudapi.com/?debug=1")
            .header(header::CONTENT_TYPE, CONTENT_TYPE)
            .header(X_TC_ACTION, "IDCardOCR")
            .body(())
            .expect("request must build")
            .into_parts()
            .0;

        let err = RequestSigner::new("ocr")
            .sign_request(&Context::new(), &mut parts, PAYLOAD, Some(&test_credential()))
            .await
            .expect_err("query parameters must be rejected");
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }

    #[tokio::test]
    async fn test_sign_request_requires_action_header() {
        let mut parts = http::Request::builder()
            .method(Method::POST)
            .uri("https://ocr.tencentcloudapi.com/")
            .header(header::CONTENT_TYPE, CONTENT_TYPE)
            .body(())
            .expect("request must build")
            .into_parts()
            .0;

        let err = RequestSigner::new("ocr")
            .sign_request(&Context::new(), &mut parts, PAYLOAD, Some(&test_credential()))
            .await
            .expect_err("missing action must be rejected");
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }

    #[tokio::test]
    async fn test_sign_request_requires_authority() {
        let mut parts = http::Request::builder()
            .method(Method::POST)
            .uri("/relative")
            .header(header::CONTENT_TYPE, CONTENT_TYPE)
            .header(X_TC_ACTION, "IDCardOCR")
            .body(())
            .expect("request must build")
            .into_parts()
            .0;

        let err = RequestSigner::new("ocr")
            .sign_request(&Context::new(), &mut parts, PAYLOAD, Some(&test_credential()))
            .await
            .expect_err("relative uri must be rejected");
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }

    #[tokio::test]
    async fn test_sign_request_without_credential_fails() {
        let mut parts = test_parts();

        let err = RequestSigner::new("ocr")
            .sign_request(&Context::new(), &mut parts, PAYLOAD, None)
            .await
            .expect_err("missing credential must be rejected");
        assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    }
}
