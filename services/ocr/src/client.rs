use crate::constants::{
    API_VERSION, CONTENT_TYPE_JSON, DEFAULT_HOST, ID_CARD_OCR_ACTION, SERVICE, X_TC_ACTION,
    X_TC_REGION, X_TC_VERSION,
};
use crate::error::ApiError;
use crate::types::{CardSide, Envelope, IdCardOcrRequest, OcrResult, ResponseBody};
use bytes::Bytes;
use http::{header, Method, Request};
use log::debug;
use tcapi_core::utils::redact_digits;
use tcapi_core::{Context, ProvideCredential, Signer};
use tcapi_tc3::{Credential, RequestSigner};

/// Longest body snippet carried inside a malformed-response error.
const SNIPPET_LEN: usize = 256;

/// Client for the Tencent Cloud OCR service.
///
/// A client owns a [`Context`] (transport and environment) and a
/// [`Signer`], and may be shared freely: it is `Clone`, and every call
/// signs and sends one independent POST with no state shared between
/// concurrent calls. Timeouts and pooling are transport concerns;
/// configure them on the HTTP client behind the `Context`.
#[derive(Clone, Debug)]
pub struct OcrClient {
    ctx: Context,
    signer: Signer<Credential>,
    host: String,
    region: String,
}

impl OcrClient {
    /// Create a client for the given region, e.g. `ap-guangzhou`, talking
    /// to the default public endpoint.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = Credential>,
        region: &str,
    ) -> Self {
        let signer = Signer::new(ctx.clone(), provider, RequestSigner::new(SERVICE));

        Self {
            ctx,
            signer,
            host: DEFAULT_HOST.to_string(),
            region: region.to_string(),
        }
    }

    /// Talk to a different endpoint, e.g. the regional
    /// `ocr.ap-guangzhou.tencentcloudapi.com`.
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    /// Recognize one side of a Chinese resident identity card.
    ///
    /// `image_base64` is the base64-encoded image; encoding is the caller's
    /// job (`tcapi_core::hash::base64_encode` fits). `config` is the
    /// optional `Config` field of the call, passed through verbatim as an
    /// opaque JSON string without validation.
    ///
    /// The returned future resolves exactly once: either to the recognized
    /// fields or to one [`ApiError`] telling how far the call got. Dropping
    /// the future abandons the call.
    pub async fn id_card_ocr(
        &self,
        image_base64: &str,
        card_side: CardSide,
        config: Option<&str>,
    ) -> Result<OcrResult, ApiError> {
        let body = IdCardOcrRequest {
            image_base64,
            card_side,
            config,
        };
        let body = serde_json::to_vec(&body).map_err(|e| {
            ApiError::Construction(format!("failed to serialize request body: {e}"))
        })?;

        let raw = self.post(ID_CARD_OCR_ACTION, body).await?;
        classify_response(raw)
    }

    /// Sign and send one API call, returning the body text of a successful
    /// response.
    async fn post(&self, action: &str, body: Vec<u8>) -> Result<String, ApiError> {
        let req = Request::builder()
            .method(Method::POST)
            .uri(format!("https://{}/", self.host))
            .header(header::CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(X_TC_ACTION, action)
            .header(X_TC_VERSION, API_VERSION)
            .header(X_TC_REGION, self.region.as_str())
            .body(())
            .map_err(|e| ApiError::Construction(format!("failed to build request: {e}")))?;

        let (mut parts, ()) = req.into_parts();
        self.signer
            .sign(&mut parts, &body)
            .await
            .map_err(|e| ApiError::Construction(format!("failed to sign request: {e}")))?;

        debug!("sending {action} request to {}", self.host);

        // The buffer that was hashed into the signature is the buffer that
        // goes on the wire; re-serializing here would break the signature.
        let req = Request::from_parts(parts, Bytes::from(body));
        let resp = self
            .ctx
            .http_send(req)
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let (parts, body) = resp.into_parts();
        let body = String::from_utf8_lossy(&body).into_owned();
        debug!("got {} response: {}", parts.status, redact_digits(&body));

        if !parts.status.is_success() {
            return Err(ApiError::HttpStatus {
                status: parts.status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

/// Map a success-status body to a result or a typed error.
///
/// The envelope decides: no `Response` object means the body is not an API
/// response, `Response.Error` is a service-level failure even on HTTP 200,
/// and anything else is a result with absent fields mapped to `""`.
fn classify_response(raw: String) -> Result<OcrResult, ApiError> {
    let envelope: Envelope = serde_json::from_str(&raw).map_err(|e| {
        ApiError::MalformedResponse(format!("{e}; body: {}", body_snippet(&raw)))
    })?;

    let Some(response) = envelope.response else {
        return Err(ApiError::MalformedResponse(format!(
            "missing Response envelope; body: {}",
            body_snippet(&raw)
        )));
    };

    let ResponseBody {
        error,
        request_id,
        name,
        id_num,
        address,
        sex,
        nation,
        birth,
    } = response;

    if let Some(error) = error {
        return Err(ApiError::Upstream {
            code: error.code,
            message: error.message,
            request_id: request_id.unwrap_or_default(),
        });
    }

    Ok(OcrResult {
        name: name.unwrap_or_default(),
        id_number: id_num.unwrap_or_default(),
        address: address.unwrap_or_default(),
        sex: sex.unwrap_or_default(),
        nation: nation.unwrap_or_default(),
        birth: birth.unwrap_or_default(),
        raw_json: raw,
    })
}

fn body_snippet(body: &str) -> String {
    match body.char_indices().nth(SNIPPET_LEN) {
        Some((at, _)) => format!("{}...", &body[..at]),
        None => body.to_string(),
    }
}
