use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Formatter};
use tcapi_core::utils::redact_digits;

/// Which side of the identity card the image shows.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardSide {
    /// The portrait side carrying name, sex, nation, birth, address and
    /// the citizen id number.
    Front,
    /// The national-emblem side carrying the issuing authority and the
    /// validity period.
    Back,
}

/// Body of one `IDCardOCR` call, serialized field-for-field as the service
/// expects it. `config` is an opaque JSON string passed through verbatim;
/// the service parses it, we never do.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct IdCardOcrRequest<'a> {
    pub image_base64: &'a str,
    pub card_side: CardSide,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<&'a str>,
}

/// Top level of every API 3.0 response. The service wraps both success and
/// service-level failure in a `Response` object; a body without one is not
/// an API response at all.
#[derive(Deserialize)]
pub(crate) struct Envelope {
    #[serde(rename = "Response")]
    pub response: Option<ResponseBody>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ResponseBody {
    #[serde(default)]
    pub error: Option<UpstreamErrorBody>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id_num: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub nation: Option<String>,
    #[serde(default)]
    pub birth: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct UpstreamErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

/// Recognized fields of one identity-card image.
///
/// Fields the service omitted or sent as `null` are mapped to empty
/// strings, so callers never deal with an `Option` per field. The complete
/// body as received stays available in `raw_json` for audit and debugging.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct OcrResult {
    /// Holder name.
    pub name: String,
    /// Citizen id number.
    pub id_number: String,
    /// Registered address.
    pub address: String,
    /// Sex as printed on the card.
    pub sex: String,
    /// Nation (ethnic group) as printed on the card.
    pub nation: String,
    /// Birth date as printed on the card.
    pub birth: String,
    /// Complete response body as received.
    pub raw_json: String,
}

impl Debug for OcrResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // Long digit runs are masked so a debug-logged result does not leak
        // the id number; the other fields are printed as is.
        f.debug_struct("OcrResult")
            .field("name", &self.name)
            .field("id_number", &redact_digits(&self.id_number))
            .field("address", &self.address)
            .field("sex", &self.sex)
            .field("nation", &self.nation)
            .field("birth", &self.birth)
            .field("raw_json", &redact_digits(&self.raw_json))
            .finish()
    }
}
