/// Service name in the credential scope.
pub const SERVICE: &str = "ocr";

/// Default public endpoint of the OCR service.
pub const DEFAULT_HOST: &str = "ocr.tencentcloudapi.com";

/// Version of the OCR API spoken by this client.
pub const API_VERSION: &str = "2018-11-19";

/// Action name of the identity-card recognition call.
pub const ID_CARD_OCR_ACTION: &str = "IDCardOCR";

/// Content type of every API 3.0 request body.
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Headers the client sets before signing.
pub const X_TC_ACTION: &str = "x-tc-action";
pub const X_TC_REGION: &str = "x-tc-region";
pub const X_TC_VERSION: &str = "x-tc-version";
