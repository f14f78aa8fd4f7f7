// Headers used in the TC3 signing process.
pub const X_TC_ACTION: &str = "x-tc-action";
pub const X_TC_TIMESTAMP: &str = "x-tc-timestamp";
pub const X_TC_TOKEN: &str = "x-tc-token";

// Env values used by Tencent Cloud services.
pub const TENCENTCLOUD_SECRET_ID: &str = "TENCENTCLOUD_SECRET_ID";
pub const TENCENTCLOUD_SECRET_KEY: &str = "TENCENTCLOUD_SECRET_KEY";
pub const TENCENTCLOUD_TOKEN: &str = "TENCENTCLOUD_TOKEN";
pub const TENCENTCLOUD_SECURITY_TOKEN: &str = "TENCENTCLOUD_SECURITY_TOKEN";
pub const TENCENTCLOUD_REGION: &str = "TENCENTCLOUD_REGION";

// Env values used inside TKE clusters.
pub const TKE_SECRET_ID: &str = "TKE_SECRET_ID";
pub const TKE_SECRET_KEY: &str = "TKE_SECRET_KEY";
pub const TKE_REGION: &str = "TKE_REGION";
