use std::fmt::{Debug, Formatter};

use tcapi_core::time::{now, DateTime};
use tcapi_core::utils::Redact;
use tcapi_core::SigningCredential;

/// Credential for Tencent Cloud services.
///
/// The `Debug` implementation redacts both secrets, so a credential can show
/// up in logs and error chains without leaking anything usable.
#[derive(Default, Clone)]
pub struct Credential {
    /// Secret ID (the `AKID...` identifier)
    pub secret_id: String,
    /// Secret Key
    pub secret_key: String,
    /// Security token for temporary credentials
    pub security_token: Option<String>,
    /// Expiration time for this credential
    pub expires_in: Option<DateTime>,
}

impl Credential {
    /// Create a credential from a long-lived secret id and secret key.
    pub fn new(secret_id: &str, secret_key: &str) -> Self {
        Self {
            secret_id: secret_id.to_string(),
            secret_key: secret_key.to_string(),
            security_token: None,
            expires_in: None,
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("secret_id", &Redact::from(&self.secret_id))
            .field("secret_key", &Redact::from(&self.secret_key))
            .field("security_token", &Redact::from(&self.security_token))
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        if self.secret_id.is_empty() || self.secret_key.is_empty() {
            return false;
        }
        // Take 120s as buffer to avoid edge cases.
        if let Some(valid) = self
            .expires_in
            .map(|v| v > now() + chrono::TimeDelta::try_minutes(2).expect("in bounds"))
        {
            return valid;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(Credential::new("AKID_TEST", "secret_TEST").is_valid());
        assert!(!Credential::new("", "secret_TEST").is_valid());
        assert!(!Credential::new("AKID_TEST", "").is_valid());
        assert!(!Credential::default().is_valid());
    }

    #[test]
    fn test_is_valid_with_expiry() {
        let mut cred = Credential::new("AKID_TEST", "secret_TEST");

        cred.expires_in = Some(now() + chrono::TimeDelta::try_hours(1).unwrap());
        assert!(cred.is_valid());

        // Within the 120s refresh buffer counts as expired.
        cred.expires_in = Some(now() + chrono::TimeDelta::try_seconds(30).unwrap());
        assert!(!cred.is_valid());

        cred.expires_in = Some(now() - chrono::TimeDelta::try_hours(1).unwrap());
        assert!(!cred.is_valid());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let cred = Credential {
            secret_id: "AKIDEXAMPLEEXAMPLEEXAMPLE".to_string(),
            secret_key: "supersecretkeyvalue".to_string(),
            security_token: Some("temporarytokenvalue".to_string()),
            expires_in: None,
        };

        let repr = format!("{cred:?}");
        assert!(!repr.contains("supersecretkeyvalue"));
        assert!(!repr.contains("temporarytokenvalue"));
        // Redacted form keeps the first and last three characters visible.
        assert!(repr.contains("AKI***PLE"));
    }
}
