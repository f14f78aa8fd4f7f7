use crate::{Config, Credential};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use tcapi_core::{Context, ProvideCredential, Result};

/// Static configuration based provider.
///
/// Yields a credential only when the held [`Config`] carries both a secret
/// id and a secret key; otherwise it steps aside so the next provider in a
/// chain can try.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new ConfigCredentialProvider
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        match (&self.config.secret_id, &self.config.secret_key) {
            (Some(secret_id), Some(secret_key)) => {
                debug!("loading credential from config");
                Ok(Some(Credential {
                    secret_id: secret_id.clone(),
                    secret_key: secret_key.clone(),
                    security_token: self.config.security_token.clone(),
                    expires_in: None,
                }))
            }
            _ => {
                debug!("incomplete config, skipping");
                Ok(None)
            }
        }
    }
}
