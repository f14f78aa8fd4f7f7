use crate::{Context, Result};
use log::{debug, warn};
use std::fmt::{self, Debug};
use std::sync::Arc;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is valid.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by signer to load the credential from the environment.
///
/// Service may require different credential to sign the request, for example, Tencent Cloud
/// requires secret id and secret key, while Google Cloud Storage requires token.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + 'static {
    /// Credential returned by this provider.
    type Credential: SigningCredential;

    /// Load credential from current env.
    ///
    /// Returns `Ok(None)` when this provider has nothing to offer so that
    /// callers can fall through to the next source.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to sign the request.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + 'static {
    /// Credential used by this signer.
    type Credential: SigningCredential;

    /// Sign the request parts in place.
    ///
    /// ## Payload
    ///
    /// The `payload` parameter carries the exact body bytes the caller is
    /// going to transmit. Signature schemes that hash the body must hash
    /// these bytes and nothing else, otherwise the service will reject the
    /// request with a signature mismatch.
    async fn sign_request(
        &self,
        ctx: &Context,
        req: &mut http::request::Parts,
        payload: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()>;
}

/// A chain of credential providers that will be tried in order.
///
/// The first provider that returns a credential wins. Providers that fail
/// are logged and skipped so that one broken source does not take down the
/// whole chain.
pub struct ProvideCredentialChain<K: SigningCredential> {
    providers: Vec<Arc<dyn ProvideCredential<Credential = K>>>,
}

impl<K: SigningCredential> ProvideCredentialChain<K> {
    /// Create a new empty credential provider chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Add a credential provider to the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = K> + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }
}

impl<K: SigningCredential> Default for ProvideCredentialChain<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: SigningCredential> Debug for ProvideCredentialChain<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers_count", &self.providers.len())
            .finish()
    }
}

#[async_trait::async_trait]
impl<K: SigningCredential> ProvideCredential for ProvideCredentialChain<K> {
    type Credential = K;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            debug!("trying credential provider: {provider:?}");

            match provider.provide_credential(ctx).await {
                Ok(Some(cred)) => {
                    debug!("loaded credential from provider: {provider:?}");
                    return Ok(Some(cred));
                }
                Ok(None) => continue,
                Err(e) => {
                    warn!("credential provider {provider:?} failed: {e:?}");
                    continue;
                }
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[derive(Clone, Debug)]
    struct TestCredential {
        token: String,
    }

    impl SigningCredential for TestCredential {
        fn is_valid(&self) -> bool {
            !self.token.is_empty()
        }
    }

    #[derive(Debug)]
    struct FixedProvider(&'static str);

    #[async_trait::async_trait]
    impl ProvideCredential for FixedProvider {
        type Credential = TestCredential;

        async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
            Ok(Some(TestCredential {
                token: self.0.to_string(),
            }))
        }
    }

    #[derive(Debug)]
    struct EmptyProvider;

    #[async_trait::async_trait]
    impl ProvideCredential for EmptyProvider {
        type Credential = TestCredential;

        async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
            Ok(None)
        }
    }

    #[derive(Debug)]
    struct FailingProvider;

    #[async_trait::async_trait]
    impl ProvideCredential for FailingProvider {
        type Credential = TestCredential;

        async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
            Err(Error::unexpected("provider exploded"))
        }
    }

    #[tokio::test]
    async fn test_chain_returns_first_credential() {
        let chain = ProvideCredentialChain::new()
            .push(EmptyProvider)
            .push(FixedProvider("first"))
            .push(FixedProvider("second"));

        let cred = chain
            .provide_credential(&Context::new())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cred.token, "first");
    }

    #[tokio::test]
    async fn test_chain_skips_failing_provider() {
        let chain = ProvideCredentialChain::new()
            .push(FailingProvider)
            .push(FixedProvider("fallback"));

        let cred = chain
            .provide_credential(&Context::new())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cred.token, "fallback");
    }

    #[tokio::test]
    async fn test_chain_empty_returns_none() {
        let chain: ProvideCredentialChain<TestCredential> = ProvideCredentialChain::new();
        let cred = chain.provide_credential(&Context::new()).await.unwrap();
        assert!(cred.is_none());
    }

    #[test]
    fn test_option_credential_validity() {
        let some: Option<TestCredential> = Some(TestCredential {
            token: "t".to_string(),
        });
        let empty: Option<TestCredential> = Some(TestCredential {
            token: String::new(),
        });
        let none: Option<TestCredential> = None;

        assert!(some.is_valid());
        assert!(!empty.is_valid());
        assert!(!none.is_valid());
    }
}
