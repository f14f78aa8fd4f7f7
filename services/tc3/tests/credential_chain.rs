//! Integration tests for ProvideCredentialChain with TC3 credentials.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tcapi_core::{Context, ProvideCredential, ProvideCredentialChain, Result, StaticEnv};
use tcapi_tc3::{Config, Credential, DefaultCredentialProvider, EnvCredentialProvider};

/// Provider that records how often it was asked.
#[derive(Debug)]
struct CountingProvider {
    name: String,
    return_credential: bool,
    call_count: Arc<Mutex<usize>>,
}

#[async_trait]
impl ProvideCredential for CountingProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        *self.call_count.lock().unwrap() += 1;

        if self.return_credential {
            Ok(Some(Credential::new(
                &format!("{}_id", self.name),
                &format!("{}_key", self.name),
            )))
        } else {
            Ok(None)
        }
    }
}

#[tokio::test]
async fn test_chain_stops_at_first_success() {
    let ctx = Context::new();

    let count1 = Arc::new(Mutex::new(0));
    let count2 = Arc::new(Mutex::new(0));
    let count3 = Arc::new(Mutex::new(0));

    let chain = ProvideCredentialChain::new()
        .push(CountingProvider {
            name: "provider1".to_string(),
            return_credential: false,
            call_count: count1.clone(),
        })
        .push(CountingProvider {
            name: "provider2".to_string(),
            return_credential: true,
            call_count: count2.clone(),
        })
        .push(CountingProvider {
            name: "provider3".to_string(),
            return_credential: true,
            call_count: count3.clone(),
        });

    let cred = chain
        .provide_credential(&ctx)
        .await
        .unwrap()
        .expect("chain must yield a credential");
    assert_eq!(cred.secret_id, "provider2_id");

    assert_eq!(*count1.lock().unwrap(), 1);
    assert_eq!(*count2.lock().unwrap(), 1);
    assert_eq!(*count3.lock().unwrap(), 0);
}

#[tokio::test]
async fn test_chain_all_providers_return_none() {
    let ctx = Context::new();

    let count1 = Arc::new(Mutex::new(0));
    let count2 = Arc::new(Mutex::new(0));

    let chain = ProvideCredentialChain::new()
        .push(CountingProvider {
            name: "provider1".to_string(),
            return_credential: false,
            call_count: count1.clone(),
        })
        .push(CountingProvider {
            name: "provider2".to_string(),
            return_credential: false,
            call_count: count2.clone(),
        });

    assert!(chain.provide_credential(&ctx).await.unwrap().is_none());

    assert_eq!(*count1.lock().unwrap(), 1);
    assert_eq!(*count2.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_chain_with_env_provider() {
    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from_iter([
            (
                "TENCENTCLOUD_SECRET_ID".to_string(),
                "env_id".to_string(),
            ),
            (
                "TENCENTCLOUD_SECRET_KEY".to_string(),
                "env_key".to_string(),
            ),
        ]),
    });

    let chain = ProvideCredentialChain::new().push(EnvCredentialProvider::new());

    let cred = chain
        .provide_credential(&ctx)
        .await
        .unwrap()
        .expect("env provider must yield a credential");
    assert_eq!(cred.secret_id, "env_id");
    assert_eq!(cred.secret_key, "env_key");
}

#[tokio::test]
async fn test_default_provider_reads_environment() {
    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from_iter([
            (
                "TENCENTCLOUD_SECRET_ID".to_string(),
                "default_id".to_string(),
            ),
            (
                "TENCENTCLOUD_SECRET_KEY".to_string(),
                "default_key".to_string(),
            ),
            (
                "TENCENTCLOUD_TOKEN".to_string(),
                "default_token".to_string(),
            ),
        ]),
    });

    let cred = DefaultCredentialProvider::new(Config::default())
        .provide_credential(&ctx)
        .await
        .unwrap()
        .expect("default provider must yield a credential");
    assert_eq!(cred.secret_id, "default_id");
    assert_eq!(cred.security_token, Some("default_token".to_string()));
}
