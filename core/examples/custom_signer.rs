use async_trait::async_trait;
use http::request::Parts;
use tcapi_core::hash::hex_hmac_sha256;
use tcapi_core::{Context, Error, ProvideCredential, Result, SignRequest, Signer, SigningCredential};

// Define a custom credential type
#[derive(Clone, Debug)]
struct MyCredential {
    api_key: String,
    api_secret: String,
}

impl SigningCredential for MyCredential {
    fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

// Implement a credential loader that loads from environment
#[derive(Debug)]
struct MyCredentialLoader;

#[async_trait]
impl ProvideCredential for MyCredentialLoader {
    type Credential = MyCredential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let api_key = ctx.env_var("MY_API_KEY").unwrap_or_default();
        let api_secret = ctx.env_var("MY_API_SECRET").unwrap_or_default();

        // For demo purposes, use dummy credentials if none are provided
        if api_key.is_empty() || api_secret.is_empty() {
            println!("No credentials found in environment, using demo credentials");
            return Ok(Some(MyCredential {
                api_key: "demo-api-key".to_string(),
                api_secret: "demo-api-secret".to_string(),
            }));
        }

        Ok(Some(MyCredential { api_key, api_secret }))
    }
}

// Implement a request builder that signs the body bytes
#[derive(Debug)]
struct MyRequestBuilder;

#[async_trait]
impl SignRequest for MyRequestBuilder {
    type Credential = MyCredential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut Parts,
        payload: &[u8],
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential
            .ok_or_else(|| Error::credential_invalid("no credential provided"))?;

        req.headers
            .insert("x-api-key", cred.api_key.parse()?);

        // Sign the exact bytes the caller is going to transmit.
        let signature = hex_hmac_sha256(cred.api_secret.as_bytes(), payload);
        req.headers
            .insert("x-api-signature", signature.parse()?);

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Signing needs no transport; a bare context will do.
    let ctx = Context::new();

    let loader = MyCredentialLoader;
    let builder = MyRequestBuilder;

    let signer = Signer::new(ctx, loader, builder);

    let body = br#"{"hello":"world"}"#;
    let mut parts = http::Request::builder()
        .method("POST")
        .uri("https://api.example.com/v1/users")
        .body(())
        .unwrap()
        .into_parts()
        .0;

    match signer.sign(&mut parts, body).await {
        Ok(_) => {
            println!("Request signed successfully!");
            println!("Headers: {:?}", parts.headers);
        }
        Err(e) => {
            eprintln!("Failed to sign request: {}", e);
        }
    }

    Ok(())
}
