use anyhow::Result;
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use tcapi_core::Context;
use tcapi_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> Result<()> {
    // Create a custom reqwest client with specific configuration
    let client = Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_max_idle_per_host(10)
        .user_agent("tcapi-example/1.0")
        .build()?;

    println!("Created custom HTTP client with:");
    println!("  - 30 second timeout");
    println!("  - Max 10 idle connections per host");
    println!("  - Custom user agent");

    // Create context with the custom client
    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    // Test the HTTP client with a simple request
    let test_url = "https://httpbin.org/post";
    println!("\nTesting HTTP client with POST {test_url}");

    let req = http::Request::builder()
        .method("POST")
        .uri(test_url)
        .header("Content-Type", "application/json")
        .body(Bytes::from(r#"{"message": "Hello from tcapi!"}"#))?;

    match ctx.http_send_as_string(req).await {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            println!("\nResponse body:");
            println!("{}", resp.body());
        }
        Err(e) => {
            eprintln!("Request failed: {e}");
        }
    }

    Ok(())
}
