use anyhow::Result;
use tcapi::hash::base64_encode;
use tcapi::ocr::{self, CardSide};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .expect("usage: id_card_ocr <image-file>");
    let image = std::fs::read(&path)?;

    // Credentials come from TENCENTCLOUD_SECRET_ID / TENCENTCLOUD_SECRET_KEY.
    let client = ocr::default_client("ap-guangzhou");

    let result = client
        .id_card_ocr(&base64_encode(&image), CardSide::Front, None)
        .await?;

    println!("name:    {}", result.name);
    println!("sex:     {}", result.sex);
    println!("nation:  {}", result.nation);
    println!("birth:   {}", result.birth);
    println!("address: {}", result.address);
    println!("id:      {}", result.id_number);

    Ok(())
}
