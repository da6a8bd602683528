//! Fetch a page, extract its metadata and print it as JSON.
//!
//! Usage: `htmlinfo <url>`
//!
//! Prints the extracted metadata on the first line and the generated oembed
//! summary on the second. Set `RUST_LOG=debug` to see absorbed failures.

use std::error::Error;

use reqwest::header::CONTENT_TYPE;
use rs_htmlinfo::HtmlInfo;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let Some(page_url) = std::env::args().nth(1) else {
        eprintln!("Usage: htmlinfo <url>");
        std::process::exit(2);
    };

    let response = reqwest::get(&page_url).await?.error_for_status()?;
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.bytes().await?;
    tracing::info!(url = %page_url, bytes = body.len(), "page fetched");

    let mut info = HtmlInfo::new();
    info.parse(&body[..], Some(&page_url), content_type.as_deref())
        .await?;

    println!("{}", info.to_json()?);

    if let Some(oembed) = info.generate_oembed_for(&page_url) {
        println!("{}", serde_json::to_string(&oembed)?);
    }

    Ok(())
}
