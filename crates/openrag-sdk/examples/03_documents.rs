use anyhow::Result;
use openrag_sdk::OpenRagClient;

#[tokio::main]
async fn main() -> Result<()> {
    let client = OpenRagClient::from_env()?;

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./report.pdf".to_string());

    let ingested = client.documents().ingest_file(&path).await?;
    println!(
        "Ingested {} as {} ({} chunks)",
        path,
        ingested.document_id.as_deref().unwrap_or("?"),
        ingested.chunks
    );

    Ok(())
}
