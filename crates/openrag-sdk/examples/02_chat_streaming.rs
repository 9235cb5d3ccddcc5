use std::io::Write;

use anyhow::Result;
use openrag_sdk::{ChatRequest, OpenRagClient};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = OpenRagClient::from_env()?;

    let mut stream = client
        .chat()
        .stream(ChatRequest::new("Explain RAG in two sentences."))
        .await?;

    while let Some(delta) = stream.next_text().await {
        print!("{}", delta?);
        std::io::stdout().flush()?;
    }
    println!();

    for source in stream.sources() {
        println!("source: {} (score {:.2})", source.filename, source.score);
    }
    if let Some(chat_id) = stream.chat_id() {
        println!("conversation: {chat_id}");
    }

    Ok(())
}
