use anyhow::Result;
use openrag_sdk::{ChatRequest, OpenRagClient};

#[tokio::main]
async fn main() -> Result<()> {
    let client = OpenRagClient::from_env()?;

    let response = client
        .chat()
        .create(ChatRequest::new("What is retrieval-augmented generation?"))
        .await?;

    println!("Response: {}", response.response);

    for source in &response.sources {
        println!("  source: {} (score {:.2})", source.filename, source.score);
    }

    if let Some(chat_id) = response.chat_id {
        println!("Conversation: {chat_id}");
    }

    Ok(())
}
