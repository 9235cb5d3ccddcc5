use anyhow::Result;
use openrag_sdk::{OpenRagClient, SearchFilters, SearchRequest};

#[tokio::main]
async fn main() -> Result<()> {
    let client = OpenRagClient::from_env()?;

    let request = SearchRequest::new("document processing pipeline")
        .with_limit(5)
        .with_score_threshold(0.3)
        .with_filters(SearchFilters::new().document_types(vec!["application/pdf".to_string()]));

    let response = client.search().query(request).await?;

    for result in response.results {
        println!("{:.2}  {}", result.score, result.filename);
        println!("      {}", result.text.chars().take(120).collect::<String>());
    }

    Ok(())
}
