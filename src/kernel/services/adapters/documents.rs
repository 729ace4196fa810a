use crate::kernel::services::ports::{ContentMap, DocumentSource, FetchError};
use crate::models::{KnowledgeNode, TreeDocument};

pub async fn fetch_tree(
    source: &dyn DocumentSource,
    name: &str,
) -> Result<Vec<KnowledgeNode>, FetchError> {
    let text = source.fetch_text(name).await?;
    let doc: TreeDocument = serde_json::from_str(&text).map_err(|source| FetchError::Decode {
        name: name.to_string(),
        source,
    })?;
    Ok(doc.categories)
}

pub async fn fetch_content_map(
    source: &dyn DocumentSource,
    name: &str,
) -> Result<ContentMap, FetchError> {
    let text = source.fetch_text(name).await?;
    serde_json::from_str(&text).map_err(|source| FetchError::Decode {
        name: name.to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/documents.rs"]
mod tests;
