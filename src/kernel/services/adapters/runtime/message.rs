use crate::kernel::ResolvedContent;
use crate::models::KnowledgeNode;

pub enum AppMessage {
    TreeLoaded {
        roots: Vec<KnowledgeNode>,
    },
    TreeLoadFailed {
        error: String,
    },
    ContentResolved {
        request_id: u64,
        content: ResolvedContent,
    },
}
