use crate::models::KnowledgeNode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadTree,
    LoadContent {
        request_id: u64,
        node: KnowledgeNode,
    },
}
