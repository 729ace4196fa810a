//! 数据模型层

pub mod knowledge_tree;
pub mod markup;
pub mod placeholder;

pub use knowledge_tree::{KnowledgeNode, KnowledgeTree, Level, NodeType, TreeDocument, TreeRow};
pub use markup::{format_content, format_line, MarkupBlock};
pub use placeholder::default_content;
