//! 知识树数据模型

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Category,
    Section,
    Subsection,
    Content,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Short badge text used in the sidebar.
    pub fn badge_label(self) -> &'static str {
        match self {
            Level::Beginner => "入门",
            Level::Intermediate => "进阶",
            Level::Advanced => "高级",
        }
    }

    /// Long form used in the content panel and in generated articles.
    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "入门级",
            Level::Intermediate => "进阶级",
            Level::Advanced => "专业级",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeNode {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<KnowledgeNode>>,
}

impl KnowledgeNode {
    pub fn children(&self) -> &[KnowledgeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        !self.has_children()
    }
}

/// Top-level shape of the tree document.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TreeDocument {
    #[serde(default)]
    pub categories: Vec<KnowledgeNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub id: String,
    pub depth: u16,
    pub title: String,
    pub node_type: NodeType,
    pub level: Option<Level>,
    pub has_children: bool,
    pub is_expanded: bool,
}

impl TreeRow {
    pub fn is_leaf(&self) -> bool {
        !self.has_children
    }
}

/// Immutable topic hierarchy plus the mutable expanded set.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeTree {
    roots: Vec<KnowledgeNode>,
    expanded: FxHashSet<String>,
    branches: FxHashSet<String>,
    /// id -> child-index path from the roots
    paths: FxHashMap<String, Vec<usize>>,
}

impl KnowledgeTree {
    pub fn new(roots: Vec<KnowledgeNode>) -> Self {
        let mut tree = Self {
            roots,
            expanded: FxHashSet::default(),
            branches: FxHashSet::default(),
            paths: FxHashMap::default(),
        };
        tree.build_index();

        let root_ids: Vec<String> = tree
            .roots
            .iter()
            .filter(|n| n.has_children())
            .map(|n| n.id.clone())
            .collect();
        tree.expanded.extend(root_ids);
        tree
    }

    pub fn empty() -> Self {
        Self::default()
    }

    fn build_index(&mut self) {
        let mut stack: Vec<(Vec<usize>, &KnowledgeNode)> = self
            .roots
            .iter()
            .enumerate()
            .rev()
            .map(|(i, n)| (vec![i], n))
            .collect();

        while let Some((path, node)) = stack.pop() {
            if self.paths.contains_key(&node.id) {
                tracing::warn!(id = %node.id, "duplicate knowledge node id");
            } else {
                self.paths.insert(node.id.clone(), path.clone());
                if node.has_children() {
                    self.branches.insert(node.id.clone());
                }
            }

            for (i, child) in node.children().iter().enumerate().rev() {
                let mut child_path = path.clone();
                child_path.push(i);
                stack.push((child_path, child));
            }
        }
    }

    pub fn roots(&self) -> &[KnowledgeNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn expanded_ids(&self) -> &FxHashSet<String> {
        &self.expanded
    }

    /// Flips the expanded state of a branch. Leaves and unknown ids are left alone.
    pub fn toggle(&mut self, id: &str) -> bool {
        if !self.branches.contains(id) {
            return false;
        }
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
        true
    }

    pub fn collapse(&mut self, id: &str) -> bool {
        self.expanded.remove(id)
    }

    pub fn find(&self, id: &str) -> Option<&KnowledgeNode> {
        let path = self.paths.get(id)?;
        let (first, rest) = path.split_first()?;
        let mut node = self.roots.get(*first)?;
        for &i in rest {
            node = node.children().get(i)?;
        }
        Some(node)
    }

    /// Root-to-node chain, the node itself included.
    pub fn ancestors(&self, id: &str) -> Vec<&KnowledgeNode> {
        let Some(path) = self.paths.get(id) else {
            return Vec::new();
        };

        let mut chain = Vec::with_capacity(path.len());
        let mut level: &[KnowledgeNode] = &self.roots;
        for &i in path {
            let Some(node) = level.get(i) else {
                break;
            };
            chain.push(node);
            level = node.children();
        }
        chain
    }

    pub fn flatten_for_view(&self) -> Vec<TreeRow> {
        let mut result = Vec::new();
        let mut stack: Vec<(&KnowledgeNode, u16)> =
            self.roots.iter().rev().map(|n| (n, 0)).collect();

        while let Some((node, depth)) = stack.pop() {
            let has_children = node.has_children();
            let is_expanded = has_children && self.expanded.contains(&node.id);
            result.push(TreeRow {
                id: node.id.clone(),
                depth,
                title: node.title.clone(),
                node_type: node.node_type,
                level: node.level,
                has_children,
                is_expanded,
            });

            if is_expanded {
                for child in node.children().iter().rev() {
                    stack.push((child, depth.saturating_add(1)));
                }
            }
        }

        result
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/knowledge_tree.rs"]
mod tests;
