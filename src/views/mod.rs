//! 视图层模块
//!
//! - TreeView: 知识树侧边栏（纯渲染 + 命中测试）
//! - ContentView: 内容区（欢迎页 / 文章）

pub mod content_view;
pub mod tree_view;

pub use content_view::{ContentSnapshot, ContentView};
pub use tree_view::{TreeSnapshot, TreeView};
