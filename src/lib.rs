//! cricket-guide - 板球学习指南终端浏览器
//!
//! 模块结构：
//! - models: 知识树、行级标记格式化、占位内容
//! - kernel: 状态/动作/副作用 store，文档获取服务
//! - core: 输入事件
//! - tui: 终端生命周期与 View trait
//! - views: 侧边栏与内容区（纯渲染 + 命中测试）
//! - app: 工作台（输入分发、布局、主题）

pub mod kernel;
pub mod models;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod core;
#[cfg(feature = "tui")]
pub mod tui;
#[cfg(feature = "tui")]
pub mod views;
