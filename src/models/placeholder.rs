//! Fallback article text for topics that have no stored content.
//!
//! Output depends on the node alone, so repeated calls are byte-identical.

use std::fmt::Write;

use super::knowledge_tree::{KnowledgeNode, Level, NodeType};

pub fn default_content(node: &KnowledgeNode) -> String {
    match node.node_type {
        NodeType::Content => article(node),
        _ => overview(node),
    }
}

fn article(node: &KnowledgeNode) -> String {
    let title = &node.title;
    // A missing level reads as the top tier.
    let level = node.level.unwrap_or(Level::Advanced).label();
    let intro = format!(
        "{title}是板球学习体系中的重要组成部分。作为{level}内容，本章节将为您详细介绍相关知识点和实践应用。"
    );

    let mut out = String::new();
    let _ = writeln!(out, "# {title}");
    out.push('\n');
    out.push_str("## 概述\n\n");
    let _ = writeln!(out, "{intro}");
    out.push('\n');
    out.push_str("## 主要内容\n\n");
    out.push_str("### 1. 基础概念\n\n");
    let _ = writeln!(out, "在深入学习{title}之前，我们需要先了解一些基础概念：");
    out.push('\n');
    out.push_str("- **核心原理**：解释该技术的根本原理和作用机制\n");
    out.push_str("- **应用场景**：说明在什么情况下使用这种技术\n");
    out.push_str("- **与其他技术的关系**：分析与其他板球技术的关联\n\n");
    out.push_str("### 2. 技术要点\n\n");
    out.push_str("#### 2.1 关键要素\n\n");
    let _ = writeln!(out, "{title}包含以下几个关键要素：");
    out.push('\n');
    out.push_str("1. **动作要领**：详细说明正确的动作步骤\n");
    out.push_str("2. **常见错误**：列举初学者容易犯的错误\n");
    out.push_str("3. **练习方法**：提供有效的练习建议\n\n");
    out.push_str("#### 2.2 实践指导\n\n");
    out.push_str("- **训练计划**：制定循序渐进的训练计划\n");
    out.push_str("- **评估标准**：建立技能评估的标准\n");
    out.push_str("- **进阶路径**：指明进一步提升的方向\n\n");
    out.push_str("### 3. 高级应用\n\n");
    out.push_str("对于已经掌握基础内容的学员，可以进一步学习：\n\n");
    out.push_str("- **战术应用**：在比赛中的实际运用\n");
    out.push_str("- **心理因素**：心理准备和心态调整\n");
    out.push_str("- **创新发展**：结合个人特点的个性化发展\n\n");
    out.push_str("## 练习建议\n\n");
    out.push_str("1. **基础练习**：从最基础的动作开始练习\n");
    out.push_str("2. **进阶训练**：逐步提高难度和复杂度\n");
    out.push_str("3. **实战应用**：在模拟比赛环境中应用所学技能\n\n");
    out.push_str("## 注意事项\n\n");
    out.push_str("- 安全第一：在任何练习中都要注意安全\n");
    out.push_str("- 循序渐进：不要急于求成，稳扎稳打\n");
    out.push_str("- 持续练习：技能的提升需要持续的练习和积累\n\n");
    out.push_str("## 相关链接\n\n");
    out.push_str("- [板球基础知识](/basics)\n");
    out.push_str("- [技术训练方法](/training)\n");
    out.push_str("- [战术策略分析](/tactics)\n\n");
    out.push_str("---\n\n");
    out.push_str("*本内容为板球学习指南的一部分，旨在帮助学习者系统掌握板球知识和技能。*");
    out
}

fn overview(node: &KnowledgeNode) -> String {
    let title = &node.title;

    let mut out = String::new();
    let _ = writeln!(out, "# {title}");
    out.push('\n');
    out.push_str("## 概述\n\n");
    let _ = writeln!(
        out,
        "{title}是板球学习体系中的重要组成部分。本章节将为您介绍相关内容概览。"
    );
    out.push('\n');
    out.push_str("## 主要内容\n\n");
    out.push_str("### 包含的知识点\n\n");
    out.push_str("本章节包含以下主要知识点：\n\n");
    // Only an absent list counts as "no children"; an empty one leaves a blank line.
    match &node.children {
        Some(children) if children.is_empty() => out.push('\n'),
        Some(children) => {
            for child in children {
                let _ = writeln!(out, "- **{}**", child.title);
            }
        }
        None => out.push_str("- 暂无子知识点\n"),
    }
    out.push('\n');
    out.push_str("## 学习建议\n\n");
    out.push_str("- 从基础概念开始学习\n");
    out.push_str("- 结合实际练习加深理解\n");
    out.push_str("- 循序渐进掌握技能\n\n");
    out.push_str("---\n\n");
    out.push_str("*点击左侧导航中的具体知识点开始学习*");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/models/placeholder.rs"]
mod tests;
