//! 标签校验
//!
//! 顶点标签与边编码的命名规则：
//! - 顶点标签非空，且不含分隔符
//! - 边编码形如 `a-b`，恰好一个分隔符，两侧都是已存在的顶点

use super::graph::Graph;

/// 边编码中的分隔符
pub const SEPARATOR: char = '-';

/// 校验顶点标签
pub fn validate_vertex(label: &str) -> bool {
    !label.is_empty() && !label.contains(SEPARATOR)
}

/// 按分隔符拆分边编码（只做语法检查，不查询图）
///
/// 分隔符必须恰好出现一次，且不能位于首尾。
pub fn split_encoding(text: &str) -> Option<(&str, &str)> {
    if text.matches(SEPARATOR).count() != 1 {
        return None;
    }
    if text.starts_with(SEPARATOR) || text.ends_with(SEPARATOR) {
        return None;
    }
    text.split_once(SEPARATOR)
}

/// 校验边编码：语法合法且两个端点都已存在于图中
pub fn validate_edge_encoding(text: &str, graph: &Graph) -> bool {
    match split_encoding(text) {
        Some((a, b)) => graph.vertex_exists(a) && graph.vertex_exists(b),
        None => false,
    }
}

/// 构造边编码 `a-b`
pub fn encode(a: &str, b: &str) -> String {
    let mut s = String::with_capacity(a.len() + b.len() + 1);
    s.push_str(a);
    s.push(SEPARATOR);
    s.push_str(b);
    s
}
