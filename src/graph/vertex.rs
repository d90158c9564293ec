//! 顶点定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（图内按插入顺序分配）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// 顶点
///
/// 标签创建后不可变。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点 ID
    id: VertexId,
    /// 顶点标签
    label: String,
}

impl Vertex {
    /// 创建新顶点
    pub fn new(id: VertexId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    /// 获取顶点 ID
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// 获取顶点标签
    pub fn label(&self) -> &str {
        &self.label
    }

    /// 标签显示宽度（按字符计）
    pub fn width(&self) -> usize {
        self.label.chars().count()
    }
}
