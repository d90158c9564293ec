//! 边定义
//!
//! 无向边：一对顶点、唯一边名、可选整数权重。允许自环与平行边。

use crate::graph::label;
use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边 ID（图内按插入顺序分配）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for EdgeId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// 边
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// 边 ID
    id: EdgeId,
    /// 边名
    name: String,
    /// 第一个端点（插入时的方向）
    a: VertexId,
    /// 第二个端点
    b: VertexId,
    /// 规范编码 `a-b`
    encoding: String,
    /// 权重
    weight: Option<i64>,
}

impl Edge {
    /// 创建新边
    pub fn new(
        id: EdgeId,
        name: impl Into<String>,
        (a, a_label): (VertexId, &str),
        (b, b_label): (VertexId, &str),
        weight: Option<i64>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            a,
            b,
            encoding: label::encode(a_label, b_label),
            weight,
        }
    }

    /// 获取边 ID
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// 获取边名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 获取两个端点
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    /// 获取规范编码
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// 获取权重
    pub fn weight(&self) -> Option<i64> {
        self.weight
    }

    /// 是否为自环
    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }

    /// 是否与顶点关联
    pub fn touches(&self, v: VertexId) -> bool {
        self.a == v || self.b == v
    }

    /// 从 `from` 出发经过这条边到达的另一端
    ///
    /// 自环返回自身；`from` 不是端点时返回 `None`。
    pub fn opposite(&self, from: VertexId) -> Option<VertexId> {
        if self.a == from {
            Some(self.b)
        } else if self.b == from {
            Some(self.a)
        } else {
            None
        }
    }

    /// 无序端点对（较小 ID 在前）
    pub fn unordered_pair(&self) -> (VertexId, VertexId) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }
}
