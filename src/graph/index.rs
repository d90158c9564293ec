//! 图索引
//!
//! 邻接关系的内存索引，支持快速查找

use crate::graph::edge::{Edge, EdgeId};
use crate::graph::vertex::VertexId;
use smallvec::SmallVec;
use std::collections::HashMap;

/// 单个顶点的关联边列表（按边插入顺序）
pub type Incidence = SmallVec<[EdgeId; 4]>;

/// 邻接索引
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    /// 顶点 -> 关联边（自环只记一次）
    incidence: Vec<Incidence>,
    /// 无序端点对 -> 边 ID 列表（支持多重边）
    pair_to_edges: HashMap<(VertexId, VertexId), SmallVec<[EdgeId; 2]>>,
    /// 边编码 -> 边 ID 列表（精确字符串匹配）
    encoding_to_edges: HashMap<String, SmallVec<[EdgeId; 2]>>,
}

impl AdjacencyIndex {
    /// 创建新索引
    pub fn new() -> Self {
        Self::default()
    }

    /// 为新顶点分配空的关联列表
    pub fn add_vertex(&mut self, id: VertexId) {
        debug_assert_eq!(id.index(), self.incidence.len());
        self.incidence.push(Incidence::new());
    }

    /// 添加边索引
    pub fn add_edge(&mut self, edge: &Edge) {
        let id = edge.id();
        let (a, b) = edge.endpoints();

        self.incidence[a.index()].push(id);
        if a != b {
            self.incidence[b.index()].push(id);
        }

        self.pair_to_edges
            .entry(edge.unordered_pair())
            .or_default()
            .push(id);
        self.encoding_to_edges
            .entry(edge.encoding().to_string())
            .or_default()
            .push(id);
    }

    /// 获取顶点的关联边
    pub fn incident(&self, v: VertexId) -> &[EdgeId] {
        self.incidence
            .get(v.index())
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// 获取两点之间的所有边（与方向无关）
    pub fn edges_between(&self, a: VertexId, b: VertexId) -> &[EdgeId] {
        let key = if a <= b { (a, b) } else { (b, a) };
        self.pair_to_edges
            .get(&key)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// 两点是否相邻（任一方向）
    pub fn adjacent(&self, a: VertexId, b: VertexId) -> bool {
        !self.edges_between(a, b).is_empty()
    }

    /// 是否存在编码完全一致的边
    pub fn has_encoding(&self, encoding: &str) -> bool {
        self.encoding_to_edges.contains_key(encoding)
    }

    /// 是否存在平行边
    pub fn has_parallel(&self) -> bool {
        self.pair_to_edges.values().any(|ids| ids.len() > 1)
    }

    /// 顶点的度（自环计一次）
    pub fn degree(&self, v: VertexId) -> usize {
        self.incident(v).len()
    }
}
