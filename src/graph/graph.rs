//! 图数据结构
//!
//! 内存中的无向多重图：保存顶点与边，在插入时校验结构不变量，
//! 并回答邻接、度数与结构性查询。

use super::edge::{Edge, EdgeId};
use super::index::AdjacencyIndex;
use super::label::{self, SEPARATOR};
use super::vertex::{Vertex, VertexId};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use tracing::debug;

/// 无向多重图
///
/// 顶点与边都按插入顺序保存，所有查询结果都遵循这一顺序。
/// 每次构造都分配独立的存储，实例之间不共享任何容器。
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// 标签 -> 顶点（位置即 `VertexId`）
    vertices: IndexMap<String, Vertex>,
    /// 边名 -> 边（位置即 `EdgeId`）
    edges: IndexMap<String, Edge>,
    /// 邻接索引
    index: AdjacencyIndex,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 由顶点列表和 `(边名, 边编码, 权重)` 列表构造图
    ///
    /// 遇到第一个非法条目立即失败。
    pub fn build<V, N, S>(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = (N, S, Option<i64>)>,
    ) -> Result<Self>
    where
        V: AsRef<str>,
        N: AsRef<str>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for v in vertices {
            graph.add_vertex(v.as_ref())?;
        }
        for (name, encoding, weight) in edges {
            graph.add_edge_encoded(name.as_ref(), encoding.as_ref(), weight)?;
        }
        Ok(graph)
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点
    pub fn add_vertex(&mut self, label: &str) -> Result<VertexId> {
        if !label::validate_vertex(label) {
            return Err(Error::InvalidVertex(format!(
                "顶点 '{}' 不能为空，也不能包含分隔符 '{}'",
                label, SEPARATOR
            )));
        }
        if self.vertices.contains_key(label) {
            return Err(Error::InvalidVertex(format!("顶点 '{}' 已存在", label)));
        }

        let id = VertexId::new(self.vertices.len());
        self.vertices
            .insert(label.to_string(), Vertex::new(id, label));
        self.index.add_vertex(id);

        debug!(vertex = label, id = id.index(), "添加顶点");
        Ok(id)
    }

    /// 顶点是否存在
    pub fn vertex_exists(&self, label: &str) -> bool {
        label::validate_vertex(label) && self.vertices.contains_key(label)
    }

    /// 通过标签获取顶点 ID
    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.vertices.get_index_of(label).map(VertexId::new)
    }

    /// 通过标签获取顶点 ID，不存在时报错
    pub fn require_vertex(&self, label: &str) -> Result<VertexId> {
        self.vertex_id(label)
            .ok_or_else(|| Error::VertexNotFound(label.to_string()))
    }

    /// 获取顶点
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get_index(id.index()).map(|(_, v)| v)
    }

    /// 获取顶点标签
    ///
    /// `id` 必须来自本图。
    pub fn label(&self, id: VertexId) -> &str {
        self.vertices
            .get_index(id.index())
            .map(|(label, _)| label.as_str())
            .unwrap_or_default()
    }

    /// 按插入顺序遍历顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// 按插入顺序遍历顶点 ID
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 图中是否没有顶点
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    // ==================== 边操作 ====================

    /// 添加边
    pub fn add_edge(&mut self, name: &str, a: &str, b: &str, weight: Option<i64>) -> Result<EdgeId> {
        if self.edges.contains_key(name) {
            return Err(Error::InvalidEdge(format!("边名 '{}' 已存在", name)));
        }
        let src = self.vertex_id(a).ok_or_else(|| {
            Error::InvalidEdge(format!("边 '{}' 的端点 '{}' 不存在", name, a))
        })?;
        let dst = self.vertex_id(b).ok_or_else(|| {
            Error::InvalidEdge(format!("边 '{}' 的端点 '{}' 不存在", name, b))
        })?;

        let id = EdgeId::new(self.edges.len());
        let edge = Edge::new(id, name, (src, a), (dst, b), weight);

        // 添加到索引
        self.index.add_edge(&edge);
        self.edges.insert(name.to_string(), edge);

        debug!(edge = name, a, b, ?weight, "添加边");
        Ok(id)
    }

    /// 按编码 `a-b` 添加边
    pub fn add_edge_encoded(&mut self, name: &str, encoding: &str, weight: Option<i64>) -> Result<EdgeId> {
        let (a, b) = label::split_encoding(encoding).ok_or_else(|| {
            Error::InvalidEdge(format!("边 '{}' 的编码 '{}' 格式错误", name, encoding))
        })?;
        self.add_edge(name, a, b, weight)
    }

    /// 是否存在编码完全一致的边（区分方向）
    pub fn edge_exists(&self, encoding: &str) -> bool {
        label::validate_edge_encoding(encoding, self) && self.index.has_encoding(encoding)
    }

    /// 通过边名获取边
    pub fn edge(&self, name: &str) -> Option<&Edge> {
        self.edges.get(name)
    }

    /// 通过 ID 获取边
    ///
    /// `id` 必须来自本图。
    pub fn edge_by_id(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// 按插入顺序遍历边
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 获取两点之间的所有边（与方向无关）
    pub fn edges_between(&self, a: &str, b: &str) -> Vec<&Edge> {
        match (self.vertex_id(a), self.vertex_id(b)) {
            (Some(a), Some(b)) => self
                .index
                .edges_between(a, b)
                .iter()
                .map(|&id| self.edge_by_id(id))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// 是否为简单图视图中的边
    ///
    /// 简单图视图去掉自环，每个无序端点对只保留最早插入的那条边。
    pub fn is_simple_edge(&self, id: EdgeId) -> bool {
        let edge = self.edge_by_id(id);
        if edge.is_loop() {
            return false;
        }
        let (a, b) = edge.endpoints();
        self.index.edges_between(a, b).first() == Some(&id)
    }

    /// 简单图视图中的所有边
    pub fn simple_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges().filter(|e| self.is_simple_edge(e.id()))
    }

    // ==================== 邻接查询 ====================

    /// 获取顶点的关联边 ID（按边插入顺序，自环只出现一次）
    pub fn incident_ids(&self, v: VertexId) -> &[EdgeId] {
        self.index.incident(v)
    }

    /// 获取顶点的关联边名
    pub fn incident_edges(&self, v: &str) -> Vec<String> {
        self.vertex_id(v)
            .map(|id| {
                self.incident_ids(id)
                    .iter()
                    .map(|&e| self.edge_by_id(e).name().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// 获取顶点的邻居（去重，按首次出现的关联边顺序）
    pub fn neighbors(&self, v: &str) -> Vec<String> {
        let Some(id) = self.vertex_id(v) else {
            return Vec::new();
        };
        let mut seen = vec![false; self.vertex_count()];
        let mut result = Vec::new();
        for &e in self.incident_ids(id) {
            if let Some(n) = self.edge_by_id(e).opposite(id) {
                if !seen[n.index()] {
                    seen[n.index()] = true;
                    result.push(self.label(n).to_string());
                }
            }
        }
        result
    }

    /// 顶点的度
    ///
    /// 自环只计一次（不同于通常把自环计为 2 的约定）。不存在的顶点返回 0。
    pub fn degree(&self, v: &str) -> usize {
        self.vertex_id(v)
            .map(|id| self.index.degree(id))
            .unwrap_or(0)
    }

    /// 按 ID 获取顶点的度（自环计一次）
    pub fn degree_of(&self, v: VertexId) -> usize {
        self.index.degree(v)
    }

    // ==================== 结构查询 ====================

    /// 是否存在自环
    pub fn has_loop(&self) -> bool {
        self.edges().any(Edge::is_loop)
    }

    /// 是否存在平行边（同一无序端点对上有两条以上的边）
    pub fn has_parallel_edges(&self) -> bool {
        self.index.has_parallel()
    }

    /// 所有不相邻的有序顶点对
    ///
    /// 对每个有序对 `(a, b)`（含 `a == b`），若 `a-b` 与 `b-a` 都不是已存边，
    /// 则输出 `"a-b"`。外层按第一个顶点的插入顺序。
    pub fn non_adjacent_pairs(&self) -> Vec<String> {
        let mut pairs = Vec::new();
        for a in self.vertex_ids() {
            for b in self.vertex_ids() {
                if !self.index.adjacent(a, b) {
                    pairs.push(label::encode(self.label(a), self.label(b)));
                }
            }
        }
        pairs
    }

    /// 是否为完全图
    ///
    /// 任意两个不同顶点之间至少有一条边。空图与单顶点图视为完全图。
    pub fn is_complete(&self) -> bool {
        let n = self.vertex_count();
        (0..n).all(|i| {
            (i + 1..n).all(|j| self.index.adjacent(VertexId::new(i), VertexId::new(j)))
        })
    }

    // ==================== 展示辅助 ====================

    /// 邻接矩阵（按顶点插入顺序，元素为边数，自环在对角线上计一次）
    pub fn adjacency_matrix(&self) -> Vec<Vec<usize>> {
        let n = self.vertex_count();
        let mut matrix = vec![vec![0; n]; n];
        for edge in self.edges() {
            let (a, b) = edge.endpoints();
            matrix[a.index()][b.index()] += 1;
            if a != b {
                matrix[b.index()][a.index()] += 1;
            }
        }
        matrix
    }

    /// 当前最长顶点标签的宽度（每次按需计算）
    pub fn max_label_width(&self) -> usize {
        self.vertices().map(Vertex::width).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const PB: [&str; 7] = ["J", "C", "E", "P", "M", "T", "Z"];

    /// 帕拉伊巴图（含平行边）
    fn paraiba() -> Graph {
        Graph::build(
            PB,
            [
                ("a1", "J-C", None),
                ("a2", "C-E", None),
                ("a3", "C-E", None),
                ("a4", "C-P", None),
                ("a5", "C-P", None),
                ("a6", "C-M", None),
                ("a7", "C-T", None),
                ("a8", "M-T", None),
                ("a9", "T-Z", None),
            ],
        )
        .unwrap()
    }

    fn paraiba_simple() -> Graph {
        Graph::build(
            PB,
            [
                ("a1", "J-C", None),
                ("a3", "C-E", None),
                ("a4", "C-P", None),
                ("a6", "C-M", None),
                ("a7", "C-T", None),
                ("a8", "M-T", None),
                ("a9", "T-Z", None),
            ],
        )
        .unwrap()
    }

    fn complete(edges: [(&str, &str); 6]) -> Graph {
        Graph::build(
            ["J", "C", "E", "P"],
            edges.map(|(n, e)| (n, e, None)),
        )
        .unwrap()
    }

    fn with_edges(vertices: &[&str], edges: &[(&str, &str)]) -> Graph {
        Graph::build(
            vertices.iter().copied(),
            edges.iter().map(|&(n, e)| (n, e, None)),
        )
        .unwrap()
    }

    #[test]
    fn test_graph_basic() {
        let mut graph = Graph::new();
        let j = graph.add_vertex("J").unwrap();
        let c = graph.add_vertex("C").unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.label(j), "J");
        assert_eq!(graph.vertex_id("C"), Some(c));

        let e = graph.add_edge("a1", "J", "C", Some(3)).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge("a1").unwrap().id(), e);
        assert_eq!(graph.edge_by_id(e).encoding(), "J-C");

        assert!(graph.edge_exists("J-C"));
        assert!(!graph.edge_exists("C-J"));
        assert!(!graph.edge_exists("J-X"));
        assert!(!graph.edge_exists("JC"));
        assert_eq!(graph.neighbors("J"), vec!["C".to_string()]);
    }

    #[test]
    fn test_fresh_storage_per_instance() {
        let mut first = Graph::new();
        first.add_vertex("A").unwrap();
        let second = Graph::new();

        assert_eq!(first.vertex_count(), 1);
        assert_eq!(second.vertex_count(), 0);
        assert!(!second.vertex_exists("A"));
    }

    #[test]
    fn test_invalid_vertex() {
        let mut graph = Graph::new();
        assert!(matches!(graph.add_vertex(""), Err(Error::InvalidVertex(_))));
        assert!(matches!(graph.add_vertex("A-B"), Err(Error::InvalidVertex(_))));

        graph.add_vertex("A").unwrap();
        assert!(matches!(graph.add_vertex("A"), Err(Error::InvalidVertex(_))));
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn test_invalid_edge() {
        let mut graph = with_edges(&["A", "B"], &[("a1", "A-B")]);

        // 边名重复
        assert!(matches!(
            graph.add_edge("a1", "B", "A", None),
            Err(Error::InvalidEdge(_))
        ));
        // 端点不存在
        assert!(matches!(
            graph.add_edge("a2", "A", "C", None),
            Err(Error::InvalidEdge(_))
        ));
        // 编码格式错误
        for bad in ["AB", "A-B-A", "-B", "A-", ""] {
            assert!(matches!(
                graph.add_edge_encoded("a3", bad, None),
                Err(Error::InvalidEdge(_))
            ));
        }
        assert_eq!(graph.edge_count(), 1);

        let built = Graph::build(["A", "B"], [("a1", "A-C", None::<i64>)]);
        assert!(matches!(built, Err(Error::InvalidEdge(_))));
        let built = Graph::build(["A", "A"], Vec::<(&str, &str, Option<i64>)>::new());
        assert!(matches!(built, Err(Error::InvalidVertex(_))));
    }

    #[test]
    fn test_degree_paraiba() {
        let g = paraiba();
        let expected = [("J", 1), ("C", 7), ("E", 2), ("P", 2), ("M", 2), ("T", 3), ("Z", 1)];
        for (v, d) in expected {
            assert_eq!(g.degree(v), d, "degree({})", v);
        }
        assert!(g.has_parallel_edges());
        assert!(!g.has_loop());

        let g = paraiba_simple();
        assert_eq!(g.degree("C"), 5);
        assert!(!g.has_parallel_edges());
        assert!(!g.has_loop());
        assert_eq!(g.degree("X"), 0);
    }

    #[test]
    fn test_degree_loop_counts_once() {
        let g = with_edges(&["A", "B", "C", "D"], &[("a1", "A-A"), ("a2", "B-A"), ("a3", "A-A")]);
        assert_eq!(g.degree("A"), 3);
        assert!(g.has_loop());
        assert!(g.has_parallel_edges());

        let g = with_edges(&["A", "B", "C", "D"], &[("a1", "A-B"), ("a2", "B-B"), ("a3", "B-A")]);
        assert_eq!(g.degree("B"), 3);

        let g = with_edges(&["D"], &[("a2", "D-D")]);
        assert_eq!(g.degree("D"), 1);
        assert!(!g.has_parallel_edges());
    }

    #[test]
    fn test_has_loop() {
        let cases: [(&[&str], &[(&str, &str)]); 3] = [
            (&["A", "B", "C", "D"], &[("a1", "C-A"), ("a2", "C-C"), ("a3", "D-D")]),
            (&["D"], &[("a2", "D-D")]),
            (&["C", "D"], &[("a2", "D-C"), ("a3", "C-C")]),
        ];
        for (vertices, edges) in cases {
            assert!(with_edges(vertices, edges).has_loop());
        }
        assert!(!with_edges(&["A", "B"], &[]).has_loop());
    }

    #[test]
    fn test_incident_edges() {
        let g = paraiba();
        assert_eq!(g.incident_edges("J"), vec!["a1"]);
        assert_eq!(
            g.incident_edges("C"),
            vec!["a1", "a2", "a3", "a4", "a5", "a6", "a7"]
        );
        assert_eq!(g.incident_edges("M"), vec!["a6", "a8"]);
        assert!(g.incident_edges("X").is_empty());
    }

    #[test]
    fn test_non_adjacent_pairs() {
        let g = paraiba();
        let expected = [
            "J-J", "J-E", "J-P", "J-M", "J-T", "J-Z", "C-C", "C-Z", "E-J", "E-E", "E-P", "E-M",
            "E-T", "E-Z", "P-J", "P-E", "P-P", "P-M", "P-T", "P-Z", "M-J", "M-E", "M-P", "M-M",
            "M-Z", "T-J", "T-E", "T-P", "T-T", "Z-J", "Z-C", "Z-E", "Z-P", "Z-M", "Z-Z",
        ];
        assert_eq!(g.non_adjacent_pairs(), expected);

        let g = complete([
            ("a1", "J-C"),
            ("a3", "E-J"),
            ("a4", "J-P"),
            ("a6", "E-C"),
            ("a7", "C-P"),
            ("a8", "P-E"),
        ]);
        assert_eq!(g.non_adjacent_pairs(), ["J-J", "C-C", "E-E", "P-P"]);

        let g = with_edges(&["J"], &[]);
        assert_eq!(g.non_adjacent_pairs(), ["J-J"]);
    }

    #[test]
    fn test_non_adjacent_pairs_partition_ordered_pairs() {
        // 不相邻对与相邻的有序对互不重叠，合起来恰好是全部有序对
        let loops = with_edges(&["A", "B", "C", "D"], &[("a1", "C-A"), ("a2", "C-C"), ("a3", "D-D")]);
        for g in [paraiba(), paraiba_simple(), loops] {
            let pairs = g.non_adjacent_pairs();
            let distinct: HashSet<&String> = pairs.iter().collect();
            assert_eq!(distinct.len(), pairs.len(), "duplicates in {:?}", pairs);

            let mut adjacent: HashSet<String> = HashSet::new();
            for edge in g.edges() {
                let (a, b) = edge.endpoints();
                adjacent.insert(label::encode(g.label(a), g.label(b)));
                adjacent.insert(label::encode(g.label(b), g.label(a)));
            }
            for pair in &pairs {
                assert!(!adjacent.contains(pair), "{} is adjacent", pair);
            }
            assert_eq!(pairs.len() + adjacent.len(), g.vertex_count() * g.vertex_count());
        }
    }

    #[test]
    fn test_is_complete() {
        let edges = [
            ("a1", "J-C"),
            ("a3", "J-E"),
            ("a4", "J-P"),
            ("a6", "C-E"),
            ("a7", "C-P"),
            ("a8", "E-P"),
        ];
        assert!(complete(edges).is_complete());

        // 去掉任意一条边后不再完全
        for skip in 0..edges.len() {
            let partial: Vec<(&str, &str)> = edges
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, &e)| e)
                .collect();
            assert!(!with_edges(&["J", "C", "E", "P"], &partial).is_complete());
        }

        assert!(!paraiba().is_complete());
        assert!(!paraiba_simple().is_complete());
        assert!(with_edges(&["J"], &[]).is_complete());
        assert!(Graph::new().is_complete());
        assert!(with_edges(&["D"], &[("a2", "D-D")]).is_complete());
        assert!(with_edges(&["C", "D"], &[("a2", "D-C"), ("a3", "C-C")]).is_complete());
        assert!(!with_edges(&["A", "B", "C", "D"], &[("a1", "A-A"), ("a2", "B-A")]).is_complete());
    }

    #[test]
    fn test_simple_edges() {
        let g = with_edges(
            &["A", "B", "C"],
            &[("a1", "A-B"), ("a2", "B-A"), ("a3", "B-B"), ("a4", "B-C")],
        );
        let names: Vec<&str> = g.simple_edges().map(Edge::name).collect();
        assert_eq!(names, ["a1", "a4"]);
    }

    #[test]
    fn test_adjacency_matrix_and_width() {
        let g = with_edges(&["A", "Bee", "C"], &[("a1", "A-Bee"), ("a2", "Bee-A"), ("a3", "C-C")]);
        assert_eq!(
            g.adjacency_matrix(),
            vec![vec![0, 2, 0], vec![2, 0, 0], vec![0, 0, 1]]
        );
        assert_eq!(g.max_label_width(), 3);
        assert_eq!(Graph::new().max_label_width(), 0);
    }
}
