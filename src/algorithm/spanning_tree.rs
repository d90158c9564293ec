//! 最小生成树
//!
//! Prim（从一个顶点向外扩展）与 Kruskal（并查集）两种构造方式。
//! 图不连通时，Prim 只覆盖起点所在的连通分量，Kruskal 给出最小生成森林。

use crate::error::{Error, Result};
use crate::graph::{Edge, EdgeId, Graph, VertexId};
use priority_queue::PriorityQueue;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::debug;

/// 生成树（或生成森林）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningTree {
    /// 根（Prim 的起点；Kruskal 没有根）
    pub root: Option<String>,
    /// 覆盖的顶点，按加入顺序
    pub vertices: Vec<String>,
    /// 树边，按加入顺序
    pub edges: Vec<String>,
    /// 总权重
    pub total_weight: i64,
    /// 是否连通并覆盖全图
    pub spanning: bool,
}

/// 生成树构造器
pub struct SpanningTreeBuilder<'a> {
    graph: &'a Graph,
}

impl<'a> SpanningTreeBuilder<'a> {
    /// 创建构造器
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Prim 算法
    ///
    /// 每一步沿跨越树边界的最小权重边扩展，权重相同时取先插入的边。
    /// 未指定起点时选度最小的顶点（相同时按插入顺序）。
    pub fn prim(&self, start: Option<&str>) -> Result<SpanningTree> {
        let graph = self.graph;
        let start = match start {
            Some(label) => graph.require_vertex(label)?,
            None => self.min_degree_vertex()?,
        };

        let mut in_tree = vec![false; graph.vertex_count()];
        let mut vertices = vec![start];
        let mut edges = Vec::new();
        let mut total_weight: i64 = 0;
        // 树外顶点 -> 通向它的最优边
        let mut frontier: PriorityQueue<VertexId, Reverse<(i64, EdgeId)>> = PriorityQueue::new();

        in_tree[start.index()] = true;
        self.extend_frontier(start, &in_tree, &mut frontier)?;

        while let Some((v, Reverse((weight, e)))) = frontier.pop() {
            in_tree[v.index()] = true;
            vertices.push(v);
            edges.push(e);
            total_weight = add_weight(total_weight, weight, graph.edge_by_id(e))?;
            self.extend_frontier(v, &in_tree, &mut frontier)?;
        }

        let tree = SpanningTree {
            root: Some(graph.label(start).to_string()),
            spanning: vertices.len() == graph.vertex_count(),
            vertices: labels(graph, &vertices),
            edges: edge_names(graph, &edges),
            total_weight,
        };
        debug!(
            root = graph.label(start),
            edges = tree.edges.len(),
            total_weight,
            spanning = tree.spanning,
            "Prim 完成"
        );
        Ok(tree)
    }

    fn extend_frontier(
        &self,
        v: VertexId,
        in_tree: &[bool],
        frontier: &mut PriorityQueue<VertexId, Reverse<(i64, EdgeId)>>,
    ) -> Result<()> {
        for &e in self.graph.incident_ids(v) {
            let edge = self.graph.edge_by_id(e);
            let Some(w) = edge.opposite(v) else {
                continue;
            };
            if edge.is_loop() || in_tree[w.index()] {
                continue;
            }
            frontier.push_increase(w, Reverse((weight_of(edge)?, e)));
        }
        Ok(())
    }

    fn min_degree_vertex(&self) -> Result<VertexId> {
        let graph = self.graph;
        let mut best: Option<(usize, VertexId)> = None;
        for v in graph.vertex_ids() {
            let degree = graph.degree_of(v);
            if best.map_or(true, |(d, _)| degree < d) {
                best = Some((degree, v));
            }
        }
        best.map(|(_, v)| v)
            .ok_or_else(|| Error::EmptyGraph("Prim 需要至少一个顶点".to_string()))
    }

    /// Kruskal 算法
    ///
    /// 按权重升序（相同时按插入顺序）处理各边，两端位于不同分量时取用并合并。
    pub fn kruskal(&self) -> Result<SpanningTree> {
        let graph = self.graph;
        let n = graph.vertex_count();

        let mut sorted: Vec<(i64, &Edge)> = Vec::with_capacity(graph.edge_count());
        for edge in graph.edges().filter(|e| !e.is_loop()) {
            sorted.push((weight_of(edge)?, edge));
        }
        // 稳定排序保证同权重时按插入顺序
        sorted.sort_by_key(|&(weight, _)| weight);

        let mut sets = DisjointSet::new(n);
        let mut edges = Vec::new();
        let mut total_weight: i64 = 0;
        for (weight, edge) in sorted {
            if sets.components() <= 1 {
                break;
            }
            let (a, b) = edge.endpoints();
            if sets.union(a.index(), b.index()) {
                edges.push(edge.id());
                total_weight = add_weight(total_weight, weight, edge)?;
            }
        }

        let tree = SpanningTree {
            root: None,
            vertices: graph.vertices().map(|v| v.label().to_string()).collect(),
            edges: edge_names(graph, &edges),
            total_weight,
            spanning: sets.components() <= 1,
        };
        debug!(
            edges = tree.edges.len(),
            total_weight,
            components = sets.components(),
            "Kruskal 完成"
        );
        Ok(tree)
    }
}

fn weight_of(edge: &Edge) -> Result<i64> {
    edge.weight()
        .ok_or_else(|| Error::UnweightedEdge(edge.name().to_string()))
}

fn add_weight(total: i64, weight: i64, edge: &Edge) -> Result<i64> {
    total
        .checked_add(weight)
        .ok_or_else(|| Error::WeightOverflow(edge.name().to_string()))
}

fn labels(graph: &Graph, ids: &[VertexId]) -> Vec<String> {
    ids.iter().map(|&v| graph.label(v).to_string()).collect()
}

fn edge_names(graph: &Graph, ids: &[EdgeId]) -> Vec<String> {
    ids.iter()
        .map(|&e| graph.edge_by_id(e).name().to_string())
        .collect()
}

/// 并查集（路径压缩 + 按秩合并）
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// 创建 `n` 个单元素集合
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// 查找代表元
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// 合并两个集合，原本已在同一集合时返回 `false`
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        self.components -= 1;
        true
    }

    /// 当前集合数
    pub fn components(&self) -> usize {
        self.components
    }
}
