//! 遍历算法
//!
//! 深度优先遍历、环检测与定长简单路径搜索。
//! 所有搜索都用显式栈实现，访问顺序与递归写法一致。

use crate::error::Result;
use crate::graph::{EdgeId, Graph, VertexId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 顶点与边交替组成的序列
///
/// `edges[i]` 是从 `vertices[i]` 一侧到达 `vertices[i + 1]` 所经过的边，
/// 因此总有 `vertices.len() == edges.len() + 1`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trail {
    /// 顶点序列
    pub vertices: Vec<String>,
    /// 边序列
    pub edges: Vec<String>,
    /// 边数
    pub length: usize,
}

impl Trail {
    pub(crate) fn from_ids(graph: &Graph, vertices: &[VertexId], edges: &[EdgeId]) -> Self {
        debug_assert_eq!(vertices.len(), edges.len() + 1);
        Self {
            vertices: vertices
                .iter()
                .map(|&v| graph.label(v).to_string())
                .collect(),
            edges: edges
                .iter()
                .map(|&e| graph.edge_by_id(e).name().to_string())
                .collect(),
            length: edges.len(),
        }
    }

    /// 交替序列 `[v0, e1, v1, e2, v2, ...]`
    pub fn sequence(&self) -> Vec<String> {
        let mut seq = Vec::with_capacity(self.vertices.len() + self.edges.len());
        let mut vertices = self.vertices.iter();
        if let Some(first) = vertices.next() {
            seq.push(first.clone());
        }
        for (edge, vertex) in self.edges.iter().zip(vertices) {
            seq.push(edge.clone());
            seq.push(vertex.clone());
        }
        seq
    }

    /// 起点
    pub fn start(&self) -> Option<&str> {
        self.vertices.first().map(String::as_str)
    }

    /// 终点
    pub fn end(&self) -> Option<&str> {
        self.vertices.last().map(String::as_str)
    }
}

/// 遍历器
pub struct Traversal<'a> {
    graph: &'a Graph,
}

impl<'a> Traversal<'a> {
    /// 创建遍历器
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 深度优先遍历
    ///
    /// 按发现顺序记录走过的边和到达的顶点，已在结果中的顶点不再进入。
    /// 每个顶点按关联边的插入顺序展开。
    pub fn depth_first_walk(&self, start: &str) -> Result<Trail> {
        let start = self.graph.require_vertex(start)?;
        let (vertices, edges) = self.walk_ids(start);
        Ok(Trail::from_ids(self.graph, &vertices, &edges))
    }

    fn walk_ids(&self, start: VertexId) -> (Vec<VertexId>, Vec<EdgeId>) {
        let n = self.graph.vertex_count();
        let mut visited = vec![false; n];
        let mut cursor = vec![0usize; n];
        let mut vertices = vec![start];
        let mut edges = Vec::new();
        let mut stack = vec![start];
        visited[start.index()] = true;

        while let Some(&u) = stack.last() {
            let incident = self.graph.incident_ids(u);
            let pos = cursor[u.index()];
            if pos == incident.len() {
                stack.pop();
                continue;
            }
            cursor[u.index()] += 1;

            let e = incident[pos];
            let Some(w) = self.graph.edge_by_id(e).opposite(u) else {
                continue;
            };
            if !visited[w.index()] {
                visited[w.index()] = true;
                edges.push(e);
                vertices.push(w);
                stack.push(w);
            }
        }

        (vertices, edges)
    }

    /// 从 `start` 可达的顶点（按发现顺序）
    pub fn reachable_from(&self, start: &str) -> Result<Vec<String>> {
        Ok(self.depth_first_walk(start)?.vertices)
    }

    /// 图是否连通（空图视为连通）
    pub fn is_connected(&self) -> bool {
        match self.graph.vertex_ids().next() {
            Some(first) => self.walk_ids(first).0.len() == self.graph.vertex_count(),
            None => true,
        }
    }

    /// 查找一个环
    ///
    /// 按插入顺序从各顶点出发做深度优先搜索，记录已检查的边；
    /// 当一条边通向当前路径上的顶点时，路径从该顶点起的后缀加上这条边即为环，
    /// 返回的序列首尾是同一个顶点。自环和平行边不参与搜索。
    pub fn find_cycle(&self) -> Option<Trail> {
        let graph = self.graph;
        let n = graph.vertex_count();
        let mut explored = vec![false; n];
        let mut on_path = vec![false; n];
        let mut cursor = vec![0usize; n];
        let mut examined = vec![false; graph.edge_count()];

        for s in graph.vertex_ids() {
            if explored[s.index()] {
                continue;
            }
            explored[s.index()] = true;
            on_path[s.index()] = true;
            let mut path_vertices = vec![s];
            let mut path_edges: Vec<EdgeId> = Vec::new();

            while let Some(&u) = path_vertices.last() {
                let incident = graph.incident_ids(u);
                let pos = cursor[u.index()];
                if pos == incident.len() {
                    // 死路：退回一条边
                    on_path[u.index()] = false;
                    path_vertices.pop();
                    path_edges.pop();
                    continue;
                }
                cursor[u.index()] += 1;

                let e = incident[pos];
                if examined[e.index()] || !graph.is_simple_edge(e) {
                    continue;
                }
                examined[e.index()] = true;

                let Some(w) = graph.edge_by_id(e).opposite(u) else {
                    continue;
                };
                if on_path[w.index()] {
                    let from = path_vertices.iter().position(|&v| v == w).unwrap_or(0);
                    let mut vertices = path_vertices[from..].to_vec();
                    let mut edges = path_edges[from..].to_vec();
                    vertices.push(w);
                    edges.push(e);
                    debug!(start = graph.label(w), length = edges.len(), "找到环");
                    return Some(Trail::from_ids(graph, &vertices, &edges));
                }
                if explored[w.index()] {
                    continue;
                }
                explored[w.index()] = true;
                on_path[w.index()] = true;
                path_vertices.push(w);
                path_edges.push(e);
            }
        }

        debug!("图中无环");
        None
    }

    /// 查找恰好含 `n` 条边、顶点不重复的路径
    ///
    /// 依次以每个顶点为起点做回溯搜索，全部起点都失败才返回 `None`。
    /// 同一起点下每条边至多检查一次（与 [`find_cycle`](Self::find_cycle) 相同），
    /// 因此单个起点的搜索量为 O(V + E)，代价是少数需要重走已检查边的路径会被漏掉。
    pub fn find_path_of_length(&self, n: usize) -> Option<Trail> {
        let graph = self.graph;
        // n 条边的简单路径需要 n + 1 个不同顶点
        if n >= graph.vertex_count() {
            return None;
        }

        for s in graph.vertex_ids() {
            let mut on_path = vec![false; graph.vertex_count()];
            on_path[s.index()] = true;
            // (顶点, 下一条待尝试的关联边位置)
            let mut frames: Vec<(VertexId, usize)> = vec![(s, 0)];
            let mut path_edges: Vec<EdgeId> = Vec::new();
            let mut examined = vec![false; graph.edge_count()];

            while let Some(&(u, pos)) = frames.last() {
                if path_edges.len() == n {
                    let vertices: Vec<VertexId> = frames.iter().map(|&(v, _)| v).collect();
                    debug!(start = graph.label(s), length = n, "找到定长路径");
                    return Some(Trail::from_ids(graph, &vertices, &path_edges));
                }

                let incident = graph.incident_ids(u);
                if pos == incident.len() {
                    on_path[u.index()] = false;
                    frames.pop();
                    path_edges.pop();
                    continue;
                }
                if let Some(top) = frames.last_mut() {
                    top.1 += 1;
                }

                let e = incident[pos];
                if examined[e.index()] {
                    continue;
                }
                examined[e.index()] = true;

                let Some(w) = graph.edge_by_id(e).opposite(u) else {
                    continue;
                };
                if on_path[w.index()] {
                    continue;
                }
                on_path[w.index()] = true;
                path_edges.push(e);
                frames.push((w, 0));
            }
        }

        debug!(length = n, "不存在定长路径");
        None
    }
}
