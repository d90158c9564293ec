//! 能量受限最短路径
//!
//! Dijkstra 变体：每条边计 1 跳，每走一跳消耗 1 点能量，
//! 到达补给点时能量重置为补给值。能量不足以再走一跳的顶点不会被选中，
//! 因此搜索可能在到达目标前就停止。

use super::traversal::Trail;
use crate::error::Result;
use crate::graph::{EdgeId, Graph, VertexId};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// 能量配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyConfig {
    /// 起点的初始能量
    pub initial_energy: u32,
    /// 补给点的能量值
    pub recharge_level: u32,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            initial_energy: 3,
            recharge_level: 5,
        }
    }
}

impl EnergyConfig {
    /// 指定初始能量，其余取默认值
    pub fn new(initial_energy: u32) -> Self {
        Self {
            initial_energy,
            ..Self::default()
        }
    }

    /// 设置补给值
    pub fn with_recharge_level(mut self, level: u32) -> Self {
        self.recharge_level = level;
        self
    }
}

/// 能量受限路径结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyPath {
    /// 路径
    pub trail: Trail,
    /// 到达终点时剩余的能量
    pub remaining_energy: i64,
}

/// 能量受限路径查找器
pub struct EnergyPathFinder<'a> {
    graph: &'a Graph,
    config: EnergyConfig,
    recharge: Vec<bool>,
}

impl<'a> EnergyPathFinder<'a> {
    /// 创建查找器（无补给点）
    pub fn new(graph: &'a Graph, config: EnergyConfig) -> Self {
        Self {
            graph,
            config,
            recharge: vec![false; graph.vertex_count()],
        }
    }

    /// 设置补给点
    pub fn with_recharge_points<I, S>(mut self, labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for label in labels {
            let id = self.graph.require_vertex(label.as_ref())?;
            self.recharge[id.index()] = true;
        }
        Ok(self)
    }

    /// 获取配置
    pub fn config(&self) -> &EnergyConfig {
        &self.config
    }

    /// 查找从 `source` 到 `target` 的最短路径
    ///
    /// 返回 `Ok(None)` 表示在当前能量与拓扑下无法到达。
    pub fn shortest_path(&self, source: &str, target: &str) -> Result<Option<EnergyPath>> {
        let graph = self.graph;
        let s = graph.require_vertex(source)?;
        let t = graph.require_vertex(target)?;

        if s == t {
            return Ok(Some(EnergyPath {
                trail: Trail::from_ids(graph, &[s], &[]),
                remaining_energy: i64::from(self.config.initial_energy),
            }));
        }

        let n = graph.vertex_count();
        let mut settled = vec![false; n];
        let mut distance = vec![usize::MAX; n];
        let mut predecessor: Vec<Option<(VertexId, EdgeId)>> = vec![None; n];
        let mut energy = vec![0i64; n];

        distance[s.index()] = 0;
        energy[s.index()] = i64::from(self.config.initial_energy);
        settled[s.index()] = true;
        let mut settled_count = 1;
        let mut current = s;

        while current != t && settled_count < n {
            // 松弛当前顶点的邻居
            let next_distance = distance[current.index()] + 1;
            for &e in graph.incident_ids(current) {
                if !graph.is_simple_edge(e) {
                    continue;
                }
                let Some(w) = graph.edge_by_id(e).opposite(current) else {
                    continue;
                };
                if next_distance < distance[w.index()] {
                    distance[w.index()] = next_distance;
                    predecessor[w.index()] = Some((current, e));
                    energy[w.index()] = energy[current.index()] - 1;
                    trace!(
                        vertex = graph.label(w),
                        distance = next_distance,
                        energy = energy[w.index()],
                        "松弛"
                    );
                }
            }

            // 已到达的补给点能量重置
            for v in graph.vertex_ids() {
                if self.recharge[v.index()] && distance[v.index()] != usize::MAX {
                    energy[v.index()] = i64::from(self.config.recharge_level);
                }
            }

            match self.select(t, &settled, &distance, &energy) {
                Some(next) => {
                    settled[next.index()] = true;
                    settled_count += 1;
                    current = next;
                    trace!(vertex = graph.label(next), "确定顶点");
                }
                None => {
                    debug!(source, target, "没有可选顶点，搜索终止");
                    break;
                }
            }
        }

        if !settled[t.index()] {
            debug!(source, target, "能量受限下不存在路径");
            return Ok(None);
        }

        // 沿前驱重建路径
        let mut vertices = vec![t];
        let mut edges = Vec::new();
        let mut v = t;
        while v != s {
            let Some((prev, e)) = predecessor[v.index()] else {
                return Ok(None);
            };
            edges.push(e);
            vertices.push(prev);
            v = prev;
        }
        vertices.reverse();
        edges.reverse();

        let path = EnergyPath {
            trail: Trail::from_ids(graph, &vertices, &edges),
            remaining_energy: energy[t.index()],
        };
        debug!(source, target, length = path.trail.length, "找到能量受限路径");
        Ok(Some(path))
    }

    /// 选出距离最小的可选顶点，距离相同时按插入顺序
    ///
    /// 非终点顶点必须还能再走一跳；终点只需能量不为负。
    fn select(
        &self,
        target: VertexId,
        settled: &[bool],
        distance: &[usize],
        energy: &[i64],
    ) -> Option<VertexId> {
        let mut best: Option<VertexId> = None;
        for v in self.graph.vertex_ids() {
            let i = v.index();
            if settled[i] || distance[i] == usize::MAX {
                continue;
            }
            let required = if v == target { 0 } else { 1 };
            if energy[i] - required < 0 {
                continue;
            }
            if best.map_or(true, |b| distance[i] < distance[b.index()]) {
                best = Some(v);
            }
        }
        best
    }
}
