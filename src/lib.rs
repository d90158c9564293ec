//! multigraph - 无向多重图与经典图算法
//!
//! 以文本标签标识顶点、以名字标识边的无向多重图，支持：
//! - 平行边与自环，`A-B` 形式的边编码校验
//! - 邻接、度、完全性等结构查询与邻接矩阵
//! - 深度优先遍历、环与定长路径搜索
//! - 带补给点的能量受限最短路径
//! - Prim 与 Kruskal 最小生成树

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use algorithm::{
    EnergyConfig, EnergyPath, EnergyPathFinder, SpanningTree, SpanningTreeBuilder, Trail,
    Traversal,
};
pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, Graph, Vertex, VertexId};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
