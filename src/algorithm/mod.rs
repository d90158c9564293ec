//! 图算法模块
//!
//! 包含遍历、能量受限最短路径和最小生成树算法

mod energy_path;
mod spanning_tree;
mod traversal;

pub use energy_path::{EnergyConfig, EnergyPath, EnergyPathFinder};
pub use spanning_tree::{DisjointSet, SpanningTree, SpanningTreeBuilder};
pub use traversal::{Trail, Traversal};
