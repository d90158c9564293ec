//! 图核心模块
//!
//! 定义顶点、边、标签校验和图的核心数据结构

mod edge;
mod graph;
mod index;
pub mod label;
mod vertex;

pub use edge::{Edge, EdgeId};
pub use graph::Graph;
pub use index::AdjacencyIndex;
pub use label::SEPARATOR;
pub use vertex::{Vertex, VertexId};
