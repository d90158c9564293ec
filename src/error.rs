//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 顶点标签非法或重复插入
    #[error("无效的顶点: {0}")]
    InvalidVertex(String),

    /// 边编码非法、边名重复或端点不存在
    #[error("无效的边: {0}")]
    InvalidEdge(String),

    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    /// 在零顶点的图上执行未定义的操作
    #[error("空图: {0}")]
    EmptyGraph(String),

    /// 生成树算法遇到没有权重的边
    #[error("边缺少权重: {0}")]
    UnweightedEdge(String),

    /// 生成树总权重超出 i64 范围
    #[error("权重累加溢出: {0}")]
    WeightOverflow(String),
}
