//! 错误类型定义

use crate::types::NodeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("无效的边 {a} - {b}: {reason}")]
    InvalidEdge {
        a: NodeId,
        b: NodeId,
        reason: String,
    },

    #[error("无效的容差系数 {factor}: 必须不小于 1.0")]
    InvalidTolerance { factor: f64 },

    #[error("目标节点 {target} 从 {from_node} 不可达")]
    Unreachable { from_node: NodeId, target: NodeId },

    #[error("路径已包含节点 {node}, 不能重复访问")]
    CycleDetected { node: NodeId },

    #[error("节点不存在: {0}")]
    NodeNotFound(NodeId),

    #[error("导入错误: {0}")]
    ImportError(String),

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}
