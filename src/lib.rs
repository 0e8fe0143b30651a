//! NearPath - 无向加权图的近似最短路径枚举库
//!
//! 在两个节点之间发现全部"足够短"的简单路径：不止最短路径，
//! 而是总权重不超过 `最短距离 × 容差系数` 的所有路径，支持：
//! - Dijkstra 参考最短距离计算
//! - 权重上限剪枝的有界路径枚举（可选并行）
//! - CSV / JSON Lines 边列表导入
//! - 确定性排序输出（权重升序，节点序列字典序断平）

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod metrics;
pub mod types;

// 重导出常用类型
pub use algorithm::{compute_shortest_paths, shortest_distance, PathEnumerator};
pub use error::{Error, Result};
pub use graph::{AdjacencyIndex, Graph, Path, UndirectedEdge};
pub use types::{NodeId, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
