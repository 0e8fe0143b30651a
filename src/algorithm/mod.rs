//! 图算法模块
//!
//! 包含参考最短路径计算和有界路径枚举

mod dijkstra;
mod enumerate;

pub use dijkstra::shortest_distance;
pub use enumerate::{compute_shortest_paths, PathEnumerator};
