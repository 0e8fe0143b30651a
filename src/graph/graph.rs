//! 图数据结构
//!
//! 无向加权图：一次性从边集构建，之后只读

use super::edge::UndirectedEdge;
use super::index::AdjacencyIndex;
use crate::error::Result;
use crate::metrics::global_metrics;
use crate::types::{NodeId, Weight};

/// 无向加权图
///
/// 由边集一次性构建，构建后不可变，算法以只读方式借用。
/// 重建意味着创建新图。
pub struct Graph {
    /// 边集
    edges: Vec<UndirectedEdge>,
    /// 邻接索引
    adjacency: AdjacencyIndex,
}

impl Graph {
    /// 从边集构建图
    ///
    /// 任一条边非法（自环、非正权重、重复）时整体失败，
    /// 返回 [`Error::InvalidEdge`](crate::Error::InvalidEdge)。
    pub fn from_edges(edges: impl IntoIterator<Item = UndirectedEdge>) -> Result<Self> {
        let mut adjacency = AdjacencyIndex::new();
        let mut stored = Vec::new();

        for edge in edges {
            adjacency.add_edge(&edge)?;
            stored.push(edge);
        }
        adjacency.finalize();

        let graph = Self {
            edges: stored,
            adjacency,
        };
        global_metrics().record_graph_build(graph.node_count() as u64, graph.edge_count() as u64);
        Ok(graph)
    }

    /// 获取节点的邻接列表（按邻居 ID 排序）
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, Weight)] {
        self.adjacency.neighbors(node)
    }

    /// 判断节点是否在图中
    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains(node)
    }

    /// 获取节点的度
    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency.degree(node)
    }

    /// 获取节点数量
    pub fn node_count(&self) -> usize {
        self.adjacency.node_count()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 获取边集
    pub fn edges(&self) -> &[UndirectedEdge] {
        &self.edges
    }

    /// 遍历所有节点
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.nodes()
    }
}
