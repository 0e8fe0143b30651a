//! 邻接索引
//!
//! 边集的对称闭包：每个节点映射到 (邻居, 权重) 列表。
//! 构建阶段可变，finalize 之后只读。

use crate::error::{Error, Result};
use crate::graph::edge::UndirectedEdge;
use crate::types::{NodeId, Weight};
use indexmap::IndexMap;
use std::collections::HashSet;

/// 邻接索引
///
/// 邻居列表在 [`finalize`](AdjacencyIndex::finalize) 时按节点 ID 排序，
/// 保证遍历顺序与边的输入顺序无关。
#[derive(Debug, Default)]
pub struct AdjacencyIndex {
    /// 节点到 (邻居, 权重) 列表的映射
    neighbors: IndexMap<NodeId, Vec<(NodeId, Weight)>>,
    /// 已登记的规范化端点对，用于拒绝重复边
    edge_pairs: HashSet<(NodeId, NodeId)>,
}

impl AdjacencyIndex {
    /// 创建新索引
    pub fn new() -> Self {
        Self {
            neighbors: IndexMap::new(),
            edge_pairs: HashSet::new(),
        }
    }

    /// 登记一条边（两个方向的邻接项）
    ///
    /// 同一对节点之间的第二条边返回 [`Error::InvalidEdge`]。
    pub fn add_edge(&mut self, edge: &UndirectedEdge) -> Result<()> {
        let (a, b) = edge.endpoints();
        if !self.edge_pairs.insert(edge.normalized()) {
            return Err(Error::InvalidEdge {
                a,
                b,
                reason: "重复边不受支持".to_string(),
            });
        }

        let w = edge.weight();
        self.neighbors.entry(a).or_default().push((b, w));
        self.neighbors.entry(b).or_default().push((a, w));
        Ok(())
    }

    /// 结束构建：对每个邻居列表按节点 ID 排序
    pub fn finalize(&mut self) {
        for list in self.neighbors.values_mut() {
            list.sort_by_key(|&(node, _)| node);
        }
    }

    /// 获取节点的邻接列表
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, Weight)] {
        self.neighbors
            .get(&node)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// 判断节点是否在索引中
    pub fn contains(&self, node: NodeId) -> bool {
        self.neighbors.contains_key(&node)
    }

    /// 获取节点的度
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors.get(&node).map(|list| list.len()).unwrap_or(0)
    }

    /// 获取节点数量
    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edge_pairs.len()
    }

    /// 遍历所有节点（插入顺序）
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.neighbors.keys().copied()
    }
}
