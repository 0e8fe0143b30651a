//! 路径表示
//!
//! 一条不重复访问节点的有序节点序列，携带累计权重。
//! 扩展采用值语义：每次扩展产生新路径，不影响共享前缀的其他分支。

use crate::error::{Error, Result};
use crate::types::{NodeId, Weight};
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::fmt;

/// 简单路径
///
/// 不变量：节点序列中无重复节点；累计权重等于沿途边权之和。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    /// 路径上的节点序列
    nodes: SmallVec<[NodeId; 8]>,
    /// 累计权重
    total_weight: Weight,
}

impl Path {
    /// 创建单节点路径，权重为 0
    pub fn singleton(node: NodeId) -> Self {
        Self {
            nodes: smallvec![node],
            total_weight: 0.0,
        }
    }

    /// 扩展路径：追加一个节点，返回新路径
    ///
    /// 节点已出现在路径中时返回 [`Error::CycleDetected`]。
    /// 枚举器在调用前自行检查 [`contains`](Path::contains)，正常不会触发。
    pub fn extend(&self, node: NodeId, edge_weight: Weight) -> Result<Self> {
        if self.contains(node) {
            return Err(Error::CycleDetected { node });
        }
        let mut nodes = self.nodes.clone();
        nodes.push(node);
        Ok(Self {
            nodes,
            total_weight: self.total_weight + edge_weight,
        })
    }

    /// 获取累计权重
    pub fn weight(&self) -> Weight {
        self.total_weight
    }

    /// 获取节点序列
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// 获取路径末端节点
    pub fn end(&self) -> NodeId {
        // 不变量：路径至少包含起点
        self.nodes[self.nodes.len() - 1]
    }

    /// 判断节点是否已在路径中
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// 路径上的节点数量
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nodes: Vec<String> = self.nodes.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", nodes.join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton() {
        let p = Path::singleton(NodeId::new(1));
        assert_eq!(p.nodes(), &[NodeId::new(1)]);
        assert_eq!(p.weight(), 0.0);
        assert_eq!(p.end(), NodeId::new(1));
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn test_extend_accumulates_weight() {
        let p = Path::singleton(NodeId::new(1))
            .extend(NodeId::new(2), 10.0)
            .unwrap()
            .extend(NodeId::new(4), 10.0)
            .unwrap();

        assert_eq!(p.nodes(), &[NodeId::new(1), NodeId::new(2), NodeId::new(4)]);
        assert_eq!(p.weight(), 20.0);
        assert_eq!(p.end(), NodeId::new(4));
    }

    #[test]
    fn test_extend_does_not_mutate_original() {
        let base = Path::singleton(NodeId::new(1)).extend(NodeId::new(2), 5.0).unwrap();
        let left = base.extend(NodeId::new(3), 1.0).unwrap();
        let right = base.extend(NodeId::new(4), 2.0).unwrap();

        // 共享前缀的两个分支互不干扰
        assert_eq!(base.len(), 2);
        assert_eq!(left.end(), NodeId::new(3));
        assert_eq!(right.end(), NodeId::new(4));
        assert_eq!(left.weight(), 6.0);
        assert_eq!(right.weight(), 7.0);
    }

    #[test]
    fn test_extend_rejects_revisit() {
        let p = Path::singleton(NodeId::new(1)).extend(NodeId::new(2), 5.0).unwrap();
        let result = p.extend(NodeId::new(1), 5.0);
        assert!(matches!(result, Err(Error::CycleDetected { node }) if node == NodeId::new(1)));
    }

    #[test]
    fn test_display() {
        let p = Path::singleton(NodeId::new(1)).extend(NodeId::new(2), 5.0).unwrap();
        assert_eq!(p.to_string(), "1 -> 2");
    }
}
