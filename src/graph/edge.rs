//! 边定义
//!
//! 无向加权边：一对不同的节点加上严格为正的权重

use crate::error::{Error, Result};
use crate::types::{NodeId, Weight};
use serde::{Deserialize, Serialize};

/// 无向加权边
///
/// 构造时校验：不允许自环，权重必须为正的有限实数。
/// 校验失败返回 [`Error::InvalidEdge`]。构造后不可变。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UndirectedEdge {
    /// 端点 A
    a: NodeId,
    /// 端点 B
    b: NodeId,
    /// 权重
    weight: Weight,
}

impl UndirectedEdge {
    /// 创建新边
    pub fn new(a: NodeId, b: NodeId, weight: Weight) -> Result<Self> {
        if a == b {
            return Err(Error::InvalidEdge {
                a,
                b,
                reason: "自环不受支持".to_string(),
            });
        }
        if !weight.is_finite() || weight <= 0.0 {
            return Err(Error::InvalidEdge {
                a,
                b,
                reason: format!("非正权重 {} 不受支持", weight),
            });
        }
        Ok(Self { a, b, weight })
    }

    /// 获取两个端点
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.a, self.b)
    }

    /// 获取权重
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 给定一个端点，返回另一个端点
    pub fn other_end(&self, node: NodeId) -> Option<NodeId> {
        if node == self.a {
            Some(self.b)
        } else if node == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    /// 判断节点是否为该边的端点
    pub fn is_endpoint(&self, node: NodeId) -> bool {
        node == self.a || node == self.b
    }

    /// 规范化的端点对（较小 ID 在前），用于去重
    pub fn normalized(&self) -> (NodeId, NodeId) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_basic() {
        let e = UndirectedEdge::new(NodeId::new(1), NodeId::new(2), 10.0).unwrap();
        assert_eq!(e.endpoints(), (NodeId::new(1), NodeId::new(2)));
        assert_eq!(e.weight(), 10.0);
        assert_eq!(e.other_end(NodeId::new(1)), Some(NodeId::new(2)));
        assert_eq!(e.other_end(NodeId::new(2)), Some(NodeId::new(1)));
        assert_eq!(e.other_end(NodeId::new(3)), None);
        assert!(e.is_endpoint(NodeId::new(1)));
        assert!(!e.is_endpoint(NodeId::new(3)));
    }

    #[test]
    fn test_edge_rejects_self_loop() {
        let result = UndirectedEdge::new(NodeId::new(1), NodeId::new(1), 10.0);
        assert!(matches!(result, Err(Error::InvalidEdge { .. })));
    }

    #[test]
    fn test_edge_rejects_non_positive_weight() {
        // 零、负数和非有限值都不允许
        for w in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = UndirectedEdge::new(NodeId::new(1), NodeId::new(2), w);
            assert!(matches!(result, Err(Error::InvalidEdge { .. })), "weight = {}", w);
        }
    }

    #[test]
    fn test_edge_normalized() {
        let e = UndirectedEdge::new(NodeId::new(5), NodeId::new(2), 1.0).unwrap();
        assert_eq!(e.normalized(), (NodeId::new(2), NodeId::new(5)));
    }
}
