//! 参考最短路径计算
//!
//! Dijkstra 优先级扩展，用于推导有界枚举的权重上限。
//! 权重严格为正，因此贪心结算是正确的。

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{NodeId, Weight};
use priority_queue::PriorityQueue;
use std::cmp::{Ordering, Reverse};
use std::collections::{HashMap, HashSet};

/// f64 权重的全序包装，供优先级队列使用
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct OrderedWeight(pub(crate) Weight);

impl Eq for OrderedWeight {}

impl PartialOrd for OrderedWeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedWeight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// 计算 source 到 target 的最短距离
///
/// 维护暂定距离表，每轮结算暂定距离最小的未结算节点并松弛其邻居。
/// 目标被结算或队列耗尽时终止。
///
/// - `source == target` 时距离为 0，不需要任何边。
/// - 任一端点不在图中，或耗尽队列仍未到达目标时，
///   返回 [`Error::Unreachable`]。
pub fn shortest_distance(graph: &Graph, source: NodeId, target: NodeId) -> Result<Weight> {
    if !graph.contains(source) || !graph.contains(target) {
        return Err(Error::Unreachable { from_node: source, target });
    }
    if source == target {
        return Ok(0.0);
    }

    let mut tentative: HashMap<NodeId, Weight> = HashMap::new();
    let mut settled: HashSet<NodeId> = HashSet::new();
    // Reverse 使队列按最小暂定距离出队
    let mut queue: PriorityQueue<NodeId, Reverse<OrderedWeight>> = PriorityQueue::new();

    tentative.insert(source, 0.0);
    queue.push(source, Reverse(OrderedWeight(0.0)));

    while let Some((node, Reverse(OrderedWeight(distance)))) = queue.pop() {
        if node == target {
            return Ok(distance);
        }
        if !settled.insert(node) {
            continue;
        }

        for &(neighbor, weight) in graph.neighbors(node) {
            if settled.contains(&neighbor) {
                continue;
            }
            let candidate = distance + weight;
            let improved = tentative
                .get(&neighbor)
                .map_or(true, |&current| candidate < current);
            if improved {
                tentative.insert(neighbor, candidate);
                // push_increase: Reverse 序下更小的距离是更高的优先级
                queue.push_increase(neighbor, Reverse(OrderedWeight(candidate)));
            }
        }
    }

    Err(Error::Unreachable { from_node: source, target })
}
