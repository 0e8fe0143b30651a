//! 有界路径枚举
//!
//! 先计算参考最短距离，再按权重上限扩展所有简单路径。
//! 权重严格为正，超限分支可以永久丢弃，搜索因此有限。

use crate::algorithm::dijkstra;
use crate::error::{Error, Result};
use crate::graph::{Graph, Path};
use crate::metrics::global_metrics;
use crate::types::{NodeId, Weight};
use rayon::prelude::*;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::debug;

/// 路径枚举器
///
/// 返回 source 到 target 的全部简单路径，路径总权重不超过
/// `最短距离 × 容差系数`（上限含边界）。结果按权重升序排列，
/// 权重相同时按节点序列的字典序排列，保证输出可复现。
pub struct PathEnumerator {
    graph: Arc<Graph>,
}

impl PathEnumerator {
    /// 创建路径枚举器
    pub fn new(graph: Arc<Graph>) -> Self {
        Self { graph }
    }

    /// 计算容差范围内的全部近似最短路径
    ///
    /// 失败条件：
    /// - 容差系数小于 1.0（或为 NaN）: [`Error::InvalidTolerance`]
    /// - 目标不可达: [`Error::Unreachable`]，与"存在路径但都超限"
    ///   的空结果可以区分
    pub fn compute_shortest_paths(
        &self,
        source: NodeId,
        target: NodeId,
        tolerance_factor: f64,
    ) -> Result<Vec<Path>> {
        let metrics = global_metrics();
        let timer = metrics.record_search_start();
        let result = self.run(source, target, tolerance_factor, false);
        metrics.record_search_complete(timer, result.is_ok());
        result
    }

    /// 并行版本：逐层扩展边界，每层用 rayon 并行展开
    ///
    /// 每个分区的部分结果最后统一合并排序，输出顺序与串行版本一致。
    pub fn compute_shortest_paths_parallel(
        &self,
        source: NodeId,
        target: NodeId,
        tolerance_factor: f64,
    ) -> Result<Vec<Path>> {
        let metrics = global_metrics();
        let timer = metrics.record_search_start();
        let result = self.run(source, target, tolerance_factor, true);
        metrics.record_search_complete(timer, result.is_ok());
        result
    }

    fn run(
        &self,
        source: NodeId,
        target: NodeId,
        tolerance_factor: f64,
        parallel: bool,
    ) -> Result<Vec<Path>> {
        // NaN 也会落入该分支
        if !(tolerance_factor >= 1.0) {
            return Err(Error::InvalidTolerance {
                factor: tolerance_factor,
            });
        }

        let shortest = dijkstra::shortest_distance(&self.graph, source, target)?;
        let limit = shortest * tolerance_factor;
        debug!(%source, %target, tolerance_factor, limit, "开始有界路径枚举");

        if source == target {
            // 单节点路径是唯一合法结果：任何离开又回到起点的
            // 路径都会重复访问起点
            return Ok(vec![Path::singleton(source)]);
        }

        let mut paths = if parallel {
            self.enumerate_parallel(source, target, limit)?
        } else {
            self.enumerate(source, target, limit)?
        };
        sort_paths(&mut paths);
        Ok(paths)
    }

    /// 串行扩展：按发现顺序处理边界中的部分路径
    fn enumerate(&self, source: NodeId, target: NodeId, limit: Weight) -> Result<Vec<Path>> {
        let mut frontier = VecDeque::new();
        frontier.push_back(Path::singleton(source));

        let mut completed = Vec::new();
        let mut expanded: u64 = 0;
        let mut pruned: u64 = 0;

        while let Some(path) = frontier.pop_front() {
            expanded += 1;
            let (done, ongoing, branch_pruned) = self.expand_one(&path, target, limit)?;
            completed.extend(done);
            frontier.extend(ongoing);
            pruned += branch_pruned;
        }

        global_metrics().record_enumeration(expanded, pruned, completed.len() as u64);
        debug!(expanded, pruned, found = completed.len(), "枚举完成");
        Ok(completed)
    }

    /// 并行扩展：每层的部分路径独立展开后合并
    fn enumerate_parallel(
        &self,
        source: NodeId,
        target: NodeId,
        limit: Weight,
    ) -> Result<Vec<Path>> {
        let mut frontier = vec![Path::singleton(source)];

        let mut completed = Vec::new();
        let mut expanded: u64 = 0;
        let mut pruned: u64 = 0;

        while !frontier.is_empty() {
            expanded += frontier.len() as u64;
            let results: Vec<(Vec<Path>, Vec<Path>, u64)> = frontier
                .par_iter()
                .map(|path| self.expand_one(path, target, limit))
                .collect::<Result<Vec<_>>>()?;

            let mut next = Vec::new();
            for (done, ongoing, branch_pruned) in results {
                completed.extend(done);
                next.extend(ongoing);
                pruned += branch_pruned;
            }
            frontier = next;
        }

        global_metrics().record_enumeration(expanded, pruned, completed.len() as u64);
        debug!(expanded, pruned, found = completed.len(), "枚举完成 (并行)");
        Ok(completed)
    }

    /// 展开单条部分路径
    ///
    /// 返回 (到达目标的完整路径, 继续扩展的部分路径, 剪枝数)。
    /// 到达目标的路径不再扩展：目标是终点而非途经点。
    fn expand_one(
        &self,
        path: &Path,
        target: NodeId,
        limit: Weight,
    ) -> Result<(Vec<Path>, Vec<Path>, u64)> {
        let mut done = Vec::new();
        let mut ongoing = Vec::new();
        let mut pruned: u64 = 0;

        let end = path.end();
        for &(neighbor, weight) in self.graph.neighbors(end) {
            // 简单路径不变量：不重复访问节点，图中的环因此无法导致死循环
            if path.contains(neighbor) {
                continue;
            }
            // 权重沿扩展单调不减，超限分支的任何延伸都不可能回到限内
            if path.weight() + weight > limit {
                pruned += 1;
                continue;
            }
            let extended = path.extend(neighbor, weight)?;
            if neighbor == target {
                done.push(extended);
            } else {
                ongoing.push(extended);
            }
        }

        Ok((done, ongoing, pruned))
    }
}

/// 按权重升序排序，权重相同时按节点序列字典序
fn sort_paths(paths: &mut [Path]) {
    paths.sort_by(|a, b| {
        a.weight()
            .total_cmp(&b.weight())
            .then_with(|| a.nodes().cmp(b.nodes()))
    });
}

/// 便捷入口：一次性计算容差范围内的全部近似最短路径
pub fn compute_shortest_paths(
    graph: Arc<Graph>,
    source: NodeId,
    target: NodeId,
    tolerance_factor: f64,
) -> Result<Vec<Path>> {
    PathEnumerator::new(graph).compute_shortest_paths(source, target, tolerance_factor)
}
