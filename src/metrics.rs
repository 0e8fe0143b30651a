//! 性能指标收集模块
//!
//! 提供路径搜索运行时性能指标的收集和导出功能

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// 系统全局指标
#[derive(Debug)]
pub struct Metrics {
    /// 搜索统计
    search_stats: SearchStats,
    /// 枚举器统计
    enumerator_stats: EnumeratorStats,
    /// 图构建统计
    graph_stats: GraphStats,
    /// 启动时间
    start_time: Instant,
}

/// 搜索统计
#[derive(Debug)]
struct SearchStats {
    /// 总搜索数
    total_searches: AtomicU64,
    /// 成功搜索数
    success_searches: AtomicU64,
    /// 失败搜索数
    failed_searches: AtomicU64,
    /// 搜索总耗时（微秒）
    total_duration_us: AtomicU64,
    /// 慢搜索数（>1s）
    slow_searches: AtomicU64,
}

/// 枚举器统计
#[derive(Debug)]
struct EnumeratorStats {
    /// 扩展的部分路径数
    paths_expanded: AtomicU64,
    /// 剪枝的分支数
    branches_pruned: AtomicU64,
    /// 到达目标的完整路径数
    paths_completed: AtomicU64,
}

/// 图构建统计
#[derive(Debug)]
struct GraphStats {
    /// 构建的图数量
    graphs_built: AtomicU64,
    /// 索引的节点数
    nodes_indexed: AtomicU64,
    /// 索引的边数
    edges_indexed: AtomicU64,
}

/// 可导出的指标快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    // 搜索指标
    pub total_searches: u64,
    pub success_searches: u64,
    pub failed_searches: u64,
    pub avg_search_duration_ms: f64,
    pub slow_searches: u64,

    // 枚举器指标
    pub paths_expanded: u64,
    pub branches_pruned: u64,
    pub paths_completed: u64,

    // 图构建指标
    pub graphs_built: u64,
    pub nodes_indexed: u64,
    pub edges_indexed: u64,

    // 系统指标
    pub uptime_seconds: u64,
}

/// Prometheus 格式指标
#[derive(Debug, Clone)]
pub struct PrometheusMetrics {
    pub content: String,
}

impl Metrics {
    /// 创建新的指标收集器
    pub fn new() -> Self {
        Self {
            search_stats: SearchStats {
                total_searches: AtomicU64::new(0),
                success_searches: AtomicU64::new(0),
                failed_searches: AtomicU64::new(0),
                total_duration_us: AtomicU64::new(0),
                slow_searches: AtomicU64::new(0),
            },
            enumerator_stats: EnumeratorStats {
                paths_expanded: AtomicU64::new(0),
                branches_pruned: AtomicU64::new(0),
                paths_completed: AtomicU64::new(0),
            },
            graph_stats: GraphStats {
                graphs_built: AtomicU64::new(0),
                nodes_indexed: AtomicU64::new(0),
                edges_indexed: AtomicU64::new(0),
            },
            start_time: Instant::now(),
        }
    }

    /// 记录搜索开始
    pub fn record_search_start(&self) -> SearchTimer {
        self.search_stats
            .total_searches
            .fetch_add(1, Ordering::Relaxed);
        SearchTimer::new()
    }

    /// 记录搜索完成
    pub fn record_search_complete(&self, timer: SearchTimer, success: bool) {
        let duration = timer.elapsed();

        if success {
            self.search_stats
                .success_searches
                .fetch_add(1, Ordering::Relaxed);
        } else {
            self.search_stats
                .failed_searches
                .fetch_add(1, Ordering::Relaxed);
        }

        self.search_stats
            .total_duration_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);

        // 慢搜索：超过1秒
        if duration.as_secs() >= 1 {
            self.search_stats
                .slow_searches
                .fetch_add(1, Ordering::Relaxed);
        }
    }

    /// 记录一次有界枚举的扩展/剪枝/完成计数
    pub fn record_enumeration(&self, expanded: u64, pruned: u64, completed: u64) {
        self.enumerator_stats
            .paths_expanded
            .fetch_add(expanded, Ordering::Relaxed);
        self.enumerator_stats
            .branches_pruned
            .fetch_add(pruned, Ordering::Relaxed);
        self.enumerator_stats
            .paths_completed
            .fetch_add(completed, Ordering::Relaxed);
    }

    /// 记录图构建
    pub fn record_graph_build(&self, nodes: u64, edges: u64) {
        self.graph_stats.graphs_built.fetch_add(1, Ordering::Relaxed);
        self.graph_stats
            .nodes_indexed
            .fetch_add(nodes, Ordering::Relaxed);
        self.graph_stats
            .edges_indexed
            .fetch_add(edges, Ordering::Relaxed);
    }

    /// 获取指标快照
    pub fn snapshot(&self) -> MetricsSnapshot {
        let total_searches = self.search_stats.total_searches.load(Ordering::Relaxed);
        let success_searches = self.search_stats.success_searches.load(Ordering::Relaxed);
        let failed_searches = self.search_stats.failed_searches.load(Ordering::Relaxed);
        let total_duration_us = self.search_stats.total_duration_us.load(Ordering::Relaxed);
        let slow_searches = self.search_stats.slow_searches.load(Ordering::Relaxed);

        let uptime = self.start_time.elapsed().as_secs();

        let avg_search_duration_ms = if total_searches > 0 {
            (total_duration_us as f64) / (total_searches as f64) / 1000.0
        } else {
            0.0
        };

        MetricsSnapshot {
            total_searches,
            success_searches,
            failed_searches,
            avg_search_duration_ms,
            slow_searches,
            paths_expanded: self.enumerator_stats.paths_expanded.load(Ordering::Relaxed),
            branches_pruned: self.enumerator_stats.branches_pruned.load(Ordering::Relaxed),
            paths_completed: self.enumerator_stats.paths_completed.load(Ordering::Relaxed),
            graphs_built: self.graph_stats.graphs_built.load(Ordering::Relaxed),
            nodes_indexed: self.graph_stats.nodes_indexed.load(Ordering::Relaxed),
            edges_indexed: self.graph_stats.edges_indexed.load(Ordering::Relaxed),
            uptime_seconds: uptime,
        }
    }

    /// 导出为 Prometheus 格式
    pub fn to_prometheus(&self) -> PrometheusMetrics {
        let snapshot = self.snapshot();

        let mut content = String::new();

        // 搜索指标
        content.push_str("# HELP nearpath_searches_total Total number of path searches\n");
        content.push_str("# TYPE nearpath_searches_total counter\n");
        content.push_str(&format!(
            "nearpath_searches_total {}\n",
            snapshot.total_searches
        ));

        content.push_str("# HELP nearpath_searches_success_total Number of successful searches\n");
        content.push_str("# TYPE nearpath_searches_success_total counter\n");
        content.push_str(&format!(
            "nearpath_searches_success_total {}\n",
            snapshot.success_searches
        ));

        content.push_str("# HELP nearpath_searches_failed_total Number of failed searches\n");
        content.push_str("# TYPE nearpath_searches_failed_total counter\n");
        content.push_str(&format!(
            "nearpath_searches_failed_total {}\n",
            snapshot.failed_searches
        ));

        content.push_str(
            "# HELP nearpath_search_duration_avg_ms Average search duration in milliseconds\n",
        );
        content.push_str("# TYPE nearpath_search_duration_avg_ms gauge\n");
        content.push_str(&format!(
            "nearpath_search_duration_avg_ms {:.2}\n",
            snapshot.avg_search_duration_ms
        ));

        content.push_str("# HELP nearpath_slow_searches_total Number of slow searches (>1s)\n");
        content.push_str("# TYPE nearpath_slow_searches_total counter\n");
        content.push_str(&format!(
            "nearpath_slow_searches_total {}\n",
            snapshot.slow_searches
        ));

        // 枚举器指标
        content.push_str("# HELP nearpath_paths_expanded_total Partial paths expanded\n");
        content.push_str("# TYPE nearpath_paths_expanded_total counter\n");
        content.push_str(&format!(
            "nearpath_paths_expanded_total {}\n",
            snapshot.paths_expanded
        ));

        content.push_str("# HELP nearpath_branches_pruned_total Branches pruned over the limit\n");
        content.push_str("# TYPE nearpath_branches_pruned_total counter\n");
        content.push_str(&format!(
            "nearpath_branches_pruned_total {}\n",
            snapshot.branches_pruned
        ));

        content.push_str("# HELP nearpath_paths_completed_total Paths that reached the target\n");
        content.push_str("# TYPE nearpath_paths_completed_total counter\n");
        content.push_str(&format!(
            "nearpath_paths_completed_total {}\n",
            snapshot.paths_completed
        ));

        // 图构建指标
        content.push_str("# HELP nearpath_graphs_built_total Graphs constructed\n");
        content.push_str("# TYPE nearpath_graphs_built_total counter\n");
        content.push_str(&format!(
            "nearpath_graphs_built_total {}\n",
            snapshot.graphs_built
        ));

        content.push_str("# HELP nearpath_edges_indexed_total Edges indexed across all graphs\n");
        content.push_str("# TYPE nearpath_edges_indexed_total counter\n");
        content.push_str(&format!(
            "nearpath_edges_indexed_total {}\n",
            snapshot.edges_indexed
        ));

        // 系统指标
        content.push_str("# HELP nearpath_uptime_seconds System uptime in seconds\n");
        content.push_str("# TYPE nearpath_uptime_seconds counter\n");
        content.push_str(&format!(
            "nearpath_uptime_seconds {}\n",
            snapshot.uptime_seconds
        ));

        PrometheusMetrics { content }
    }

    /// 重置所有指标
    pub fn reset(&self) {
        self.search_stats.total_searches.store(0, Ordering::Relaxed);
        self.search_stats.success_searches.store(0, Ordering::Relaxed);
        self.search_stats.failed_searches.store(0, Ordering::Relaxed);
        self.search_stats.total_duration_us.store(0, Ordering::Relaxed);
        self.search_stats.slow_searches.store(0, Ordering::Relaxed);

        self.enumerator_stats.paths_expanded.store(0, Ordering::Relaxed);
        self.enumerator_stats.branches_pruned.store(0, Ordering::Relaxed);
        self.enumerator_stats.paths_completed.store(0, Ordering::Relaxed);

        self.graph_stats.graphs_built.store(0, Ordering::Relaxed);
        self.graph_stats.nodes_indexed.store(0, Ordering::Relaxed);
        self.graph_stats.edges_indexed.store(0, Ordering::Relaxed);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// 搜索计时器
pub struct SearchTimer {
    start: Instant,
}

impl SearchTimer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// 全局指标实例
static METRICS: once_cell::sync::Lazy<Arc<Metrics>> =
    once_cell::sync::Lazy::new(|| Arc::new(Metrics::new()));

/// 获取全局指标实例
pub fn global_metrics() -> Arc<Metrics> {
    METRICS.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_snapshot() {
        let metrics = Metrics::new();

        let timer = metrics.record_search_start();
        std::thread::sleep(Duration::from_millis(10));
        metrics.record_search_complete(timer, true);

        metrics.record_enumeration(5, 2, 1);
        metrics.record_graph_build(4, 4);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.total_searches, 1);
        assert_eq!(snapshot.success_searches, 1);
        assert!(snapshot.avg_search_duration_ms >= 10.0);
        assert_eq!(snapshot.paths_expanded, 5);
        assert_eq!(snapshot.branches_pruned, 2);
        assert_eq!(snapshot.graphs_built, 1);
    }

    #[test]
    fn test_prometheus_export() {
        let metrics = Metrics::new();
        metrics.record_search_start();
        metrics.record_enumeration(3, 1, 2);

        let prom = metrics.to_prometheus();
        assert!(prom.content.contains("nearpath_searches_total"));
        assert!(prom.content.contains("nearpath_paths_expanded_total"));
    }

    #[test]
    fn test_reset() {
        let metrics = Metrics::new();
        metrics.record_enumeration(3, 1, 2);
        metrics.reset();
        assert_eq!(metrics.snapshot().paths_expanded, 0);
    }
}
