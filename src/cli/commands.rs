//! 交互命令处理
//!
//! 解析并分发交互模式下的查询命令

use std::sync::Arc;
use std::time::Instant;

use crate::algorithm::{shortest_distance, PathEnumerator};
use crate::cli::printer::Printer;
use crate::graph::Graph;
use crate::metrics::global_metrics;
use crate::types::NodeId;

/// 命令执行结果
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 命令处理器
pub struct CommandHandler {
    graph: Arc<Graph>,
    printer: Printer,
    /// 使用并行枚举
    parallel: bool,
}

impl CommandHandler {
    /// 创建命令处理器
    pub fn new(graph: Arc<Graph>, printer: Printer, parallel: bool) -> Self {
        Self {
            graph,
            printer,
            parallel,
        }
    }

    /// 解析并执行一条命令
    pub fn handle(&self, input: &str) -> CommandResult {
        let input = input.trim();
        if input.is_empty() {
            return CommandResult::Continue;
        }

        let parts: Vec<&str> = input.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let args = parts.get(1).copied().unwrap_or("");

        match cmd.as_str() {
            "quit" | "exit" | "q" => CommandResult::Exit,

            "help" | "h" | "?" => CommandResult::Message(Printer::print_help()),

            "stats" | "info" => CommandResult::Message(
                self.printer
                    .print_stats(self.graph.node_count(), self.graph.edge_count()),
            ),

            "metrics" => {
                let snapshot = global_metrics().snapshot();
                CommandResult::Message(self.printer.print_metrics(&snapshot))
            }

            "neighbors" | "n" => self.cmd_neighbors(args),

            "shortest" => self.cmd_shortest(args),

            "paths" | "p" => self.cmd_paths(args),

            _ => CommandResult::Error(format!("未知命令: {}。输入 'help' 查看帮助。", cmd)),
        }
    }

    fn cmd_neighbors(&self, args: &str) -> CommandResult {
        let id = match args.trim().parse::<u64>() {
            Ok(id) => NodeId::new(id),
            Err(_) => return CommandResult::Error("用法: neighbors <节点 ID>".to_string()),
        };

        if !self.graph.contains(id) {
            return CommandResult::Error(format!("节点不存在: {}", id));
        }

        let neighbors: Vec<String> = self
            .graph
            .neighbors(id)
            .iter()
            .map(|&(n, w)| format!("{} (权重 {})", n, w))
            .collect();
        CommandResult::Message(format!(
            "节点 {} 的邻居 ({} 个):\n  {}",
            id,
            neighbors.len(),
            neighbors.join("\n  ")
        ))
    }

    fn cmd_shortest(&self, args: &str) -> CommandResult {
        let ids: Vec<&str> = args.split_whitespace().collect();
        if ids.len() < 2 {
            return CommandResult::Error("用法: shortest <起点 ID> <终点 ID>".to_string());
        }
        let (source, target) = match (ids[0].parse::<u64>(), ids[1].parse::<u64>()) {
            (Ok(s), Ok(t)) => (NodeId::new(s), NodeId::new(t)),
            _ => return CommandResult::Error("无效的节点 ID".to_string()),
        };

        match shortest_distance(&self.graph, source, target) {
            Ok(distance) => {
                CommandResult::Message(format!("{} 到 {} 的最短距离: {}", source, target, distance))
            }
            Err(e) => CommandResult::Error(e.to_string()),
        }
    }

    fn cmd_paths(&self, args: &str) -> CommandResult {
        let parts: Vec<&str> = args.split_whitespace().collect();
        if parts.len() < 3 {
            return CommandResult::Error("用法: paths <起点 ID> <终点 ID> <容差系数>".to_string());
        }
        let (source, target, factor) = match (
            parts[0].parse::<u64>(),
            parts[1].parse::<u64>(),
            parts[2].parse::<f64>(),
        ) {
            (Ok(s), Ok(t), Ok(f)) => (NodeId::new(s), NodeId::new(t), f),
            _ => return CommandResult::Error("无效的参数".to_string()),
        };

        let enumerator = PathEnumerator::new(self.graph.clone());
        let start = Instant::now();
        let result = if self.parallel {
            enumerator.compute_shortest_paths_parallel(source, target, factor)
        } else {
            enumerator.compute_shortest_paths(source, target, factor)
        };
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(paths) => match self.printer.print_paths(&paths, elapsed_ms) {
                Ok(output) => CommandResult::Message(output),
                Err(e) => CommandResult::Error(e.to_string()),
            },
            Err(e) => CommandResult::Error(e.to_string()),
        }
    }
}
