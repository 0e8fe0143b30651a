//! 结果打印器
//!
//! 提供表格和 JSON 格式的结果输出

use crate::error::{Error, Result};
use crate::graph::Path;
use crate::metrics::MetricsSnapshot;
use prettytable::{format, row, Cell, Row, Table};

/// 打印模式
#[derive(Clone, Copy, PartialEq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// JSON 模式
    Json,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 设置打印模式
    pub fn set_mode(&mut self, mode: PrintMode) {
        self.mode = mode;
    }

    /// 打印路径查询结果
    pub fn print_paths(&self, paths: &[Path], execution_time_ms: u64) -> Result<String> {
        if paths.is_empty() {
            return Ok(format!("Empty set ({} ms)\n", execution_time_ms));
        }

        let output = match self.mode {
            PrintMode::Table => self.format_table(paths),
            PrintMode::Json => serde_json::to_string_pretty(paths)
                .map_err(|e| Error::SerializationError(e.to_string()))?,
        };

        Ok(format!(
            "{}\n{} row(s) in set ({} ms)\n",
            output,
            paths.len(),
            execution_time_ms
        ))
    }

    /// 表格格式
    fn format_table(&self, paths: &[Path]) -> String {
        let mut table = Table::new();

        // 设置表格格式
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["#", "Path", "Weight"]);

        for (i, path) in paths.iter().enumerate() {
            table.add_row(Row::new(vec![
                Cell::new(&(i + 1).to_string()),
                Cell::new(&path.to_string()),
                Cell::new(&format!("{}", path.weight())),
            ]));
        }

        table.to_string()
    }

    /// 打印图统计信息
    pub fn print_stats(&self, node_count: usize, edge_count: usize) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Node Count", node_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.to_string()
    }

    /// 打印指标快照
    pub fn print_metrics(&self, snapshot: &MetricsSnapshot) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Metric", "Value"]);
        table.add_row(row!["Total Searches", snapshot.total_searches]);
        table.add_row(row!["Success Searches", snapshot.success_searches]);
        table.add_row(row!["Failed Searches", snapshot.failed_searches]);
        table.add_row(row![
            "Avg Duration (ms)",
            format!("{:.2}", snapshot.avg_search_duration_ms)
        ]);
        table.add_row(row!["Paths Expanded", snapshot.paths_expanded]);
        table.add_row(row!["Branches Pruned", snapshot.branches_pruned]);
        table.add_row(row!["Paths Completed", snapshot.paths_completed]);
        table.to_string()
    }

    /// 打印帮助信息
    pub fn print_help() -> String {
        r#"
═══════════════════════════════════════════════════════════════
                   NearPath CLI 命令帮助
═══════════════════════════════════════════════════════════════

基础命令:
  help, h, ?           显示帮助
  quit, exit, q        退出程序
  stats, info          显示图统计信息
  metrics              显示搜索性能指标

  neighbors, n <ID>    查看节点邻居
                       示例: neighbors 1

  shortest <起点> <终点>
                       计算最短距离
                       示例: shortest 1 4

  paths <起点> <终点> <容差>
                       枚举容差范围内的全部近似最短路径
                       容差为不小于 1.0 的系数
                       示例: paths 1 4 1.5

提示: 容差 1.0 仅返回全部最短路径
═══════════════════════════════════════════════════════════════
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeId;

    fn sample_path() -> Path {
        Path::singleton(NodeId::new(1))
            .extend(NodeId::new(2), 10.0)
            .unwrap()
            .extend(NodeId::new(4), 10.0)
            .unwrap()
    }

    #[test]
    fn test_print_paths_table() {
        let printer = Printer::new(PrintMode::Table);
        let output = printer.print_paths(&[sample_path()], 3).unwrap();
        assert!(output.contains("1 -> 2 -> 4"));
        assert!(output.contains("20"));
        assert!(output.contains("1 row(s) in set (3 ms)"));
    }

    #[test]
    fn test_print_paths_json() {
        let printer = Printer::new(PrintMode::Json);
        let output = printer.print_paths(&[sample_path()], 0).unwrap();
        assert!(output.contains("\"total_weight\": 20.0"));
    }

    #[test]
    fn test_print_empty_set() {
        let printer = Printer::default();
        let output = printer.print_paths(&[], 1).unwrap();
        assert!(output.contains("Empty set"));
    }

    #[test]
    fn test_print_stats() {
        let printer = Printer::default();
        let output = printer.print_stats(4, 4);
        assert!(output.contains("Node Count"));
        assert!(output.contains("4"));
    }
}
