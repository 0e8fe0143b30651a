//! 数据导入模块
//!
//! 支持从 CSV、JSON Lines 批量导入边列表

use crate::error::{Error, Result};
use crate::graph::{Graph, UndirectedEdge};
use crate::types::NodeId;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::info;

/// 导入统计
#[derive(Debug, Default, Clone)]
pub struct ImportStats {
    pub edges_imported: usize,
    pub errors: usize,
    pub duration_ms: u64,
}

/// 边记录（CSV 列与 JSON 字段共用）
#[derive(Debug, Serialize, Deserialize)]
struct EdgeRecord {
    from: u64,
    to: u64,
    weight: f64,
}

impl EdgeRecord {
    fn into_edge(self) -> Result<UndirectedEdge> {
        UndirectedEdge::new(NodeId::new(self.from), NodeId::new(self.to), self.weight)
    }
}

/// 边列表导入器
///
/// 图在构建后不可变，导入器因此先收集边集，由调用方
/// (或 [`load_graph_csv`] / [`load_graph_jsonl`]) 一次性构建图。
/// 非法记录计入 [`ImportStats::errors`] 并跳过。
pub struct EdgeListImporter;

impl EdgeListImporter {
    /// 创建导入器
    pub fn new() -> Self {
        Self
    }

    /// 从 CSV 导入边列表（表头: from,to,weight）
    pub fn import_csv<P: AsRef<Path>>(&self, path: P) -> Result<(Vec<UndirectedEdge>, ImportStats)> {
        let start = std::time::Instant::now();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path.as_ref())
            .map_err(|e| Error::ImportError(format!("CSV 读取失败: {}", e)))?;

        let mut edges = Vec::new();
        let mut stats = ImportStats::default();

        for record in reader.deserialize::<EdgeRecord>() {
            match record
                .map_err(|e| Error::ImportError(format!("CSV 解析错误: {}", e)))
                .and_then(EdgeRecord::into_edge)
            {
                Ok(edge) => {
                    edges.push(edge);
                    stats.edges_imported += 1;
                }
                Err(_) => stats.errors += 1,
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            edges = stats.edges_imported,
            errors = stats.errors,
            "CSV 边列表导入完成"
        );
        Ok((edges, stats))
    }

    /// 从 JSON Lines 导入边列表
    pub fn import_jsonl<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<(Vec<UndirectedEdge>, ImportStats)> {
        let start = std::time::Instant::now();
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);

        let mut edges = Vec::new();
        let mut stats = ImportStats::default();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<EdgeRecord>(&line)
                .map_err(|e| Error::ImportError(format!("JSON 解析错误: {}", e)))
                .and_then(EdgeRecord::into_edge)
            {
                Ok(edge) => {
                    edges.push(edge);
                    stats.edges_imported += 1;
                }
                Err(_) => stats.errors += 1,
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            edges = stats.edges_imported,
            errors = stats.errors,
            "JSONL 边列表导入完成"
        );
        Ok((edges, stats))
    }
}

impl Default for EdgeListImporter {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 CSV 边列表构建图
pub fn load_graph_csv<P: AsRef<Path>>(path: P) -> Result<(Graph, ImportStats)> {
    let (edges, stats) = EdgeListImporter::new().import_csv(path)?;
    Ok((Graph::from_edges(edges)?, stats))
}

/// 从 JSON Lines 边列表构建图
pub fn load_graph_jsonl<P: AsRef<Path>>(path: P) -> Result<(Graph, ImportStats)> {
    let (edges, stats) = EdgeListImporter::new().import_jsonl(path)?;
    Ok((Graph::from_edges(edges)?, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_import_csv() {
        // 创建测试 CSV
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "from,to,weight").unwrap();
        writeln!(file, "1,2,10").unwrap();
        writeln!(file, "2,4,10.5").unwrap();

        let (graph, stats) = load_graph_csv(file.path()).unwrap();
        assert_eq!(stats.edges_imported, 2);
        assert_eq!(stats.errors, 0);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_import_csv_counts_invalid_rows() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "from,to,weight").unwrap();
        writeln!(file, "1,2,10").unwrap();
        // 自环和非正权重被计为错误并跳过
        writeln!(file, "3,3,5").unwrap();
        writeln!(file, "1,4,-2").unwrap();
        writeln!(file, "not,a,row").unwrap();

        let (edges, stats) = EdgeListImporter::new().import_csv(file.path()).unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(stats.edges_imported, 1);
        assert_eq!(stats.errors, 3);
    }

    #[test]
    fn test_import_jsonl() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"from":1,"to":2,"weight":10.0}}"#).unwrap();
        writeln!(file, r#"{{"from":2,"to":3,"weight":5.0}}"#).unwrap();

        let (graph, stats) = load_graph_jsonl(file.path()).unwrap();
        assert_eq!(stats.edges_imported, 2);
        assert_eq!(stats.errors, 0);
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_import_jsonl_skips_malformed_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"from":1,"to":2,"weight":10.0}}"#).unwrap();
        writeln!(file, "{{broken json").unwrap();

        let (edges, stats) = EdgeListImporter::new().import_jsonl(file.path()).unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(stats.errors, 1);
    }
}
