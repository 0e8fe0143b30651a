//! NearPath CLI 工具
//!
//! 交互式命令行界面

use anyhow::Context;
use clap::Parser;
use nearpath::cli::{CommandHandler, CommandResult, PrintMode, Printer};
use nearpath::import::{load_graph_csv, load_graph_jsonl};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "nearpath-cli")]
#[command(about = "NearPath 命令行工具")]
struct Args {
    /// 边列表文件（CSV 表头 from,to,weight；.jsonl 后缀按 JSON Lines 解析）
    #[arg(short = 'i', long)]
    edges: PathBuf,

    /// 输出格式: table 或 json
    #[arg(short, long, default_value = "table")]
    format: String,

    /// 使用并行枚举
    #[arg(short, long)]
    parallel: bool,

    /// 执行单个命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mode = match args.format.as_str() {
        "json" => PrintMode::Json,
        "table" => PrintMode::Table,
        other => anyhow::bail!("未知的输出格式: {}", other),
    };

    let (graph, stats) = if args.edges.extension().is_some_and(|ext| ext == "jsonl") {
        load_graph_jsonl(&args.edges)
    } else {
        load_graph_csv(&args.edges)
    }
    .with_context(|| format!("加载边列表失败: {}", args.edges.display()))?;

    let graph = Arc::new(graph);

    println!("NearPath CLI - 近似最短路径枚举工具");
    println!("====================================");
    println!("边列表已加载: {}", args.edges.display());
    println!("  节点数: {}", graph.node_count());
    println!("  边数: {}", graph.edge_count());
    if stats.errors > 0 {
        println!("  跳过非法记录: {}", stats.errors);
    }

    let handler = CommandHandler::new(graph, Printer::new(mode), args.parallel);

    // 单个命令模式
    if let Some(command) = args.execute {
        return run_command(&handler, &command);
    }

    // 交互模式
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    let stdin = io::stdin();
    loop {
        print!("nearpath> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match handler.handle(&line) {
            CommandResult::Exit => break,
            CommandResult::Continue => {}
            CommandResult::Message(output) => println!("{}", output),
            CommandResult::Error(message) => println!("错误: {}", message),
        }
    }

    println!("再见！");
    Ok(())
}

fn run_command(handler: &CommandHandler, command: &str) -> anyhow::Result<()> {
    match handler.handle(command) {
        CommandResult::Message(output) => {
            println!("{}", output);
            Ok(())
        }
        CommandResult::Error(message) => anyhow::bail!("{}", message),
        CommandResult::Exit | CommandResult::Continue => Ok(()),
    }
}
