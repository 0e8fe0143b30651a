//! 命令行界面模块
//!
//! 交互命令分发和结果打印

mod commands;
mod printer;

pub use commands::{CommandHandler, CommandResult};
pub use printer::{PrintMode, Printer};
