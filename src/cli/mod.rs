//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 命令结构
//! - 单一命令：`batchpipe <EXECUTABLE> <INPUT_DIR> <OUTPUT_DIR> [flags]`
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: run

pub mod run;

use clap::Parser;

/// batchpipe - 对目录中每个文件批量调用外部可执行程序
#[derive(Parser)]
#[command(name = "batchpipe")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Batch-invoke an external executable over a directory of input files",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub args: run::RunArgs,
}
