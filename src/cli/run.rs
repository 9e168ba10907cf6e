//! # run 命令 CLI 定义
//!
//! 批量调用参数：可执行程序、输入/输出目录与执行策略。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/run.rs`

use clap::Args;
use std::path::PathBuf;

/// 批量调用参数
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Executable to invoke once per input file (bare names resolve to ./NAME)
    pub executable: String,

    /// Directory containing the input files
    pub input_dir: PathBuf,

    /// Directory receiving the output files (must already exist)
    pub output_dir: PathBuf,

    // ─────────────────────────────────────────────────────────────
    // Selection options
    // ─────────────────────────────────────────────────────────────
    /// Glob pattern for input entry names
    #[arg(short, long, default_value = "*")]
    pub pattern: String,

    /// Pass subdirectories and other non-regular entries to the executable
    /// instead of skipping them
    #[arg(long, default_value_t = false)]
    pub include_dirs: bool,

    // ─────────────────────────────────────────────────────────────
    // Naming options
    // ─────────────────────────────────────────────────────────────
    /// Suffix inserted between the base name and the extension
    #[arg(long, default_value = "-my")]
    pub suffix: String,

    // ─────────────────────────────────────────────────────────────
    // Execution control
    // ─────────────────────────────────────────────────────────────
    /// Skip entries whose output file already exists
    #[arg(long, default_value_t = false)]
    pub skip_existing: bool,

    /// List planned invocations without executing anything
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Exit with a non-zero status if any invocation fails
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Write a per-entry outcome report (CSV) to this path
    #[arg(long)]
    pub report: Option<PathBuf>,
}
