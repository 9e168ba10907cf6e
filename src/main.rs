//! # batchpipe - 批量调用外部可执行程序
//!
//! 对输入目录中的每个文件调用一次外部可执行程序：
//! 标准输入重定向自输入文件，标准输出重定向到输出目录中
//! 按规则派生命名的文件（`base-my.ext`）。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   ├── batch/      (条目收集、命名、调用、批量执行)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.args) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
