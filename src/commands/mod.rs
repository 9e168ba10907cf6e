//! # 命令执行模块
//!
//! 实现批量调用的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `utils/`
//! - 子模块: run

pub mod run;

use crate::cli::run::RunArgs;
use crate::error::Result;

/// 执行命令
pub fn run(args: RunArgs) -> Result<()> {
    run::execute(args)
}
