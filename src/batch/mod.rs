//! # 批量处理模块
//!
//! 提供批量调用外部程序的能力。
//!
//! ## 功能
//! - 收集输入目录的直接条目
//! - 派生输出文件名
//! - 单次子进程调用（参数向量 + 流重定向）
//! - 串行执行与结果统计
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 使用
//! - 使用 `walkdir`, `glob` 收集条目
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod invoke;
pub mod naming;
pub mod runner;

pub use collector::{CollectedEntries, EntryCollector};
pub use invoke::Invocation;
pub use runner::{run_sequential, BatchReport, InvocationOutcome, InvocationStatus};
