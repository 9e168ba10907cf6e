//! # 批量执行器
//!
//! 严格串行地执行批量调用任务。
//!
//! ## 功能
//! - 顺序迭代：上一个子进程退出后才启动下一个
//! - 进度条显示
//! - 按处理顺序记录逐条结果与汇总统计
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `utils/output.rs` 打印失败信息

use crate::utils::{output, progress};

use serde::Serialize;
use std::path::{Path, PathBuf};

/// 单条调用的终态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvocationStatus {
    /// 子进程正常退出（退出码 0）
    Succeeded,
    /// 跳过（如输出已存在、非常规条目）
    Skipped,
    /// 失败（非零退出、重定向或启动错误）
    Failed,
}

/// 单条调用结果，按处理顺序写入报告
#[derive(Debug, Clone, Serialize)]
pub struct InvocationOutcome {
    /// 条目名
    pub entry: String,
    /// 终态
    pub status: InvocationStatus,
    /// 子进程退出码（被信号终止或未启动时为空）
    pub exit_code: Option<i32>,
    /// 跳过/失败原因
    pub detail: String,
}

impl InvocationOutcome {
    /// 成功结果
    pub fn succeeded(entry: String, exit_code: Option<i32>) -> Self {
        Self {
            entry,
            status: InvocationStatus::Succeeded,
            exit_code,
            detail: String::new(),
        }
    }

    /// 跳过结果
    pub fn skipped(entry: String, reason: String) -> Self {
        Self {
            entry,
            status: InvocationStatus::Skipped,
            exit_code: None,
            detail: reason,
        }
    }

    /// 失败结果
    pub fn failed(entry: String, exit_code: Option<i32>, reason: String) -> Self {
        Self {
            entry,
            status: InvocationStatus::Failed,
            exit_code,
            detail: reason,
        }
    }
}

/// 批量执行报告：按处理顺序排列的逐条结果
#[derive(Debug, Default)]
pub struct BatchReport {
    /// 逐条结果
    pub outcomes: Vec<InvocationOutcome>,
}

impl BatchReport {
    /// 追加一条结果
    pub fn push(&mut self, outcome: InvocationOutcome) {
        self.outcomes.push(outcome);
    }

    /// 成功数量
    pub fn succeeded(&self) -> usize {
        self.count(InvocationStatus::Succeeded)
    }

    /// 跳过数量
    pub fn skipped(&self) -> usize {
        self.count(InvocationStatus::Skipped)
    }

    /// 失败数量
    pub fn failed(&self) -> usize {
        self.count(InvocationStatus::Failed)
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// 失败的条目
    pub fn failures(&self) -> impl Iterator<Item = &InvocationOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.status == InvocationStatus::Failed)
    }

    fn count(&self, status: InvocationStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }
}

/// 串行处理条目列表
///
/// 每个条目恰好产生一次调用；单条失败不会中断批量，
/// 只记入报告并继续下一条。
pub fn run_sequential<F>(entries: &[PathBuf], mut processor: F) -> BatchReport
where
    F: FnMut(&Path) -> InvocationOutcome,
{
    let pb = progress::create_progress_bar(entries.len() as u64, "Invoking");

    let mut report = BatchReport::default();

    for entry in entries {
        let outcome = processor(entry);

        match outcome.status {
            InvocationStatus::Failed => {
                pb.suspend(|| {
                    output::print_error(&format!("{}: {}", outcome.entry, outcome.detail));
                });
            }
            InvocationStatus::Skipped => {
                pb.suspend(|| {
                    output::print_skip(&format!("{}: {}", outcome.entry, outcome.detail));
                });
            }
            InvocationStatus::Succeeded => {}
        }

        report.push(outcome);
        pb.inc(1);
    }

    pb.finish_and_clear();
    report
}
