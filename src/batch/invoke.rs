//! # 子进程调用
//!
//! 单次同步调用外部可执行程序：标准输入重定向自输入文件，
//! 标准输出重定向到输出文件，标准错误继承终端。
//!
//! 调用始终以参数向量方式执行，不经过 shell 解释，
//! 文件名中的空格或元字符不会改变被执行的命令。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 使用
//! - 无外部模块依赖

use crate::error::{BatchpipeError, Result};

use std::fs::File;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

/// 单次调用描述符
#[derive(Debug, Clone)]
pub struct Invocation {
    /// 可执行程序路径
    pub executable: PathBuf,
    /// 输入文件（重定向为 stdin）
    pub input: PathBuf,
    /// 输出文件（重定向为 stdout，截断写入）
    pub output: PathBuf,
}

impl Invocation {
    /// 创建新的调用描述符
    pub fn new(executable: PathBuf, input: PathBuf, output: PathBuf) -> Self {
        Self {
            executable,
            input,
            output,
        }
    }

    /// 同步执行，阻塞至子进程退出
    pub fn run(&self) -> Result<ExitStatus> {
        let stdin = File::open(&self.input).map_err(|e| BatchpipeError::InputOpenError {
            path: self.input.display().to_string(),
            source: e,
        })?;

        let stdout = File::create(&self.output).map_err(|e| BatchpipeError::OutputCreateError {
            path: self.output.display().to_string(),
            source: e,
        })?;

        Command::new(&self.executable)
            .stdin(Stdio::from(stdin))
            .stdout(Stdio::from(stdout))
            .status()
            .map_err(|e| BatchpipeError::SpawnError {
                command: self.executable.display().to_string(),
                source: e,
            })
    }
}
