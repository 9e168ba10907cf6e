//! # 条目收集器
//!
//! 枚举输入目录的直接条目并按策略筛选。
//!
//! ## 功能
//! - 只枚举一层（不递归）
//! - glob 模式匹配
//! - 非常规条目（子目录等）默认跳过并计数
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 调用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `glob` 匹配条目名

use crate::error::{BatchpipeError, Result};

use std::path::PathBuf;
use walkdir::WalkDir;

/// 条目收集器
pub struct EntryCollector {
    /// 输入目录
    input: PathBuf,
    /// 匹配模式
    pattern: String,
    /// 是否将非常规条目也传给外部程序
    include_dirs: bool,
}

/// 收集结果
#[derive(Debug)]
pub struct CollectedEntries {
    /// 选中的条目，按文件名排序
    pub entries: Vec<PathBuf>,
    /// 被跳过的非常规条目数量
    pub skipped_non_regular: usize,
}

impl EntryCollector {
    /// 创建新的条目收集器
    pub fn new(input: PathBuf) -> Self {
        Self {
            input,
            pattern: "*".to_string(),
            include_dirs: false,
        }
    }

    /// 设置匹配模式
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        self.pattern = pattern.to_string();
        self
    }

    /// 设置是否放行非常规条目
    pub fn include_dirs(mut self, include_dirs: bool) -> Self {
        self.include_dirs = include_dirs;
        self
    }

    /// 收集所有匹配的条目
    ///
    /// 按文件名排序，保证多次运行的处理顺序一致。
    pub fn collect(&self) -> Result<CollectedEntries> {
        let pattern = glob::Pattern::new(&self.pattern).map_err(|e| {
            BatchpipeError::InvalidPattern {
                pattern: self.pattern.clone(),
                reason: e.to_string(),
            }
        })?;

        let mut entries = Vec::new();
        let mut skipped_non_regular = 0;

        let walker = WalkDir::new(&self.input)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| BatchpipeError::DirectoryReadError {
                path: self.input.display().to_string(),
                source: e.into(),
            })?;

            let name = entry.file_name().to_string_lossy();
            if !pattern.matches(&name) {
                continue;
            }

            if !self.include_dirs && !entry.file_type().is_file() {
                skipped_non_regular += 1;
                continue;
            }

            entries.push(entry.path().to_path_buf());
        }

        Ok(CollectedEntries {
            entries,
            skipped_non_regular,
        })
    }
}
