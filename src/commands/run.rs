//! # run 命令实现
//!
//! 对输入目录中的每个条目调用一次外部可执行程序。
//!
//! ## 功能
//! - 预检可执行程序与输入/输出目录
//! - 收集条目并派生输出文件名
//! - 串行调用，stdin/stdout 重定向到文件
//! - 汇总统计、失败表格、可选 CSV 报告
//!
//! ## 依赖关系
//! - 使用 `cli/run.rs` 定义的参数
//! - 使用 `batch/`
//! - 使用 `utils/output.rs`

use crate::batch::{
    naming, run_sequential, BatchReport, EntryCollector, Invocation, InvocationOutcome,
};
use crate::cli::run::RunArgs;
use crate::error::{BatchpipeError, Result};
use crate::utils::output;

use std::path::{Path, PathBuf};
use tabled::{Table, Tabled};

/// 失败汇总表的一行
#[derive(Tabled)]
struct FailureRow {
    #[tabled(rename = "Entry")]
    entry: String,
    #[tabled(rename = "Exit")]
    exit: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

/// 执行 run 命令
pub fn execute(args: RunArgs) -> Result<()> {
    output::print_header("Batch Invocation");

    // 预检：可执行程序与目录
    let executable = resolve_executable(&args.executable);
    if !executable.is_file() {
        return Err(BatchpipeError::ExecutableNotFound {
            path: executable.display().to_string(),
        });
    }

    ensure_directory(&args.input_dir)?;
    // 输出目录必须已存在，不自动创建
    ensure_directory(&args.output_dir)?;

    // 收集条目
    let collected = EntryCollector::new(args.input_dir.clone())
        .with_pattern(&args.pattern)
        .include_dirs(args.include_dirs)
        .collect()?;

    if collected.skipped_non_regular > 0 {
        output::print_warning(&format!(
            "Skipped {} non-regular entries (use --include-dirs to pass them through)",
            collected.skipped_non_regular
        ));
    }

    if collected.entries.is_empty() {
        output::print_warning(&format!(
            "No entries matched '{}' under {}",
            args.pattern,
            args.input_dir.display()
        ));
        return Ok(());
    }

    output::print_info(&format!(
        "Invoking '{}' on {} entries",
        executable.display(),
        collected.entries.len()
    ));

    if args.dry_run {
        for input in &collected.entries {
            let output_path = planned_output(input, &args.output_dir, &args.suffix);
            output::print_planned(&input.display().to_string(), &output_path.display().to_string());
        }
        return Ok(());
    }

    // 串行执行批量
    let report = run_sequential(&collected.entries, |input| {
        process_entry(
            &executable,
            input,
            &args.output_dir,
            &args.suffix,
            args.skip_existing,
        )
    });

    output::print_separator();

    if report.failed() > 0 {
        let rows: Vec<FailureRow> = report
            .failures()
            .map(|o| FailureRow {
                entry: o.entry.clone(),
                exit: o
                    .exit_code
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                reason: o.detail.clone(),
            })
            .collect();

        let table = Table::new(&rows);
        println!("{}", table);
    }

    output::print_done(&format!(
        "Processed {} entries: {} succeeded, {} skipped, {} failed",
        report.total(),
        report.succeeded(),
        report.skipped(),
        report.failed()
    ));

    if let Some(ref report_path) = args.report {
        save_report_csv(&report, report_path)?;
        output::print_success(&format!("Report saved to '{}'", report_path.display()));
    }

    if args.strict && report.failed() > 0 {
        return Err(BatchpipeError::InvocationsFailed {
            failed: report.failed(),
            total: report.total(),
        });
    }

    Ok(())
}

/// 处理单个条目：派生输出名并执行一次调用
fn process_entry(
    executable: &Path,
    input: &Path,
    output_dir: &Path,
    suffix: &str,
    skip_existing: bool,
) -> InvocationOutcome {
    let entry_name = entry_display_name(input);
    let output_path = planned_output(input, output_dir, suffix);

    if skip_existing && output_path.exists() {
        return InvocationOutcome::skipped(
            entry_name,
            format!("output exists: {}", output_path.display()),
        );
    }

    let invocation = Invocation::new(
        executable.to_path_buf(),
        input.to_path_buf(),
        output_path,
    );

    match invocation.run() {
        Ok(status) if status.success() => InvocationOutcome::succeeded(entry_name, status.code()),
        Ok(status) => {
            let reason = match status.code() {
                Some(code) => format!("exited with status {}", code),
                None => "terminated by signal".to_string(),
            };
            InvocationOutcome::failed(entry_name, status.code(), reason)
        }
        Err(e) => InvocationOutcome::failed(entry_name, None, e.to_string()),
    }
}

/// 计算条目对应的输出文件路径
fn planned_output(input: &Path, output_dir: &Path, suffix: &str) -> PathBuf {
    output_dir.join(naming::output_name(&entry_display_name(input), suffix))
}

fn entry_display_name(input: &Path) -> String {
    match input.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => input.display().to_string(),
    }
}

/// 解析可执行程序路径
///
/// 裸名字解析为当前工作目录下的 `./NAME`，不做 PATH 查找；
/// 带路径分隔符的参数按原样使用。
fn resolve_executable(name: &str) -> PathBuf {
    let path = Path::new(name);
    if path.components().count() == 1 && !path.is_absolute() {
        Path::new(".").join(path)
    } else {
        path.to_path_buf()
    }
}

fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(BatchpipeError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }
    if !path.is_dir() {
        return Err(BatchpipeError::NotADirectory {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

/// 保存逐条结果报告 CSV
fn save_report_csv(report: &BatchReport, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for outcome in &report.outcomes {
        wtr.serialize(outcome)?;
    }

    wtr.flush().map_err(|e| BatchpipeError::OutputCreateError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn run_args(executable: &str, input_dir: PathBuf, output_dir: PathBuf) -> RunArgs {
        RunArgs {
            executable: executable.to_string(),
            input_dir,
            output_dir,
            pattern: "*".to_string(),
            include_dirs: false,
            suffix: "-my".to_string(),
            skip_existing: false,
            dry_run: false,
            strict: false,
            report: None,
        }
    }

    #[test]
    fn test_resolve_executable_bare_name() {
        assert_eq!(resolve_executable("mytool"), PathBuf::from("./mytool"));
    }

    #[test]
    fn test_resolve_executable_path_is_kept() {
        assert_eq!(
            resolve_executable("tools/mytool"),
            PathBuf::from("tools/mytool")
        );
        assert_eq!(
            resolve_executable("/usr/bin/mytool"),
            PathBuf::from("/usr/bin/mytool")
        );
    }

    #[test]
    fn test_execute_copies_each_entry_through_cat() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("report.txt"), "first").unwrap();
        fs::write(input.path().join("data"), "second").unwrap();

        let args = run_args(
            "/bin/cat",
            input.path().to_path_buf(),
            output.path().to_path_buf(),
        );
        execute(args).unwrap();

        assert_eq!(
            fs::read_to_string(output.path().join("report-my.txt")).unwrap(),
            "first"
        );
        assert_eq!(
            fs::read_to_string(output.path().join("data-my")).unwrap(),
            "second"
        );
    }

    #[test]
    fn test_execute_handles_metacharacter_filenames() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("a b;c.txt"), "intact").unwrap();

        let args = run_args(
            "/bin/cat",
            input.path().to_path_buf(),
            output.path().to_path_buf(),
        );
        execute(args).unwrap();

        assert_eq!(
            fs::read_to_string(output.path().join("a b;c-my.txt")).unwrap(),
            "intact"
        );
    }

    #[test]
    fn test_execute_fails_without_output_directory() {
        let input = tempfile::tempdir().unwrap();
        fs::write(input.path().join("a.txt"), "x").unwrap();

        let args = run_args(
            "/bin/cat",
            input.path().to_path_buf(),
            input.path().join("no-such-dir"),
        );
        let err = execute(args).unwrap_err();

        assert!(matches!(err, BatchpipeError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_execute_fails_for_missing_executable() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();

        let args = run_args(
            "/no/such/executable",
            input.path().to_path_buf(),
            output.path().to_path_buf(),
        );
        let err = execute(args).unwrap_err();

        assert!(matches!(err, BatchpipeError::ExecutableNotFound { .. }));
    }

    #[test]
    fn test_execute_continues_past_failures_by_default() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("a.txt"), "x").unwrap();
        fs::write(input.path().join("b.txt"), "y").unwrap();

        // /bin/false 对每个条目都返回非零退出码
        let args = run_args(
            "/bin/false",
            input.path().to_path_buf(),
            output.path().to_path_buf(),
        );
        execute(args).unwrap();

        // 每个条目仍然产生了（空的）输出文件
        assert!(output.path().join("a-my.txt").exists());
        assert!(output.path().join("b-my.txt").exists());
    }

    #[test]
    fn test_execute_strict_reports_failures() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("a.txt"), "x").unwrap();

        let mut args = run_args(
            "/bin/false",
            input.path().to_path_buf(),
            output.path().to_path_buf(),
        );
        args.strict = true;
        let err = execute(args).unwrap_err();

        assert!(matches!(
            err,
            BatchpipeError::InvocationsFailed { failed: 1, total: 1 }
        ));
    }

    #[test]
    fn test_execute_skip_existing() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("a.txt"), "new").unwrap();
        fs::write(output.path().join("a-my.txt"), "old").unwrap();

        let mut args = run_args(
            "/bin/cat",
            input.path().to_path_buf(),
            output.path().to_path_buf(),
        );
        args.skip_existing = true;
        execute(args).unwrap();

        // 已有输出未被覆盖
        assert_eq!(
            fs::read_to_string(output.path().join("a-my.txt")).unwrap(),
            "old"
        );
    }

    #[test]
    fn test_execute_dry_run_writes_nothing() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("a.txt"), "x").unwrap();

        let mut args = run_args(
            "/bin/cat",
            input.path().to_path_buf(),
            output.path().to_path_buf(),
        );
        args.dry_run = true;
        execute(args).unwrap();

        assert!(!output.path().join("a-my.txt").exists());
    }

    #[test]
    fn test_execute_writes_csv_report() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("a.txt"), "x").unwrap();

        let report_path = output.path().join("report.csv");
        let mut args = run_args(
            "/bin/cat",
            input.path().to_path_buf(),
            output.path().to_path_buf(),
        );
        args.report = Some(report_path.clone());
        execute(args).unwrap();

        let contents = fs::read_to_string(&report_path).unwrap();
        assert!(contents.contains("entry,status,exit_code,detail"));
        assert!(contents.contains("a.txt,succeeded,0,"));
    }
}
