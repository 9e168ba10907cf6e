//! # 输出文件名派生
//!
//! 在条目名的主干和扩展名之间插入固定后缀。
//!
//! ## 依赖关系
//! - 被 `commands/run.rs` 使用
//! - 无外部模块依赖

use std::path::Path;

/// 派生输出文件名：`base + suffix + extension`
///
/// 扩展名按最后一个合格的 `.` 切分；`.bashrc` 这类
/// 前导点文件名视为无扩展名。
pub fn output_name(entry: &str, suffix: &str) -> String {
    let path = Path::new(entry);

    let stem = match path.file_stem() {
        Some(stem) => stem.to_string_lossy(),
        None => return format!("{}{}", entry, suffix),
    };

    match path.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    }
}
