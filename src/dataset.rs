//! 数据集读取模块
//!
//! # 设计思路
//!
//! 数据集是一个 TSV 文件，每行一条记录：`标题 \t Base64载荷`。
//! 逐行读取，空行跳过；缺少制表符的行是数据错误，报出行号后整体失败，
//! 不猜测字段边界。
//!
//! # 实现思路
//!
//! - `BufRead::lines` 逐行读取，避免一次性载入大文件。
//! - 记录索引按解析顺序分配（0 起始），决定输出图片文件名。
//! - 所有可能失败的操作均返回 `Result`，不使用 `expect()` / `unwrap()`。

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::artwork::ArtworkRecord;
use crate::error::AppError;

/// 读取数据集中的全部画稿记录。
///
/// # 参数
/// * `path` - TSV 数据集路径
///
/// # 返回
/// - `Ok(Vec<ArtworkRecord>)` — 按文件顺序排列的记录
/// - `Err(AppError::Dataset)` — 文件不可读或某行缺少制表符
pub fn load_records(path: &Path) -> Result<Vec<ArtworkRecord>, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::Dataset(format!("无法打开数据集 '{}': {}", path.display(), e))
    })?;

    let mut records = Vec::new();

    for (line_number, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| {
            AppError::Dataset(format!("读取第 {} 行失败: {}", line_number + 1, e))
        })?;

        if line.trim().is_empty() {
            continue;
        }

        records.push(parse_line(&line, line_number + 1, records.len())?);
    }

    log::info!("📋 数据集载入完成 - {} 条记录", records.len());
    Ok(records)
}

/// 解析单行记录：`标题 \t Base64载荷`。
fn parse_line(line: &str, line_number: usize, index: usize) -> Result<ArtworkRecord, AppError> {
    let Some((title, encoded)) = line.split_once('\t') else {
        return Err(AppError::Dataset(format!(
            "第 {} 行缺少制表符分隔的载荷字段",
            line_number
        )));
    };

    Ok(ArtworkRecord {
        index,
        title: title.to_string(),
        encoded: encoded.trim().to_string(),
    })
}
