//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `AppError` 枚举，替代各模块中分散的
//! `.map_err(|e| e.to_string())`、`format!(...)`、`expect()` 等不一致模式。
//!
//! 画稿链路自身的错误（解码 / 解压 / 渲染）由 `artwork::ArtworkError` 承载，
//! 进入构建流程时通过 `From` 上转为 `AppError`。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `ArtworkError` 与 `std::io::Error` 提供 `From` 转换，无需手动 map。

use crate::artwork::ArtworkError;

/// 应用级统一错误类型
///
/// 构建流程各阶段均返回此类型，保证 `main` 收到一致的错误格式。
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 画稿处理链路错误（解码 / 解压 / 渲染）
    #[error("{0}")]
    Artwork(#[from] ArtworkError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 输出目录不可用
    #[error("存储目录不可用: {0}")]
    Storage(String),

    /// 数据集读取或格式错误
    #[error("数据集错误: {0}")]
    Dataset(String),

    /// 画廊构建失败
    #[error("画廊构建失败: {0}")]
    Gallery(String),
}
