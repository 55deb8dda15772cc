//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载画稿解码与渲染链路中的所有错误来源，
//! 避免字符串拼接式错误处理。通过 `thiserror` 保持人类可读错误，
//! 同时让调用侧可按分支匹配。
//!
//! 这些错误均为确定性的数据错误：对同一输入重试不会改变结果，
//! 因此链路内不做任何重试，直接上抛由调用方决定跳过或中止。

/// 画稿处理统一错误类型。
///
/// 该类型会在构建层被上转为 `AppError`，并附带记录标识。
#[derive(Debug, thiserror::Error)]
pub enum ArtworkError {
    /// 输入文本不是合法的（替换字母表后的）Base64。
    #[error("Base64 解码失败：{0}")]
    Encoding(String),

    /// 压缩字节流损坏或被截断。
    #[error("压缩流解压失败：{0}")]
    Decompression(String),

    /// 反序列化后的文档结构不合法（字段缺失、网格不矩形、pixelSize 非正）。
    #[error("画稿文档无效：{0}")]
    MalformedDocument(String),

    /// 像素网格不含任何行。
    #[error("画稿不含任何像素行")]
    EmptyArtwork,

    /// 颜色码超出 [0, 255]。
    #[error("无效 ANSI 颜色码：{0}")]
    InvalidColorCode(String),

    /// 解压体积或渲染缓冲超过资源上限。
    #[error("资源限制：{0}")]
    ResourceLimit(String),
}
