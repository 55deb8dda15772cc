//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将"外部输入类型"和"流水线中间结果"解耦：
//! - `ArtworkRecord` 表示数据集中的一条记录（标题 + 编码载荷）
//! - `ArtworkDocument` 表示解码后的逻辑像素网格
//! - `Rgba` 表示单个已解析颜色
//! - `RasterImage` 表示可直接交给 PNG 编码器的 RGBA 数据

use serde::Deserialize;

/// 数据集中的一条画稿记录。
#[derive(Debug, Clone)]
pub struct ArtworkRecord {
    /// 记录在数据集中的位置（0 起始），决定输出图片文件名。
    pub index: usize,
    /// 展示标题（对核心链路不透明）。
    pub title: String,
    /// Base64url 变体编码的压缩载荷。
    pub encoded: String,
}

/// 解码阶段输出：逻辑像素网格与放大倍数。
///
/// `pixels` 的行数是逻辑高度，行内元素数是逻辑宽度；
/// `None` 表示透明（不绘制）。构造之后不可变。
#[derive(Debug, Clone, Deserialize)]
pub struct ArtworkDocument {
    /// 逻辑像素网格。每个元素是 ANSI 颜色码或 `null`。
    pub pixels: Vec<Vec<Option<i64>>>,
    /// 每个逻辑像素放大为 `pixel_size × pixel_size` 的设备像素方块。
    #[serde(rename = "pixelSize")]
    pub pixel_size: u32,
}

/// 单个已解析颜色（8 位四通道）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    /// 完全透明的黑色，即缓冲区零初始化的状态。
    pub const TRANSPARENT: Rgba = Rgba { red: 0, green: 0, blue: 0, alpha: 0 };

    /// 不透明颜色构造。
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue, alpha: 255 }
    }
}

/// 渲染阶段输出：可直接写入 PNG 编码器的 RGBA 像素数据。
///
/// 渲染完成后冻结，整体移交给编码器，不与其他记录共享。
#[derive(Debug, Clone)]
pub struct RasterImage {
    /// 图像宽度（设备像素）。
    pub width: u32,
    /// 图像高度（设备像素）。
    pub height: u32,
    /// RGBA 字节数组（`width * height * 4`），行主序，R,G,B,A 顺序。
    pub bytes: Vec<u8>,
}
