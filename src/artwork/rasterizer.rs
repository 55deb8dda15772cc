//! # 渲染编排模块
//!
//! ## 设计思路
//!
//! 组合解码输出、颜色解析与栅格缓冲，产出完整的 RGBA 图像。
//! 不使用继承式的"ANSI 栅格"特化类型：栅格缓冲保持纯粹，
//! 颜色码在写入前经 `palette::resolve` 解析，组合优于继承。
//!
//! ## 实现思路
//!
//! 1. 推导逻辑尺寸（零行即 `EmptyArtwork`）
//! 2. `checked_mul` 校验设备缓冲尺寸，超限返回 `ResourceLimit`
//! 3. 行主序遍历每个单元，解析颜色后写入放大方块
//!
//! 单元之间相互独立，遍历顺序不影响结果；固定行主序是为了测试可复现。
//! 颜色解析失败会中止整条记录，并在错误中标注失败坐标。

use super::raster::RasterBuffer;
use super::source::{ArtworkDocument, RasterImage};
use super::{palette, ArtworkError};

/// 设备像素总数上限（`width * height`）。
const MAX_DEVICE_PIXELS: u64 = 1_000_000_000;

/// 将画稿文档渲染为放大后的 RGBA 图像。
///
/// # 返回
/// - `Ok(RasterImage)` — 每个逻辑像素已展开为 `pixel_size × pixel_size` 方块
/// - `Err(EmptyArtwork)` — 网格不含任何行
/// - `Err(InvalidColorCode)` — 某单元颜色码越界（附坐标）
/// - `Err(ResourceLimit)` — 设备缓冲尺寸越过上限
pub fn rasterize(document: &ArtworkDocument) -> Result<RasterImage, ArtworkError> {
    let height = document.pixels.len();
    if height == 0 {
        return Err(ArtworkError::EmptyArtwork);
    }

    let width = document.pixels[0].len();
    let pixel_size = document.pixel_size as usize;
    validate_device_size(width, height, pixel_size)?;

    let mut buffer = RasterBuffer::new(width, height, pixel_size);

    for (y, row) in document.pixels.iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let color = palette::resolve(*cell).map_err(|e| annotate_cell(e, x, y))?;
            buffer.set_block(x, y, color);
        }
    }

    Ok(buffer.into_image())
}

/// 设备缓冲尺寸校验：`width * pixel_size * height * pixel_size` 不得溢出或超限。
fn validate_device_size(width: usize, height: usize, pixel_size: usize) -> Result<(), ArtworkError> {
    let device_pixels = (width as u64)
        .checked_mul(pixel_size as u64)
        .and_then(|w| w.checked_mul(height as u64))
        .and_then(|wh| wh.checked_mul(pixel_size as u64))
        .ok_or_else(|| ArtworkError::ResourceLimit("设备缓冲尺寸计算溢出".to_string()))?;

    if device_pixels > MAX_DEVICE_PIXELS {
        return Err(ArtworkError::ResourceLimit(format!(
            "设备像素数过大：{}（上限：{}）",
            device_pixels, MAX_DEVICE_PIXELS
        )));
    }

    Ok(())
}

/// 为颜色解析错误补上失败坐标，便于定位损坏单元。
fn annotate_cell(error: ArtworkError, x: usize, y: usize) -> ArtworkError {
    match error {
        ArtworkError::InvalidColorCode(message) => {
            ArtworkError::InvalidColorCode(format!("{}（坐标 ({}, {})）", message, x, y))
        }
        other => other,
    }
}
