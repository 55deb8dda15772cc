//! # 栅格缓冲模块
//!
//! ## 设计思路
//!
//! 一块平铺的 RGBA 字节缓冲，按逻辑坐标写入放大后的像素方块。
//! 每个逻辑像素展开为 `pixel_size × pixel_size` 的设备像素方块，
//! 缓冲零初始化为全透明黑，核心链路只写不读，写满后整体移交编码器。
//!
//! ## 实现思路
//!
//! - 像素寻址固定为 `(x + width * y) * 4`，四字节按 R,G,B,A 排列，
//!   与下游 PNG 编码器期望的内存布局一致。
//! - 逻辑坐标越界属于调用方（渲染器）的编程错误，直接 `assert!` 快速失败，
//!   不作为可恢复错误返回。

use super::source::{RasterImage, Rgba};

/// 放大分辨率下的 RGBA 栅格缓冲。
pub struct RasterBuffer {
    logical_width: usize,
    logical_height: usize,
    pixel_size: usize,
    /// 设备像素宽度（`logical_width * pixel_size`）。
    width: usize,
    /// 设备像素高度（`logical_height * pixel_size`）。
    height: usize,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// 按逻辑尺寸与放大倍数分配零初始化缓冲。
    ///
    /// 设备尺寸的溢出检查由调用方（渲染器）在构造前完成。
    pub fn new(logical_width: usize, logical_height: usize, pixel_size: usize) -> Self {
        let width = logical_width * pixel_size;
        let height = logical_height * pixel_size;

        Self {
            logical_width,
            logical_height,
            pixel_size,
            width,
            height,
            data: vec![0; width * height * 4],
        }
    }

    /// 在逻辑坐标 `(logical_x, logical_y)` 处写入一个单色方块。
    ///
    /// 方块覆盖设备坐标
    /// `(logical_x * pixel_size .. +pixel_size, logical_y * pixel_size .. +pixel_size)`。
    pub fn set_block(&mut self, logical_x: usize, logical_y: usize, color: Rgba) {
        assert!(
            logical_x < self.logical_width && logical_y < self.logical_height,
            "逻辑坐标越界：({}, {})，网格为 {}x{}",
            logical_x,
            logical_y,
            self.logical_width,
            self.logical_height
        );

        let origin_x = logical_x * self.pixel_size;
        let origin_y = logical_y * self.pixel_size;

        for dy in 0..self.pixel_size {
            for dx in 0..self.pixel_size {
                self.set_device_pixel(origin_x + dx, origin_y + dy, color);
            }
        }
    }

    fn set_device_pixel(&mut self, x: usize, y: usize, color: Rgba) {
        let i = (x + self.width * y) * 4;
        self.data[i] = color.red;
        self.data[i + 1] = color.green;
        self.data[i + 2] = color.blue;
        self.data[i + 3] = color.alpha;
    }

    /// 冻结缓冲，移交为可编码的图像。
    pub fn into_image(self) -> RasterImage {
        RasterImage {
            width: self.width as u32,
            height: self.height as u32,
            bytes: self.data,
        }
    }
}
