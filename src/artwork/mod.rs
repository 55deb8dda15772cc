//! # 画稿处理模块（artwork）
//!
//! ## 设计思路
//!
//! 该模块将"载荷解码 → 颜色解析 → 栅格写入 → 渲染编排"
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `decoder`：Base64 变体解码、zlib 解压、JSON 结构校验
//! - `palette`：ANSI 颜色码到 RGBA 的纯函数解析
//! - `raster`：放大分辨率下的 RGBA 缓冲与方块写入
//! - `rasterizer`：编排整条渲染链路
//! - `source/error`：数据模型与错误
//!
//! ## 实现思路
//!
//! 对外仅暴露必要类型与入口函数，内部细节保持 `mod` 私有。
//! 链路内全部为同步纯计算，单条记录无内部挂起点；
//! 并发由上层构建器按记录粒度调度。
//!
//! ## 调用链
//!
//! ```text
//! gallery::builder
//!    ↓
//! decoder.rs（Base64 → zlib → JSON → 校验）
//!    ↓
//! rasterizer.rs（行主序遍历编排）
//!    ├─ palette.rs（颜色码 → RGBA）
//!    └─ raster.rs（方块写入平铺缓冲）
//!    ↓
//! RasterImage 移交 PNG 编码
//! ```

mod decoder;
mod error;
pub mod palette;
mod raster;
mod rasterizer;
mod source;

pub use decoder::decode_artwork;
pub use error::ArtworkError;
pub use raster::RasterBuffer;
pub use rasterizer::rasterize;
pub use source::{ArtworkDocument, ArtworkRecord, RasterImage, Rgba};
