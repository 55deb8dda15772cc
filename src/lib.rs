//! # ANSI Pixel Gallery — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    数据集 (ansi-pixels.tsv)               │
//! │              每行：标题 \t Base64 压缩载荷                 │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓
//! ┌───────┼──────────────────────────────────────────────────┐
//! │       ↓                                                  │
//! │  ┌─ error ────── AppError (统一错误类型)                  │
//! │  │                                                       │
//! │  ├─ dataset ──── TSV 逐行解析 → ArtworkRecord             │
//! │  │                                                       │
//! │  ├─ artwork ──── 核心解码与渲染                           │
//! │  │   ├─ decoder    Base64 → zlib → JSON → 校验            │
//! │  │   ├─ palette    ANSI 颜色码 → RGBA（三子空间）         │
//! │  │   ├─ raster     放大方块写入平铺 RGBA 缓冲             │
//! │  │   └─ rasterizer 行主序编排，产出 RasterImage           │
//! │  │                                                       │
//! │  ├─ storage ──── 输出/图片目录创建                        │
//! │  └─ gallery ──── 每记录一任务 + 汇合屏障 + 页面生成       │
//! │       ├─ builder   PNG 落盘（image crate）                │
//! │       └─ page      index.html 生成与转义                  │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓
//!   img/<N>.png × 记录数  +  index.html
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，构建链路的返回类型 |
//! | [`dataset`] | TSV 数据集逐行读取与记录解析 |
//! | [`artwork`] | 载荷解码、颜色解析、栅格渲染（每记录纯同步） |
//! | [`storage`] | 输出目录与图片子目录的获取与自动创建 |
//! | [`gallery`] | 记录任务调度、PNG 写出、画廊页面生成 |

pub mod artwork;
pub mod dataset;
pub mod error;
pub mod gallery;
pub mod storage;
