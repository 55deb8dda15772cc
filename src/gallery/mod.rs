//! # 画廊构建模块（gallery）
//!
//! ## 设计思路
//!
//! 该模块将"配置 → 记录调度 → 页面生成"按职责拆分：
//!
//! - `config`：路径与失败策略配置
//! - `builder`：记录任务调度、PNG 落盘与汇合屏障
//! - `page`：`index.html` 生成与 HTML 转义
//!
//! ## 调用链
//!
//! ```text
//! main.rs
//!    ↓
//! builder.rs（载入数据集 → 每记录一个任务 → 汇合）
//!    ├─ artwork（解码 + 渲染，见该模块文档）
//!    └─ page.rs（条目 → index.html）
//! ```

mod builder;
mod config;
pub mod page;

pub use builder::{build, GallerySummary};
pub use config::GalleryConfig;
