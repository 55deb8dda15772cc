//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有"可调策略"集中到 `GalleryConfig`，保证构建行为可观测、可调整、可测试。
//! 路径默认值与原始数据布局保持一致：数据集在当前目录，图片写入 `img/` 子目录。
//!
//! ## 实现思路
//!
//! - `Default` 提供生产可用配置。
//! - `from_args` 解析命令行：两个可选位置参数（数据集路径、输出目录）
//!   与一个失败策略开关；未知开关直接报错，不做猜测。

use std::path::PathBuf;

use crate::error::AppError;

/// 画廊构建配置。
///
/// 字段覆盖输入数据集、输出位置与记录失败策略。
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// TSV 数据集路径（每行 `标题 \t Base64载荷`）。
    pub dataset_path: PathBuf,
    /// 输出根目录，`index.html` 写入此处。
    pub output_dir: PathBuf,
    /// 图片子目录名，PNG 以 `<索引>.png` 写入其中。
    pub image_dir_name: String,
    /// 单条记录失败时是否中止整个构建。
    ///
    /// 关闭（默认）时失败记录被记录日志并跳过，其余记录照常发布。
    pub halt_on_record_failure: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("ansi-pixels.tsv"),
            output_dir: PathBuf::from("."),
            image_dir_name: "img".to_string(),
            halt_on_record_failure: false,
        }
    }
}

impl GalleryConfig {
    /// 从命令行参数构建配置。
    ///
    /// 用法：`ansi-pixel-gallery [数据集路径] [输出目录] [--halt-on-failure]`
    pub fn from_args(args: impl Iterator<Item = String>) -> Result<Self, AppError> {
        let mut config = Self::default();
        let mut positional = 0;

        for arg in args {
            match arg.as_str() {
                "--halt-on-failure" => config.halt_on_record_failure = true,
                flag if flag.starts_with("--") => {
                    return Err(AppError::Gallery(format!("未知命令行开关：{}", flag)));
                }
                path => {
                    match positional {
                        0 => config.dataset_path = PathBuf::from(path),
                        1 => config.output_dir = PathBuf::from(path),
                        _ => {
                            return Err(AppError::Gallery(format!(
                                "多余的位置参数：{}",
                                path
                            )));
                        }
                    }
                    positional += 1;
                }
            }
        }

        Ok(config)
    }
}
