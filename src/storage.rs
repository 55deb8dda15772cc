//! 输出目录管理模块
//!
//! # 设计思路
//!
//! 统一管理画廊输出路径：输出根目录与其下的图片子目录。
//! 目录不存在时自动创建，避免上层判断。
//!
//! # 实现思路
//!
//! - 目录不存在时自动 `create_dir_all`。
//! - 所有可能失败的操作均返回 `Result`，不使用 `expect()` / `unwrap()`。

use std::fs;
use std::path::PathBuf;

use crate::error::AppError;
use crate::gallery::GalleryConfig;

/// 确保输出目录与图片子目录存在。
///
/// # 参数
/// * `config` - 画廊配置（输出根目录与图片子目录名）
///
/// # 返回
/// - `Ok(PathBuf)` — 可写的图片目录
/// - `Err(AppError::Storage)` — 无法创建目录
pub fn ensure_image_dir(config: &GalleryConfig) -> Result<PathBuf, AppError> {
    let image_dir = config.output_dir.join(&config.image_dir_name);

    if !image_dir.exists() {
        fs::create_dir_all(&image_dir).map_err(|e| {
            AppError::Storage(format!("创建图片目录 '{}' 失败: {}", image_dir.display(), e))
        })?;
    }

    Ok(image_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock error")
            .as_nanos();
        std::env::temp_dir().join(format!("ansi-pixel-gallery-storage-{nanos}"))
    }

    #[test]
    fn ensure_image_dir_creates_nested_directories() {
        let root = unique_temp_dir();
        let config = GalleryConfig {
            output_dir: root.clone(),
            ..GalleryConfig::default()
        };

        let image_dir = ensure_image_dir(&config).expect("image dir should be created");

        assert!(image_dir.is_dir());
        assert_eq!(image_dir, root.join("img"));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn ensure_image_dir_is_idempotent() {
        let root = unique_temp_dir();
        let config = GalleryConfig {
            output_dir: root.clone(),
            ..GalleryConfig::default()
        };

        ensure_image_dir(&config).expect("first create");
        ensure_image_dir(&config).expect("second create must not fail");

        let _ = fs::remove_dir_all(root);
    }
}
