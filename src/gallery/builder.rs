//! # 构建编排模块
//!
//! ## 设计思路
//!
//! 画廊构建链路固定为：
//! 1. 载入数据集记录
//! 2. 确保输出目录存在
//! 3. 每条记录派生一个独立任务（解码 → 渲染 → 写 PNG）
//! 4. 汇合全部任务后生成并写出页面
//!
//! 记录之间不共享任何可变状态，任务并行互不干扰；
//! 页面必须在全部图片任务落盘（或报告失败）之后生成，
//! 这是一个汇合屏障，而非流水线顺序。
//!
//! ## 实现思路
//!
//! - 任务句柄集中收集、按序 `await`，不依赖全局可变列表。
//! - 记录失败默认记日志后跳过，`halt_on_record_failure` 开启时立即中止。
//! - 全部记录失败时构建整体失败，避免发布空页面。
//! - 记录 `decode/raster/write` 阶段耗时，便于性能诊断。

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use image::{ImageFormat, RgbaImage};

use crate::artwork::{self, ArtworkRecord, RasterImage};
use crate::dataset;
use crate::error::AppError;
use crate::storage;

use super::page::{self, GalleryEntry};
use super::GalleryConfig;

/// 构建结果摘要。
#[derive(Debug)]
pub struct GallerySummary {
    /// 成功渲染并进入页面的记录数。
    pub rendered: usize,
    /// 失败并被跳过的记录数。
    pub failed: usize,
    /// 生成的页面路径。
    pub page_path: PathBuf,
}

/// 构建主入口：读取数据集，渲染全部画稿，生成画廊页面。
pub async fn build(config: &GalleryConfig) -> Result<GallerySummary, AppError> {
    let total_start = Instant::now();

    let records = dataset::load_records(&config.dataset_path)?;
    if records.is_empty() {
        return Err(AppError::Gallery("数据集不含任何记录".to_string()));
    }

    let image_dir = storage::ensure_image_dir(config)?;

    let mut handles = Vec::with_capacity(records.len());
    for record in records {
        let image_path = image_dir.join(format!("{}.png", record.index));
        let image_href = format!("{}/{}.png", config.image_dir_name, record.index);
        handles.push(tokio::spawn(async move {
            let index = record.index;
            let title = record.title.clone();
            (index, title, render_record(record, image_path, image_href))
        }));
    }

    // 汇合屏障：所有图片任务完成（成功或失败）后才生成页面
    let mut entries = Vec::new();
    let mut failed = 0;
    for handle in handles {
        let (index, title, outcome) = handle
            .await
            .map_err(|e| AppError::Gallery(format!("渲染任务异常退出: {}", e)))?;

        match outcome {
            Ok(entry) => entries.push(entry),
            Err(err) => {
                if config.halt_on_record_failure {
                    log::error!("❌ 记录 #{}（{}）处理失败，构建中止: {}", index, title, err);
                    return Err(err);
                }
                failed += 1;
                log::warn!("⚠️ 记录 #{}（{}）处理失败，已跳过: {}", index, title, err);
            }
        }
    }

    if entries.is_empty() {
        return Err(AppError::Gallery(format!("全部 {} 条记录处理失败", failed)));
    }

    let page_path = config.output_dir.join("index.html");
    fs::write(&page_path, page::render(&entries))?;

    log::info!(
        "✅ 画廊构建完成 - rendered={} failed={} total={}ms",
        entries.len(),
        failed,
        total_start.elapsed().as_millis()
    );

    Ok(GallerySummary {
        rendered: entries.len(),
        failed,
        page_path,
    })
}

/// 处理单条记录：解码、渲染、写出 PNG。
///
/// 链路内全部为同步计算与本地落盘，失败即中止该记录并上抛。
fn render_record(
    record: ArtworkRecord,
    image_path: PathBuf,
    image_href: String,
) -> Result<GalleryEntry, AppError> {
    let decode_start = Instant::now();
    let document = artwork::decode_artwork(&record.encoded)?;
    let decode_elapsed = decode_start.elapsed();

    let raster_start = Instant::now();
    let raster = artwork::rasterize(&document)?;
    let raster_elapsed = raster_start.elapsed();

    let write_start = Instant::now();
    write_png(raster, &image_path)?;
    let write_elapsed = write_start.elapsed();

    log::info!(
        "🖼️ 已写入图片: {} => {} (decode={}ms raster={}ms write={}ms)",
        record.title,
        image_path.display(),
        decode_elapsed.as_millis(),
        raster_elapsed.as_millis(),
        write_elapsed.as_millis()
    );

    Ok(GalleryEntry {
        title: record.title,
        encoded: record.encoded,
        image_href,
    })
}

/// 将渲染输出编码为 PNG 文件。
fn write_png(image: RasterImage, path: &Path) -> Result<(), AppError> {
    let buffer = RgbaImage::from_raw(image.width, image.height, image.bytes)
        .ok_or_else(|| AppError::Gallery("创建图像缓冲区失败".to_string()))?;

    buffer
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| AppError::Gallery(format!("保存图片 '{}' 失败: {}", path.display(), e)))
}
