//! # 画稿解码模块
//!
//! ## 设计思路
//!
//! 把"文本载荷 → 逻辑像素网格"的链路集中管理，按阶段尽早失败：
//! 1. Base64 变体解码（字母表替换 `-`→`+`、`_`→`/`）
//! 2. zlib 解压（带解压体积上限）
//! 3. JSON 反序列化为显式结构（字段缺失即失败，不做动态探测）
//! 4. 结构校验（网格矩形、`pixelSize` 为正）
//!
//! 该解码器是外部编码器的精确逆运算，属于格式兼容边界，
//! 任何阶段的损坏都是硬失败，不做尽力恢复。
//!
//! ## 实现思路
//!
//! - 载荷经 URL 片段传输，常见缺失补齐符，解码引擎对 padding 采取宽容模式。
//! - 解压读取经 `take` 限流，超限返回 `ResourceLimit`，防解压炸弹。
//! - 每个阶段映射到独立错误变体，调用方可按阶段定位损坏位置。

use std::io::Read;

use base64::Engine as _;
use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use flate2::read::ZlibDecoder;

use super::source::ArtworkDocument;
use super::ArtworkError;

/// 解压输出上限（字节）。合法画稿远小于此值。
const MAX_INFLATED_BYTES: u64 = 64 * 1024 * 1024;

/// 标准字母表 + padding 宽容模式的解码引擎。
///
/// 载荷在 URL 片段中传输时常被去掉 `=` 补齐符，严格引擎会拒绝。
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// 将编码载荷解码为画稿文档。
///
/// # 返回
/// - `Ok(ArtworkDocument)` — 结构合法的逻辑像素网格
/// - `Err(Encoding)` — 替换字母表后仍不是合法 Base64
/// - `Err(Decompression)` — 压缩流损坏或被截断
/// - `Err(MalformedDocument)` — 文档结构不符合 `{ pixels, pixelSize }`
/// - `Err(ResourceLimit)` — 解压输出超过上限
pub fn decode_artwork(encoded: &str) -> Result<ArtworkDocument, ArtworkError> {
    let compressed = decode_payload_base64(encoded)?;
    let json = inflate_with_limit(&compressed)?;

    let document: ArtworkDocument = serde_json::from_slice(&json)
        .map_err(|e| ArtworkError::MalformedDocument(format!("JSON 解析失败：{}", e)))?;

    validate_document(&document)?;
    Ok(document)
}

/// 第 1 步：字母表替换后按标准 Base64 解码。
fn decode_payload_base64(encoded: &str) -> Result<Vec<u8>, ArtworkError> {
    let normalized = encoded.trim().replace('-', "+").replace('_', "/");

    PAYLOAD_ENGINE
        .decode(&normalized)
        .map_err(|e| ArtworkError::Encoding(format!("{}", e)))
}

/// 第 2 步：zlib 解压，输出限流。
fn inflate_with_limit(compressed: &[u8]) -> Result<Vec<u8>, ArtworkError> {
    let decoder = ZlibDecoder::new(compressed);
    let mut inflated = Vec::new();

    decoder
        .take(MAX_INFLATED_BYTES + 1)
        .read_to_end(&mut inflated)
        .map_err(|e| ArtworkError::Decompression(format!("{}", e)))?;

    if inflated.len() as u64 > MAX_INFLATED_BYTES {
        return Err(ArtworkError::ResourceLimit(format!(
            "解压输出超过上限：{} MB",
            MAX_INFLATED_BYTES / 1024 / 1024
        )));
    }

    Ok(inflated)
}

/// 第 3~4 步的结构校验：网格必须矩形、行不可为空、`pixelSize` 为正。
///
/// 零行的文档在此处合法（形状正确），由渲染器判定 `EmptyArtwork`。
fn validate_document(document: &ArtworkDocument) -> Result<(), ArtworkError> {
    if document.pixel_size == 0 {
        return Err(ArtworkError::MalformedDocument(
            "pixelSize 必须为正整数".to_string(),
        ));
    }

    let Some(first_row) = document.pixels.first() else {
        return Ok(());
    };

    if first_row.is_empty() {
        return Err(ArtworkError::MalformedDocument(
            "像素行不能为空（宽度必须 ≥ 1）".to_string(),
        ));
    }

    for (index, row) in document.pixels.iter().enumerate() {
        if row.len() != first_row.len() {
            return Err(ArtworkError::MalformedDocument(format!(
                "像素网格不矩形：第 {} 行长度 {}，首行长度 {}",
                index,
                row.len(),
                first_row.len()
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;
    use flate2::Compression;
    use flate2::write::ZlibEncoder;
    use std::io::Write;

    fn compress(json: &str) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(json.as_bytes()).expect("compress fixture");
        encoder.finish().expect("finish compression")
    }

    /// 模拟外部编码器：JSON → zlib 压缩 → Base64 → URL 安全字母表替换。
    fn encode_fixture(json: &str) -> String {
        encode_bytes(&compress(json))
    }

    fn encode_bytes(bytes: &[u8]) -> String {
        base64::engine::general_purpose::STANDARD
            .encode(bytes)
            .replace('+', "-")
            .replace('/', "_")
    }

    #[test]
    fn decode_round_trips_known_document() {
        let encoded = encode_fixture(r#"{"pixels":[[1,null],[208,232]],"pixelSize":8}"#);

        let document = decode_artwork(&encoded).expect("round trip must decode");

        assert_eq!(document.pixel_size, 8);
        assert_eq!(document.pixels, vec![vec![Some(1), None], vec![Some(208), Some(232)]]);
    }

    #[test]
    fn decode_accepts_unpadded_payload() {
        let encoded = encode_fixture(r#"{"pixels":[[0]],"pixelSize":1}"#);
        let unpadded = encoded.trim_end_matches('=').to_string();

        assert!(decode_artwork(&unpadded).is_ok());
    }

    #[test]
    fn decode_rejects_non_base64_text() {
        let result = decode_artwork("not base64 at all !!!");
        assert!(matches!(result, Err(ArtworkError::Encoding(_))));
    }

    #[test]
    fn decode_rejects_truncated_zlib_stream() {
        let compressed = compress(r#"{"pixels":[[1]],"pixelSize":2}"#);
        let truncated = encode_bytes(&compressed[..compressed.len() / 2]);

        let result = decode_artwork(&truncated);
        assert!(matches!(result, Err(ArtworkError::Decompression(_))));
    }

    #[test]
    fn decode_rejects_missing_fields() {
        let result = decode_artwork(&encode_fixture(r#"{"pixels":[[1]]}"#));
        assert!(matches!(result, Err(ArtworkError::MalformedDocument(_))));
    }

    #[test]
    fn decode_rejects_ragged_grid() {
        let result = decode_artwork(&encode_fixture(r#"{"pixels":[[1,2],[3]],"pixelSize":1}"#));
        assert!(matches!(result, Err(ArtworkError::MalformedDocument(_))));
    }

    #[test]
    fn decode_rejects_zero_pixel_size() {
        let result = decode_artwork(&encode_fixture(r#"{"pixels":[[1]],"pixelSize":0}"#));
        assert!(matches!(result, Err(ArtworkError::MalformedDocument(_))));
    }

    #[test]
    fn decode_rejects_empty_rows() {
        let result = decode_artwork(&encode_fixture(r#"{"pixels":[[],[]],"pixelSize":1}"#));
        assert!(matches!(result, Err(ArtworkError::MalformedDocument(_))));
    }

    #[test]
    fn decode_accepts_zero_row_grid() {
        let document = decode_artwork(&encode_fixture(r#"{"pixels":[],"pixelSize":3}"#))
            .expect("zero rows is a shape-valid document");
        assert!(document.pixels.is_empty());
    }
}
