//! # 颜色解析模块
//!
//! ## 设计思路
//!
//! ANSI 颜色码空间 [0, 255] 划分为三个互不相交的子空间，各自独立解析：
//! - 0..=15：固定 16 色表（标准 ANSI 颜色，普通色分量 0/204，亮色 0/102/255）
//! - 16..=231：6×6×6 RGB 立方体，`code - 16` 按三位六进制数拆成 R/G/B 索引
//! - 232..=255：灰度梯度
//!
//! 灰度梯度的通道值落在 0~100 而非 0~255，这是被解码格式的既有行为，
//! 保持逐比特兼容，不做"修正"。
//!
//! ## 实现思路
//!
//! 纯函数，无状态，同一输入恒返回同一颜色。`null` 码映射为全透明，
//! 范围外的码返回 `InvalidColorCode`，绝不静默替换默认色。

use super::source::Rgba;
use super::ArtworkError;

/// 标准 ANSI 16 色表。0..=7 为普通色，8..=15 为亮色。
const ANSI16_TABLE: [Rgba; 16] = [
    Rgba::opaque(0, 0, 0),
    Rgba::opaque(204, 0, 0),
    Rgba::opaque(0, 204, 0),
    Rgba::opaque(204, 204, 0),
    Rgba::opaque(0, 0, 204),
    Rgba::opaque(204, 0, 204),
    Rgba::opaque(0, 204, 204),
    Rgba::opaque(204, 204, 204),
    Rgba::opaque(102, 102, 102),
    Rgba::opaque(255, 102, 102),
    Rgba::opaque(102, 255, 102),
    Rgba::opaque(255, 255, 102),
    Rgba::opaque(102, 102, 255),
    Rgba::opaque(255, 102, 255),
    Rgba::opaque(102, 255, 255),
    Rgba::opaque(255, 255, 255),
];

/// RGB 立方体单步通道增量（`255 / 5`，向下取整为 51）。
const RGB_CUBE_STEP: i64 = 255 / 5;

/// 灰度梯度的输出上限与码点跨度（`100 / (255 - 232)`）。
const GRAY_SPAN: f64 = 100.0 / 23.0;

/// 将一个颜色码（或 `None`）解析为 RGBA。
///
/// # 返回
/// - `Ok(Rgba::TRANSPARENT)` — 码缺失（透明像素，保留背景）
/// - `Ok(color)` — 码落在三个子空间之一
/// - `Err(InvalidColorCode)` — 码超出 [0, 255]
pub fn resolve(code: Option<i64>) -> Result<Rgba, ArtworkError> {
    let Some(code) = code else {
        return Ok(Rgba::TRANSPARENT);
    };

    match code {
        0..=15 => Ok(ANSI16_TABLE[code as usize]),
        16..=231 => Ok(resolve_cube(code)),
        232..=255 => Ok(resolve_gray(code)),
        out_of_range => Err(ArtworkError::InvalidColorCode(format!(
            "{} 超出 0~255 范围",
            out_of_range
        ))),
    }
}

/// 6×6×6 立方体：`code - 16` 视为三位六进制数，高位到低位依次是 R/G/B。
fn resolve_cube(code: i64) -> Rgba {
    let base = code - 16;
    let green_blue = base % 36;

    let red = (base / 36) * RGB_CUBE_STEP;
    let green = (green_blue / 6) * RGB_CUBE_STEP;
    let blue = (green_blue % 6) * RGB_CUBE_STEP;

    Rgba::opaque(red as u8, green as u8, blue as u8)
}

/// 灰度梯度：`round((code - 232) * 100/23)`，三通道同值。
fn resolve_gray(code: i64) -> Rgba {
    let gray = ((code - 232) as f64 * GRAY_SPAN).round() as u8;
    Rgba::opaque(gray, gray, gray)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn resolve_absent_code_is_fully_transparent() {
        assert_eq!(resolve(None).expect("absent code must resolve"), Rgba::TRANSPARENT);
    }

    #[test]
    fn resolve_palette_codes_match_ansi16_table() {
        assert_eq!(resolve(Some(0)).expect("code 0"), Rgba::opaque(0, 0, 0));
        assert_eq!(resolve(Some(1)).expect("code 1"), Rgba::opaque(204, 0, 0));
        assert_eq!(resolve(Some(9)).expect("code 9"), Rgba::opaque(255, 102, 102));
        assert_eq!(resolve(Some(15)).expect("code 15"), Rgba::opaque(255, 255, 255));
    }

    #[test]
    fn resolve_cube_corners_match_channel_steps() {
        assert_eq!(resolve(Some(16)).expect("code 16"), Rgba::opaque(0, 0, 0));
        // (21 - 16) mod 6 = 5 → blue = 5 * 51 = 255
        assert_eq!(resolve(Some(21)).expect("code 21"), Rgba::opaque(0, 0, 255));
        assert_eq!(resolve(Some(196)).expect("code 196"), Rgba::opaque(255, 0, 0));
        assert_eq!(resolve(Some(231)).expect("code 231"), Rgba::opaque(255, 255, 255));
    }

    #[test]
    fn resolve_gray_ramp_spans_zero_to_one_hundred() {
        assert_eq!(resolve(Some(232)).expect("code 232"), Rgba::opaque(0, 0, 0));
        assert_eq!(resolve(Some(255)).expect("code 255"), Rgba::opaque(100, 100, 100));
    }

    #[test]
    fn resolve_rejects_out_of_range_codes() {
        assert!(matches!(resolve(Some(256)), Err(ArtworkError::InvalidColorCode(_))));
        assert!(matches!(resolve(Some(-1)), Err(ArtworkError::InvalidColorCode(_))));
        assert!(matches!(resolve(Some(i64::MAX)), Err(ArtworkError::InvalidColorCode(_))));
    }

    proptest! {
        #[test]
        fn cube_blue_channel_follows_base6_low_digit(code in 16_i64..=231) {
            let color = resolve(Some(code)).expect("cube code must resolve");
            prop_assert_eq!(color.blue as i64, ((code - 16) % 6) * 51);
            prop_assert_eq!(color.alpha, 255);
        }

        #[test]
        fn gray_channels_are_equal_and_dim(code in 232_i64..=255) {
            let color = resolve(Some(code)).expect("gray code must resolve");
            prop_assert_eq!(color.red, color.green);
            prop_assert_eq!(color.green, color.blue);
            prop_assert!(color.red <= 100);
        }

        #[test]
        fn resolve_is_deterministic(code in 0_i64..=255) {
            prop_assert_eq!(
                resolve(Some(code)).expect("valid code"),
                resolve(Some(code)).expect("valid code")
            );
        }
    }
}
