//! # 解码与变换流水线模块
//!
//! ## 设计思路
//!
//! 将“字节 → 图像 → 单通道灰度 → 4096 字节”的过程集中管理。
//! 尺寸不是 64x64 时只告警并做最近邻缩放，这是整条链路唯一的非致命偏差。
//!
//! ## 实现思路
//!
//! 1. 猜测格式，无法识别或当前构建不支持时返回 `DecoderUnavailable`
//! 2. 完整解码并转换为 8 位灰度（16 位源会在此处降位）
//! 3. 尺寸不符时最近邻缩放到 64x64
//! 4. 通过 `NoiseTable::new` 校验像素总数

use fast_image_resize as fr;
use image::error::ImageError;
use image::{GrayImage, ImageBuffer, Luma};

use super::source::{NoiseTable, RawNoiseData, TABLE_SIDE};
use super::{BlueNoiseError, NoiseTableGenerator};

const SIDE: u32 = TABLE_SIDE as u32;

/// 尺寸不是 64x64 时返回需要输出的告警文本。
pub(crate) fn size_mismatch_warning(width: u32, height: u32) -> Option<String> {
    if (width, height) == (SIDE, SIDE) {
        return None;
    }
    Some(format!(
        "⚠️ 纹理尺寸为 {}x{}，期望 {}x{}，按最近邻缩放",
        width, height, SIDE, SIDE
    ))
}

impl NoiseTableGenerator {
    /// 将原始字节解码为长度已校验的灰度表。
    pub(crate) fn decode_to_table(&self, raw: RawNoiseData) -> Result<NoiseTable, BlueNoiseError> {
        let format = image::guess_format(&raw.bytes)
            .map_err(|e| BlueNoiseError::DecoderUnavailable(format!("无法识别图片格式：{}", e)))?;

        let decoded = image::load_from_memory_with_format(&raw.bytes, format).map_err(|e| match e {
            ImageError::Unsupported(inner) => {
                BlueNoiseError::DecoderUnavailable(format!("{:?} 解码失败：{}", format, inner))
            }
            other => BlueNoiseError::Decode(format!("图片解码失败：{}", other)),
        })?;

        let gray = decoded.to_luma8();
        let (width, height) = gray.dimensions();

        let gray = match size_mismatch_warning(width, height) {
            Some(warning) => {
                log::warn!("{}", warning);
                Self::resize_nearest(gray)?
            }
            None => gray,
        };

        let table = NoiseTable::new(gray.into_raw())?;

        log::info!(
            "✅ 纹理解码成功 - 来源: {} 格式: {:?} 原始尺寸: {}x{}",
            raw.source_hint,
            format,
            width,
            height
        );

        Ok(table)
    }

    /// 最近邻缩放到 64x64，不引入新的灰度值。
    fn resize_nearest(gray: GrayImage) -> Result<GrayImage, BlueNoiseError> {
        let (width, height) = gray.dimensions();
        log::info!("🧩 最近邻缩放：{}x{} -> {}x{}", width, height, SIDE, SIDE);

        match Self::resize_with_fast_image_resize(&gray) {
            Ok(resized) => Ok(resized),
            Err(err) => {
                log::warn!(
                    "⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}",
                    err
                );
                Ok(image::imageops::resize(
                    &gray,
                    SIDE,
                    SIDE,
                    image::imageops::FilterType::Nearest,
                ))
            }
        }
    }

    fn resize_with_fast_image_resize(gray: &GrayImage) -> Result<GrayImage, BlueNoiseError> {
        let (src_width, src_height) = gray.dimensions();

        let src_image = fr::images::Image::from_vec_u8(
            src_width,
            src_height,
            gray.as_raw().clone(),
            fr::PixelType::U8,
        )
        .map_err(|e| BlueNoiseError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(SIDE, SIDE, fr::PixelType::U8);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Nearest);

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| BlueNoiseError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

        ImageBuffer::<Luma<u8>, Vec<u8>>::from_raw(SIDE, SIDE, dst_image.into_vec())
            .ok_or_else(|| BlueNoiseError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
    }
}
