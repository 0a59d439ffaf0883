//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“外部输入类型”和“流水线中间结果”解耦：
//! - `NoiseSource` 表示外部来源语义
//! - `RawNoiseData` 表示已加载但未解码的字节
//! - `NoiseTable` 表示长度已校验的 64x64 灰度像素序列

use super::BlueNoiseError;

/// 表格边长（像素）。
pub const TABLE_SIDE: usize = 64;

/// 表格像素总数，`TABLE_SIDE * TABLE_SIDE`。
pub const TABLE_LEN: usize = TABLE_SIDE * TABLE_SIDE;

/// 图片输入来源。
#[derive(Debug, Clone)]
pub enum NoiseSource {
    /// 网络地址来源。
    Url(String),
    /// 本地文件路径来源。
    FilePath(String),
}

/// 加载阶段输出：原始字节与来源标识。
pub(crate) struct RawNoiseData {
    /// 原始图片字节。
    pub(crate) bytes: Vec<u8>,
    /// 来源提示（用于日志与诊断）。
    pub(crate) source_hint: &'static str,
}

/// 按行优先排列的 4096 个灰度值。
///
/// 只能通过 [`NoiseTable::new`] 构造，长度不为 4096 时返回 `ShapeMismatch`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseTable {
    pixels: Vec<u8>,
}

impl NoiseTable {
    pub fn new(pixels: Vec<u8>) -> Result<Self, BlueNoiseError> {
        if pixels.len() != TABLE_LEN {
            return Err(BlueNoiseError::ShapeMismatch {
                expected: TABLE_LEN,
                actual: pixels.len(),
            });
        }

        Ok(Self { pixels })
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// 第 `row` 行的 64 个像素。
    pub fn row(&self, row: usize) -> &[u8] {
        &self.pixels[row * TABLE_SIDE..(row + 1) * TABLE_SIDE]
    }
}
