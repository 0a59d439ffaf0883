//! # 格式化模块
//!
//! 将 `NoiseTable` 输出为可直接嵌入 C++ 源码的数组字面量。
//! 每行 16 个值、右对齐 3 位；除最后一行外均以逗号结尾。数值原样透传。

use super::config::{DEFAULT_ARRAY_NAME, Qualifier};
use super::source::{NoiseTable, TABLE_SIDE};

/// 头部注释首行，同时是回写模式定位已有数组的标记。
pub const HEADER_MARKER: &str = "// 64x64 blue noise texture data";

const HEADER_LINES: [&str; 3] = [
    "// 64x64 blue noise texture data (single channel, 8-bit)",
    "// Source: momentsingraphics.de (Christoph Peters) - CC0 Public Domain",
    "// Downloaded from free-blue-noise-textures repository",
];

const VALUES_PER_LINE: usize = 16;

/// 数组声明参数。
///
/// `qualifiers` 按原顺序输出，例如 `[Static, Inline]` 对应 `static inline const`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayDecl {
    pub name: String,
    pub qualifiers: Vec<Qualifier>,
}

impl Default for ArrayDecl {
    fn default() -> Self {
        Self {
            name: DEFAULT_ARRAY_NAME.to_string(),
            qualifiers: vec![Qualifier::default()],
        }
    }
}

impl ArrayDecl {
    /// 限定符前缀，如 `"static inline"`。
    pub fn qualifier_prefix(&self) -> String {
        self.qualifiers
            .iter()
            .map(|q| q.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// 生成完整的数组文本（不含末尾换行）。
///
/// # 示例
/// ```rust
/// use blue_noise_table::noise_table::{format_table, ArrayDecl, NoiseTable};
///
/// let table = NoiseTable::new(vec![0; 4096])?;
/// let text = format_table(&table, &ArrayDecl::default());
/// assert!(text.ends_with("};"));
/// # Ok::<(), blue_noise_table::noise_table::BlueNoiseError>(())
/// ```
pub fn format_table(table: &NoiseTable, decl: &ArrayDecl) -> String {
    let chunks_per_row = TABLE_SIDE / VALUES_PER_LINE;
    let mut lines: Vec<String> = Vec::with_capacity(HEADER_LINES.len() + 2 + TABLE_SIDE * chunks_per_row);

    lines.extend(HEADER_LINES.iter().map(|line| line.to_string()));
    let prefix = decl.qualifier_prefix();
    if prefix.is_empty() {
        lines.push(format!("const unsigned char {}[64 * 64] = {{", decl.name));
    } else {
        lines.push(format!("{} const unsigned char {}[64 * 64] = {{", prefix, decl.name));
    }

    for row in 0..TABLE_SIDE {
        for (chunk_idx, chunk) in table.row(row).chunks(VALUES_PER_LINE).enumerate() {
            let formatted = chunk
                .iter()
                .map(|v| format!("{:3}", v))
                .collect::<Vec<_>>()
                .join(",");

            let is_last = row == TABLE_SIDE - 1 && chunk_idx == chunks_per_row - 1;
            if is_last {
                lines.push(format!("    {}", formatted));
            } else {
                lines.push(format!("    {},", formatted));
            }
        }
    }

    lines.push("};".to_string());
    lines.join("\n")
}
