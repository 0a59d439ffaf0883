//! # 回写模块
//!
//! ## 设计思路
//!
//! 在目标源码中定位“以固定标记开头的头部注释 + 定长数组声明（直到 `};`）”这一段，
//! 整段替换为新生成的文本，前后内容保持不变。
//! 该定位方式依赖注释措辞与声明语法，属于已知限制。
//!
//! ## 实现思路
//!
//! - 标记行与声明之间只允许注释行，匹配范围不会越过其他代码或其他数组。
//! - 声明允许任意顺序的 `static` / `inline` 限定符序列；未显式指定限定符时原样沿用，
//!   保证重复执行结果一致。
//! - 本模块只做字符串变换，文件读写由 `handler` 负责。

use regex::Regex;
use std::path::Path;

use super::config::Qualifier;
use super::formatter::{HEADER_MARKER, format_table};
use super::source::NoiseTable;
use super::{BlueNoiseError, NoiseTableConfig};

/// 构造定位指定数组名的正则。
fn array_pattern(name: &str) -> Result<Regex, BlueNoiseError> {
    let pattern = format!(
        r"{marker}[^\n]*\n(?:[ \t]*//[^\n]*\n)*[ \t]*(?P<qualifier>(?:(?:static|inline)\s+)*)const\s+unsigned\s+char\s+{name}\s*\[\s*64\s*\*\s*64\s*\]\s*=\s*\{{[^}}]+\}}\s*;",
        marker = regex::escape(HEADER_MARKER),
        name = regex::escape(name),
    );

    Regex::new(&pattern)
        .map_err(|e| BlueNoiseError::InvalidFormat(format!("数组定位正则构造失败：{}", e)))
}

/// 用新表替换 `content` 中已有的数组，返回替换后的完整文本。
///
/// 未找到时返回 `PatternNotFound`，调用方不得写回任何内容。
pub fn patch_source(
    content: &str,
    table: &NoiseTable,
    config: &NoiseTableConfig,
    target: &Path,
) -> Result<String, BlueNoiseError> {
    let pattern = array_pattern(&config.array_name)?;

    let caps = pattern
        .captures(content)
        .ok_or_else(|| BlueNoiseError::PatternNotFound {
            target: target.to_path_buf(),
        })?;

    let Some(span) = caps.get(0) else {
        return Err(BlueNoiseError::PatternNotFound {
            target: target.to_path_buf(),
        });
    };

    let mut existing = Vec::new();
    if let Some(run) = caps.name("qualifier") {
        for word in run.as_str().split_whitespace() {
            existing.push(Qualifier::from_str(word)?);
        }
    }
    if existing.is_empty() {
        existing.push(Qualifier::default());
    }
    let decl = config.decl(&existing);

    log::debug!(
        "🔎 命中已有数组 - 偏移: {}..{} 限定符: {}",
        span.start(),
        span.end(),
        decl.qualifier_prefix()
    );

    let replacement = format_table(table, &decl);

    let mut patched = String::with_capacity(content.len() - span.len() + replacement.len());
    patched.push_str(&content[..span.start()]);
    patched.push_str(&replacement);
    patched.push_str(&content[span.end()..]);

    Ok(patched)
}
