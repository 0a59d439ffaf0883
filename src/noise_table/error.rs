//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载“下载 → 解码 → 格式化 → 回写”链路中的所有错误来源。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧（以及测试）可按分支匹配。

use std::path::PathBuf;

/// 蓝噪声表生成链路的统一错误类型。
///
/// 除尺寸不一致（自动最近邻缩放）外，所有分支都是致命错误。
#[derive(Debug, thiserror::Error)]
pub enum BlueNoiseError {
    #[error("网络错误：{0}")]
    Network(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    /// 当前构建不具备该图片格式的解码能力。
    #[error("解码器不可用：{0}")]
    DecoderUnavailable(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("像素数量不符：期望 {expected}，实际 {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("未在 {} 中找到已有的蓝噪声数组", target.display())]
    PatternNotFound { target: PathBuf },

    #[error("文件错误：{0}")]
    FileSystem(String),
}
