//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义入口层统一的 `AppError` 枚举，`main` 只与它打交道。
//! 流水线内部错误通过 `From` 上转，标准输出写入失败等 I/O 错误同样归入此处。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `BlueNoiseError` 提供 `From` 转换，无需手动 map。
//! - `exit_code` 集中决定进程退出码。

use std::process::ExitCode;

use crate::noise_table::BlueNoiseError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 下载 / 解码 / 格式化 / 回写链路错误
    #[error("{0}")]
    Noise(#[from] BlueNoiseError),

    /// 标准输出等 I/O 错误
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// 所有失败均以 1 退出；命令行用法错误由 clap 以 2 退出。
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Noise(_) | Self::Io(_) => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}
