//! # 蓝噪声表模块（noise_table）
//!
//! ## 设计思路
//!
//! 该模块将“下载 → 解码 → 格式化 → 打印/回写”按职责拆分为多个子模块。
//!
//! - `handler`：编排整条处理流水线
//! - `loader`：负责 URL/文件加载与签名、体积校验
//! - `pipeline`：负责解码、灰度转换、最近邻缩放
//! - `formatter`：负责生成 C++ 数组文本
//! - `patcher`：负责在已有源码中定位并替换数组
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 调用链
//!
//! ```text
//! cli::run（参数 → 配置）
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（来源加载 + 签名/体积校验）
//!    ├─ pipeline.rs（解码 + 灰度 + 缩放 + 4096 校验）
//!    └─ formatter.rs / patcher.rs（打印 或 回写）
//!    ↓
//! 返回 BlueNoiseError 给入口
//! ```

mod config;
mod error;
mod formatter;
mod handler;
mod loader;
mod patcher;
mod pipeline;
mod source;

pub use config::{DEFAULT_ARRAY_NAME, DEFAULT_SOURCE_URL, NoiseTableConfig, Qualifier};
pub use error::BlueNoiseError;
pub use formatter::{ArrayDecl, HEADER_MARKER, format_table};
pub use handler::NoiseTableGenerator;
pub use patcher::patch_source;
pub use source::{NoiseSource, NoiseTable, TABLE_LEN, TABLE_SIDE};
