//! # 蓝噪声表生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs ── env_logger 初始化 + 退出码                    │
//! │     ↓                                                    │
//! │  cli ────── clap 参数 → NoiseTableConfig                 │
//! │     ↓                                                    │
//! │  noise_table                                             │
//! │   ├─ loader      下载 / 读取 + 签名·体积校验              │
//! │   ├─ pipeline    解码 · 灰度 · 最近邻缩放                 │
//! │   ├─ formatter   C++ 数组文本                            │
//! │   └─ patcher     定位并替换已有数组                       │
//! │     ↓                                                    │
//! │  stdout（打印模式） / 目标文件（回写模式）                 │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 入口层统一错误类型 `AppError` 与退出码 |
//! | [`cli`] | 命令行参数定义与流程入口 |
//! | [`noise_table`] | 蓝噪声纹理的加载、解码、格式化与回写 |

pub mod cli;
pub mod error;
pub mod noise_table;
