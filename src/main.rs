//! # 蓝噪声表生成工具 — 应用入口
//!
//! 本文件仅负责日志初始化、参数解析与退出码映射。
//! 诊断信息全部写入 stderr，stdout 只输出数组文本。

use std::process::ExitCode;

use blue_noise_table::cli::{self, Args};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match cli::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("❌ {err}");
            err.exit_code()
        }
    }
}
