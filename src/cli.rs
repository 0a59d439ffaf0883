//! 命令行入口：参数定义与“参数 → 配置 → 流水线”的薄封装。

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use crate::error::AppError;
use crate::noise_table::{NoiseSource, NoiseTableConfig, NoiseTableGenerator};

/// 下载 64x64 蓝噪声纹理并生成 DesktopLUT 使用的 C++ 数组。
#[derive(Parser, Debug)]
#[command(name = "blue-noise-table", version)]
pub struct Args {
    /// 原地更新 FILE 中已有的数组，而不是打印到标准输出
    #[arg(long, value_name = "FILE")]
    pub update: Option<PathBuf>,

    /// 替换默认下载地址（任何内容相同的镜像均可）
    #[arg(long, value_name = "URL", conflicts_with = "input")]
    pub url: Option<String>,

    /// 解码本地 PNG，不访问网络
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// 数组符号名
    #[arg(long, value_name = "IDENT")]
    pub name: Option<String>,

    /// 存储限定符：static | inline（回写模式默认沿用原有限定符）
    #[arg(long, value_name = "QUALIFIER")]
    pub qualifier: Option<String>,
}

impl Args {
    /// 将命令行参数叠加到默认配置上。
    pub fn to_config(&self) -> Result<NoiseTableConfig, AppError> {
        let mut config = NoiseTableConfig::default();

        if let Some(url) = &self.url {
            config.set_url(url)?;
        }
        if let Some(name) = &self.name {
            config.set_array_name(name)?;
        }
        if let Some(qualifier) = &self.qualifier {
            config.set_qualifier(qualifier)?;
        }

        Ok(config)
    }

    pub fn source(&self, config: &NoiseTableConfig) -> NoiseSource {
        match &self.input {
            Some(path) => NoiseSource::FilePath(path.to_string_lossy().into_owned()),
            None => NoiseSource::Url(config.url.clone()),
        }
    }
}

/// 执行完整流程；打印模式写入 `out`。
pub async fn run_with_output<W: Write>(args: Args, out: &mut W) -> Result<(), AppError> {
    let config = args.to_config()?;
    let source = args.source(&config);
    let generator = NoiseTableGenerator::new(config)?;

    let table = generator.generate(source).await?;

    match &args.update {
        Some(path) => generator.update_file(&table, path)?,
        None => {
            writeln!(out, "{}", generator.render(&table))?;
            out.flush()?;
        }
    }

    Ok(())
}

pub async fn run(args: Args) -> Result<(), AppError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_output(args, &mut out).await
}
