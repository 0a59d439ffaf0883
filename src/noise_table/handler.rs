//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `NoiseTableGenerator` 只负责流程编排与配置管理，不关心命令行。
//! 处理链路固定为：
//! 1. 读取配置快照
//! 2. 按来源加载原始字节
//! 3. 解码为 64x64 灰度表
//! 4. 格式化后打印，或回写到目标文件
//!
//! ## 实现思路
//!
//! - 单次运行内使用“同一配置快照”。
//! - 记录 `load/decode/emit` 阶段耗时，便于诊断慢镜像。
//! - 回写模式在找不到数组时直接返回错误，目标文件保持不变。

use std::path::Path;
use std::time::Instant;

use super::config::Qualifier;
use super::formatter::format_table;
use super::patcher::patch_source;
use super::source::NoiseTable;
use super::{BlueNoiseError, NoiseSource, NoiseTableConfig};

/// 蓝噪声表生成器。
///
/// 封装了配置与复用的 HTTP 客户端，并编排各子模块实现完整流程。
pub struct NoiseTableGenerator {
    pub(super) config: NoiseTableConfig,
    pub(super) client: reqwest::Client,
}

impl NoiseTableGenerator {
    /// 根据配置创建生成器。
    ///
    /// # 示例
    /// ```rust
    /// use blue_noise_table::noise_table::{NoiseTableConfig, NoiseTableGenerator};
    ///
    /// let generator = NoiseTableGenerator::new(NoiseTableConfig::default())?;
    /// assert_eq!(generator.config_snapshot().array_name, "g_blueNoiseData");
    /// # Ok::<(), blue_noise_table::noise_table::BlueNoiseError>(())
    /// ```
    pub fn new(config: NoiseTableConfig) -> Result<Self, BlueNoiseError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| BlueNoiseError::Network(format!("无法创建 HTTP 客户端：{}", e)))?;

        Ok(Self { config, client })
    }

    pub fn config_snapshot(&self) -> NoiseTableConfig {
        self.config.clone()
    }

    /// 加载并解码：从任意来源得到长度已校验的灰度表。
    pub async fn generate(&self, source: NoiseSource) -> Result<NoiseTable, BlueNoiseError> {
        let config = self.config_snapshot();

        let load_start = Instant::now();
        let raw = match source {
            NoiseSource::Url(url) => self.load_from_url(&url, &config).await?,
            NoiseSource::FilePath(path) => self.load_from_file(&path, &config)?,
        };
        let load_elapsed = load_start.elapsed();

        let decode_start = Instant::now();
        let table = self.decode_to_table(raw)?;
        let decode_elapsed = decode_start.elapsed();

        log::info!(
            "✅ 蓝噪声表生成完成 - load={}ms decode={}ms",
            load_elapsed.as_millis(),
            decode_elapsed.as_millis()
        );

        Ok(table)
    }

    /// 打印模式使用的文本；未显式指定限定符时为 `static`。
    pub fn render(&self, table: &NoiseTable) -> String {
        format_table(table, &self.config.decl(&[Qualifier::Static]))
    }

    /// 回写模式：替换 `path` 中已有的数组并覆盖写回，不做备份。
    pub fn update_file(&self, table: &NoiseTable, path: &Path) -> Result<(), BlueNoiseError> {
        let emit_start = Instant::now();

        let content = std::fs::read_to_string(path).map_err(|e| {
            BlueNoiseError::FileSystem(format!("无法读取目标文件 {}：{}", path.display(), e))
        })?;

        let patched = patch_source(&content, table, &self.config, path)?;

        std::fs::write(path, patched).map_err(|e| {
            BlueNoiseError::FileSystem(format!("无法写回目标文件 {}：{}", path.display(), e))
        })?;

        log::info!(
            "✅ 已更新 {} 中的蓝噪声数组 - emit={}ms",
            path.display(),
            emit_start.elapsed().as_millis()
        );

        Ok(())
    }
}
