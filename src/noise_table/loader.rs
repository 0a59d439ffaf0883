//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 统一处理两种来源（URL / 本地文件）的原始字节加载，并在“尽可能早”的阶段校验输入。
//! 不做重试与缓存：任何网络错误都直接上抛，由入口终止进程。
//!
//! ## 实现思路
//!
//! - URL：状态码 + Content-Length 体积校验 + 分块读取 + 文件签名校验。
//! - 文件：存在性 + metadata 体积限制 + 读取 + 文件签名校验。
//! - 网络错误统一映射到 `BlueNoiseError::Network`。

use std::path::Path;

use super::source::RawNoiseData;
use super::{BlueNoiseError, NoiseTableConfig, NoiseTableGenerator};

const USER_AGENT: &str = concat!("blue-noise-table/", env!("CARGO_PKG_VERSION"));
const BUFFER_INITIAL_CAPACITY: usize = 16 * 1024;

impl NoiseTableGenerator {
    /// 从 URL 下载图片原始字节。
    pub(super) async fn load_from_url(
        &self,
        url: &str,
        config: &NoiseTableConfig,
    ) -> Result<RawNoiseData, BlueNoiseError> {
        log::info!("🌐 开始下载蓝噪声纹理 - URL: {}", Self::redact_url_for_log(url));

        let bytes = self.download_with_limit(url, config).await?;
        Self::validate_image_signature(&bytes)?;

        Ok(RawNoiseData {
            bytes,
            source_hint: "url",
        })
    }

    /// 从本地路径读取图片原始字节。
    pub(super) fn load_from_file(
        &self,
        path: &str,
        config: &NoiseTableConfig,
    ) -> Result<RawNoiseData, BlueNoiseError> {
        log::info!("📁 开始读取本地纹理 - 路径: {}", path);

        let file_path = Path::new(path);
        if !file_path.exists() {
            return Err(BlueNoiseError::FileSystem(format!("文件不存在：{}", path)));
        }

        let metadata = std::fs::metadata(file_path)
            .map_err(|e| BlueNoiseError::FileSystem(format!("无法读取文件信息：{}", e)))?;

        if metadata.len() > config.max_file_size {
            return Err(Self::too_large(metadata.len(), config.max_file_size));
        }

        let bytes = std::fs::read(file_path)
            .map_err(|e| BlueNoiseError::FileSystem(format!("无法读取图片文件：{}", e)))?;
        Self::validate_image_signature(&bytes)?;

        Ok(RawNoiseData {
            bytes,
            source_hint: "file",
        })
    }

    /// 单次 GET，按块读取响应体并限制总体积。
    async fn download_with_limit(
        &self,
        url: &str,
        config: &NoiseTableConfig,
    ) -> Result<Vec<u8>, BlueNoiseError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| BlueNoiseError::InvalidFormat(format!("URL 格式错误：{}", e)))?;

        log::debug!("📡 发送 HTTP 请求...");
        let mut response = self
            .client
            .get(parsed)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "image/png,image/*;q=0.9,*/*;q=0.5")
            .send()
            .await
            .map_err(|e| BlueNoiseError::Network(format!("请求失败：{}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BlueNoiseError::Network(format!(
                "HTTP {}: {}",
                status.as_u16(),
                Self::status_message(status.as_u16())
            )));
        }

        let total_len = response.content_length();
        if let Some(size) = total_len {
            if size > config.max_file_size {
                return Err(Self::too_large(size, config.max_file_size));
            }
        }

        let initial_capacity = total_len
            .map(|len| len.min(config.max_file_size) as usize)
            .filter(|len| *len > 0)
            .unwrap_or(BUFFER_INITIAL_CAPACITY);
        let mut buffer = Vec::with_capacity(initial_capacity);

        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| BlueNoiseError::Network(format!("下载失败：{}", e)))?
        {
            let total = (buffer.len() + chunk.len()) as u64;
            if total > config.max_file_size {
                return Err(Self::too_large(total, config.max_file_size));
            }
            buffer.extend_from_slice(&chunk);
        }

        log::debug!("✅ 下载完成 - {} bytes", buffer.len());
        Ok(buffer)
    }

    fn too_large(size: u64, limit: u64) -> BlueNoiseError {
        BlueNoiseError::ResourceLimit(format!(
            "文件过大：{:.2} MB（限制：{:.2} MB）",
            size as f64 / 1024.0 / 1024.0,
            limit as f64 / 1024.0 / 1024.0
        ))
    }

    fn redact_url_for_log(url: &str) -> String {
        let Ok(parsed) = reqwest::Url::parse(url) else {
            return "<invalid-url>".to_string();
        };

        let host = parsed.host_str().unwrap_or("<unknown-host>");
        let port = parsed.port().map(|p| format!(":{}", p)).unwrap_or_default();

        format!("{}://{}{}{}", parsed.scheme(), host, port, parsed.path())
    }

    fn status_message(code: u16) -> &'static str {
        match code {
            404 => "未找到",
            403 => "访问被拒绝",
            500..=599 => "服务器错误",
            _ => "请求失败",
        }
    }

    /// 通过文件签名（magic bytes）校验输入是否为图片。
    fn validate_image_signature(bytes: &[u8]) -> Result<(), BlueNoiseError> {
        if bytes.is_empty() {
            return Err(BlueNoiseError::InvalidFormat("图片内容为空".to_string()));
        }

        let kind = infer::get(bytes)
            .ok_or_else(|| BlueNoiseError::InvalidFormat("无法识别图片类型".to_string()))?;

        if kind.matcher_type() != infer::MatcherType::Image {
            return Err(BlueNoiseError::InvalidFormat(format!(
                "文件签名不是图片类型：{}",
                kind.mime_type()
            )));
        }

        Ok(())
    }
}
