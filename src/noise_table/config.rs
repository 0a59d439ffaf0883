//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `NoiseTableConfig`，命令行参数只负责覆盖默认值。
//! 存储限定符（static / inline）作为高层语义，由 `Qualifier` 负责字符串解析与反向输出。
//!
//! ## 实现思路
//!
//! - `Default` 提供与 DesktopLUT 现有代码一致的配置。
//! - `set_*` 系列方法在写入前校验，非法输入统一返回 `InvalidFormat`。
//! - `decl` 将当前配置折叠为格式化阶段使用的 `ArrayDecl`。

use super::BlueNoiseError;
use super::formatter::ArrayDecl;

/// Calinou 镜像中 Christoph Peters 的 64x64 LDR 单通道纹理（CC0）。
///
/// HDR 版本为 16 位，这里固定使用 LDR。
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/Calinou/free-blue-noise-textures/master/64_64/LDR_LLL1_0.png";

/// DesktopLUT 中数组的符号名。
pub const DEFAULT_ARRAY_NAME: &str = "g_blueNoiseData";

/// 生成配置。
#[derive(Debug, Clone)]
pub struct NoiseTableConfig {
    /// 下载地址，任何内容相同的镜像均可。
    pub url: String,
    /// 下载/读取原始字节时允许的最大体积（字节）。
    pub max_file_size: u64,
    /// 输出数组的符号名。
    pub array_name: String,
    /// 显式指定的存储限定符。
    ///
    /// `None` 时：打印模式使用 `static`，回写模式沿用目标文件中已有的限定符。
    pub qualifier: Option<Qualifier>,
}

impl Default for NoiseTableConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            max_file_size: 8 * 1024 * 1024,
            array_name: DEFAULT_ARRAY_NAME.to_string(),
            qualifier: None,
        }
    }
}

/// 数组声明的存储限定符。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Qualifier {
    #[default]
    Static,
    Inline,
}

impl Qualifier {
    /// 从外部字符串解析限定符。
    ///
    /// # 示例
    /// ```rust
    /// use blue_noise_table::noise_table::Qualifier;
    ///
    /// let q = Qualifier::from_str("inline")?;
    /// assert_eq!(q.as_str(), "inline");
    /// # Ok::<(), blue_noise_table::noise_table::BlueNoiseError>(())
    /// ```
    pub fn from_str(value: &str) -> Result<Self, BlueNoiseError> {
        match value.trim().to_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "inline" => Ok(Self::Inline),
            other => Err(BlueNoiseError::InvalidFormat(format!(
                "未知存储限定符：{}（可选：static / inline）",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Inline => "inline",
        }
    }
}

impl NoiseTableConfig {
    /// 覆盖下载地址，仅接受 http / https。
    pub fn set_url(&mut self, url: &str) -> Result<(), BlueNoiseError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| BlueNoiseError::InvalidFormat(format!("URL 格式错误：{}", e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(BlueNoiseError::InvalidFormat(format!(
                "仅支持 http/https 协议：{}",
                parsed.scheme()
            )));
        }

        self.url = parsed.to_string();
        Ok(())
    }

    /// 覆盖数组符号名，必须是合法的 C 标识符。
    pub fn set_array_name(&mut self, name: &str) -> Result<(), BlueNoiseError> {
        if !is_c_identifier(name) {
            return Err(BlueNoiseError::InvalidFormat(format!("不是合法的 C 标识符：{}", name)));
        }

        self.array_name = name.to_string();
        Ok(())
    }

    pub fn set_qualifier(&mut self, value: &str) -> Result<(), BlueNoiseError> {
        self.qualifier = Some(Qualifier::from_str(value)?);
        Ok(())
    }

    /// 当前配置对应的数组声明；`fallback` 用于未显式指定限定符的情况。
    pub fn decl(&self, fallback: &[Qualifier]) -> ArrayDecl {
        let qualifiers = match self.qualifier {
            Some(q) => vec![q],
            None => fallback.to_vec(),
        };

        ArrayDecl {
            name: self.array_name.clone(),
            qualifiers,
        }
    }
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qualifier_round_trips_through_str() {
        assert_eq!(Qualifier::from_str(" Inline ").unwrap(), Qualifier::Inline);
        assert_eq!(Qualifier::from_str("static").unwrap().as_str(), "static");
        assert!(matches!(
            Qualifier::from_str("constexpr"),
            Err(BlueNoiseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn set_array_name_rejects_invalid_identifiers() {
        let mut config = NoiseTableConfig::default();

        assert!(config.set_array_name("g_noise2").is_ok());
        assert_eq!(config.array_name, "g_noise2");

        for bad in ["", "2fast", "has space", "dash-name", "a[4]"] {
            assert!(matches!(
                config.set_array_name(bad),
                Err(BlueNoiseError::InvalidFormat(_))
            ));
        }
        assert_eq!(config.array_name, "g_noise2");
    }

    #[test]
    fn set_url_accepts_only_http_schemes() {
        let mut config = NoiseTableConfig::default();

        assert!(config.set_url("http://mirror.example.com/noise.png").is_ok());
        assert_eq!(config.url, "http://mirror.example.com/noise.png");

        assert!(matches!(
            config.set_url("ftp://mirror.example.com/noise.png"),
            Err(BlueNoiseError::InvalidFormat(_))
        ));
        assert!(matches!(
            config.set_url("not a url"),
            Err(BlueNoiseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn decl_prefers_explicit_qualifier() {
        let mut config = NoiseTableConfig::default();
        assert_eq!(
            config.decl(&[Qualifier::Static, Qualifier::Inline]).qualifiers,
            vec![Qualifier::Static, Qualifier::Inline]
        );

        config.set_qualifier("static").unwrap();
        let decl = config.decl(&[Qualifier::Inline]);
        assert_eq!(decl.qualifiers, vec![Qualifier::Static]);
        assert_eq!(decl.name, DEFAULT_ARRAY_NAME);
    }
}
