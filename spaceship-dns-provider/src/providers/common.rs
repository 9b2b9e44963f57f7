//! Provider 公共工具函数

use std::time::Duration;

use reqwest::Client;

// ============ HTTP Client ============

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(timeout: Duration) -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS).min(timeout))
        .timeout(timeout)
        .build()
        .expect("Failed to create HTTP client")
}

// ============ 域名名称处理 ============

/// 去掉域名末尾的点
pub fn normalize_domain_name(name: &str) -> String {
    name.trim_end_matches('.').to_string()
}

/// 将完整域名转换为相对名称
/// 如: "www.example.com" + "example.com" -> "www"
/// 如: "example.com" + "example.com" -> "@"
pub fn full_name_to_relative(full_name: &str, zone_name: &str) -> String {
    let full = normalize_domain_name(full_name);
    let zone = normalize_domain_name(zone_name);

    if full.eq_ignore_ascii_case(&zone) {
        return "@".to_string();
    }

    // 只做 ASCII 小写，字节长度不变，前缀长度可直接用于原字符串
    let suffix = format!(".{}", zone.to_ascii_lowercase());
    match full.to_ascii_lowercase().strip_suffix(&suffix) {
        Some(subdomain) if !subdomain.is_empty() => full[..subdomain.len()].to_string(),
        _ => full,
    }
}

/// 规范化记录名称
///
/// - 以 `.` 结尾的绝对名称转为相对名称
/// - 空名称视为 apex（`@`）
/// - 其余相对名称原样保留
pub fn normalize_record_name(name: &str, zone_name: &str) -> String {
    if name.is_empty() || name == "." {
        "@".to_string()
    } else if name.ends_with('.') {
        full_name_to_relative(name, zone_name)
    } else {
        name.to_string()
    }
}
