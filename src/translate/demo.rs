// translate/demo.rs
// Offline demo dictionary (terminal fallback — always available)

use super::{TranslateAdapter, TranslateError};
use async_trait::async_trait;

/// Canned en→vi translations for common phrases, so the system keeps working
/// with no provider credentials and no network.
const DEMO_PHRASES: &[(&str, &str)] = &[
    ("hello", "Xin chào"),
    ("hello world", "Xin chào thế giới"),
    ("hi", "Chào"),
    ("how are you", "Bạn khỏe không"),
    ("thank you", "Cảm ơn bạn"),
    ("thanks", "Cảm ơn"),
    ("goodbye", "Tạm biệt"),
    ("bye", "Tạm biệt"),
    ("yes", "Vâng"),
    ("no", "Không"),
    ("good morning", "Chào buổi sáng"),
    ("good afternoon", "Chào buổi chiều"),
    ("good evening", "Chào buổi tối"),
    ("good night", "Chúc ngủ ngon"),
    ("please", "Làm ơn"),
    ("sorry", "Xin lỗi"),
    ("excuse me", "Xin lỗi"),
    ("welcome", "Chào mừng"),
    ("test", "Kiểm tra"),
    ("testing", "Đang kiểm tra"),
];

pub struct DemoAdapter;

impl DemoAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Case-insensitive exact match on the trimmed input; misses are returned
    /// with a visible marker so degraded mode is distinguishable from a real
    /// translation.
    pub fn lookup(text: &str) -> String {
        let normalized = text.trim().to_lowercase();

        for (phrase, translation) in DEMO_PHRASES {
            if *phrase == normalized {
                return (*translation).to_string();
            }
        }

        format!("[Demo] {}", text)
    }
}

impl Default for DemoAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslateAdapter for DemoAdapter {
    async fn translate(
        &self,
        text: &str,
        _source: &str,
        _target: &str,
    ) -> Result<String, TranslateError> {
        Ok(Self::lookup(text))
    }

    fn name(&self) -> &str {
        "demo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_phrase() {
        assert_eq!(DemoAdapter::lookup("hello"), "Xin chào");
        assert_eq!(DemoAdapter::lookup("good night"), "Chúc ngủ ngon");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(DemoAdapter::lookup("Hello"), "Xin chào");
        assert_eq!(DemoAdapter::lookup("  HELLO  "), "Xin chào");
    }

    #[test]
    fn test_miss_keeps_original_behind_marker() {
        let out = DemoAdapter::lookup("banana");
        assert!(out.contains("banana"));
        assert!(out.starts_with("[Demo]"));
    }
}
