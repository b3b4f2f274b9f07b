/// Short ids that would be shadowed by fixed routes and must never be handed out.
pub const RESERVED_CODES: &[&str] = &["health"];

pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    // 随机选择字母和数字
    let chars = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

    // 生成指定长度的随机字符串
    iter::repeat_with(|| chars[rand::random_range(0..chars.len())] as char)
        .take(length)
        .collect()
}

pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.iter().any(|r| code.eq_ignore_ascii_case(r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_has_requested_length() {
        for len in [1, 6, 12, 32] {
            assert_eq!(generate_random_code(len).len(), len);
        }
    }

    #[test]
    fn test_generated_code_is_alphanumeric() {
        let code = generate_random_code(256);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_zero_length_yields_empty_string() {
        assert_eq!(generate_random_code(0), "");
    }

    #[test]
    fn test_consecutive_codes_differ() {
        // 62^32 combinations, a collision here means the RNG is broken
        assert_ne!(generate_random_code(32), generate_random_code(32));
    }

    #[test]
    fn test_reserved_codes_are_detected() {
        assert!(is_reserved_code("health"));
        assert!(is_reserved_code("HEALTH"));
        assert!(!is_reserved_code("healthy"));
        assert!(!is_reserved_code("abc123"));
    }
}
