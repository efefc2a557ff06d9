//! Identifier helpers for user ids and vendor check ids

use uuid::Uuid;

/// Generate a fresh v4 UUID user id for the registration page
pub fn generate_user_id() -> String {
    Uuid::new_v4().to_string()
}

/// Mask an identifier for logging, keeping the first and last four characters
///
/// Identifiers of eight characters or fewer are fully masked.
pub fn mask_identifier(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}****{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_user_id_is_v4() {
        let id = generate_user_id();
        let parsed = Uuid::parse_str(&id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_ne!(id, generate_user_id());
    }

    #[test]
    fn test_mask_long_identifier() {
        assert_eq!(mask_identifier("chk_0123456789abcdef"), "chk_****cdef");
    }

    #[test]
    fn test_mask_short_identifier() {
        assert_eq!(mask_identifier("abc"), "***");
        assert_eq!(mask_identifier(""), "");
    }
}
