/// The canonical greeting text
const GREETING: &str = "hello world";

/// Produce the greeting message
///
/// Takes no parameters, has no side effects, and cannot fail. Callers
/// always receive the same text: lowercase, space-separated, 11 characters.
pub fn hello() -> String {
    GREETING.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expected greeting value shared across the test cases
    fn expected() -> String {
        "hello world".to_string()
    }

    #[test]
    fn test_hello() {
        let result = hello();
        assert_eq!(result, expected());
    }

    #[test]
    fn test_hello_length() {
        let result = hello();
        assert_eq!(result.len(), 11);
        assert_eq!(result.chars().count(), 11);
    }

    #[test]
    fn test_hello_is_owned_string() {
        // Each call yields an independently owned value
        let first: String = hello();
        let second: String = hello();
        drop(first);
        assert_eq!(second, "hello world");
    }

    #[test]
    fn test_hello_exact_casing_and_whitespace() {
        let result = hello();
        assert_eq!(result, result.to_lowercase());
        assert_eq!(result.trim(), result);
        assert!(!result.ends_with('\n'));
    }
}
