/// True when the tool resolves on the search path.
pub fn is_available(tool: &str) -> bool {
    which::which(tool).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tool_is_not_available() {
        assert!(!is_available("nonexistent_tool_12345"));
    }

    #[test]
    fn availability_check_is_idempotent() {
        let first = is_available("nonexistent_tool_12345");
        let second = is_available("nonexistent_tool_12345");
        assert_eq!(first, second);
    }
}
