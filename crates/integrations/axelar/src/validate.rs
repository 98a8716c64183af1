//! Basic ERC20 contract address validation

/// Validate an ERC20 contract address.
///
/// Performs format checks only (prefix, length, hex digits), no checksum.
pub fn validate_erc20_address(address: &str) -> Result<(), String> {
    if address.is_empty() {
        return Err("Address cannot be empty".to_string());
    }

    if !address.starts_with("0x") {
        return Err("ERC20 address must start with '0x'".to_string());
    }

    if address.len() != 42 {
        return Err("ERC20 address must be 42 characters (0x + 40 hex chars)".to_string());
    }

    if !address[2..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err("Address contains non-hex characters".to_string());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_mixed_case() {
        assert!(validate_erc20_address("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48").is_ok());
    }

    #[test]
    fn test_invalid_prefix() {
        assert!(validate_erc20_address("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48ab").is_err());
    }

    #[test]
    fn test_invalid_length() {
        assert!(validate_erc20_address("0x742d35").is_err());
    }

    #[test]
    fn test_non_hex() {
        assert!(validate_erc20_address("0xZZb86991c6218b36c1d19D4a2e9Eb0cE3606eB48").is_err());
    }

    #[test]
    fn test_empty_address() {
        assert!(validate_erc20_address("").is_err());
    }
}
