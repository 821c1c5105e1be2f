//! Wallet address newtype with Solana base58 validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when an address fails format validation.
///
/// The message doubles as the user-facing rejection text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Valid wallet address is required")]
pub struct InvalidWalletAddress;

/// Solana wallet address: 32-44 characters that decode under base58.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Validate and wrap a raw address string.
    pub fn parse(input: &str) -> Result<Self, InvalidWalletAddress> {
        if !(32..=44).contains(&input.len()) {
            return Err(InvalidWalletAddress);
        }
        bs58::decode(input)
            .into_vec()
            .map_err(|_| InvalidWalletAddress)?;
        Ok(WalletAddress(input.to_string()))
    }

    /// Get the address as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_full_length_address() {
        let addr = WalletAddress::parse("9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin");
        assert!(addr.is_ok());
        assert_eq!(
            addr.unwrap().as_str(),
            "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin"
        );
    }

    #[test]
    fn test_accepts_minimum_length_address() {
        // The system program id is 32 ones.
        assert!(WalletAddress::parse("11111111111111111111111111111111").is_ok());
    }

    #[test]
    fn test_rejects_short_address() {
        assert_eq!(WalletAddress::parse("abc"), Err(InvalidWalletAddress));
    }

    #[test]
    fn test_rejects_long_address() {
        let long = "1".repeat(45);
        assert_eq!(WalletAddress::parse(&long), Err(InvalidWalletAddress));
    }

    #[test]
    fn test_rejects_non_base58_characters() {
        // '0', 'O', 'I' and 'l' are outside the base58 alphabet.
        let invalid = "0OIl".repeat(10);
        assert_eq!(invalid.len(), 40);
        assert_eq!(WalletAddress::parse(&invalid), Err(InvalidWalletAddress));
    }

    #[test]
    fn test_rejects_empty_address() {
        assert_eq!(WalletAddress::parse(""), Err(InvalidWalletAddress));
    }

    #[test]
    fn test_error_message_is_user_facing() {
        assert_eq!(
            InvalidWalletAddress.to_string(),
            "Valid wallet address is required"
        );
    }
}
