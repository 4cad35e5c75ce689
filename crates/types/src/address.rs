use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors that can occur when parsing a wallet address string.
#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    #[error("wallet address must start with 'w'")]
    InvalidPrefix,
    #[error("wallet address must be {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("wallet address payload is not valid hexadecimal")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("wallet address payload must be exactly 32 bytes")]
    InvalidPayloadLength,
}

/// Number of raw bytes contained in a wallet address.
pub const ADDRESS_BYTES: usize = 32;
/// Expected string length of an encoded address (prefix + 64 hex chars).
pub const ADDRESS_STRING_LENGTH: usize = 1 + ADDRESS_BYTES * 2;

/// Opaque wallet identity tracked by the registry.
///
/// Addresses compare by raw bytes only. The registry never inspects the
/// payload; whoever presents an address is assumed to have been
/// authenticated by the surrounding environment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress([u8; ADDRESS_BYTES]);

impl WalletAddress {
    /// Create an address from raw bytes.
    pub fn new(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_BYTES] {
        &self.0
    }

    /// Encode into the human readable form: `w` followed by the
    /// hexadecimal representation of the raw bytes.
    pub fn encode(&self) -> String {
        let mut encoded = String::with_capacity(ADDRESS_STRING_LENGTH);
        encoded.push('w');
        encoded.push_str(&hex::encode(self.0));
        encoded
    }

    /// Attempt to decode a human readable address string.
    pub fn decode(address: &str) -> Result<Self, AddressError> {
        if !address.starts_with('w') {
            return Err(AddressError::InvalidPrefix);
        }

        if address.len() != ADDRESS_STRING_LENGTH {
            return Err(AddressError::InvalidLength {
                expected: ADDRESS_STRING_LENGTH,
                actual: address.len(),
            });
        }

        let decoded = hex::decode(&address[1..])?;

        let bytes: [u8; ADDRESS_BYTES] = decoded
            .try_into()
            .map_err(|_| AddressError::InvalidPayloadLength)?;

        Ok(Self(bytes))
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<[u8; ADDRESS_BYTES]> for WalletAddress {
    fn from(value: [u8; ADDRESS_BYTES]) -> Self {
        WalletAddress(value)
    }
}

impl From<WalletAddress> for String {
    fn from(value: WalletAddress) -> Self {
        value.encode()
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        WalletAddress::decode(&value)
    }
}

impl FromStr for WalletAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WalletAddress::decode(s)
    }
}
