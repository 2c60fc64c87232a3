//! Wire-format constants for record stream signature files.

/// Size in bytes of a SHA-384 digest
pub const SHA384_LENGTH: usize = 48;

/// Type tag of a SHA-384 with RSA signature block
pub const SHA384_WITH_RSA_TYPE: u32 = 1;

/// Maximum length of a SHA-384 with RSA signature (3072-bit key)
pub const SHA384_WITH_RSA_MAX_LENGTH: usize = 384;

/// Delimiter between the file hash and the signature in a V2 file
pub const SIGNATURE_FILE_V2_MARKER: u8 = 3;

/// Leading byte of a V2 signature file (precedes the file hash)
pub const FILE_HASH_MARKER: u8 = 4;

/// Leading byte of a V5 signature file
pub const SIGNATURE_FILE_FORMAT_V5: u8 = 5;

pub const BYTE_SIZE: usize = 1;
pub const INT_SIZE: usize = 4;
