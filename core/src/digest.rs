use std::{
    fmt::{self, Display, LowerHex, UpperHex},
    str::FromStr,
};

use crate::error::{NtHashError, NtHashResult};

/// The size of a MD4 digest, in bytes.
pub const DIGEST_SIZE: usize = 16;

/// A 128-bit digest, as produced by MD4 and NTLM.
///
/// It is displayed as lowercase hexadecimal. Use `{:X}` or [`Digest::to_hex_upper`]
/// for the uppercase form NTLM hashes are usually stored in.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// Returns the raw bytes of the digest.
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Renders the digest as lowercase hexadecimal.
    pub fn to_hex_lower(&self) -> String {
        hex::encode(self.0)
    }

    /// Renders the digest as uppercase hexadecimal.
    pub fn to_hex_upper(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Digest(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_SIZE] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_lower())
    }
}

impl UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_upper())
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(self, f)
    }
}

/// Parses a digest from its hexadecimal form, in either case.
impl FromStr for Digest {
    type Err = NtHashError;

    fn from_str(s: &str) -> NtHashResult<Self> {
        let bytes = hex::decode(s.trim())?;
        let len = bytes.len();

        bytes
            .try_into()
            .map(Digest)
            .map_err(|_| NtHashError::DigestLength(len))
    }
}
