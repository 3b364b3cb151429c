use std::{fmt::Display, str::FromStr};

use rayon::prelude::*;
use tracing::debug;

use crate::{
    error::{NtHashError, NtHashResult},
    md4::md4,
    ntlm::ntlm,
    Digest, DIGEST_SIZE,
};

/// All the supported hash functions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashFunction {
    Ntlm,
    Md4,
}

impl HashFunction {
    /// Hashes a text input.
    /// MD4 works on the UTF-8 bytes of the input, NTLM on its UTF-16LE encoding.
    pub fn hash(&self, input: &str) -> Digest {
        match self {
            Self::Ntlm => ntlm(input),
            Self::Md4 => md4(input.as_bytes()),
        }
    }

    /// Returns the size of the digest produced, in bytes.
    pub fn digest_size(&self) -> usize {
        DIGEST_SIZE
    }
}

impl Display for HashFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl FromStr for HashFunction {
    type Err = NtHashError;

    fn from_str(s: &str) -> NtHashResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ntlm" => Ok(Self::Ntlm),
            "md4" => Ok(Self::Md4),
            _ => Err(NtHashError::UnknownHashFunction(s.to_owned())),
        }
    }
}

/// Hashes many independent inputs in parallel.
/// The digests are returned in the order of the inputs.
pub fn hash_batch<S>(hash_function: HashFunction, inputs: &[S]) -> Vec<Digest>
where
    S: AsRef<str> + Sync,
{
    debug!(%hash_function, count = inputs.len(), "hashing batch");

    inputs
        .par_iter()
        .map(|input| hash_function.hash(input.as_ref()))
        .collect()
}
