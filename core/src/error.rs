use thiserror::Error;

pub type NtHashResult<T> = std::result::Result<T, NtHashError>;

#[derive(Error, Debug)]
pub enum NtHashError {
    #[error("Unpaired UTF-16 surrogate {unit:#06X} at position {index}")]
    UnpairedSurrogate { index: usize, unit: u16 },

    #[error("The digest is not valid hexadecimal")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("A digest is 16 bytes long, but the provided one is {0} bytes long")]
    DigestLength(usize),

    #[error("Unknown hash function {0:?}, expected ntlm or md4")]
    UnknownHashFunction(String),
}
