//! MD4 and NTLM password hashing.
//!
//! ```
//! use nthash_core::{md4, ntlm_hex};
//!
//! assert_eq!(md4(b"abc").to_hex_lower(), "a448017aaf21d8525fc10ae87aa6729d");
//! assert_eq!(ntlm_hex("password"), "8846F7EAEE8FB117AD06BDD830B7586C");
//! ```

mod digest;
mod error;
mod hash;
pub mod md4;
mod ntlm;

pub use digest::{Digest, DIGEST_SIZE};
pub use error::{NtHashError, NtHashResult};
pub use hash::{hash_batch, HashFunction};
pub use self::md4::{md4, BLOCK_SIZE};
pub use ntlm::{ntlm, ntlm_hex, ntlm_utf16, utf16_le};
