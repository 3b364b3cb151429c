use crate::{
    error::{NtHashError, NtHashResult},
    md4::md4,
    Digest,
};

/// UTF-16LE encodes a password.
/// Characters outside of the BMP become a surrogate pair.
#[inline]
pub fn utf16_le(password: &str) -> Vec<u8> {
    password
        .encode_utf16()
        .flat_map(|unit| unit.to_le_bytes())
        .collect()
}

/// Hashes a password using NTLM.
#[inline]
pub fn ntlm(password: &str) -> Digest {
    md4(&utf16_le(password))
}

/// Hashes a password using NTLM and returns it in uppercase hexadecimal,
/// the way it is stored in `sambaNTPassword` attributes.
pub fn ntlm_hex(password: &str) -> String {
    ntlm(password).to_hex_upper()
}

/// Hashes a password already split into UTF-16 code units.
///
/// Windows does not guarantee that the units it hands over are well-formed.
/// An unpaired surrogate is rejected rather than replaced, since a lossy
/// conversion would silently produce a different hash than the one Windows computes.
pub fn ntlm_utf16(units: &[u16]) -> NtHashResult<Digest> {
    let mut index = 0;
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(c) => index += c.len_utf16(),
            Err(err) => {
                return Err(NtHashError::UnpairedSurrogate {
                    index,
                    unit: err.unpaired_surrogate(),
                })
            }
        }
    }

    let bytes = units
        .iter()
        .flat_map(|unit| unit.to_le_bytes())
        .collect::<Vec<_>>();

    Ok(md4(&bytes))
}

#[cfg(test)]
mod tests {
    use crate::{error::NtHashError, md4::md4};

    use super::{ntlm, ntlm_hex, ntlm_utf16, utf16_le};

    #[test]
    fn test_ntlm() {
        assert_eq!(
            ntlm("password").as_bytes(),
            &[
                0x88u8, 0x46, 0xF7, 0xEA, 0xEE, 0x8F, 0xB1, 0x17, 0xAD, 0x06, 0xBD, 0xD8, 0x30,
                0xB7, 0x58, 0x6C,
            ]
        );

        assert_eq!(
            ntlm("abc").as_bytes(),
            &[
                0xE0, 0xFB, 0xA3, 0x82, 0x68, 0xD0, 0xEC, 0x66, 0xEF, 0x1C, 0xB4, 0x52, 0xD5, 0x88,
                0x5E, 0x53
            ]
        );
    }

    #[test]
    fn test_ntlm_hex() {
        assert_eq!(ntlm_hex(""), "31D6CFE0D16AE931B73C59D7E0C089C0");
        assert_eq!(ntlm_hex("Password"), "A4F49C406510BDCAB6824EE7C30FD852");
        assert_eq!(ntlm_hex("-x"), "923AAC95A92C44F44EA8B66CACD43D0F");
    }

    #[test]
    fn test_ntlm_empty_is_md4_empty() {
        assert_eq!(ntlm(""), md4(b""));
    }

    #[test]
    fn test_ntlm_unicode() {
        assert_eq!(ntlm_hex("pässwörd"), "0553152250AC01ADB4213CB9938663E4");
        assert_eq!(ntlm_hex("日本語"), "CED13822047F22CE2B3E7D763955F48E");
        assert_eq!(ntlm_hex("😀"), "4B58A10CC20A4E7D808D218E1F80AABC");
    }

    #[test]
    fn test_ntlm_block_boundary() {
        // 27 characters take 54 bytes, 28 take 56 and spill into a second block
        assert_eq!(
            ntlm_hex(&"a".repeat(27)),
            "3F9798B4E3C435593074A9EF81662507"
        );
        assert_eq!(
            ntlm_hex(&"a".repeat(28)),
            "7D4A56633580793AA26AD0259F60280B"
        );
    }

    #[test]
    fn test_utf16_le() {
        assert_eq!(utf16_le(""), Vec::<u8>::new());
        assert_eq!(utf16_le("ab"), [b'a', 0, b'b', 0]);
        assert_eq!(utf16_le("é"), [0xE9, 0x00]);
        assert_eq!(utf16_le("€"), [0xAC, 0x20]);
        // U+1F600 is D83D DE00
        assert_eq!(utf16_le("😀"), [0x3D, 0xD8, 0x00, 0xDE]);
    }

    #[test]
    fn test_ntlm_utf16() {
        let units = "pässwörd😀".encode_utf16().collect::<Vec<_>>();
        assert_eq!(ntlm_utf16(&units).unwrap(), ntlm("pässwörd😀"));
        assert_eq!(ntlm_utf16(&[]).unwrap(), ntlm(""));
    }

    #[test]
    fn test_ntlm_utf16_unpaired_surrogate() {
        let lone_high = [0x0061, 0xD83D, 0x0062];
        assert!(matches!(
            ntlm_utf16(&lone_high),
            Err(NtHashError::UnpairedSurrogate {
                index: 1,
                unit: 0xD83D
            })
        ));

        let lone_low = [0xD83D, 0xDE00, 0xDE00];
        assert!(matches!(
            ntlm_utf16(&lone_low),
            Err(NtHashError::UnpairedSurrogate {
                index: 2,
                unit: 0xDE00
            })
        ));
    }
}
