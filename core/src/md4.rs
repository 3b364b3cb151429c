//! A from-scratch MD4 (RFC 1320) implementation.

use tracing::trace;

use crate::{Digest, DIGEST_SIZE};

/// The size of a MD4 block, in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Where the message length starts in the last padded block.
const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;

/// The state every message starts from.
pub const INITIAL_STATE: [u32; 4] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476];

const ROUND_1_SHIFTS: [u32; 4] = [3, 7, 11, 19];
const ROUND_2_SHIFTS: [u32; 4] = [3, 5, 9, 13];
const ROUND_3_SHIFTS: [u32; 4] = [3, 9, 11, 15];

const ROUND_2_CONSTANT: u32 = 0x5A827999;
const ROUND_3_CONSTANT: u32 = 0x6ED9EBA1;

/// The order in which the third round reads the block words.
const ROUND_3_ORDER: [usize; 16] = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7, 15];

#[inline]
fn md4_f(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline]
fn md4_g(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

#[inline]
fn md4_h(x: u32, y: u32, z: u32) -> u32 {
    x ^ y ^ z
}

#[inline]
fn md4_ff(a: u32, b: u32, c: u32, d: u32, x: u32, s: u32) -> u32 {
    a.wrapping_add(md4_f(b, c, d))
        .wrapping_add(x)
        .rotate_left(s)
}

#[inline]
fn md4_gg(a: u32, b: u32, c: u32, d: u32, x: u32, s: u32) -> u32 {
    a.wrapping_add(md4_g(b, c, d))
        .wrapping_add(x)
        .wrapping_add(ROUND_2_CONSTANT)
        .rotate_left(s)
}

#[inline]
fn md4_hh(a: u32, b: u32, c: u32, d: u32, x: u32, s: u32) -> u32 {
    a.wrapping_add(md4_h(b, c, d))
        .wrapping_add(x)
        .wrapping_add(ROUND_3_CONSTANT)
        .rotate_left(s)
}

/// Returns the number of blocks `pad` produces for a message of `len` bytes.
/// The padding needs at least one marker byte and the 8 bytes of the length.
pub fn padded_block_count(len: usize) -> usize {
    (len + 1 + 8).div_ceil(BLOCK_SIZE)
}

/// Pads a message so that its length is a multiple of the block size.
///
/// The message is followed by a `0x80` marker, as many zeroes as needed to reach
/// 56 bytes modulo 64, and the bit length of the original message encoded
/// as a little-endian `u64`.
/// The bit length wraps around for messages longer than 2^61 bytes.
pub fn pad(message: &[u8]) -> Vec<u8> {
    let bit_len = (message.len() as u64).wrapping_mul(8);

    let mut padded = Vec::with_capacity(padded_block_count(message.len()) * BLOCK_SIZE);
    padded.extend_from_slice(message);
    padded.push(0x80);

    let zeroes = (LENGTH_OFFSET + BLOCK_SIZE - padded.len() % BLOCK_SIZE) % BLOCK_SIZE;
    padded.resize(padded.len() + zeroes, 0);
    padded.extend_from_slice(&bit_len.to_le_bytes());

    padded
}

/// Reads a block as 16 little-endian words.
fn decode_block(block: &[u8]) -> [u32; 16] {
    let mut words = [0; 16];
    for (word, bytes) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    words
}

fn compress(state: [u32; 4], x: &[u32; 16]) -> [u32; 4] {
    let [mut a, mut b, mut c, mut d] = state;

    for i in (0..16).step_by(4) {
        a = md4_ff(a, b, c, d, x[i], ROUND_1_SHIFTS[0]);
        d = md4_ff(d, a, b, c, x[i + 1], ROUND_1_SHIFTS[1]);
        c = md4_ff(c, d, a, b, x[i + 2], ROUND_1_SHIFTS[2]);
        b = md4_ff(b, c, d, a, x[i + 3], ROUND_1_SHIFTS[3]);
    }

    // words are taken column-wise
    for i in 0..4 {
        a = md4_gg(a, b, c, d, x[i], ROUND_2_SHIFTS[0]);
        d = md4_gg(d, a, b, c, x[i + 4], ROUND_2_SHIFTS[1]);
        c = md4_gg(c, d, a, b, x[i + 8], ROUND_2_SHIFTS[2]);
        b = md4_gg(b, c, d, a, x[i + 12], ROUND_2_SHIFTS[3]);
    }

    for k in ROUND_3_ORDER.chunks_exact(4) {
        a = md4_hh(a, b, c, d, x[k[0]], ROUND_3_SHIFTS[0]);
        d = md4_hh(d, a, b, c, x[k[1]], ROUND_3_SHIFTS[1]);
        c = md4_hh(c, d, a, b, x[k[2]], ROUND_3_SHIFTS[2]);
        b = md4_hh(b, c, d, a, x[k[3]], ROUND_3_SHIFTS[3]);
    }

    [
        state[0].wrapping_add(a),
        state[1].wrapping_add(b),
        state[2].wrapping_add(c),
        state[3].wrapping_add(d),
    ]
}

/// Runs the compression function over one block and returns the next state.
pub fn process_block(state: [u32; 4], block: &[u8; BLOCK_SIZE]) -> [u32; 4] {
    compress(state, &decode_block(block))
}

/// Hashes a message using MD4.
pub fn md4(message: &[u8]) -> Digest {
    let padded = pad(message);

    let state = padded
        .chunks_exact(BLOCK_SIZE)
        .fold(INITIAL_STATE, |state, block| {
            compress(state, &decode_block(block))
        });

    trace!(
        len = message.len(),
        blocks = padded.len() / BLOCK_SIZE,
        "md4 digest computed"
    );

    let mut digest = [0; DIGEST_SIZE];
    for (bytes, word) in digest.chunks_exact_mut(4).zip(state) {
        bytes.copy_from_slice(&word.to_le_bytes());
    }

    Digest::from(digest)
}
