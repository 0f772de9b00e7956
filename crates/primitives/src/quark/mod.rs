//! Quark: nine chained 512-bit hashes with three data-dependent branches.

mod bmw;

use athrd_consensus::Hash256;
use groestl::Groestl512;
use jh::Jh512;
use sha3::{Digest, Keccak512};
use skein::digest::consts::U64;
use skein::Skein512;

pub use bmw::bmw512;

fn to_array(digest: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(digest);
    out
}

/// BLAKE-512 as submitted to the SHA-3 final round (16 rounds).
pub fn blake512(data: &[u8]) -> [u8; 64] {
    to_array(&<blake_hash::Blake512 as blake_hash::Digest>::digest(data))
}

pub fn groestl512(data: &[u8]) -> [u8; 64] {
    to_array(&Groestl512::digest(data))
}

pub fn jh512(data: &[u8]) -> [u8; 64] {
    to_array(&Jh512::digest(data))
}

/// Original Keccak padding, not FIPS-202 SHA3-512.
pub fn keccak512(data: &[u8]) -> [u8; 64] {
    to_array(&Keccak512::digest(data))
}

pub fn skein512(data: &[u8]) -> [u8; 64] {
    to_array(&Skein512::<U64>::digest(data))
}

fn branch(hash: &[u8; 64]) -> bool {
    hash[0] & 8 != 0
}

pub fn quark_hash(data: &[u8]) -> Hash256 {
    let mut h = blake512(data);
    h = bmw512(&h);
    h = if branch(&h) { groestl512(&h) } else { skein512(&h) };
    h = groestl512(&h);
    h = jh512(&h);
    h = if branch(&h) { blake512(&h) } else { bmw512(&h) };
    h = keccak512(&h);
    h = skein512(&h);
    h = if branch(&h) { keccak512(&h) } else { jh512(&h) };

    let mut out = [0u8; 32];
    out.copy_from_slice(&h[..32]);
    out
}
