//! The hash functions
//!
//! Each function must reproduce the legacy numeric results exactly, down
//! to the arithmetic width and signedness of the clients it interoperates
//! with. The distributive hashes (FNV, MySQL, ELF, RS, Lua) fold over
//! UTF-16 code units; CRC, Ketama and one-at-a-time digest UTF-8 bytes.
//! Where a reference computes in 64-bit signed arithmetic, an `i64`
//! accumulator is used so arithmetic right shifts and sign extension come
//! out identical.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use md5::{Digest, Md5};

const FNV_64_INIT: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_64_PRIME: u64 = 0x0000_0100_0000_01b3;

const FNV_32_INIT: u32 = 2_166_136_261;
const FNV_32_PRIME: u32 = 16_777_619;

const RS_A: i32 = 63_689;
const RS_B: i32 = 378_551;

/// Platform string hash, truncated to 32 bits. Process-local only.
pub fn native_hash(key: &str) -> u32 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish() as u32
}

/// CRC32 (IEEE) of the UTF-8 bytes, folded to 15 bits
pub fn crc_hash(key: &str) -> u32 {
    (crc32fast::hash(key.as_bytes()) >> 16) & 0x7fff
}

/// FNV-1 with 64-bit arithmetic, truncated to 32 bits
pub fn fnv1_64_hash(key: &str) -> u32 {
    let mut hash = FNV_64_INIT;
    for unit in key.encode_utf16() {
        hash = hash.wrapping_mul(FNV_64_PRIME) ^ u64::from(unit);
    }
    hash as u32
}

/// FNV-1a with 64-bit arithmetic, truncated to 32 bits
pub fn fnv1a_64_hash(key: &str) -> u32 {
    let mut hash = FNV_64_INIT;
    for unit in key.encode_utf16() {
        hash = (hash ^ u64::from(unit)).wrapping_mul(FNV_64_PRIME);
    }
    hash as u32
}

/// FNV-1 with 32-bit arithmetic
pub fn fnv1_32_hash(key: &str) -> u32 {
    let mut hash = FNV_32_INIT;
    for unit in key.encode_utf16() {
        hash = hash.wrapping_mul(FNV_32_PRIME) ^ u32::from(unit);
    }
    hash
}

/// FNV-1a with 32-bit arithmetic
pub fn fnv1a_32_hash(key: &str) -> u32 {
    let mut hash = FNV_32_INIT;
    for unit in key.encode_utf16() {
        hash = (hash ^ u32::from(unit)).wrapping_mul(FNV_32_PRIME);
    }
    hash
}

/// First four MD5 digest bytes of the UTF-8 key, read little-endian
///
/// A fresh digest instance per call: MD5 over key-sized input is cheap,
/// and there is no shared digest state to synchronize.
pub fn ketama_hash(key: &str) -> u32 {
    let digest = Md5::digest(key.as_bytes());
    u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]])
}

/// MySQL's legacy string hash
pub fn mysql_hash(key: &str) -> u32 {
    let mut hash: u64 = 0;
    let mut nr2: u64 = 4;
    for unit in key.encode_utf16() {
        hash ^= ((hash & 63) + nr2)
            .wrapping_mul(u64::from(unit))
            .wrapping_add(hash << 8);
        nr2 += 3;
    }
    hash as u32
}

/// Classic ELF symbol hash, carried in 64-bit, folded to 31 bits
pub fn elf_hash(key: &str) -> u32 {
    let mut hash: u64 = 0;
    for unit in key.encode_utf16() {
        hash = (hash << 4).wrapping_add(u64::from(unit));
        let high = hash & 0xf000_0000;
        if high != 0 {
            hash = (hash ^ (high >> 24)) & !high;
        }
    }
    (hash & 0x7fff_ffff) as u32
}

/// Robert Sedgwick's multiplicative hash, folded to 31 bits
///
/// The multiplier wraps as a signed 32-bit value and is sign-extended
/// into the 64-bit accumulator on each step.
pub fn rs_hash(key: &str) -> u32 {
    let mut hash: i64 = 0;
    let mut a = RS_A;
    for unit in key.encode_utf16() {
        hash = hash.wrapping_mul(i64::from(a)).wrapping_add(i64::from(unit));
        a = a.wrapping_mul(RS_B);
    }
    (hash & 0x7fff_ffff) as u32
}

/// Lua's sampling string hash
///
/// Long keys are sampled from the tail at a stride derived from the
/// length, so cost stays bounded; the seed is the length itself.
pub fn lua_hash(key: &str) -> u32 {
    let units: Vec<u16> = key.encode_utf16().collect();
    let step = (units.len() >> 5) + 1;
    let mut hash = units.len() as i64;
    let mut len = units.len();
    while len >= step {
        hash ^= (hash << 5)
            .wrapping_add(hash >> 2)
            .wrapping_add(i64::from(units[len - 1]));
        len -= step;
    }
    hash as u32
}

/// Jenkins one-at-a-time over the UTF-8 bytes
pub fn one_at_a_time_hash(key: &str) -> u32 {
    let mut hash: u32 = 0;
    for byte in key.bytes() {
        hash = hash.wrapping_add(u32::from(byte));
        hash = hash.wrapping_add(hash << 10);
        hash ^= hash >> 6;
    }
    hash = hash.wrapping_add(hash << 3);
    hash ^= hash >> 11;
    hash.wrapping_add(hash << 15)
}
