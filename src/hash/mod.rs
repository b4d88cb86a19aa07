//! Key hashing for cache routing
//!
//! Deterministic key → `u32` hash functions used to decide which cache
//! node owns a key. Every algorithm here reproduces its legacy numeric
//! results byte-for-byte, so heterogeneous clients hashing the same key
//! agree on its placement. The node-selection policy itself (ketama ring,
//! modulo, ...) lives in the routing layer on top of this crate; only the
//! raw per-key number is produced here.
//!
//! All algorithms are pure, total over every `&str` (including `""`), and
//! stateless; they may be called from any number of threads concurrently.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

mod algorithms;

/// A named key-hashing algorithm
///
/// The distributive algorithms fold over the key's UTF-16 code units
/// (matching the legacy clients they interoperate with); `Crc`, `Ketama`
/// and `OneAtATime` digest the key's UTF-8 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// The platform's general-purpose string hash, truncated to 32 bits.
    ///
    /// Stable only within a single process: Rust's default hasher is
    /// randomly seeded and its output differs across processes, releases
    /// and platforms. Never use this variant for cross-client routing;
    /// pick one of the portable algorithms below instead.
    Native,

    /// CRC32 (IEEE) of the UTF-8 bytes, folded to 15 bits
    Crc,

    /// FNV-1, 64-bit arithmetic, result truncated to 32 bits
    Fnv164,

    /// FNV-1a, 64-bit arithmetic, result truncated to 32 bits
    Fnv1a64,

    /// FNV-1, 32-bit arithmetic
    Fnv132,

    /// FNV-1a, 32-bit arithmetic
    Fnv1a32,

    /// First four MD5 digest bytes, read little-endian
    Ketama,

    /// MySQL's legacy string hash
    Mysql,

    /// Classic ELF symbol hash, folded to 31 bits
    Elf,

    /// Robert Sedgwick's multiplicative hash, folded to 31 bits
    Rs,

    /// Lua's sampling string hash
    Lua,

    /// Jenkins one-at-a-time over the UTF-8 bytes
    OneAtATime,
}

impl HashAlgorithm {
    /// The closed registry of every built-in algorithm
    pub const ALL: [HashAlgorithm; 12] = [
        HashAlgorithm::Native,
        HashAlgorithm::Crc,
        HashAlgorithm::Fnv164,
        HashAlgorithm::Fnv1a64,
        HashAlgorithm::Fnv132,
        HashAlgorithm::Fnv1a32,
        HashAlgorithm::Ketama,
        HashAlgorithm::Mysql,
        HashAlgorithm::Elf,
        HashAlgorithm::Rs,
        HashAlgorithm::Lua,
        HashAlgorithm::OneAtATime,
    ];

    /// Compute the routing hash of a key
    pub fn hash(self, key: &str) -> u32 {
        match self {
            HashAlgorithm::Native => algorithms::native_hash(key),
            HashAlgorithm::Crc => algorithms::crc_hash(key),
            HashAlgorithm::Fnv164 => algorithms::fnv1_64_hash(key),
            HashAlgorithm::Fnv1a64 => algorithms::fnv1a_64_hash(key),
            HashAlgorithm::Fnv132 => algorithms::fnv1_32_hash(key),
            HashAlgorithm::Fnv1a32 => algorithms::fnv1a_32_hash(key),
            HashAlgorithm::Ketama => algorithms::ketama_hash(key),
            HashAlgorithm::Mysql => algorithms::mysql_hash(key),
            HashAlgorithm::Elf => algorithms::elf_hash(key),
            HashAlgorithm::Rs => algorithms::rs_hash(key),
            HashAlgorithm::Lua => algorithms::lua_hash(key),
            HashAlgorithm::OneAtATime => algorithms::one_at_a_time_hash(key),
        }
    }

    /// Stable configuration name of this algorithm
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Native => "native",
            HashAlgorithm::Crc => "crc",
            HashAlgorithm::Fnv164 => "fnv1_64",
            HashAlgorithm::Fnv1a64 => "fnv1a_64",
            HashAlgorithm::Fnv132 => "fnv1_32",
            HashAlgorithm::Fnv1a32 => "fnv1a_32",
            HashAlgorithm::Ketama => "ketama",
            HashAlgorithm::Mysql => "mysql",
            HashAlgorithm::Elf => "elf",
            HashAlgorithm::Rs => "rs",
            HashAlgorithm::Lua => "lua",
            HashAlgorithm::OneAtATime => "one_at_a_time",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "unknown hash algorithm {name:?} (expected one of: native, crc, fnv1_64, \
     fnv1a_64, fnv1_32, fnv1a_32, ketama, mysql, elf, rs, lua, one_at_a_time)"
)]
pub struct UnknownAlgorithm {
    name: String,
}

impl FromStr for HashAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        HashAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}
