//! Order-sensitive identifier for the set of pull requests a query returned.
//!
//! The identifier is the 32-bit FNV-1a hash of the decimal numbers of the
//! included pull requests, fed in processing order with no separator. It is
//! rendered as a decimal string. An empty result hashes to the FNV offset
//! basis, `2166136261`.

use std::fmt;

use serde::{Serialize, Serializer};

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Aggregate identifier of a query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AggregateId(u32);

impl AggregateId {
    /// Raw hash value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for AggregateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for AggregateId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Running FNV-1a accumulator over included pull request numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint {
    state: u32,
}

impl Default for Fingerprint {
    fn default() -> Self {
        Self::new()
    }
}

impl Fingerprint {
    /// Starts an empty accumulator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: FNV_OFFSET_BASIS,
        }
    }

    /// Feeds raw bytes into the accumulator.
    pub fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state ^= u32::from(*byte);
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }

    /// Records an included pull request by its decimal number.
    pub fn record(&mut self, number: u64) {
        self.write(number.to_string().as_bytes());
    }

    /// Returns the identifier for everything recorded so far.
    #[must_use]
    pub const fn finish(&self) -> AggregateId {
        AggregateId(self.state)
    }
}
