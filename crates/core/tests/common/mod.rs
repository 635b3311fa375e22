//! Shared test helpers for `global_address_key` integration tests.

#![allow(unreachable_pub)]

use global_address_key::{encode, iterate_fields};

/// Payload of the "56 Queens Road" sample key.
#[allow(dead_code)]
pub const QUEENS_ROAD_PAYLOAD: &str = "id=56 Queens Road~alt_key=37822946~dataset=AUS_PAF~format_key=AUS$au-address$7.7301QAS2yPBwMAAgUAAQEAAAABa2bnAAAAAAAAADU2IFF1ZWVucyBSb2FkAAAAAAA-";

/// Encoded form of [`QUEENS_ROAD_PAYLOAD`].
#[allow(dead_code)]
pub const QUEENS_ROAD_TOKEN: &str = "aWQ9NTYgUXVlZW5zIFJvYWR-YWx0X2tleT0zNzgyMjk0Nn5kYXRhc2V0PUFVU19QQUZ-Zm9ybWF0X2tleT1BVVMkYXUtYWRkcmVzcyQ3LjczMDFRQVMyeVBCd01BQWdVQUFRRUFBQUFCYTJibkFBQUFBQUFBQURVMklGRjFaV1Z1Y3lCU2IyRmtBQUFBQUFBLQ";

/// Build a token from `(name, value)` pairs joined with `~`.
#[allow(dead_code)]
pub fn token_for(pairs: &[(&str, &str)]) -> String {
    encode(&join_pairs(pairs)).unwrap_or_else(|e| panic!("failed to encode {pairs:?}: {e}"))
}

/// Join `(name, value)` pairs into payload text.
#[allow(dead_code)]
pub fn join_pairs(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(n, v)| format!("{n}={v}"))
        .collect::<Vec<_>>()
        .join("~")
}

/// Collect `(name, value)` pairs from payload text as owned strings.
#[allow(dead_code)]
pub fn collect_pairs(text: &str) -> Vec<(String, String)> {
    iterate_fields(text)
        .map(|f| (f.name.to_string(), f.value.to_string()))
        .collect()
}

/// Deterministic LCG so property-style tests are reproducible.
#[allow(dead_code)]
pub struct SimpleRng(u64);

#[allow(dead_code)]
impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    pub fn gen_range(&mut self, max: usize) -> usize {
        ((self.next() >> 33) as usize) % max
    }

    pub fn gen_bytes(&mut self, len: usize) -> Vec<u8> {
        (0..len).map(|_| (self.next() >> 24) as u8).collect()
    }

    /// Random string drawn from `alphabet`.
    pub fn gen_from(&mut self, alphabet: &[char], len: usize) -> String {
        (0..len)
            .map(|_| alphabet[self.gen_range(alphabet.len())])
            .collect()
    }
}
