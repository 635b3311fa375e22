//! Sample keys for demos and smoke tests.

/// A named sample key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Short human-readable label.
    pub label: &'static str,
    /// The encoded token.
    pub token: &'static str,
}

/// Built-in sample keys.
pub const SAMPLES: &[Sample] = &[
    // id=56 Queens Road~alt_key=37822946~dataset=AUS_PAF~format_key=AUS$au-address$7.7301QAS...
    Sample {
        label: "PAF address with alt key",
        token: "aWQ9NTYgUXVlZW5zIFJvYWR-YWx0X2tleT0zNzgyMjk0Nn5kYXRhc2V0PUFVU19QQUZ-Zm9ybWF0X2tleT1BVVMkYXUtYWRkcmVzcyQ3LjczMDFRQVMyeVBCd01BQWdVQUFRRUFBQUFCYTJibkFBQUFBQUFBQURVMklGRjFaV1Z1Y3lCU2IyRmtBQUFBQUFBLQ",
    },
    // id=1 Tiwi Street, BUNDALL  QLD 4217~alt_key=GAQLD155815970~dataset=AUS_GNAF~format_key=AUS$au-address$7.7301QAS
    Sample {
        label: "GNAF address with alt key",
        token: "aWQ9MSBUaXdpIFN0cmVldCwgQlVOREFMTCAgUUxEIDQyMTd-YWx0X2tleT1HQVFMRDE1NTgxNTk3MH5kYXRhc2V0PUFVU19HTkFGfmZvcm1hdF9rZXk9QVVTJGF1LWFkZHJlc3MkNy43MzAxUUFT",
    },
    // id=Flat 3, 12 Harbour View Terrace~alt_key=~dataset=AUS_PAF~moniker=ABC123
    Sample {
        label: "Address with empty alt key",
        token: "aWQ9RmxhdCAzLCAxMiBIYXJib3VyIFZpZXcgVGVycmFjZX5hbHRfa2V5PX5kYXRhc2V0PUFVU19QQUZ-bW9uaWtlcj1BQkMxMjM",
    },
];

/// Look up a sample by its 1-based number.
pub fn sample(number: usize) -> Option<&'static Sample> {
    number.checked_sub(1).and_then(|i| SAMPLES.get(i))
}
