//! Capability flags that select optional configuration sections.
//!
//! Responsibilities:
//! - Define the fixed set of capability flags as bitflags.
//! - Derive the capability set compiled into this binary from Cargo features.
//!
//! Does NOT handle:
//! - Mapping capabilities to sections (see `sections.rs` and `builder.rs`).
//!
//! Invariants:
//! - `Capabilities::compiled()` is a constant of the build; nothing at runtime changes it.

use std::fmt;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u8 {
        /// Relational store connection (`postgres` section).
        const RELATIONAL_STORE = 1 << 0;
        /// Event stream connection (`kafka` section).
        const EVENT_STREAM = 1 << 1;
        /// RPC endpoint (`endpoints.grpc` section).
        const RPC_ENDPOINT = 1 << 2;
    }
}

impl Capabilities {
    /// Capability set selected by the Cargo features of this build.
    pub const fn compiled() -> Self {
        let mut bits = 0;
        if cfg!(feature = "postgres") {
            bits |= Self::RELATIONAL_STORE.bits();
        }
        if cfg!(feature = "kafka") {
            bits |= Self::EVENT_STREAM.bits();
        }
        if cfg!(feature = "grpc") {
            bits |= Self::RPC_ENDPOINT.bits();
        }
        Self::from_bits_truncate(bits)
    }

    /// Stable, human-readable name of a single capability flag.
    pub fn label(self) -> &'static str {
        if self == Self::RELATIONAL_STORE {
            "relational-store"
        } else if self == Self::EVENT_STREAM {
            "event-stream"
        } else if self == Self::RPC_ENDPOINT {
            "rpc-endpoint"
        } else {
            "mixed"
        }
    }

    /// Labels of every enabled flag, in declaration order.
    pub fn labels(self) -> Vec<&'static str> {
        self.iter().map(Capabilities::label).collect()
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        f.write_str(&self.labels().join(", "))
    }
}
