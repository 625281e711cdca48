//! Element fixtures stored in the benchmarked sequences.
//!
//! Two families: plain fixed-size payloads (bit-copyable, no owned
//! resources) at 8/32/128/1024/4096 bytes, and a heavy variant owning a
//! heap-backed string (expensive to clone, cheap to move). Ordering is total
//! and defined solely by the identity field.

use std::cmp::Ordering;

/// Payload stored in a benchmarked sequence.
///
/// The identity field drives every search, ordering, and sort predicate;
/// the rest of the payload is opaque ballast.
pub trait Element: Clone + Default + Ord {
    /// Identity value of this element.
    fn ident(&self) -> u64;
    /// Builds an element carrying `ident`.
    fn with_ident(ident: u64) -> Self;
}

macro_rules! pod_element {
    ($(#[$meta:meta])* $name:ident, $bytes:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name {
            /// Identity field; the only observable state.
            pub a: u64,
            pad: [u8; $bytes - 8],
        }

        impl Default for $name {
            fn default() -> Self {
                Self { a: 0, pad: [0; $bytes - 8] }
            }
        }

        impl Element for $name {
            fn ident(&self) -> u64 {
                self.a
            }

            fn with_ident(ident: u64) -> Self {
                Self { a: ident, pad: [0; $bytes - 8] }
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.a == other.a
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.a.cmp(&other.a)
            }
        }

        const _: () = assert!(std::mem::size_of::<$name>() == $bytes);
    };
}

pod_element!(
    /// 8-byte plain payload: the identity field alone.
    Pod8,
    8
);
pod_element!(
    /// 32-byte plain payload.
    Pod32,
    32
);
pod_element!(
    /// 128-byte plain payload.
    Pod128,
    128
);
pod_element!(
    /// 1 KiB plain payload.
    Pod1024,
    1024
);
pod_element!(
    /// 4 KiB plain payload.
    Pod4096,
    4096
);

/// Long enough to defeat small-string optimizations; every `Heavy` owns a
/// heap allocation of this text.
const HEAVY_TEXT: &str = "a deliberately long heap-backed payload that keeps clones expensive";

/// Heavy payload owning a heap-backed string.
///
/// Cloning duplicates the buffer (expensive); moving transfers ownership of
/// it (cheap). That asymmetry is part of what the harness measures.
#[derive(Clone, Debug)]
pub struct Heavy {
    /// Identity field; the only state observed by predicates.
    pub a: u64,
    text: String,
}

impl Default for Heavy {
    fn default() -> Self {
        Self { a: 0, text: HEAVY_TEXT.to_owned() }
    }
}

impl Element for Heavy {
    fn ident(&self) -> u64 {
        self.a
    }

    fn with_ident(ident: u64) -> Self {
        Self { a: ident, text: HEAVY_TEXT.to_owned() }
    }
}

impl PartialEq for Heavy {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a
    }
}

impl Eq for Heavy {}

impl PartialOrd for Heavy {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Heavy {
    fn cmp(&self, other: &Self) -> Ordering {
        self.a.cmp(&other.a)
    }
}
