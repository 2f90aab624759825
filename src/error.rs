#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Error {
    #[error("Field (begin: {begin}, size: {size}) is out of bounds for a buffer of {capacity} bits")]
    OutOfBounds {
        begin: usize,
        size: usize,
        capacity: usize,
    },

    #[error("Field size '{size}' exceeds 64 bits")]
    FieldTooWide { size: usize },

    #[error("Record length '{len}' is invalid (expected: 8 bytes)")]
    RecordLength { len: usize },
}
