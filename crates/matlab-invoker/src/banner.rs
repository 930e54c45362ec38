//! Banner and prompt stripping
//!
//! MATLAB prints a startup banner before the evaluated output and a prompt
//! after it. Both are assumed to have a fixed byte length, which varies with
//! MATLAB version, locale and flags, so the offsets are configurable.

use crate::error::InvokerError;
use crate::Result;
use serde::Serialize;

/// Bytes printed before the evaluated output.
pub const DEFAULT_BANNER_HEAD: usize = 343;

/// Bytes printed after the evaluated output.
pub const DEFAULT_BANNER_TAIL: usize = 7;

/// Number of bytes to drop from each end of the captured stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BannerTrim {
    /// Leading bytes to drop
    pub head: usize,
    /// Trailing bytes to drop
    pub tail: usize,
}

impl Default for BannerTrim {
    fn default() -> Self {
        BannerTrim {
            head: DEFAULT_BANNER_HEAD,
            tail: DEFAULT_BANNER_TAIL,
        }
    }
}

impl BannerTrim {
    pub fn new(head: usize, tail: usize) -> Self {
        BannerTrim { head, tail }
    }

    /// Keep the output untouched
    pub fn none() -> Self {
        BannerTrim { head: 0, tail: 0 }
    }

    /// Minimum stdout length the trim accepts
    pub fn required_len(&self) -> usize {
        self.head.saturating_add(self.tail)
    }

    /// Slice `output[head..len - tail]`.
    ///
    /// Output of exactly `head + tail` bytes yields an empty slice; anything
    /// shorter is an error.
    pub fn strip<'a>(&self, output: &'a [u8]) -> Result<&'a [u8]> {
        let required = self.required_len();
        if output.len() < required {
            return Err(InvokerError::OutputTooShort {
                len: output.len(),
                required,
            });
        }
        Ok(&output[self.head..output.len() - self.tail])
    }
}
