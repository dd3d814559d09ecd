use thiserror::Error;

use crate::constants::{MAX_BLOCK_SIZE, MIN_BLOCK_SIZE};

/**
    Errors from padding and unpadding.

    `EmptyInput`, `NotFullBlocks` and `BadPadding` depend on the input bytes.
    When the input is decrypted ciphertext that an attacker can choose,
    telling these apart to the sender is a padding oracle. Collapse them
    with [`InvalidPaddedInput`] (or [`crate::unpad_opaque`]) before the
    result crosses a trust boundary.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaddingError {
    #[error(
        "invalid block size {0} (valid sizes: {min}..={max})",
        min = MIN_BLOCK_SIZE,
        max = MAX_BLOCK_SIZE
    )]
    InvalidBlockSize(usize),

    #[error("input is empty")]
    EmptyInput,

    #[error("input is not a whole number of blocks")]
    NotFullBlocks,

    #[error("bad padding")]
    BadPadding,
}

impl PaddingError {
    /**
        Whether this error was caused by the contents of the input buffer,
        as opposed to a misconfigured block size.
    */
    pub const fn is_data_dependent(&self) -> bool {
        !matches!(self, Self::InvalidBlockSize(_))
    }
}

pub type PaddingResult<T> = std::result::Result<T, PaddingError>;

/**
    Single generic failure for unpadding untrusted input.

    Converting any [`PaddingError`] into this type drops which check failed,
    so callers can report it without leaking padding validity.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("invalid padded input")]
pub struct InvalidPaddedInput;

impl From<PaddingError> for InvalidPaddedInput {
    fn from(_: PaddingError) -> Self {
        Self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dependent_kinds() {
        assert!(!PaddingError::InvalidBlockSize(0).is_data_dependent());
        assert!(PaddingError::EmptyInput.is_data_dependent());
        assert!(PaddingError::NotFullBlocks.is_data_dependent());
        assert!(PaddingError::BadPadding.is_data_dependent());
    }

    #[test]
    fn block_size_message_names_range() {
        let msg = PaddingError::InvalidBlockSize(256).to_string();
        assert_eq!(msg, "invalid block size 256 (valid sizes: 1..=255)");
    }

    #[test]
    fn opaque_error_hides_kind() {
        let a = InvalidPaddedInput::from(PaddingError::BadPadding);
        let b = InvalidPaddedInput::from(PaddingError::NotFullBlocks);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }
}
