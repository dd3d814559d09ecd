use core::fmt;
use core::num::NonZeroU8;

use crate::constants::{AES_BLOCK_SIZE, MAX_BLOCK_SIZE, MIN_BLOCK_SIZE};
use crate::error::{PaddingError, PaddingResult};

/**
    A validated PKCS#7 block size, `1..=255` bytes.

    The padding count is stored in each padding byte, so the block size
    shares the range of a non-zero `u8`.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockSize(NonZeroU8);

impl BlockSize {
    /**
        16-byte blocks, as used by every AES variant.
    */
    pub const AES: Self = match Self::from_usize(AES_BLOCK_SIZE) {
        Some(size) => size,
        None => unreachable!(),
    };

    /**
        Validate a block size.

        Returns `PaddingError::InvalidBlockSize` unless `1 <= size <= 255`.
    */
    pub const fn new(size: usize) -> PaddingResult<Self> {
        match Self::from_usize(size) {
            Some(size) => Ok(size),
            None => Err(PaddingError::InvalidBlockSize(size)),
        }
    }

    const fn from_usize(size: usize) -> Option<Self> {
        if size < MIN_BLOCK_SIZE || size > MAX_BLOCK_SIZE {
            return None;
        }
        match NonZeroU8::new(size as u8) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    pub const fn get(self) -> usize {
        self.0.get() as usize
    }

    pub const fn to_u8(self) -> u8 {
        self.0.get()
    }

    /**
        Number of padding bytes appended to a payload of `len` bytes.

        Always in `1..=block_size`; a block-aligned payload gets a full block.
    */
    pub const fn padding_len(self, len: usize) -> u8 {
        // Result is in 1..=255, so the cast is lossless.
        (self.get() - len % self.get()) as u8
    }

    /**
        Total length of a payload of `len` bytes after padding.
    */
    pub const fn padded_len(self, len: usize) -> usize {
        len + self.padding_len(len) as usize
    }
}

impl TryFrom<usize> for BlockSize {
    type Error = PaddingError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<NonZeroU8> for BlockSize {
    fn from(n: NonZeroU8) -> Self {
        Self(n)
    }
}

impl From<BlockSize> for usize {
    fn from(size: BlockSize) -> Self {
        size.get()
    }
}

impl fmt::Display for BlockSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
