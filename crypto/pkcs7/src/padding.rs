/*!
    PKCS#7 padding (RFC 5652, section 6.3).

    Padded layout:

      [ payload ][ n ][ n ] ... [ n ]    (n bytes, each with value n)

    `n` is in `1..=block_size`. A payload that is already block-aligned
    (including the empty payload) gets a full extra block of padding.
*/
use crate::error::{InvalidPaddedInput, PaddingError, PaddingResult};
use crate::types::BlockSize;

/**
    Pad `data` to a multiple of `block_size`, taking ownership of the buffer.

    The padding is appended in place. Spare capacity in `data` is reused,
    so the returned vector may share the original allocation; since the
    buffer is moved in, the caller can never observe it half-padded.
    Clone first if the unpadded buffer is still needed, or use
    [`pad_slice`].
*/
pub fn pad(mut data: Vec<u8>, block_size: usize) -> PaddingResult<Vec<u8>> {
    pad_in_place(&mut data, block_size)?;
    Ok(data)
}

/**
    Pad `data` in place to a multiple of `block_size`.

    On error the buffer is left untouched.
*/
pub fn pad_in_place(data: &mut Vec<u8>, block_size: usize) -> PaddingResult<()> {
    let block_size = BlockSize::new(block_size)?;
    let n = block_size.padding_len(data.len());
    data.resize(data.len() + n as usize, n);
    Ok(())
}

/**
    Pad a borrowed slice into a freshly allocated buffer.
*/
pub fn pad_slice(data: &[u8], block_size: usize) -> PaddingResult<Vec<u8>> {
    let block_size = BlockSize::new(block_size)?;
    let n = block_size.padding_len(data.len());
    let mut out = Vec::with_capacity(data.len() + n as usize);
    out.extend_from_slice(data);
    out.resize(data.len() + n as usize, n);
    Ok(out)
}

/**
    Remove PKCS#7 padding from `data`.

    Checks run in a fixed order and the first failure wins:
      1. block size outside `1..=255`       -> InvalidBlockSize
      2. empty input                        -> EmptyInput
      3. length not a multiple of the block -> NotFullBlocks
      4. count byte larger than the block   -> BadPadding
      5. count byte larger than the input   -> BadPadding
      6. any trailing byte != count byte    -> BadPadding

    Returns a view into `data` without the padding; nothing is copied.

    The byte comparison is not constant-time, and the error kinds are
    distinguishable. See [`unpad_opaque`] for untrusted input.
*/
pub fn unpad(data: &[u8], block_size: usize) -> PaddingResult<&[u8]> {
    let len = unpadded_len(data, block_size)?;
    Ok(&data[..len])
}

/**
    Remove PKCS#7 padding from an owned buffer by truncating it.

    Performs the same checks as [`unpad`]. The allocation is kept as is.
*/
pub fn unpad_vec(mut data: Vec<u8>, block_size: usize) -> PaddingResult<Vec<u8>> {
    let len = unpadded_len(&data, block_size)?;
    data.truncate(len);
    Ok(data)
}

/**
    Like [`unpad`], but every failure is reported as the same
    [`InvalidPaddedInput`], so a remote peer cannot use the error to
    learn whether the padding was valid.
*/
pub fn unpad_opaque(data: &[u8], block_size: usize) -> Result<&[u8], InvalidPaddedInput> {
    Ok(unpad(data, block_size)?)
}

/**
    Validate the padding of `data` and return the length of the payload.
*/
pub fn unpadded_len(data: &[u8], block_size: usize) -> PaddingResult<usize> {
    let block_size = BlockSize::new(block_size)?;

    let Some(&last) = data.last() else {
        return Err(PaddingError::EmptyInput);
    };

    if !data.len().is_multiple_of(block_size.get()) {
        return Err(PaddingError::NotFullBlocks);
    }

    let count = last as usize;
    if count > block_size.get() || count > data.len() {
        return Err(PaddingError::BadPadding);
    }

    let pos = data.len() - count;
    if data[pos..].iter().any(|&b| b != last) {
        return Err(PaddingError::BadPadding);
    }

    Ok(pos)
}
