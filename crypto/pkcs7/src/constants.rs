/**
    Smallest block size accepted by the codec.
*/
pub const MIN_BLOCK_SIZE: usize = 1;

/**
    Largest block size accepted by the codec.

    Every padding byte stores the padding count, so the count
    (and therefore the block size) must fit in a single byte.
*/
pub const MAX_BLOCK_SIZE: usize = u8::MAX as usize;

/**
    AES block size in bytes (all key lengths).
*/
pub const AES_BLOCK_SIZE: usize = 16;

/**
    DES / 3DES block size in bytes.
*/
pub const DES_BLOCK_SIZE: usize = 8;
