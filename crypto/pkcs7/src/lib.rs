/*!
    PKCS#7 block padding and validated unpadding.

    ```
    use crypto_pkcs7::{pad, unpad};

    let padded = pad(b"YELLOW SUBMARINE".to_vec(), 20).unwrap();
    assert_eq!(&padded[16..], &[4, 4, 4, 4]);
    assert_eq!(unpad(&padded, 20).unwrap(), b"YELLOW SUBMARINE");
    ```

    Unpadding decrypted data that an attacker controls must not reveal
    *why* it failed. Use [`unpad_opaque`] or convert errors into
    [`InvalidPaddedInput`] before reporting them.
*/
#![allow(clippy::doc_overindented_list_items)]

mod constants;
mod error;
mod padding;
mod types;

pub use self::constants::{AES_BLOCK_SIZE, DES_BLOCK_SIZE, MAX_BLOCK_SIZE, MIN_BLOCK_SIZE};
pub use self::error::{InvalidPaddedInput, PaddingError, PaddingResult};
pub use self::padding::{
    pad, pad_in_place, pad_slice, unpad, unpad_opaque, unpad_vec, unpadded_len,
};
pub use self::types::BlockSize;
