//! Fuzz target for length-prefixed block reads.
//!
//! ## Running
//!
//! ```bash
//! cd crates/state-proof
//! cargo +nightly fuzz run fuzz_length_prefixed_block
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use state_proof::{BinaryCursor, LengthField};

/// Fuzz input structure for block reads.
#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    int_field: bool,
    max_length: u16,
    include_field_size: bool,
    data: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let field = if input.int_field {
        LengthField::Int
    } else {
        LengthField::Byte
    };
    let max_length = usize::from(input.max_length);
    let mut cursor = BinaryCursor::new(&input.data);

    match cursor.read_length_prefixed_block(field, max_length, input.include_field_size) {
        Ok((consumed, bytes)) => {
            assert!(bytes.len() <= max_length);
            assert_eq!(cursor.position(), field.size() + bytes.len());
            let expected = if input.include_field_size {
                field.size() + bytes.len()
            } else {
                bytes.len()
            };
            assert_eq!(consumed, expected);
        }
        // Failed reads leave the cursor untouched
        Err(_) => assert_eq!(cursor.position(), 0),
    }
});
