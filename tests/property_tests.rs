//! Property-based tests using proptest
//!
//! Validates codec invariants across randomly generated inputs:
//! determinism, round-trip fidelity, and byte-stability of numeric
//! canonicalization.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;
use xrpl_binary_codec::{decode, encode, FieldRegistry};

// Property: encoding is deterministic — same input, same bytes.
proptest! {
    #[test]
    fn prop_encode_deterministic(seq in any::<u32>(), flags in any::<u32>()) {
        let registry = FieldRegistry::new();
        let tx = serde_json::json!({ "Sequence": seq, "Flags": flags });
        let a = encode(&registry, &tx).expect("encode");
        let b = encode(&registry, &tx).expect("encode again");
        prop_assert_eq!(a, b);
    }
}

// Property: uint fields survive the round trip unchanged.
proptest! {
    #[test]
    fn prop_uint_round_trip(seq in any::<u32>(), result in any::<u8>(), kind in any::<u16>()) {
        let registry = FieldRegistry::new();
        let tx = serde_json::json!({
            "Sequence": seq,
            "TransactionResult": result,
            "TransactionType": kind,
        });
        let bytes = encode(&registry, &tx).expect("encode");
        let back = decode(&registry, &bytes).expect("decode");
        prop_assert_eq!(back, tx);
    }
}

// Property: blobs of arbitrary content and length round-trip through the
// VL wrapping.
proptest! {
    #[test]
    fn prop_blob_round_trip(payload in prop::collection::vec(any::<u8>(), 0..4096)) {
        let registry = FieldRegistry::new();
        let tx = serde_json::json!({ "MemoData": hex::encode_upper(&payload) });
        let bytes = encode(&registry, &tx).expect("encode");
        let back = decode(&registry, &bytes).expect("decode");
        prop_assert_eq!(back, tx);
    }
}

// Property: every in-range (mantissa, exponent) pair encodes to bytes that
// are stable under decode-then-re-encode, even when the printed form
// differs from the input.
proptest! {
    #[test]
    fn prop_number_byte_stable(
        magnitude in 1i64..=9_999_999_999_999_999,
        exponent in -60i32..=60,
        negative in any::<bool>(),
    ) {
        let registry = FieldRegistry::new();
        let sign = if negative { "-" } else { "" };
        let input = format!("{sign}{magnitude}e{exponent}");
        let tx = serde_json::json!({ "Number": input });

        let first = encode(&registry, &tx).expect("first encode");
        let text = decode(&registry, &first).expect("decode")["Number"]
            .as_str()
            .expect("string")
            .to_string();
        let second = encode(&registry, &serde_json::json!({ "Number": text }))
            .expect("second encode");
        prop_assert_eq!(first, second, "drifted via {}", text);
    }
}

// Property: native amounts below the supply cap round-trip as the same
// decimal string.
proptest! {
    #[test]
    fn prop_native_amount_round_trip(drops in 0u64..100_000_000_000_000_000) {
        let registry = FieldRegistry::new();
        let tx = serde_json::json!({ "Amount": drops.to_string() });
        let bytes = encode(&registry, &tx).expect("encode");
        let back = decode(&registry, &bytes).expect("decode");
        prop_assert_eq!(back, tx);
    }
}

// Property: account identifiers round-trip bit-exactly.
proptest! {
    #[test]
    fn prop_account_round_trip(id in prop::array::uniform20(any::<u8>())) {
        let registry = FieldRegistry::new();
        let tx = serde_json::json!({ "Account": hex::encode_upper(id) });
        let bytes = encode(&registry, &tx).expect("encode");
        let back = decode(&registry, &bytes).expect("decode");
        prop_assert_eq!(back, tx);
    }
}
