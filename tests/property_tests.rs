use proptest::prelude::*;
use ztrip::{round_trip_check, verify, ZtripError};

proptest! {
    #[test]
    fn roundtrip_random(data in any::<Vec<u8>>()) {
        prop_assert!(round_trip_check(&data).is_ok());
    }

    #[test]
    fn verify_accepts_identical(data in any::<Vec<u8>>()) {
        prop_assert!(verify(&data, &data).is_ok());
    }

    #[test]
    fn verify_detects_any_flip(
        data in proptest::collection::vec(any::<u8>(), 1..256),
        idx in any::<prop::sample::Index>(),
    ) {
        let offset = idx.index(data.len());
        let mut mutated = data.clone();
        mutated[offset] ^= 0xFF;
        match verify(&data, &mutated) {
            Err(ZtripError::Corruption { offset: reported }) => {
                prop_assert_eq!(reported, offset);
            }
            other => prop_assert!(false, "expected corruption, got {:?}", other),
        }
    }
}
