use rand::Rng;
use ztrip::{round_trip_check, verify, ZtripError};

#[test]
fn empty_input_round_trips() {
    round_trip_check(&[]).unwrap();
}

#[test]
fn text_round_trips() {
    let data = b"the quick brown fox jumps over the lazy dog. ".repeat(200);
    round_trip_check(&data).unwrap();
}

#[test]
fn incompressible_1mib_round_trips() {
    let mut rng = rand::thread_rng();
    let data: Vec<u8> = (0..1 << 20).map(|_| rng.gen()).collect();
    round_trip_check(&data).unwrap();
}

#[test]
fn highly_compressible_round_trips() {
    round_trip_check(&vec![0u8; 1 << 20]).unwrap();
}

#[test]
fn bound_holds_across_sizes() {
    // Random payloads compress worst; the bound-sized buffer must still be
    // enough at every size, from empty up past the block size.
    let mut rng = rand::thread_rng();
    for len in [0usize, 1, 2, 63, 64, 65, 4096, 1 << 17, (1 << 18) + 7] {
        let data: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        round_trip_check(&data).unwrap();
    }
}

#[test]
fn flipped_byte_is_silent_corruption() {
    let original = b"abcdefgh".to_vec();
    let mut mutated = original.clone();
    mutated[3] ^= 0x10;
    let err = verify(&original, &mutated).unwrap_err();
    assert!(matches!(err, ZtripError::Corruption { offset: 3 }));
    assert!(err.to_string().contains("Silent decoding corruption"));
}

#[test]
fn length_mismatch_is_regenerated_size_error() {
    let err = verify(b"abcd", b"abc").unwrap_err();
    assert!(matches!(
        err,
        ZtripError::RegeneratedSize {
            got: 3,
            expected: 4
        }
    ));
}

#[test]
fn identical_buffers_verify() {
    verify(b"same bytes", b"same bytes").unwrap();
    verify(&[], &[]).unwrap();
}
