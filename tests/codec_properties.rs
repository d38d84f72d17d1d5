#![cfg(feature = "url_encoding")]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use webutil::char_class::should_url_encode;
use webutil::hex::{decode_hex, encode_hex, hex_string};
use webutil::url_encoding::{percent_decode, percent_encode};
use webutil::DecodeError;

fn random_buffers(seed: u64) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..200)
        .map(|_| {
            let len = rng.random_range(0..64);
            (0..len).map(|_| rng.random::<u8>()).collect()
        })
        .collect()
}

#[test]
fn percent_encoding_round_trips() {
    for bytes in random_buffers(7) {
        let encoded = percent_encode(&bytes);
        assert_eq!(percent_decode(&encoded).unwrap(), bytes, "encoded {:?}", encoded);
    }
}

#[test]
fn percent_encoding_round_trips_every_byte() {
    let all: Vec<u8> = (0..=255).collect();
    assert_eq!(percent_decode(&percent_encode(&all)).unwrap(), all);
}

#[test]
fn encoded_output_is_safe_ascii() {
    for bytes in random_buffers(11) {
        for b in percent_encode(&bytes) {
            assert!(b == b'%' || !should_url_encode(b), "unsafe byte {b:#04x} in output");
        }
    }
}

#[test]
fn safe_bytes_are_untouched() {
    let safe: Vec<u8> = (0u8..=255).filter(|b| !should_url_encode(*b)).collect();
    assert_eq!(percent_encode(&safe), safe);
    assert_eq!(percent_encode(&percent_encode(&safe)), safe);
}

#[test]
fn malformed_escapes_fail() {
    for input in [&b"%"[..], &b"%1"[..], &b"%1G"[..], &b"%G1"[..], &b"abc%"[..], &b"%%"[..]] {
        assert!(percent_decode(input).is_err(), "{:?} should not decode", input);
    }
}

#[test]
fn hex_round_trips() {
    for bytes in random_buffers(13) {
        let concatenated: String = bytes.iter().map(|b| hex_string(*b)).collect();
        assert_eq!(concatenated, encode_hex(&bytes));
        assert_eq!(decode_hex(&concatenated).unwrap(), bytes);
        assert_eq!(decode_hex(&concatenated.to_lowercase()).unwrap(), bytes);
    }
}

#[test]
fn odd_hex_fails() {
    assert_eq!(decode_hex("0"), Err(DecodeError::OddLength { len: 1 }));
}
