//! FIPS-197 and published key-schedule vectors.

use rijndael::{checked, decrypt_block, encrypt_block, expand_key, Aes128, Aes128Key, Block};

fn block(hex_str: &str) -> Block {
    hex::decode(hex_str)
        .expect("valid hex")
        .try_into()
        .expect("16 bytes")
}

fn key(hex_str: &str) -> Aes128Key {
    hex_str.parse().expect("valid key")
}

const ZERO_KEY_SCHEDULE: [&str; 11] = [
    "00000000000000000000000000000000",
    "62636363626363636263636362636363",
    "9b9898c9f9fbfbaa9b9898c9f9fbfbaa",
    "90973450696ccffaf2f457330b0fac99",
    "ee06da7b876a1581759e42b27e91ee2b",
    "7f2e2b88f8443e098dda7cbbf34b9290",
    "ec614b851425758c99ff09376ab49ba7",
    "217517873550620bacaf6b3cc61bf09b",
    "0ef903333ba9613897060a04511dfa9f",
    "b1d4d8e28a7db9da1d7bb3de4c664941",
    "b4ef5bcb3e92e21123e951cf6f8f188e",
];

#[test]
fn all_zero_key_schedule() {
    let round_keys = expand_key(&Aes128Key::from([0u8; 16]));
    for (round, expected) in ZERO_KEY_SCHEDULE.iter().enumerate() {
        assert_eq!(round_keys.get(round), &block(expected), "round key {round}");
    }
}

#[test]
fn appendix_a1_key_expansion() {
    let round_keys = expand_key(&key("2b7e151628aed2a6abf7158809cf4f3c"));
    assert_eq!(
        round_keys.get(0),
        &block("2b7e151628aed2a6abf7158809cf4f3c")
    );
    assert_eq!(
        round_keys.get(1),
        &block("a0fafe1788542cb123a339392a6c7605")
    );
    assert_eq!(
        round_keys.get(10),
        &block("d014f9a8c9ee2589e13f0cc8b6630ca6")
    );
}

#[test]
fn flattened_schedule_matches_round_keys() {
    let k = key("2b7e151628aed2a6abf7158809cf4f3c");
    let flat = checked::expand_key(&k.0).expect("16-byte key");
    let round_keys = expand_key(&k);
    for (round, chunk) in flat.chunks_exact(16).enumerate() {
        assert_eq!(chunk, round_keys.get(round));
    }
}

#[test]
fn appendix_b_cipher_example() {
    let round_keys = expand_key(&key("2b7e151628aed2a6abf7158809cf4f3c"));
    let plaintext = block("3243f6a8885a308d313198a2e0370734");
    let ciphertext = block("3925841d02dc09fbdc118597196a0b32");
    assert_eq!(encrypt_block(&plaintext, &round_keys), ciphertext);
    assert_eq!(decrypt_block(&ciphertext, &round_keys), plaintext);
}

#[test]
fn appendix_c1_aes128() {
    let k = key("000102030405060708090a0b0c0d0e0f");
    let plaintext = block("00112233445566778899aabbccddeeff");
    let ciphertext = block("69c4e0d86a7b0430d8cdb78070b4c55a");

    assert_eq!(
        checked::aes_encrypt_block(&plaintext, &k.0).expect("encrypt"),
        ciphertext
    );
    assert_eq!(
        checked::aes_decrypt_block(&ciphertext, &k.0).expect("decrypt"),
        plaintext
    );

    let cipher = Aes128::new(&k);
    let mut data = plaintext;
    cipher.encrypt_block(&mut data);
    assert_eq!(data, ciphertext);
    cipher.decrypt_block(&mut data);
    assert_eq!(data, plaintext);
}

#[test]
fn zero_key_zero_block() {
    let round_keys = expand_key(&Aes128Key::from([0u8; 16]));
    assert_eq!(
        encrypt_block(&[0u8; 16], &round_keys),
        block("66e94bd4ef8a2c3b884cfa59ca342b2e")
    );
}
