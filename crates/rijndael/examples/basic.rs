//! Encrypts and decrypts the FIPS-197 example block through each API layer.

use rijndael::{checked, Aes128, Aes128Key};

fn main() -> Result<(), rijndael::Error> {
    let key: Aes128Key = "000102030405060708090a0b0c0d0e0f".parse()?;
    let plaintext = *b"\x00\x11\x22\x33\x44\x55\x66\x77\x88\x99\xaa\xbb\xcc\xdd\xee\xff";

    let cipher = Aes128::new(&key);
    let mut block = plaintext;
    cipher.encrypt_block(&mut block);
    println!("ciphertext: {}", hex::encode(block));

    // The slice surface validates lengths and must agree with the context.
    let via_slices = checked::aes_encrypt_block(&plaintext, &key.0)?;
    assert_eq!(via_slices, block);

    cipher.decrypt_block(&mut block);
    assert_eq!(block, plaintext);
    println!("example succeeded; round trip restored the plaintext");
    Ok(())
}
