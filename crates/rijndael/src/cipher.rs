//! AES-128 key schedule and block encryption/decryption.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Block;
use crate::key::{Aes128Key, RoundKeys, ROUND_KEY_COUNT};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::{sbox, RCON};

/// Words in the expanded schedule (4 per round key).
const SCHEDULE_WORDS: usize = 4 * ROUND_KEY_COUNT;

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [0u32; SCHEDULE_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.0.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in 4..SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / 4]) << 24);
        }
        w[i] = w[i - 4] ^ temp;
    }

    let mut round_keys = RoundKeys([[0u8; 16]; ROUND_KEY_COUNT]);
    for (round_key, words) in round_keys.0.iter_mut().zip(w.chunks_exact(4)) {
        for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
            dst.copy_from_slice(&word.to_be_bytes());
        }
    }
    w.zeroize();

    round_keys
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..10 {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(10));

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(10));
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);

    for round in (1..10).rev() {
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
    }

    add_round_key(&mut state, round_keys.get(0));

    state
}

/// AES-128 cipher context: expands the key once and reuses the schedule.
///
/// The schedule is immutable after construction, so a context can be shared
/// by reference across threads, each thread working on its own blocks. The
/// schedule is wiped when the context is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Expands `key` into a new context.
    pub fn new(key: &Aes128Key) -> Self {
        let round_keys = expand_key(key);
        tracing::trace!(rounds = ROUND_KEY_COUNT, "expanded AES-128 key schedule");
        Self { round_keys }
    }

    /// The expanded schedule.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts one block in place.
    #[inline]
    pub fn encrypt_block(&self, block: &mut Block) {
        *block = encrypt_block(block, &self.round_keys);
    }

    /// Decrypts one block in place.
    #[inline]
    pub fn decrypt_block(&self, block: &mut Block) {
        *block = decrypt_block(block, &self.round_keys);
    }

    /// Encrypts each block independently (no chaining between blocks).
    pub fn encrypt_blocks(&self, blocks: &mut [Block]) {
        for block in blocks {
            self.encrypt_block(block);
        }
    }

    /// Decrypts each block independently (no chaining between blocks).
    pub fn decrypt_blocks(&self, blocks: &mut [Block]) {
        for block in blocks {
            self.decrypt_block(block);
        }
    }
}

impl From<Aes128Key> for Aes128 {
    fn from(key: Aes128Key) -> Self {
        Self::new(&key)
    }
}

impl core::fmt::Debug for Aes128 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Aes128").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn random_key_and_blocks(seed: u8, count: usize) -> (Aes128Key, Vec<Block>) {
        let mut rng = ChaCha20Rng::from_seed([seed; 32]);
        let mut key = [0u8; 16];
        rng.fill_bytes(&mut key);
        let blocks = (0..count)
            .map(|_| {
                let mut block = [0u8; 16];
                rng.fill_bytes(&mut block);
                block
            })
            .collect();
        (Aes128Key::from(key), blocks)
    }

    #[test]
    fn first_round_key_is_the_key() {
        let (key, _) = random_key_and_blocks(1, 0);
        assert_eq!(expand_key(&key).get(0), &key.0);
    }

    #[test]
    fn context_matches_free_functions() {
        let (key, mut blocks) = random_key_and_blocks(2, 8);
        let plaintexts = blocks.clone();
        let round_keys = expand_key(&key);
        let cipher = Aes128::new(&key);
        assert_eq!(cipher.round_keys(), &round_keys);

        cipher.encrypt_blocks(&mut blocks);
        for (ct, pt) in blocks.iter().zip(&plaintexts) {
            assert_eq!(*ct, encrypt_block(pt, &round_keys));
        }
        cipher.decrypt_blocks(&mut blocks);
        assert_eq!(blocks, plaintexts);
    }

    #[test]
    fn context_is_shareable_across_threads() {
        let (key, blocks) = random_key_and_blocks(3, 4);
        let round_keys = expand_key(&key);
        let cipher = Aes128::from(key);
        std::thread::scope(|scope| {
            for block in &blocks {
                let cipher = &cipher;
                let round_keys = &round_keys;
                scope.spawn(move || {
                    let mut data = *block;
                    cipher.encrypt_block(&mut data);
                    assert_eq!(data, encrypt_block(block, round_keys));
                });
            }
        });
    }

    #[test]
    fn decrypt_inverts_encrypt_for_seeded_keys() {
        let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
        for _ in 0..100 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let round_keys = expand_key(&Aes128Key::from(key_bytes));
            let ciphertext = encrypt_block(&block, &round_keys);
            assert_eq!(decrypt_block(&ciphertext, &round_keys), block);
        }
    }

    #[test]
    fn context_schedule_can_be_wiped() {
        let (key, _) = random_key_and_blocks(5, 0);
        let mut cipher = Aes128::new(&key);
        cipher.zeroize();
        assert_eq!(cipher.round_keys().as_bytes(), [0u8; 176]);
    }
}
