//! Command-line interface for `rijndael`.

#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael::{decrypt_block, encrypt_block, expand_key, round, Aes128Key, Block};
use tracing::{debug, info, Level};

/// AES-128 CLI.
#[derive(Parser)]
#[command(
    name = "rijndael",
    version,
    author,
    about = "AES-128 key expansion and single-block cipher"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the 11 round keys derived from a key, one per line.
    Expand {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Encrypt a single 16-byte block.
    Enc {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt a single 16-byte block.
    Dec {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Self-test against FIPS-197 vectors and random inverse-pair samples.
    Check {
        /// Number of random samples to test.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a local demo: random key and block, encrypt, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Expand { key_hex } => cmd_expand(&key_hex),
        Commands::Enc { key_hex, block_hex } => cmd_enc(&key_hex, &block_hex),
        Commands::Dec { key_hex, block_hex } => cmd_dec(&key_hex, &block_hex),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_expand(key_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let round_keys = expand_key(&key);
    for round_key in round_keys.0.iter() {
        println!("{}", hex::encode(round_key));
    }
    Ok(())
}

fn cmd_enc(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    let ciphertext = encrypt_block(&block, &expand_key(&key));
    println!("{}", hex::encode(ciphertext));
    Ok(())
}

fn cmd_dec(key_hex: &str, block_hex: &str) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let block = parse_block_hex(block_hex)?;
    let plaintext = decrypt_block(&block, &expand_key(&key));
    println!("{}", hex::encode(plaintext));
    Ok(())
}

/// FIPS-197 Appendix C.1 and Appendix B (key, plaintext, ciphertext).
const KNOWN_ANSWERS: [(&str, &str, &str); 2] = [
    (
        "000102030405060708090a0b0c0d0e0f",
        "00112233445566778899aabbccddeeff",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
    (
        "2b7e151628aed2a6abf7158809cf4f3c",
        "3243f6a8885a308d313198a2e0370734",
        "3925841d02dc09fbdc118597196a0b32",
    ),
];

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    for (key_hex, plain_hex, cipher_hex) in KNOWN_ANSWERS {
        let round_keys = expand_key(&parse_key_hex(key_hex)?);
        let plaintext = parse_block_hex(plain_hex)?;
        let expected = parse_block_hex(cipher_hex)?;
        if encrypt_block(&plaintext, &round_keys) != expected {
            bail!("known-answer encryption mismatch for key {key_hex}");
        }
        if decrypt_block(&expected, &round_keys) != plaintext {
            bail!("known-answer decryption mismatch for key {key_hex}");
        }
        debug!(key = key_hex, "known answer ok");
    }

    let mut rng = seeded_rng(seed);
    for sample in 0..samples {
        let mut key_bytes = [0u8; 16];
        let mut state = [0u8; 16];
        rng.fill_bytes(&mut key_bytes);
        rng.fill_bytes(&mut state);
        check_sample(&Aes128Key::from(key_bytes), &state)
            .with_context(|| format!("sample {sample} (state {})", hex::encode(state)))?;
    }

    info!(samples, "self-test passed");
    println!("ok: {} known answers, {samples} random samples", KNOWN_ANSWERS.len());
    Ok(())
}

fn check_sample(key: &Aes128Key, state: &Block) -> Result<()> {
    let pairs: [(&str, fn(&mut Block), fn(&mut Block)); 3] = [
        ("sub_bytes", round::sub_bytes, round::inv_sub_bytes),
        ("shift_rows", round::shift_rows, round::inv_shift_rows),
        ("mix_columns", round::mix_columns, round::inv_mix_columns),
    ];
    for (name, forward, inverse) in pairs {
        let mut s = *state;
        forward(&mut s);
        inverse(&mut s);
        if s != *state {
            bail!("{name} is not undone by its inverse");
        }
    }

    let round_keys = expand_key(key);
    if round_keys.get(0) != &key.0 {
        bail!("first round key differs from the key");
    }
    let mut s = *state;
    round::add_round_key(&mut s, round_keys.get(1));
    round::add_round_key(&mut s, round_keys.get(1));
    if s != *state {
        bail!("add_round_key is not self-inverse");
    }

    let ciphertext = encrypt_block(state, &round_keys);
    if decrypt_block(&ciphertext, &round_keys) != *state {
        bail!("decrypt does not invert encrypt");
    }
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = [0u8; 16];
    rng.fill_bytes(&mut key_bytes);
    let key = Aes128Key::from(key_bytes);
    let round_keys = expand_key(&key);

    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);

    let ciphertext = encrypt_block(&block, &round_keys);
    let decrypted = decrypt_block(&ciphertext, &round_keys);

    println!("demo key: {}", hex::encode(key_bytes));
    println!("plaintext: {}", hex::encode(block));
    println!("ciphertext: {}", hex::encode(ciphertext));
    println!("decrypted: {}", hex::encode(decrypted));
    if decrypted != block {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    hex_str
        .parse::<Aes128Key>()
        .context("AES-128 key must be 16 bytes (32 hex characters)")
}

fn parse_block_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode block hex")?;
    let actual = bytes.len();
    bytes
        .try_into()
        .map_err(|_| anyhow::anyhow!("block must be 16 bytes (32 hex characters), got {actual}"))
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            debug!(seed = value, "using fixed RNG seed");
            ChaCha20Rng::seed_from_u64(value)
        }
        None => ChaCha20Rng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_and_block() {
        let key = parse_key_hex("000102030405060708090a0b0c0d0e0f").expect("key");
        assert_eq!(key.0[15], 0x0f);
        let block = parse_block_hex("00112233445566778899aabbccddeeff").expect("block");
        assert_eq!(block[1], 0x11);
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert!(parse_key_hex("0001").is_err());
        assert!(parse_block_hex("00").is_err());
        assert!(parse_block_hex("not hex").is_err());
    }

    #[test]
    fn check_passes_with_fixed_seed() {
        cmd_check(8, Some(42)).expect("self-test");
    }

    #[test]
    fn demo_round_trips_with_fixed_seed() {
        cmd_demo(Some(7)).expect("demo");
    }

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["rijndael", "-vv", "check", "--samples", "3"])
            .expect("parse");
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Check { samples: 3, seed: None }));
    }
}
