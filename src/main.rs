use std::process;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use num_bigint::BigUint;
use tracing_subscriber::EnvFilter;

use cipher_core::config::{KeyConfig, DEFAULT_KEY_LENGTH, DEFAULT_PRIMALITY_ROUNDS};
use cipher_core::rsa::{
    decrypt_to_string, encrypt_string, generate_keys, GeneratedKeys, KeySelection, RsaPrivateKey,
    RsaPublicKey, Seed,
};
use cipher_core::sha256;

#[derive(Parser, Debug)]
#[command(name = "cipher-core", version, about = "Textbook RSA and SHA-256 primitives")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate an RSA key pair
    Keygen {
        /// Bit length of each prime
        #[arg(long, default_value_t = DEFAULT_KEY_LENGTH)]
        bits: u64,
        /// Miller-Rabin rounds per candidate
        #[arg(long, default_value_t = DEFAULT_PRIMALITY_ROUNDS)]
        rounds: u32,
        /// Raw seed for reproducible keys
        #[arg(long, conflicts_with_all = ["identity", "credential"])]
        seed: Option<String>,
        /// Identity half of a credential-derived seed
        #[arg(long, requires = "credential")]
        identity: Option<String>,
        /// Credential half of a credential-derived seed
        #[arg(long, requires = "identity")]
        credential: Option<String>,
        /// Print only one half of the pair
        #[arg(long, value_enum)]
        only: Option<Half>,
    },
    /// Encrypt a message, one block per character
    Encrypt {
        #[arg(long)]
        e: BigUint,
        #[arg(long)]
        n: BigUint,
        message: String,
    },
    /// Decrypt comma-separated cipher blocks
    Decrypt {
        #[arg(long)]
        d: BigUint,
        #[arg(long)]
        n: BigUint,
        blocks: String,
    },
    /// Print the SHA-256 digest of a string
    Sha256 { text: String },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Half {
    Public,
    Private,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Keygen {
            bits,
            rounds,
            seed,
            identity,
            credential,
            only,
        } => {
            let config = KeyConfig::default().with_key_length(bits).with_rounds(rounds);
            let seed = match (seed, identity, credential) {
                (Some(seed), _, _) => Some(Seed::from(seed.as_str())),
                (None, Some(identity), Some(credential)) => {
                    Some(Seed::from_credentials(&identity, &credential))
                }
                _ => None,
            };
            let selection = match only {
                Some(Half::Public) => KeySelection::PublicOnly,
                Some(Half::Private) => KeySelection::PrivateOnly,
                None => KeySelection::Both,
            };

            match generate_keys(&config, seed.as_ref(), selection)
                .context("key generation failed")?
            {
                GeneratedKeys::Public(public_key) => println!("public: {}", public_key),
                GeneratedKeys::Private(private_key) => println!("private: {}", private_key),
                GeneratedKeys::Both(keypair) => {
                    println!("public: {}", keypair.public_key);
                    println!("private: {}", keypair.private_key);
                }
            }
        }
        Command::Encrypt { e, n, message } => {
            let blocks = encrypt_string(&message, &RsaPublicKey { e, n });
            let rendered: Vec<String> = blocks.iter().map(ToString::to_string).collect();
            println!("{}", rendered.join(","));
        }
        Command::Decrypt { d, n, blocks } => {
            let blocks = parse_blocks(&blocks)?;
            let text = decrypt_to_string(&blocks, &RsaPrivateKey { d, n })
                .context("decryption failed")?;
            println!("{}", text);
        }
        Command::Sha256 { text } => println!("{}", sha256(text.as_bytes())),
    }

    Ok(())
}

fn parse_blocks(input: &str) -> Result<Vec<BigUint>> {
    let blocks = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<BigUint>()
                .with_context(|| format!("invalid cipher block {:?}", part))
        })
        .collect::<Result<Vec<_>>>()?;

    if blocks.is_empty() && !input.trim().is_empty() {
        bail!("no cipher blocks found in input");
    }
    Ok(blocks)
}
