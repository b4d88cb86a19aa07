//! Frame and key-hash inspection tool
//!
//! Local debugging aid for the wire core: prints the routing hash of keys
//! and decodes hex dumps of response frames. Opens no sockets.

use bytes::BytesMut;
use clap::{Parser, Subcommand};
use memcache_wire::{decode_response, DecodeResult, HashAlgorithm};
use tracing_subscriber::{fmt, EnvFilter};

/// memcache-wire inspection tool
#[derive(Parser, Debug)]
#[command(name = "mckey")]
#[command(about = "Inspect memcached binary-protocol frames and key routing hashes")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print routing hashes for one or more keys
    Hash {
        /// Algorithm name (every algorithm when omitted)
        #[arg(short, long)]
        algorithm: Option<HashAlgorithm>,

        /// Keys to hash
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Decode a hex-encoded response frame
    Decode {
        /// Frame bytes as a hex string (whitespace-free)
        frame: String,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();

    match args.command {
        Commands::Hash { algorithm, keys } => hash_keys(algorithm, &keys),
        Commands::Decode { frame } => decode_frame(&frame),
    }
}

fn hash_keys(algorithm: Option<HashAlgorithm>, keys: &[String]) {
    for key in keys {
        match algorithm {
            Some(algorithm) => {
                println!("{}\t{}\t{}", algorithm, key, algorithm.hash(key));
            }
            None => {
                for algorithm in HashAlgorithm::ALL {
                    println!("{}\t{}\t{}", algorithm, key, algorithm.hash(key));
                }
            }
        }
    }
}

fn decode_frame(frame: &str) {
    let bytes = match hex::decode(frame.trim()) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Invalid hex input: {}", e);
            std::process::exit(1);
        }
    };

    let mut buf = BytesMut::from(&bytes[..]);
    match decode_response(&mut buf) {
        Ok(DecodeResult::Complete(response)) => {
            println!("opcode:  {:?} ({:#04x})", response.opcode, response.opcode.code());
            println!("status:  {:?} ({})", response.status, response.status.code());
            println!("opaque:  {:#010x}", response.opaque);
            println!("cas:     {:#018x}", response.cas);
            println!("key:     {:?}", response.key);
            println!("extras:  {}", hex::encode(&response.extras));
            println!("value:   {}", hex::encode(&response.value));
            if !buf.is_empty() {
                tracing::warn!("{} trailing bytes after the frame", buf.len());
            }
        }
        Ok(DecodeResult::Incomplete) => {
            tracing::error!(
                "Frame incomplete: {} bytes supplied, more are needed",
                bytes.len()
            );
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Malformed frame: {}", e);
            std::process::exit(1);
        }
    }
}
