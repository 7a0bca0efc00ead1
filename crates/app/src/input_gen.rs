//! Sample input generation.
//!
//! When no input file is specified, we generate sample data with
//! interesting compression characteristics: a mix of repetitive, skewed,
//! and random sections.
//!
//! # Design
//!
//! Generated data has:
//! - Some highly compressible sections (runs of the same byte)
//! - Some moderately compressible sections (text-like, limited alphabet)
//! - Some sections with a skewed byte distribution (what Huffman coding
//!   rewards most: few symbols dominating)
//! - Some incompressible sections (random bytes)
//!
//! This makes the compression ratio meaningful in the printed stats.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate sample data with mixed compressibility.
///
/// # Arguments
/// - `seed`: random seed for determinism
/// - `size_bytes`: exact size of generated data
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    let mut remaining = size_bytes;

    while remaining > 0 {
        let chunk_size = remaining.min(8192);

        let chunk_type: u8 = rng.gen_range(0..10);

        match chunk_type {
            // 30% highly compressible (runs of same byte)
            0..=2 => {
                let byte_value: u8 = rng.gen();
                data.extend(std::iter::repeat(byte_value).take(chunk_size));
            }

            // 30% moderately compressible (limited alphabet, text-like)
            3..=5 => {
                let alphabet = b"abcdefghijklmnopqrstuvwxyz .!,\n";
                for _ in 0..chunk_size {
                    let idx = rng.gen_range(0..alphabet.len());
                    data.push(alphabet[idx]);
                }
            }

            // 20% skewed distribution: one byte dominates, a handful of
            // others appear occasionally
            6..=7 => {
                let common: u8 = rng.gen();
                for _ in 0..chunk_size {
                    if rng.gen_range(0..100) < 85 {
                        data.push(common);
                    } else {
                        data.push(rng.gen_range(0..8u8));
                    }
                }
            }

            // 20% incompressible (random bytes)
            _ => {
                for _ in 0..chunk_size {
                    data.push(rng.gen());
                }
            }
        }

        remaining = remaining.saturating_sub(chunk_size);
    }

    data.truncate(size_bytes);
    data
}
