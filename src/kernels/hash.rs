//! Hashing kernel

use std::hint::black_box;
use std::sync::Arc;

use rand::{rngs::SmallRng, Rng, SeedableRng};
use sha2::{Digest, Sha256};

use crate::bench::{time_function, Worker};

/// SHA-256 over a fresh 256-byte random message per iteration. One
/// iteration is one digest, so the figure counts hashes, not bytes.
pub fn sha256(iterations: u64) -> Worker {
    const MESSAGE_LEN: usize = 256;

    Arc::new(move |_index| {
        let mut rng = SmallRng::from_entropy();

        time_function(
            || {
                let mut message = [0u8; MESSAGE_LEN];
                rng.fill(&mut message[..]);
                black_box(Sha256::digest(message));
            },
            iterations,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_kernel_runs() {
        let worker = sha256(100);
        assert!(worker(0) > 0.0);
    }

    #[test]
    fn test_digest_is_deterministic() {
        let a = Sha256::digest(b"cmrb");
        let b = Sha256::digest(b"cmrb");
        assert_eq!(a, b);
    }
}
