//! Queue identity derivation
//!
//! Turns a raw chat id into a stable, human-memorable queue id. The raw id
//! and an optional process-wide pepper are hashed with SHA-256, and the
//! digest seeds a name of the form `First Middle Last-Last`.
//!
//! Without a pepper anyone who knows a chat id can compute its queue id.
//! That is an accepted weakness; the daemon warns about it at startup.

pub mod names;

use crate::domain::QueueId;
use names::{FIRST_NAMES, LAST_NAMES};
use sha2::{Digest, Sha256};
use std::fmt::Display;

/// Derives queue ids from raw chat ids
#[derive(Clone, Default)]
pub struct IdentityDeriver {
    pepper: Option<String>,
}

impl std::fmt::Debug for IdentityDeriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityDeriver")
            .field("pepper", &self.pepper.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl IdentityDeriver {
    /// An empty pepper is treated as absent.
    pub fn new(pepper: Option<String>) -> Self {
        Self {
            pepper: pepper.filter(|p| !p.is_empty()),
        }
    }

    pub fn has_pepper(&self) -> bool {
        self.pepper.is_some()
    }

    /// Derive the queue id for `raw_id`
    pub fn derive(&self, raw_id: impl Display) -> QueueId {
        let mut hasher = Sha256::new();
        hasher.update(raw_id.to_string().as_bytes());
        hasher.update(self.pepper.as_deref().unwrap_or("").as_bytes());
        let digest = hasher.finalize();

        let mut seed = [0u8; 16];
        seed.copy_from_slice(&digest[..16]);
        QueueId::new(name_from_seed(u128::from_be_bytes(seed)))
    }
}

/// Mixed-radix decomposition of `seed` into four name components
fn name_from_seed(mut seed: u128) -> String {
    let mut pick = |table: &[&'static str]| -> &'static str {
        let len = table.len() as u128;
        let name = table[(seed % len) as usize];
        seed /= len;
        name
    };

    let first = pick(FIRST_NAMES);
    let middle = pick(FIRST_NAMES);
    let last = pick(LAST_NAMES);
    let second_last = pick(LAST_NAMES);

    format!("{first} {middle} {last}-{second_last}")
}
