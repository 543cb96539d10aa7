// ID Provider Port (for deterministic testing)

use crate::domain::EntryId;

/// ID provider interface (allows deterministic IDs in tests)
pub trait IdProvider: Send + Sync {
    /// Generate a new unique entry ID
    fn generate_id(&self) -> EntryId;
}

/// UUID v4 provider (production)
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn generate_id(&self) -> EntryId {
        EntryId::new(uuid::Uuid::new_v4())
    }
}

pub mod mocks {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Yields 00000000-0000-0000-0000-000000000001, ...-000000000002, ...
    #[derive(Default)]
    pub struct SequentialIdProvider {
        next: AtomicU64,
    }

    impl SequentialIdProvider {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl IdProvider for SequentialIdProvider {
        fn generate_id(&self) -> EntryId {
            let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
            EntryId::new(uuid::Uuid::from_u128(n as u128))
        }
    }
}
