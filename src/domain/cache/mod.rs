//! Cache domain - generic key-value caching contract

mod store;

pub use store::{CacheStore, CacheStoreExt};

#[cfg(test)]
pub use store::mock::MockCacheStore;
