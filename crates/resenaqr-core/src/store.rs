//! The lead persistence capability. One write operation, nothing else: the
//! system has no read, update or delete path over the remote collection.

use std::future::Future;

use crate::lead::Lead;

/// Capability trait for appending a [`Lead`] to a remote collection.
///
/// There is no idempotency key and no dedup invariant; resubmitting after a
/// transient failure creates a second record. That is the intended contract.
#[trait_variant::make(Send)]
pub trait LeadStore {
    /// Error type returned by the store.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Append one lead record.
    fn insert(&self, lead: &Lead) -> impl Future<Output = Result<(), Self::Error>>;
}
