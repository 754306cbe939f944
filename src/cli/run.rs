//! The collect pipeline: fetch, parse, transform, serialize.

use tracing::debug;

use crate::core::config::Settings;
use crate::core::store::SecretStore;
use crate::core::{format, secret, transform};
use crate::error::Result;

/// Produce the payload for `settings` using `store`.
///
/// The raw secret text is wiped as soon as it has been parsed.
pub fn collect(settings: &Settings, store: &dyn SecretStore) -> Result<String> {
    let id = settings.source.id();
    debug!(store = store.name(), secret = %id, "collecting secret");

    let map = {
        let raw = store.fetch(&id)?;
        secret::parse(&raw)?
    };

    let map = transform::transform(&map, &settings.transform);
    format::serialize(&map, settings.format)
}
