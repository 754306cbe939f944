//! Secret retrieval.
//!
//! A [`SecretStore`] turns a secret identifier into the raw secret text. The
//! text is returned in a [`Zeroizing`] buffer so it is wiped once parsed.
//!
//! ## Backends
//!
//! - **AWS Secrets Manager**: feature-gated (`aws`, on by default).
//! - **File**: reads a local file, or stdin for `-`.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`)
//! 3. Select it in `backend::for_source`

use zeroize::Zeroizing;

use crate::error::Result;

mod backend;
mod file;

#[cfg(feature = "aws")]
pub mod aws;

pub use backend::for_source;
pub use file::FileStore;

#[cfg(feature = "aws")]
pub use aws::AwsSecretsManager;

/// Secret retrieval trait.
///
/// One call per invocation; implementations never retry.
pub trait SecretStore {
    /// Backend name for logs.
    fn name(&self) -> &'static str;

    /// Fetch the raw text of the secret identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns `RetrievalError` if the secret cannot be read.
    fn fetch(&self, id: &str) -> Result<Zeroizing<String>>;
}
