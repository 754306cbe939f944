//! Backend selection for secret retrieval.

use tracing::info;

use super::{FileStore, SecretStore};
use crate::core::config::Source;
use crate::error::Result;

/// Pick the store that serves `source`.
///
/// # Errors
///
/// Returns `RetrievalError::BackendUnavailable` when AWS retrieval is
/// requested from a build without the `aws` feature.
pub fn for_source(source: &Source) -> Result<Box<dyn SecretStore>> {
    match source {
        Source::File { .. } => {
            info!("using file secret source");
            Ok(Box::new(FileStore))
        }
        #[cfg(feature = "aws")]
        Source::Aws {
            region, profile, ..
        } => {
            info!(region = %region, "using AWS Secrets Manager");
            Ok(Box::new(super::AwsSecretsManager::new(
                region.clone(),
                profile.clone(),
            )))
        }
        #[cfg(not(feature = "aws"))]
        Source::Aws { .. } => {
            Err(crate::error::RetrievalError::BackendUnavailable("AWS Secrets Manager").into())
        }
    }
}
