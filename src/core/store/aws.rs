//! AWS Secrets Manager backend.
//!
//! Enable with `--features aws` (on by default).
//!
//! Credentials come from the default provider chain (environment,
//! `~/.aws/config` and `~/.aws/credentials`, SSO, instance roles). When a
//! profile name is given it selects that profile from the shared config
//! files, including profiles that assume roles.

use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::SecretStore;
use crate::error::{Result, RetrievalError};

/// AWS Secrets Manager client settings.
///
/// A fresh SDK client is built for each fetch on a current-thread runtime.
#[derive(Debug, Clone)]
pub struct AwsSecretsManager {
    region: String,
    profile: Option<String>,
}

impl AwsSecretsManager {
    /// Create a backend for `region`, optionally using a named profile.
    pub fn new(region: impl Into<String>, profile: Option<String>) -> Self {
        Self {
            region: region.into(),
            profile: profile.filter(|p| !p.is_empty()),
        }
    }

    /// Region every request is sent to.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Named profile, or `None` for the default credential chain.
    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }
}

impl SecretStore for AwsSecretsManager {
    fn name(&self) -> &'static str {
        "aws-secrets-manager"
    }

    fn fetch(&self, id: &str) -> Result<Zeroizing<String>> {
        use aws_sdk_secretsmanager::config::Region;
        use aws_sdk_secretsmanager::error::DisplayErrorContext;

        debug!(
            secret = id,
            region = self.region(),
            profile = self.profile().unwrap_or("<default>"),
            "fetching secret from AWS Secrets Manager"
        );

        // Create a tokio runtime for the async AWS SDK
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| RetrievalError::Runtime(e.to_string()))?;

        rt.block_on(async {
            let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(Region::new(self.region().to_string()));
            if let Some(profile) = self.profile() {
                loader = loader.profile_name(profile);
            }
            let config = loader.load().await;
            let client = aws_sdk_secretsmanager::Client::new(&config);

            let result = client
                .get_secret_value()
                .secret_id(id)
                .send()
                .await
                .map_err(|e| RetrievalError::Request {
                    secret: id.to_string(),
                    reason: DisplayErrorContext(&e).to_string(),
                })?;

            let secret = result
                .secret_string()
                .ok_or_else(|| RetrievalError::NotAString {
                    secret: id.to_string(),
                })?;

            trace!(len = secret.len(), "secret retrieved");
            Ok(Zeroizing::new(secret.to_string()))
        })
    }
}
