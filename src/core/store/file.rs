//! File and stdin secret source.

use std::io::Read;
use std::path::PathBuf;

use tracing::debug;
use zeroize::Zeroizing;

use super::SecretStore;
use crate::core::constants::STDIN_PATH;
use crate::error::{Result, RetrievalError};

/// Reads raw secret JSON from a path, or from stdin when the path is `-`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileStore;

impl SecretStore for FileStore {
    fn name(&self) -> &'static str {
        "file"
    }

    fn fetch(&self, id: &str) -> Result<Zeroizing<String>> {
        let mut contents = Zeroizing::new(String::new());

        if id == STDIN_PATH {
            debug!("reading secret from stdin");
            std::io::stdin()
                .read_to_string(&mut contents)
                .map_err(|source| RetrievalError::ReadSource {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
        } else {
            debug!(path = id, "reading secret from file");
            let mut file =
                std::fs::File::open(id).map_err(|source| RetrievalError::ReadSource {
                    path: PathBuf::from(id),
                    source,
                })?;
            file.read_to_string(&mut contents)
                .map_err(|source| RetrievalError::ReadSource {
                    path: PathBuf::from(id),
                    source,
                })?;
        }

        Ok(contents)
    }
}
