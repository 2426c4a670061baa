//! Login session passed explicitly through the router and the auth client.

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Bearer token issued by the auth service.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        AccessToken(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "AccessToken(***)")
    }
}

/// On-disk shape of the session file.
#[derive(Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct SessionFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    access_token: Option<AccessToken>,
}

#[derive(Debug)]
pub struct Session {
    path: PathBuf,
    token: Option<AccessToken>,
    /// Set once the auth service has accepted the token during this run.
    verified: bool,
}

impl Session {
    /// Read the session file. A missing, unreadable or corrupt file yields an
    /// empty session; only a missing one is silent.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let token = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<SessionFile>(&content) {
                Ok(file) => file.access_token,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "ignoring corrupt session file");
                    None
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read session file");
                None
            }
        };

        Session {
            path,
            token,
            verified: false,
        }
    }

    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Whether the session holds a token the auth service has confirmed.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.verified
    }

    pub fn mark_verified(&mut self) {
        self.verified = self.token.is_some();
    }

    /// Persist a freshly issued token. A token straight from login counts as verified.
    pub fn store_token(&mut self, token: AccessToken) -> Result<()> {
        let file = SessionFile {
            access_token: Some(token.clone()),
        };
        let content = serde_json::to_string_pretty(&file)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).context("Could not create session directory")?;
        }
        std::fs::write(&self.path, content)
            .with_context(|| format!("Could not write session file {}", self.path.display()))?;

        self.token = Some(token);
        self.verified = true;
        Ok(())
    }

    /// Forget the token, in memory and on disk.
    pub fn clear(&mut self) -> Result<()> {
        self.token = None;
        self.verified = false;

        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e)
                .with_context(|| format!("Could not remove session file {}", self.path.display())),
        }
    }
}
