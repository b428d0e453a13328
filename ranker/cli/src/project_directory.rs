use std::{
    env, io,
    path::{Path, PathBuf},
};

/// The Hardhat project a deployment reads its artifacts and settings from.
pub struct ProjectDirectory {
    root: PathBuf,
}

impl ProjectDirectory {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Use the given directory, or the current one.
    pub fn new_or_default(root: Option<PathBuf>) -> io::Result<Self> {
        match root {
            Some(root) => Ok(Self::new(root)),
            None => Ok(Self::new(env::current_dir()?)),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Compiler output, as laid out by `hardhat compile`.
    pub fn artifacts_dir(&self) -> PathBuf {
        self.root.join("artifacts")
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join("deploy.toml")
    }

    /// Secrets: mnemonics and explorer API keys.
    pub fn env_file(&self) -> PathBuf {
        self.root.join(".env")
    }
}
