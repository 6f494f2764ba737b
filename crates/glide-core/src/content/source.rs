use std::fmt;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Where the pager reads its raw content from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    File(PathBuf),
    Stdin,
}

impl ContentSource {
    /// Resolve a command-line argument; no path or `-` means stdin
    pub fn from_arg(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) if p.as_os_str() != "-" => Self::File(p),
            _ => Self::Stdin,
        }
    }

    /// Read the whole source into memory
    pub fn read(&self) -> Result<Vec<u8>> {
        match self {
            Self::File(path) => read_file(path),
            Self::Stdin => {
                let stdin = std::io::stdin();
                if stdin.is_terminal() {
                    return Err(Error::Content(
                        "no input: pass a file or pipe content on stdin".to_string(),
                    ));
                }
                let mut bytes = Vec::new();
                stdin.lock().read_to_end(&mut bytes)?;
                debug!("Read {} bytes from stdin", bytes.len());
                Ok(bytes)
            }
        }
    }

    /// Short name for the status bar
    pub fn display_name(&self) -> String {
        match self {
            Self::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            Self::Stdin => "[stdin]".to_string(),
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("stdin"),
        }
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    if path.is_dir() {
        return Err(Error::Content(format!("{} is a directory", path.display())));
    }
    let bytes = std::fs::read(path)?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}
