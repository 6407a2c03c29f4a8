//! Where rendered pages go.

use std::convert::Infallible;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use tokio::io::AsyncWriteExt;

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;

/// Destination for rendered HTML. `-` selects stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl FromStr for OutputTarget {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "-" { Self::Stdout } else { Self::File(PathBuf::from(s)) })
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl OutputTarget {
    /// Write a full page, replacing any previous one.
    ///
    /// Files are written to a sibling temp file and renamed into place so a
    /// browser reloading mid-write never sees a truncated page.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub async fn write_page(&self, html: &str) -> io::Result<()> {
        match self {
            Self::Stdout => {
                let mut stdout = tokio::io::stdout();
                stdout.write_all(html.as_bytes()).await?;
                stdout.flush().await
            }
            Self::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await?;
                }
                let mut tmp = path.clone().into_os_string();
                tmp.push(".tmp");
                tokio::fs::write(&tmp, html).await?;
                tokio::fs::rename(&tmp, path).await
            }
        }
    }
}
