//! Rendering and writing the `~/.pypirc` credentials file.
//!
//! The uploader parses this file itself, so section headers and key names
//! must match byte-for-byte:
//!
//! ```text
//! [distutils]
//! index-servers =
//!     pypi
//!
//! [pypi]
//! repository: <repository>
//! username: <username>
//! password: <password>
//! ```
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::DeployError;
use crate::params::Params;

/// File name of the credentials file inside the home directory.
pub const FILE_NAME: &str = ".pypirc";

/// Index-server name shared by the credentials file and the upload command.
pub const INDEX_SERVER: &str = "pypi";

/// Render the credentials file for `params`.
#[must_use]
pub fn render(params: &Params) -> String {
    format!(
        "[distutils]\n\
         index-servers =\n    \
         {INDEX_SERVER}\n\
         \n\
         [{INDEX_SERVER}]\n\
         repository: {}\n\
         username: {}\n\
         password: {}\n",
        params.repository, params.username, params.password,
    )
}

/// Write the rendered credentials file to `w`.
///
/// # Errors
///
/// Returns any I/O error raised by the writer.
pub fn write_config<W: Write>(w: &mut W, params: &Params) -> io::Result<()> {
    w.write_all(render(params).as_bytes())
}

/// Path of the credentials file under `home`.
#[must_use]
pub fn config_path(home: &Path) -> PathBuf {
    home.join(FILE_NAME)
}

/// Create (or truncate) `<home>/.pypirc` and write the credentials into it.
///
/// Output goes through a [`BufWriter`] that is flushed explicitly before the
/// handle is dropped, so a failed flush is reported instead of being lost.
/// The file handle is closed on every return path.
///
/// # Errors
///
/// Returns [`DeployError::ConfigWrite`] if the file cannot be created,
/// written or flushed.
pub fn create_config(home: &Path, params: &Params) -> Result<PathBuf, DeployError> {
    let path = config_path(home);
    let wrap = |source| DeployError::ConfigWrite {
        path: path.clone(),
        source,
    };

    let file = open_truncated(&path).map_err(wrap)?;
    let mut buf = BufWriter::new(file);
    write_config(&mut buf, params).map_err(wrap)?;
    buf.flush().map_err(wrap)?;
    Ok(path)
}

/// Open `path` for writing, truncating existing content.
///
/// On Unix a newly created file is readable by the owner only.
fn open_truncated(path: &Path) -> io::Result<File> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt as _;
        options.mode(0o600);
    }
    options.open(path)
}
