use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod ident;

pub use ident::{derive_identifier, is_identifier};

/// Namespace wrapping every generated declaration.
pub const NAMESPACE: &str = "EmbeddedResources";

/// Number of byte literals per array row.
pub const BYTES_PER_ROW: usize = 12;

#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("invalid file name '{0}', cannot derive an identifier")]
    InvalidFileName(String),
    #[error("'{0}' is not a valid identifier")]
    InvalidIdentifier(String),
    #[error("failed to read '{}'", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write '{}'", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Render the source text embedding `data` as `<identifier>` and
/// `<identifier>_size` inside the resource namespace.
///
/// `source_name` only appears in the provenance comment.
pub fn render(source_name: &str, identifier: &str, data: &[u8]) -> String {
    // "0xNN, " per byte plus row indentation
    let mut out = String::with_capacity(256 + data.len() * 6 + identifier.len() * 2);

    let _ = writeln!(out, "// Auto-generated from {source_name}");
    let _ = writeln!(out, "// Size: {} bytes", data.len());
    out.push('\n');
    let _ = writeln!(out, "namespace {NAMESPACE} {{");
    out.push('\n');

    let _ = writeln!(out, "extern const unsigned char {identifier}[] = {{");
    for row in data.chunks(BYTES_PER_ROW) {
        out.push_str("    ");
        for (i, byte) in row.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "0x{byte:02x}");
        }
        out.push_str(",\n");
    }
    out.push_str("};\n\n");

    let _ = writeln!(
        out,
        "extern const unsigned int {identifier}_size = {};",
        data.len()
    );
    out.push('\n');
    let _ = writeln!(out, "}} // namespace {NAMESPACE}");

    out
}

/// Read `input` in full and write its embedded form to `output`, replacing
/// whatever was there. The output is not written atomically; a failed write
/// may leave a partial file behind.
pub fn convert(input: &Path, output: &Path, identifier: &str) -> Result<(), EmbedError> {
    if !is_identifier(identifier) {
        return Err(EmbedError::InvalidIdentifier(identifier.to_string()));
    }

    let data = fs::read(input).map_err(|source| EmbedError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let source_name = match input.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => input.display().to_string(),
    };
    let text = render(&source_name, identifier, &data);

    fs::write(output, text).map_err(|source| EmbedError::Write {
        path: output.to_path_buf(),
        source,
    })
}
