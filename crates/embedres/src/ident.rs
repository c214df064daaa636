//! Identifier derivation for generated declarations.

use crate::EmbedError;
use std::path::Path;

/// Derive the array identifier for a resource from its file name.
///
/// Directory components are ignored. The stem (everything before the last
/// `.`) has `-`, `.` and spaces replaced by `_`, and a non-empty extension is
/// appended as `_<ext>`, so `sprites/my-file.bin` becomes `my_file_bin`.
///
/// Names without a stem (`.gitignore`, `..`, the empty string) are rejected,
/// as is any result that is still not a C identifier. Reserved words are not
/// checked.
pub fn derive_identifier(path: &Path) -> Result<String, EmbedError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| EmbedError::InvalidFileName(path.display().to_string()))?;

    let (stem, extension) = split_extension(file_name);
    if stem.is_empty() {
        return Err(EmbedError::InvalidFileName(file_name.to_string()));
    }

    let mut identifier: String = stem
        .chars()
        .map(|c| match c {
            '-' | '.' | ' ' => '_',
            c => c,
        })
        .collect();
    if !extension.is_empty() {
        identifier.push('_');
        identifier.push_str(extension);
    }

    if !is_identifier(&identifier) {
        return Err(EmbedError::InvalidIdentifier(identifier));
    }
    Ok(identifier)
}

/// Returns true if `s` is usable as a C/C++ identifier (ASCII only).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Split at the last dot. The dot itself belongs to neither half.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => (&name[..idx], &name[idx + 1..]),
        None => (name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(name: &str) -> Result<String, EmbedError> {
        derive_identifier(Path::new(name))
    }

    #[test]
    fn test_hyphen_and_extension() {
        assert_eq!(derive("my-file.bin").unwrap(), "my_file_bin");
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(derive("data").unwrap(), "data");
    }

    #[test]
    fn test_trailing_dot_has_empty_extension() {
        assert_eq!(derive("data.").unwrap(), "data");
    }

    #[test]
    fn test_multiple_dots() {
        assert_eq!(derive("a.b.c.txt").unwrap(), "a_b_c_txt");
    }

    #[test]
    fn test_spaces() {
        assert_eq!(derive("title screen.png").unwrap(), "title_screen_png");
    }

    #[test]
    fn test_directories_stripped() {
        assert_eq!(
            derive("assets/fonts/r-type.ttf").unwrap(),
            "r_type_ttf"
        );
    }

    #[test]
    fn test_no_stem_rejected() {
        assert!(matches!(derive(".gitignore"), Err(EmbedError::InvalidFileName(_))));
        assert!(matches!(derive(""), Err(EmbedError::InvalidFileName(_))));
        assert!(matches!(derive(".."), Err(EmbedError::InvalidFileName(_))));
    }

    #[test]
    fn test_invalid_result_rejected() {
        match derive("1up.wav") {
            Err(EmbedError::InvalidIdentifier(ident)) => assert_eq!(ident, "1up_wav"),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            derive("music(loop).ogg"),
            Err(EmbedError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("_private"));
        assert!(is_identifier("shader_vert_spv"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("9lives"));
        assert!(!is_identifier("has-dash"));
    }
}
