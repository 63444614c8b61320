//! Content inspection: hashing and type sniffing.
//!
//! Both helpers are per-file, side-effect-free reads. Failures are returned
//! to the caller, who records an empty result and keeps scanning; a file that
//! cannot be read never aborts an analysis.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Number of leading bytes inspected for content-type sniffing.
const SNIFF_LEN: usize = 512;

/// Computes the hex SHA-256 digest of a file's full contents.
pub fn digest_file(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Infers a content-type label from a file's leading bytes.
///
/// Reads at most [`SNIFF_LEN`] bytes (the whole file if shorter) and matches
/// magic numbers via `infer`. When no signature matches, a NUL-free UTF-8
/// prefix is labeled `text/plain`. Returns `Ok(None)` when the content gives
/// no usable signal, so the caller falls back to extension classification.
pub fn sniff_mime(path: &Path) -> io::Result<Option<String>> {
    let mut file = File::open(path)?;
    let mut buffer = [0u8; SNIFF_LEN];

    let mut filled = 0;
    while filled < SNIFF_LEN {
        let bytes_read = file.read(&mut buffer[filled..])?;
        if bytes_read == 0 {
            break;
        }
        filled += bytes_read;
    }

    let prefix = &buffer[..filled];
    if prefix.is_empty() {
        return Ok(None);
    }

    if let Some(kind) = infer::get(prefix) {
        return Ok(Some(kind.mime_type().to_string()));
    }

    if looks_like_text(prefix) {
        return Ok(Some("text/plain".to_string()));
    }

    Ok(None)
}

/// True when the prefix is NUL-free and valid UTF-8.
///
/// The prefix may cut a multi-byte sequence at the 512-byte boundary, so a
/// trailing incomplete character still counts as text.
fn looks_like_text(prefix: &[u8]) -> bool {
    if prefix.contains(&0) {
        return false;
    }
    match std::str::from_utf8(prefix) {
        Ok(_) => true,
        Err(e) => e.error_len().is_none() && e.valid_up_to() > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    // Minimal valid PNG header: signature + truncated IHDR.
    const PNG_HEADER: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52,
    ];

    #[test]
    fn test_digest_is_stable() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.bin");
        let b = temp.path().join("b.bin");
        fs::write(&a, b"same content").unwrap();
        fs::write(&b, b"same content").unwrap();

        assert_eq!(digest_file(&a).unwrap(), digest_file(&b).unwrap());
    }

    #[test]
    fn test_digest_differs_for_different_content() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.bin");
        let b = temp.path().join("b.bin");
        fs::write(&a, b"one").unwrap();
        fs::write(&b, b"two").unwrap();

        assert_ne!(digest_file(&a).unwrap(), digest_file(&b).unwrap());
    }

    #[test]
    fn test_digest_missing_file_fails() {
        assert!(digest_file(Path::new("/no/such/file")).is_err());
    }

    #[test]
    fn test_sniff_png_magic() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("picture.dat");
        fs::write(&path, PNG_HEADER).unwrap();

        assert_eq!(sniff_mime(&path).unwrap(), Some("image/png".to_string()));
    }

    #[test]
    fn test_sniff_plain_text() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes");
        fs::write(&path, "just some plain prose\nsecond line\n").unwrap();

        assert_eq!(sniff_mime(&path).unwrap(), Some("text/plain".to_string()));
    }

    #[test]
    fn test_sniff_binary_garbage_gives_no_label() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blob");
        fs::write(&path, [0x00u8, 0xFF, 0x00, 0xFF, 0x13, 0x37]).unwrap();

        assert_eq!(sniff_mime(&path).unwrap(), None);
    }

    #[test]
    fn test_sniff_empty_file_gives_no_label() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty");
        fs::write(&path, b"").unwrap();

        assert_eq!(sniff_mime(&path).unwrap(), None);
    }

    #[test]
    fn test_sniff_reads_bounded_prefix_only() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("big.txt");
        // Text prefix followed by binary noise past the sniff window.
        let mut content = vec![b'a'; SNIFF_LEN];
        content.extend_from_slice(&[0x00, 0xFF, 0x00]);
        fs::write(&path, &content).unwrap();

        assert_eq!(sniff_mime(&path).unwrap(), Some("text/plain".to_string()));
    }
}
