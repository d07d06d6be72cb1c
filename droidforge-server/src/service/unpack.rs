//! Result bundle unpacking
//!
//! The workflow uploads its outputs as a zip bundle; the binary of
//! interest is the first entry whose name ends with the configured
//! suffix.

use std::io::{Cursor, Read};

use crate::service::build::BuildError;

/// Extract the first entry ending in `suffix` from a zip bundle
pub fn extract_entry(bundle: &[u8], suffix: &str) -> Result<Vec<u8>, BuildError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bundle))
        .map_err(|e| BuildError::BadBundle(e.to_string()))?;

    // Scan by index to honour archive order; by_index borrows the
    // archive mutably, so find the entry first and read it after.
    let mut found = None;
    for i in 0..archive.len() {
        let entry = archive
            .by_index(i)
            .map_err(|e| BuildError::BadBundle(e.to_string()))?;
        if entry.name().ends_with(suffix) {
            found = Some(i);
            break;
        }
    }

    let Some(index) = found else {
        return Err(BuildError::EntryMissing(suffix.to_string()));
    };

    let mut entry = archive
        .by_index(index)
        .map_err(|e| BuildError::BadBundle(e.to_string()))?;

    let mut bytes = Vec::with_capacity(entry.size() as usize);
    entry
        .read_to_end(&mut bytes)
        .map_err(|e| BuildError::BadBundle(e.to_string()))?;

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn bundle_with(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            for (name, bytes) in entries {
                writer
                    .start_file(*name, zip::write::FileOptions::default())
                    .unwrap();
                writer.write_all(bytes).unwrap();
            }
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_extracts_matching_entry_bytes() {
        let bundle = bundle_with(&[
            ("output-metadata.json", b"{}"),
            ("app-debug.apk", b"binary payload"),
        ]);
        let bytes = extract_entry(&bundle, ".apk").unwrap();
        assert_eq!(bytes, b"binary payload".to_vec());
    }

    #[test]
    fn test_takes_first_match_in_archive_order() {
        let bundle = bundle_with(&[
            ("app-debug.apk", b"first"),
            ("app-release.apk", b"second"),
        ]);
        let bytes = extract_entry(&bundle, ".apk").unwrap();
        assert_eq!(bytes, b"first".to_vec());
    }

    #[test]
    fn test_missing_entry_is_an_error() {
        let bundle = bundle_with(&[("build.log", b"ok")]);
        match extract_entry(&bundle, ".apk") {
            Err(BuildError::EntryMissing(suffix)) => assert_eq!(suffix, ".apk"),
            other => panic!("expected EntryMissing, got {:?}", other.map(|b| b.len())),
        }
    }

    #[test]
    fn test_garbage_bytes_are_rejected() {
        let result = extract_entry(b"not a zip archive", ".apk");
        assert!(matches!(result, Err(BuildError::BadBundle(_))));
    }
}
