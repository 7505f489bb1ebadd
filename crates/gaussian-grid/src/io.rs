//! Raw value files: little-endian f32, no header.
//!
//! Writes go through a temporary file in the destination directory which is
//! renamed into place once complete, so a failed write never leaves a
//! truncated file behind.

use std::io::Write;
use std::path::Path;

use bytes::{Buf, BufMut, BytesMut};
use tracing::{debug, info};

use crate::error::{GridError, GridResult};
use crate::values::GridValues;

/// Decode raw little-endian f32 bytes.
pub fn decode_values(mut data: &[u8]) -> GridResult<GridValues> {
    if data.len() % 4 != 0 {
        return Err(GridError::TruncatedFile { len: data.len() });
    }

    let mut values = Vec::with_capacity(data.len() / 4);
    while data.has_remaining() {
        values.push(data.get_f32_le());
    }
    Ok(GridValues::new(values))
}

/// Encode values as raw little-endian f32 bytes.
pub fn encode_values(values: &[f32]) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(values.len() * 4);
    for &v in values {
        buf.put_f32_le(v);
    }
    buf.to_vec()
}

/// Read a whole value file into memory.
pub fn read_values(path: impl AsRef<Path>) -> GridResult<GridValues> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| GridError::io(path, e))?;
    let values = decode_values(&data)?;
    debug!(path = %path.display(), points = values.len(), "Read value file");
    Ok(values)
}

/// Write a value file, replacing any existing file atomically.
pub fn write_values(path: impl AsRef<Path>, values: &[f32]) -> GridResult<()> {
    let path = path.as_ref();
    write_atomic(path, &encode_values(values))?;
    info!(
        path = %path.display(),
        points = values.len(),
        mb = %format!("{:.1}", (values.len() * 4) as f64 / 1024.0 / 1024.0),
        "Wrote value file"
    );
    Ok(())
}

/// Write `bytes` to `path` via a sibling temporary file and a rename.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> GridResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| GridError::io(dir, e))?;
    tmp.write_all(bytes).map_err(|e| GridError::io(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| GridError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| GridError::io(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_bytes() {
        // 1.0f32 = 0x3f800000, -2.5f32 = 0xc0200000
        let bytes = [0x00, 0x00, 0x80, 0x3f, 0x00, 0x00, 0x20, 0xc0];
        let values = decode_values(&bytes).unwrap();
        assert_eq!(&values[..], &[1.0, -2.5]);
    }

    #[test]
    fn test_decode_rejects_partial_float() {
        let err = decode_values(&[0, 0, 128]).unwrap_err();
        assert!(matches!(err, GridError::TruncatedFile { len: 3 }));
    }

    #[test]
    fn test_encode_is_little_endian() {
        assert_eq!(encode_values(&[1.0]), vec![0x00, 0x00, 0x80, 0x3f]);
    }
}
