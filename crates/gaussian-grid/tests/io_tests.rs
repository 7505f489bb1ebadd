//! Tests for raw value files.

use gaussian_grid::io::{read_values, write_values};
use gaussian_grid::{GridError, GridParameters, GridTopology, GridValues};
use test_utils::{create_latitude_temperature_values, fixtures::grid, temp_test_dir};

#[test]
fn test_write_then_read_small_grid() {
    let dir = temp_test_dir();
    let path = dir.path().join("temperature.bin");
    let values = create_latitude_temperature_values(grid::SMALL_N);

    write_values(&path, &values).unwrap();

    let metadata = std::fs::metadata(&path).unwrap();
    assert_eq!(metadata.len() as usize, values.len() * 4);

    let read = read_values(&path).unwrap();
    assert_eq!(read.into_inner(), values);
}

#[test]
fn test_write_replaces_existing_file() {
    let dir = temp_test_dir();
    let path = dir.path().join("field.bin");

    write_values(&path, &[1.0; 100]).unwrap();
    write_values(&path, &[2.0; 10]).unwrap();

    let read = read_values(&path).unwrap();
    assert_eq!(&read[..], &[2.0; 10]);
}

#[test]
fn test_write_leaves_no_temporary_files() {
    let dir = temp_test_dir();
    write_values(dir.path().join("a.bin"), &[0.5; 16]).unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_read_missing_file_reports_path() {
    let dir = temp_test_dir();
    let path = dir.path().join("missing.bin");
    let err = read_values(&path).unwrap_err();
    assert!(matches!(err, GridError::Io { .. }));
    assert!(err.to_string().contains("missing.bin"));
}

#[test]
fn test_write_into_missing_directory_fails() {
    let dir = temp_test_dir();
    let path = dir.path().join("no-such-dir").join("out.bin");
    assert!(write_values(&path, &[1.0]).is_err());
    assert!(!path.exists());
}

#[test]
fn test_truncated_file_rejected() {
    let dir = temp_test_dir();
    let path = dir.path().join("short.bin");
    std::fs::write(&path, [0u8; 10]).unwrap();
    assert!(matches!(
        read_values(&path),
        Err(GridError::TruncatedFile { len: 10 })
    ));
}

#[test]
fn test_length_check_against_topology() {
    let topo = GridTopology::new(GridParameters::new(grid::SMALL_N).unwrap());
    let values = GridValues::new(vec![0.0; topo.total_points() - 1]);
    match values.check_len(&topo) {
        Err(GridError::LengthMismatch { expected, actual, .. }) => {
            assert_eq!(expected, topo.total_points());
            assert_eq!(actual, topo.total_points() - 1);
        }
        other => panic!("expected length mismatch, got {:?}", other),
    }
}
