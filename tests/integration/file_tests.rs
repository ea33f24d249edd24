//! Decoding straight from files on disk.

use std::fs;

use greytiff::{decode_file, DecodeError, IoError, LoadError, DEFAULT_MAX_FILE_SIZE};

use super::test_utils::{create_small_tiff, gradient_samples, ByteOrderType, TiffBuilder};

#[test]
fn test_decode_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("0000.tif");
    fs::write(&path, create_small_tiff()).unwrap();

    let image = decode_file(&path, DEFAULT_MAX_FILE_SIZE).unwrap();
    assert_eq!(image.sample(1, 0), 20);
    assert_eq!(image.sample(0, 1), 30);
}

#[test]
fn test_decode_sequence_of_frames() {
    let dir = tempfile::tempdir().unwrap();
    for frame in 0..4u32 {
        let samples = vec![(frame * 1000) as u16; 16];
        let data = TiffBuilder::grey16(ByteOrderType::LittleEndian, 4, 4, &samples).build();
        fs::write(dir.path().join(format!("{:04}.tif", frame)), data).unwrap();
    }

    for frame in 0..4u32 {
        let path = dir.path().join(format!("{:04}.tif", frame));
        let image = decode_file(&path, DEFAULT_MAX_FILE_SIZE).unwrap();
        assert_eq!(image.sample(3, 3), (frame * 1000) as u16);
    }
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = decode_file(dir.path().join("missing.tif"), DEFAULT_MAX_FILE_SIZE);

    assert!(matches!(result, Err(LoadError::Io(IoError::NotFound(_)))));
}

#[test]
fn test_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("0000.tif");
    fs::write(&path, b"").unwrap();

    let result = decode_file(&path, DEFAULT_MAX_FILE_SIZE);
    assert!(matches!(result, Err(LoadError::Io(IoError::Empty { .. }))));
}

#[test]
fn test_file_over_size_limit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("large.tif");
    let data = TiffBuilder::grey16(ByteOrderType::BigEndian, 32, 32, &gradient_samples(32, 32))
        .build();
    let len = data.len() as u64;
    fs::write(&path, data).unwrap();

    let result = decode_file(&path, len - 1);
    assert!(matches!(
        result,
        Err(LoadError::Io(IoError::FileTooLarge { .. }))
    ));

    assert!(decode_file(&path, len).is_ok());
}

#[test]
fn test_not_a_tiff() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("0001.png");
    fs::write(&path, b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR").unwrap();

    let result = decode_file(&path, DEFAULT_MAX_FILE_SIZE);
    assert!(matches!(
        result,
        Err(LoadError::Decode(DecodeError::Format(_)))
    ));
}
