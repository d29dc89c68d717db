use std::fs;
use tempfile::tempdir;

use openmsg_cli::commands::{decode, describe, example};
use openmsg_core::Endianness;

#[test]
fn test_example_writes_raw_bytes() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("sample.bin");

    example::execute(Endianness::Big, Some(output.to_str().unwrap()), false).unwrap();

    let bytes = fs::read(&output).unwrap();
    assert_eq!(
        hex::encode(&bytes),
        "deadbeefdeadffffdeadbeefffffffff746573746d65000000746573746d65667572"
    );
}

#[test]
fn test_example_little_endian_round_trips_through_decode() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("sample_le.bin");
    let path = output.to_str().unwrap();

    example::execute(Endianness::Little, Some(path), true).unwrap();

    let fields = decode::decode_file(path, Endianness::Little).unwrap();
    assert_eq!(fields[0].value, "3735928559");
    assert_eq!(fields[0].bytes, "efbeadde");
    assert!(fields[4].not_set);
    assert_eq!(fields[5].value, "testme");

    // Same bytes read in the other order give a different value
    let swapped = decode::decode_file(path, Endianness::Big).unwrap();
    assert_eq!(swapped[0].value, "4022250974");
}

#[test]
fn test_decode_rejects_truncated_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("short.bin");
    fs::write(&input, [0xDE, 0xAD]).unwrap();

    let err = decode::decode_file(input.to_str().unwrap(), Endianness::Big).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("not a sample record"));
    assert!(message.contains("layout is 34 bytes, got 2"));
}

#[test]
fn test_decode_missing_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("missing.bin");
    assert!(decode::execute(input.to_str().unwrap(), Endianness::Big).is_err());
}

#[test]
fn test_describe_writes_json_layout() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("layout.json");

    describe::execute(Endianness::Little, Some(output.to_str().unwrap())).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["order"], "little");
    assert_eq!(json["size"], 34);

    let fields = json["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 7);
    assert_eq!(fields[0]["name"], "value");
    assert_eq!(fields[0]["kind"], "unsigned");
    assert!(fields[0].get("null").is_none());
    assert_eq!(fields[2]["name"], "pair16[1]");
    assert_eq!(fields[2]["not_set"], true);
    assert_eq!(fields[2]["null"], "ffff");
    assert_eq!(fields[6]["kind"], "text");
    assert_eq!(fields[6]["offset"], 25);
}
