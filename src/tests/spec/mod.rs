// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::spec::header::{CentralDirectoryHeader, EndOfCentralDirectoryHeader, GeneralPurposeFlag, LocalFileHeader};

#[test]
fn general_purpose_flag_bit_layout() {
    let flags = GeneralPurposeFlag::default();
    assert_eq!(flags.as_slice(), [0, 0]);

    let flags = GeneralPurposeFlag { encrypted: true, data_descriptor: true, filename_unicode: true };
    assert_eq!(u16::from_le_bytes(flags.as_slice()), 0x809);

    let parsed = GeneralPurposeFlag::from(0x809);
    assert!(parsed.encrypted);
    assert!(parsed.data_descriptor);
    assert!(parsed.filename_unicode);
}

#[test]
fn local_file_header_roundtrip() {
    let header = LocalFileHeader {
        version: 20,
        flags: GeneralPurposeFlag::default(),
        compression: 0,
        mod_time: 0,
        mod_date: 0,
        crc: 0xCAFEBABE,
        compressed_size: 128,
        uncompressed_size: 128,
        file_name_length: 9,
        extra_field_length: 0,
    };

    let parsed = LocalFileHeader::from(header.as_slice());
    assert_eq!(parsed.version, 20);
    assert_eq!(parsed.compression, 0);
    assert_eq!(parsed.crc, 0xCAFEBABE);
    assert_eq!(parsed.compressed_size, 128);
    assert_eq!(parsed.uncompressed_size, 128);
    assert_eq!(parsed.file_name_length, 9);
    assert_eq!(parsed.extra_field_length, 0);
}

#[test]
fn central_directory_header_roundtrip() {
    let header = CentralDirectoryHeader {
        v_made_by: 20,
        v_needed: 20,
        flags: GeneralPurposeFlag::default(),
        compression: 0,
        mod_time: 0,
        mod_date: 0,
        crc: 0xDEADBEEF,
        compressed_size: 64,
        uncompressed_size: 64,
        file_name_length: 12,
        extra_field_length: 0,
        file_comment_length: 0,
        disk_start: 0,
        inter_attr: 0,
        exter_attr: 0,
        lh_offset: 512,
    };

    let parsed = CentralDirectoryHeader::from(header.as_slice());
    assert_eq!(parsed.v_made_by, 20);
    assert_eq!(parsed.v_needed, 20);
    assert_eq!(parsed.crc, 0xDEADBEEF);
    assert_eq!(parsed.compressed_size, 64);
    assert_eq!(parsed.uncompressed_size, 64);
    assert_eq!(parsed.file_name_length, 12);
    assert_eq!(parsed.lh_offset, 512);
}

#[test]
fn end_of_central_directory_header_roundtrip() {
    let header = EndOfCentralDirectoryHeader {
        disk_num: 0,
        start_cent_dir_disk: 0,
        num_of_entries_disk: 3,
        num_of_entries: 3,
        size_cent_dir: 150,
        cent_dir_offset: 1024,
        file_comm_length: 0,
    };

    let parsed = EndOfCentralDirectoryHeader::from(header.as_slice());
    assert_eq!(parsed.num_of_entries_disk, 3);
    assert_eq!(parsed.num_of_entries, 3);
    assert_eq!(parsed.size_cent_dir, 150);
    assert_eq!(parsed.cent_dir_offset, 1024);
}
