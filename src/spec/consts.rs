// Copyright (c) 2022 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub const SIGNATURE_LENGTH: usize = 4;

// Local file header constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#437
pub const LFH_SIGNATURE: u32 = 0x4034b50;
pub const LFH_LENGTH: usize = 26;

// Central directory header constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4312
pub const CDH_SIGNATURE: u32 = 0x2014b50;
pub const CDH_LENGTH: usize = 42;

// End of central directory record constants
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#4316
pub const EOCDR_SIGNATURE: u32 = 0x6054b50;
pub const EOCDR_LENGTH: usize = 18;

// Compression method field value for stored (uncompressed) entries.
//
// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#445
pub const STORED_METHOD: u16 = 0;

// Value written to both "version made by" and "version needed to extract".
pub const ZIP_VERSION: u16 = 20;

// Limits of the classic (non-ZIP64) record fields.
pub const NON_ZIP64_MAX_NUM_FILES: u16 = u16::MAX;
pub const NON_ZIP64_MAX_SIZE: u32 = u32::MAX;
