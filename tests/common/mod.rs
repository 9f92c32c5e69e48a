// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use std::io::{Cursor, Read};

/// A file set resembling a small static-site project.
pub const FILE_LIST: &[(&str, &str)] = &[
    ("index.html", "<!doctype html>\n<html><body><h1>demo</h1></body></html>\n"),
    ("css/site.css", "body { margin: 0; font-family: sans-serif; }\n"),
    ("js/app.js", "document.title = 'ready';\n"),
    ("notes/empty.txt", ""),
    ("notes/unicode.txt", "h\u{e9}llo \u{2603} \u{1f980}\n"),
];

/// Unpacks an archive with the `zip` crate and returns its (path, content) pairs in entry order.
pub fn unpack(bytes: Vec<u8>) -> Vec<(String, String)> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("failed to open archive");
    let mut entries = Vec::new();

    for index in 0..archive.len() {
        let mut file = archive.by_index(index).expect("failed to open entry");

        let mut content = String::new();
        file.read_to_string(&mut content).expect("failed to read entry");

        entries.push((file.name().to_string(), content));
    }

    entries
}
