// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Loading [LandmarkTables](LandmarkTable) from [OpenStreetMap](https://www.openstreetmap.org/) data.
//!
//! Every [node](https://wiki.openstreetmap.org/wiki/Node) with a name becomes a landmark,
//! in the order in which nodes appear in the file. Ways and relations are ignored.

use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use crate::{Landmark, LandmarkTable, TableError};

mod xml;

/// Format of the input OSM file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFormat {
    /// Unknown format - guess the format from the magic bytes at the start of the content
    #[default]
    Unknown,

    /// Force uncompressed [OSM XML](https://wiki.openstreetmap.org/wiki/OSM_XML)
    Xml,

    /// Force [OSM XML](https://wiki.openstreetmap.org/wiki/OSM_XML)
    /// with [gzip](https://en.wikipedia.org/wiki/Gzip) compression
    XmlGz,

    /// Force [OSM XML](https://wiki.openstreetmap.org/wiki/OSM_XML)
    /// with [bzip2](https://en.wikipedia.org/wiki/Bzip2) compression
    XmlBz2,
}

impl FileFormat {
    /// Guesses the format from the first few bytes of a file.
    pub fn detect(prefix: &[u8]) -> Self {
        if prefix.starts_with(&[0x1f, 0x8b]) {
            Self::XmlGz
        } else if prefix.starts_with(b"BZh") {
            Self::XmlBz2
        } else {
            Self::Xml
        }
    }
}

/// Additional controls for interpreting OSM data as a [LandmarkTable].
#[derive(Debug, Clone)]
pub struct Options<'a> {
    /// Format of the input data.
    pub file_format: FileFormat,

    /// Key of the tag with the landmark name, usually `name`.
    /// Use e.g. `name:en` to load localized names.
    pub name_tag: &'a str,
}

impl Default for Options<'_> {
    fn default() -> Self {
        Self {
            file_format: FileFormat::Unknown,
            name_tag: "name",
        }
    }
}

/// Error which can occur when loading landmarks from OSM data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[error("xml: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("{0}")]
    Table(#[from] TableError),
}

fn build_table<I>(nodes: I, options: &Options<'_>) -> Result<LandmarkTable, Error>
where
    I: Iterator<Item = Result<xml::Node, quick_xml::Error>>,
{
    let mut landmarks = Vec::default();

    for node in nodes {
        let mut node = node?;
        match node.tags.remove(options.name_tag) {
            Some(name) if !name.trim().is_empty() => {
                landmarks.push(Landmark::new(name.trim(), node.lat, node.lon));
            }
            _ => log::trace!("node {} has no {:?} tag", node.id, options.name_tag),
        }
    }

    if landmarks.is_empty() {
        log::warn!("no nodes with a {:?} tag", options.name_tag);
    }

    Ok(LandmarkTable::new(landmarks)?)
}

/// Parse landmarks from a reader as per the provided [Options].
///
/// The provided stream will be automatically wrapped in a buffered reader.
pub fn load_from_io<R: io::Read>(
    reader: R,
    options: &Options<'_>,
) -> Result<LandmarkTable, Error> {
    let mut b = io::BufReader::new(reader);

    let format = match options.file_format {
        FileFormat::Unknown => FileFormat::detect(b.fill_buf()?),
        f => f,
    };
    log::debug!("loading landmarks from {:?}", format);

    match format {
        FileFormat::Unknown | FileFormat::Xml => build_table(xml::Reader::from_io(b), options),

        FileFormat::XmlGz => {
            let d = flate2::read::MultiGzDecoder::new(b);
            let r = xml::Reader::from_io(io::BufReader::new(d));
            build_table(r, options)
        }

        FileFormat::XmlBz2 => {
            let d = bzip2::read::MultiBzDecoder::new(b);
            let r = xml::Reader::from_io(io::BufReader::new(d));
            build_table(r, options)
        }
    }
}

/// Parse landmarks from a file at the provided path as per the provided [Options].
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    options: &Options<'_>,
) -> Result<LandmarkTable, Error> {
    let f = File::open(path)?;
    load_from_io(f, options)
}

/// Parse landmarks from a static buffer as per the provided [Options].
pub fn load_from_buffer(data: &[u8], options: &Options<'_>) -> Result<LandmarkTable, Error> {
    let format = match options.file_format {
        FileFormat::Unknown => FileFormat::detect(data),
        f => f,
    };

    if format == FileFormat::Xml {
        // Fast path is available for in-memory XML data
        build_table(xml::Reader::from_buffer(data), options)
    } else {
        // Wrap the buffer in a cursor and use the IO path
        let options = Options {
            file_format: format,
            ..options.clone()
        };
        load_from_io(io::Cursor::new(data), &options)
    }
}
