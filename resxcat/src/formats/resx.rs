//! Support for the .NET `.resx` localization resource format.
//!
//! Only string-valued `<data>` elements are supported. Typed entries (file
//! references, binary blobs) carry no nested `<value>` text usable as a
//! translation and fall out of the extracted mapping.
//! Provides parsing, serialization, and extraction into the flat
//! `Translations` mapping.

use quick_xml::{
    Reader, Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use serde::Serialize;
use std::{
    fs::File,
    io::{BufRead, Read, Write},
    path::Path,
};

use crate::{
    error::Error,
    traits::Parser,
    types::{LocaleResource, Translations},
};

/// Represents a parsed `.resx` resource document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Format {
    /// All `<data>` entries in document order.
    pub entries: Vec<DataEntry>,
}

impl Parser for Format {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut entries = Vec::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) if e.name().as_ref() == b"data" => {
                    let entry = parse_data_entry(e, &mut xml_reader)?;
                    entries.push(entry);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(Error::XmlParse(e)),
            }
            buf.clear();
        }
        Ok(Format { entries })
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut xml_writer = Writer::new(&mut writer);

        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;

        xml_writer.write_event(Event::Start(BytesStart::new("root")))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;

        write_header_entry(&mut xml_writer, "resmimetype", "text/microsoft-resx")?;
        write_header_entry(&mut xml_writer, "version", "2.0")?;

        for entry in &self.entries {
            let mut elem = BytesStart::new("data");
            elem.push_attribute(("name", entry.name.as_str()));
            elem.push_attribute(("xml:space", "preserve"));

            xml_writer.write_event(Event::Start(elem))?;
            if let Some(value) = &entry.value {
                xml_writer.write_event(Event::Start(BytesStart::new("value")))?;
                xml_writer.write_event(Event::Text(BytesText::new(value)))?;
                xml_writer.write_event(Event::End(BytesEnd::new("value")))?;
            }
            if let Some(comment) = &entry.comment {
                xml_writer.write_event(Event::Start(BytesStart::new("comment")))?;
                xml_writer.write_event(Event::Text(BytesText::new(comment)))?;
                xml_writer.write_event(Event::End(BytesEnd::new("comment")))?;
            }
            xml_writer.write_event(Event::End(BytesEnd::new("data")))?;
            xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
        }

        xml_writer.write_event(Event::End(BytesEnd::new("root")))?;
        xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
        Ok(())
    }

    /// Override default file reading to support BOM-aware decoding
    /// (Visual Studio writes `.resx` files with a UTF-8 BOM).
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded).map_err(Error::Io)?;

        Self::from_str(&decoded)
    }
}

impl Format {
    /// Extracts the flat `name → value` mapping from this document.
    ///
    /// Entries with an empty name or without a `<value>` element are
    /// excluded; later duplicates overwrite earlier ones.
    pub fn translations(&self) -> Translations {
        let mut translations = Translations::new();
        for entry in &self.entries {
            if entry.name.is_empty() {
                continue;
            }
            if let Some(value) = &entry.value {
                translations.insert(entry.name.clone(), value.clone());
            }
        }
        translations
    }

    /// Converts this document into a [`LocaleResource`] for the given locale.
    ///
    /// The locale is taken from the caller since `.resx` documents carry no
    /// language metadata; it is encoded in the file name instead.
    pub fn into_locale_resource(self, locale: impl Into<String>) -> LocaleResource {
        LocaleResource::new(locale, self.translations())
    }
}

/// One `<data>` element of a `.resx` document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataEntry {
    pub name: String,
    /// `None` when the element has no `<value>` child; `Some("")` for an
    /// empty `<value/>`.
    pub value: Option<String>,
    pub comment: Option<String>,
}

fn parse_data_entry<R: BufRead>(
    e: &BytesStart,
    xml_reader: &mut Reader<R>,
) -> Result<DataEntry, Error> {
    let mut name = String::new();

    for attr in e.attributes().with_checks(false) {
        let attr = attr.map_err(|e| Error::DataMismatch(e.to_string()))?;
        if attr.key.as_ref() == b"name" {
            name = attr.unescape_value()?.to_string();
        }
    }

    let mut value = None;
    let mut comment = None;
    let mut buf = Vec::new();

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref inner)) => match inner.name().as_ref() {
                b"value" => value = Some(read_element_text(xml_reader)?),
                b"comment" => comment = Some(read_element_text(xml_reader)?),
                _ => {}
            },
            Ok(Event::Empty(ref inner)) if inner.name().as_ref() == b"value" => {
                value = Some(String::new());
            }
            Ok(Event::End(ref end)) if end.name().as_ref() == b"data" => break,
            Ok(Event::Eof) => {
                return Err(Error::InvalidResource(
                    "Unexpected EOF inside data element".to_string(),
                ));
            }
            Ok(_) => {}
            Err(e) => return Err(Error::XmlParse(e)),
        }
        buf.clear();
    }

    Ok(DataEntry {
        name,
        value,
        comment,
    })
}

fn read_element_text<R: BufRead>(xml_reader: &mut Reader<R>) -> Result<String, Error> {
    let mut buf = Vec::new();
    let mut text = String::new();
    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Text(e)) => {
                text.push_str(&e.unescape().map_err(Error::XmlParse)?);
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(Error::InvalidResource("Unexpected EOF".to_string()));
            }
            Ok(_) => {}
            Err(e) => return Err(Error::XmlParse(e)),
        }
        buf.clear();
    }
    Ok(text)
}

fn write_header_entry<W: Write>(
    xml_writer: &mut Writer<W>,
    name: &str,
    value: &str,
) -> Result<(), Error> {
    let mut elem = BytesStart::new("resheader");
    elem.push_attribute(("name", name));
    xml_writer.write_event(Event::Start(elem))?;
    xml_writer.write_event(Event::Start(BytesStart::new("value")))?;
    xml_writer.write_event(Event::Text(BytesText::new(value)))?;
    xml_writer.write_event(Event::End(BytesEnd::new("value")))?;
    xml_writer.write_event(Event::End(BytesEnd::new("resheader")))?;
    xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
    Ok(())
}
