//! Reading raw phonebook rows, normalising them, and writing the cleaned file.

use std::{fs, io, path::Path};

use tracing::{debug, info};

use super::{
    names::parse_name,
    phone::format_phone,
    record::{Contact, RawRecord, FIELD_COUNT, HEADER},
};
use crate::{
    calllog::{logged, CallSink},
    error::Result,
};

/// Read every row of a comma-delimited file. No header handling is done here.
pub fn load(path: &Path) -> Result<Vec<RawRecord>> {
    let rows = read_rows(csv_reader().from_path(path)?)?;
    info!(rows = rows.len(), path = %path.display(), "loaded phonebook rows");
    Ok(rows)
}

/// Same as [`load`] over any reader.
pub fn load_from_reader<R: io::Read>(reader: R) -> Result<Vec<RawRecord>> {
    read_rows(csv_reader().from_reader(reader))
}

fn csv_reader() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(false).flexible(true).delimiter(b',');
    builder
}

fn read_rows<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Vec<RawRecord>> {
    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        rows.push(RawRecord::new(idx as u64 + 1, record.iter()));
    }
    Ok(rows)
}

/// Turn one raw row into a contact: split the name columns, reformat the phone.
pub fn normalize_record(record: &RawRecord, sink: &dyn CallSink) -> Result<Contact> {
    record.field(FIELD_COUNT - 1)?;
    let (first, second, third) = (record.field(0)?, record.field(1)?, record.field(2)?);
    let name = logged(sink, "parse_name", (first, second, third), || {
        parse_name(first, second, third)
    })?;
    let raw_phone = record.field(5)?;
    let phone = logged(sink, "format_phone", (raw_phone,), || format_phone(raw_phone))?;

    Ok(Contact {
        lastname: name.lastname,
        firstname: name.firstname,
        surname: name.surname,
        organization: record.field(3)?.to_string(),
        position: record.field(4)?.to_string(),
        phone,
        email: record.field(6)?.to_string(),
    })
}

/// Normalise every data row, skipping blank rows and the header row.
pub fn normalize(rows: &[RawRecord], sink: &dyn CallSink) -> Result<Vec<Contact>> {
    let mut contacts = Vec::with_capacity(rows.len());
    for record in rows {
        if record.is_blank() {
            debug!(record = record.number, "skipping blank row");
            continue;
        }
        if record.is_header() {
            debug!(record = record.number, "skipping header row");
            continue;
        }
        contacts.push(normalize_record(record, sink)?);
    }
    info!(contacts = contacts.len(), "normalised contacts");
    Ok(contacts)
}

/// Write the header row followed by every contact.
pub fn write(path: &Path, contacts: &[Contact]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path)?;
    write_to(file, contacts)?;
    info!(path = %path.display(), rows = contacts.len(), "wrote phonebook");
    Ok(())
}

/// Same as [`write`] over any writer. Rows end with CRLF.
pub fn write_to<W: io::Write>(writer: W, contacts: &[Contact]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b',')
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);
    writer.write_record(HEADER)?;
    for contact in contacts {
        writer.write_record(contact.fields())?;
    }
    writer.flush()?;
    Ok(())
}
