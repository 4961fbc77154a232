// csv.rs - CSV reader/writer for test-case tables

use crate::data::table::{Header, Row, Table};
use crate::error::MergeError;
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

fn header_from_record(record: &StringRecord) -> Option<Header> {
    if record.is_empty() {
        None
    } else {
        Some(Header::new(record.iter()))
    }
}

/// Load a CSV-with-header file fully into memory
pub fn read_table(path: &Path) -> Result<Table, MergeError> {
    let file = File::open(path).map_err(|e| MergeError::io("open", path, e))?;
    read_table_from(file, path)
}

/// Load a CSV-with-header table from any reader; `path` is used for error context
pub fn read_table_from<R: Read>(input: R, path: &Path) -> Result<Table, MergeError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);

    let header = reader
        .headers()
        .map_err(|e| MergeError::csv(path, e))?
        .clone();
    let header = match header_from_record(&header) {
        Some(h) => h,
        None => return Err(MergeError::EmptySource(path.to_path_buf())),
    };

    let mut table = Table::new(header);
    for record in reader.records() {
        let record = record.map_err(|e| MergeError::csv(path, e))?;
        table.rows.push(Row::from_record(&table.header, record.iter()));
    }

    log::debug!(
        "read {} rows with {} columns from {}",
        table.len(),
        table.header.len(),
        path.display()
    );
    Ok(table)
}

/// Header line of in-memory CSV content; `None` for empty content
pub fn read_header(content: &[u8], path: &Path) -> Result<Option<Header>, MergeError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(content);
    let record = reader.headers().map_err(|e| MergeError::csv(path, e))?;
    Ok(header_from_record(record))
}

/// Count data records (header excluded) of in-memory CSV content
pub fn count_rows_in(content: &[u8], path: &Path) -> Result<usize, MergeError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content);
    let mut count = 0;
    for record in reader.records() {
        record.map_err(|e| MergeError::csv(path, e))?;
        count += 1;
    }
    Ok(count)
}

/// Re-open `path` and count its data records
pub fn count_rows(path: &Path) -> Result<usize, MergeError> {
    let content = std::fs::read(path).map_err(|e| MergeError::io("read", path, e))?;
    count_rows_in(&content, path)
}

/// Line terminator used by existing content: CRLF if the first line ends in
/// CRLF, LF otherwise
pub fn detect_terminator(content: &[u8]) -> Terminator {
    match content.iter().position(|&b| b == b'\n') {
        Some(pos) if pos > 0 && content[pos - 1] == b'\r' => Terminator::CRLF,
        _ => Terminator::Any(b'\n'),
    }
}

/// Serialise `rows` in `order`, preceded by `header` when given.
/// Returns the number of rows written.
pub fn write_rows<W: Write>(
    output: W,
    header: Option<&Header>,
    rows: &[Row],
    order: &Header,
    terminator: Terminator,
    path: &Path,
) -> Result<usize, MergeError> {
    let mut writer = WriterBuilder::new()
        .terminator(terminator)
        .from_writer(output);

    if let Some(header) = header {
        writer
            .write_record(header.columns())
            .map_err(|e| MergeError::csv(path, e))?;
    }

    for row in rows {
        // Positional when the row already has this layout, so repeated
        // column names keep their own cells.
        let values: Vec<&str> = if row.keys().eq(order.columns().iter().map(String::as_str)) {
            row.values().collect()
        } else {
            row.values_in(order).ok_or_else(|| MergeError::HeaderMismatch {
                destination: order.columns().to_vec(),
                incoming: row.keys().map(str::to_string).collect(),
            })?
        };
        writer
            .write_record(values)
            .map_err(|e| MergeError::csv(path, e))?;
    }

    writer.flush().map_err(|e| MergeError::io("write", path, e))?;
    Ok(rows.len())
}
