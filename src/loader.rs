//! Loader
//!
//! Reading labeled examples from CSV. The header row names the attributes;
//! the last column of every record is the boolean label. Attribute fields are
//! kept as their trimmed text.
use crate::data::{AttributeMap, AttributeValue, Dataset, LabeledExample};
use crate::errors::Id3Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read labeled examples from a CSV file.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledExample>, Id3Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Id3Error::UnableToRead(format!("{}: {}", path.display(), e)))?;
    from_reader(file)
}

/// Read a CSV file into a validated [`Dataset`].
pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, Id3Error> {
    Dataset::new(read_csv(path)?)
}

/// Read labeled examples from any CSV source.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<LabeledExample>, Id3Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| Id3Error::UnableToRead(e.to_string()))?
        .clone();
    if headers.len() < 2 {
        return Err(Id3Error::UnableToRead(format!(
            "expected at least one attribute column and a label column, found {} columns",
            headers.len()
        )));
    }
    let attributes: Vec<&str> = headers.iter().take(headers.len() - 1).collect();

    let mut examples = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| Id3Error::UnableToRead(e.to_string()))?;
        let raw_label = &record[record.len() - 1];
        let label = parse_label(raw_label).ok_or_else(|| Id3Error::ParseLabel(raw_label.to_string(), row))?;
        let map: AttributeMap = attributes
            .iter()
            .zip(record.iter())
            .map(|(a, v)| (*a, AttributeValue::from(v)))
            .collect();
        examples.push(LabeledExample::new(map, label));
    }

    if examples.is_empty() {
        return Err(Id3Error::EmptyDataset);
    }
    Ok(examples)
}

fn parse_label(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
