//! CSV ingestion for the EV population dataset.

use std::io::Read;
use std::path::Path;

use crate::dataset::record::{RawRecord, VehicleRecord};
use crate::error::{Result, TrendError};

/// Columns the analysis depends on; their absence from the header is a
/// configuration problem, not a data-quality problem, and fails fast.
const REQUIRED_COLUMNS: [&str; 6] = [
    "Model Year",
    "Make",
    "Model",
    "County",
    "City",
    "Electric Vehicle Type",
];

/// Load vehicle records from a CSV file on disk.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<VehicleRecord>> {
    let reader = csv::Reader::from_path(path)?;
    from_csv_reader(reader)
}

/// Load vehicle records from any reader yielding CSV text with a header row.
pub fn from_reader<R: Read>(rdr: R) -> Result<Vec<VehicleRecord>> {
    let reader = csv::Reader::from_reader(rdr);
    from_csv_reader(reader)
}

fn from_csv_reader<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<VehicleRecord>> {
    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h.trim() == column) {
            return Err(TrendError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    let mut row = csv::StringRecord::new();
    loop {
        // Position is taken before the read so quoted fields with embedded
        // newlines do not skew the reported line.
        let line = reader.position().line();
        if !reader.read_record(&mut row)? {
            break;
        }
        let raw: RawRecord = row.deserialize(Some(&headers))?;
        records.push(raw.validate(line)?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "VIN (1-10),County,City,State,Postal Code,Model Year,Make,Model,\
Electric Vehicle Type,Clean Alternative Fuel Vehicle (CAFV) Eligibility,Electric Range,\
Base MSRP,Legislative District,DOL Vehicle ID,Vehicle Location,Electric Utility,2020 Census Tract";

    fn row(year: &str, make: &str, city: &str) -> String {
        format!(
            "5YJ3E1EA0K,King,{city},WA,98101,{year},{make},MODEL 3,\
Battery Electric Vehicle (BEV),Eligible,220,0,43,123456789,POINT (-122.3 47.6),\
CITY OF SEATTLE,53033007800"
        )
    }

    #[test]
    fn loads_well_formed_rows() {
        let csv = format!(
            "{HEADER}\n{}\n{}\n",
            row("2019", "TESLA", "Seattle"),
            row("2021", "NISSAN", "Tacoma")
        );
        let records = from_reader(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].model_year, Some(2019));
        assert_eq!(records[1].city.as_deref(), Some("Tacoma"));
    }

    #[test]
    fn rejects_missing_required_column() {
        let csv = "VIN (1-10),County,City\nabc,King,Seattle\n";
        let err = from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, TrendError::MissingColumn(ref c) if c == "Model Year"));
    }

    #[test]
    fn surfaces_invalid_year_with_line_number() {
        let csv = format!(
            "{HEADER}\n{}\n{}\n",
            row("2019", "TESLA", "Seattle"),
            row("MMXXI", "NISSAN", "Tacoma")
        );
        let err = from_reader(csv.as_bytes()).unwrap_err();
        match err {
            TrendError::InvalidYear { value, line } => {
                assert_eq!(value, "MMXXI");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn line_numbers_account_for_embedded_newlines() {
        // The quoted location field spans two physical lines, so the bad
        // row starts on line 4, not 3.
        let multiline_row = "5YJ3E1EA0K,King,Seattle,WA,98101,2019,TESLA,MODEL 3,\
Battery Electric Vehicle (BEV),Eligible,220,0,43,123456789,\"POINT\n(-122.3 47.6)\",\
CITY OF SEATTLE,53033007800";
        let csv = format!(
            "{HEADER}\n{multiline_row}\n{}\n",
            row("MMXXI", "NISSAN", "Tacoma")
        );
        let err = from_reader(csv.as_bytes()).unwrap_err();
        match err {
            TrendError::InvalidYear { value, line } => {
                assert_eq!(value, "MMXXI");
                assert_eq!(line, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_fields_become_missing_values() {
        let blank_row = "5YJ3E1EA0K,King,,WA,98101,,TESLA,MODEL 3,\
Battery Electric Vehicle (BEV),Eligible,,0,43,123456789,POINT (-122.3 47.6),\
CITY OF SEATTLE,53033007800";
        let csv = format!("{HEADER}\n{blank_row}\n");
        let records = from_reader(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].city, None);
        assert_eq!(records[0].model_year, None);
        assert_eq!(records[0].electric_range, None);
        assert!(!records[0].is_complete());
    }
}
