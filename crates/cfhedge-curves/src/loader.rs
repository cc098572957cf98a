//! CSV curve files.
//!
//! A curve file has a header row and two columns, `date` (ISO `YYYY-MM-DD`)
//! and `discount_factor`. A market-data directory holds one file per curve
//! named after its key, e.g. `EUR.3M.20230331.csv`.

use std::io;
use std::path::Path;

use serde::Deserialize;

use cfhedge_core::types::Date;

use crate::curve::DiscountCurve;
use crate::error::{CurveError, CurveResult};
use crate::key::CurveKey;
use crate::store::CurveStore;

#[derive(Debug, Deserialize)]
struct PillarRecord {
    date: Date,
    #[serde(alias = "df")]
    discount_factor: f64,
}

fn read_records<R: io::Read>(reader: R, source: &str) -> CurveResult<(Vec<Date>, Vec<f64>)> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut dates = Vec::new();
    let mut dfs = Vec::new();
    for result in reader.deserialize() {
        let record: PillarRecord = result.map_err(|e| CurveError::load(source, e))?;
        dates.push(record.date);
        dfs.push(record.discount_factor);
    }
    Ok((dates, dfs))
}

/// Reads a curve from CSV data.
///
/// The base date defaults to the first pillar date; passing one explicitly
/// validates the file against it.
pub fn read_curve_csv<R: io::Read>(reader: R, base_date: Option<Date>) -> CurveResult<DiscountCurve> {
    let (dates, dfs) = read_records(reader, "<input>")?;
    let base = match (base_date, dates.first()) {
        (Some(base), _) => base,
        (None, Some(first)) => *first,
        (None, None) => return Err(CurveError::InsufficientPoints { required: 2, got: 0 }),
    };
    DiscountCurve::new(base, dates, dfs)
}

/// Loads a curve from a CSV file.
pub fn load_curve_csv(path: impl AsRef<Path>, base_date: Option<Date>) -> CurveResult<DiscountCurve> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| CurveError::load(path.display().to_string(), e))?;
    read_curve_csv(file, base_date)
}

/// Loads every `*.csv` file in `dir` whose stem is a curve key.
///
/// Files with other names are skipped with a warning; a file whose name is a
/// valid key but whose contents fail validation aborts the load.
pub fn load_market_data_dir(dir: impl AsRef<Path>) -> CurveResult<CurveStore> {
    let dir = dir.as_ref();
    let entries =
        std::fs::read_dir(dir).map_err(|e| CurveError::load(dir.display().to_string(), e))?;

    let mut store = CurveStore::new();
    for entry in entries {
        let path = entry
            .map_err(|e| CurveError::load(dir.display().to_string(), e))?
            .path();
        if path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let key: CurveKey = match stem.parse() {
            Ok(key) => key,
            Err(e) => {
                log::warn!("skipping {}: {e}", path.display());
                continue;
            }
        };

        let curve = load_curve_csv(&path, Some(key.as_of))?;
        store.insert(key, curve, false)?;
    }

    log::info!("loaded {} curves from {}", store.len(), dir.display());
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfhedge_core::ErrorKind;

    const CSV: &str = "date,discount_factor\n\
                       2023-03-31,1\n\
                       2023-06-27,0.992546003302532\n\
                       2023-09-25,0.98372606051833\n";

    #[test]
    fn test_read_curve() {
        let curve = read_curve_csv(CSV.as_bytes(), None).unwrap();
        assert_eq!(curve.base_date(), Date::from_ymd(2023, 3, 31).unwrap());
        assert_eq!(curve.dates().len(), 3);
    }

    #[test]
    fn test_read_curve_base_mismatch() {
        let base = Date::from_ymd(2023, 3, 30).unwrap();
        let err = read_curve_csv(CSV.as_bytes(), Some(base)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCurveBaseline);
    }

    #[test]
    fn test_read_curve_bad_row() {
        let data = "date,discount_factor\n2023-03-31,one\n";
        assert!(matches!(
            read_curve_csv(data.as_bytes(), None),
            Err(CurveError::Load { .. })
        ));
    }

    #[test]
    fn test_load_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("EUR.3M.20230331.csv"), CSV).unwrap();
        std::fs::write(dir.path().join("notes.csv"), "ignored").unwrap();
        std::fs::write(dir.path().join("README.txt"), "ignored").unwrap();

        let store = load_market_data_dir(dir.path()).unwrap();
        assert_eq!(store.len(), 1);
        let key: CurveKey = "EUR.3M.20230331".parse().unwrap();
        assert!(store.contains(&key));
    }
}
