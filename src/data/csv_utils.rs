use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

/// Empty cells and NaN become `None`; anything else must parse as a number.
pub(crate) fn parse_optional_f64(cell: &str) -> Result<Option<f64>> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(None);
    }
    match cell.parse::<f64>() {
        Ok(v) => Ok(finite(Some(v))),
        Err(_) => bail!("'{}' is not a number", cell),
    }
}

/// Collapses NaN and infinities to `None` so rows stay comparable.
#[inline]
pub(crate) fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Fails with the first of `columns` absent from the header row.
pub(crate) fn require_columns<R: Read>(rdr: &mut csv::Reader<R>, columns: &[&str]) -> Result<()> {
    let headers = rdr.headers().context("Failed to read CSV header")?;
    for column in columns {
        if !headers.iter().any(|h| h == *column) {
            bail!("missing column '{}'", column);
        }
    }
    Ok(())
}

pub(crate) fn open_file(path: &Path) -> Result<impl Read> {
    File::open(path).with_context(|| format!("Failed to open file: {:?}", path))
}

pub(crate) fn csv_reader<R: Read>(reader: R, has_headers: bool) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optional_f64() {
        assert_eq!(parse_optional_f64(" 12.5 ").unwrap(), Some(12.5));
        assert_eq!(parse_optional_f64("").unwrap(), None);
        assert_eq!(parse_optional_f64("NaN").unwrap(), None);
        assert!(parse_optional_f64("n/a").is_err());
    }

    #[test]
    fn test_require_columns() {
        let mut rdr = csv_reader("Date,Total\n".as_bytes(), true);
        assert!(require_columns(&mut rdr, &["Date", "Total"]).is_ok());
        assert!(require_columns(&mut rdr, &["Date", "USDT"]).is_err());
    }
}
