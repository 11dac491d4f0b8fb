// Raw table reading - CSV and Excel, first worksheet only.

use std::io::Read;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

// ── Raw cells ───────────────────────────────────────────────────────

/// Source-format hint attached to a raw cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellHint {
    /// Plain text (or a number rendered as text). The default.
    Text,
    /// The cell held a spreadsheet date/time value; `value` is the
    /// numeric date serial, not display text.
    DateSerial,
}

/// One cell as read from the source file, before coercion.
#[derive(Debug, Clone)]
pub struct RawCell {
    pub value: String,
    pub hint: CellHint,
}

impl RawCell {
    pub fn text(value: impl Into<String>) -> Self {
        RawCell {
            value: value.into(),
            hint: CellHint::Text,
        }
    }
}

/// A parsed input file: first row as headers, every following row padded
/// to the header width (missing trailing cells become empty strings).
#[derive(Debug)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
}

// ── Entry point ─────────────────────────────────────────────────────

/// Read a spreadsheet (`.xlsx`/`.xls`) or delimited text file into a raw
/// table. Excel files contribute their first worksheet only.
pub fn read_table(path: &Path) -> Result<RawTable, String> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "xlsx" | "xls" | "xlsb" | "ods" => read_excel(path),
        _ => read_csv(path),
    }
}

// ── CSV ─────────────────────────────────────────────────────────────

/// Read file bytes and convert to UTF-8, falling back to Windows-1252
/// (common for Excel-exported CSVs).
fn read_file_as_utf8(path: &Path) -> Result<String, String> {
    let mut file = std::fs::File::open(path)
        .map_err(|e| format!("cannot open {}: {}", path.display(), e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;

    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

/// Detect the most likely field delimiter by checking consistency across
/// the first few lines. The delimiter producing the most consistent
/// field count (>1 field) wins; ties break toward more columns.
fn sniff_delimiter(content: &str) -> u8 {
    let candidates: &[u8] = &[b'\t', b';', b',', b'|'];
    let sample_lines: Vec<&str> = content.lines().take(10).collect();

    if sample_lines.is_empty() {
        return b',';
    }

    let mut best = b',';
    let mut best_score = 0u64;

    for &delim in candidates {
        let counts: Vec<usize> = sample_lines
            .iter()
            .map(|line| {
                csv::ReaderBuilder::new()
                    .delimiter(delim)
                    .has_headers(false)
                    .flexible(true)
                    .from_reader(line.as_bytes())
                    .records()
                    .next()
                    .and_then(|r| r.ok())
                    .map(|r| r.len())
                    .unwrap_or(1)
            })
            .collect();

        if counts.first().copied().unwrap_or(0) <= 1 {
            continue;
        }

        let target = counts[0];
        let consistent = counts.iter().filter(|&&c| c == target).count() as u64;
        let score = consistent * target as u64;

        if score > best_score {
            best_score = score;
            best = delim;
        }
    }

    best
}

fn read_csv(path: &Path) -> Result<RawTable, String> {
    let content = read_file_as_utf8(path)?;
    let delimiter = sniff_delimiter(&content);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut headers: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<RawCell>> = Vec::new();

    for (row_idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| format!("CSV parse error: {}", e))?;
        if row_idx == 0 {
            headers = record.iter().map(|f| f.to_string()).collect();
            continue;
        }
        let mut cells: Vec<RawCell> =
            record.iter().map(RawCell::text).collect();
        // Pad short rows so header/cell pairing stays positional.
        while cells.len() < headers.len() {
            cells.push(RawCell::text(""));
        }
        rows.push(cells);
    }

    if headers.is_empty() {
        return Err(format!("{}: no header row", path.display()));
    }

    Ok(RawTable { headers, rows })
}

// ── Excel ───────────────────────────────────────────────────────────

/// Render one calamine cell as a raw cell. Numbers keep integer form
/// where exact; date/time cells carry their serial with a hint so the
/// coercion engine can decode them.
fn data_to_cell(cell: &Data) -> RawCell {
    match cell {
        Data::Empty => RawCell::text(""),
        Data::String(s) => RawCell::text(s.as_str()),
        Data::Float(n) => {
            let value = if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{}", n)
            };
            RawCell::text(value)
        }
        Data::Int(n) => RawCell::text(format!("{}", n)),
        Data::Bool(b) => RawCell::text(if *b { "TRUE" } else { "FALSE" }),
        Data::Error(e) => RawCell::text(format!("#{:?}", e)),
        Data::DateTime(dt) => RawCell {
            value: format!("{}", dt.as_f64()),
            hint: CellHint::DateSerial,
        },
        Data::DateTimeIso(s) => RawCell::text(s.as_str()),
        Data::DurationIso(s) => RawCell::text(s.as_str()),
    }
}

fn read_excel(path: &Path) -> Result<RawTable, String> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| format!("cannot open {}: {}", path.display(), e))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let first = sheet_names
        .first()
        .ok_or_else(|| format!("{}: workbook contains no sheets", path.display()))?
        .clone();

    let range = workbook
        .worksheet_range(&first)
        .map_err(|e| format!("cannot read sheet '{}': {}", first, e))?;

    let mut row_iter = range.rows();
    let headers: Vec<String> = match row_iter.next() {
        Some(row) => row.iter().map(|c| data_to_cell(c).value).collect(),
        None => return Err(format!("{}: sheet '{}' is empty", path.display(), first)),
    };

    let width = headers.len();
    let mut rows: Vec<Vec<RawCell>> = Vec::new();
    for row in row_iter {
        let mut cells: Vec<RawCell> = row.iter().map(data_to_cell).collect();
        while cells.len() < width {
            cells.push(RawCell::text(""));
        }
        rows.push(cells);
    }

    Ok(RawTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn sniff_comma_and_semicolon() {
        assert_eq!(sniff_delimiter("A,B,C\n1,2,3\n"), b',');
        assert_eq!(sniff_delimiter("A;B;C\n1;2;3\n"), b';');
        assert_eq!(sniff_delimiter("A\tB\tC\n1\t2\t3\n"), b'\t');
    }

    #[test]
    fn csv_first_row_is_headers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("leads.csv");
        fs::write(&path, "Buyer,Product\nAcme,Coffee\nGlobex,Sesame\n").unwrap();

        let table = read_table(&path).unwrap();
        assert_eq!(table.headers, vec!["Buyer", "Product"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][0].value, "Acme");
        assert_eq!(table.rows[1][1].value, "Sesame");
    }

    #[test]
    fn short_rows_are_padded_with_empty_cells() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        fs::write(&path, "A,B,C\nonly-a\n").unwrap();

        let table = read_table(&path).unwrap();
        assert_eq!(table.rows[0].len(), 3);
        assert_eq!(table.rows[0][0].value, "only-a");
        assert_eq!(table.rows[0][1].value, "");
        assert_eq!(table.rows[0][2].value, "");
    }

    #[test]
    fn empty_file_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "").unwrap();
        assert!(read_table(&path).is_err());
    }

    #[test]
    fn windows_1252_content_still_reads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin.csv");
        // "Café" with 0xE9 (Windows-1252 é), invalid as UTF-8.
        fs::write(&path, b"Buyer,Product\nCaf\xe9,Coffee\n").unwrap();

        let table = read_table(&path).unwrap();
        assert_eq!(table.rows[0][0].value, "Café");
    }

    #[test]
    fn float_cells_keep_integer_form() {
        assert_eq!(data_to_cell(&Data::Float(33110.0)).value, "33110");
        assert_eq!(data_to_cell(&Data::Float(2.5)).value, "2.5");
        assert_eq!(data_to_cell(&Data::Int(7)).value, "7");
        assert_eq!(data_to_cell(&Data::Empty).value, "");
        assert_eq!(data_to_cell(&Data::String("x".into())).value, "x");
    }
}
