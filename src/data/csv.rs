//! Loader for the delimited digit format: one record per line,
//! `label,p0,p1,...,p783`, where the label is a digit 0-9 and each pixel is
//! a raw intensity 0-255 (28x28 images, row-major within the record).
//!
//! Every intensity `v` is normalised with `f = (v / 255) * 0.99 + 0.01`, so
//! parsed pixels always lie in `[0.01, 1.0]`. The floor keeps zero-intensity
//! pixels from zeroing out their weight updates entirely. The network treats
//! this range as a precondition and never re-normalises.

use std::fs;

/// Image side length in pixels.
pub const IMAGE_SIDE: usize = 28;

/// Pixels per digit record.
pub const PIXELS_PER_DIGIT: usize = IMAGE_SIDE * IMAGE_SIDE;

/// Distinct digit classes.
pub const NUM_CLASSES: usize = 10;

/// A parse or read failure with row context baked into the message.
#[derive(Debug)]
pub struct CsvError(pub String);

impl std::fmt::Display for CsvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for CsvError {}

/// A loaded, normalised digit set. `labels` and `pixels` always have the
/// same length; each pixel row has exactly [`PIXELS_PER_DIGIT`] values.
#[derive(Debug, Clone)]
pub struct DigitSet {
    pub labels: Vec<u8>,
    pub pixels: Vec<Vec<f32>>,
}

impl DigitSet {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Reads and parses at most `max_rows` records from `path`.
pub fn load_digits_csv(path: &str, max_rows: usize) -> Result<DigitSet, CsvError> {
    let text = fs::read_to_string(path)
        .map_err(|e| CsvError(format!("cannot read '{}': {}", path, e)))?;
    parse_digits_csv(&text, max_rows)
}

/// Parses CSV text into a [`DigitSet`], stopping after `max_rows` records.
///
/// A leading header row (any non-numeric first cell) is skipped. Blank lines
/// are ignored. Errors carry the 1-based row number of the offending line.
pub fn parse_digits_csv(text: &str, max_rows: usize) -> Result<DigitSet, CsvError> {
    let mut labels: Vec<u8> = Vec::new();
    let mut pixels: Vec<Vec<f32>> = Vec::new();

    let mut lines = text.lines().peekable();
    if let Some(first) = lines.peek() {
        if is_header(first) {
            lines.next();
        }
    }

    for (row_idx, line) in lines.enumerate() {
        if labels.len() == max_rows {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cells: Vec<&str> = line.split(',').collect();
        if cells.len() != PIXELS_PER_DIGIT + 1 {
            return Err(CsvError(format!(
                "row {}: expected {} fields (label + {} pixels), got {}",
                row_idx + 1,
                PIXELS_PER_DIGIT + 1,
                PIXELS_PER_DIGIT,
                cells.len()
            )));
        }

        let label: u8 = cells[0].trim().parse().map_err(|_| {
            CsvError(format!(
                "row {}: label '{}' is not a non-negative integer",
                row_idx + 1,
                cells[0]
            ))
        })?;
        if (label as usize) >= NUM_CLASSES {
            return Err(CsvError(format!(
                "row {}: label {} out of range 0-{}",
                row_idx + 1,
                label,
                NUM_CLASSES - 1
            )));
        }

        let mut row_pixels = Vec::with_capacity(PIXELS_PER_DIGIT);
        for cell in &cells[1..] {
            let raw: u32 = cell.trim().parse().map_err(|_| {
                CsvError(format!(
                    "row {}: pixel '{}' is not a non-negative integer",
                    row_idx + 1,
                    cell
                ))
            })?;
            if raw > 255 {
                return Err(CsvError(format!(
                    "row {}: pixel intensity {} out of range 0-255",
                    row_idx + 1,
                    raw
                )));
            }
            row_pixels.push(normalise(raw));
        }

        labels.push(label);
        pixels.push(row_pixels);
    }

    if labels.is_empty() {
        return Err(CsvError("CSV contains no data rows".to_string()));
    }

    Ok(DigitSet { labels, pixels })
}

/// Maps a raw 0-255 intensity into `[0.01, 1.0]`.
fn normalise(raw: u32) -> f32 {
    (raw as f32 / 255.0) * 0.99 + 0.01
}

/// Returns `true` if the first cell is non-numeric, meaning the row is a
/// column-name header rather than data.
fn is_header(line: &str) -> bool {
    match line.split(',').next() {
        Some(cell) => {
            let t = cell.trim();
            !t.is_empty() && t.parse::<f64>().is_err()
        }
        None => false,
    }
}
