//! IERS `finals2000A` fixed-column text.
//!
//! Lines that are too short or miss a required field are skipped, so a file
//! whose predictions run out part way through still yields its usable days.

use super::record::{EopRecord, EopSource};
use crate::{DynamicsError, DynamicsResult};

pub fn parse_finals(content: &str) -> DynamicsResult<Vec<EopRecord>> {
    let mut records: Vec<EopRecord> = content.lines().filter_map(parse_finals_line).collect();

    if records.is_empty() {
        return Err(DynamicsError::parsing_error(
            "No valid records found in finals2000A data",
        ));
    }

    records.sort_by(|a, b| a.mjd.total_cmp(&b.mjd));
    Ok(records)
}

pub fn parse_finals_line(line: &str) -> Option<EopRecord> {
    if line.len() < 79 {
        return None;
    }

    let mjd = parse_field(line, 7, 15)?;
    let xp = parse_field(line, 18, 27)?;
    let yp = parse_field(line, 37, 46)?;
    let ut1_utc = parse_field(line, 58, 68)?;
    // LOD is published in milliseconds.
    let lod = parse_field(line, 79, 86).unwrap_or(0.0) * 0.001;
    let dx = parse_field(line, 97, 106);
    let dy = parse_field(line, 116, 125);

    let mut record = EopRecord::new(mjd, xp, yp, ut1_utc, lod)
        .ok()?
        .with_source(EopSource::IersFinals);

    if let (Some(dx), Some(dy)) = (dx, dy) {
        record = record.with_cip_offsets(dx, dy).ok()?;
    }

    Some(record)
}

fn parse_field(line: &str, start: usize, end: usize) -> Option<f64> {
    let s = line.get(start..end)?.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok()
}
