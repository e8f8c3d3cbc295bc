use crate::record::Phase;

/// Identifiers recovered from a log file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedName {
    pub database: String,
    pub workload: String,
    pub phase: Phase,
}

/// Decode a file name of the shape `<database>_<workload>_<phase>_<timestamp>.log`.
///
/// The workload identifier may itself contain `_` (e.g. `workload_scan100`),
/// so the phase is located by scanning for the first literal `load`/`run`
/// token after the database instead of splitting by fixed position. Names
/// that don't follow the convention return `None` and are skipped by the
/// caller.
pub fn decode(filename: &str) -> Option<DecodedName> {
    let stem = filename.strip_suffix(".log").unwrap_or(filename);
    let tokens: Vec<&str> = stem.split('_').collect();

    // need at least database_workload_phase_timestamp
    if tokens.len() < 4 {
        return None;
    }

    let phase_position = tokens
        .iter()
        .skip(1)
        .position(|token| token.parse::<Phase>().is_ok())
        .map(|position| position + 1)?;

    Some(DecodedName {
        database: tokens[0].to_owned(),
        // everything between the database and the phase, separators restored
        workload: tokens[1..phase_position].join("_"),
        phase: tokens[phase_position].parse().ok()?,
    })
}
