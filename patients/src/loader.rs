use super::Patient;
use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub fn load_patients<P: AsRef<Path>>(path: P) -> io::Result<Vec<Patient>> {
    let path = path.as_ref();
    debug!("loading patients from {}", path.display());
    let file = File::open(path)?;
    read_patients(BufReader::new(file))
}

/// Reads one patient per line. Blank lines are ignored, malformed ones are
/// logged and skipped.
pub fn read_patients<R: BufRead>(reader: R) -> io::Result<Vec<Patient>> {
    let mut patients = vec![];
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse() {
            Ok(patient) => patients.push(patient),
            Err(e) => warn!("skipping line {} ({:?}): {}", index + 1, line, e),
        }
    }
    Ok(patients)
}
