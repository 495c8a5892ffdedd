//! Result output: the sorted seed list the whole run exists to produce.

use anyhow::Context;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Sorts ascending, drops duplicates, and writes one decimal seed per
/// line. Returns how many were written.
pub fn write_seeds(path: &Path, mut seeds: Vec<i64>) -> anyhow::Result<usize> {
    seeds.sort_unstable();
    seeds.dedup();

    let file =
        File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for seed in &seeds {
        writeln!(out, "{seed}").context("writing seed list")?;
    }
    out.flush().context("flushing seed list")?;
    Ok(seeds.len())
}

#[cfg(test)]
mod test {
    use super::write_seeds;
    use std::fs;

    #[test]
    fn test_output_is_sorted_unique_lf_terminated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("found_seeds.txt");

        let written = write_seeds(&path, vec![42, 7, 42, -1, 281474976710655]).unwrap();
        assert_eq!(written, 4);

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "-1\n7\n42\n281474976710655\n");
    }

    #[test]
    fn test_empty_result_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("found_seeds.txt");

        assert_eq!(write_seeds(&path, Vec::new()).unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
