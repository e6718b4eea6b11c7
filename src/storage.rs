use crate::error::Error;
use crate::results::ProductRecord;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes one JSON dump plus one CSV summary per company run.
///
/// Files land under `<base_dir>/<company>/` with a timestamp in the name,
/// so repeated runs never clobber each other.
pub struct Storage {
    base_dir: PathBuf,
}

impl Storage {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Persist a company's records. Returns the paths of the JSON dump and
    /// the CSV summary that were written.
    pub fn save(
        &self,
        company: &str,
        records: &[ProductRecord],
    ) -> Result<(PathBuf, PathBuf), Error> {
        let dir = self.base_dir.join(company);
        fs::create_dir_all(&dir)?;

        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let json_path = dir.join(format!("products_{}.json", stamp));
        let csv_path = dir.join(format!("summary_{}.csv", stamp));

        write_json(&json_path, records)?;
        write_summary(&csv_path, records)?;

        ::log::info!(
            "Saved {} records for {} to {}",
            records.len(),
            company,
            dir.display()
        );
        Ok((json_path, csv_path))
    }
}

fn write_json(path: &Path, records: &[ProductRecord]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    Ok(())
}

fn write_summary(path: &Path, records: &[ProductRecord]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(b"url,name,company\n")?;
    for record in records {
        writeln!(
            writer,
            "{},{},{}",
            csv_field(&record.url),
            csv_field(&record.name),
            csv_field(&record.company)
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Commas would shift columns; spaces are close enough for a summary file
fn csv_field(value: &str) -> String {
    value.replace(',', " ")
}
