/// Repository layer for output files
use crate::domain::NearEarthObjectRecord;
use crate::errors::PersistError;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::debug;

/// Writes every output file under one directory
#[derive(Clone, Debug)]
pub struct OutputRepo {
    dir: PathBuf,
}

impl OutputRepo {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write near-Earth object rows as CSV with a header line
    pub fn write_neo_csv(
        &self,
        file_name: &str,
        records: &[NearEarthObjectRecord],
    ) -> Result<PathBuf, PersistError> {
        let path = self.dir.join(file_name);
        let mut writer = csv::WriterBuilder::new()
            .has_headers(true)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_path(&path)?;

        if records.is_empty() {
            writer.write_record(NEO_CSV_HEADER)?;
        }
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        debug!(path = %path.display(), rows = records.len(), "wrote csv");
        Ok(path)
    }

    /// Write one URL per line
    pub fn write_url_list(
        &self,
        file_name: &str,
        urls: &[String],
    ) -> Result<PathBuf, PersistError> {
        let path = self.dir.join(file_name);
        let mut file = BufWriter::new(fs::File::create(&path)?);
        for url in urls {
            writeln!(file, "{}", url)?;
        }
        file.flush()?;

        debug!(path = %path.display(), urls = urls.len(), "wrote url list");
        Ok(path)
    }

    /// Write image bytes untouched
    pub fn write_image(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, PersistError> {
        let path = self.dir.join(file_name);
        fs::write(&path, bytes)?;

        debug!(path = %path.display(), len = bytes.len(), "wrote image");
        Ok(path)
    }
}

/// Header used when there are no rows to derive it from
const NEO_CSV_HEADER: [&str; 6] = [
    "date",
    "name",
    "estimated_diameter_min_meters",
    "estimated_diameter_max_meters",
    "estimated_diameter_min_feet",
    "estimated_diameter_max_feet",
];
