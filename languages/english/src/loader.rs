use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::dictionary::{LoadError, TermDictionary};

pub struct TermDictionaryLoader;

impl TermDictionaryLoader {
    /// Load a term dictionary from a JSON file
    pub fn load_from_file(path: &Path) -> Result<TermDictionary, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading term dictionary from file: {}", path.display());
        let dict = TermDictionary::from_reader(BufReader::new(File::open(path)?))?;
        tracing::info!("Loaded {} term dictionary entries from file", dict.entry_count());
        Ok(dict)
    }

    pub fn load_from_reader(reader: impl Read) -> Result<TermDictionary, LoadError> {
        let dict = TermDictionary::from_reader(reader)?;
        tracing::info!("Loaded {} term dictionary entries", dict.entry_count());
        Ok(dict)
    }

    /// Merge two dictionaries (later entries override earlier ones)
    pub fn merge(base: TermDictionary, additional: TermDictionary) -> TermDictionary {
        base.merge(additional)
    }
}
