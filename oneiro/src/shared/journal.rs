use crate::models::prelude::{DreamEntry, DreamEntryBuilder};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Unable to find/open {file_name}")]
    FileNotFound { file_name: String },
    #[error("Unable to parse {file_name}, expected a .yaml, .yml or .json journal")]
    UnknownFormat { file_name: String },
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Unable to parse YAML journal. {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Unable to parse JSON journal. {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Load the journal at `location`, falling back to the built-in sample
/// journal when no location was given.
pub fn load_journal(location: Option<&str>) -> Result<Vec<DreamEntry>, JournalError> {
    match location {
        Some(path) => load_entries(Path::new(path)),
        None => {
            debug!("No journal provided, using the sample journal");
            Ok(sample_journal())
        }
    }
}

/// Read a journal file, a YAML or JSON list of entries.
pub fn load_entries(path: &Path) -> Result<Vec<DreamEntry>, JournalError> {
    if !path.exists() {
        return Err(JournalError::FileNotFound {
            file_name: path.display().to_string(),
        });
    }

    let text = fs::read_to_string(path)?;
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
    let entries: Vec<DreamEntry> = match extension {
        "yaml" | "yml" => serde_yaml::from_str(&text)?,
        "json" => serde_json::from_str(&text)?,
        _ => {
            return Err(JournalError::UnknownFormat {
                file_name: path.display().to_string(),
            });
        }
    };

    debug!("Loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// The journal used when the caller does not point at a real one.
pub fn sample_journal() -> Vec<DreamEntry> {
    vec![
        DreamEntryBuilder::default()
            .content(
                "Sonhei que estava voando sobre uma cidade do futuro com carros voadores e \
                 prédios verdes",
            )
            .date("2025-01-10".to_string())
            .kind("futuro".to_string())
            .build()
            .expect("sample entry to be valid"),
        DreamEntryBuilder::default()
            .content(
                "Tive um pesadelo onde estava correndo de algo escuro e não conseguia encontrar \
                 a saída",
            )
            .date("2025-01-09".to_string())
            .kind("noturno".to_string())
            .build()
            .expect("sample entry to be valid"),
        DreamEntryBuilder::default()
            .content("Imagino um mundo onde todos vivem em paz e harmonia, sem guerras nem fome")
            .date("2025-01-08".to_string())
            .kind("futuro".to_string())
            .build()
            .expect("sample entry to be valid"),
    ]
}
