//! JSON file checkpoint store
//!
//! Whole-document read/write. An absent or unparseable file is a valid
//! initial state and reads as the zero-value default.

use std::fs;
use std::path::PathBuf;
use tracing::warn;

use crate::domain::milestone::CheckpointStore;
use crate::shared::errors::CheckpointError;
use crate::shared::types::Checkpoint;

pub struct JsonCheckpointStore {
    path: PathBuf,
}

impl JsonCheckpointStore {
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }
}

impl CheckpointStore for JsonCheckpointStore {
    fn read(&self) -> Checkpoint {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(
                    "Corrupt checkpoint at {}, falling back to default: {}",
                    self.path.display(),
                    e
                );
                Checkpoint::default()
            }),
            Err(_) => Checkpoint::default(),
        }
    }

    fn write(&self, checkpoint: &Checkpoint) -> Result<(), CheckpointError> {
        let raw = serde_json::to_string_pretty(checkpoint)
            .map_err(|e| CheckpointError::WriteFailed(e.to_string()))?;
        fs::write(&self.path, raw)
            .map_err(|e| CheckpointError::WriteFailed(format!("{}: {}", self.path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::Direction;

    fn temp_store(name: &str) -> JsonCheckpointStore {
        let path = std::env::temp_dir().join(format!("bridgecore_checkpoint_{}.json", name));
        let _ = fs::remove_file(&path);
        JsonCheckpointStore {
            path,
        }
    }

    #[test]
    fn test_missing_file_reads_default() {
        let store = temp_store("missing");
        assert_eq!(store.read(), Checkpoint::default());
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let store = temp_store("roundtrip");
        let checkpoint = Checkpoint {
            last_milestone: 2340.0,
            last_direction: Direction::Progress,
        };

        store.write(&checkpoint).unwrap();
        assert_eq!(store.read(), checkpoint);

        let _ = fs::remove_file(&store.path);
    }

    #[test]
    fn test_corrupt_file_reads_default() {
        let store = temp_store("corrupt");
        fs::write(&store.path, "{not json").unwrap();

        assert_eq!(store.read(), Checkpoint::default());

        let _ = fs::remove_file(&store.path);
    }

    #[test]
    fn test_write_replaces_prior_value() {
        let store = temp_store("replace");
        store
            .write(&Checkpoint {
                last_milestone: 300.0,
                last_direction: Direction::Progress,
            })
            .unwrap();
        store
            .write(&Checkpoint {
                last_milestone: 270.0,
                last_direction: Direction::Delay,
            })
            .unwrap();

        let read = store.read();
        assert_eq!(read.last_milestone, 270.0);
        assert_eq!(read.last_direction, Direction::Delay);

        let _ = fs::remove_file(&store.path);
    }
}
