//! Program artifacts: the hand-off format from the front end.
//!
//! An artifact is a bincode encoding of [`ProgramArtifact`]. Its string
//! table lists the interner's strings in index order, so reloading it
//! yields the same `Name` for every identifier the program references.

use std::fs;
use std::path::{Path, PathBuf};

use amy_ir::{InternError, Program, StringInterner};
use serde::{Deserialize, Serialize};

/// Format version written into every artifact.
pub const ARTIFACT_VERSION: u32 = 1;

/// Why an artifact could not be read or written.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode artifact: {0}")]
    Encode(#[source] bincode::Error),

    #[error("artifact is corrupt: {0}")]
    Decode(#[source] bincode::Error),

    #[error("artifact version {found} is not supported (expected {expected})")]
    Version { found: u32, expected: u32 },

    #[error("artifact string table is invalid: {0}")]
    Strings(#[from] InternError),
}

/// A resolved program plus the string table its `Name`s index into.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramArtifact {
    /// Always [`ARTIFACT_VERSION`] when written by this crate; the first
    /// field so it can be checked before the rest is decoded.
    pub version: u32,
    pub strings: Vec<String>,
    pub program: Program,
}

impl ProgramArtifact {
    /// Capture `program` with the current contents of `interner`.
    pub fn new(program: Program, interner: &StringInterner) -> Self {
        Self {
            version: ARTIFACT_VERSION,
            strings: interner.strings(),
            program,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, ArtifactError> {
        bincode::serialize(self).map_err(ArtifactError::Encode)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, ArtifactError> {
        let version: u32 = bincode::deserialize(bytes).map_err(ArtifactError::Decode)?;
        if version != ARTIFACT_VERSION {
            return Err(ArtifactError::Version {
                found: version,
                expected: ARTIFACT_VERSION,
            });
        }
        bincode::deserialize(bytes).map_err(ArtifactError::Decode)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn write_to(&self, path: &Path) -> Result<(), ArtifactError> {
        let bytes = self.encode()?;
        fs::write(path, bytes).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    #[tracing::instrument(level = "debug")]
    pub fn read_from(path: &Path) -> Result<Self, ArtifactError> {
        let bytes = fs::read(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact = Self::decode(&bytes)?;
        tracing::debug!(
            strings = artifact.strings.len(),
            modules = artifact.program.modules.len(),
            "artifact decoded"
        );
        Ok(artifact)
    }

    /// Rebuild the interner and hand back the program.
    pub fn into_parts(self) -> Result<(Program, StringInterner), ArtifactError> {
        let interner = StringInterner::from_strings(self.strings)?;
        Ok((self.program, interner))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use amy_ir::ProgramBuilder;
    use pretty_assertions::assert_eq;

    fn sample(interner: &StringInterner) -> Program {
        let mut b = ProgramBuilder::new(interner);
        let one = b.arena.int(1);
        b.function("Main", "main", &[], one);
        b.finish()
    }

    #[test]
    fn decode_restores_program_and_names() {
        let interner = StringInterner::new();
        let program = sample(&interner);
        let bytes = ProgramArtifact::new(program.clone(), &interner).encode().unwrap();

        let (decoded, restored) = ProgramArtifact::decode(&bytes).unwrap().into_parts().unwrap();
        assert_eq!(decoded, program);
        assert_eq!(restored.get("main"), interner.get("main"));
        assert_eq!(restored.len(), interner.len());
    }

    #[test]
    fn version_mismatch_is_rejected() {
        let interner = StringInterner::new();
        let mut artifact = ProgramArtifact::new(sample(&interner), &interner);
        artifact.version = ARTIFACT_VERSION + 1;
        let bytes = artifact.encode().unwrap();

        let err = ProgramArtifact::decode(&bytes).unwrap_err();
        assert!(matches!(err, ArtifactError::Version { found, .. } if found == ARTIFACT_VERSION + 1));
    }

    #[test]
    fn truncated_bytes_are_corrupt() {
        let interner = StringInterner::new();
        let bytes = ProgramArtifact::new(sample(&interner), &interner).encode().unwrap();
        let err = ProgramArtifact::decode(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, ArtifactError::Decode(_)));
    }

    #[test]
    fn string_table_without_empty_entry_is_rejected() {
        let artifact = ProgramArtifact {
            version: ARTIFACT_VERSION,
            strings: vec!["Main".to_string()],
            program: Program::default(),
        };
        assert!(matches!(artifact.into_parts(), Err(ArtifactError::Strings(_))));
    }
}
