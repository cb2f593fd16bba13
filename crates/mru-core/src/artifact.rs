//! Maven artifact coordinates.

use std::fmt;
use std::str::FromStr;

/// Coordinates of one published artifact: group, id, version, and an
/// optional classifier. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MavenArtifact {
    group_id: String,
    artifact_id: String,
    version: String,
    classifier: Option<String>,
}

impl MavenArtifact {
    /// Coordinates without a classifier.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            classifier: None,
        }
    }

    /// Coordinates with a classifier (e.g. `sources`, `all`).
    pub fn with_classifier(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        classifier: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            classifier: Some(classifier.into()),
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }
}

impl fmt::Display for MavenArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        Ok(())
    }
}

/// Error parsing a `group:artifact:version[:classifier]` string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid artifact coordinates '{input}': expected group:artifact:version[:classifier] with non-empty segments")]
pub struct ParseArtifactError {
    input: String,
}

impl FromStr for MavenArtifact {
    type Err = ParseArtifactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseArtifactError {
            input: s.to_string(),
        };
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() < 3 || parts.len() > 4 || parts.iter().any(|p| p.is_empty()) {
            return Err(err());
        }
        let mut artifact = MavenArtifact::new(parts[0], parts[1], parts[2]);
        if let Some(classifier) = parts.get(3) {
            artifact.classifier = Some(classifier.to_string());
        }
        Ok(artifact)
    }
}
