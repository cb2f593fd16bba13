//! Canonical repository locations for artifacts.
//!
//! Pure derivation from coordinates to a repository-relative sub-path, a
//! Maven Central URL, or a file path under a local repository root. No
//! validation or escaping of coordinate characters; callers own legality.

use crate::artifact::MavenArtifact;
use std::path::{Path, PathBuf};

pub const MAVEN_CENTRAL_BASE_URL: &str = "https://repo.maven.apache.org/maven2/";

pub const JAR_EXTENSION: &str = ".jar";
pub const POM_EXTENSION: &str = ".pom";

/// Repository-relative sub-path:
/// `<group with '.' as '/'>/<artifact>/<version>/<artifact>-<version>[-<classifier>]<extension>`.
pub fn sub_path(artifact: &MavenArtifact, extension: &str) -> String {
    let mut s = String::new();
    s.push_str(&artifact.group_id().replace('.', "/"));
    s.push('/');
    s.push_str(artifact.artifact_id());
    s.push('/');
    s.push_str(artifact.version());
    s.push('/');
    s.push_str(artifact.artifact_id());
    s.push('-');
    s.push_str(artifact.version());
    if let Some(classifier) = artifact.classifier() {
        s.push('-');
        s.push_str(classifier);
    }
    s.push_str(extension);
    s
}

pub fn jar_sub_path(artifact: &MavenArtifact) -> String {
    sub_path(artifact, JAR_EXTENSION)
}

pub fn pom_sub_path(artifact: &MavenArtifact) -> String {
    sub_path(artifact, POM_EXTENSION)
}

/// Download URL on Maven Central for the given extension.
pub fn maven_central_url(artifact: &MavenArtifact, extension: &str) -> String {
    format!("{MAVEN_CENTRAL_BASE_URL}{}", sub_path(artifact, extension))
}

pub fn jar_maven_central_url(artifact: &MavenArtifact) -> String {
    maven_central_url(artifact, JAR_EXTENSION)
}

pub fn pom_maven_central_url(artifact: &MavenArtifact) -> String {
    maven_central_url(artifact, POM_EXTENSION)
}

/// File path inside a local repository rooted at `repository`.
pub fn file_in_repository(
    repository: &Path,
    artifact: &MavenArtifact,
    extension: &str,
) -> PathBuf {
    repository.join(sub_path(artifact, extension))
}

pub fn jar_file_in_repository(repository: &Path, artifact: &MavenArtifact) -> PathBuf {
    file_in_repository(repository, artifact, JAR_EXTENSION)
}

pub fn pom_file_in_repository(repository: &Path, artifact: &MavenArtifact) -> PathBuf {
    file_in_repository(repository, artifact, POM_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_path_without_classifier() {
        let a = MavenArtifact::new("fr.jmini.utils", "mvn-utils", "1.0.0");
        assert_eq!(
            sub_path(&a, ".jar"),
            "fr/jmini/utils/mvn-utils/1.0.0/mvn-utils-1.0.0.jar"
        );
    }

    #[test]
    fn sub_path_with_classifier() {
        let a = MavenArtifact::with_classifier(
            "org.openapitools.openapistylevalidator",
            "openapi-style-validator-cli",
            "1.8",
            "all",
        );
        let p = sub_path(&a, ".jar");
        assert!(
            p.ends_with("openapi-style-validator-cli-1.8-all.jar"),
            "got {p}"
        );
    }

    #[test]
    fn url_is_base_plus_sub_path() {
        let a = MavenArtifact::new("org.eclipse.platform", "org.eclipse.ant.core", "3.5.600");
        assert_eq!(
            maven_central_url(&a, ".jar"),
            "https://repo.maven.apache.org/maven2/org/eclipse/platform/org.eclipse.ant.core/3.5.600/org.eclipse.ant.core-3.5.600.jar"
        );
        assert_eq!(
            maven_central_url(&a, ".pom"),
            format!("{MAVEN_CENTRAL_BASE_URL}{}", sub_path(&a, ".pom"))
        );
    }

    #[test]
    fn jar_and_pom_wrappers() {
        let a = MavenArtifact::new("fr.jmini.utils", "mvn-utils", "1.0.0");
        assert_eq!(jar_sub_path(&a), sub_path(&a, ".jar"));
        assert_eq!(pom_sub_path(&a), sub_path(&a, ".pom"));
        assert_eq!(
            jar_maven_central_url(&a),
            "https://repo.maven.apache.org/maven2/fr/jmini/utils/mvn-utils/1.0.0/mvn-utils-1.0.0.jar"
        );
        assert_eq!(
            pom_maven_central_url(&a),
            "https://repo.maven.apache.org/maven2/fr/jmini/utils/mvn-utils/1.0.0/mvn-utils-1.0.0.pom"
        );
    }

    #[test]
    fn file_in_repository_joins_root() {
        let a = MavenArtifact::new("fr.jmini.utils", "mvn-utils", "1.0.0");
        let repo = Path::new("/tmp/repository");
        assert_eq!(
            file_in_repository(repo, &a, ".pom").to_string_lossy(),
            "/tmp/repository/fr/jmini/utils/mvn-utils/1.0.0/mvn-utils-1.0.0.pom"
        );
        assert_eq!(
            jar_file_in_repository(repo, &a),
            file_in_repository(repo, &a, ".jar")
        );
        assert_eq!(
            pom_file_in_repository(repo, &a),
            file_in_repository(repo, &a, ".pom")
        );
    }
}
