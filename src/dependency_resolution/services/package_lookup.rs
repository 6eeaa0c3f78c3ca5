use crate::dependency_resolution::domain::PackageRecord;
use crate::shared::error::DepGraphError;
use crate::shared::Result;

/// How a lookup treats the requested version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionMatch {
    /// Name and version must both match
    Exact,
    /// First record with the name, whatever its version
    AnyVersion,
}

/// PackageLookup service: direct dependencies of one package
///
/// Works on already parsed records and does not care whether the index came
/// from a local file or a downloaded archive.
pub struct PackageLookup;

impl PackageLookup {
    /// Finds the record for `name` according to `mode`
    ///
    /// # Errors
    /// `DepGraphError::PackageNotFound` when no record qualifies. The error
    /// carries the version only for [`VersionMatch::Exact`] lookups.
    pub fn find<'a>(
        records: &'a [PackageRecord],
        name: &str,
        version: &str,
        mode: VersionMatch,
    ) -> Result<&'a PackageRecord> {
        let found = match mode {
            VersionMatch::Exact => records
                .iter()
                .find(|r| r.name() == name && r.has_version(version)),
            VersionMatch::AnyVersion => records.iter().find(|r| r.name() == name),
        };

        found.ok_or_else(|| {
            DepGraphError::PackageNotFound {
                name: name.to_string(),
                version: match mode {
                    VersionMatch::Exact => Some(version.to_string()),
                    VersionMatch::AnyVersion => None,
                },
            }
            .into()
        })
    }

    /// Returns the direct dependency names of `name`
    pub fn direct_dependencies(
        records: &[PackageRecord],
        name: &str,
        version: &str,
        mode: VersionMatch,
    ) -> Result<Vec<String>> {
        Self::find(records, name, version, mode).map(|record| record.dependencies().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency_resolution::services::IndexParser;

    fn records() -> Vec<PackageRecord> {
        IndexParser::parse(
            "Package: curl\nVersion: 7.88\nDepends: libc6, libcurl4\n\n\
             Package: curl\nVersion: 8.5\nDepends: libc6, libcurl4t64, zlib1g\n\n\
             Package: libc6\n",
        )
        .into_records()
    }

    #[test]
    fn test_exact_lookup_selects_version() {
        let records = records();

        let deps =
            PackageLookup::direct_dependencies(&records, "curl", "8.5", VersionMatch::Exact)
                .unwrap();
        assert_eq!(deps, vec!["libc6", "libcurl4t64", "zlib1g"]);

        let deps =
            PackageLookup::direct_dependencies(&records, "curl", "7.88", VersionMatch::Exact)
                .unwrap();
        assert_eq!(deps, vec!["libc6", "libcurl4"]);
    }

    #[test]
    fn test_exact_lookup_wrong_version_fails() {
        let records = records();

        let err = PackageLookup::direct_dependencies(&records, "curl", "9.0", VersionMatch::Exact)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<DepGraphError>(),
            Some(&DepGraphError::PackageNotFound {
                name: "curl".to_string(),
                version: Some("9.0".to_string()),
            })
        );
    }

    #[test]
    fn test_exact_lookup_unversioned_record_fails() {
        let records = records();
        let result = PackageLookup::direct_dependencies(&records, "libc6", "", VersionMatch::Exact);
        assert!(result.is_err());
    }

    #[test]
    fn test_any_version_lookup_takes_first_record() {
        let records = records();

        let deps =
            PackageLookup::direct_dependencies(&records, "curl", "ignored", VersionMatch::AnyVersion)
                .unwrap();
        assert_eq!(deps, vec!["libc6", "libcurl4"]);
    }

    #[test]
    fn test_any_version_lookup_unversioned_record() {
        let records = records();

        let deps =
            PackageLookup::direct_dependencies(&records, "libc6", "1.0", VersionMatch::AnyVersion)
                .unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn test_any_version_lookup_missing_package() {
        let records = records();

        let err =
            PackageLookup::direct_dependencies(&records, "wget", "1.0", VersionMatch::AnyVersion)
                .unwrap_err();
        assert_eq!(
            err.downcast_ref::<DepGraphError>(),
            Some(&DepGraphError::PackageNotFound {
                name: "wget".to_string(),
                version: None,
            })
        );
    }

    #[test]
    fn test_find_returns_record() {
        let records = records();
        let record = PackageLookup::find(&records, "curl", "8.5", VersionMatch::Exact).unwrap();
        assert_eq!(record.version(), Some("8.5"));
    }
}
