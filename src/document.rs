//! The strictly-typed source package document.
//!
//! This module provides the output types of transcoding:
//! - [`SourcePackage`]: one source package, fully validated
//! - [`BinaryPackage`]: a binary package built from the source
//! - [`SourceFile`]: a file making up the source, with its checksums
//! - [`Vcs`]: a version control location
//!
//! The field layout of these types (which attributes are mandatory, optional
//! or repeated) is the contract consumers of the encoded documents rely on.
//! Serialization goes through `serde`, so any of the [`formats`](crate::formats)
//! produce the same shape.

use crate::enumerations::{HashAlgorithm, Priority, SourceFormat, VcsType};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A source package record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePackage {
    /// Source package name
    pub package: String,
    /// Version string, verbatim
    pub version: String,
    /// Archive directory holding the files, e.g. `pool/main/h/hello`
    pub directory: String,
    /// Upstream homepage
    pub homepage: Option<String>,
    /// Archive section
    pub section: String,
    /// Maintainer, verbatim (`Name <email>`)
    pub maintainer: String,
    /// Original maintainer, for derived distributions
    pub original_maintainer: Option<String>,
    /// Priority of the source package
    pub priority: Option<Priority>,
    /// Debian policy version the package complies with
    pub standards_version: Option<String>,
    /// Architecture field; currently always exactly one entry holding the whole value
    pub architectures: Vec<String>,
    /// Binary packages produced from this source; never empty
    pub binaries: Vec<BinaryPackage>,
    /// Build dependencies. Reserved: always empty in this version.
    pub build_depends: Vec<String>,
    /// Files making up the source package
    pub files: Vec<SourceFile>,
    /// Version control locations, ordered by system name
    pub vcs: Vec<Vcs>,
    /// Source format
    pub format: SourceFormat,
}

/// A binary package produced by a source package.
///
/// Only `name` is populated when the record carried a bare `Binary` list rather
/// than a `Package-List`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryPackage {
    /// Binary package name
    pub name: String,
    /// Package style, e.g. `deb` or `udeb`
    pub style: Option<String>,
    /// Archive section
    pub section: Option<String>,
    /// Priority
    pub priority: Option<Priority>,
    /// Trailing `key=value` columns, verbatim and in order (e.g. `arch=any`)
    pub extras: Vec<String>,
}

/// A file belonging to a source package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// File name, relative to the package directory
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Known checksums, at most one per algorithm, in algorithm order
    pub checksums: SmallVec<[Checksum; 4]>,
}

/// A single checksum of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checksum {
    /// Hash algorithm
    pub algorithm: HashAlgorithm,
    /// Hex digest, verbatim
    pub digest: String,
}

/// A version control location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vcs {
    /// Version control system
    pub vcs_type: VcsType,
    /// Free text, usually a URL
    pub description: String,
}

impl SourcePackage {
    /// Create a builder for fluently constructing source packages
    ///
    /// # Examples
    ///
    /// ```
    /// use debsrc::{BinaryPackage, SourceFormat, SourcePackage};
    ///
    /// let pkg = SourcePackage::builder("hello", "2.10-3")
    ///     .directory("pool/main/h/hello")
    ///     .section("devel")
    ///     .maintainer("Santiago Vila <sanvila@debian.org>")
    ///     .architecture("any")
    ///     .binary(BinaryPackage::named("hello"))
    ///     .format(SourceFormat::Quilt3dot0)
    ///     .build();
    ///
    /// assert_eq!(pkg.binaries.len(), 1);
    /// ```
    #[must_use]
    pub fn builder(package: impl Into<String>, version: impl Into<String>) -> SourcePackageBuilder {
        SourcePackageBuilder {
            package: SourcePackage {
                package: package.into(),
                version: version.into(),
                directory: String::new(),
                homepage: None,
                section: String::new(),
                maintainer: String::new(),
                original_maintainer: None,
                priority: None,
                standards_version: None,
                architectures: Vec::new(),
                binaries: Vec::new(),
                build_depends: Vec::new(),
                files: Vec::new(),
                vcs: Vec::new(),
                format: SourceFormat::Original,
            },
        }
    }

    /// Names of the binary packages, in document order
    pub fn binary_names(&self) -> impl Iterator<Item = &str> {
        self.binaries.iter().map(|b| b.name.as_str())
    }

    /// Find a file by name
    #[must_use]
    pub fn file(&self, name: &str) -> Option<&SourceFile> {
        self.files.iter().find(|f| f.name == name)
    }

    /// The location recorded for a version control system, if any
    #[must_use]
    pub fn vcs_location(&self, vcs_type: VcsType) -> Option<&str> {
        self.vcs
            .iter()
            .find(|v| v.vcs_type == vcs_type)
            .map(|v| v.description.as_str())
    }
}

impl BinaryPackage {
    /// A binary package known only by name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        BinaryPackage {
            name: name.into(),
            style: None,
            section: None,
            priority: None,
            extras: Vec::new(),
        }
    }
}

impl SourceFile {
    /// Digest for the given algorithm, if the file carries one
    #[must_use]
    pub fn digest(&self, algorithm: HashAlgorithm) -> Option<&str> {
        self.checksums
            .iter()
            .find(|c| c.algorithm == algorithm)
            .map(|c| c.digest.as_str())
    }
}

/// Builder for [`SourcePackage`].
///
/// The builder performs no validation; [`Transcoder`](crate::Transcoder) is
/// the validating path. Useful for tests and for producing documents from
/// sources other than records.
#[derive(Debug)]
pub struct SourcePackageBuilder {
    package: SourcePackage,
}

impl SourcePackageBuilder {
    /// Set the archive directory
    #[must_use]
    pub fn directory(mut self, directory: impl Into<String>) -> Self {
        self.package.directory = directory.into();
        self
    }

    /// Set the homepage
    #[must_use]
    pub fn homepage(mut self, homepage: impl Into<String>) -> Self {
        self.package.homepage = Some(homepage.into());
        self
    }

    /// Set the section
    #[must_use]
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.package.section = section.into();
        self
    }

    /// Set the maintainer
    #[must_use]
    pub fn maintainer(mut self, maintainer: impl Into<String>) -> Self {
        self.package.maintainer = maintainer.into();
        self
    }

    /// Set the original maintainer
    #[must_use]
    pub fn original_maintainer(mut self, maintainer: impl Into<String>) -> Self {
        self.package.original_maintainer = Some(maintainer.into());
        self
    }

    /// Set the priority
    #[must_use]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.package.priority = Some(priority);
        self
    }

    /// Set the standards version
    #[must_use]
    pub fn standards_version(mut self, version: impl Into<String>) -> Self {
        self.package.standards_version = Some(version.into());
        self
    }

    /// Add an architecture entry
    #[must_use]
    pub fn architecture(mut self, arch: impl Into<String>) -> Self {
        self.package.architectures.push(arch.into());
        self
    }

    /// Add a binary package
    #[must_use]
    pub fn binary(mut self, binary: BinaryPackage) -> Self {
        self.package.binaries.push(binary);
        self
    }

    /// Add a file
    #[must_use]
    pub fn file(mut self, file: SourceFile) -> Self {
        self.package.files.push(file);
        self
    }

    /// Add a version control location
    #[must_use]
    pub fn vcs(mut self, vcs_type: VcsType, description: impl Into<String>) -> Self {
        self.package.vcs.push(Vcs {
            vcs_type,
            description: description.into(),
        });
        self
    }

    /// Set the source format
    #[must_use]
    pub fn format(mut self, format: SourceFormat) -> Self {
        self.package.format = format;
        self
    }

    /// Build the document
    #[must_use]
    pub fn build(self) -> SourcePackage {
        self.package
    }
}
