//! Common test helpers and fixtures shared across the test suite.

#![allow(dead_code)]

use debsrc::{ControlRecord, ControlReader, FileEntry, RawRecord};
use std::fs::File;
use std::io::BufReader;

/// Path of the sample `Sources` index
pub const SOURCES_FIXTURE: &str = "tests/data/Sources";

/// The `alien-arena` paragraph of a contrib `Sources` index.
pub const ALIEN_ARENA: &str = "\
Package: alien-arena
Binary: alien-arena, alien-arena-server
Version: 7.66+dfsg-5
Maintainer: Debian Games Team <pkg-games-devel@lists.alioth.debian.org>
Uploaders: Michael Gilbert <mgilbert@debian.org>, Barry deFreese <bddebian@comcast.net>
Build-Depends: debhelper (>= 10), sharutils, libglu1-mesa-dev
Architecture: any
Standards-Version: 4.0.1
Format: 3.0 (quilt)
Files:
 f26e5a6a298163277318a720b77a3b58 2291 alien-arena_7.66+dfsg-5.dsc
 af12838d2346b05a6e043141ceb40c49 1767600 alien-arena_7.66+dfsg.orig.tar.gz
 d806e404397c6338eae0d6470b4e8723 13844 alien-arena_7.66+dfsg-5.debian.tar.xz
Vcs-Browser: https://salsa.debian.org/games-team/alien-arena
Vcs-Git: https://salsa.debian.org/games-team/alien-arena.git
Checksums-Sha256:
 85eabee2877db5e070cd6549078ece3e5b4bc35a3a33ff8987d06fbb9732cd6e 2291 alien-arena_7.66+dfsg-5.dsc
 d4d173aba65fbdbf338e4fbdcb04a888e0cd3790e6de72597ba74b0bef42c14b 1767600 alien-arena_7.66+dfsg.orig.tar.gz
 6e90eabd98ac9c98ebe55b064ceb427101a3d4d4ff0b8aa4a2cea28052ec34c1 13844 alien-arena_7.66+dfsg-5.debian.tar.xz
Homepage: http://red.planetarena.org
Package-List:
 alien-arena deb contrib/games optional arch=any
 alien-arena-server deb contrib/games optional arch=any
Directory: pool/contrib/a/alien-arena
Priority: source
Section: contrib/games
";

/// Creates the smallest record that transcodes successfully.
///
/// Carries every mandatory field and one raw binary name, nothing else.
pub fn minimal_record() -> RawRecord {
    RawRecord::new("hello", "2.10-3")
        .field("Directory", "pool/main/h/hello")
        .field("Section", "devel")
        .field("Maintainer", "Santiago Vila <sanvila@debian.org>")
        .field("Architecture", "any")
        .field("Format", "3.0 (quilt)")
        .binary("hello")
}

/// Creates a record using every modelled field.
pub fn full_record() -> RawRecord {
    minimal_record()
        .field("Homepage", "https://www.gnu.org/software/hello/")
        .field("Original-Maintainer", "GNU Hello Team <bug-hello@gnu.org>")
        .field("Priority", "optional")
        .field("Standards-Version", "4.5.0")
        .field("Package-List", "\n hello deb devel optional arch=any")
        .field("Vcs-Git", "https://salsa.debian.org/sanvila/hello.git")
        .field("Vcs-Browser", "https://salsa.debian.org/sanvila/hello")
        .field("Files", "(from accessor)")
        .file(
            FileEntry::new("hello_2.10.orig.tar.gz", 725_946)
                .with_hash("SHA256", "31e066137a962676e89f69d1b65382de95a7ef7d914b8cb956f41ea72e0f516b")
                .with_hash("MD5Sum", "6cd0ffea3884a4e79330338dcc2987d6"),
        )
}

/// Parses the `alien-arena` paragraph.
pub fn alien_arena_record() -> ControlRecord {
    ControlRecord::parse(ALIEN_ARENA).expect("fixture paragraph is valid")
}

/// Opens the sample `Sources` index.
pub fn open_sources_fixture() -> ControlReader<BufReader<File>> {
    let file = File::open(SOURCES_FIXTURE).expect("Could not open test file");
    ControlReader::new(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use debsrc::SourceRecord;

    #[test]
    fn test_fixtures_are_well_formed() {
        assert_eq!(minimal_record().package(), "hello");
        assert_eq!(alien_arena_record().files().len(), 3);
    }
}
