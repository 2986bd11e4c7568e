#![no_main]

use debsrc::package_list::parse_package_list;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|body: &str| {
    if let Ok(binaries) = parse_package_list(body) {
        let lines = body.lines().filter(|line| !line.trim().is_empty()).count();
        assert_eq!(binaries.len(), lines);
    }
});
