// Run with: cargo fuzz run fuzz_resource_id
#![no_main]

use dbclean::domain::ResourceId;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Looking for panics, and for accepted ids that don't split back cleanly
        if let Ok(id) = ResourceId::parse(s) {
            assert!(!id.module().is_empty());
            assert!(!id.entity().is_empty());
            assert_eq!(format!("{}/{}", id.module(), id.entity()), id.as_ref());
        }
    }
});
