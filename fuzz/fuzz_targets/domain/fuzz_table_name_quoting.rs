// Run with: cargo fuzz run fuzz_table_name_quoting
// Any table name must come out as one identifier that unquotes to itself.
#![no_main]

use dbclean::domain::TableName;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let quoted = TableName::new(s).quoted();

        assert!(quoted.starts_with('`') && quoted.ends_with('`'));
        let inner = &quoted[1..quoted.len() - 1];
        // every backtick inside must be part of a doubled pair
        assert!(!inner.replace("``", "").contains('`'));
        assert_eq!(inner.replace("``", "`"), s);
    }
});
