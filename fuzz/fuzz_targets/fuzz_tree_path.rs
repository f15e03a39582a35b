#![no_main]

use libfuzzer_sys::fuzz_target;
use mdrip::domain::value_objects::{clean_path, TreePath};

fuzz_target!(|data: &[u8]| {
    if let Ok(path) = std::str::from_utf8(data) {
        let _ = TreePath::split(path);
        let _ = TreePath::split(&clean_path(path));
    }
});
