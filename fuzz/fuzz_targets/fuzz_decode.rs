#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Full decode and header-only probe: neither must ever panic.
    let _ = zendib::decode(data);
    let _ = zendib::BmpInfo::from_bytes(data);
});
