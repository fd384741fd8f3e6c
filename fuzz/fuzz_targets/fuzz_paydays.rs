#![no_main]
use fuzz::{run_fuzz_paydays, Data};
use libfuzzer_sys::{fuzz_target, Corpus};

fuzz_target!(|data: Data| -> Corpus {
    if run_fuzz_paydays(data) {
        Corpus::Keep
    } else {
        Corpus::Reject
    }
});
