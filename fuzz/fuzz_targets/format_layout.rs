#![no_main]

use libfuzzer_sys::fuzz_target;
use reflayout_core::{next_chunk, FixedZone, Moment};

fuzz_target!(|data: &[u8]| {
    let Ok(layout) = std::str::from_utf8(data) else {
        return;
    };

    // Chunking must always make progress and never split a char.
    let mut rest = layout;
    while let Some((lead, _, tail)) = next_chunk(rest) {
        assert!(tail.len() < rest.len());
        assert!(rest.starts_with(lead));
        rest = tail;
    }

    let Ok(zone) = FixedZone::new("PST", -28800) else {
        return;
    };
    if let Ok(moment) = Moment::from_unix_nanos(1_233_810_057_012_345_600, zone) {
        let _ = moment.format(layout);
    }
});
