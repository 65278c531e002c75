//! Fuzz target for [`Envelope`] frame decoding
//!
//! The envelope decoder is the first thing untrusted server bytes hit.
//!
//! # Invariants
//!
//! - NEVER panic on arbitrary frame text
//! - A frame that decodes must re-encode to text that decodes to the same
//!   envelope

#![no_main]

use libfuzzer_sys::fuzz_target;
use stagelink_proto::Envelope;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(envelope) = Envelope::from_text(text) {
        let reencoded = envelope.to_text().expect("decoded envelope must re-encode");
        let decoded = Envelope::from_text(&reencoded).expect("re-encoded envelope must decode");
        assert_eq!(decoded, envelope);
    }
});
