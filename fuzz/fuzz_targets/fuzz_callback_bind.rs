#![no_main]

use libfuzzer_sys::fuzz_target;

use twilio_voicemail::twiml::{
    bind, DialActionRequest, RecordActionRequest, RecordingStatusCallbackRequest,
    TranscribeCallbackRequest, VoiceRequest,
};

fuzz_target!(|data: &[u8]| {
    // Callback bodies come straight from the network. Binding may fail but
    // must never panic, for any of the record shapes.
    let _ = bind::<VoiceRequest>(data);
    let _ = bind::<DialActionRequest>(data);
    let _ = bind::<RecordActionRequest>(data);
    let _ = bind::<RecordingStatusCallbackRequest>(data);
    let _ = bind::<TranscribeCallbackRequest>(data);
});
