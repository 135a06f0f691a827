#![no_main]

use libfuzzer_sys::fuzz_target;

use twilio_voicemail::twiml::{Client, Dial, Response, Say};

fuzz_target!(|data: &str| {
    // Caller-supplied text ends up in chardata and attributes. Whatever it
    // contains, the encoder either refuses the tree or emits a document
    // with the declaration and a closed root.
    let mut dial = Dial {
        caller_id: data.to_string(),
        ..Dial::new(data)
    };
    dial.add(Client {
        name: data.to_string(),
        ..Client::default()
    });

    let mut response = Response::new();
    response.add(Say::new(data)).add(dial);

    if let Ok(xml) = response.to_xml_string() {
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Response>"));
        assert!(xml.ends_with("</Response>"));
    }
});
