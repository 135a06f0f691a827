//! Golden document tests
//!
//! Builds complete Response trees through the public API and compares the
//! encoded bytes against the exact documents Twilio is expected to receive.

use twilio_voicemail::twiml::{
    Client, Conference, Dial, Enqueue, Gather, Hangup, Leave, Markup, MarkupError, Number, Pause,
    Play, Queue, Record, Redirect, Reject, Response, Say, Sip,
};

const HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// One line of expected output at the given indentation.
fn line(s: &str, indent: usize) -> String {
    format!("{}{}\n", " ".repeat(indent), s)
}

fn document(lines: &[String]) -> String {
    let mut out = String::from(HEADER);
    out.push_str("<Response>\n");
    for l in lines {
        out.push_str(l);
    }
    out.push_str("</Response>");
    out
}

fn encode(response: &Response) -> String {
    response.to_xml_string().expect("response should encode")
}

#[test]
fn empty_response_never_encodes() {
    let response = Response::new();
    let err = response.encode().unwrap_err();
    assert!(matches!(err, MarkupError::EmptyResponse));
    assert_eq!(err.to_string(), "Can not encode an empty response");
}

#[test]
fn dial_with_action() {
    let mut response = Response::new();
    response.add(Dial {
        action: "https://testurl.com".to_string(),
        ..Dial::new("415-999-9999")
    });
    assert_eq!(
        encode(&response),
        document(&[line(
            "<Dial action=\"https://testurl.com\">415-999-9999</Dial>",
            2
        )])
    );
}

#[test]
fn dial_without_optional_attributes() {
    let mut response = Response::new();
    response.add(Dial::new("415-999-9999"));
    assert_eq!(
        encode(&response),
        document(&[line("<Dial>415-999-9999</Dial>", 2)])
    );
}

#[test]
fn dial_with_nested_client() {
    let mut dial = Dial::new("415-999-9999");
    dial.add(Client {
        name: "test".to_string(),
        ..Client::default()
    });
    let mut response = Response::new();
    response.add(dial);

    assert_eq!(
        encode(&response),
        document(&[
            line("<Dial>415-999-9999", 2),
            line("<Client>test</Client>", 4),
            line("</Dial>", 2),
        ])
    );
}

#[test]
fn dial_with_invalid_method_fails_validation() {
    let dial = Dial {
        method: "TEST".to_string(),
        ..Dial::default()
    };
    assert!(dial.validate().is_err());

    let mut response = Response::new();
    response.add(dial);
    assert!(response.encode().is_err());
}

#[test]
fn dial_rejects_say_child_by_name() {
    let mut dial = Dial::new("415-999-9999");
    dial.add(Say::new("hello"));
    let err = dial.validate().unwrap_err();
    assert_eq!(err.to_string(), "Unknown markup type Say as child of Dial");
}

#[test]
fn dial_with_every_noun() {
    let mut dial = Dial {
        caller_id: "+15555550100".to_string(),
        record: true,
        ..Dial::new("415-999-9999")
    };
    dial.add(Number {
        send_digits: "wwww1928".to_string(),
        number: "+14155551212".to_string(),
        ..Number::default()
    })
    .add(Conference {
        start_conference_on_enter: true,
        beep: "false".to_string(),
        name: "standup".to_string(),
        ..Conference::default()
    })
    .add(Queue {
        url: "/about-to-connect".to_string(),
        name: "support".to_string(),
        ..Queue::default()
    })
    .add(Sip {
        username: "admin".to_string(),
        password: "1234".to_string(),
        address: "sip:kate@example.com".to_string(),
        ..Sip::default()
    });
    let mut response = Response::new();
    response.add(dial);

    assert_eq!(
        encode(&response),
        document(&[
            line(
                "<Dial callerId=\"+15555550100\" record=\"true\">415-999-9999",
                2
            ),
            line(
                "<Number sendDigits=\"wwww1928\">+14155551212</Number>",
                4
            ),
            line(
                "<Conference beep=\"false\" startConferenceOnEnter=\"true\">standup</Conference>",
                4
            ),
            line("<Queue url=\"/about-to-connect\">support</Queue>", 4),
            line(
                "<Sip username=\"admin\" password=\"1234\">sip:kate@example.com</Sip>",
                4
            ),
            line("</Dial>", 2),
        ])
    );
}

#[test]
fn gather_with_prompts() {
    let mut gather = Gather {
        action: "/menu".to_string(),
        num_digits: 1,
        ..Gather::default()
    };
    gather
        .add(Say {
            voice: "alice".to_string(),
            language: "en-AU".to_string(),
            ..Say::new("Press one for sales.")
        })
        .add(Pause { length: 2 })
        .add(Play {
            loop_count: 2,
            ..Play::new("https://example.com/menu.mp3")
        });
    let mut response = Response::new();
    response.add(gather).add(Say::new("We did not receive any input."));

    assert_eq!(
        encode(&response),
        document(&[
            line("<Gather action=\"/menu\" numDigits=\"1\">", 2),
            line(
                "<Say voice=\"alice\" language=\"en-AU\">Press one for sales.</Say>",
                4
            ),
            line("<Pause length=\"2\"></Pause>", 4),
            line(
                "<Play loop=\"2\">https://example.com/menu.mp3</Play>",
                4
            ),
            line("</Gather>", 2),
            line("<Say>We did not receive any input.</Say>", 2),
        ])
    );
}

#[test]
fn voicemail_flow() {
    let mut response = Response::new();
    response
        .add(Say {
            voice: "woman".to_string(),
            ..Say::new("Please leave a message")
        })
        .add(Record {
            max_length: 120,
            transcribe: true,
            transcribe_callback: "/voicemail".to_string(),
            ..Record::default()
        })
        .add(Hangup);

    assert_eq!(
        encode(&response),
        document(&[
            line("<Say voice=\"woman\">Please leave a message</Say>", 2),
            line(
                "<Record maxLength=\"120\" transcribe=\"true\" transcribeCallback=\"/voicemail\"></Record>",
                2
            ),
            line("<Hangup></Hangup>", 2),
        ])
    );
}

#[test]
fn queue_verbs() {
    let mut response = Response::new();
    response
        .add(Enqueue {
            wait_url: "/hold-music".to_string(),
            queue_name: "support".to_string(),
            ..Enqueue::default()
        })
        .add(Leave)
        .add(Redirect {
            method: "GET".to_string(),
            ..Redirect::new("/next")
        })
        .add(Reject {
            reason: "busy".to_string(),
        });

    assert_eq!(
        encode(&response),
        document(&[
            line("<Enqueue waitUrl=\"/hold-music\">support</Enqueue>", 2),
            line("<Leave></Leave>", 2),
            line("<Redirect method=\"GET\">/next</Redirect>", 2),
            line("<Reject reason=\"busy\"></Reject>", 2),
        ])
    );
}

#[test]
fn every_invalid_child_is_reported() {
    let mut response = Response::new();
    response
        .add(Say {
            voice: "man".to_string(),
            language: "ja-JP".to_string(),
            ..Say::new("konnichiwa")
        })
        .add(Hangup)
        .add(Redirect::default());

    let err = response.encode().unwrap_err();
    let causes: Vec<String> = err.causes().iter().map(|e| e.to_string()).collect();
    assert_eq!(
        causes,
        vec![
            "Say markup failed validation".to_string(),
            "Redirect markup failed validation".to_string(),
        ]
    );
    assert!(err.to_string().starts_with("Invalid TwiML markup:"));
}

#[test]
fn structural_error_wins_over_collected_errors() {
    let mut gather = Gather::default();
    gather.add(Say::default()).add(Hangup);
    let mut response = Response::new();
    response.add(gather);

    let err = response.validate().unwrap_err();
    let causes = err.causes();
    assert_eq!(causes.len(), 1);
    assert_eq!(
        causes[0].to_string(),
        "Unknown markup type Hangup as child of Gather"
    );
}

#[test]
fn encoding_is_deterministic() {
    let build = || {
        let mut dial = Dial {
            timeout: 15,
            action: "action/".to_string(),
            ..Dial::new("+15555550123")
        };
        dial.add(Client {
            name: "desk".to_string(),
            ..Client::default()
        });
        let mut response = Response::new();
        response.add(dial);
        response
    };
    assert_eq!(build().encode().unwrap(), build().encode().unwrap());
}
