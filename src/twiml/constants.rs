//! Provider vocabulary shared by markup attributes and callback payloads.

// Voices
pub const MAN: &str = "man";
pub const WOMAN: &str = "woman";
pub const ALICE: &str = "alice";

// Languages for the man and woman voices
pub const ENGLISH: &str = "en";
pub const FRENCH: &str = "fr";
pub const SPANISH: &str = "es";
pub const GERMAN: &str = "de";

// Locales for the alice voice
pub const DANISH_DENMARK: &str = "da-DK";
pub const GERMAN_GERMANY: &str = "de-DE";
pub const ENGLISH_AUSTRALIA: &str = "en-AU";
pub const ENGLISH_CANADA: &str = "en-CA";
pub const ENGLISH_UK: &str = "en-UK";
pub const ENGLISH_INDIA: &str = "en-IN";
pub const ENGLISH_USA: &str = "en-US";
pub const SPANISH_CATALAN: &str = "ca-ES";
pub const SPANISH_SPAIN: &str = "es-ES";
pub const SPANISH_MEXICO: &str = "es-MX";
pub const FINNISH_FINLAND: &str = "fi-FI";
pub const FRENCH_CANADA: &str = "fr-CA";
pub const FRENCH_FRANCE: &str = "fr-FR";
pub const ITALIAN_ITALY: &str = "it-IT";
pub const JAPANESE_JAPAN: &str = "ja-JP";
pub const KOREAN_KOREA: &str = "ko-KR";
pub const NORWEGIAN_NORWAY: &str = "nb-NO";
pub const DUTCH_NETHERLANDS: &str = "nl-NL";
pub const POLISH_POLAND: &str = "pl-PL";
pub const PORTUGUESE_BRAZIL: &str = "pt-BR";
pub const PORTUGUESE_PORTUGAL: &str = "pt-PT";
pub const RUSSIAN_RUSSIA: &str = "ru-RU";
pub const SWEDISH_SWEDEN: &str = "sv-SE";
pub const CHINESE_MANDARIN: &str = "zh-CH";
pub const CHINESE_CANTONESE: &str = "zh-HK";
pub const CHINESE_TAIWANESE: &str = "zh-TW";

/// Languages accepted for `man`, `woman` and any unrecognized voice.
pub const BASIC_LANGUAGES: &[&str] = &[ENGLISH, FRENCH, GERMAN, SPANISH, ENGLISH_UK];

/// Locales accepted for `alice`.
pub const ALICE_LANGUAGES: &[&str] = &[
    DANISH_DENMARK,
    GERMAN_GERMANY,
    ENGLISH_AUSTRALIA,
    ENGLISH_CANADA,
    ENGLISH_UK,
    ENGLISH_INDIA,
    ENGLISH_USA,
    SPANISH_CATALAN,
    SPANISH_SPAIN,
    SPANISH_MEXICO,
    FINNISH_FINLAND,
    FRENCH_CANADA,
    FRENCH_FRANCE,
    ITALIAN_ITALY,
    JAPANESE_JAPAN,
    KOREAN_KOREA,
    NORWEGIAN_NORWAY,
    DUTCH_NETHERLANDS,
    POLISH_POLAND,
    PORTUGUESE_BRAZIL,
    PORTUGUESE_PORTUGAL,
    RUSSIAN_RUSSIA,
    SWEDISH_SWEDEN,
    CHINESE_MANDARIN,
    CHINESE_CANTONESE,
    CHINESE_TAIWANESE,
];

// Call status
pub const QUEUED: &str = "queued";
pub const RINGING: &str = "ringing";
pub const IN_PROGRESS: &str = "in-progress";
pub const COMPLETED: &str = "completed";
pub const BUSY: &str = "busy";
pub const FAILED: &str = "failed";
pub const NO_ANSWER: &str = "no-answer";
pub const CANCELED: &str = "canceled";

// Call directions
pub const OUTBOUND_API: &str = "outbound-api";
pub const INBOUND: &str = "inbound";
pub const OUTBOUND_DIAL: &str = "outbound-dial";

// Trim options
pub const TRIM_SILENCE: &str = "trim-silence";
pub const DO_NOT_TRIM: &str = "do-not-trim";

// HTTP methods accepted for callbacks
pub const GET: &str = "GET";
pub const POST: &str = "POST";
