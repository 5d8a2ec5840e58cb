use once_cell::sync::Lazy;
use regex::Regex;

/// Separators seen between models in one aircraft field.
const AIRCRAFT_DELIMITERS: [char; 4] = ['/', '-', ',', '&'];

/// Ordered rewrites applied to each segment. Later rules see the output of
/// earlier ones ("Boeing 777" -> "B777" -> "BB777"), which the final code
/// extraction tolerates.
static REWRITES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)Boeing (\d+)", "B${1}"),
        (r"(?i)777", "B777"),
        (r"(?i)A(\d+)", "A${1}"),
        (r"(?i)170", "E170"),
        (r"(?i)190", "E190"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("aircraft rewrite pattern is valid"),
            replacement,
        )
    })
    .collect()
});

static AIRCRAFT_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[A-Z]\d+").expect("aircraft code pattern is valid"));

/// Up to two canonical aircraft codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AircraftCodes {
    pub aircraft_1: Option<String>,
    pub aircraft_2: Option<String>,
}

/// Canonicalize one model description, e.g. "Boeing 787-9" -> "B787".
/// Returns `None` when no letter-then-digits code survives the rewrites.
pub fn canonical_code(segment: &str) -> Option<String> {
    let rewritten = REWRITES
        .iter()
        .fold(segment.to_string(), |text, (pattern, replacement)| {
            pattern.replace_all(&text, *replacement).into_owned()
        });
    AIRCRAFT_CODE
        .find(&rewritten)
        .map(|m| m.as_str().to_string())
}

/// Split a free-text aircraft field and canonicalize the first two models.
/// Any further models are dropped.
pub fn normalize_aircraft(raw: Option<&str>) -> AircraftCodes {
    let Some(raw) = raw else {
        return AircraftCodes::default();
    };

    let mut segments = raw.split(AIRCRAFT_DELIMITERS);
    AircraftCodes {
        aircraft_1: segments.next().and_then(canonical_code),
        aircraft_2: segments.next().and_then(canonical_code),
    }
}
