use crate::constants::canonical_airport;

/// Origin, destination and optional transit leg of a flown route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub transit: Option<String>,
}

/// Decompose free-text route strings.
///
/// `"A to B via C"` is the primary shape; anything without `" to "` is read
/// as `"A-B"`. Shapes matching neither still populate the origin.
pub fn parse_route(raw: Option<&str>) -> Route {
    let Some(route) = raw else {
        return Route::default();
    };

    let (origin, destination, transit) = match route.split_once(" to ") {
        Some((origin, rest)) => match rest.split_once(" via ") {
            Some((destination, transit)) => (origin, Some(destination), Some(transit)),
            None => (origin, Some(rest), None),
        },
        None => match route.split_once('-') {
            Some((origin, destination)) => (origin, Some(destination), None),
            None => (route, None, None),
        },
    };

    Route {
        origin: airport(Some(origin)),
        destination: airport(destination),
        transit: airport(transit),
    }
}

/// Trim one leg and fold known alternate spellings onto the canonical name.
fn airport(leg: Option<&str>) -> Option<String> {
    let leg = leg?.trim();
    if leg.is_empty() {
        return None;
    }
    Some(canonical_airport(leg).unwrap_or(leg).to_string())
}
