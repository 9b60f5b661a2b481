use crate::axis::direction::{AxisDirection, STANDARD_COUNT};
use regex::Regex;
use std::sync::LazyLock;

/// Number of compass directions, from `NORTH` to `NORTH_NORTH_WEST`.
const COMPASS_COUNT: usize = 16;

static OPPOSITES: LazyLock<[Option<usize>; STANDARD_COUNT]> = LazyLock::new(|| {
    let mut table = [None; STANDARD_COUNT];
    let mut put = |a: AxisDirection, b: AxisDirection| {
        table[a.ordinal()] = Some(b.ordinal());
        table[b.ordinal()] = Some(a.ordinal());
    };

    put(AxisDirection::North, AxisDirection::South);
    put(AxisDirection::NorthNorthEast, AxisDirection::SouthSouthWest);
    put(AxisDirection::NorthEast, AxisDirection::SouthWest);
    put(AxisDirection::EastNorthEast, AxisDirection::WestSouthWest);
    put(AxisDirection::East, AxisDirection::West);
    put(AxisDirection::EastSouthEast, AxisDirection::WestNorthWest);
    put(AxisDirection::SouthEast, AxisDirection::NorthWest);
    put(AxisDirection::SouthSouthEast, AxisDirection::NorthNorthWest);
    put(AxisDirection::Up, AxisDirection::Down);
    put(AxisDirection::Future, AxisDirection::Past);
    put(AxisDirection::ColumnPositive, AxisDirection::ColumnNegative);
    put(AxisDirection::RowPositive, AxisDirection::RowNegative);
    put(AxisDirection::DisplayRight, AxisDirection::DisplayLeft);
    put(AxisDirection::DisplayUp, AxisDirection::DisplayDown);
    put(AxisDirection::AwayFrom, AxisDirection::Towards);
    put(AxisDirection::CounterClockwise, AxisDirection::Clockwise);

    table
});

static GEOCENTRIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)^geocentre\s*>\s*
            (?:(north\s*pole)|equator\s*/?\s*([+-]?\d+(?:\.\d*)?)\s*(?:°|deg)?\s*(e|east)?)$",
    )
    .expect("geocentric direction pattern is valid")
});

fn registered_opposite(direction: &AxisDirection) -> Option<&'static AxisDirection> {
    OPPOSITES
        .get(direction.ordinal())
        .copied()
        .flatten()
        .and_then(AxisDirection::from_ordinal)
}

/// Opposite of the given direction, or the direction itself if it has no opposite (for example
/// `OTHER` or user-defined directions).
pub fn opposite(direction: &AxisDirection) -> AxisDirection {
    registered_opposite(direction)
        .cloned()
        .unwrap_or_else(|| direction.clone())
}

/// Of a direction and its opposite, returns the one with the smaller ordinal. For example
/// `absolute(SOUTH)` is `NORTH`.
pub fn absolute(direction: &AxisDirection) -> AxisDirection {
    match registered_opposite(direction) {
        Some(opposite) if opposite.ordinal() < direction.ordinal() => opposite.clone(),
        _ => direction.clone(),
    }
}

/// Returns true if the direction is the "negative" member of a pair of opposite directions,
/// e.g. `SOUTH`, `WEST`, `DOWN` or `PAST`.
pub fn is_opposite(direction: &AxisDirection) -> bool {
    registered_opposite(direction).is_some_and(|opposite| opposite.ordinal() < direction.ordinal())
}

/// Returns true if the direction is spatial (including vertical and geocentric directions) or
/// user-defined. Temporal directions are always rejected; grid and display directions are
/// accepted only if `include_image_axes` is set.
pub fn is_spatial_or_custom(direction: &AxisDirection, include_image_axes: bool) -> bool {
    let ordinal = direction.ordinal();
    let last_excluded = if include_image_axes {
        AxisDirection::Past
    } else {
        AxisDirection::DisplayDown
    };

    ordinal < AxisDirection::Future.ordinal() || ordinal > last_excluded.ordinal()
}

/// Returns true for `COLUMN_POSITIVE`, `COLUMN_NEGATIVE`, `ROW_POSITIVE` and `ROW_NEGATIVE`.
pub fn is_grid(direction: &AxisDirection) -> bool {
    let ordinal = direction.ordinal();
    ordinal >= AxisDirection::ColumnPositive.ordinal()
        && ordinal <= AxisDirection::RowNegative.ordinal()
}

/// Returns true for the 16 compass directions from `NORTH` to `NORTH_NORTH_WEST`.
pub fn is_compass(direction: &AxisDirection) -> bool {
    let ordinal = direction.ordinal();
    ordinal >= AxisDirection::North.ordinal()
        && ordinal < AxisDirection::North.ordinal() + COMPASS_COUNT
}

/// Returns true for `NORTH`, `EAST`, `SOUTH` and `WEST`.
pub fn is_cardinal(direction: &AxisDirection) -> bool {
    is_compass(direction) && (direction.ordinal() - AxisDirection::North.ordinal()) % 4 == 0
}

/// Returns true for `NORTH_EAST`, `SOUTH_EAST`, `SOUTH_WEST` and `NORTH_WEST`.
pub fn is_intercardinal(direction: &AxisDirection) -> bool {
    is_compass(direction) && (direction.ordinal() - AxisDirection::North.ordinal()) % 4 == 2
}

/// Returns true for `UP` and `DOWN`.
pub fn is_vertical(direction: &AxisDirection) -> bool {
    matches!(direction, AxisDirection::Up | AxisDirection::Down)
}

/// Returns true for `FUTURE` and `PAST`.
pub fn is_temporal(direction: &AxisDirection) -> bool {
    matches!(direction, AxisDirection::Future | AxisDirection::Past)
}

/// Returns true for the four display directions.
pub fn is_display(direction: &AxisDirection) -> bool {
    let ordinal = direction.ordinal();
    ordinal >= AxisDirection::DisplayRight.ordinal()
        && ordinal <= AxisDirection::DisplayDown.ordinal()
}

/// Angle from `source` to `target` in units of 1/16 of a full turn, positive counter-clockwise,
/// in the `-8..=8` range. Returns `None` unless both directions are compass directions.
///
/// For example the angle from `NORTH` to `WEST` is 4 (90°) and from `NORTH` to `EAST` is -4.
pub fn angle_for_compass(source: &AxisDirection, target: &AxisDirection) -> Option<i32> {
    if !is_compass(source) || !is_compass(target) {
        return None;
    }

    let count = COMPASS_COUNT as i32;
    // Compass ordinals grow clockwise.
    let mut angle = source.ordinal() as i32 - target.ordinal() as i32;
    if angle < -count / 2 {
        angle += count;
    } else if angle > count / 2 {
        angle -= count;
    }

    Some(angle)
}

/// Index of the axis with the given direction.
///
/// If no axis has exactly this direction, returns the index of the first axis having the
/// opposite direction. An exact match is always preferred over an opposite one, even if the
/// opposite axis comes first.
pub fn index_of<'a>(
    axes: impl IntoIterator<Item = &'a AxisDirection>,
    direction: &AxisDirection,
) -> Option<usize> {
    let opposite = opposite(direction);
    let mut fallback = None;
    for (i, axis) in axes.into_iter().enumerate() {
        if axis == direction {
            return Some(i);
        }
        if fallback.is_none() && *axis == opposite {
            fallback = Some(i);
        }
    }

    fallback
}

/// Finds the candidate matching the given name.
///
/// The comparison ignores case and every character that is not a letter or a digit, so
/// `"north-east"` matches `NORTH_EAST`. Acronyms are also accepted: `"NE"` matches `NORTH_EAST`
/// and `"N"` matches `NORTH`.
pub fn find(name: &str, candidates: &[AxisDirection]) -> Option<AxisDirection> {
    candidates
        .iter()
        .find(|candidate| {
            let identifier = candidate.name();
            equals_filtered(name, identifier) || is_acronym_for_words(name, identifier)
        })
        .cloned()
}

/// Finds a standard direction from its name.
///
/// Underscores are treated as spaces. Besides the names accepted by [`find`], the EPSG
/// geocentric axis descriptions `Geocentre > equator/0°E`, `Geocentre > equator/90°E` and
/// `Geocentre > north pole` are recognized.
pub fn value_of(name: &str) -> Option<AxisDirection> {
    let name = name.replace('_', " ");
    let name = name.trim();

    find(name, AxisDirection::values())
        .or_else(|| geocentric(name))
        .or_else(|| {
            log::trace!("No axis direction matches '{name}'");
            None
        })
}

fn geocentric(name: &str) -> Option<AxisDirection> {
    let captures = GEOCENTRIC.captures(name)?;
    if captures.get(1).is_some() {
        return Some(AxisDirection::GeocentricZ);
    }

    let longitude: f64 = captures.get(2)?.as_str().parse().ok()?;
    let east = captures.get(3).is_some();
    if longitude == 0.0 {
        Some(AxisDirection::GeocentricX)
    } else if longitude == 90.0 && east {
        Some(AxisDirection::GeocentricY)
    } else {
        None
    }
}

fn letters_and_digits(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_uppercase)
}

fn equals_filtered(name: &str, identifier: &str) -> bool {
    letters_and_digits(name).eq(letters_and_digits(identifier))
}

fn is_acronym_for_words(acronym: &str, words: &str) -> bool {
    if acronym.chars().any(char::is_whitespace) {
        return false;
    }

    let mut initials = words
        .split(|c: char| !c.is_alphanumeric())
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .peekable();

    initials.peek().is_some() && letters_and_digits(acronym).eq(initials)
}
