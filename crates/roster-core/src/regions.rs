//! Fixed state → city lookup table.

/// States and their cities, in display order.
pub const REGIONS: &[(&str, &[&str])] = &[
    ("Gujarat", &["Ahmedabad", "Surat", "Rajkot"]),
    ("Maharashtra", &["Mumbai", "Pune", "Nagpur"]),
    ("Rajasthan", &["Jaipur", "Udaipur"]),
];

/// All state names, in display order.
pub fn states() -> Vec<&'static str> {
    REGIONS.iter().map(|(state, _)| *state).collect()
}

/// Cities for a state. Unknown or empty state yields an empty list.
pub fn cities_for(state: &str) -> &'static [&'static str] {
    REGIONS
        .iter()
        .find(|(name, _)| *name == state)
        .map(|(_, cities)| *cities)
        .unwrap_or(&[])
}

pub fn is_known_state(state: &str) -> bool {
    REGIONS.iter().any(|(name, _)| *name == state)
}

/// True when `city` is one of the cities listed under `state`.
pub fn is_valid_location(state: &str, city: &str) -> bool {
    cities_for(state).contains(&city)
}
