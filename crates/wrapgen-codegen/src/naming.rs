//! Naming convention utilities for code generation.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `SPAWN_ENTITY` | [`to_pascal_case`] | `SpawnEntity` |
//! | `Entity ID` | [`capitalize_words`] | `EntityID` |
//! | `Eid` | [`accessor_name`] | `EntityID` |
//! | `The entity` | [`lower_first`] | `the entity` |

/// Convert an upper-snake registry identifier to PascalCase.
///
/// # Examples
///
/// ```
/// use wrapgen_codegen::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("SPAWN_ENTITY"), "SpawnEntity");
/// assert_eq!(to_pascal_case("PLAY"), "Play");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split(['-', '_'])
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
            }
        })
        .collect()
}

/// Capitalize the first letter of a string.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lower-case the first letter of a string, leaving the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Word-boundary capitalization of free text.
///
/// Every character that cannot appear in a Java identifier is a word
/// boundary and is dropped; the first letter of each word is capitalized
/// and the rest is kept as written.
///
/// # Examples
///
/// ```
/// use wrapgen_codegen::naming::capitalize_words;
///
/// assert_eq!(capitalize_words("Entity ID"), "EntityID");
/// assert_eq!(capitalize_words("velocity x"), "VelocityX");
/// ```
pub fn capitalize_words(s: &str) -> String {
    s.split(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
        .map(capitalize)
        .collect()
}

/// Accessor name for a documented field: word-boundary capitalization
/// followed by each synonym replacement in order.
///
/// # Examples
///
/// ```
/// use wrapgen_codegen::naming::accessor_name;
///
/// let synonyms = vec![("Eid".to_string(), "EntityID".to_string())];
/// assert_eq!(accessor_name("eid", &synonyms), "EntityID");
/// ```
pub fn accessor_name(display_name: &str, synonyms: &[(String, String)]) -> String {
    synonyms
        .iter()
        .fold(capitalize_words(display_name), |name, (from, to)| {
            name.replace(from.as_str(), to)
        })
}
