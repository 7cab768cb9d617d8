//! Utility functions and helpers.

pub mod http;

/// Title-case a display string: first letter of each whitespace-separated
/// token uppercased, the rest lowercased. Idempotent.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("bulbasaur"), "Bulbasaur");
        assert_eq!(title_case("MEWTWO"), "Mewtwo");
        assert_eq!(title_case("tapu koko"), "Tapu Koko");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_idempotent() {
        for name in ["bulbasaur", "tapu KOKO", "Mr. mime", "  padded  name "] {
            let once = title_case(name);
            assert_eq!(title_case(&once), once);
        }
    }
}
