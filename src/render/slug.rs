//! Slug generation for route segments.
//!
//! Routes follow the `/modules/<track>/<subtrack>/<topic>` convention;
//! each segment is a GitHub-style slug of the authored identifier.

/// Generate a GitHub-style slug from text.
///
/// Converts text to lowercase, replaces spaces and special characters
/// with hyphens, and removes consecutive/leading/trailing hyphens.
///
/// # Examples
///
/// ```
/// use didact::render::slug::slugify;
///
/// assert_eq!(slugify("Circuit Breaker"), "circuit-breaker");
/// assert_eq!(slugify("OAuth2 Flows!"), "oauth2-flows");
/// assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
/// ```
pub fn slugify(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                // Skip other characters
                '\0'
            }
        })
        .filter(|&c| c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_simple() {
        assert_eq!(slugify("Bulkhead Pattern"), "bulkhead-pattern");
    }

    #[test]
    fn test_slugify_with_punctuation() {
        assert_eq!(slugify("JWT: Authentication!"), "jwt-authentication");
    }

    #[test]
    fn test_slugify_already_kebab() {
        assert_eq!(slugify("circuit-breaker"), "circuit-breaker");
    }

    #[test]
    fn test_slugify_underscores() {
        assert_eq!(slugify("service_discovery"), "service-discovery");
    }

    #[test]
    fn test_slugify_numbers() {
        assert_eq!(slugify("OAuth2 Flows"), "oauth2-flows");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_hyphens() {
        assert_eq!(slugify("api--gateway"), "api-gateway");
        assert_eq!(slugify("-saga-"), "saga");
    }
}
