// ============================================================================
// TEMPLATE - Sustitución literal de {{placeholder}} (sin motor de templates)
// ============================================================================

/// Reemplazar cada `{{key}}` por su valor. Los tokens sin valor quedan igual.
pub fn fill(template: &str, values: &[(&str, String)]) -> String {
    let mut html = template.to_string();
    for (key, value) in values {
        let token = format!("{{{{{}}}}}", key);
        html = html.replace(&token, value);
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_known_tokens() {
        let html = fill(
            "<p>{{totalAccounts}} accounts in {{totalCountries}} countries</p>",
            &[("totalAccounts", "12".to_string()), ("totalCountries", "3".to_string())],
        );
        assert_eq!(html, "<p>12 accounts in 3 countries</p>");
    }

    #[test]
    fn replaces_every_occurrence() {
        let html = fill("{{a}}-{{a}}", &[("a", "x".to_string())]);
        assert_eq!(html, "x-x");
    }

    #[test]
    fn leaves_unknown_tokens_and_plain_braces() {
        let html = fill("{{unknown}} {a} {{ a }}", &[("a", "x".to_string())]);
        assert_eq!(html, "{{unknown}} {a} {{ a }}");
    }

    #[test]
    fn values_are_inserted_literally() {
        // Un valor con forma de token no se vuelve a expandir
        let html = fill("{{a}}{{b}}", &[("b", "B".to_string()), ("a", "{{b}}".to_string())]);
        assert_eq!(html, "{{b}}B");
    }
}
