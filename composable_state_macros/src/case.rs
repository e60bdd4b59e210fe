use syn::Ident;

const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
    "where", "while", "abstract", "become", "box", "do", "final", "macro", "override", "priv",
    "try", "typeof", "unsized", "virtual", "yield", "gen",
];

pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
                if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower) {
                    result.push('_');
                }
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}

/// Snake-cased identifier, raw if it collides with a keyword.
pub fn snake_ident(name: &Ident) -> Ident {
    let snake = to_snake_case(&name.to_string());
    if matches!(snake.as_str(), "crate" | "self" | "super") {
        Ident::new(&format!("{}_", snake), name.span())
    } else if KEYWORDS.contains(&snake.as_str()) {
        Ident::new_raw(&snake, name.span())
    } else {
        Ident::new(&snake, name.span())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;

    #[test]
    fn snake_cases_variant_names() {
        assert_eq!(to_snake_case("TappedEpisode"), "tapped_episode");
        assert_eq!(to_snake_case("Reset"), "reset");
        assert_eq!(to_snake_case("HTTPError"), "http_error");
        assert_eq!(to_snake_case("Page2Loaded"), "page2_loaded");
    }

    #[test]
    fn keywords_become_raw() {
        let ident = snake_ident(&Ident::new("Type", Span::call_site()));
        assert_eq!(ident.to_string(), "r#type");

        let ident = snake_ident(&Ident::new("Crate", Span::call_site()));
        assert_eq!(ident.to_string(), "crate_");
    }
}
