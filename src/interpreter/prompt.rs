//! Prompt template and response object extraction.

const TEMPLATE: &str = r#"A felhasználó ingatlanhirdetést keres Magyarországon. Emeld ki a keresés feltételeit.
Válaszolj egyetlen JSON objektummal, pontosan az alábbi kulcsokkal:
- "locations": a települések és budapesti kerületek listája, az említés sorrendjében (pl. "Budapest 13. kerület")
- "type": az ingatlan típusa (pl. "ház", "családi ház", "ikerház", "sorház", "lakás", "telek"), vagy null
- "size_min", "size_max": alapterület négyzetméterben, vagy null
- "rooms_min", "rooms_max": szobák száma egész számként, vagy null
- "price_min", "price_max": ár millió forintban, vagy null
- "condition": az ingatlan állapota (pl. "felújított", "új építésű"), vagy null
- "heating": a fűtés típusa (pl. "gáz", "távfűtés"), vagy null
Ne írj semmi mást a JSON objektumon kívül.

Példa:
Kérdés: "Budapesten és Debrecenben keresek 80-120 négyzetméteres családi házat maximum 50 millióért"
Válasz: {"locations": ["Budapest", "Debrecen"], "type": "családi ház", "size_min": 80, "size_max": 120, "rooms_min": null, "rooms_max": null, "price_min": null, "price_max": 50, "condition": null, "heating": null}

Kérdés: "{question}"
Válasz:"#;

/// Instructional prompt with `question` embedded verbatim
pub fn render(question: &str) -> String {
    TEMPLATE.replace("{question}", question)
}

/// First balanced `{...}` substring of `text`
///
/// Braces inside JSON string literals do not count toward nesting.
pub fn first_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_is_embedded_verbatim() {
        let prompt = render("Érden keresek \"olcsó\" lakást");
        assert!(prompt.ends_with("Kérdés: \"Érden keresek \"olcsó\" lakást\"\nVálasz:"));
        assert!(prompt.contains("\"size_min\""));
    }

    #[test]
    fn object_is_found_amid_commentary() {
        let text = "Íme a válasz:\n{\"locations\": [\"Szeged\"], \"type\": \"lakás\"}\nRemélem segít!";
        assert_eq!(
            first_object(text),
            Some("{\"locations\": [\"Szeged\"], \"type\": \"lakás\"}")
        );
    }

    #[test]
    fn nested_and_quoted_braces() {
        let text = r#"x {"a": {"b": "}{"}, "c": "\"}"} y {"d": 1}"#;
        assert_eq!(first_object(text), Some(r#"{"a": {"b": "}{"}, "c": "\"}"}"#));
    }

    #[test]
    fn unbalanced_or_missing_object() {
        assert_eq!(first_object("nincs objektum"), None);
        assert_eq!(first_object("{\"locations\": [\"Pécs\"]"), None);
    }
}
