use serde::{Deserialize, Deserializer, de::Error as _};

/// Reads an optional yes/no filter given either as a boolean or as the text
/// `true`/`false`, the only form a query string can carry. Blank text is
/// "All".
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Bool(flag)) => Ok(Some(flag)),
        Some(Raw::Text(text)) => match text.trim().to_ascii_lowercase().as_str() {
            "" => Ok(None),
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            other => Err(D::Error::custom(format!(
                "expected true or false, got {other:?}"
            ))),
        },
    }
}

/// Case-insensitive substring match of `query` against any of `fields`.
/// A missing or blank query matches everything.
pub fn matches_search(query: Option<&str>, fields: &[&str]) -> bool {
    let Some(query) = query.map(str::trim).filter(|q| !q.is_empty()) else {
        return true;
    };
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// `None` is the "All" option of a select control.
pub fn matches_choice<T: PartialEq>(selected: Option<&T>, value: &T) -> bool {
    selected.is_none_or(|choice| choice == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_matches_everything() {
        assert!(matches_search(None, &["Alice"]));
        assert!(matches_search(Some("   "), &["Alice"]));
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let fields = ["Sarah Johnson", "Engineering"];
        assert!(matches_search(Some("johnson"), &fields));
        assert!(matches_search(Some("ENGIN"), &fields));
        assert!(!matches_search(Some("finance"), &fields));
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct FlagFilter {
        #[serde(deserialize_with = "deserialize_flag")]
        done: Option<bool>,
    }

    fn flag(json: serde_json::Value) -> Result<Option<bool>, serde_json::Error> {
        serde_json::from_value::<FlagFilter>(json).map(|f| f.done)
    }

    #[test]
    fn flag_accepts_text_and_booleans() {
        assert_eq!(flag(serde_json::json!({"done": "true"})).unwrap(), Some(true));
        assert_eq!(flag(serde_json::json!({"done": " FALSE "})).unwrap(), Some(false));
        assert_eq!(flag(serde_json::json!({"done": true})).unwrap(), Some(true));
        assert_eq!(flag(serde_json::json!({"done": ""})).unwrap(), None);
        assert_eq!(flag(serde_json::json!({})).unwrap(), None);
        assert!(flag(serde_json::json!({"done": "maybe"})).is_err());
    }

    #[test]
    fn choice_all_and_exact() {
        assert!(matches_choice(None, &"approved"));
        assert!(matches_choice(Some(&"approved"), &"approved"));
        assert!(!matches_choice(Some(&"pending"), &"approved"));
    }
}
