use serde::Deserialize;

/// Custom deserializer for non-empty strings
pub fn deserialize_non_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.trim().is_empty() {
        return Err(serde::de::Error::custom("field cannot be empty"));
    }
    Ok(s.trim().to_string())
}

/// Rejects blank strings but keeps the value as given, for exact matches
pub fn deserialize_non_blank_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.trim().is_empty() {
        return Err(serde::de::Error::custom("field cannot be empty"));
    }
    Ok(s)
}

/// Optional variant: a blank string is treated as absent
pub fn deserialize_optional_non_empty_string<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = Option::<String>::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Args {
        #[serde(deserialize_with = "deserialize_non_empty_string")]
        project: String,
        #[serde(default, deserialize_with = "deserialize_optional_non_empty_string")]
        team: Option<String>,
    }

    #[test]
    fn trims_and_rejects_blank_values() {
        let args: Args = serde_json::from_value(json!({"project": "  Fabrikam "})).unwrap();
        assert_eq!(args.project, "Fabrikam");
        assert_eq!(args.team, None);

        assert!(serde_json::from_value::<Args>(json!({"project": "   "})).is_err());
    }

    #[derive(Deserialize)]
    struct TitleArgs {
        #[serde(deserialize_with = "deserialize_non_blank_string")]
        title: String,
    }

    #[test]
    fn non_blank_keeps_surrounding_whitespace() {
        let args: TitleArgs = serde_json::from_value(json!({"title": " Foo "})).unwrap();
        assert_eq!(args.title, " Foo ");

        assert!(serde_json::from_value::<TitleArgs>(json!({"title": " \t"})).is_err());
    }

    #[test]
    fn blank_optional_value_is_none() {
        let args: Args =
            serde_json::from_value(json!({"project": "P", "team": " "})).unwrap();
        assert_eq!(args.team, None);
    }
}
