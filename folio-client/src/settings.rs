use anyhow::Context;

use crate::api::Author;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Identity stamped on every comment posted from this browser
    pub placeholder_author: Author,

    /// How many featured portfolios the home page shows
    pub featured_count: usize,

    pub max_tags: usize,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            placeholder_author: Author {
                name: String::from("You"),
                avatar: Some(String::new()),
                role: String::from("Community Member"),
                is_expert: Some(false),
            },
            featured_count: 3,
            max_tags: 5,
        }
    }
}

impl Settings {
    /// Missing keys keep their default value
    pub fn parse(json: &str) -> anyhow::Result<Settings> {
        serde_json::from_str(json).context("parsing settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_settings_fall_back_to_defaults() {
        let s = Settings::parse(r#"{ "maxTags": 2 }"#).unwrap();
        assert_eq!(s.max_tags, 2);
        assert_eq!(s.featured_count, 3);
        assert_eq!(s.placeholder_author.name, "You");
    }

    #[test]
    fn placeholder_author_can_be_overridden() {
        let s = Settings::parse(
            r#"{ "placeholderAuthor": { "name": "Ana Lima", "role": "Illustrator" } }"#,
        )
        .unwrap();
        assert_eq!(s.placeholder_author.name, "Ana Lima");
        assert_eq!(s.placeholder_author.avatar, None);
        assert_eq!(s.max_tags, 5);
    }

    #[test]
    fn malformed_settings_are_an_error() {
        assert!(Settings::parse("{").is_err());
        assert!(Settings::parse(r#"{ "maxTags": "many" }"#).is_err());
    }
}
