use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::serde_utils::string_from_scalar;

#[derive(Clone, Copy, Debug, EnumString, Display, PartialEq, Eq)]
pub enum Category {
    Models,
    Tools,
    Research,
    Industry,
}

impl Category {
    /// Exact, case-sensitive match against the text the model returned.
    pub fn recognize(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

/// One headline as returned by the model.
///
/// Fields are kept as the model sent them; missing or null fields decode to an
/// empty string and numbers or booleans to their textual form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewsItem {
    #[serde(default, deserialize_with = "string_from_scalar")]
    pub title: String,
    #[serde(default, deserialize_with = "string_from_scalar")]
    pub summary: String,
    #[serde(default, deserialize_with = "string_from_scalar")]
    pub source: String,
    #[serde(default, deserialize_with = "string_from_scalar")]
    pub category: String,
    #[serde(default, deserialize_with = "string_from_scalar")]
    pub date: String,
}

impl NewsItem {
    pub fn category(&self) -> Option<Category> {
        Category::recognize(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_known_categories_exactly() {
        assert_eq!(Category::recognize("Models"), Some(Category::Models));
        assert_eq!(Category::recognize("Industry"), Some(Category::Industry));
        assert_eq!(Category::recognize("models"), None);
        assert_eq!(Category::recognize("Policy"), None);
        assert_eq!(Category::recognize(""), None);
    }

    #[test]
    fn missing_and_null_fields_decode_to_empty() {
        let item: NewsItem =
            serde_json::from_str(r#"{"title":"Only a title","summary":null}"#).unwrap();
        assert_eq!(item.title, "Only a title");
        assert_eq!(item.summary, "");
        assert_eq!(item.source, "");
        assert_eq!(item.category(), None);
    }

    #[test]
    fn scalar_fields_are_stringified() {
        let item: NewsItem =
            serde_json::from_str(r#"{"title":"T","date":20250101,"source":true}"#).unwrap();
        assert_eq!(item.date, "20250101");
        assert_eq!(item.source, "true");
    }

    #[test]
    fn nested_values_are_rejected() {
        let res = serde_json::from_str::<NewsItem>(r#"{"title":{"text":"nested"}}"#);
        assert!(res.is_err());
    }

    #[test]
    fn unrecognized_category_is_passed_through() {
        let item: NewsItem = serde_json::from_str(r#"{"category":"Policy"}"#).unwrap();
        assert_eq!(item.category, "Policy");
        assert_eq!(item.category(), None);
    }
}
