use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Knowledge hub article. Collection: `article`.
///
/// Articles are write-once from this API: there are no update or delete
/// operations, and `published_at` is never stamped automatically when
/// `published` flips to true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "opt_chrono_datetime_as_bson_datetime"
    )]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl Article {
    pub fn new(
        title: String,
        summary: String,
        content: String,
        author: String,
        tags: Vec<String>,
        published: bool,
    ) -> Self {
        let slug = slugify(&title);
        Self {
            id: None,
            title,
            slug,
            summary,
            content,
            author,
            tags,
            published,
            published_at: None,
            created_at: Utc::now(),
        }
    }
}

/// Derive a URL-friendly slug: lowercase, trimmed, whitespace replaced with
/// hyphens. Slugs are not unique; collisions are allowed.
pub fn slugify(title: &str) -> String {
    title
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

// Helper module for optional DateTime<Utc> as BSON DateTime
mod opt_chrono_datetime_as_bson_datetime {
    use chrono::{DateTime, Utc};
    use mongodb::bson;
    use serde::{self, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => bson::DateTime::from_chrono(*d).serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<bson::DateTime>::deserialize(deserializer)?;
        Ok(value.map(|d| d.to_chrono()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn slugify_trims_surrounding_whitespace() {
        assert_eq!(slugify("  Marketing Governance  "), "marketing-governance");
    }

    #[test]
    fn slugify_passes_through_existing_slugs() {
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
    }

    #[test]
    fn slugify_replaces_each_whitespace_character() {
        assert_eq!(slugify("a  b"), "a--b");
        assert_eq!(slugify("a\tb"), "a-b");
    }

    #[test]
    fn new_article_applies_defaults() {
        let article = Article::new(
            "Hello World".to_string(),
            "s".to_string(),
            "c".to_string(),
            "a".to_string(),
            Vec::new(),
            false,
        );

        assert!(article.id.is_none());
        assert_eq!(article.slug, "hello-world");
        assert!(article.tags.is_empty());
        assert!(!article.published);
        assert!(article.published_at.is_none());
    }
}
