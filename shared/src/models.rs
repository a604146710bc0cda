use serde::{Deserialize, Serialize};

/// Blog article as returned by the REST API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Server id (`_id`).
    #[serde(rename = "_id")]
    pub id: String,
    /// Category name.
    pub category: String,
    /// Author portrait URL.
    #[serde(default)]
    pub avatar: String,
    /// Cover image URL.
    #[serde(default)]
    pub img: String,
    /// Headline.
    pub title: String,
    /// Body text shown above the code panels.
    #[serde(default)]
    pub description: String,
    /// Code text with optional `// @` directives.
    #[serde(default)]
    pub code: String,
    /// URL segment of the detail page.
    pub slug: String,
    /// View counter.
    #[serde(default)]
    pub views: u64,
    /// Like counter.
    #[serde(default)]
    pub likes: u64,
    /// Anonymous ids that liked the article, when the server sends them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liked_by: Option<Vec<String>>,
    /// ISO-8601 creation time.
    #[serde(default)]
    pub created_at: String,
    /// ISO-8601 last edit time.
    #[serde(default)]
    pub updated_at: String,
}

impl Article {
    /// Whether `user_id` appears in the server-side `likedBy` list.
    ///
    /// Returns `false` when the server omitted the list.
    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.liked_by
            .as_ref()
            .is_some_and(|users| users.iter().any(|user| user == user_id))
    }
}

/// Article category. `article_count` is derived server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Server id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    #[serde(rename = "categoryName", alias = "name")]
    pub name: String,
    /// URL segment.
    #[serde(default)]
    pub slug: String,
    /// Articles filed under it.
    #[serde(default)]
    pub article_count: u64,
}

/// Payload for `POST /api/categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    /// Validated name.
    pub category_name: String,
}

/// Reader comment on an article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Server id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Author label.
    pub user: String,
    /// Comment body.
    pub text: String,
    /// Like counter.
    #[serde(default)]
    pub likes: u64,
    /// Display time the server formatted.
    #[serde(default)]
    pub time: String,
    /// ISO-8601 creation time, when sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Payload for `POST /api/articles/:id/comments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewComment {
    /// Author label.
    pub user: String,
    /// Trimmed body.
    pub text: String,
}

/// Body of `POST /api/articles/:id/like` and `/unlike`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    /// Anonymous id of the visitor.
    pub user_id: String,
}

/// Response of `GET /api/articles/:id/like-status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatus {
    /// Whether the requesting user has liked the article.
    pub is_liked: bool,
    /// Total likes.
    pub like_count: u64,
    /// Echo of the article id.
    #[serde(default)]
    pub article_id: String,
}

/// Portfolio project, either bundled or from `GET /api/projects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Id; numeric ids in the bundled data are read as strings.
    #[serde(alias = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    /// Project name.
    pub title: String,
    /// One-line summary for the card.
    #[serde(default)]
    pub description: String,
    /// Text for the detail modal.
    #[serde(default)]
    pub full_description: String,
    /// Screenshot URL.
    #[serde(default)]
    pub image: String,
    /// Tech tags.
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Repository link.
    #[serde(default, alias = "githubUrl")]
    pub github: Option<String>,
    /// Live demo link.
    #[serde(default, alias = "demoUrl")]
    pub demo: Option<String>,
}

impl Project {
    /// Case-insensitive match against the title, description or any
    /// technology.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self
                .technologies
                .iter()
                .any(|tech| tech.to_lowercase().contains(&needle))
    }
}

// Bundled project data uses numeric ids, the API uses strings.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_decodes_mongo_style_payload() {
        let json = r#"{
            "_id": "65f0c0ffee",
            "category": "Rust",
            "avatar": "https://cdn.example.com/a.png",
            "img": "https://cdn.example.com/b.png",
            "title": "Ownership in practice",
            "description": "Borrowing explained",
            "code": "fn main() {}",
            "slug": "ownership-in-practice",
            "views": 12,
            "likes": 3,
            "likedBy": ["user_1", "user_2"],
            "createdAt": "2025-01-02T10:00:00.000Z",
            "updatedAt": "2025-01-03T10:00:00.000Z"
        }"#;

        let article: Article = serde_json::from_str(json).expect("decode article");
        assert_eq!(article.id, "65f0c0ffee");
        assert_eq!(article.likes, 3);
        assert!(article.is_liked_by("user_2"));
        assert!(!article.is_liked_by("user_3"));
    }

    #[test]
    fn article_without_liked_by_is_not_liked() {
        let json = r#"{"_id":"a","category":"c","title":"t","slug":"s"}"#;
        let article: Article = serde_json::from_str(json).expect("decode article");
        assert_eq!(article.views, 0);
        assert!(!article.is_liked_by("anyone"));
    }

    #[test]
    fn category_accepts_both_name_spellings() {
        let wire: Category =
            serde_json::from_str(r#"{"_id":"1","categoryName":"Web","articleCount":4}"#)
                .expect("decode categoryName");
        let short: Category =
            serde_json::from_str(r#"{"_id":"2","name":"Rust"}"#).expect("decode name");
        assert_eq!(wire.name, "Web");
        assert_eq!(wire.article_count, 4);
        assert_eq!(short.name, "Rust");
    }

    #[test]
    fn project_id_accepts_numbers() {
        let project: Project =
            serde_json::from_str(r#"{"id":7,"title":"Carousel"}"#).expect("decode project");
        assert_eq!(project.id, "7");
        assert!(project.technologies.is_empty());
    }

    #[test]
    fn project_search_covers_title_description_and_technologies() {
        let project = Project {
            id: "1".to_string(),
            title: "Portfolio".to_string(),
            description: "Personal site with a blog".to_string(),
            full_description: String::new(),
            image: String::new(),
            technologies: vec!["React".to_string(), "Tailwind".to_string()],
            github: None,
            demo: None,
        };
        assert!(project.matches("port"));
        assert!(project.matches("TAIL"));
        assert!(project.matches("blog"));
        assert!(project.matches("  "));
        assert!(!project.matches("django"));
    }
}
