//! Blog post model matching the remote `blogs` collection.

use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind};

/// A titled body section of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub content: String,
}

/// A question/answer pair shown at the end of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

/// The call-out box as stored remotely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightBox {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub intro: String,
    #[serde(default)]
    pub points: Vec<String>,
}

/// A persisted blog post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub sections: Option<Vec<Section>>,
    #[serde(default)]
    pub highlight_box: Option<HighlightBox>,
    #[serde(default)]
    pub faqs: Option<Vec<Faq>>,
    #[serde(default)]
    pub category: Option<String>,
    /// Either a JSON array of strings or a JSON-encoded string of one
    #[serde(default)]
    pub tags: Option<serde_json::Value>,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub published_date: Option<String>,
    /// URL of the persisted featured image
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub is_published: Option<bool>,
}

impl Entity for Post {
    const KIND: EntityKind = EntityKind::Post;

    fn id(&self) -> &str {
        &self.id
    }
}
