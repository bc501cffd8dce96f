//! Draft store for blog posts.

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat};

use super::{attach_staged, missing_image, Draft, Payload, RepeatableList, TagSet};
use crate::attachment::AttachmentSlot;
use crate::errors::AppError;
use crate::models::{Faq, HighlightBox, Post, Section};
use crate::slug::derive_slug;

/// Multipart field carrying the featured image.
pub const FEATURED_IMAGE_FIELD: &str = "featuredImage";

/// A scalar field edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostField {
    Title(String),
    Slug(String),
    Content(String),
    Category(String),
    Author(String),
    MetaDescription(String),
    PublishedDate(Option<NaiveDate>),
    IsPublished(bool),
    /// The tag currently being typed
    NewTag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionField {
    Heading(String),
    Content(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaqField {
    Question(String),
    Answer(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HighlightField {
    Title(String),
    Intro(String),
}

/// Editable call-out box; its points never drop below one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct HighlightDraft {
    pub title: String,
    pub intro: String,
    pub points: RepeatableList<String>,
}

impl From<&HighlightBox> for HighlightDraft {
    fn from(stored: &HighlightBox) -> Self {
        Self {
            title: stored.title.clone(),
            intro: stored.intro.clone(),
            points: RepeatableList::from_vec(stored.points.clone()),
        }
    }
}

/// Working copy of a blog post.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDraft {
    title: String,
    slug: String,
    /// Set once the slug was edited by hand; title edits then stop re-deriving it
    slug_pinned: bool,
    content: String,
    category: String,
    author: String,
    meta_description: String,
    published_date: Option<NaiveDate>,
    is_published: bool,
    sections: RepeatableList<Section>,
    faqs: RepeatableList<Faq>,
    highlight: HighlightDraft,
    tags: TagSet,
    new_tag: String,
    attachment: AttachmentSlot,
    editing_id: Option<String>,
}

impl PostDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one scalar field.
    pub fn set_field(&mut self, field: PostField) {
        match field {
            PostField::Title(title) => {
                if !self.slug_pinned {
                    self.slug = derive_slug(&title);
                }
                self.title = title;
            }
            PostField::Slug(slug) => {
                self.slug_pinned = !slug.trim().is_empty();
                self.slug = slug;
            }
            PostField::Content(content) => self.content = content,
            PostField::Category(category) => self.category = category,
            PostField::Author(author) => self.author = author,
            PostField::MetaDescription(meta) => self.meta_description = meta,
            PostField::PublishedDate(date) => self.published_date = date,
            PostField::IsPublished(flag) => self.is_published = flag,
            PostField::NewTag(tag) => self.new_tag = tag,
        }
    }

    // Sections

    pub fn add_section(&mut self) {
        self.sections.add();
    }

    pub fn set_section(&mut self, index: usize, field: SectionField) {
        self.sections.update_at(index, |section| match field {
            SectionField::Heading(heading) => section.heading = heading,
            SectionField::Content(content) => section.content = content,
        });
    }

    pub fn remove_section(&mut self, index: usize) {
        self.sections.remove_at(index);
    }

    // FAQs

    pub fn add_faq(&mut self) {
        self.faqs.add();
    }

    pub fn set_faq(&mut self, index: usize, field: FaqField) {
        self.faqs.update_at(index, |faq| match field {
            FaqField::Question(question) => faq.question = question,
            FaqField::Answer(answer) => faq.answer = answer,
        });
    }

    pub fn remove_faq(&mut self, index: usize) {
        self.faqs.remove_at(index);
    }

    // Highlight box

    pub fn set_highlight_field(&mut self, field: HighlightField) {
        match field {
            HighlightField::Title(title) => self.highlight.title = title,
            HighlightField::Intro(intro) => self.highlight.intro = intro,
        }
    }

    pub fn add_highlight_point(&mut self) {
        self.highlight.points.add();
    }

    pub fn update_highlight_point(&mut self, index: usize, text: impl Into<String>) {
        let text = text.into();
        self.highlight.points.update_at(index, |point| *point = text);
    }

    pub fn remove_highlight_point(&mut self, index: usize) {
        self.highlight.points.remove_at(index);
    }

    // Tags

    /// Add a tag; on success the staging field is cleared. Blanks and duplicates are ignored.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let added = self.tags.insert(raw);
        if added {
            self.new_tag.clear();
        }
        added
    }

    /// Commit whatever is in the staging field, as pressing Enter does.
    pub fn add_staged_tag(&mut self) -> bool {
        let raw = self.new_tag.clone();
        self.add_tag(&raw)
    }

    pub fn remove_tag(&mut self, index: usize) {
        self.tags.remove_at(index);
    }

    // Accessors

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn is_slug_pinned(&self) -> bool {
        self.slug_pinned
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn meta_description(&self) -> &str {
        &self.meta_description
    }

    pub fn published_date(&self) -> Option<NaiveDate> {
        self.published_date
    }

    pub fn is_published(&self) -> bool {
        self.is_published
    }

    pub fn sections(&self) -> &RepeatableList<Section> {
        &self.sections
    }

    pub fn faqs(&self) -> &RepeatableList<Faq> {
        &self.faqs
    }

    pub fn highlight(&self) -> &HighlightDraft {
        &self.highlight
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn new_tag(&self) -> &str {
        &self.new_tag
    }
}

impl Draft for PostDraft {
    type Entity = Post;

    fn load_from_entity(&mut self, post: &Post) {
        let title = post.title.clone().unwrap_or_default();
        let slug = post.slug.clone().unwrap_or_default();

        *self = Self {
            slug_pinned: !slug.is_empty() && slug != derive_slug(&title),
            title,
            slug,
            content: post.content.clone().unwrap_or_default(),
            category: post.category.clone().unwrap_or_default(),
            author: post.author.clone().unwrap_or_default(),
            meta_description: post.meta_description.clone().unwrap_or_default(),
            published_date: post.published_date.as_deref().and_then(parse_date),
            is_published: post.is_published.unwrap_or(false),
            sections: RepeatableList::from_vec(post.sections.clone().unwrap_or_default()),
            faqs: RepeatableList::from_vec(post.faqs.clone().unwrap_or_default()),
            highlight: post
                .highlight_box
                .as_ref()
                .map(HighlightDraft::from)
                .unwrap_or_default(),
            tags: TagSet::from_remote(post.tags.as_ref()),
            new_tag: String::new(),
            attachment: AttachmentSlot::persisted(post.featured_image.as_deref()),
            editing_id: Some(post.id.clone()),
        };
    }

    fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    fn validation_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push("Title is required".to_string());
        }
        if self.slug.trim().is_empty() {
            errors.push("Slug is required".to_string());
        }
        if self.author.trim().is_empty() {
            errors.push("Author is required".to_string());
        }
        errors.extend(missing_image(self, "Featured image is required"));
        errors
    }

    fn serialize(&self) -> Result<Payload, AppError> {
        let mut payload = Payload::new();

        payload.push_text("title", &self.title);
        payload.push_text("slug", &self.slug);
        payload.push_text("content", &self.content);
        payload.push_text("category", &self.category);
        payload.push_text("metaDescription", &self.meta_description);
        payload.push_text("author", &self.author);
        payload.push_text("isPublished", self.is_published.to_string());
        if let Some(date) = self.published_date {
            payload.push_text("publishedDate", format_date(date));
        }

        for tag in self.tags.iter() {
            payload.push_text("tags", tag);
        }
        payload.push_text("sections", serde_json::to_string(&self.sections)?);
        payload.push_text("faqs", serde_json::to_string(&self.faqs)?);
        payload.push_text("highlightBox", serde_json::to_string(&self.highlight)?);

        attach_staged(&mut payload, &self.attachment, FEATURED_IMAGE_FIELD);
        Ok(payload)
    }

    fn attachment(&self) -> &AttachmentSlot {
        &self.attachment
    }

    fn attachment_mut(&mut self) -> &mut AttachmentSlot {
        &mut self.attachment
    }
}

/// Midnight UTC of `date`, e.g. `2024-05-01T00:00:00.000Z`.
fn format_date(date: NaiveDate) -> String {
    date.and_time(NaiveTime::default())
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Accept full RFC 3339 timestamps or bare `YYYY-MM-DD` dates.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.naive_utc().date())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()
}
