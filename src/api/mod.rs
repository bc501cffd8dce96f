//! REST client for the remote catalog collections.
//!
//! Knows the collection contract (paths, envelopes, multipart framing, bearer credential) and
//! nothing about drafts or local collection state.

mod envelope;

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use reqwest::{header, Client, RequestBuilder, StatusCode, Url};

use crate::auth::{bearer_value, SessionStore};
use crate::config::{normalize_base_url, Config};
use crate::draft::Payload;
use crate::errors::AppError;
use crate::models::{Entity, EntityKind, Post};
use envelope::{ItemEnvelope, ListEnvelope};

/// Path segment under the posts collection that addresses a post by slug.
const SLUG_SEGMENT: &str = "slug";

/// HTTP client shared by every collection synchronizer.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Arc<str>,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Arc<dyn SessionStore>) -> Self {
        Self {
            http: Client::new(),
            base_url: normalize_base_url(base_url).into(),
            session,
        }
    }

    pub fn from_config(config: &Config, session: Arc<dyn SessionStore>) -> Self {
        Self::new(&config.api_base_url, session)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET the full collection for `E`.
    pub async fn list<E: Entity>(&self) -> Result<Vec<E>, AppError> {
        let kind = E::KIND;
        let url = self.endpoint(kind, &[])?;
        let fallback = format!("Failed to load {}. Please try again.", kind.plural());

        let body = self.send(self.http.get(url), &fallback).await?;
        let envelope: ListEnvelope<E> = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Unexpected {} list body: {}", kind.noun(), e);
            AppError::Remote {
                status: None,
                message: fallback.clone(),
            }
        })?;
        Ok(envelope.into_items())
    }

    /// POST a new entity as multipart.
    pub async fn create<E: Entity>(&self, payload: &Payload) -> Result<(), AppError> {
        let kind = E::KIND;
        let url = self.endpoint(kind, &[])?;
        let request = self.http.post(url).multipart(to_form(payload)?);
        self.send(request, &save_fallback(kind)).await.map(|_| ())
    }

    /// PUT a replacement for entity `id` as multipart.
    pub async fn update<E: Entity>(&self, id: &str, payload: &Payload) -> Result<(), AppError> {
        let kind = E::KIND;
        let url = self.endpoint(kind, &[id])?;
        let request = self.http.put(url).multipart(to_form(payload)?);
        self.send(request, &save_fallback(kind)).await.map(|_| ())
    }

    /// DELETE entity `id`.
    pub async fn delete<E: Entity>(&self, id: &str) -> Result<(), AppError> {
        let kind = E::KIND;
        let url = self.endpoint(kind, &[id])?;
        let fallback = format!("Failed to delete {}. Please try again.", kind.noun());
        self.send(self.http.delete(url), &fallback).await.map(|_| ())
    }

    /// GET a single post by slug, for the detail view.
    pub async fn post_by_slug(&self, slug: &str) -> Result<Post, AppError> {
        let url = self.endpoint(EntityKind::Post, &[SLUG_SEGMENT, slug])?;
        let fallback = "Blog not found.".to_string();

        let body = self.send(self.http.get(url), &fallback).await?;
        let envelope: ItemEnvelope<Post> =
            serde_json::from_str(&body).map_err(|_| AppError::Remote {
                status: None,
                message: fallback,
            })?;
        Ok(envelope.into_item())
    }

    /// Collection URL with extra path segments, each percent-encoded.
    fn endpoint(&self, kind: EntityKind, segments: &[&str]) -> Result<Url, AppError> {
        let raw = format!("{}{}", self.base_url, kind.collection_path());
        let mut url = Url::parse(&raw)
            .map_err(|e| AppError::Internal(format!("Invalid API URL {}: {}", raw, e)))?;
        url.path_segments_mut()
            .map_err(|_| AppError::Internal(format!("API URL cannot take a path: {}", raw)))?
            .extend(segments);
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.header(header::AUTHORIZATION, bearer_value(&token)),
            None => request,
        }
    }

    /// Send a request and return the body of a 2xx response.
    ///
    /// Anything else becomes `AppError::Remote`, using the body's message when it has one.
    async fn send(&self, request: RequestBuilder, fallback: &str) -> Result<String, AppError> {
        let response = match self.authorize(request).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Request failed before a response arrived: {}", e);
                return Err(AppError::Remote {
                    status: None,
                    message: fallback.to_string(),
                });
            }
        };

        let status = response.status();
        tracing::debug!(%status, url = %response.url(), "Remote responded");
        let body = response.text().await.unwrap_or_default();

        if status.is_success() {
            return Ok(body);
        }

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("Session rejected by the API; clearing credential");
            self.session.clear();
        }

        let err = AppError::remote(Some(status.as_u16()), &body, fallback);
        tracing::warn!("Remote failure: {}", err);
        Err(err)
    }
}

fn save_fallback(kind: EntityKind) -> String {
    format!("Failed to save {}. Please try again.", kind.noun())
}

/// Frame a payload as `multipart/form-data`.
fn to_form(payload: &Payload) -> Result<Form, AppError> {
    let mut form = Form::new();
    for (key, value) in payload.fields() {
        form = form.text(key.clone(), value.clone());
    }
    if let Some(attached) = payload.file() {
        let part = Part::bytes(attached.file.bytes.clone())
            .file_name(attached.file.file_name.clone())
            .mime_str(&attached.file.content_type)?;
        form = form.part(attached.field, part);
    }
    Ok(form)
}
