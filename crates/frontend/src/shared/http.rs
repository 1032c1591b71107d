//! HTTP client adapter.
//!
//! Every backend call goes through [`ApiClient`]: it prefixes the API base,
//! attaches the bearer token, decodes JSON and maps failures onto
//! [`ApiError`]. A 401 ends the session, which sends the app back to the
//! login page.

use crate::shared::api_utils::api_base;
use crate::system::auth::context::{use_auth, AuthContext};
use contracts::shared::api_error::ApiError;
use contracts::shared::envelope::{ItemEnvelope, ItemKey, ListEnvelope, ListPage};
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    auth: AuthContext,
}

impl ApiClient {
    pub fn new(auth: AuthContext) -> Self {
        Self {
            base_url: api_base(),
            auth,
        }
    }

    fn builder(&self, verb: Verb, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        };
        match self.auth.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn send(
        &self,
        verb: Verb,
        path: &str,
        body: Option<String>,
    ) -> Result<Response, ApiError> {
        log::debug!("{} {}", verb.as_str(), path);

        let builder = self.builder(verb, path);
        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(json),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = request.send().await.map_err(|e| {
            log::error!("{} {} failed: {}", verb.as_str(), path, e);
            ApiError::Network(e.to_string())
        })?;

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        if status == 401 {
            log::warn!("{} {} rejected the session", verb.as_str(), path);
            self.auth.sign_out();
            return Err(ApiError::Unauthorized);
        }

        let text = response.text().await.unwrap_or_default();
        let err = ApiError::from_response(status, &text);
        log::warn!("{} {} -> {}: {}", verb.as_str(), path, status, err);
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| {
            log::error!("decode failed for {}: {}", response.url(), e);
            ApiError::Decode(e.to_string())
        })
    }

    fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
        serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Verb::Get, path, None).await?;
        Self::decode(response).await
    }

    /// GET a list in any of the shapes the backend uses, as one page.
    pub async fn get_page<T: DeserializeOwned>(&self, path: &str) -> Result<ListPage<T>, ApiError> {
        Ok(self.get::<ListEnvelope<T>>(path).await?.into_page())
    }

    /// GET a list and drop the pagination data.
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        Ok(self.get::<ListEnvelope<T>>(path).await?.into_vec())
    }

    /// GET every page of a paginated list. `path_for` builds the path of
    /// page `n`; walking stops once the reported total is collected or the
    /// server runs out of pages.
    pub async fn get_all_pages<T: DeserializeOwned>(
        &self,
        mut path_for: impl FnMut(usize) -> String,
    ) -> Result<Vec<T>, ApiError> {
        let mut items: Vec<T> = Vec::new();
        let mut page_no = 1;
        loop {
            let path = path_for(page_no);
            let page = self.get_page::<T>(&path).await?;
            let collected = items.len() + page.items.len();
            let next = page.next_page(collected);
            if next.is_none() && page.is_truncated(collected) {
                log::warn!("{} stopped at {} of {} items", path, collected, page.total);
            }
            items.extend(page.items);
            match next {
                Some(n) => page_no = n,
                None => return Ok(items),
            }
        }
    }

    /// GET a single resource, bare or wrapped under `data` or `T::KEY`.
    pub async fn get_item<T: DeserializeOwned + ItemKey>(&self, path: &str) -> Result<T, ApiError> {
        Ok(self.get::<ItemEnvelope<T>>(path).await?.into_inner())
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(Verb::Post, path, Some(Self::encode(body)?)).await?;
        Self::decode(response).await
    }

    /// POST returning a single resource, bare or wrapped.
    pub async fn post_item<B: Serialize, T: DeserializeOwned + ItemKey>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        Ok(self.post::<B, ItemEnvelope<T>>(path, body).await?.into_inner())
    }

    /// POST whose response body is not needed.
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(Verb::Post, path, Some(Self::encode(body)?)).await?;
        Ok(())
    }

    pub async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.send(Verb::Put, path, Some(Self::encode(body)?)).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Verb::Delete, path, None).await?;
        Ok(())
    }

    /// Raw response body, for PDF downloads.
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.send(Verb::Get, path, None).await?;
        response
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

pub fn provide_api_client() {
    provide_context(ApiClient::new(use_auth()));
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not provided")
}
