//! HTTP client for the trivia REST API.

use std::time::Duration;

use serde::Serialize;

use crate::state::{ApiCall, ApiPayload, Category, CategoryList, QuestionId, QuestionPage};

type Result<T> = super::Result<T>;

/// Body of the search request.
#[derive(Serialize)]
struct SearchBody<'a> {
    /// Free-text term matched against question text by the backend.
    search_term: &'a str,
}

/// What: Build the absolute URL for `call` under `base_url`.
///
/// Inputs:
/// - `base_url`: Backend root, with or without a trailing slash.
/// - `call`: Endpoint to address.
///
/// Output:
/// - Absolute URL including the `page` query parameter for listing calls.
#[must_use]
pub fn endpoint_url(base_url: &str, call: &ApiCall) -> String {
    let base = base_url.trim_end_matches('/');
    match call {
        ApiCall::ListQuestions { page } | ApiCall::Search { page, .. } => {
            format!("{base}/questions?page={page}")
        }
        ApiCall::CategoryQuestions { category, page } => {
            format!("{base}/categories/{category}/questions?page={page}")
        }
        ApiCall::Delete { id } => format!("{base}/questions/{id}"),
        ApiCall::Categories => format!("{base}/categories"),
    }
}

/// Thin async client over the question, category and search endpoints.
#[derive(Clone, Debug)]
pub struct TriviaClient {
    /// Pooled HTTP client.
    http: reqwest::Client,
    /// Backend root without trailing slash.
    base_url: String,
}

impl TriviaClient {
    /// What: Create a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    /// - Returns `Err` when the underlying HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .user_agent(format!("trivia-browser/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {e}"))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Backend root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// What: Perform `call` and decode its payload.
    ///
    /// # Errors
    /// - Returns `Err` on connection failure, timeout, non-2xx status, or an undecodable body.
    pub async fn execute(&self, call: &ApiCall) -> Result<ApiPayload> {
        match call {
            ApiCall::ListQuestions { page } => self.list_questions(*page).await.map(ApiPayload::Page),
            ApiCall::CategoryQuestions { category, page } => self
                .category_questions(*category, *page)
                .await
                .map(ApiPayload::Page),
            ApiCall::Search { term, page } => self.search(term, *page).await.map(ApiPayload::Page),
            ApiCall::Delete { id } => self.delete(*id).await.map(|()| ApiPayload::Deleted(*id)),
            ApiCall::Categories => self.categories().await.map(ApiPayload::Categories),
        }
    }

    /// `GET /questions?page=N`
    ///
    /// # Errors
    /// - Returns `Err` on network, status, or decode failure.
    pub async fn list_questions(&self, page: u32) -> Result<QuestionPage> {
        let url = endpoint_url(&self.base_url, &ApiCall::ListQuestions { page });
        let resp = self.http.get(&url).send().await?.error_for_status()?;
        Ok(resp.json::<QuestionPage>().await?)
    }

    /// `GET /categories/{id}/questions?page=N`
    ///
    /// # Errors
    /// - Returns `Err` on network, status, or decode failure.
    pub async fn category_questions(&self, category: u64, page: u32) -> Result<QuestionPage> {
        let url = endpoint_url(
            &self.base_url,
            &ApiCall::CategoryQuestions { category, page },
        );
        let resp = self.http.get(&url).send().await?.error_for_status()?;
        Ok(resp.json::<QuestionPage>().await?)
    }

    /// `POST /questions?page=N` with `{ "search_term": term }`
    ///
    /// # Errors
    /// - Returns `Err` on network, status, or decode failure.
    pub async fn search(&self, term: &str, page: u32) -> Result<QuestionPage> {
        let url = endpoint_url(
            &self.base_url,
            &ApiCall::Search {
                term: term.to_string(),
                page,
            },
        );
        let resp = self
            .http
            .post(&url)
            .json(&SearchBody { search_term: term })
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json::<QuestionPage>().await?)
    }

    /// `DELETE /questions/{id}`; the response body is not inspected.
    ///
    /// # Errors
    /// - Returns `Err` on network failure or a non-2xx status.
    pub async fn delete(&self, id: QuestionId) -> Result<()> {
        let url = endpoint_url(&self.base_url, &ApiCall::Delete { id });
        self.http.delete(&url).send().await?.error_for_status()?;
        Ok(())
    }

    /// `GET /categories`
    ///
    /// # Errors
    /// - Returns `Err` on network, status, or decode failure.
    pub async fn categories(&self) -> Result<Vec<Category>> {
        let url = endpoint_url(&self.base_url, &ApiCall::Categories);
        let resp = self.http.get(&url).send().await?.error_for_status()?;
        Ok(resp.json::<CategoryList>().await?.categories)
    }
}
