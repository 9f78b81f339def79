//! REST Lists API
//!
//! reqwest-backed implementation. On wasm32 reqwest drives the browser's
//! `fetch`, so cookies are attached only when the auth scheme asks for it.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};

use super::traits::ListsApi;
use crate::auth::AuthScheme;
use crate::config::ClientConfig;
use crate::domain::{
    ApiError, ApiResult, ListNameBody, MovieDetails, MovieIdBody, MovieList, MoviePreview,
};

const ADD_MOVIE: &str = "add-movie";
const REMOVE_MOVIE: &str = "remove-movie";

/// Statuses accepted by endpoints stricter than "any 2xx"
const DELETE_OK: &[StatusCode] = &[StatusCode::NO_CONTENT];
const REMOVE_MOVIE_OK: &[StatusCode] = &[StatusCode::OK, StatusCode::NO_CONTENT];

pub struct HttpListsApi<A> {
    client: Client,
    config: ClientConfig,
    auth: A,
}

impl<A: AuthScheme> HttpListsApi<A> {
    pub fn new(config: ClientConfig, auth: A) -> Self {
        Self {
            client: Client::new(),
            config,
            auth,
        }
    }

    fn request(&self, method: Method, url: &str) -> ApiResult<RequestBuilder> {
        let headers = self.auth.headers(&method)?;
        log::debug!("{} {}", method, url);
        let builder = self.client.request(method, url).headers(headers);
        Ok(self.with_credentials(builder))
    }

    /// Requests to the catalog, which is public and sent without credentials
    fn public_get(&self, url: &str) -> RequestBuilder {
        log::debug!("GET {}", url);
        self.client.get(url)
    }

    #[cfg(target_arch = "wasm32")]
    fn with_credentials(&self, builder: RequestBuilder) -> RequestBuilder {
        if self.auth.sends_credentials() {
            builder.fetch_credentials_include()
        } else {
            builder
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn with_credentials(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
    }

    // ========================
    // Requests
    // ========================

    fn list_all_request(&self) -> ApiResult<RequestBuilder> {
        self.request(Method::GET, &self.config.lists_url())
    }

    fn get_request(&self, id: u32) -> ApiResult<RequestBuilder> {
        self.request(Method::GET, &self.config.list_url(id))
    }

    fn create_request(&self, name: &str) -> ApiResult<RequestBuilder> {
        Ok(self
            .request(Method::POST, &self.config.lists_url())?
            .json(&ListNameBody { nombre: name }))
    }

    fn rename_request(&self, id: u32, name: &str) -> ApiResult<RequestBuilder> {
        Ok(self
            .request(Method::PATCH, &self.config.list_url(id))?
            .json(&ListNameBody { nombre: name }))
    }

    fn delete_request(&self, id: u32) -> ApiResult<RequestBuilder> {
        self.request(Method::DELETE, &self.config.list_url(id))
    }

    fn movie_action_request(
        &self,
        list_id: u32,
        action: &str,
        movie_id: u32,
    ) -> ApiResult<RequestBuilder> {
        Ok(self
            .request(Method::POST, &self.config.list_action_url(list_id, action))?
            .json(&MovieIdBody { pelicula_id: movie_id }))
    }
}

/// Error for a non-2xx status, `None` on success
fn status_error(status: StatusCode, body: &str) -> Option<ApiError> {
    if status.is_success() {
        None
    } else {
        Some(ApiError::from_status(status.as_u16(), body))
    }
}

fn expect_status(status: StatusCode, accepted: &[StatusCode]) -> ApiResult<()> {
    if accepted.contains(&status) {
        Ok(())
    } else {
        Err(ApiError::UnexpectedStatus(status.as_u16()))
    }
}

/// Send and turn any non-2xx status into an `ApiError`
async fn send(builder: RequestBuilder) -> ApiResult<Response> {
    let response = builder.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    log::debug!("request failed with {}: {}", status, body);
    Err(status_error(status, &body).unwrap_or(ApiError::UnexpectedStatus(status.as_u16())))
}

#[async_trait(?Send)]
impl<A: AuthScheme> ListsApi for HttpListsApi<A> {
    async fn list_all(&self) -> ApiResult<Vec<MovieList>> {
        Ok(send(self.list_all_request()?).await?.json().await?)
    }

    async fn get(&self, id: u32) -> ApiResult<MovieList> {
        Ok(send(self.get_request(id)?).await?.json().await?)
    }

    async fn create(&self, name: &str) -> ApiResult<MovieList> {
        Ok(send(self.create_request(name)?).await?.json().await?)
    }

    async fn rename(&self, id: u32, name: &str) -> ApiResult<MovieList> {
        Ok(send(self.rename_request(id, name)?).await?.json().await?)
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        let response = send(self.delete_request(id)?).await?;
        expect_status(response.status(), DELETE_OK)
    }

    async fn add_movie(&self, list_id: u32, movie_id: u32) -> ApiResult<()> {
        let builder = self.movie_action_request(list_id, ADD_MOVIE, movie_id)?;
        send(builder).await.map(|_| ())
    }

    async fn remove_movie(&self, list_id: u32, movie_id: u32) -> ApiResult<()> {
        let builder = self.movie_action_request(list_id, REMOVE_MOVIE, movie_id)?;
        let response = send(builder).await?;
        expect_status(response.status(), REMOVE_MOVIE_OK)
    }

    async fn list_movies(&self) -> ApiResult<Vec<MoviePreview>> {
        Ok(send(self.public_get(&self.config.movies_url())).await?.json().await?)
    }

    async fn fetch_movie(&self, id: u32) -> ApiResult<MovieDetails> {
        Ok(send(self.public_get(&self.config.movie_url(id))).await?.json().await?)
    }
}
