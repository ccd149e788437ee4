//! Community feed endpoints: posts, likes, comments.

use reqwest::multipart::{Form, Part};

use partsmarket_core::{Comment, NewComment, NewPost, Post, PostId};

use crate::api::{self, ApiClient};
use crate::error::Result;

/// Wrapper around the backend posts resource.
#[derive(Clone)]
pub struct PostsService {
    api: ApiClient,
}

impl PostsService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch the feed.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn get_feed(&self) -> Result<Vec<Post>> {
        let response = self.api.get("/posts").send().await?;
        let response = api::into_api_result(response).await?;
        Ok(response.json().await?)
    }

    /// Publish a new post as a multipart submission.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn create_post(&self, payload: NewPost) -> Result<Post> {
        let mut form = Form::new().text("Content", payload.content);

        if let Some(image) = payload.image {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.content_type)?;
            form = form.part("ImageFile", part);
        }

        let response = self.api.post("/posts").multipart(form).send().await?;
        let response = api::into_api_result(response).await?;
        Ok(response.json().await?)
    }

    /// Like or unlike a post (the backend toggles).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn toggle_like(&self, post_id: PostId) -> Result<()> {
        let response = self
            .api
            .post(&format!("/posts/{post_id}/like"))
            .send()
            .await?;
        api::into_api_result(response).await?;
        Ok(())
    }

    /// Fetch a post's comments.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn get_comments(&self, post_id: PostId) -> Result<Vec<Comment>> {
        let response = self
            .api
            .get(&format!("/posts/{post_id}/comments"))
            .send()
            .await?;
        let response = api::into_api_result(response).await?;
        Ok(response.json().await?)
    }

    /// Post a comment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    pub async fn create_comment(&self, post_id: PostId, payload: &NewComment) -> Result<Comment> {
        let response = self
            .api
            .post(&format!("/posts/{post_id}/comments"))
            .json(payload)
            .send()
            .await?;
        let response = api::into_api_result(response).await?;
        Ok(response.json().await?)
    }

    /// Delete one of the current user's posts.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_post(&self, post_id: PostId) -> Result<()> {
        let response = self.api.delete(&format!("/posts/{post_id}")).send().await?;
        api::into_api_result(response).await?;
        Ok(())
    }
}
