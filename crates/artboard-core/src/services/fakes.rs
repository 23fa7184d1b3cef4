//! Hand-rolled port doubles for service tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::Post;
use crate::error::RepoError;
use crate::ports::{
    GenerationError, GenerationMode, ImageGenerator, MediaUploader, PostRepository, UploadError,
};

pub struct FakeGenerator {
    mode: GenerationMode,
    image: Option<String>,
    failure: Mutex<Option<GenerationError>>,
    calls: AtomicUsize,
}

impl FakeGenerator {
    pub fn ok(mode: GenerationMode, image: &str) -> Self {
        Self {
            mode,
            image: Some(image.to_string()),
            failure: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fails with `err` on the first call.
    pub fn failing(err: GenerationError) -> Self {
        Self {
            mode: GenerationMode::Live,
            image: None,
            failure: Mutex::new(Some(err)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageGenerator for FakeGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(image) = &self.image {
            return Ok(image.clone());
        }
        Err(self
            .failure
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| GenerationError::Transport("already failed".into())))
    }

    fn mode(&self) -> GenerationMode {
        self.mode
    }
}

pub struct FakeRepo {
    connected: bool,
    failure: Option<fn() -> RepoError>,
    posts: Mutex<Vec<Post>>,
}

impl FakeRepo {
    pub fn connected() -> Self {
        Self {
            connected: true,
            failure: None,
            posts: Mutex::new(Vec::new()),
        }
    }

    pub fn disconnected() -> Self {
        Self {
            connected: false,
            ..Self::connected()
        }
    }

    /// Connected, but every query fails with `failure()`.
    pub fn failing(failure: fn() -> RepoError) -> Self {
        Self {
            failure: Some(failure),
            ..Self::connected()
        }
    }

    pub fn posts(&self) -> Vec<Post> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostRepository for FakeRepo {
    async fn is_connected(&self) -> bool {
        self.connected
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        match self.failure {
            Some(failure) => Err(failure()),
            None => Ok(self.posts()),
        }
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        if let Some(failure) = self.failure {
            return Err(failure());
        }
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }
}

pub struct FakeUploader {
    result: Result<String, fn() -> UploadError>,
    payloads: Mutex<Vec<String>>,
}

impl FakeUploader {
    pub fn ok(url: &str) -> Self {
        Self {
            result: Ok(url.to_string()),
            payloads: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(failure: fn() -> UploadError) -> Self {
        Self {
            result: Err(failure),
            payloads: Mutex::new(Vec::new()),
        }
    }

    pub fn payloads(&self) -> Vec<String> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaUploader for FakeUploader {
    async fn upload(&self, payload: &str) -> Result<String, UploadError> {
        self.payloads.lock().unwrap().push(payload.to_string());
        match &self.result {
            Ok(url) => Ok(url.clone()),
            Err(failure) => Err(failure()),
        }
    }
}
