//! In-memory implementation of the link repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Map-backed repository guarded by a single reader/writer lock.
///
/// Mutations take the exclusive lock, lookups the shared lock, which makes
/// single-token operations linearizable and rules out lost updates. The
/// guard is released on every exit path, including a caller dropping the
/// future mid-await.
pub struct MemoryLinkRepository {
    links: RwLock<HashMap<String, ShortLink>>,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, link: &ShortLink) -> Result<(), AppError> {
        let mut links = self.links.write().await;

        if links.contains_key(&link.token) {
            return Err(AppError::already_exists(
                "url/token-exists",
                format!("Token ({}) already exists.", link.token),
            ));
        }

        links.insert(link.token.clone(), link.clone());
        Ok(())
    }

    async fn find_by_token(&self, token: &str) -> Result<ShortLink, AppError> {
        self.links.read().await.get(token).cloned().ok_or_else(|| {
            AppError::not_found("url/not-found", format!("No URL stored for token ({token})."))
        })
    }

    async fn update(&self, link: &ShortLink) -> Result<(), AppError> {
        let mut links = self.links.write().await;

        match links.get_mut(&link.token) {
            Some(stored) => {
                *stored = link.clone();
                Ok(())
            }
            None => Err(AppError::not_found(
                "url/not-found",
                format!("No URL stored for token ({}).", link.token),
            )),
        }
    }

    async fn list_all(&self) -> Result<Vec<ShortLink>, AppError> {
        Ok(self.links.read().await.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::token_generator::{RandomTokenGenerator, TokenGenerator};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_create_then_find_roundtrip() {
        let repo = MemoryLinkRepository::new();
        let link = ShortLink::new("abc123", "https://example.com");

        repo.create(&link).await.unwrap();

        let found = repo.find_by_token("abc123").await.unwrap();
        assert_eq!(found, link);
    }

    #[tokio::test]
    async fn test_create_duplicate_token_conflicts() {
        let repo = MemoryLinkRepository::new();
        let first = ShortLink::new("abc123", "https://example.com");
        let second = ShortLink::new("abc123", "https://other.example.com");

        repo.create(&first).await.unwrap();
        let err = repo.create(&second).await.unwrap_err();

        assert!(err.is_already_exists());

        // The original record must be untouched.
        let found = repo.find_by_token("abc123").await.unwrap();
        assert_eq!(found.target_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_find_missing_token_is_not_found() {
        let repo = MemoryLinkRepository::new();

        let err = repo.find_by_token("qwerty").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("qwerty"));
    }

    #[tokio::test]
    async fn test_update_persists_visit_count() {
        let repo = MemoryLinkRepository::new();
        let mut link = ShortLink::new("abc123", "https://example.com");
        repo.create(&link).await.unwrap();

        link.visits = 7;
        repo.update(&link).await.unwrap();

        let found = repo.find_by_token("abc123").await.unwrap();
        assert_eq!(found.visits, 7);
    }

    #[tokio::test]
    async fn test_update_missing_token_is_not_found() {
        let repo = MemoryLinkRepository::new();
        let link = ShortLink::new("abc123", "https://example.com");

        let err = repo.update(&link).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_all_returns_every_record() {
        let repo = MemoryLinkRepository::new();
        for token in ["one111", "two222", "three3"] {
            repo.create(&ShortLink::new(token, "https://example.com"))
                .await
                .unwrap();
        }

        let mut tokens: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.token)
            .collect();
        tokens.sort();

        assert_eq!(tokens, ["one111", "three3", "two222"]);
    }

    #[tokio::test]
    async fn test_concurrent_creates_with_colliding_token_accept_exactly_one() {
        let repo = Arc::new(MemoryLinkRepository::new());

        let mut handles = Vec::new();
        for i in 0..16 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let link = ShortLink::new("samekey", format!("https://example.com/{i}"));
                repo.create(&link).await
            }));
        }

        let mut accepted = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(()) => accepted += 1,
                Err(e) if e.is_already_exists() => conflicts += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!(accepted, 1);
        assert_eq!(conflicts, 15);
    }

    #[tokio::test]
    async fn test_hundred_thousand_generated_tokens_accepted_without_collision() {
        let repo = MemoryLinkRepository::new();
        let generator = RandomTokenGenerator;

        for _ in 0..100_000 {
            let link = ShortLink::new(generator.generate(6), "https://example.com");
            repo.create(&link)
                .await
                .expect("freshly generated token collided");
        }

        assert_eq!(repo.list_all().await.unwrap().len(), 100_000);
    }
}
