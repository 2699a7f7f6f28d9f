//! In-memory repository implementations backed by a shared store
//!
//! These implement the same trait contracts as the PostgreSQL
//! repositories, including the duplicate-insert conflict and the
//! missing-join not-found path, so service behavior can be exercised
//! without a live database. A failure switch makes every like lookup
//! fail, for testing error propagation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use story_core::entities::{AuthorSummary, BookSummary, ChapterSummary, LikedBook, LikedChapter};
use story_core::error::DomainError;
use story_core::traits::{
    BookLikeRepository, BookRepository, ChapterLikeRepository, ChapterRepository, RepoResult,
    UserRepository,
};
use story_core::value_objects::EntityId;

/// Shared in-memory store backing the test repositories
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<EntityId>>,
    books: Mutex<HashMap<EntityId, BookSummary>>,
    chapters: Mutex<HashMap<EntityId, ChapterSummary>>,
    book_likes: Mutex<HashMap<(EntityId, EntityId), DateTime<Utc>>>,
    chapter_likes: Mutex<HashMap<(EntityId, EntityId), DateTime<Utc>>>,
    fail_likes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_user(&self, id: i64) {
        self.users.lock().unwrap().push(EntityId::new(id));
    }

    pub fn add_book(&self, id: i64, title: &str, author: &str) {
        self.books.lock().unwrap().insert(
            EntityId::new(id),
            BookSummary {
                id: EntityId::new(id),
                title: title.to_string(),
                cover_image: None,
                description: None,
                genres: vec!["fiction".to_string()],
                author: AuthorSummary {
                    username: author.to_string(),
                    profile_picture: None,
                },
            },
        );
    }

    pub fn add_chapter(&self, id: i64, title: &str, book_id: i64) {
        let book = self
            .books
            .lock()
            .unwrap()
            .get(&EntityId::new(book_id))
            .cloned()
            .expect("book must be seeded before its chapters");

        self.chapters.lock().unwrap().insert(
            EntityId::new(id),
            ChapterSummary {
                id: EntityId::new(id),
                title: title.to_string(),
                book,
            },
        );
    }

    /// Make every like repository call fail with a database error
    pub fn set_fail_likes(&self, fail: bool) {
        self.fail_likes.store(fail, Ordering::SeqCst);
    }

    fn check_failure(&self) -> RepoResult<()> {
        if self.fail_likes.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError(
                "simulated connection failure".to_string(),
            ));
        }
        Ok(())
    }
}

/// In-memory UserRepository
pub struct MemoryUserRepository {
    store: Arc<MemoryStore>,
}

impl MemoryUserRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn exists(&self, id: EntityId) -> RepoResult<bool> {
        Ok(self.store.users.lock().unwrap().contains(&id))
    }
}

/// In-memory BookRepository
pub struct MemoryBookRepository {
    store: Arc<MemoryStore>,
}

impl MemoryBookRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn exists(&self, id: EntityId) -> RepoResult<bool> {
        Ok(self.store.books.lock().unwrap().contains_key(&id))
    }
}

/// In-memory ChapterRepository
pub struct MemoryChapterRepository {
    store: Arc<MemoryStore>,
}

impl MemoryChapterRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ChapterRepository for MemoryChapterRepository {
    async fn exists(&self, id: EntityId) -> RepoResult<bool> {
        Ok(self.store.chapters.lock().unwrap().contains_key(&id))
    }
}

/// In-memory BookLikeRepository
pub struct MemoryBookLikeRepository {
    store: Arc<MemoryStore>,
}

impl MemoryBookLikeRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BookLikeRepository for MemoryBookLikeRepository {
    async fn is_liked(&self, user_id: EntityId, book_id: EntityId) -> RepoResult<bool> {
        self.store.check_failure()?;
        Ok(self
            .store
            .book_likes
            .lock()
            .unwrap()
            .contains_key(&(user_id, book_id)))
    }

    async fn insert(&self, user_id: EntityId, book_id: EntityId) -> RepoResult<LikedBook> {
        self.store.check_failure()?;

        let mut likes = self.store.book_likes.lock().unwrap();
        if likes.contains_key(&(user_id, book_id)) {
            return Err(DomainError::LikeAlreadyExists);
        }

        let book = self
            .store
            .books
            .lock()
            .unwrap()
            .get(&book_id)
            .cloned()
            .ok_or(DomainError::BookNotFound(book_id))?;

        let created_at = Utc::now();
        likes.insert((user_id, book_id), created_at);

        Ok(LikedBook {
            user_id,
            book_id,
            created_at,
            book,
        })
    }

    async fn delete(&self, user_id: EntityId, book_id: EntityId) -> RepoResult<bool> {
        self.store.check_failure()?;
        Ok(self
            .store
            .book_likes
            .lock()
            .unwrap()
            .remove(&(user_id, book_id))
            .is_some())
    }

    async fn count(&self, book_id: EntityId) -> RepoResult<i64> {
        self.store.check_failure()?;
        let count = self
            .store
            .book_likes
            .lock()
            .unwrap()
            .keys()
            .filter(|(_, b)| *b == book_id)
            .count();
        Ok(count as i64)
    }

    async fn find_by_user(&self, user_id: EntityId) -> RepoResult<Vec<LikedBook>> {
        self.store.check_failure()?;

        let likes = self.store.book_likes.lock().unwrap();
        let books = self.store.books.lock().unwrap();

        let mut found: Vec<LikedBook> = likes
            .iter()
            .filter(|((u, _), _)| *u == user_id)
            .filter_map(|((u, b), created_at)| {
                books.get(b).map(|book| LikedBook {
                    user_id: *u,
                    book_id: *b,
                    created_at: *created_at,
                    book: book.clone(),
                })
            })
            .collect();

        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }
}

/// In-memory ChapterLikeRepository
pub struct MemoryChapterLikeRepository {
    store: Arc<MemoryStore>,
}

impl MemoryChapterLikeRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ChapterLikeRepository for MemoryChapterLikeRepository {
    async fn is_liked(&self, user_id: EntityId, chapter_id: EntityId) -> RepoResult<bool> {
        self.store.check_failure()?;
        Ok(self
            .store
            .chapter_likes
            .lock()
            .unwrap()
            .contains_key(&(user_id, chapter_id)))
    }

    async fn insert(&self, user_id: EntityId, chapter_id: EntityId) -> RepoResult<LikedChapter> {
        self.store.check_failure()?;

        let mut likes = self.store.chapter_likes.lock().unwrap();
        if likes.contains_key(&(user_id, chapter_id)) {
            return Err(DomainError::LikeAlreadyExists);
        }

        let chapter = self
            .store
            .chapters
            .lock()
            .unwrap()
            .get(&chapter_id)
            .cloned()
            .ok_or(DomainError::ChapterNotFound(chapter_id))?;

        let created_at = Utc::now();
        likes.insert((user_id, chapter_id), created_at);

        Ok(LikedChapter {
            user_id,
            chapter_id,
            created_at,
            chapter,
        })
    }

    async fn delete(&self, user_id: EntityId, chapter_id: EntityId) -> RepoResult<bool> {
        self.store.check_failure()?;
        Ok(self
            .store
            .chapter_likes
            .lock()
            .unwrap()
            .remove(&(user_id, chapter_id))
            .is_some())
    }

    async fn count(&self, chapter_id: EntityId) -> RepoResult<i64> {
        self.store.check_failure()?;
        let count = self
            .store
            .chapter_likes
            .lock()
            .unwrap()
            .keys()
            .filter(|(_, c)| *c == chapter_id)
            .count();
        Ok(count as i64)
    }

    async fn find_by_user(&self, user_id: EntityId) -> RepoResult<Vec<LikedChapter>> {
        self.store.check_failure()?;

        let likes = self.store.chapter_likes.lock().unwrap();
        let chapters = self.store.chapters.lock().unwrap();

        let mut found: Vec<LikedChapter> = likes
            .iter()
            .filter(|((u, _), _)| *u == user_id)
            .filter_map(|((u, c), created_at)| {
                chapters.get(c).map(|chapter| LikedChapter {
                    user_id: *u,
                    chapter_id: *c,
                    created_at: *created_at,
                    chapter: chapter.clone(),
                })
            })
            .collect();

        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }
}
