use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// JsonBookRepository keeps the whole catalog in memory and rewrites the library file
// after every change. The mutex is held across mutate-and-persist so writers in this
// process never interleave.
#[derive(Debug)]
pub struct JsonBookRepository {
    path: PathBuf,
    books: Mutex<Vec<BookEntity>>,
}

impl JsonBookRepository {
    pub async fn open(path: &Path) -> Self {
        let books = load_books(path).await;
        info!("loaded {} books from {}", books.len(), path.display());
        Self {
            path: path.to_path_buf(),
            books: Mutex::new(books),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for JsonBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.lock().await;
        books.push(entity.clone());
        if let Err(err) = write_books(self.path.as_path(), &books).await {
            books.pop();
            return Err(err);
        }
        debug!("stored {} in {}", entity, self.path.display());
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        self.find_by_isbn(id).await?
            .ok_or_else(|| LibraryError::not_found(format!("Book with ISBN {} not found", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        self.remove(id).await.map(|removed| if removed { 1 } else { 0 })
    }

    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.lock().await.clone())
    }

    async fn count(&self) -> LibraryResult<usize> {
        Ok(self.books.lock().await.len())
    }
}

#[async_trait]
impl BookRepository for JsonBookRepository {
    async fn find_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookEntity>> {
        let books = self.books.lock().await;
        Ok(books.iter().find(|b| b.isbn == isbn).cloned())
    }

    async fn remove(&self, isbn: &str) -> LibraryResult<bool> {
        let mut books = self.books.lock().await;
        let pos = match books.iter().position(|b| b.isbn == isbn) {
            Some(pos) => pos,
            None => return Ok(false),
        };
        let removed = books.remove(pos);
        if let Err(err) = write_books(self.path.as_path(), &books).await {
            books.insert(pos, removed);
            return Err(err);
        }
        debug!("removed {} from {}", removed, self.path.display());
        Ok(true)
    }

    async fn persist(&self) -> LibraryResult<()> {
        let books = self.books.lock().await;
        write_books(self.path.as_path(), &books).await
    }

    async fn reload(&self) -> LibraryResult<usize> {
        let loaded = load_books(self.path.as_path()).await;
        let mut books = self.books.lock().await;
        *books = loaded;
        Ok(books.len())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

// Reads the library file. A missing or unparsable file is an empty catalog, never an error.
pub(crate) async fn load_books(path: &Path) -> Vec<BookEntity> {
    match tokio::fs::read_to_string(path).await {
        Ok(data) => {
            match serde_json::from_str::<Vec<BookEntity>>(data.as_str()) {
                Ok(books) => books,
                Err(err) => {
                    warn!("library file {} is not a list of books, starting empty: {}", path.display(), err);
                    vec![]
                }
            }
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!("library file {} does not exist yet, starting empty", path.display());
            vec![]
        }
        Err(err) => {
            warn!("failed to read library file {}, starting empty: {}", path.display(), err);
            vec![]
        }
    }
}

// Serializes all books and swaps them into place through a sibling staging file.
pub(crate) async fn write_books(path: &Path, books: &[BookEntity]) -> LibraryResult<()> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    books.serialize(&mut ser)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    let staging = staging_path(path);
    tokio::fs::write(&staging, &buf).await?;
    if let Err(err) = tokio::fs::rename(&staging, path).await {
        if let Err(cleanup) = tokio::fs::remove_file(&staging).await {
            warn!("failed to remove staging file {}: {}", staging.display(), cleanup);
        }
        return Err(LibraryError::from(err));
    }
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
