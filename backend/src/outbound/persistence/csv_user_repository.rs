//! Flat-file user repository storing one CSV row per record.
//!
//! Layout: a header line `ID,Email,Nombre,Apellidos` followed by one row per
//! user in insertion order. Rows are decoded by column name, so the legacy
//! lowercase header is also accepted on read. Every write path emits the
//! canonical header.
//!
//! `replace_all` truncates and rewrites the file in place. A failure part way
//! through can leave a truncated file; there is no temporary file or rename.

use std::io::{self, SeekFrom};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::fs::{self, File, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserId};

/// Canonical column labels written to the first line of the file.
pub const CSV_HEADER: [&str; 4] = ["ID", "Email", "Nombre", "Apellidos"];

#[derive(Debug, Deserialize)]
struct StoredRow {
    #[serde(rename = "ID", alias = "id")]
    id: u64,
    #[serde(rename = "Email", alias = "email", default)]
    email: String,
    #[serde(rename = "Nombre", alias = "nombre", default)]
    nombre: String,
    #[serde(rename = "Apellidos", alias = "apellidos", default)]
    apellidos: String,
}

impl From<StoredRow> for User {
    fn from(row: StoredRow) -> Self {
        User::from_stored(UserId::new(row.id), row.email, row.nombre, row.apellidos)
    }
}

/// CSV-file-backed implementation of [`UserRepository`].
///
/// # Examples
/// ```no_run
/// use usuarios::outbound::persistence::CsvUserRepository;
///
/// let repo = CsvUserRepository::new("./usuarios.csv");
/// assert_eq!(repo.path().to_str(), Some("./usuarios.csv"));
/// ```
#[derive(Debug, Clone)]
pub struct CsvUserRepository {
    path: PathBuf,
}

impl CsvUserRepository {
    /// Create a repository over `path`; the file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(&self, err: &io::Error) -> UserPersistenceError {
        UserPersistenceError::read(format!("{}: {err}", self.path.display()))
    }

    fn write_error(&self, err: impl std::fmt::Display) -> UserPersistenceError {
        UserPersistenceError::write(format!("{}: {err}", self.path.display()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Vec<User>, UserPersistenceError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(bytes);
        reader
            .deserialize::<StoredRow>()
            .map(|row| {
                row.map(User::from).map_err(|err| {
                    let line = err.position().map_or(0, csv::Position::line);
                    UserPersistenceError::parse(format!(
                        "{} line {line}: {err}",
                        self.path.display()
                    ))
                })
            })
            .collect()
    }

    fn encode(&self, users: &[User], with_header: bool) -> Result<Vec<u8>, UserPersistenceError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        if with_header {
            writer
                .write_record(CSV_HEADER)
                .map_err(|err| self.write_error(err))?;
        }
        for user in users {
            writer
                .write_record([
                    user.id().to_string().as_str(),
                    user.email(),
                    user.nombre(),
                    user.apellidos(),
                ])
                .map_err(|err| self.write_error(err))?;
        }
        writer.into_inner().map_err(|err| self.write_error(err))
    }
}

async fn ends_with_newline(file: &mut File) -> io::Result<bool> {
    file.seek(SeekFrom::End(-1)).await?;
    Ok(file.read_u8().await? == b'\n')
}

#[async_trait]
impl UserRepository for CsvUserRepository {
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError> {
        match fs::read(&self.path).await {
            Ok(bytes) => self.decode(&bytes),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(self.read_error(&err)),
        }
    }

    async fn append(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|err| self.write_error(err))?;
        let len = file
            .metadata()
            .await
            .map_err(|err| self.write_error(err))?
            .len();

        let mut bytes = Vec::new();
        if len > 0
            && !ends_with_newline(&mut file)
                .await
                .map_err(|err| self.write_error(err))?
        {
            bytes.push(b'\n');
        }
        bytes.extend(self.encode(std::slice::from_ref(user), len == 0)?);

        file.write_all(&bytes)
            .await
            .map_err(|err| self.write_error(err))?;
        file.flush().await.map_err(|err| self.write_error(err))
    }

    async fn replace_all(&self, users: &[User]) -> Result<(), UserPersistenceError> {
        let bytes = self.encode(users, true)?;
        fs::write(&self.path, bytes)
            .await
            .map_err(|err| self.write_error(err))
    }
}
