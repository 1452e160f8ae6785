use std::io::{ErrorKind, SeekFrom};
use std::path::{Path, PathBuf};

use tokio::fs::{self, File, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};

use crate::domain::{Expense, LEDGER_HEADER};

use super::LedgerError;

/// Append-only store of expenses in a single CSV file.
///
/// The file is opened and closed within each call; nothing is cached between
/// calls and there is no locking, so concurrent appends may interleave.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Display name of the backing file, used in caller-facing messages.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Read every expense in file order.
    pub async fn read_all(&self) -> Result<Vec<Expense>, LedgerError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(LedgerError::NotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        parse_ledger(&bytes)
    }

    /// Number of expenses in the ledger. A missing file holds none.
    pub async fn count(&self) -> Result<usize, LedgerError> {
        match self.read_all().await {
            Ok(expenses) => Ok(expenses.len()),
            Err(LedgerError::NotFound(_)) => Ok(0),
            Err(e) => Err(e),
        }
    }

    /// Append one expense, writing the header first when the file is
    /// missing or empty.
    pub async fn append(&self, expense: &Expense) -> Result<(), LedgerError> {
        let len = match fs::metadata(&self.path).await {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == ErrorKind::NotFound => 0,
            Err(e) => return Err(e.into()),
        };

        let mut payload = Vec::new();
        if len > 0 && !self.ends_with_newline().await? {
            // A hand-edited file may lack its final newline
            payload.push(b'\n');
        }
        payload.extend(encode_rows(expense, len == 0)?);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&payload).await?;
        file.flush().await?;

        log::debug!(
            "Appended {} bytes to {}",
            payload.len(),
            self.path.display()
        );
        Ok(())
    }

    async fn ends_with_newline(&self) -> Result<bool, LedgerError> {
        let mut file = File::open(&self.path).await?;
        file.seek(SeekFrom::End(-1)).await?;
        Ok(file.read_u8().await? == b'\n')
    }
}

fn parse_ledger(bytes: &[u8]) -> Result<Vec<Expense>, LedgerError> {
    let mut reader = csv::Reader::from_reader(bytes);

    let headers = reader.headers()?;
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    if !headers.iter().eq(LEDGER_HEADER.iter().copied()) {
        return Err(LedgerError::UnexpectedHeader {
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    let mut expenses = Vec::new();
    for (index, result) in reader.deserialize::<Expense>().enumerate() {
        let line = index + 2; // +2 for header and 0-indexing
        let expense = result.map_err(|source| LedgerError::MalformedRow { line, source })?;
        expenses.push(expense);
    }

    Ok(expenses)
}

fn encode_rows(expense: &Expense, with_header: bool) -> Result<Vec<u8>, LedgerError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    if with_header {
        writer.write_record(LEDGER_HEADER)?;
    }
    writer.serialize(expense)?;

    writer
        .into_inner()
        .map_err(|e| LedgerError::Io(e.into_error()))
}
