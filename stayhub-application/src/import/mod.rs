//! The offline bulk-import pipeline: file → lines → decoded records →
//! resolved hosts → persisted offers, with per-record failure
//! accounting.

pub mod generate;
pub mod reader;
pub mod record;
pub mod token;

use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use thiserror::Error;

use stayhub_core::{
    entities::Id,
    repositories::{Error as RepoError, OfferRepo, UserRepo},
};

use crate::usecases;

pub use self::generate::generate_tsv;
pub use self::record::{decode_record, encode_record, DecodedOffer, Field, HostValue, RecordError};

/// Conditions that abort a whole import run. Everything else is a
/// per-record failure recorded in the summary.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Cannot read source file {path}: {source}")]
    SourceUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("The store became unreachable: {0}")]
    Store(RepoError),
    #[error("The import run was cancelled")]
    Cancelled,
}

#[derive(Debug)]
pub struct RecordFailure {
    /// 1-based line number in the source file.
    pub line: usize,
    pub reason: RecordError,
}

/// Final report of an import run. Transient; not persisted anywhere.
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub total_lines: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub failures: Vec<RecordFailure>,
}

/// Cooperative cancellation token, checked between records.
#[derive(Debug, Default, Clone)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

pub fn run_import<R>(repo: &R, path: &Path, salt: &str) -> Result<ImportSummary, ImportError>
where
    R: UserRepo + OfferRepo,
{
    run_import_with(repo, path, salt, &CancelFlag::new())
}

/// Drives the import over every record of the source file.
///
/// Records are processed strictly in file order, one at a time, so
/// failure line numbers are deterministic and the first record carrying
/// a new host email creates the user while later ones find it. There is
/// no cross-file rollback: records written before a later failure stay
/// persisted. A recorded per-record failure persists nothing, since all
/// decoding and validation precede the first write; only a store outage
/// mid-record, which aborts the run, can leave a resolved host behind
/// without its offer.
pub fn run_import_with<R>(
    repo: &R,
    path: &Path,
    salt: &str,
    cancel: &CancelFlag,
) -> Result<ImportSummary, ImportError>
where
    R: UserRepo + OfferRepo,
{
    info!("Importing offers from {}", path.display());
    let mut summary = ImportSummary::default();
    for (line_number, line) in reader::read_lines(path)? {
        if cancel.is_cancelled() {
            info!(
                "Import cancelled after {} of {} attempted records",
                summary.succeeded, summary.total_lines
            );
            return Err(ImportError::Cancelled);
        }
        summary.total_lines += 1;
        match import_record(repo, &line, salt) {
            Ok(offer_id) => {
                summary.succeeded += 1;
                debug!("Line {line_number}: imported offer {offer_id}");
            }
            // A vanished store aborts the run; the summary would lie
            // about every remaining line otherwise.
            Err(RecordError::Invalid(usecases::Error::Repo(
                err @ (RepoError::Io(_) | RepoError::Other(_)),
            ))) => return Err(ImportError::Store(err)),
            Err(reason) => {
                warn!("Line {line_number}: record skipped: {reason}");
                summary.failed += 1;
                summary.failures.push(RecordFailure {
                    line: line_number,
                    reason,
                });
            }
        }
    }
    info!(
        "Import completed: {} records attempted, {} succeeded, {} failed",
        summary.total_lines, summary.succeeded, summary.failed
    );
    Ok(summary)
}

// Decoding and validation both complete before the first write, so a
// record that fails either step persists nothing, not even its host.
fn import_record<R>(repo: &R, line: &str, salt: &str) -> Result<Id, RecordError>
where
    R: UserRepo + OfferRepo,
{
    let decoded = decode_record(line)?;
    let new_host = decoded.host.clone().into_new_host()?;
    let storable = usecases::prepare_new_offer(decoded.into_new_offer())?;
    let host_id = usecases::resolve_host(repo, new_host, salt)?;
    let offer_id = usecases::store_new_offer(repo, storable, host_id)?;
    Ok(offer_id)
}
