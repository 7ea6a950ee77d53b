//! Lender document management view.

use chrono::{NaiveDate, TimeDelta};
use serde::Serialize;

use crate::models::{Document, DocumentCategory, DocumentStatus};
use crate::pipeline::{Facet, Record, SortKey, SortSpec, Summary};
use crate::view_model::CollectionView;

pub type DocumentsView = CollectionView<Document>;

// ---------------------------------------------------------------------------
// Facets and sort fields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DocumentFilterField {
    Category,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DocumentFacet {
    Category(DocumentCategory),
    Status(DocumentStatus),
}

impl Facet for DocumentFacet {
    type Field = DocumentFilterField;

    fn field(&self) -> DocumentFilterField {
        match self {
            DocumentFacet::Category(_) => DocumentFilterField::Category,
            DocumentFacet::Status(_) => DocumentFilterField::Status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentSortField {
    UploadedAt,
    Name,
    Size,
    /// Documents without an expiry date sort lowest.
    ExpiresAt,
}

// ---------------------------------------------------------------------------
// DocumentSummary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub total_documents: usize,
    pub pending_signature_count: usize,
    pub expired_count: usize,
    pub total_size_bytes: u64,
}

impl Summary for DocumentSummary {}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

impl Record for Document {
    type Id = String;
    type Facet = DocumentFacet;
    type SortField = DocumentSortField;
    type Summary = DocumentSummary;

    const DOMAIN: &'static str = "documents";

    fn id(&self) -> &String {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.vendor_name.as_str()]
    }

    fn facet(&self, field: DocumentFilterField) -> DocumentFacet {
        match field {
            DocumentFilterField::Category => DocumentFacet::Category(self.category),
            DocumentFilterField::Status => DocumentFacet::Status(self.status),
        }
    }

    fn sort_key(&self, field: DocumentSortField) -> SortKey {
        match field {
            DocumentSortField::UploadedAt => self.uploaded_at.into(),
            DocumentSortField::Name => SortKey::text(&self.name),
            DocumentSortField::Size => self.size_bytes.into(),
            DocumentSortField::ExpiresAt => self.expires_at.into(),
        }
    }

    fn default_sort() -> SortSpec<DocumentSortField> {
        SortSpec::descending(DocumentSortField::UploadedAt)
    }

    fn summarize(items: &[Document]) -> DocumentSummary {
        items.iter().fold(DocumentSummary::default(), |mut acc, doc| {
            acc.total_documents += 1;
            acc.total_size_bytes += doc.size_bytes;
            match doc.status {
                DocumentStatus::PendingSignature => acc.pending_signature_count += 1,
                DocumentStatus::Expired => acc.expired_count += 1,
                DocumentStatus::Signed | DocumentStatus::Draft => {}
            }
            acc
        })
    }
}

// ---------------------------------------------------------------------------
// Document helpers
// ---------------------------------------------------------------------------

impl CollectionView<Document> {
    /// Mark a pending document as signed. Other statuses are left alone.
    pub fn mark_signed(&mut self, id: &str) -> bool {
        let pending = self
            .base()
            .iter()
            .any(|d| d.id == id && d.status == DocumentStatus::PendingSignature);
        pending && self.update_item(id, |d| d.status = DocumentStatus::Signed)
    }

    /// Displayed documents whose expiry falls within `days` of `today`, inclusive,
    /// soonest first. Already-expired dates are excluded, and a window that runs
    /// past the last representable date is unbounded.
    pub fn expiring_within(&self, today: NaiveDate, days: i64) -> Vec<&Document> {
        let horizon = TimeDelta::try_days(days)
            .and_then(|window| today.checked_add_signed(window))
            .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX });
        let mut expiring: Vec<&Document> = self
            .items()
            .iter()
            .filter(|d| d.expires_at.is_some_and(|at| at >= today && at <= horizon))
            .collect();
        expiring.sort_by_key(|d| d.expires_at);
        expiring
    }
}
