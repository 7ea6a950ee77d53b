use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::badge::{Badge, Tone};

// ---------------------------------------------------------------------------
// DocumentCategory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentCategory {
    Contract,
    Invoice,
    Report,
    Compliance,
    Tax,
}

impl DocumentCategory {
    pub const ALL: [DocumentCategory; 5] = [
        DocumentCategory::Contract,
        DocumentCategory::Invoice,
        DocumentCategory::Report,
        DocumentCategory::Compliance,
        DocumentCategory::Tax,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DocumentCategory::Contract => "Contract",
            DocumentCategory::Invoice => "Invoice",
            DocumentCategory::Report => "Report",
            DocumentCategory::Compliance => "Compliance",
            DocumentCategory::Tax => "Tax",
        }
    }
}

// ---------------------------------------------------------------------------
// DocumentStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentStatus {
    Signed,
    PendingSignature,
    Expired,
    Draft,
}

impl DocumentStatus {
    pub const ALL: [DocumentStatus; 4] = [
        DocumentStatus::Signed,
        DocumentStatus::PendingSignature,
        DocumentStatus::Expired,
        DocumentStatus::Draft,
    ];
}

impl Badge for DocumentStatus {
    fn label(&self) -> &'static str {
        match self {
            DocumentStatus::Signed => "Signed",
            DocumentStatus::PendingSignature => "Pending Signature",
            DocumentStatus::Expired => "Expired",
            DocumentStatus::Draft => "Draft",
        }
    }

    fn tone(&self) -> Tone {
        match self {
            DocumentStatus::Signed => Tone::Success,
            DocumentStatus::PendingSignature => Tone::Warning,
            DocumentStatus::Expired => Tone::Danger,
            DocumentStatus::Draft => Tone::Neutral,
        }
    }
}

// ---------------------------------------------------------------------------
// Document — A file shared between a lender and a vendor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    pub vendor_name: String,
    pub category: DocumentCategory,
    pub status: DocumentStatus,
    pub size_bytes: u64,
    pub uploaded_at: NaiveDate,
    pub expires_at: Option<NaiveDate>,
}
