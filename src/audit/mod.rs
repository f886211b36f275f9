//! Page audit module
//!
//! This module handles:
//! - Pattern-based analysis of each page's HTML
//! - On-disk checks for referenced images
//! - The issue rule table and status columns
//! - Page type and template inference
//! - Coordinating a complete audit run

mod analysis;
mod coordinator;
mod findings;
mod images;
mod page_type;
mod status;

pub use analysis::{analyze_html, PageAnalysis};
pub use coordinator::{audit_page, audit_site, run_audit, Coordinator, PageAudit};
pub use findings::{detect_findings, AuditFinding, FindingKind, IssueCategory};
pub use images::find_missing_images;
pub use page_type::{classify_page_type, detect_template, PageType};
pub use status::{MediaFlags, MediaStatus};
