use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::types::Mutation;

pub const EXPORT_MIME_TYPE: &str = "text/plain;charset=utf-8";

/// A plain-text report ready to be saved by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportPayload {
    pub filename: String,
    pub content: String,
    pub mime_type: String,
}

pub struct ReportExporter;

impl ReportExporter {
    /// Export stamped with today's local date
    pub fn export(mutations: &[Mutation]) -> ExportPayload {
        Self::export_dated(mutations, Local::now().date_naive())
    }

    /// Export with an explicit date stamp
    pub fn export_dated(mutations: &[Mutation], date: NaiveDate) -> ExportPayload {
        let content = mutations
            .iter()
            .map(Mutation::to_string)
            .collect::<Vec<_>>()
            .join("\n");

        ExportPayload {
            filename: Self::filename_for(date),
            content,
            mime_type: EXPORT_MIME_TYPE.to_string(),
        }
    }

    pub fn filename_for(date: NaiveDate) -> String {
        format!("dna_mutations_{}.txt", date.format("%Y-%m-%d"))
    }
}
