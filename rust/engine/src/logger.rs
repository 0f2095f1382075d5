use std::fs::{create_dir_all, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::{HandDetail, HandKind, HandResult};

/// One scored round, serialized as a single JSONL line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundLog {
    /// Session identifier (format: YYYYMMDD-NNNNNN)
    pub session_id: String,
    /// RNG seed the session deck was shuffled with
    pub seed: Option<u64>,
    /// Round number, starting at 1
    pub round: u8,
    /// Final five cards of the round
    pub cards: Vec<Card>,
    pub kind: HandKind,
    pub score: u32,
    pub detail: HandDetail,
    /// Session total after this round
    pub total: u32,
    /// Timestamp when the round was scored (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Game code, present on the final round only
    #[serde(default)]
    pub code: Option<String>,
}

impl RoundLog {
    pub fn new(session_id: &str, seed: Option<u64>, round: u8, cards: &[Card], result: &HandResult, total: u32) -> Self {
        Self {
            session_id: session_id.to_string(),
            seed,
            round,
            cards: cards.to_vec(),
            kind: result.kind,
            score: result.score,
            detail: result.detail.clone(),
            total,
            ts: None,
            code: None,
        }
    }
}

pub fn format_session_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

pub struct RoundLogger {
    writer: Option<BufWriter<std::fs::File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    /// Opens `path` for appending, creating parent directories as needed.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that only hands out ids and drops every record.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_session_id(&mut self) -> String {
        self.seq += 1;
        format_session_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundLog) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_ids_are_sequential_and_zero_padded() {
        let mut logger = RoundLogger::with_seq_for_test("20250102");
        assert_eq!(logger.next_session_id(), "20250102-000001");
        assert_eq!(logger.next_session_id(), "20250102-000002");
        assert_eq!(format_session_id("19991231", 123456), "19991231-123456");
    }
}
