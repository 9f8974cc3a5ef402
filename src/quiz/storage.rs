//! Append-only log of quiz attempts, stored in attempts.json

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

use super::models::QuizAttempt;

#[derive(Error, Debug)]
pub enum AttemptLogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AttemptLogError>;

/// Storage for the quiz attempt history
pub struct AttemptLog {
    base_path: PathBuf,
}

impl AttemptLog {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn log_path(&self) -> PathBuf {
        self.base_path.join("attempts.json")
    }

    /// List all recorded attempts, oldest first
    pub fn list(&self) -> Result<Vec<QuizAttempt>> {
        let log_path = self.log_path();
        if !log_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&log_path)?;
        let attempts: Vec<QuizAttempt> = serde_json::from_str(&content)?;
        Ok(attempts)
    }

    /// Append one attempt. Recorded attempts are never mutated.
    pub fn append(&self, attempt: &QuizAttempt) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;

        let mut attempts = self.list()?;
        attempts.push(attempt.clone());
        fs::write(self.log_path(), serde_json::to_string_pretty(&attempts)?)?;
        Ok(())
    }

    /// Attempts recorded on a given date
    pub fn attempts_on(&self, date: NaiveDate) -> Result<Vec<QuizAttempt>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|a| a.attempted_at.date_naive() == date)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_append_and_list_preserve_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = AttemptLog::new(dir.path().to_path_buf());

        let first = QuizAttempt::new(Uuid::new_v4(), "paris".to_string(), true, 1);
        let second = QuizAttempt::new(Uuid::new_v4(), "london".to_string(), false, 2);
        log.append(&first).unwrap();
        log.append(&second).unwrap();

        let attempts = log.list().unwrap();
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].id, first.id);
        assert_eq!(attempts[1].id, second.id);
        assert!(attempts[0].correct);
        assert!(!attempts[1].correct);
    }

    #[test]
    fn test_attempts_on_filters_by_date() {
        let dir = tempfile::tempdir().unwrap();
        let log = AttemptLog::new(dir.path().to_path_buf());

        log.append(&QuizAttempt::new(Uuid::new_v4(), "paris".to_string(), true, 1))
            .unwrap();

        let today = Utc::now().date_naive();
        assert_eq!(log.attempts_on(today).unwrap().len(), 1);
        assert!(log
            .attempts_on(today - chrono::Duration::days(1))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_empty_log_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let log = AttemptLog::new(dir.path().to_path_buf());
        assert!(log.list().unwrap().is_empty());
    }
}
