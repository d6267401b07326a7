/// Password-reset mail delivery
///
/// Delivery is a log-file append: each reset request writes a timestamped
/// entry containing the composed reset link. Failures never surface to the
/// caller of the forgot-password endpoint (the response is identical
/// whether or not the email exists); the handler logs and swallows them.

use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Log-file backed mailer
#[derive(Debug, Clone)]
pub struct Mailer {
    log_file: PathBuf,
    reset_base_url: String,
}

impl Mailer {
    pub fn new(log_file: impl Into<PathBuf>, reset_base_url: impl Into<String>) -> Self {
        Self {
            log_file: log_file.into(),
            reset_base_url: reset_base_url.into(),
        }
    }

    /// Appends a password-reset entry to the log file
    ///
    /// The reset link is `reset_base_url` with the token appended.
    pub async fn send_password_reset(
        &self,
        to_email: &str,
        username: &str,
        token: &str,
    ) -> std::io::Result<()> {
        if let Some(directory) = self.log_file.parent() {
            ensure_directory(directory).await?;
        }

        let reset_url = format!("{}{}", self.reset_base_url, token);
        let entry = format!(
            "[{}] Password reset requested for {} <{}>\nReset link: {}\n\n",
            Utc::now().to_rfc3339(),
            username,
            to_email,
            reset_url,
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)
            .await?;

        file.write_all(entry.as_bytes()).await?;
        file.flush().await
    }
}

async fn ensure_directory(directory: &Path) -> std::io::Result<()> {
    if directory.as_os_str().is_empty() {
        return Ok(());
    }
    tokio::fs::create_dir_all(directory).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_password_reset_appends_entries() {
        let dir = std::env::temp_dir().join(format!("chorequest-mailer-{}", std::process::id()));
        let log_file = dir.join("password_reset.log");
        let mailer = Mailer::new(&log_file, "http://localhost:4200/reset-password?token=");

        mailer
            .send_password_reset("alice@example.com", "alice", "abc123")
            .await
            .expect("First send should succeed");
        mailer
            .send_password_reset("bob@example.com", "bob", "def456")
            .await
            .expect("Second send should succeed");

        let contents = tokio::fs::read_to_string(&log_file)
            .await
            .expect("Log file should exist");
        assert!(contents.contains("alice <alice@example.com>"));
        assert!(contents.contains("http://localhost:4200/reset-password?token=abc123"));
        assert!(contents.contains("http://localhost:4200/reset-password?token=def456"));

        tokio::fs::remove_dir_all(&dir).await.ok();
    }
}
