use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};

/// Outcome of a front-end action, handed to whatever surface shows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Status {
    Success { message: String, report: Value },
    Failure { message: String },
}

impl Status {
    pub fn success<T: Serialize>(message: impl Into<String>, report: &T) -> Result<Self> {
        Ok(Status::Success {
            message: message.into(),
            report: serde_json::to_value(report)?,
        })
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Status::Failure {
            message: message.into(),
        }
    }
}

pub trait Notifier {
    fn notify(&self, status: &Status) -> Result<()>;
}

pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&self, status: &Status) -> Result<()> {
        match status {
            Status::Success { message, .. } => {
                println!("{message}");
                Ok(())
            }
            Status::Failure { message } => report_failure(message),
        }
    }
}

/// Prints the success report as JSON; failures still go to stderr as text.
pub struct JsonNotifier;

impl Notifier for JsonNotifier {
    fn notify(&self, status: &Status) -> Result<()> {
        match status {
            Status::Success { report, .. } => {
                let mut stdout = io::stdout().lock();
                serde_json::to_writer_pretty(&mut stdout, report)?;
                writeln!(stdout)?;
                Ok(())
            }
            Status::Failure { message } => report_failure(message),
        }
    }
}

pub fn notifier_for(json: bool) -> Box<dyn Notifier> {
    if json {
        Box::new(JsonNotifier)
    } else {
        Box::new(StdoutNotifier)
    }
}

fn report_failure(message: &str) -> Result<()> {
    let mut stderr = io::stderr().lock();
    writeln!(stderr, "error: {message}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Status;
    use serde_json::json;

    #[derive(serde::Serialize)]
    struct Report {
        rows: usize,
    }

    #[test]
    fn status_serializes_with_tag() {
        let status = Status::success("done", &Report { rows: 2 }).expect("status");
        let value = serde_json::to_value(&status).expect("json");
        assert_eq!(
            value,
            json!({"status": "success", "message": "done", "report": {"rows": 2}})
        );

        let value = serde_json::to_value(Status::failure("boom")).expect("json");
        assert_eq!(value, json!({"status": "failure", "message": "boom"}));
    }
}
