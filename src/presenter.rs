//! Console output: progress on stderr, resolved names on stdout

use crate::model::ResolvedUser;
use crate::resolver::ProgressReporter;
use std::io::{self, Write};

/// Progress indicator redrawn in place on stderr
#[derive(Debug, Default)]
pub struct StderrProgress;

impl ProgressReporter for StderrProgress {
    fn on_resolved(&self, completed: usize, total: usize) {
        let mut stderr = io::stderr().lock();
        let _ = write!(stderr, "\rFetching user info [{completed}/{total}]");
        if completed >= total {
            let _ = writeln!(stderr);
        }
        let _ = stderr.flush();
    }
}

/// Print the summary to stderr and one label per line to `out`
///
/// # Arguments
///
/// * `out` - Destination for the label list (stdout in the binary)
/// * `emoji_name` - Emoji the list was resolved for
/// * `users` - Resolved users in display order
pub fn print_users<W: Write>(
    out: &mut W,
    emoji_name: &str,
    users: &[ResolvedUser],
) -> io::Result<()> {
    if users.is_empty() {
        eprintln!("No users found who reacted with :{emoji_name}:");
        return Ok(());
    }

    eprintln!("Users who reacted with :{emoji_name}: ({}):", users.len());
    for user in users {
        writeln!(out, "{}", user.label)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, label: &str) -> ResolvedUser {
        ResolvedUser {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_print_users_one_per_line() {
        let mut out = Vec::new();
        print_users(
            &mut out,
            "thumbsup",
            &[user("U1", "Alice"), user("U2", "Bob Smith")],
        )
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Alice\nBob Smith\n");
    }

    #[test]
    fn test_print_users_empty_writes_nothing() {
        let mut out = Vec::new();
        print_users(&mut out, "thumbsup", &[]).unwrap();
        assert!(out.is_empty());
    }
}
