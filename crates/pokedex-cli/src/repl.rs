//! Read-eval-print loop

use crate::commands::{Command, Session};
use crate::error::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

pub const PROMPT: &str = "pokedex > ";

/// Longest accepted command word
pub const MAX_COMMAND_LENGTH: usize = 50;

/// Lowercase `text` and split it into words
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Run commands from `input` until it is exhausted.
///
/// Command failures are reported on `out` and the loop carries on. Bytes that
/// are not valid UTF-8 are replaced rather than rejected. The session's
/// response cache is closed before returning, whether or not the loop failed.
pub async fn run<R>(session: &mut Session, mut input: R, out: &mut dyn Write) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let result = read_eval_loop(session, &mut input, out).await;
    session.api.cache().close().await;
    result
}

async fn read_eval_loop<R>(session: &mut Session, input: &mut R, out: &mut dyn Write) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let words = clean_input(&String::from_utf8_lossy(&buf));
        let Some((name, args)) = words.split_first() else {
            continue;
        };
        if name.chars().count() > MAX_COMMAND_LENGTH {
            writeln!(out, "Command too long")?;
            continue;
        }
        let Some(command) = Command::from_name(name) else {
            writeln!(out, "Unknown command")?;
            continue;
        };

        if let Err(e) = session.execute(command, args, out).await {
            debug!(command = %name, error = %e, "Command failed");
            writeln!(out, "Error executing command '{}': {}", name, e)?;
        }
    }
}
