//! REPL Loop
//!
//! Reads command lines until `exit` or end of input, printing results and
//! recoverable errors without ending the session.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use crate::client::Fetch;
use crate::commands::{Command, Flow, Session};
use crate::error::{PokedexError, Result};

pub const PROMPT: &str = "Pokedex > ";

/// Drives `session` from `input` until `exit` or EOF.
///
/// Only terminal I/O failures end the loop with an error; fetch, decode and
/// usage errors are reported on `out` and the prompt is shown again.
pub async fn run<F, R, W>(session: &mut Session<F>, input: R, out: &mut W) -> Result<()>
where
    F: Fetch,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "{}", err)?;
                continue;
            }
        };

        match session.execute(command, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err @ PokedexError::Io(_)) => return Err(err),
            Err(err) => {
                warn!("Command failed: {}", err);
                if err.is_not_found() {
                    writeln!(out, "Nothing by that name was found")?;
                } else {
                    writeln!(out, "Error: {}", err)?;
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}
