// src/application/session.rs
//
// Interactive prompt loop.
//
// Reads one command per line until `exit` or end of input. Errors are
// printed and the loop carries on; nothing typed can end the session
// except `exit` or EOF. Bytes that are not UTF-8 are replaced, not fatal.

use std::io::{BufRead, Write};

use log::{debug, info};

use crate::application::error_handling::ErrorResponse;
use crate::application::state::AppState;
use crate::application::commands::HELP_LINES;
use crate::error::AppResult;

pub const WELCOME_LINES: &[&str] = &["Welcome to Live Scoreboard", "------------------------"];

pub fn run_session<R, W, E>(
    state: &AppState,
    prompt: &str,
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    for line in WELCOME_LINES.iter().chain(HELP_LINES) {
        writeln!(out, "{}", line)?;
    }

    let mut buf = Vec::new();
    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            info!("End of input, closing session");
            break;
        }
        let line = String::from_utf8_lossy(&buf);

        match state.handle_line(&line) {
            Ok(outcome) if outcome.is_exit() => break,
            Ok(outcome) => {
                for rendered in outcome.render() {
                    writeln!(out, "{}", rendered)?;
                }
            }
            Err(error) => {
                debug!("Rejected command {:?}: {}", line.trim(), error);
                writeln!(err, "{}", ErrorResponse::from_app_error(error).render())?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
