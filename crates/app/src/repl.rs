//! Line-oriented driver: one command in, one screen (or message) out.

use std::io::{self, BufRead, Write};

use crate::command::Action;
use crate::error::AppError;
use crate::shell::{App, Outcome};

/// Run the session until `quit` or end of input.
///
/// A bad line never ends the session: undecodable bytes are replaced and
/// the resulting command is handled like any other. Only IO failures on
/// `input`/`output` are returned.
pub fn run<R: BufRead, W: Write>(app: &mut App, mut input: R, mut output: W) -> io::Result<()> {
    writeln!(output, "{}", app.render())?;
    output.flush()?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);

        match Action::parse(&line).and_then(|action| app.dispatch(action)) {
            Ok(Outcome::Exit) => break,
            Ok(outcome) => writeln!(output, "{outcome}")?,
            Err(AppError::Domain(e)) => writeln!(output, "! {}", e.user_message())?,
            Err(e) => writeln!(output, "error: {e}")?,
        }
        output.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpad_products::ProductRepository;

    fn session(input: &[u8]) -> (App, String) {
        let mut app = App::new();
        let mut out = Vec::new();
        run(&mut app, input, &mut out).unwrap();
        (app, String::from_utf8(out).unwrap())
    }

    #[test]
    fn invalid_utf8_line_does_not_end_session() {
        let (app, out) = session(b"add\ntitle \xff\xfe\nadd\nshow\n");

        assert_eq!(app.store().len(), 2);
        assert!(out.contains("[2] Novo Produto"));
        assert!(out.contains("error: `title` is not available on the Manage Products screen"));
    }

    #[test]
    fn domain_errors_print_as_alerts() {
        let (_, out) = session(b"remove 3\nopen x\n");
        assert!(out.contains("! product not found\n"));
        assert!(out.contains("! ProductId: \"x\""));
    }

    #[test]
    fn validation_alert_and_unknown_command() {
        let (app, out) = session(b"add\nopen 1\ntitle\nsave\ndance\n");
        assert!(out.contains("! product name is required\n"));
        assert!(out.contains("error: unknown command: dance (try `help`)\n"));
        assert_eq!(app.store().list()[0].title(), "Novo Produto");
    }

    #[test]
    fn quit_stops_reading() {
        let (app, out) = session(b"add\nquit\nadd\n");
        assert_eq!(app.store().len(), 1);
        assert!(!out.contains("[2]"));
    }

    #[test]
    fn last_line_without_newline_is_handled() {
        let (app, _) = session(b"add\nadd");
        assert_eq!(app.store().len(), 2);
    }
}
