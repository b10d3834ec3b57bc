use crate::display::{Terminal, format_banner, format_labeled, format_timestamp};
use crate::greeting::{GreeterError, GreeterResult, hello};
use crate::system::output::{OutputSink, StdoutSink};

const BANNER_WIDTH: usize = 40;

/// Render the greeting once to stdout
pub async fn run(plain: bool) -> GreeterResult<()> {
    let mut sink = StdoutSink;
    run_with_sink(&mut sink, plain).await
}

/// Render the greeting once through the given sink
///
/// Plain mode writes the bare greeting line. Decorated mode wraps it in a
/// banner with a UTC timestamp and applies terminal styling.
pub async fn run_with_sink<S: OutputSink>(sink: &mut S, plain: bool) -> GreeterResult<()> {
    let message = hello();

    if plain {
        sink.write_line(&message).await?;
        sink.flush().await?;
        return Ok(());
    }

    let terminal = Terminal::new();

    sink.write_line(&format_banner(" Greeter ", BANNER_WIDTH)).await?;
    sink.write_line(&format_labeled(
        "Time",
        &format_timestamp(chrono::Utc::now()),
    ))
    .await?;
    sink.write_line("").await?;
    sink.write_line(&terminal.greeting_style().apply_to(&message).to_string())
        .await?;
    sink.write_line("").await?;
    sink.write_line(&format_banner("", BANNER_WIDTH)).await?;
    sink.flush().await?;

    Ok(())
}

/// Parse a boolean environment toggle
///
/// Unset and empty values count as disabled. Anything other than the
/// accepted spellings is rejected instead of silently picking a mode.
pub fn parse_toggle(variable: &str, value: Option<String>) -> GreeterResult<bool> {
    match value.as_deref() {
        None | Some("") => Ok(false),
        Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(other) => Err(GreeterError::invalid_toggle(variable, other)),
    }
}
