//! Drives the presenter through one or more searches against the proxy.

use std::io::Write;

use pfinder_core::{Presenter, PresenterState, SearchQuery};
use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::proxy::ProxyClient;
use crate::render::{render_state, state_json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Runs a single search and writes the settled state to `out`.
///
/// # Errors
///
/// Returns an error only if writing to `out` fails; search failures are
/// rendered, not propagated.
pub async fn run_search<R: Rng, W: Write>(
    presenter: &mut Presenter<R>,
    proxy: &ProxyClient,
    query: SearchQuery,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let token = presenter.begin(query.clone());
    if format == OutputFormat::Text {
        writeln!(out, "{}", render_state(presenter.state()))?;
    }

    let outcome = proxy.search(&query).await.map_err(|e| {
        tracing::warn!(query = %query, error = %e, "search failed");
        e.failure_kind()
    });
    presenter.complete(token, outcome);

    match format {
        OutputFormat::Text => write_text(presenter.state(), out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &state_json(presenter.state()))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_text<W: Write>(state: &PresenterState, out: &mut W) -> std::io::Result<()> {
    let rendered = render_state(state);
    if rendered.ends_with('\n') {
        write!(out, "{rendered}")
    } else {
        writeln!(out, "{rendered}")
    }
}

/// Reads keywords line by line and searches each one until EOF or `quit`.
///
/// Blank lines are ignored without contacting the proxy.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails.
pub async fn run_shell<R, I, W>(
    presenter: &mut Presenter<R>,
    proxy: &ProxyClient,
    input: I,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: Rng,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if matches!(line.trim(), "quit" | "exit") {
            break;
        }
        let Ok(query) = SearchQuery::parse(&line) else {
            continue;
        };
        run_search(presenter, proxy, query, OutputFormat::Text, out).await?;
    }
    writeln!(out)?;
    Ok(())
}
