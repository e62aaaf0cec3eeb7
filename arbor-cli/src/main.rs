//! Arbor CLI
//!
//! Replays a JSON token stream through the tree builder, then prints the
//! document or the elements selected by tag name, attribute query or id.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;

use arbor_dom::{Document, ElementRef};
use arbor_html::{BuilderConfig, ParseIssue, Token, TreeBuilder};

/// Arbor: build a document from tokenizer events and inspect it
#[derive(Parser, Debug)]
#[command(name = "arbor")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Pretty-print a document
    arbor page.tokens.json

    # Rendered text only, reading tokens from stdin
    cat page.tokens.json | arbor --view text

    # Every <li> with class "item"
    arbor page.tokens.json --tag li --query "class=item"

    # One element by id, with parse issues on stderr
    arbor page.tokens.json --id main --warnings
"#)]
struct Cli {
    /// JSON array of tokens; omit or use "-" to read stdin
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// What to print for the document or each selected element
    #[arg(long, value_enum, default_value_t = View::Raw)]
    view: View,

    /// Select elements with this tag name
    #[arg(long, value_name = "NAME", conflicts_with = "id")]
    tag: Option<String>,

    /// Select elements matching an attribute query, e.g. "class=item; lang=en"
    #[arg(long, value_name = "QUERY", conflicts_with = "id")]
    query: Option<String>,

    /// Select the element with this id (exit status 1 if there is none)
    #[arg(long, value_name = "ID")]
    id: Option<String>,

    /// Report parse issues on stderr
    #[arg(short = 'w', long)]
    warnings: bool,
}

/// Output form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    /// Pretty-printed markup
    Raw,
    /// Pretty-printed markup of the children only
    Inner,
    /// Decoded text
    Text,
    /// One node per line (whole document only; selections print raw markup)
    Outline,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let tokens = read_tokens(cli.input.as_deref())?;
    let config = BuilderConfig::new().with_report_warnings(cli.warnings);
    let (document, issues) = TreeBuilder::with_config(config).parse_tokens(&tokens);

    if cli.warnings {
        print_issue_summary(&issues);
    }

    if let Some(ref id) = cli.id {
        let Some(element) = document.element_by_id(id) else {
            eprintln!("{}", format!("no element with id `{id}`").red());
            process::exit(1);
        };
        print!("{}", render_element(element, cli.view));
        return Ok(());
    }

    if cli.tag.is_some() || cli.query.is_some() {
        let selected = select(&document, cli.tag.as_deref(), cli.query.as_deref());
        for element in selected {
            print!("{}", render_element(element, cli.view));
        }
        return Ok(());
    }

    print!("{}", render_document(&document, cli.view));
    Ok(())
}

/// Read and decode the token stream from `input`, or stdin.
fn read_tokens(input: Option<&Path>) -> Result<Vec<Token>> {
    let json = match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut buffer = String::new();
            let _ = io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };
    serde_json::from_str(&json).context("input is not a JSON array of tokens")
}

/// Elements in document order that have tag `name` (if given) and satisfy
/// `query` (if given).
fn select<'a>(
    document: &'a Document,
    name: Option<&str>,
    query: Option<&str>,
) -> Vec<ElementRef<'a>> {
    document
        .all_tags()
        .filter(|element| name.is_none_or(|name| element.tag_name() == name))
        .filter(|element| query.is_none_or(|query| element.check_attrs(query)))
        .collect()
}

fn render_document(document: &Document, view: View) -> String {
    match view {
        View::Raw => document.raw_html(),
        View::Inner => document.inner_html(),
        View::Text => format!("{}\n", document.text()),
        View::Outline => document.outline(),
    }
}

fn render_element(element: ElementRef<'_>, view: View) -> String {
    match view {
        View::Raw | View::Outline => element.raw_html(),
        View::Inner => element.inner_html(),
        View::Text => format!("{}\n", element.text()),
    }
}

/// One line with the issue count per kind.
fn print_issue_summary(issues: &[ParseIssue]) {
    if issues.is_empty() {
        eprintln!("{}", "no parse issues".green());
        return;
    }
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for issue in issues {
        *counts.entry(issue.kind.to_string()).or_default() += 1;
    }
    let breakdown: Vec<String> = counts
        .iter()
        .map(|(kind, count)| format!("{count} {kind}"))
        .collect();
    eprintln!(
        "{}",
        format!("{} parse issue(s): {}", issues.len(), breakdown.join(", ")).yellow()
    );
}
