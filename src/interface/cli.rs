use crate::domain::error::LookupError;
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::serde_json_adapter::{read_link_dump_file, write_report_file};
use crate::infrastructure::title_folder::DefaultTitleFolder;
use crate::usecase::analyze::{analyze_link_graph, Analysis, AnalysisOptions};
use crate::usecase::event::AppEvent;
use crate::usecase::query::QueryService;
use anyhow::{anyhow, Context, Result};
use std::env;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    run_with_io(args, stdin, &mut stdout).await
}

/// Same as [`run_with_args`], with the interactive session bound to `input` / `output`.
pub async fn run_with_io<R, W>(args: &[String], input: R, output: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::LinksAnalyze {
            input: path,
            emit_events,
            options,
            report,
        } => {
            let analysis = analyze_file(&path, emit_events, options).await?;

            if let Some(report_path) = report {
                write_report_file(&report_path, &analysis.stats)
                    .await
                    .with_context(|| format!("writing analysis report: {report_path}"))?;
            }
            Ok(())
        }

        Cli::LinksQuery {
            input: path,
            emit_events,
            options,
        } => {
            let analysis = analyze_file(&path, emit_events, options).await?;
            let service = analysis.into_query_service(Box::new(DefaultTitleFolder));
            run_query_loop(&service, input, output).await
        }
    }
}

async fn analyze_file(path: &str, emit_events: bool, options: AnalysisOptions) -> Result<Analysis> {
    let (tx, rx) = mpsc::channel::<AppEvent>(1024);
    let printer = if emit_events {
        Some(spawn_ndjson_printer(rx))
    } else {
        drop(rx);
        None
    };

    let result = async move {
        let dto = read_link_dump_file(path)
            .await
            .with_context(|| format!("reading link dump: {path}"))?;
        let (nodes, edges) = dto.into_records();

        analyze_link_graph(nodes, edges, options, Some(tx))
            .await
            .with_context(|| format!("analyzing link graph: {path}"))
    }
    .await;

    // The sender is gone either way; flush whatever was emitted before any failure.
    if let Some(handle) = printer {
        handle.await.ok();
    }
    let analysis = result?;

    let stats = &analysis.stats;
    eprintln!(
        "summary: nodes={} edges={} dropped_edges={} duplicate_edges={} components={} non_trivial_components={} largest_component={}",
        stats.nodes,
        stats.edges,
        stats.dropped_edges,
        stats.duplicate_edges,
        stats.components,
        stats.non_trivial_components,
        stats.largest_component
    );
    eprintln!(
        "timing: tarjan={}us kosaraju={}us rounds={}",
        stats.tarjan_micros, stats.kosaraju_micros, analysis.tarjan.rounds
    );

    Ok(analysis)
}

const INTRO: &str = "Type an article title to list every title in its strongly connected component.\nType break or done when you want to exit this program.\n";

fn is_sentinel(word: &str) -> bool {
    let word = word.trim();
    word.eq_ignore_ascii_case("done") || word.eq_ignore_ascii_case("break")
}

/// Answers one title per input line until `done` / `break` or end of input.
pub async fn run_query_loop<R, W>(service: &QueryService, mut input: R, output: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(INTRO.as_bytes()).await?;
    output.flush().await?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        // Undecodable bytes become U+FFFD and get an ordinary "not found" reply.
        let line = String::from_utf8_lossy(&buf);
        let word = line.trim_end();
        if is_sentinel(word) {
            break;
        }

        let reply = match service.lookup(word) {
            Ok(titles) => format!(
                "The strongly connected component of article {word} is:\n{}\nSearch a new term, or type break or done to exit the program.\n",
                serde_json::to_string(&titles)?
            ),
            Err(LookupError::EmptyQuery) => {
                "Type an article title, or break or done to exit the program.\n".to_string()
            }
            Err(LookupError::TitleNotFound { .. }) => {
                format!("There is no article titled {word}.\nPick a new search term.\n")
            }
            Err(LookupError::NoNonTrivialComponent { title }) => format!(
                "The article {title} exists, but no other article is in its strongly connected component.\nPick a new search term.\n"
            ),
        };

        output.write_all(reply.as_bytes()).await?;
        output.flush().await?;
    }

    Ok(())
}

#[derive(Debug)]
enum Cli {
    LinksAnalyze {
        input: String,
        emit_events: bool,
        options: AnalysisOptions,
        report: Option<String>,
    },
    LinksQuery {
        input: String,
        emit_events: bool,
        options: AnalysisOptions,
    },
}

/// Flags shared by both subcommands.
#[derive(Debug, Default)]
struct CommonArgs {
    input: Option<String>,
    emit_events: bool,
    options: AnalysisOptions,
    report: Option<String>,
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> links analyze --in/--input <dump.json> [--emit-events] [--concurrent] [--rounds <n>] [--report <out.json>]
        // <bin> links query --in/--input <dump.json> [--emit-events] [--concurrent] [--rounds <n>]
        if args.len() < 3 {
            return Err(anyhow!(usage()));
        }

        if args[1] != "links" {
            return Err(anyhow!(usage()));
        }

        match args[2].as_str() {
            "analyze" => {
                let common = Self::parse_common(args, true)?;
                Ok(Cli::LinksAnalyze {
                    input: Self::require_input(common.input)?,
                    emit_events: common.emit_events,
                    options: common.options,
                    report: common.report,
                })
            }
            "query" => {
                let common = Self::parse_common(args, false)?;
                Ok(Cli::LinksQuery {
                    input: Self::require_input(common.input)?,
                    emit_events: common.emit_events,
                    options: common.options,
                })
            }
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_common(args: &[String], allow_report: bool) -> Result<CommonArgs> {
        let mut common = CommonArgs::default();

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    common.input = args.get(i).cloned();
                }
                "--emit-events" => {
                    common.emit_events = true;
                }
                "--concurrent" => {
                    common.options.concurrent = true;
                }
                "--rounds" => {
                    i += 1;
                    let raw = args
                        .get(i)
                        .ok_or_else(|| anyhow!(format!("missing value for --rounds\n\n{}", usage())))?;
                    let rounds: usize = raw
                        .parse()
                        .map_err(|_| anyhow!(format!("invalid --rounds: {raw}\n\n{}", usage())))?;
                    if rounds == 0 {
                        return Err(anyhow!(format!("--rounds must be at least 1\n\n{}", usage())));
                    }
                    common.options.rounds = rounds;
                }
                "--report" if allow_report => {
                    i += 1;
                    let path = args
                        .get(i)
                        .ok_or_else(|| anyhow!(format!("missing value for --report\n\n{}", usage())))?;
                    common.report = Some(path.clone());
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        Ok(common)
    }

    fn require_input(input: Option<String>) -> Result<String> {
        input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))
    }
}

fn usage() -> &'static str {
    "Usage:\n  links analyze --in/--input <dump.json> [--emit-events] [--concurrent] [--rounds <n>] [--report <out.json>]\n  links query --in/--input <dump.json> [--emit-events] [--concurrent] [--rounds <n>]\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; the summary goes to stderr.\n\nQuery:\n  Reads one title per line from stdin; type done or break to exit."
}
