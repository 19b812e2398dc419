use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use json_edgecase_core::{
    export, extract_keys, generate, parse_document, path, sweep, CaseStatus, ExportFormat,
    KeyPath, SweepOptions, TestCaseField, TestingStatus, Tracker, DEFAULT_SWEEP_MAX_CASES,
};
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(name = "json-edgecase")]
#[command(about = "Generate edge-case variants of a sample JSON document")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the selectable key paths of a document
    Keys {
        /// Input JSON document (`-` reads stdin)
        input: PathBuf,

        /// Testing status file; completed keys are marked
        #[arg(long)]
        state: Option<PathBuf>,
    },

    /// Generate the edge cases for one key
    Generate {
        /// Input JSON document (`-` reads stdin)
        input: PathBuf,

        /// Dotted key path, as printed by `keys`
        #[arg(short, long)]
        key: String,

        /// Output file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = GenerateFormat::Pretty)]
        format: GenerateFormat,
    },

    /// Mutate every key of a document with injection-oriented values
    Sweep {
        /// Input JSON document (`-` reads stdin)
        input: PathBuf,

        /// Stop after this many cases
        #[arg(long, default_value_t = DEFAULT_SWEEP_MAX_CASES)]
        max_cases: usize,

        /// Output file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,
    },

    /// Re-emit a document with two-space indentation
    Prettify {
        /// Input JSON document (`-` reads stdin)
        input: PathBuf,

        /// Output file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Track which keys and cases have been tested
    Status {
        /// Testing status file (created on first write)
        #[arg(long, global = true)]
        state: Option<PathBuf>,

        #[command(subcommand)]
        action: StatusAction,
    },

    /// Manual pass/fail test case tracker
    Tracker {
        /// Tracker file (created on first write)
        #[arg(long, global = true)]
        file: Option<PathBuf>,

        #[command(subcommand)]
        action: TrackerAction,
    },
}

#[derive(Subcommand)]
enum StatusAction {
    /// Mark a key as completely tested
    Complete { key: String },

    /// Flip the tested flag of one generated case
    Toggle { key: String, index: usize },

    /// Print the status file
    Show,
}

#[derive(Subcommand)]
enum TrackerAction {
    /// Append an empty test case and print its id
    Add,

    /// Set one text field of a test case
    Update {
        id: String,
        /// title, scenario, expected-behaviour or actual-behaviour
        field: String,
        value: String,
    },

    /// Mark a test case pass or fail (repeating the same status clears it)
    Status {
        id: String,
        #[arg(value_enum)]
        status: StatusArg,
    },

    /// Delete a test case
    Delete { id: String },

    /// Reset to a single empty test case
    Clear,

    /// Print all test cases as plain text
    List,

    /// Write the JSON export document
    Export {
        /// Output file (defaults to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum StatusArg {
    Pass,
    Fail,
}

impl From<StatusArg> for CaseStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Pass => CaseStatus::Pass,
            StatusArg::Fail => CaseStatus::Fail,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormat {
    Pretty,
    Compact,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum GenerateFormat {
    Pretty,
    Compact,
    Ndjson,
    Csv,
    Envelope,
}

impl GenerateFormat {
    /// The export rendering, or `None` for a bare JSON array.
    fn export_format(self) -> Option<ExportFormat> {
        match self {
            GenerateFormat::Pretty | GenerateFormat::Compact => None,
            GenerateFormat::Ndjson => Some(ExportFormat::Ndjson),
            GenerateFormat::Csv => Some(ExportFormat::Csv),
            GenerateFormat::Envelope => Some(ExportFormat::Envelope),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for JSON
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Keys { input, state } => {
            let document = read_document(&input)?;
            let status = match state {
                Some(path) => load_status(&path)?,
                None => TestingStatus::default(),
            };

            let mut out = String::new();
            for key in extract_keys(&document) {
                let key = key.to_string();
                if status.is_completed(&key) {
                    out.push_str("✅ ");
                }
                out.push_str(&key);
                out.push('\n');
            }
            write_text(&out, None)?;
        }
        Commands::Generate {
            input,
            key,
            output,
            format,
        } => {
            let key = KeyPath::parse(&key)?;
            let document = read_document(&input)?;

            if path::get(&document, &key).is_none() {
                tracing::warn!(%key, "key not present in document; only null and deletion cases apply");
            }
            let set = generate(&document, &key);

            match format.export_format() {
                Some(export_format) => {
                    let mut text = export::export(&set, export_format, Utc::now())
                        .context("Failed to render edge cases")?;
                    if !text.ends_with('\n') {
                        text.push('\n');
                    }
                    write_text(&text, output.as_ref())?;
                }
                None => {
                    let json_format = if format == GenerateFormat::Compact {
                        OutputFormat::Compact
                    } else {
                        OutputFormat::Pretty
                    };
                    write_json(&set.cases, output.as_ref(), json_format)?;
                }
            }
        }
        Commands::Sweep {
            input,
            max_cases,
            output,
            format,
        } => {
            let document = read_document(&input)?;
            if !document.is_object() {
                eprintln!("Warning: sweep only visits object keys; the document root is not an object.");
            }

            let cases = sweep(&document, &SweepOptions { max_cases });
            write_json(&cases, output.as_ref(), format)?;
        }
        Commands::Prettify { input, output } => {
            let document = read_document(&input)?;
            write_json(&document, output.as_ref(), OutputFormat::Pretty)?;
        }
        Commands::Status { state, action } => {
            let state = state.context("--state <FILE> is required for status commands")?;
            let mut status = load_status(&state)?;

            match action {
                StatusAction::Complete { key } => {
                    if !status.complete_key(&key) {
                        eprintln!("Warning: {key} was already marked complete.");
                    }
                    save_status(&status, &state)?;
                }
                StatusAction::Toggle { key, index } => {
                    let tested = status.toggle_tested(&key, index);
                    save_status(&status, &state)?;
                    let label = if tested { "tested" } else { "untested" };
                    write_text(&format!("{key} #{index}: {label}\n"), None)?;
                }
                StatusAction::Show => {
                    write_json(&status, None, OutputFormat::Pretty)?;
                }
            }
        }
        Commands::Tracker { file, action } => {
            let file = file.context("--file <FILE> is required for tracker commands")?;
            let now = Utc::now();
            let mut tracker = load_tracker(&file)?;

            match action {
                TrackerAction::Add => {
                    let id = tracker.add(now);
                    save_tracker(&tracker, &file)?;
                    write_text(&format!("{id}\n"), None)?;
                }
                TrackerAction::Update { id, field, value } => {
                    let field: TestCaseField = field.parse()?;
                    tracker.update(&id, field, value)?;
                    save_tracker(&tracker, &file)?;
                }
                TrackerAction::Status { id, status } => {
                    let now_set = tracker.set_status(&id, status.into())?;
                    save_tracker(&tracker, &file)?;
                    let label = match now_set {
                        Some(CaseStatus::Pass) => "pass",
                        Some(CaseStatus::Fail) => "fail",
                        None => "none",
                    };
                    write_text(&format!("{id}: {label}\n"), None)?;
                }
                TrackerAction::Delete { id } => {
                    tracker.delete(&id)?;
                    save_tracker(&tracker, &file)?;
                }
                TrackerAction::Clear => {
                    tracker.clear(now);
                    save_tracker(&tracker, &file)?;
                }
                TrackerAction::List => {
                    write_text(&format!("{}\n", tracker.format_plain_text()), None)?;
                }
                TrackerAction::Export { output } => {
                    write_json(&tracker.export(now), output.as_ref(), OutputFormat::Pretty)?;
                }
            }
        }
    }

    Ok(())
}

/// Read and parse a JSON document; `-` reads stdin.
fn read_document(input: &Path) -> Result<serde_json::Value> {
    let text = if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read document from stdin")?;
        buf
    } else {
        let mut file = File::open(input)
            .with_context(|| format!("Failed to open input file: {}", input.display()))?;
        let mut buf = String::new();
        file.read_to_string(&mut buf)
            .with_context(|| format!("Failed to read input file: {}", input.display()))?;
        buf
    };

    parse_document(&text)
        .with_context(|| format!("Failed to parse JSON document from: {}", input.display()))
}

fn load_status(path: &Path) -> Result<TestingStatus> {
    if !path.exists() {
        return Ok(TestingStatus::default());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to open status file: {}", path.display()))?;
    TestingStatus::from_json(&text)
        .with_context(|| format!("Failed to parse status file: {}", path.display()))
}

fn save_status(status: &TestingStatus, path: &Path) -> Result<()> {
    let text = status.to_json()?;
    fs::write(path, text + "\n")
        .with_context(|| format!("Failed to write status file: {}", path.display()))
}

fn load_tracker(path: &Path) -> Result<Tracker> {
    if !path.exists() {
        return Ok(Tracker::new(Utc::now()));
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to open tracker file: {}", path.display()))?;
    Tracker::from_json(&text, Utc::now())
        .with_context(|| format!("Failed to parse tracker file: {}", path.display()))
}

fn save_tracker(tracker: &Tracker, path: &Path) -> Result<()> {
    let text = tracker.to_json()?;
    fs::write(path, text + "\n")
        .with_context(|| format!("Failed to write tracker file: {}", path.display()))
}

fn open_writer(path: Option<&PathBuf>) -> Result<Box<dyn Write>> {
    Ok(if let Some(p) = path {
        let file = File::create(p)
            .with_context(|| format!("Failed to create output file: {}", p.display()))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    })
}

fn write_text(text: &str, path: Option<&PathBuf>) -> Result<()> {
    let mut writer = open_writer(path)?;
    writer
        .write_all(text.as_bytes())
        .context("Failed to write output")?;
    writer.flush().context("Failed to flush output")?;
    Ok(())
}

fn write_json<T: serde::Serialize>(
    val: &T,
    path: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let mut writer = open_writer(path)?;

    match format {
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut writer, val).context("Failed to write JSON")?;
        }
        OutputFormat::Compact => {
            serde_json::to_writer(&mut writer, val).context("Failed to write JSON")?;
        }
    }

    // Ensure trailing newline
    writeln!(writer).context("Failed to write trailing newline")?;
    writer.flush().context("Failed to flush output")?;

    Ok(())
}
