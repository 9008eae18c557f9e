//! CLI for aglc-cite - Format AGLC4 legal citations and footnote Markdown documents.

use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::info;

use aglc_cite::{
    extract_citation_clusters, footnote_section, format_citation, format_citation_clusters,
    generate_output, load_records, logging::init_logging, parse_records, replace_citations,
    CitationEntry, CitationRecord, CitationType, Field, Library, OutputFormat, ProcessorError,
    RenderMode,
};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Format Australian legal citations (AGLC4)
#[derive(Parser)]
#[command(name = "aglc-cite")]
#[command(version)]
#[command(after_help = "\
Examples:
  aglc-cite format citations.json
  aglc-cite preview case_reported --field case_name='Mabo v Queensland [No 2]' --field year=1992
  aglc-cite process article.md --library citations.json -o article.footnoted.md
  aglc-cite types")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format every record in a JSON or JSONL file, one citation per line
    #[command(after_help = "\
Examples:
  aglc-cite format citations.json
  aglc-cite format citations.jsonl --output-format html -o citations.html
  cat citations.json | aglc-cite format - --mode preview")]
    Format {
        /// Records file (JSON array or JSONL, use '-' for stdin)
        input: PathBuf,

        /// Show placeholder labels for empty fields, or omit them
        #[arg(long, value_enum, default_value_t = ModeArg::Final)]
        mode: ModeArg,

        /// How italics are rendered
        #[arg(long, value_enum, default_value_t = FormatArg::Markup)]
        output_format: FormatArg,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Format a single citation built from command-line fields
    #[command(after_help = "\
Examples:
  aglc-cite preview book
  aglc-cite preview book --author 'Jane Smith' --field title='Legal Method' --field year=2020
  aglc-cite preview act --field title='Crimes Act' --field year=1914 --field jurisdiction=Cth --mode final

Field names are listed by 'aglc-cite fields'.")]
    Preview {
        /// Citation type tag (see 'types' command)
        #[arg(value_name = "TYPE")]
        citation_type: String,

        /// Field value as name=value (repeatable)
        #[arg(short, long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,

        /// Author name (repeatable, in order)
        #[arg(long = "author", value_name = "NAME")]
        authors: Vec<String>,

        /// Editor name (repeatable, in order)
        #[arg(long = "editor", value_name = "NAME")]
        editors: Vec<String>,

        /// Show placeholder labels for empty fields, or omit them
        #[arg(long, value_enum, default_value_t = ModeArg::Preview)]
        mode: ModeArg,

        /// How italics are rendered
        #[arg(long, value_enum, default_value_t = FormatArg::Markup)]
        output_format: FormatArg,
    },

    /// Turn [@id] markers in a Markdown file into AGLC footnotes
    #[command(after_help = "\
Examples:
  aglc-cite process paper.md --library citations.json
  aglc-cite process paper.md -l citations.jsonl -o paper.out.md

Citation syntax: [@id], [@id, pinpoint], [@a; @b, 12]")]
    Process {
        /// Input Markdown file (use '-' for stdin)
        input: PathBuf,

        /// Library of citation records (JSON array or JSONL), keyed by "id"
        #[arg(short, long)]
        library: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List every citation type with its family and name
    Types,

    /// List every field identifier with its placeholder label
    Fields,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Preview,
    Final,
}

impl From<ModeArg> for RenderMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Preview => RenderMode::Preview,
            ModeArg::Final => RenderMode::Final,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Markup,
    Plain,
    Html,
    Markdown,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Markup => OutputFormat::Markup,
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Html => OutputFormat::Html,
            FormatArg::Markdown => OutputFormat::Markdown,
        }
    }
}

// ---------------------------------------------------------------------------
// AppError: semantic exit codes
// ---------------------------------------------------------------------------

enum AppError {
    /// Exit 10: input file not found / unreadable
    InputFile(String),
    /// Exit 11: records or library file invalid
    RecordsFile(String),
    /// Exit 12: invalid command-line argument
    Argument(String),
    /// Exit 13: citation id not found in library
    ReferenceNotFound(String),
    /// Exit 14: footnote processing error
    Processing(String),
    /// Exit 15: cannot write output file
    OutputFile(String),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::InputFile(_) => 10,
            AppError::RecordsFile(_) => 11,
            AppError::Argument(_) => 12,
            AppError::ReferenceNotFound(_) => 13,
            AppError::Processing(_) => 14,
            AppError::OutputFile(_) => 15,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InputFile(msg) => {
                write!(f, "{}\n  hint: verify the file path is correct", msg)
            }
            AppError::RecordsFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: the file must be a JSON array of citation objects, or JSONL (one object per line)",
                    msg
                )
            }
            AppError::Argument(msg) => {
                write!(
                    f,
                    "{}\n  hint: run 'aglc-cite fields' to list valid field names",
                    msg
                )
            }
            AppError::ReferenceNotFound(msg) => {
                write!(
                    f,
                    "{}\n  hint: check that this id exists in your library file",
                    msg
                )
            }
            AppError::Processing(msg) => {
                write!(
                    f,
                    "{}\n  hint: each id must appear only once in the library",
                    msg
                )
            }
            AppError::OutputFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: check that the output directory exists and is writable",
                    msg
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Format {
            input,
            mode,
            output_format,
            output,
        } => format_command(&input, mode.into(), output_format.into(), output.as_deref()),
        Commands::Preview {
            citation_type,
            fields,
            authors,
            editors,
            mode,
            output_format,
        } => preview_command(
            &citation_type,
            &fields,
            authors,
            editors,
            mode.into(),
            output_format.into(),
        ),
        Commands::Process {
            input,
            library,
            output,
        } => process_command(&input, &library, output.as_deref()),
        Commands::Types => {
            types_command();
            Ok(())
        }
        Commands::Fields => {
            fields_command();
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Format every record in a file.
fn format_command(
    input: &Path,
    mode: RenderMode,
    output_format: OutputFormat,
    output: Option<&Path>,
) -> Result<(), AppError> {
    let content = read_input(input)?;
    let entries = parse_records(&content)
        .map_err(|e| AppError::RecordsFile(format!("'{}': {}", input.display(), e)))?;
    info!(records = entries.len(), "loaded citation records");

    let mut result = String::new();
    for entry in &entries {
        result.push_str(&output_format.render(&entry.format(mode)));
        result.push('\n');
    }

    write_output(output, &result)?;
    if let Some(output_path) = output {
        eprintln!(
            "formatted {} citation(s), wrote {}",
            entries.len(),
            output_path.display()
        );
    }
    Ok(())
}

/// Format one citation built from arguments.
fn preview_command(
    citation_type: &str,
    fields: &[String],
    authors: Vec<String>,
    editors: Vec<String>,
    mode: RenderMode,
    output_format: OutputFormat,
) -> Result<(), AppError> {
    let record = record_from_args(fields, authors, editors)?;

    if CitationType::from_tag(citation_type).is_none() {
        info!(tag = %citation_type, "unknown citation type");
    }
    let formatted = format_citation(citation_type, &record, mode);

    println!("{}", output_format.render(&formatted));
    Ok(())
}

/// Builds a record from `name=value` pairs plus author and editor lists.
fn record_from_args(
    fields: &[String],
    authors: Vec<String>,
    editors: Vec<String>,
) -> Result<CitationRecord, AppError> {
    let mut record = CitationRecord::new();

    for pair in fields {
        let (name, value) = pair.split_once('=').ok_or_else(|| {
            AppError::Argument(format!("invalid --field '{}': expected NAME=VALUE", pair))
        })?;
        let field = Field::from_name(name.trim())
            .ok_or_else(|| AppError::Argument(format!("unknown field '{}'", name.trim())))?;
        record.set(field, value);
    }

    if !authors.is_empty() {
        record.set_names(Field::Authors, authors);
    }
    if !editors.is_empty() {
        record.set_names(Field::Editors, editors);
    }

    Ok(record)
}

/// Footnote a Markdown file using a citation library.
fn process_command(input: &Path, library: &Path, output: Option<&Path>) -> Result<(), AppError> {
    // 1. Read the Markdown file (support '-' for stdin)
    let markdown = read_input(input)?;

    // 2. Load the library
    let entries: Vec<CitationEntry> = load_records(library)
        .map_err(|e| AppError::RecordsFile(format!("'{}': {}", library.display(), e)))?;
    let library = Library::new(entries).map_err(map_processor_error)?;
    info!(entries = library.len(), "loaded citation library");

    // 3. Extract citation clusters (adjacent markers grouped)
    let clusters = extract_citation_clusters(&markdown);

    // 4. Format each cluster as footnote text
    let processed = format_citation_clusters(&clusters, &library).map_err(map_processor_error)?;

    // 5. Replace clusters with footnote markers and append the footnotes
    let content = replace_citations(&markdown, &processed);
    let result = generate_output(&content, &footnote_section(&processed));

    write_output(output, &result)?;
    if let Some(output_path) = output {
        eprintln!(
            "processed {} footnote(s), wrote {}",
            processed.len(),
            output_path.display()
        );
    }
    Ok(())
}

/// Maps a ProcessorError to an AppError using type-safe matching.
fn map_processor_error(e: ProcessorError) -> AppError {
    match e {
        ProcessorError::ReferenceNotFound(_) => AppError::ReferenceNotFound(e.to_string()),
        ProcessorError::DuplicateId(_) => AppError::Processing(e.to_string()),
    }
}

/// List every citation type.
fn types_command() {
    for kind in CitationType::ALL {
        println!("{}\t{}\t{}", kind.as_tag(), kind.family(), kind.label());
    }
}

/// List every field identifier.
fn fields_command() {
    for field in Field::ALL {
        println!("{}\t{}", field.as_str(), field.placeholder());
    }
}

// ---------------------------------------------------------------------------
// I/O helpers
// ---------------------------------------------------------------------------

fn read_input(input: &Path) -> Result<String, AppError> {
    if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| AppError::InputFile(format!("failed to read from stdin: {}", e)))?;
        Ok(buf)
    } else {
        fs::read_to_string(input)
            .map_err(|e| AppError::InputFile(format!("'{}': {}", input.display(), e)))
    }
}

fn write_output(output: Option<&Path>, result: &str) -> Result<(), AppError> {
    if let Some(output_path) = output {
        fs::write(output_path, result).map_err(|e| {
            AppError::OutputFile(format!("'{}': {}", output_path.display(), e))
        })
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write!(handle, "{}", result).map_err(|e| AppError::OutputFile(format!("stdout: {}", e)))
    }
}
