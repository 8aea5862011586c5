//! courselens - Explore analyzed courses through pluggable visualizations.
//!
//! Usage:
//!   courselens                     Launch interactive TUI
//!   courselens plugins             List the server's data plugins
//!   courselens load <INDEX>...     Load data plugins and summarize
//!   courselens courses [FILTERS]   Query analyzed courses
//!   courselens instructors [...]   Query instructor summaries
//!   courselens --help              Show help

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::{Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result, eyre};
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

use courselens_client::DataPluginClient;
use courselens_core::{CourseQuery, CourseRecord, InstructorQuery, InstructorRecord};
use courselens_state::AppConfig;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "COURSELENS_LOG";

#[derive(Parser)]
#[command(
    name = "courselens",
    version,
    about = "Explore course and instructor data through pluggable visualizations",
    long_about = "courselens talks to a course analysis server.\n\n\
                  Launch the interactive TUI by running `courselens`, or use \
                  subcommands to query the server directly."
)]
struct Cli {
    /// Analysis server URL (overrides the config file)
    #[arg(short, long, global = true)]
    server: Option<String>,

    /// Visualization plugin manifest (defaults to the built-in plugins)
    #[arg(short, long, global = true)]
    manifest: Option<PathBuf>,

    /// Config file (defaults to <config dir>/courselens/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file while the TUI is running
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List the data plugins the server offers
    Plugins,

    /// Load data plugins by index, in order
    Load {
        /// Indices as listed by `courselens plugins`
        #[arg(required = true)]
        indices: Vec<usize>,
    },

    /// Query analyzed courses
    Courses {
        #[command(flatten)]
        filter: CourseFilter,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Query instructor summaries
    Instructors {
        #[command(flatten)]
        filter: InstructorFilter,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Args)]
struct CourseFilter {
    /// Keyword in the course name
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    level: Option<String>,
    /// Keyword in any instructor name
    #[arg(long)]
    instructor: Option<String>,
    #[arg(long)]
    organization: Option<String>,
    #[arg(long)]
    year: Option<i32>,
    /// Maximum number of results
    #[arg(long)]
    size: Option<usize>,
}

impl CourseFilter {
    fn to_query(&self) -> Result<CourseQuery> {
        let mut builder = CourseQuery::builder();
        if let Some(name) = &self.name {
            builder.name(name.as_str());
        }
        if let Some(category) = &self.category {
            builder.category(category.as_str());
        }
        if let Some(level) = &self.level {
            builder.level(level.as_str());
        }
        if let Some(instructor) = &self.instructor {
            builder.instructor(instructor.as_str());
        }
        if let Some(organization) = &self.organization {
            builder.organization(organization.as_str());
        }
        if let Some(year) = self.year {
            builder.year(year);
        }
        if let Some(size) = self.size {
            builder.size(size);
        }
        builder.build().context("Invalid course filter")
    }
}

#[derive(Args)]
struct InstructorFilter {
    /// Keyword in the instructor name
    #[arg(long)]
    name: Option<String>,
    /// Keyword in any course the instructor teaches
    #[arg(long)]
    course: Option<String>,
    #[arg(long)]
    organization: Option<String>,
    /// Maximum number of results
    #[arg(long)]
    size: Option<usize>,
}

impl InstructorFilter {
    fn to_query(&self) -> Result<InstructorQuery> {
        let mut builder = InstructorQuery::builder();
        if let Some(name) = &self.name {
            builder.name(name.as_str());
        }
        if let Some(course) = &self.course {
            builder.course(course.as_str());
        }
        if let Some(organization) = &self.organization {
            builder.organization(organization.as_str());
        }
        if let Some(size) = self.size {
            builder.size(size);
        }
        builder.build().context("Invalid instructor filter")
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(server) = cli.server {
        config.client.server_url = server;
    }
    if let Some(manifest) = cli.manifest {
        config.plugins.manifest = Some(manifest);
    }
    check_client_settings(&config)?;

    match cli.command {
        None => {
            init_tui_logging(cli.log_file.as_deref())?;
            courselens_tui::run(config)?;
        }
        Some(command) => {
            init_cli_logging();
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(run_command(command, config))?;
        }
    }

    Ok(())
}

fn check_client_settings(config: &AppConfig) -> Result<()> {
    config
        .client
        .validate()
        .map_err(|message| eyre!(message))
        .context("Invalid client settings")
}

/// Log to stderr.
fn init_cli_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Log to `path` if given; otherwise logs are dropped so they never reach
/// the terminal the TUI draws on.
fn init_tui_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

async fn run_command(command: Command, config: AppConfig) -> Result<()> {
    match command {
        Command::Plugins => run_plugins(&config).await,
        Command::Load { indices } => run_load(&config, &indices).await,
        Command::Courses { filter, format } => {
            let query = filter.to_query()?;
            run_courses(&config, &query, format).await
        }
        Command::Instructors { filter, format } => {
            let query = filter.to_query()?;
            run_instructors(&config, &query, format).await
        }
    }
}

fn client(config: &AppConfig) -> Result<DataPluginClient> {
    DataPluginClient::http(&config.client)
        .with_context(|| format!("Invalid server URL {}", config.client.server_url))
}

/// List the data plugins.
async fn run_plugins(config: &AppConfig) -> Result<()> {
    let plugins = client(config)?
        .discover()
        .await
        .context("Failed to discover data plugins")?;

    if plugins.is_empty() {
        println!("The server offers no data plugins.");
        return Ok(());
    }
    for (index, plugin) in plugins.iter().enumerate() {
        println!("{index:>3}  {plugin}");
    }
    Ok(())
}

/// Load data plugins through a full session and summarize the result.
async fn run_load(config: &AppConfig, indices: &[usize]) -> Result<()> {
    let (session, manifest) = courselens_tui::build_session(config)?;
    session
        .start(manifest.as_ref())
        .await
        .context("Failed to start session")?;

    for &index in indices {
        let name = session
            .snapshot()
            .data_plugins
            .get(index)
            .map(|p| p.name.clone());
        eprintln!("Loading {}...", name.as_deref().unwrap_or("unknown plugin"));
        session
            .choose_data_plugin(index)
            .await
            .with_context(|| format!("Failed to load data plugin {index}"))?;
    }

    let state = session.snapshot();
    println!("{}", "─".repeat(60));
    println!(
        " Loaded data plugins: {}",
        state.loaded_data_plugins.iter().join(", ")
    );
    println!(" Analyzed courses:    {}", state.analyzed_courses.len());
    println!(" Status:              {}", state.status);
    println!("{}", "─".repeat(60));
    for course in state.analyzed_courses.iter().take(10) {
        println!(" {}", course_line(course));
    }
    if state.analyzed_courses.len() > 10 {
        println!(" ... and {} more", state.analyzed_courses.len() - 10);
    }
    Ok(())
}

async fn run_courses(config: &AppConfig, query: &CourseQuery, format: OutputFormat) -> Result<()> {
    let courses = client(config)?
        .courses(query)
        .await
        .context("Course query failed")?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&courses)?),
        OutputFormat::Text => {
            for course in &courses {
                println!("{}", course_line(course));
            }
            eprintln!("{} course(s)", courses.len());
        }
    }
    Ok(())
}

async fn run_instructors(
    config: &AppConfig,
    query: &InstructorQuery,
    format: OutputFormat,
) -> Result<()> {
    let instructors = client(config)?
        .instructors(query)
        .await
        .context("Instructor query failed")?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&instructors)?),
        OutputFormat::Text => {
            for instructor in &instructors {
                println!("{}", instructor_line(instructor));
            }
            eprintln!("{} instructor(s)", instructors.len());
        }
    }
    Ok(())
}

fn course_line(course: &CourseRecord) -> String {
    let rate = course
        .known_rate()
        .map_or_else(|| "-".to_string(), |r| format!("{r:.2}"));
    format!(
        "{:<48} {:>4}  {:<24} rate {:>4}  {} students",
        truncate(&course.name, 48),
        course.year,
        truncate(&course.organization_name, 24),
        rate,
        course.total_students
    )
}

fn instructor_line(instructor: &InstructorRecord) -> String {
    let rate = if instructor.rate < 0.0 {
        "-".to_string()
    } else {
        format!("{:.2}", instructor.rate)
    };
    format!(
        "{:<32} {:>3} course(s)  rate {:>4}  {} students",
        truncate(&instructor.name, 32),
        instructor.course_num,
        rate,
        instructor.total_students
    )
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max_len.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from(["courselens", "load", "0", "2", "--server", "http://h:1"])
            .unwrap();
        assert_eq!(cli.server.as_deref(), Some("http://h:1"));
        assert!(matches!(cli.command, Some(Command::Load { ref indices }) if indices == &[0, 2]));

        assert!(Cli::try_parse_from(["courselens", "load"]).is_err());
    }

    #[test]
    fn test_course_filter_to_query() {
        let cli = Cli::try_parse_from(["courselens", "courses", "--name", "rust", "--size", "5"])
            .unwrap();
        let Some(Command::Courses { filter, format }) = cli.command else {
            panic!("expected courses");
        };
        assert!(matches!(format, OutputFormat::Text));
        let query = filter.to_query().unwrap();
        assert_eq!(
            query.to_pairs(),
            vec![("name", "rust".to_string()), ("size", "5".to_string())]
        );
    }

    #[test]
    fn test_zero_size_rejected() {
        let filter = InstructorFilter {
            name: None,
            course: None,
            organization: None,
            size: Some(0),
        };
        assert!(filter.to_query().is_err());
    }

    #[test]
    fn test_server_override_is_checked() {
        let mut config = AppConfig::default();
        assert!(check_client_settings(&config).is_ok());

        config.client.server_url = "ftp://analysis".to_string();
        assert!(check_client_settings(&config).is_err());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 4), "abc…");
    }
}
