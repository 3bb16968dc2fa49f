//! Command line interface
//!
//! Every command reads the site settings from `--root`, builds what it needs
//! and writes its result to the given writer.

use std::io::Write;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::Arc;

use clap::{
    Args,
    Parser,
    Subcommand,
};
use thiserror::Error;

use crate::catalog::TranslationStore;
use crate::companies::load_companies;
use crate::config::{
    ConfigError,
    ConfigManager,
    SiteSettings,
};
use crate::i18n::language::parse_accept_language;
use crate::i18n::{
    DirectorySource,
    FilePreferences,
    LANGUAGES,
    Language,
    LanguageSession,
    LoadError,
    Loader,
    SwitchOutcome,
    Translator,
};
use crate::page::{
    PageOptions,
    render_page,
};
use crate::submission::{
    FormError,
    IssueFields,
    csv_row,
    issue_url,
    validate,
};

/// Output path meaning "write to stdout".
const STDOUT_PATH: &str = "-";

#[derive(Debug, Parser)]
#[command(name = "foss4gov")]
#[command(version)]
#[command(about = "Render the FOSS4Gov company directory and build submissions")]
pub struct Cli {
    /// Site root holding `.foss4gov.json`, the CSV and the language directory
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Display language (overrides the saved preference)
    #[arg(short, long, global = true)]
    pub lang: Option<String>,

    /// Preferred languages, e.g. "de-CH,de;q=0.9,en;q=0.5"
    #[arg(long, global = true)]
    pub accept_language: Option<String>,

    /// Use only the embedded translations
    #[arg(long, global = true)]
    pub no_overlays: bool,

    /// Also write logs to a daily rolling file in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the static page
    Render {
        /// Output file ("-" for stdout; default from the settings)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render one page per language as `<name>.<code>.html`
        #[arg(long)]
        all: bool,
    },

    /// Resolve one translation key
    Lookup {
        /// Dotted key, e.g. `form.validation.required_fields`
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// List every English key with its resolved text
    Keys,

    /// Build a prefilled GitHub issue link
    Issue(#[command(flatten)] SubmissionArgs),

    /// Build a `companies.csv` row for a pull request
    CsvRow(#[command(flatten)] SubmissionArgs),

    /// Print the parsed company list as JSON
    Companies,

    /// List the supported languages
    Languages,

    /// Save the preferred language
    SetLanguage {
        #[arg(value_name = "CODE")]
        code: String,
    },
}

/// Submission form values.
#[derive(Debug, Clone, Args)]
pub struct SubmissionArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub website: String,
    /// English alternative name
    #[arg(long, default_value = "")]
    pub english: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub linkedin: String,
    #[arg(long, default_value = "")]
    pub github: String,
    /// Other public Git repository
    #[arg(long, default_value = "")]
    pub other_repo: String,
}

impl From<SubmissionArgs> for IssueFields {
    fn from(args: SubmissionArgs) -> Self {
        Self {
            name: args.name,
            english: args.english,
            website: args.website,
            email: args.email,
            linkedin: args.linkedin,
            github: args.github,
            other_repo: args.other_repo,
        }
        .trimmed()
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Translation not found for key: {0}")]
    MissingKey(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to build CSV row: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to encode companies: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings and flags shared by all commands.
#[derive(Debug)]
struct Context {
    /// Loaded site settings
    config: ConfigManager,
    /// `--lang`
    requested: Option<String>,
    /// Parsed `--accept-language` followed by the default language
    preferred: Vec<String>,
}

impl Context {
    /// Loads and validates the settings under `cli.root`, then applies the
    /// command-line overrides.
    fn new(cli: &Cli) -> Result<Self, CliError> {
        let mut config = ConfigManager::new();
        config.load_settings(Some(cli.root.clone()))?;
        if cli.no_overlays {
            let overridden = SiteSettings { overlays: false, ..config.get_settings().clone() };
            config.update_settings(overridden)?;
        }

        let mut preferred =
            cli.accept_language.as_deref().map(parse_accept_language).unwrap_or_default();
        preferred.push(config.get_settings().default_language.clone());

        Ok(Self { config, requested: cli.lang.clone(), preferred })
    }

    /// Loader reading overlays from the language directory when enabled.
    fn loader(&self) -> Loader {
        let store = TranslationStore::embedded();
        let settings = self.config.get_settings();
        if settings.overlays {
            let lang_dir = self.config.resolve(&settings.lang_dir);
            Loader::with_source(store, Arc::new(DirectorySource::new(lang_dir)))
        } else {
            Loader::builtin_only(store)
        }
    }

    /// Session backed by the preference file.
    async fn session(&self) -> Result<LanguageSession, CliError> {
        let preferences =
            FilePreferences::new(self.config.resolve(&self.config.get_settings().preference_file));
        let session = LanguageSession::start(
            self.loader(),
            Arc::new(preferences),
            self.requested.as_deref(),
            &self.preferred,
        )
        .await?;
        Ok(session)
    }

    /// Translator for the initial language.
    async fn translator(&self) -> Result<Translator, CliError> {
        Ok(self.session().await?.translator().await)
    }

    /// Page settings taken from the site settings.
    fn page_options(&self) -> PageOptions {
        PageOptions { repository: self.config.get_settings().repository.clone() }
    }
}

/// `index.html` + `de` → `index.de.html`
fn language_path(path: &Path, code: &str) -> PathBuf {
    let stem = path.file_stem().map_or_else(|| "index".into(), |s| s.to_string_lossy());
    let name = path.extension().map_or_else(
        || format!("{stem}.{code}"),
        |ext| format!("{stem}.{code}.{}", ext.to_string_lossy()),
    );
    path.with_file_name(name)
}

/// Writes `content` to `path`, creating parent directories.
async fn write_file(path: &Path, content: &str) -> Result<(), CliError> {
    let to_error = |source| CliError::Write { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(to_error)?;
    }
    tokio::fs::write(path, content).await.map_err(to_error)?;
    tracing::info!(path = %path.display(), "Wrote page");
    Ok(())
}

/// `render`: one page, or one per language with `all`.
async fn render(
    ctx: &Context,
    output: Option<PathBuf>,
    all: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let settings = ctx.config.get_settings();
    let listing = load_companies(&ctx.config.resolve(&settings.companies_file)).await;
    let options = ctx.page_options();
    let output = output.map_or_else(
        || ctx.config.resolve(&settings.output_file),
        |path| if path.as_os_str() == STDOUT_PATH { path } else { ctx.config.resolve(path) },
    );

    if all {
        let loader = ctx.loader();
        let fallback = loader.store().fallback();
        for (code, catalog) in loader.load_all().await {
            let translator = Translator::new(code, catalog?, fallback.clone());
            let page = render_page(&translator, &listing, &options);
            write_file(&language_path(&output, code), &page).await?;
        }
        return Ok(());
    }

    let translator = ctx.translator().await?;
    let page = render_page(&translator, &listing, &options);
    if output.as_os_str() == STDOUT_PATH {
        out.write_all(page.as_bytes())?;
    } else {
        write_file(&output, &page).await?;
    }
    Ok(())
}

/// `keys`: English keys with their resolved text.
async fn keys(ctx: &Context, out: &mut impl Write) -> Result<(), CliError> {
    let translator = ctx.translator().await?;
    let english = TranslationStore::embedded().fallback().map(|c| c.flatten()).unwrap_or_default();
    for key in english.keys() {
        writeln!(out, "{key}\t{}", translator.translate(key).unwrap_or_default())?;
    }
    Ok(())
}

/// `set-language`: switches and saves the preference.
async fn set_language(ctx: &Context, code: &str, out: &mut impl Write) -> Result<(), CliError> {
    let language =
        Language::find(code).ok_or_else(|| CliError::UnsupportedLanguage(code.to_string()))?;
    let session = ctx.session().await?;
    match session.change_language(language.code).await? {
        SwitchOutcome::Applied => writeln!(out, "Language set to {}", language.name)?,
        SwitchOutcome::Superseded => {
            tracing::warn!(language = language.code, "Language change was superseded");
        }
    }
    Ok(())
}

/// Runs one command, writing its result to `out`.
///
/// # Errors
/// Settings, translation, validation and output failures.
pub async fn run(cli: Cli, out: &mut impl Write) -> Result<(), CliError> {
    let ctx = Context::new(&cli)?;
    tracing::debug!(root = %cli.root.display(), command = ?cli.command, "Running command");

    match cli.command {
        Command::Render { output, all } => render(&ctx, output, all, out).await?,
        Command::Lookup { key } => {
            let translator = ctx.translator().await?;
            let text = translator.translate(&key).ok_or_else(|| CliError::MissingKey(key.clone()))?;
            writeln!(out, "{text}")?;
        }
        Command::Keys => keys(&ctx, out).await?,
        Command::Issue(args) => {
            let fields = IssueFields::from(args);
            validate(&fields)?;
            let translator = ctx.translator().await?;
            let url = issue_url(&ctx.config.get_settings().repository, &fields, &translator);
            writeln!(out, "{url}")?;
        }
        Command::CsvRow(args) => {
            let fields = IssueFields::from(args);
            validate(&fields)?;
            writeln!(out, "{}", csv_row(&fields)?)?;
        }
        Command::Companies => {
            let path = ctx.config.resolve(&ctx.config.get_settings().companies_file);
            let listing = load_companies(&path).await;
            writeln!(out, "{}", serde_json::to_string_pretty(listing.companies())?)?;
        }
        Command::Languages => {
            let current = ctx.session().await?.language().await;
            for language in &LANGUAGES {
                let marker = if language.code == current { "*" } else { " " };
                writeln!(out, "{marker} {}\t{}\t{}", language.code, language.name, language.file)?;
            }
        }
        Command::SetLanguage { code } => set_language(&ctx, &code, out).await?,
    }
    Ok(())
}
