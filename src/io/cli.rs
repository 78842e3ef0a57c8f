//! Command-line interface for generating collections and comparing documents

use crate::catalog::TraitCatalog;
use crate::catalog::defaults::{exhaustive_collection, weighted_collection};
use crate::catalog::loader::load_catalog;
use crate::io::compare::compare_files;
use crate::io::configuration::{
    DEFAULT_FRAGMENT_DIR, DEFAULT_HTML_OUTPUT_DIR, DEFAULT_ITEM_COUNT, DEFAULT_SVG_OUTPUT_DIR,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::output::DocumentWriter;
use crate::io::progress::ProgressManager;
use crate::io::report::print_report;
use crate::render::fragments::{DirectoryFragments, FragmentSource};
use crate::render::{HtmlTemplate, SvgTemplate, Template};
use crate::sampling::{ChainMode, GeneratedItem, Generator, ItemSink, RunSummary, SeedChain};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "traitloom")]
#[command(
    author,
    version,
    about = "Generate rarity-weighted SVG and HTML art collections"
)]
/// Command-line arguments for the collection generator
pub struct Cli {
    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Draw weighted attributes per item and write numbered SVG documents
    Svg(SvgArgs),
    /// Write one HTML page for every attribute combination
    Html(HtmlArgs),
    /// Compare two files ignoring whitespace and print true or false
    Compare(CompareArgs),
}

/// Options shared by the generating commands
#[derive(Args)]
pub struct RunArgs {
    /// TOML catalog replacing the built-in collection
    #[arg(short, long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Directory image fragment names are resolved against
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_FRAGMENT_DIR)]
    pub fragments: PathBuf,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Skip the frequency report after the run
    #[arg(long)]
    pub no_report: bool,
}

/// Arguments of the weighted SVG run
#[derive(Args)]
pub struct SvgArgs {
    #[command(flatten)]
    #[allow(missing_docs)]
    pub run: RunArgs,

    /// Number of items to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITEM_COUNT)]
    pub count: usize,

    /// Directory documents are written into
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_SVG_OUTPUT_DIR)]
    pub output: PathBuf,

    /// How each item's hash chain is seeded
    #[arg(long, value_enum, default_value_t = ChainMode::PerItem)]
    pub chain: ChainMode,
}

/// Arguments of the exhaustive HTML run
#[derive(Args)]
pub struct HtmlArgs {
    #[command(flatten)]
    #[allow(missing_docs)]
    pub run: RunArgs,

    /// Directory documents are written into
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_HTML_OUTPUT_DIR)]
    pub output: PathBuf,
}

/// Arguments of the comparison utility
#[derive(Args)]
pub struct CompareArgs {
    /// First file
    pub left: PathBuf,
    /// Second file
    pub right: PathBuf,
}

impl Cli {
    /// Check whether informational output is suppressed
    pub const fn quiet(&self) -> bool {
        match &self.command {
            Command::Svg(args) => args.run.quiet,
            Command::Html(args) => args.run.quiet,
            Command::Compare(_) => false,
        }
    }
}

impl RunArgs {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if the frequency report should be printed
    pub const fn should_report(&self) -> bool {
        !self.no_report
    }

    fn load_catalog_or(&self, builtin: fn() -> Result<TraitCatalog>) -> Result<TraitCatalog> {
        match &self.catalog {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading catalog");
                load_catalog(path)
            }
            None => builtin(),
        }
    }
}

/// Dispatches parsed arguments to the matching operation
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the requested operation
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is invalid, a fragment is missing, two
    /// items collide, or a file cannot be read or written
    pub fn process(&self) -> Result<()> {
        match &self.cli.command {
            Command::Svg(args) => Self::process_svg(args),
            Command::Html(args) => Self::process_html(args),
            Command::Compare(args) => Self::process_compare(&args.left, &args.right),
        }
    }

    fn process_svg(args: &SvgArgs) -> Result<()> {
        let catalog = args.run.load_catalog_or(weighted_collection)?;
        let template = SvgTemplate::for_catalog(&catalog)?;
        let mut writer = DocumentWriter::new(
            template,
            DirectoryFragments::new(&args.run.fragments),
            &args.output,
        )?;
        let mut generator = Generator::weighted(catalog, args.chain);

        Self::generate(&args.run, &mut generator, &mut writer, args.count)
    }

    fn process_html(args: &HtmlArgs) -> Result<()> {
        let catalog = args.run.load_catalog_or(exhaustive_collection)?;
        let template = HtmlTemplate::for_catalog(&catalog)?;
        let mut writer = DocumentWriter::new(
            template,
            DirectoryFragments::new(&args.run.fragments),
            &args.output,
        )?;
        let mut generator = Generator::exhaustive(catalog);
        let count = generator.item_limit().ok_or_else(|| {
            invalid_parameter(
                "catalog",
                &"exhaustive",
                &"number of combinations overflows",
            )
        })?;

        Self::generate(&args.run, &mut generator, &mut writer, count)
    }

    // Allow print: the comparison result is the command's output
    #[allow(clippy::print_stdout)]
    fn process_compare(left: &Path, right: &Path) -> Result<()> {
        let equal = compare_files(left, right)?;
        println!("{equal}");
        Ok(())
    }

    fn generate<C, T, F>(
        run: &RunArgs,
        generator: &mut Generator<C>,
        writer: &mut DocumentWriter<T, F>,
        count: usize,
    ) -> Result<()>
    where
        C: SeedChain,
        T: Template,
        F: FragmentSource,
    {
        let mut progress = run.should_show_progress().then(ProgressManager::new);
        if let Some(ref mut pm) = progress {
            pm.initialize(count, &writer.output_dir().display().to_string());
        }

        tracing::info!(
            items = count,
            output = %writer.output_dir().display(),
            "starting generation"
        );

        let outcome = {
            let mut tracked = |item: &GeneratedItem| -> Result<()> {
                writer.accept(item)?;
                if let Some(ref mut pm) = progress {
                    pm.complete_item();
                }
                Ok(())
            };
            generator.run(count, &mut tracked)
        };

        if let Some(ref mut pm) = progress {
            pm.finish();
        }

        let RunSummary {
            items,
            fallback_draws,
        } = outcome?;

        tracing::info!(
            items,
            fallback_draws,
            output = %writer.output_dir().display(),
            "generation complete"
        );

        if run.should_report() {
            print_report(generator.frequencies(), items);
        }
        Ok(())
    }
}
