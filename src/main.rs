//! modgen's main application entry point and orchestration logic.
//! Handles command-line argument parsing, variable collection and tree
//! generation, and is the only place that terminates the process.

use modgen::{
    cli::{get_args, Args},
    config::Settings,
    error::{default_error_handler, Result},
    loader::{load_template, TemplateSource},
    logger::init_logger,
    processor::{FileOperation, Processor},
    prompt::{DefaultsPrompter, DialoguerPrompter, Prompter},
    renderer::PlaceholderRenderer,
    resolver::{load_from_stdin, resolve_variables, Answers},
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves and loads the template description
/// 2. Resolves the run settings
/// 3. Collects variable values
/// 4. Generates the folder/file tree (or prints the plan on a dry run)
fn run(args: Args) -> Result<()> {
    let cwd = std::env::current_dir()?;

    let source =
        TemplateSource::from_args(args.command_or_path.as_deref(), args.template.as_deref());
    let template_path = source.resolve(&cwd);
    log::info!("Using {}", source);
    let template = load_template(&template_path)?;

    let settings = Settings::resolve(template.configs.as_ref(), args.output_dir.as_deref(), &cwd);
    log::debug!("Settings: {:?}", settings);

    let preloaded = if args.stdin { load_from_stdin()? } else { Answers::new() };

    let dialoguer = DialoguerPrompter::new();
    let defaults_prompter = DefaultsPrompter::new(&dialoguer);
    let prompt: &dyn Prompter = if args.use_defaults { &defaults_prompter } else { &dialoguer };

    let variables = resolve_variables(
        prompt,
        &template.variables,
        template.defaults(),
        settings.templates_dir.as_deref(),
        &preloaded,
    )?;

    let engine = PlaceholderRenderer::new();
    let processor = Processor::new(&engine, settings.templates_dir.as_deref(), &variables);

    if args.dry_run {
        for operation in processor.plan(&template.folders, &settings.root_dir)? {
            match operation {
                FileOperation::CreateDir { target } => {
                    println!("Would create folder: {}", target.display())
                }
                FileOperation::Write { target, .. } => {
                    println!("Would create file: {}", target.display())
                }
            }
        }
        return Ok(());
    }

    processor.materialize(&template.folders, &settings.root_dir)?;

    println!("Module generation complete in directory: {}", settings.root_dir.display());
    Ok(())
}
