//! Implementation of the `crudgen make` command.
//!
//! Responsibility: collect the model name and the four confirmations, drive
//! the core scaffold service one artifact step at a time, and display results.
//! No scaffolding logic lives here.
//!
//! The run is linear and non-resumable: steps the user declines are simply
//! omitted, and a partial run is a complete, valid run.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crudgen_adapters::{ArtisanGenerator, LocalFilesystem};
use crudgen_core::{
    application::ScaffoldService,
    domain::{
        ModelName, NameVariants, ProjectLayout, RequestKind, ScaffoldReport,
    },
};

use crate::{
    cli::{MakeArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `crudgen make` command.
///
/// Dispatch sequence:
/// 1. Resolve the model name (argument or interactive prompt)
/// 2. Derive the naming variants once
/// 3. Early-exit if `--dry-run`
/// 4. Walk the artifact steps, confirming the optional ones
/// 5. Print the "things to be done" report
#[instrument(skip_all)]
pub fn execute(
    args: MakeArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve the model name
    let raw = match &args.name {
        Some(name) => name.clone(),
        None => prompt_model_name()?,
    };
    let model = ModelName::parse(&raw).map_err(|e| CliError::Core(e.into()))?;
    let variants = NameVariants::derive(&model);

    debug!(
        model = %variants.singular(),
        studly = %variants.studly(),
        route = %variants.kebab_plural(),
        "model name resolved"
    );

    // 2. Resolve the target layout
    let project_root = args
        .project_root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let layout = ProjectLayout::new(
        project_root.join(&config.paths.app),
        project_root.join(&config.paths.tests),
    );

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        return dry_run(&layout, &variants, &output);
    }

    // 4. Build the service with production adapters and walk the steps.
    let filesystem = Box::new(LocalFilesystem::new());
    let generator = Box::new(
        ArtisanGenerator::new(&project_root).with_php_binary(&config.generator.php_binary),
    );
    let service = ScaffoldService::new(layout, filesystem, generator);

    output.header(&format!("Scaffolding '{}'", variants.studly()))?;
    info!(model = %variants.studly(), "make started");

    let mut report = ScaffoldReport::new();

    output.info("Creating migration and model ...")?;
    report.merge(service.emit_model(&variants)?);
    output.success("Migration and model created")?;

    output.info("Creating controller ...")?;
    let step = service.emit_controller(&variants)?;
    print_skips(&output, &step)?;
    report.merge(step);
    output.success("Controller created")?;

    if confirm(&args, &global, "Do you wish to customise the requests?")? {
        output.info("Creating requests ...")?;
        let step = service.emit_requests(&variants)?;
        print_skips(&output, &step)?;
        report.merge(step);
        output.success("Requests created")?;
    }

    if confirm(&args, &global, "Do you wish to customise the resource?")? {
        output.info("Creating resource ...")?;
        let step = service.emit_resource(&variants)?;
        print_skips(&output, &step)?;
        report.merge(step);
        output.success("Resource created")?;
    }

    if confirm(&args, &global, "Do you wish to create a factory?")? {
        output.info("Creating factory ...")?;
        report.merge(service.emit_factory(&variants)?);
        output.success("Factory created")?;
    }

    output.info("Creating swagger documentation ...")?;
    report.merge(service.emit_doc_stub(&variants)?);
    output.success("Swagger documentation created")?;

    if confirm(&args, &global, "Do you wish to create tests?")? {
        output.info("Creating tests ...")?;
        let step = service.emit_tests(&variants)?;
        print_skips(&output, &step)?;
        report.merge(step);
        output.success("Tests created")?;
    }

    report.pending.push(service.route_reminder(&variants));

    info!(
        created = report.created.len(),
        skipped = report.skipped.len(),
        "make finished"
    );

    // 5. Final report
    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| CliError::IoError {
            message: "failed to serialize report".into(),
            source: std::io::Error::other(e),
        })?;
        output.print(&json)?;
        return Ok(());
    }

    output.print("")?;
    let rows: Vec<(String, String)> = report
        .pending
        .iter()
        .map(|p| (p.description.clone(), p.target.clone()))
        .collect();
    output.table(("Things to be done", "Files"), &rows)?;

    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

/// Print one skip line per existing target path.
fn print_skips(output: &OutputManager, step: &ScaffoldReport) -> CliResult<()> {
    for path in &step.skipped {
        output.error(&format!(
            "File {} already exists (skipped)",
            path.display()
        ))?;
    }
    Ok(())
}

/// Describe the run without touching the filesystem or the generators.
fn dry_run(
    layout: &ProjectLayout,
    variants: &NameVariants,
    output: &OutputManager,
) -> CliResult<()> {
    output.info(&format!(
        "Dry run: scaffolding '{}' would write:",
        variants.studly()
    ))?;

    output.print(&format!("  {}", layout.controller_path(variants).display()))?;
    for kind in RequestKind::ALL {
        output.print(&format!(
            "  {}",
            layout.request_path(kind, variants).display()
        ))?;
    }
    for kind in RequestKind::TESTED {
        output.print(&format!(
            "  {}",
            layout.request_test_write_path(kind, variants).display()
        ))?;
    }
    output.print(&format!("  {}", layout.crud_test_path(variants).display()))?;

    output.print("")?;
    output.info("and invoke:")?;
    output.print(&format!("  make:model {} -m", variants.studly()))?;
    output.print(&format!("  make:resource {}Resource", variants.studly()))?;
    output.print(&format!(
        "  make:factory {0}Factory --model={0}",
        variants.studly()
    ))?;
    output.print(&format!("  make:annotation {}", variants.studly()))?;

    Ok(())
}

/// Ask the user for the model name.
#[cfg(feature = "interactive")]
fn prompt_model_name() -> CliResult<String> {
    dialoguer::Input::<String>::new()
        .with_prompt("What model do you want to create?")
        .interact_text()
        .map_err(|e| CliError::Prompt {
            message: e.to_string(),
        })
}

#[cfg(not(feature = "interactive"))]
fn prompt_model_name() -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

/// One yes/no confirmation, defaulting to yes.
///
/// `--yes` and `--quiet` both short-circuit to yes so scripted runs never
/// block on a prompt.
#[cfg(feature = "interactive")]
fn confirm(args: &MakeArgs, global: &GlobalArgs, prompt: &str) -> CliResult<bool> {
    if args.yes || global.quiet {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(true)
        .interact()
        .map_err(|e| CliError::Prompt {
            message: e.to_string(),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm(args: &MakeArgs, global: &GlobalArgs, _prompt: &str) -> CliResult<bool> {
    if args.yes || global.quiet {
        return Ok(true);
    }
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
