//! Copy command implementation
//!
//! Builds a copy job from CLI arguments, or from a job file when no source
//! pattern is given, then plans and executes the copy:
//! 1. Build the job (arguments, or job file with flag/environment fill-in)
//! 2. Validate and resolve the source pattern to one file
//! 3. Determine the destination (explicit, or derived under the cache dir)
//! 4. Copy once, overwriting whatever is at the destination

use console::Style;

use crate::cli::CopyArgs;
use crate::copier;
use crate::error::Result;
use crate::job::CopyJob;

/// Run the copy command
pub fn run(args: CopyArgs, verbose: bool) -> Result<()> {
    let job = build_job(&args)?;
    let plan = copier::plan(&job)?;

    for ignored in &plan.skipped {
        eprintln!(
            "Warning: multiple packages match, ignoring {}",
            ignored.display()
        );
    }

    if verbose {
        println!("Resolved source: {}", plan.source.display());
        println!("Destination: {}", plan.dest.display());
    }

    if args.dry_run {
        println!(
            "{} {} -> {}",
            Style::new().bold().apply_to("Would copy"),
            plan.source.display(),
            plan.dest.display()
        );
        return Ok(());
    }

    plan.execute()?;

    println!(
        "{} {} -> {}",
        Style::new().bold().green().apply_to("Copied"),
        plan.source.display(),
        plan.dest.display()
    );

    Ok(())
}

/// Build the job from arguments, falling back to the job file
///
/// A source argument wins over the job file. Flags (and the
/// PKGCOPY_CACHE_DIR environment, via clap) fill in whatever the job file
/// leaves open, matching how a pipeline supplies the cache dir from outside
/// the job itself.
fn build_job(args: &CopyArgs) -> Result<CopyJob> {
    let mut job = match &args.source {
        Some(source) => CopyJob {
            source_pkg: Some(source.clone()),
            ..CopyJob::default()
        },
        None => CopyJob::load(&args.job)?,
    };

    if job.pkg_path.is_none() {
        job.pkg_path = args.to.clone();
    }
    if job.cache_dir.is_none() {
        job.cache_dir = args.cache_dir.clone();
    }

    Ok(job)
}
