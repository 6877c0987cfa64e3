//! The grammar validator's entry routine: argument handling and dispatch

use std::io::Write;
use std::path::Path;

use clap::Parser;
use tracing::{debug, info, warn};

use crate::cli::{Args, OutputFormat, Shell};
use crate::config::Config;
use crate::context::Environment;
use crate::errors::{GrammarError, Result};
use crate::grammar::{DerivationLimits, Grammar, GrammarType};
use crate::input::{GrammarFile, Session};
use crate::output::{write_classification, write_derivation, Report};
use crate::status::ExitStatus;

/// Main entry routine of the packaged program.
///
/// Handles argument parsing and default options, then reads a grammar
/// from a file or interactively and reports on it.
pub fn run(args: Vec<String>, mut env: Environment) -> ExitStatus {
    if let Some(name) = args.first() {
        if let Some(basename) = Path::new(name).file_stem() {
            env.program_name = basename.to_string_lossy().to_string();
        }
    }

    let merged_args = merge_default_options(args, &env.config);

    let debug = merged_args.iter().any(|a| a == "--debug");
    let traceback = merged_args.iter().any(|a| a == "--traceback") || debug;

    let parsed = match Args::try_parse_from(&merged_args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    if let Some(shell) = parsed.generate_completions {
        generate_completions(shell, &env.program_name);
        return ExitStatus::Success;
    }

    match program(parsed, &env) {
        Ok(status) => status,
        Err(e) => handle_error(e, traceback),
    }
}

pub fn program(args: Args, env: &Environment) -> Result<ExitStatus> {
    if args.debug {
        eprintln!("Debug: {:?}", args);
    }

    let limits = derivation_limits(&args, &env.config);
    debug!(max_depth = limits.max_depth, max_states = limits.max_states, "Derivation limits");

    match &args.grammar_file {
        Some(path) => run_file(&args, env, path, limits),
        None => run_interactive(&args, env, limits),
    }
}

fn run_file(args: &Args, env: &Environment, path: &Path, limits: DerivationLimits) -> Result<ExitStatus> {
    let grammar = GrammarFile::load(path)?.into_grammar()?;
    info!(path = %path.display(), rules = grammar.rules().count(), "Loaded grammar file");

    let grammar_type = grammar.classify();
    let mut out = &env.stdout;
    if args.format == OutputFormat::Text {
        write_classification(&mut out, &grammar, grammar_type)?;
    }

    finish(args, &mut out, &grammar, grammar_type, args.derive.as_deref(), limits)
}

fn run_interactive(args: &Args, env: &Environment, limits: DerivationLimits) -> Result<ExitStatus> {
    // Keep stdout clean for the JSON document
    let prompts: Box<dyn Write + '_> = match args.format {
        OutputFormat::Text => Box::new(&env.stdout),
        OutputFormat::Json => Box::new(&env.stderr),
    };
    let mut session = Session::new(env.stdin.lock(), prompts, &env.stderr);

    let grammar = session.read_grammar()?;
    let grammar_type = grammar.classify();

    let mut out = &env.stdout;
    if args.format == OutputFormat::Text {
        write_classification(&mut out, &grammar, grammar_type)?;
    }

    let target = match &args.derive {
        Some(target) => Some(target.clone()),
        None => session.read_target()?,
    };

    finish(args, &mut out, &grammar, grammar_type, target.as_deref(), limits)
}

/// Run the derivation search (if there is a target) and emit the rest of the report
fn finish<W: Write>(
    args: &Args,
    out: &mut W,
    grammar: &Grammar,
    grammar_type: GrammarType,
    target: Option<&str>,
    limits: DerivationLimits,
) -> Result<ExitStatus> {
    let derivation = target.map(|target| (target, grammar.derive(target, limits)));

    match args.format {
        OutputFormat::Text => {
            if let Some((target, outcome)) = &derivation {
                write_derivation(out, target, outcome)?;
            }
        }
        OutputFormat::Json => {
            let mut report = Report::new(grammar, grammar_type);
            if let Some((target, outcome)) = &derivation {
                report = report.with_derivation(target, outcome);
            }
            report.write_json(out)?;
        }
    }

    Ok(match &derivation {
        Some((_, outcome)) => ExitStatus::from_derivation(outcome, args.check_derivation),
        None => ExitStatus::Success,
    })
}

/// Command-line limits win over the config file
fn derivation_limits(args: &Args, config: &Config) -> DerivationLimits {
    let mut limits = config.limits;
    if let Some(depth) = args.max_depth {
        limits.max_depth = usize::try_from(depth).unwrap_or(usize::MAX);
    }
    if let Some(states) = args.max_states {
        limits.max_states = usize::try_from(states).unwrap_or(usize::MAX);
    }
    limits
}

/// Prepend `[defaults] options` flags right after the program name
fn merge_default_options(args: Vec<String>, config: &Config) -> Vec<String> {
    if config.default_options.is_empty() {
        return args;
    }

    let (flags, positional): (Vec<_>, Vec<_>) = config
        .default_options
        .iter()
        .partition(|opt| opt.starts_with('-'));

    if !positional.is_empty() {
        warn!(
            "Positional arguments in default_options are ignored: {:?}. Only flags (starting with -) can be used in default_options.",
            positional
        );
    }

    if flags.is_empty() {
        return args;
    }

    let mut merged = Vec::with_capacity(args.len() + flags.len());

    if let Some(program) = args.first() {
        merged.push(program.clone());
    }

    merged.extend(flags.into_iter().cloned());
    merged.extend(args.into_iter().skip(1));

    merged
}

fn handle_error(error: GrammarError, traceback: bool) -> ExitStatus {
    if traceback {
        eprintln!("Error: {:?}", error);
    } else {
        eprintln!("Error: {}", error);
    }

    ExitStatus::Error
}

fn generate_completions(shell: Shell, bin_name: &str) {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as ClapShell};

    let mut cmd = Args::command();
    let shell = match shell {
        Shell::Bash => ClapShell::Bash,
        Shell::Zsh => ClapShell::Zsh,
        Shell::Fish => ClapShell::Fish,
        Shell::PowerShell => ClapShell::PowerShell,
        Shell::Elvish => ClapShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}
