// SPDX-License-Identifier: PMPL-1.0-or-later

//! locale-in-detail: show what the host reports for locale, calendar and
//! language preferences, described in the language of a resource bundle.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use locale_in_detail::bundle::BundleResolver;
use locale_in_detail::console::{Console, ConsoleFormat};
use locale_in_detail::diagnostics;
use locale_in_detail::i18n;
use locale_in_detail::inspect;
use locale_in_detail::provider::SystemLocaleProvider;
use locale_in_detail::session::Session;
use locale_in_detail::types::BASE_LANGUAGE;
use locale_in_detail::InspectionAction;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "locale-in-detail")]
#[command(version)]
#[command(about = "Inspect host locale, calendar and language preferences")]
#[command(long_about = None)]
struct Cli {
    /// Main bundle directory holding the <code>.lproj localizations
    #[arg(
        long,
        global = true,
        env = "LOCALE_IN_DETAIL_BUNDLE_ROOT",
        default_value = "resources"
    )]
    bundle_root: PathBuf,

    /// Language of descriptions (default: Base)
    #[arg(short, long, global = true, env = "LOCALE_IN_DETAIL_LANG")]
    lang: Option<String>,

    /// Language of the console header
    #[arg(
        long,
        global = true,
        env = "LOCALE_IN_DETAIL_CONSOLE_LANG",
        default_value = "ja"
    )]
    console_lang: String,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the inspection actions
    Actions,

    /// Run inspection actions and print the console
    Inspect {
        /// Actions to run, in order (default: all)
        #[arg(value_enum, value_name = "ACTION")]
        actions: Vec<InspectionAction>,

        /// Write the console to a file
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Export format (default: from the file extension, else json)
        #[arg(short, long, value_enum)]
        format: Option<ConsoleFormat>,
    },

    /// Show how a language code resolves to a bundle
    Bundle {
        /// Language code (default: Base)
        #[arg(value_name = "CODE")]
        code: Option<String>,
    },

    /// Interactive console reading commands from stdin
    Console,

    /// Check the bundle layout and locale environment
    Doctor,
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default = if verbose {
        "locale_in_detail=debug"
    } else {
        "locale_in_detail=warn"
    };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;
    if cli.no_color {
        colored::control::set_override(false);
    }

    let resolver = BundleResolver::new(&cli.bundle_root);
    let bundle = resolver.resolve(cli.lang.as_deref());
    let console_bundle = resolver.resolve(Some(cli.console_lang.as_str()));
    debug!(root = %cli.bundle_root.display(), bundle = ?bundle.kind, "bundles resolved");

    match cli.command {
        Commands::Actions => {
            for action in InspectionAction::all() {
                let info = action.info();
                let c = info.color;
                println!(
                    "  {} {:26} {:36} {}",
                    "■".truecolor(c.r, c.g, c.b),
                    action.name(),
                    info.label.bold(),
                    bundle.localized_string(info.localization_key)
                );
            }
        }

        Commands::Inspect {
            actions,
            export,
            format,
        } => {
            let provider = SystemLocaleProvider::new(resolver.clone());
            let actions = if actions.is_empty() {
                InspectionAction::all().to_vec()
            } else {
                actions
            };

            let mut console = Console::new();
            for action in actions {
                console.append(inspect::inspect(action, &provider, &bundle));
            }
            console.print(&console_bundle)?;

            if let Some(path) = export {
                let format = format
                    .or_else(|| {
                        path.extension()
                            .and_then(|ext| ext.to_str())
                            .and_then(ConsoleFormat::parse)
                    })
                    .unwrap_or(ConsoleFormat::Json);
                let path = if path.extension().is_none() {
                    path.with_extension(format.extension())
                } else {
                    path
                };
                let content = format.serialize(&console)?;
                std::fs::write(&path, content)
                    .with_context(|| format!("writing {}", path.display()))?;
                info!(path = %path.display(), entries = console.len(), "console exported");
                println!("Console saved to: {}", path.display());
            }
        }

        Commands::Bundle { code } => {
            let requested = code.as_deref().unwrap_or(BASE_LANGUAGE);
            let resolved = resolver.resolve(code.as_deref());

            println!("Bundle resolution for: {}", requested.bold());
            match resolved.code() {
                Some(found) if found == requested => println!("  Result: {}.lproj", found),
                Some(found) => println!("  Result: {}.lproj {}", found, "(fallback)".yellow()),
                None => println!("  Result: main bundle {}", "(fallback)".yellow()),
            }
            println!("  Path: {}", resolved.path.display());
            println!("  Strings: {}", resolved.string_count());

            let available = resolver.localizations();
            if available.is_empty() {
                println!("  Localizations: none");
            } else {
                println!("  Localizations:");
                for code in &available {
                    match i18n::native_name(code) {
                        Some(native) => println!("    - {} ({})", code, native),
                        None => println!("    - {}", code),
                    }
                }
            }
        }

        Commands::Console => {
            let provider = SystemLocaleProvider::new(resolver.clone());
            let mut session = Session::new(&provider, &bundle, &console_bundle);
            let stdin = io::stdin();
            session.run(stdin.lock(), io::stdout())?;
        }

        Commands::Doctor => {
            let provider = SystemLocaleProvider::new(resolver.clone());
            diagnostics::run(&resolver, &provider)?;
        }
    }

    Ok(())
}
