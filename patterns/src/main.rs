//! CLI for the pattern catalog
//!
//! ```bash
//! # Explore the catalog
//! patterns list
//! patterns run observer
//! patterns run --all
//!
//! # Drive the escalation chain directly
//! patterns submit --level 90 --content "bulk catering order"
//! patterns submit --level 5000 --content "acquisition offer" --config chain.toml --json
//! patterns submit --level 42 --content "odd ask" \
//!     --handler "Minsu:10:part-timer" --handler "Sujin:100"
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use patterns::demos;
use patterns::escalation::{ChainConfig, EscalationChain, Handler, Request};

#[derive(Parser, Debug)]
#[command(author, version, about = "Design pattern demonstrations and an escalation chain", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every registered demonstration
    List,
    /// Run one demonstration, or the whole catalog
    Run {
        /// Demonstration name, e.g. "escalation-chain"
        name: Option<String>,
        /// Run every demonstration in catalog order
        #[arg(long, default_value_t = false)]
        all: bool,
    },
    /// Submit one request against an escalation chain and print the decision trace
    Submit {
        /// Required capability level of the request
        #[arg(long)]
        level: u32,
        /// Descriptive request content
        #[arg(long)]
        content: String,
        /// TOML chain definition file (overrides the built-in staffing chain)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Inline handler spec `NAME:CAPABILITY[:ROLE]`, repeatable, in chain order
        #[arg(long = "handler")]
        handlers: Vec<String>,
        /// Print the decision trace as JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("patterns=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::List => list(),
        Command::Run { name, all } => run(name, all),
        Command::Submit {
            level,
            content,
            config,
            handlers,
            json,
        } => submit(level, &content, config, &handlers, json),
    }
}

fn list() -> Result<()> {
    for entry in demos::CATALOG {
        println!(
            "{:<18} {:<11} {}",
            entry.name,
            entry.category.to_string(),
            entry.summary
        );
    }
    Ok(())
}

fn run(name: Option<String>, all: bool) -> Result<()> {
    if all {
        for entry in demos::CATALOG {
            tracing::info!(demo = entry.name, "running demonstration");
            println!("== {} ({}) ==", entry.name, entry.category);
            for line in entry.run() {
                println!("{line}");
            }
            println!();
        }
        return Ok(());
    }

    let Some(name) = name else {
        bail!("pass a demonstration name or --all (see `list`)");
    };
    tracing::info!(demo = %name, "running demonstration");
    for line in demos::run(&name)? {
        println!("{line}");
    }
    Ok(())
}

fn submit(
    level: u32,
    content: &str,
    config: Option<PathBuf>,
    handler_specs: &[String],
    json: bool,
) -> Result<()> {
    let chain = build_chain(config, handler_specs)?;
    tracing::info!(handlers = chain.len(), level, "submitting request");

    let request = Request::new(content, level);
    let submission = chain.submit_traced(&request);

    if json {
        println!("{}", serde_json::to_string_pretty(&submission.trace)?);
    } else {
        println!("{}", submission.trace);
    }
    Ok(())
}

fn build_chain(config: Option<PathBuf>, handler_specs: &[String]) -> Result<EscalationChain> {
    match (config, handler_specs.is_empty()) {
        (Some(_), false) => bail!("--config and --handler are mutually exclusive"),
        (Some(path), true) => {
            let config = ChainConfig::load(&path)
                .with_context(|| format!("loading chain definition {}", path.display()))?;
            Ok(config.into_chain())
        }
        (None, false) => {
            let mut chain = EscalationChain::new();
            for spec in handler_specs {
                chain.push(parse_handler_spec(spec)?);
            }
            Ok(chain)
        }
        // No chain given — fall back to the demonstration staffing chain.
        (None, true) => Ok(demos::escalation::staffing_chain()),
    }
}

/// Parse `NAME:CAPABILITY[:ROLE]` into a handler.
fn parse_handler_spec(spec: &str) -> Result<Handler> {
    let mut parts = spec.splitn(3, ':');
    let name = parts.next().unwrap_or_default();
    if name.is_empty() {
        bail!("handler spec {spec:?} is missing a name");
    }
    let capability: u32 = parts
        .next()
        .with_context(|| format!("handler spec {spec:?} is missing a capability"))?
        .parse()
        .with_context(|| format!("handler spec {spec:?} has a non-numeric capability"))?;

    let mut handler = Handler::new(name, capability);
    if let Some(role) = parts.next() {
        handler = handler.with_role(role);
    }
    Ok(handler)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_and_capability() {
        let handler = parse_handler_spec("Sujin:100").unwrap();
        assert_eq!(handler.name, "Sujin");
        assert_eq!(handler.capability, 100);
        assert_eq!(handler.role, None);
    }

    #[test]
    fn parses_optional_role() {
        let handler = parse_handler_spec("Minsu:10:part-timer").unwrap();
        assert_eq!(handler.role.as_deref(), Some("part-timer"));
    }

    #[test]
    fn rejects_malformed_specs() {
        assert!(parse_handler_spec(":10").is_err());
        assert!(parse_handler_spec("Minsu").is_err());
        assert!(parse_handler_spec("Minsu:ten").is_err());
    }

    #[test]
    fn default_chain_is_the_staffing_ladder() {
        let chain = build_chain(None, &[]).unwrap();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.max_capability(), Some(1000));
    }

    #[test]
    fn config_and_inline_handlers_conflict() {
        let specs = vec!["Minsu:10".to_string()];
        assert!(build_chain(Some(PathBuf::from("chain.toml")), &specs).is_err());
    }
}
