//! cssel CLI
//!
//! Parse CSS selectors and print their token structure.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cssel_common::warning::{clear_warnings, warn_once};
use cssel_selector::{ParseOptions, PseudoData, Selector, SelectorGroup, parse_with_warnings};
use owo_colors::OwoColorize;

/// cssel: inspect how CSS selectors are parsed
#[derive(Parser, Debug)]
#[command(name = "cssel")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Print the token tree of a selector
    cssel 'div.foo > [href^="http"]:not(.bar)'

    # Dump as JSON
    cssel --json 'a, b'

    # Keep tag and attribute case
    cssel --xml 'svg:not([viewBox])'

    # One selector per line from a file
    cssel --file selectors.txt
"#)]
struct Cli {
    /// Selectors to parse
    #[arg(value_name = "SELECTOR")]
    selectors: Vec<String>,

    /// Read selectors from a file, one per non-empty line
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print the parse result as JSON
    #[arg(short, long)]
    json: bool,

    /// Load parse options from a JSON file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// XML mode: keep the case of tag and attribute names by default
    #[arg(long)]
    xml: bool,

    /// Fold tag names to lowercase
    #[arg(long, value_name = "BOOL")]
    lower_case_tags: Option<bool>,

    /// Fold attribute names to lowercase
    #[arg(long, value_name = "BOOL")]
    lower_case_attribute_names: Option<bool>,
}

impl Cli {
    /// Resolve parse options: config file first, then command-line flags.
    fn options(&self) -> Result<ParseOptions> {
        let mut options = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config '{}'", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Invalid config '{}'", path.display()))?
            }
            None => ParseOptions::default(),
        };

        if self.xml {
            options.xml_mode = true;
        }
        if let Some(fold) = self.lower_case_tags {
            options = options.with_lower_case_tags(fold);
        }
        if let Some(fold) = self.lower_case_attribute_names {
            options = options.with_lower_case_attribute_names(fold);
        }
        Ok(options)
    }

    /// Collect inputs from positional arguments and `--file`.
    fn inputs(&self) -> Result<Vec<String>> {
        let mut inputs = self.selectors.clone();
        if let Some(path) = &self.file {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read '{}'", path.display()))?;
            inputs.extend(
                text.lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(str::to_string),
            );
        }
        Ok(inputs)
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let options = cli.options()?;
    let inputs = cli.inputs()?;

    if inputs.is_empty() {
        eprintln!("Error: no selectors given (pass SELECTOR arguments or --file)");
        return Ok(ExitCode::FAILURE);
    }

    let mut failed = false;
    for input in &inputs {
        clear_warnings();
        let result = parse_with_warnings(input, &options).map(|(groups, warnings)| {
            for warning in &warnings {
                warn_once("Selector", &warning.to_string());
            }
            groups
        });
        match result {
            Ok(groups) if cli.json => {
                println!("{}", serde_json::to_string_pretty(&groups)?);
            }
            Ok(groups) => {
                println!("{}", input.bold());
                print_groups(&groups, 1);
            }
            Err(err) => {
                failed = true;
                eprintln!("{input}");
                if let Some(offset) = err.offset(input) {
                    let column = input[..offset].chars().count();
                    eprintln!("{}{}", " ".repeat(column), "^".red());
                }
                eprintln!("{} {err}", "error:".red().bold());
            }
        }
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Print each group and its tokens, indenting nested selector lists.
fn print_groups(groups: &[SelectorGroup], indent: usize) {
    let prefix = "  ".repeat(indent);
    for (i, group) in groups.iter().enumerate() {
        println!("{prefix}{}", format!("group {i}").dimmed());
        for token in group {
            print_token(token, indent + 1);
        }
    }
}

fn print_token(token: &Selector, indent: usize) {
    let prefix = "  ".repeat(indent);
    match token {
        Selector::Tag { name } => println!("{prefix}tag {}", name.green()),
        Selector::Universal => println!("{prefix}universal"),
        Selector::Attribute {
            name,
            action,
            value,
            ignore_case,
        } => {
            let flag = if *ignore_case { " (ignore case)" } else { "" };
            println!(
                "{prefix}attribute {} {} {value:?}{flag}",
                name.cyan(),
                action.as_ref().yellow()
            );
        }
        Selector::Pseudo { name, data } => match data {
            None => println!("{prefix}pseudo {}", name.magenta()),
            Some(PseudoData::Raw(raw)) => {
                println!("{prefix}pseudo {} {raw:?}", name.magenta());
            }
            Some(PseudoData::Selectors(nested)) => {
                println!("{prefix}pseudo {}", name.magenta());
                print_groups(nested, indent + 1);
            }
        },
        Selector::PseudoElement { name } => {
            println!("{prefix}pseudo-element {}", name.magenta());
        }
        Selector::Traversal { kind } => println!("{prefix}{}", kind.as_ref().blue()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli =
            Cli::try_parse_from(["cssel", "--xml", "--lower-case-tags", "true", "A"]).unwrap();
        let options = cli.options().unwrap();
        assert!(options.xml_mode);
        assert!(options.folds_tags());
        assert!(!options.folds_attribute_names());
        assert_eq!(cli.inputs().unwrap(), vec!["A".to_string()]);
    }

    #[test]
    fn test_default_options() {
        let cli = Cli::try_parse_from(["cssel", "--json", "a", "b"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.options().unwrap(), ParseOptions::default());
        assert_eq!(cli.selectors, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let cli =
            Cli::try_parse_from(["cssel", "--config", "/nonexistent/opts.json", "a"]).unwrap();
        assert!(cli.options().is_err());
    }
}
