//! Shell completions command

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::{DeployCheckError, Result};

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell = parse_shell(&args.shell)?;

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "deploycheck", &mut std::io::stdout().lock());

    Ok(())
}

fn parse_shell(name: &str) -> Result<clap_complete::Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(clap_complete::Shell::Bash),
        "elvish" => Ok(clap_complete::Shell::Elvish),
        "fish" => Ok(clap_complete::Shell::Fish),
        "powershell" | "pwsh" => Ok(clap_complete::Shell::PowerShell),
        "zsh" => Ok(clap_complete::Shell::Zsh),
        _ => Err(DeployCheckError::UnsupportedShell {
            shell: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_bash() {
        let args = CompletionsArgs {
            shell: "bash".to_string(),
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn test_completions_zsh() {
        let args = CompletionsArgs {
            shell: "zsh".to_string(),
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn test_parse_shell_aliases_and_case() {
        assert_eq!(parse_shell("pwsh").unwrap(), clap_complete::Shell::PowerShell);
        assert_eq!(parse_shell("BASH").unwrap(), clap_complete::Shell::Bash);
        assert_eq!(parse_shell("Fish").unwrap(), clap_complete::Shell::Fish);
    }

    #[test]
    fn test_unknown_shell() {
        assert!(matches!(
            parse_shell("tcsh"),
            Err(DeployCheckError::UnsupportedShell { .. })
        ));
    }
}
