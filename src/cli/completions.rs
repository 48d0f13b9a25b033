use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    deploycheck completions bash > ~/.bash_completion.d/deploycheck\n\n\
                  Generate zsh completions:\n    deploycheck completions zsh > ~/.zfunc/_deploycheck\n\n\
                  Generate fish completions:\n    deploycheck completions fish > ~/.config/fish/completions/deploycheck.fish\n\n\
                  Generate PowerShell completions:\n    deploycheck completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
