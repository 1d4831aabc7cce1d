use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    evm-bootstrap completions bash > ~/.bash_completion.d/evm-bootstrap\n\n\
                  Generate zsh completions:\n    evm-bootstrap completions zsh > ~/.zfunc/_evm-bootstrap\n\n\
                  Generate fish completions:\n    evm-bootstrap completions fish > ~/.config/fish/completions/evm-bootstrap.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
