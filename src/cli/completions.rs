use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    docguard completions bash > ~/.bash_completion.d/docguard\n\n\
                  Generate zsh completions:\n    docguard completions zsh > ~/.zfunc/_docguard\n\n\
                  Generate fish completions:\n    docguard completions fish > ~/.config/fish/completions/docguard.fish\n\n\
                  Generate PowerShell completions:\n    docguard completions powershell")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
