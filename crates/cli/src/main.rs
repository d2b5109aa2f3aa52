use std::process::ExitCode;

fn main() -> ExitCode {
    esquadria_cli::run()
}
