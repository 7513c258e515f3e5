use clap::Parser;
use wconn_cli::cli::Cli;
use wconn_cli::error::CliError;
use wconn_cli::output::{self, CommandResult, OutputFormat};
use wconn_cli::{commands, logging};

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	let format = cli.format;
	let command = cli.command.name();

	if let Err(err) = commands::dispatch(cli).await {
		handle_error(command, err, format);
		std::process::exit(1);
	}
}

fn handle_error(command: &'static str, err: CliError, format: OutputFormat) {
	let cmd_error = err.to_command_error();

	// Humans read stderr; agents read the envelope on stdout.
	output::print_error_stderr(&cmd_error);

	if format != OutputFormat::Text {
		CommandResult::<()>::failure(command, cmd_error).print(format);
	}
}
