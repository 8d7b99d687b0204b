use clap::Parser;
use formforge::cli::commands::{cmd_convert, cmd_inspect};
use formforge::cli::config::{load_config, Cli, Commands};
use formforge::trace::logger::TraceLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    let tracer = match cli.trace.as_deref() {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    match cli.command {
        Commands::Convert {
            url,
            input,
            title,
            theme_color,
            output_dir,
        } => {
            // Resolve presentation settings: CLI > config > defaults
            let theme = theme_color.as_deref().unwrap_or(&config.convert.theme_color);
            let out_dir = output_dir.as_deref().unwrap_or(&config.convert.output_dir);

            cmd_convert(
                url.as_deref(),
                input.as_deref(),
                title.as_deref(),
                theme,
                out_dir,
                cli.verbose,
                &tracer,
            )?;
        }
        Commands::Inspect { url, input, format } => {
            let format = format.as_deref().unwrap_or(&config.inspect.format);
            cmd_inspect(url.as_deref(), input.as_deref(), format, &tracer)?;
        }
    }

    Ok(())
}
