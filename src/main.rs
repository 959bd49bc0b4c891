use clap::Parser;
use tfstate2hcl::{
    cli::Cli,
    config::Config,
    fmt::FmtRunner,
    logging::init_logging,
    render::{ExclusionFilter, OutputWriter, ResourceBlockBuilder},
    state::{StateParser, find_state_files},
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color);

    let config = Config::from_cli(cli)?;

    log::debug!("Configuration: {:?}", config);

    let state_files = find_state_files(&config.working_dir)?;

    if state_files.is_empty() {
        log::info!("No state files found, nothing to generate");
        return Ok(());
    }

    let filter = ExclusionFilter::default();
    let builder = ResourceBlockBuilder::new(&filter, config.label_style);
    let writer = OutputWriter::new(config.output_dir.clone());

    // Old generated files must not survive a re-run
    writer.clear_stale()?;

    for path in &state_files {
        log::debug!("Transforming {}", path.display());

        let state = StateParser::parse_file(path)?;
        let bundle = builder.build(&state)?;

        // Echo the generated text so a run without file inspection still
        // shows what was produced
        for (_, text) in bundle.iter() {
            println!("{}", text);
        }

        writer.write(&bundle)?;
    }

    if config.skip_fmt {
        log::info!("Skipping terraform fmt");
        return Ok(());
    }

    // A missing terraform binary only degrades the output formatting; the
    // generated files are already complete at this point
    match FmtRunner::new() {
        Ok(runner) => runner.fmt(writer.output_dir())?,
        Err(e) => log::warn!("{}", e),
    }

    Ok(())
}
