use cmrb::bench::{Runner, WorkloadRegistry};
use cmrb::config::{self, EngineConfig, OutputFormat};
use cmrb::report::{ConsoleReporter, JsonReporter, Reporter, TuiReporter};
use cmrb::Result;

fn main() -> Result<()> {
    let mut config = EngineConfig::load().unwrap_or_else(|err| {
        eprintln!("Failed to load config: {}; using defaults.", err);
        EngineConfig::default()
    });

    // One positional argument: the worker thread count. Renderer flags
    // override the config file's output setting.
    let mut thread_arg: Option<String> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--plain" => config.output = OutputFormat::Plain,
            "--json" => config.output = OutputFormat::Json,
            "--tui" => config.output = OutputFormat::Tui,
            other => thread_arg = Some(other.to_string()),
        }
    }
    if thread_arg.is_some() {
        config.thread_count = config::parse_thread_count(thread_arg.as_deref());
    }
    config.validate()?;

    let registry = WorkloadRegistry::standard();

    match config.output {
        OutputFormat::Plain => {
            let reporter = ConsoleReporter::new(config.thread_count, registry.len());
            run_suite(config, &registry, reporter)
        }
        OutputFormat::Json => {
            let reporter = JsonReporter::new(config.thread_count);
            run_suite(config, &registry, reporter)
        }
        OutputFormat::Tui => {
            let reporter = TuiReporter::new(config.thread_count, &registry)?;
            run_suite(config, &registry, reporter)
        }
    }
}

fn run_suite<R: Reporter>(
    config: EngineConfig,
    registry: &WorkloadRegistry,
    reporter: R,
) -> Result<()> {
    let mut runner = Runner::new(config, reporter);
    runner.run_all(registry)?;
    Ok(())
}
