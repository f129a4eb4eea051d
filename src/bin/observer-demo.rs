//! observer-demo - walks through the observable list scenarios
//!
//! Builds two lists, attaches a logging observer and a GUI refresh observer
//! to each, mutates them and reports what every list broadcast. Observer
//! log lines go to stderr (raise verbosity with `-v`); the report goes to
//! stdout.

use clap::{Parser, ValueEnum};
use observable_list::{
    ChangeEvent, GuiRefreshObserver, ListChangeLogger, ListError, NotifyPolicy, ObservableList,
    RecordingObserver, SubjectConfig,
};
use serde::Serialize;
use std::fmt::Display;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use tracing::{debug, error};

/// Observer pattern demonstration over observable lists
#[derive(Parser)]
#[command(name = "observer-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON file with subject settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Failure policy for broadcasts (overrides the config file)
    #[arg(short, long, value_enum)]
    policy: Option<PolicyArg>,

    /// Close the GUI view before mutating, so its observer fails
    #[arg(long)]
    close_gui: bool,
}

/// Output format for the report
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for programmatic use
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Stop the broadcast at the first failing observer
    Propagate,
    /// Notify every observer and report failures afterwards
    Isolate,
}

impl From<PolicyArg> for NotifyPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Propagate => NotifyPolicy::Propagate,
            PolicyArg::Isolate => NotifyPolicy::Isolate,
        }
    }
}

#[derive(Serialize)]
struct DemoReport {
    policy: NotifyPolicy,
    scenarios: Vec<ScenarioReport>,
}

#[derive(Serialize)]
struct ScenarioReport {
    name: String,
    initial: Vec<String>,
    contents: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    change: Option<ChangeEvent>,
    messages: Vec<String>,
    gui_refreshes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Observers shared by both scenarios
struct Observers {
    logger: Rc<ListChangeLogger>,
    gui: Rc<GuiRefreshObserver>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => match SubjectConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                error!(path = %path.display(), "Failed to load config");
                eprintln!("Error: {}", e);
                return ExitCode::from(2);
            }
        },
        None => SubjectConfig::default(),
    };
    if let Some(policy) = cli.policy {
        config.policy = policy.into();
    }
    debug!(policy = ?config.policy, "Using subject config");

    let observers = Observers {
        logger: Rc::new(ListChangeLogger::new("Observer1")),
        gui: Rc::new(GuiRefreshObserver::new("Observer2")),
    };
    if cli.close_gui {
        observers.gui.close();
    }

    let report = DemoReport {
        policy: config.policy,
        scenarios: vec![
            run_scenario(
                "append",
                &config,
                &observers,
                [1, 2, 3, 4, 5],
                |list| list.append(23),
            ),
            run_scenario(
                "slice",
                &config,
                &observers,
                "helloWorld!".chars(),
                |list| list.set_slice(5usize.., "John!".chars()),
            ),
        ],
    };

    if let Err(e) = output_report(cli.format, &report) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    if report.scenarios.iter().any(|s| s.error.is_some()) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Build a list, attach the observers plus a recorder, apply one mutation
fn run_scenario<T, F>(
    name: &str,
    config: &SubjectConfig,
    observers: &Observers,
    initial: impl IntoIterator<Item = T>,
    mutate: F,
) -> ScenarioReport
where
    T: Display,
    F: FnOnce(&mut ObservableList<T>) -> Result<(), ListError>,
{
    let recorder = Rc::new(RecordingObserver::new("recorder"));
    let mut list = ObservableList::with_config(initial, config);
    let initial = render(&list);
    let refreshes_before = observers.gui.refresh_count();

    list.attach(observers.logger.clone());
    list.attach(observers.gui.clone());
    list.attach(recorder.clone());

    let error = mutate(&mut list).err().map(|e| {
        error!(scenario = name, error = %e, "Mutation reported an error");
        e.to_string()
    });

    ScenarioReport {
        name: name.to_string(),
        initial,
        contents: render(&list),
        change: list.last_change().cloned(),
        messages: recorder.messages(),
        gui_refreshes: observers.gui.refresh_count() - refreshes_before,
        error,
    }
}

fn render<T: Display>(list: &ObservableList<T>) -> Vec<String> {
    list.iter().map(|item| item.to_string()).collect()
}

fn output_report(format: OutputFormat, report: &DemoReport) -> Result<(), String> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report)
                .map_err(|e| format!("Failed to serialize report: {}", e))?;
            println!("{}", json);
        }
        OutputFormat::Text => print_report(report),
    }
    Ok(())
}

/// Print the report as indented `key: value` lines
fn print_report(report: &DemoReport) {
    let policy = match report.policy {
        NotifyPolicy::Propagate => "propagate",
        NotifyPolicy::Isolate => "isolate",
    };
    println!("policy: {}", policy);

    for scenario in &report.scenarios {
        println!("{}:", scenario.name);
        println!("  initial: [{}]", scenario.initial.join(", "));
        println!("  contents: [{}]", scenario.contents.join(", "));
        if let Some(change) = &scenario.change {
            println!("  change: {} ({})", change.event_type(), change);
        }
        println!("  messages:");
        for message in &scenario.messages {
            println!("    - {}", message);
        }
        println!("  gui_refreshes: {}", scenario.gui_refreshes);
        if let Some(error) = &scenario.error {
            println!("  error: {}", error);
        }
    }
}
