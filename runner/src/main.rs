use std::fmt;
use std::process::ExitCode;

use cpu_scheduler::{AlgorithmKind, ConfigError, DispatchError};

mod driver;
mod logger;
mod workload;

use driver::Driver;
use workload::{Workload, WorkloadError};

const USAGE: &str = "usage: sim-runner [--algorithm <fcfs|srtf|rr|pp>] [--quantum <q>] [-v...] <workload.json>";

#[derive(Debug)]
enum RunnerError {
    Usage(String),
    Io(std::io::Error),
    Workload(WorkloadError),
    Config(ConfigError),
    Dispatch(DispatchError),
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunnerError::Usage(msg) => write!(f, "{}\n{}", msg, USAGE),
            RunnerError::Io(err) => write!(f, "cannot read workload: {}", err),
            RunnerError::Workload(err) => write!(f, "invalid workload: {}", err),
            RunnerError::Config(err) => write!(f, "invalid configuration: {}", err),
            RunnerError::Dispatch(err) => write!(f, "simulation failed: {}", err),
        }
    }
}

impl From<std::io::Error> for RunnerError {
    fn from(err: std::io::Error) -> Self {
        RunnerError::Io(err)
    }
}

impl From<WorkloadError> for RunnerError {
    fn from(err: WorkloadError) -> Self {
        RunnerError::Workload(err)
    }
}

impl From<ConfigError> for RunnerError {
    fn from(err: ConfigError) -> Self {
        RunnerError::Config(err)
    }
}

impl From<DispatchError> for RunnerError {
    fn from(err: DispatchError) -> Self {
        RunnerError::Dispatch(err)
    }
}

/// Command line options
#[derive(Debug, Default, PartialEq)]
struct Options {
    algorithm: Option<AlgorithmKind>,
    quantum: Option<f32>,
    verbosity: u8,
    path: String,
}

impl Options {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Result<Options, RunnerError> {
        let mut options = Options::default();
        let mut path: Option<String> = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-a" | "--algorithm" => {
                    let name = args
                        .next()
                        .ok_or_else(|| RunnerError::Usage(format!("{} needs a value", arg)))?;
                    options.algorithm = Some(name.parse()?);
                }
                "-q" | "--quantum" => {
                    let value = args
                        .next()
                        .ok_or_else(|| RunnerError::Usage(format!("{} needs a value", arg)))?;
                    let quantum = value
                        .parse::<f32>()
                        .map_err(|_| RunnerError::Usage(format!("bad quantum `{}`", value)))?;
                    options.quantum = Some(quantum);
                }
                flag if flag.len() > 1 && flag[1..].chars().all(|c| c == 'v') => {
                    let count = u8::try_from(flag.len() - 1).unwrap_or(u8::MAX);
                    options.verbosity = options.verbosity.saturating_add(count);
                }
                other if other.starts_with('-') => {
                    return Err(RunnerError::Usage(format!("unknown option `{}`", other)));
                }
                other => path = Some(other.to_string()),
            }
        }

        options.path = path.ok_or_else(|| RunnerError::Usage("missing workload file".to_string()))?;
        Ok(options)
    }

    /// Applies command line overrides on top of the workload's own config
    fn apply(&self, workload: &mut Workload) {
        if let Some(algorithm) = self.algorithm {
            workload.scheduler.algorithm = algorithm;
        }
        if let Some(quantum) = self.quantum {
            workload.scheduler.quantum = Some(quantum);
        }
    }
}

fn run(options: &Options) -> Result<(), RunnerError> {
    let text = std::fs::read_to_string(&options.path)?;
    let mut workload = Workload::from_json(&text)?;
    options.apply(&mut workload);

    let policy = workload.scheduler.policy()?;
    log::info!("{} on {}", policy.kind(), options.path);

    let report = Driver::new(policy, workload.processes)?.run()?;
    println!("{}", report);

    Ok(())
}

fn main() -> ExitCode {
    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(2);
        }
    };

    if let Err(err) = logger::init(options.verbosity) {
        eprintln!("cannot install logger: {}", err);
    }

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
