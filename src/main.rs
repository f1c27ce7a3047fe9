// Standard Library Imports
use std::{env, io, path::PathBuf, sync::LazyLock, time::Instant};

// External Crate Imports
use clap::{ArgAction, Parser};
use deletions::{Progress, Stage};
use indicatif::{ProgressBar, ProgressStyle};
use miette::{Context, IntoDiagnostic, Result};
use oligochem::{AdductDatabase, MAX_DECIMAL_PLACES, MonomerDatabase};
use sequence_deletions::calculate;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static MONOMER_DB: LazyLock<MonomerDatabase> = LazyLock::new(MonomerDatabase::default);
static ADDUCT_DB: LazyLock<AdductDatabase> = LazyLock::new(AdductDatabase::default);

const PROGRESS_TEMPLATE: &str = "{msg:<30} [{elapsed_precise}] {wide_bar} {pos}/{len}";

/// Calculates the monoisotopic mass and adduct m/z values of every unique deletion product of a sequence
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The sequence to delete from, as single-letter codes and / or monomer aliases (e.g. "AyB" or "Ala Tyr B")
    #[arg(short, long = "input", value_name = "SEQUENCE")]
    input_sequence: String,
    /// How many decimal places to round masses and m/z values to, from 0 to 28 (fractions like 3.0 are truncated)
    #[arg(
        short,
        long = "decimal",
        value_name = "N",
        default_value_t = 3,
        value_parser = parse_decimal_points
    )]
    decimal_points: u32,
    /// The directory the report is written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,
    /// Log verbosity (-v info, -vv debug, -vvv trace), unless overridden by `RUST_LOG`
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let start = Instant::now();
    let args = Args::parse();
    init_tracing(args.verbose);

    let path = run(&args, ProgressBars::new()?)?;
    info!(path = %path.display(), "wrote report");

    println!(
        "Completed sequence deletion calculator in {:.2} seconds",
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Writes the report for `args`, returning its path. Nothing is written if the sequence is invalid.
fn run(args: &Args, progress: impl Progress) -> Result<PathBuf> {
    let report = calculate(
        &MONOMER_DB,
        &ADDUCT_DB,
        &args.input_sequence,
        args.decimal_points,
        progress,
    )
    .map_err(|error| *error)?;

    report
        .write_to(&args.output_dir)
        .into_diagnostic()
        .wrap_err_with(|| {
            format!("failed to write a report to {}", args.output_dir.display())
        })
}

fn init_tracing(verbose: u8) {
    let directives = env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(env_filter(verbose, &directives))
        .init();
}

// NOTE: The `-v` level is only a default, so any directives (like those from `RUST_LOG`) replace it entirely
fn env_filter(verbose: u8, directives: &str) -> EnvFilter {
    let verbosity = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    EnvFilter::builder()
        .with_default_directive(verbosity.into())
        .parse_lossy(directives)
}

fn parse_decimal_points(arg: &str) -> Result<u32, String> {
    let value: f64 = arg.parse().map_err(|_| format!("{arg:?} is not a number"))?;
    let places = value.trunc();
    if !(0.0..=f64::from(MAX_DECIMAL_PLACES)).contains(&places) {
        return Err(format!("must be between 0 and {MAX_DECIMAL_PLACES}"));
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let places = places as u32;
    Ok(places)
}

/// Draws one progress bar per `Stage` on stderr
struct ProgressBars {
    style: ProgressStyle,
    bar: Option<ProgressBar>,
}

impl ProgressBars {
    fn new() -> Result<Self> {
        let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
            .into_diagnostic()?;
        Ok(Self { style, bar: None })
    }
}

impl Progress for ProgressBars {
    fn start(&mut self, stage: Stage, total: u64) {
        let bar = ProgressBar::new(total)
            .with_style(self.style.clone())
            .with_message(stage.to_string());
        self.bar = Some(bar);
    }

    fn advance(&mut self, _stage: Stage, completed: u64) {
        if let Some(bar) = &self.bar {
            bar.set_position(completed);
        }
    }

    fn finish(&mut self, _stage: Stage) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, iter, process};

    use oligochem::OligochemError;
    use tracing::level_filters::LevelFilter;

    use super::*;

    fn args(argv: &[&str]) -> Args {
        let argv = iter::once("sequence-deletions").chain(argv.iter().copied());
        Args::try_parse_from(argv).unwrap()
    }

    fn output_dir(name: &str) -> PathBuf {
        let name = format!("sequence-deletions-{name}-{}", process::id());
        let dir = env::temp_dir().join(name);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn default_arguments() {
        let args = args(&["-i", "Ala B Tyr"]);
        assert_eq!(args.input_sequence, "Ala B Tyr");
        assert_eq!(args.decimal_points, 3);
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn decimal_points() {
        assert_eq!(args(&["-i", "AyB", "-d", "5"]).decimal_points, 5);
        assert_eq!(args(&["-i", "AyB", "-d", "3.0"]).decimal_points, 3);
        assert_eq!(args(&["-i", "AyB", "--decimal", "2.9"]).decimal_points, 2);
        assert_eq!(args(&["-i", "AyB", "-d", "0"]).decimal_points, 0);
        assert_eq!(args(&["-i", "AyB", "-d", "28"]).decimal_points, 28);

        for bad in ["29", "40", "abc", "NaN", "inf"] {
            let parsed = Args::try_parse_from(["sequence-deletions", "-i", "AyB", "-d", bad]);
            assert!(parsed.is_err(), "{bad:?}");
        }
        assert!(parse_decimal_points("-1").is_err());
        assert_eq!(parse_decimal_points("-0.5"), Ok(0));
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(env_filter(0, "").max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(env_filter(1, "").max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(env_filter(2, "").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(env_filter(3, "").max_level_hint(), Some(LevelFilter::TRACE));
        assert_eq!(env_filter(9, "").max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn directives_override_verbosity() {
        assert_eq!(
            env_filter(0, "debug").max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            env_filter(3, "error").max_level_hint(),
            Some(LevelFilter::ERROR)
        );
        assert_eq!(
            env_filter(0, "oligochem=debug").max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn writes_report() {
        let dir = output_dir("report");
        let args = args(&["-i", "Ala B Tyr", "-o", dir.to_str().unwrap()]);

        let path = run(&args, ()).unwrap();
        assert_eq!(path, dir.join("ABY.txt"));
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().nth(1), Some("Missing 1 Ala 1 Abu 1 Tyr "));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn invalid_sequence_writes_nothing() {
        let dir = output_dir("invalid");
        let args = args(&["-i", "A Xyz", "-o", dir.to_str().unwrap()]);

        let error = run(&args, ()).unwrap_err();
        let error = error.downcast_ref::<OligochemError>();
        let Some(OligochemError::UnresolvedToken { token, .. }) = error else {
            panic!("expected an unresolved token, got {error:?}");
        };
        assert_eq!(token, "Xyz");
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unwritable_output_dir() {
        let dir = output_dir("unwritable");
        let missing = dir.join("missing");
        let args = args(&["-i", "AyB", "-o", missing.to_str().unwrap()]);

        let error = run(&args, ()).unwrap_err();
        assert!(error.to_string().starts_with("failed to write a report to"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
