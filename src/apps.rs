use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Parser, ValueEnum, error::ErrorKind};
use tracing::{debug, warn};

use crate::config::{CsvOptions, RunOptions, SessionConfig, SortKey, ViewerOptions};
use crate::constants::engine::BOGO_MAX_ATTEMPTS;
use crate::constants::ingestion::DATA_DIR_ENV;
use crate::constants::viewer::PAGE_SIZE;
use crate::data::FireRecord;
use crate::errors::SortError;
use crate::metrics::RunReport;
use crate::run::run_sort;
use crate::sorting::Algorithm;
use crate::source::{CsvFileSource, RecordSource};
use crate::transport::fs::{DatasetCatalog, discover_datasets};
use crate::utils::format_with_commas;
use crate::viewer::{PageViewer, TerminalPresenter, write_run_summary};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KeyArg {
    Region,
    Municipality,
    Biome,
    Timestamp,
}

impl From<KeyArg> for SortKey {
    fn from(value: KeyArg) -> Self {
        match value {
            KeyArg::Region => SortKey::Region,
            KeyArg::Municipality => SortKey::Municipality,
            KeyArg::Biome => SortKey::Biome,
            KeyArg::Timestamp => SortKey::Timestamp,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Bubble,
    Selection,
    Insertion,
    Shell,
    Merge,
    Quick,
    Heap,
    Bogo,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Bubble => Algorithm::Bubble,
            AlgorithmArg::Selection => Algorithm::Selection,
            AlgorithmArg::Insertion => Algorithm::Insertion,
            AlgorithmArg::Shell => Algorithm::Shell,
            AlgorithmArg::Merge => Algorithm::Merge,
            AlgorithmArg::Quick => Algorithm::Quick,
            AlgorithmArg::Heap => Algorithm::Heap,
            AlgorithmArg::Bogo => Algorithm::Bogo,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "firesort",
    disable_help_subcommand = true,
    about = "Sort wildfire hotspot datasets with instrumented algorithms",
    long_about = "Load a hotspot CSV dataset, sort a private copy by one field with one of eight instrumented algorithms, report comparisons, movements and elapsed time, then page through the sorted records.",
    after_help = "Datasets are resolved in order by --dataset, --data-dir, the FIRESORT_DATA_DIR environment variable, then the current directory. Passing both --key and --algorithm runs every dataset without the interactive menu."
)]
/// CLI for `firesort`.
///
/// Common usage:
/// - Interactive menu over every CSV in a directory: `--data-dir ./data`
/// - One-shot run: `--dataset focos_2024.csv --key timestamp --algorithm merge`
/// - Reproducible bogo sort: `--algorithm bogo --seed 7 --bogo-max-attempts 5000`
struct SortSessionCli {
    #[arg(
        long = "dataset",
        value_name = "PATH",
        help = "Dataset file to offer, repeat as needed in menu order"
    )]
    datasets: Vec<PathBuf>,
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        conflicts_with = "datasets",
        help = "Directory searched for .csv datasets"
    )]
    data_dir: Option<PathBuf>,
    #[arg(
        long,
        value_enum,
        requires = "algorithm",
        help = "Field to sort by (skips the menu together with --algorithm)"
    )]
    key: Option<KeyArg>,
    #[arg(
        long,
        value_enum,
        requires = "key",
        help = "Sorting algorithm (skips the menu together with --key)"
    )]
    algorithm: Option<AlgorithmArg>,
    #[arg(
        long = "page-size",
        default_value_t = PAGE_SIZE,
        value_parser = parse_positive::<usize>,
        help = "Records shown per page"
    )]
    page_size: usize,
    #[arg(
        long = "bogo-max-attempts",
        default_value_t = BOGO_MAX_ATTEMPTS,
        value_parser = parse_positive::<u64>,
        help = "Shuffles bogo sort may try before giving up"
    )]
    bogo_max_attempts: u64,
    #[arg(long, help = "Optional deterministic seed for bogo sort shuffles")]
    seed: Option<u64>,
    #[arg(long = "no-header", help = "Treat the first line of each dataset as data")]
    no_header: bool,
    #[arg(
        long = "max-field-len",
        value_name = "BYTES",
        value_parser = parse_positive::<usize>,
        help = "Reject datasets with any field longer than this"
    )]
    max_field_len: Option<usize>,
    #[arg(
        long = "report-json",
        help = "Print a JSON run report line after each run"
    )]
    report_json: bool,
}

impl SortSessionCli {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            csv: CsvOptions {
                has_header: !self.no_header,
                max_field_len: self.max_field_len,
                ..CsvOptions::default()
            },
            run: RunOptions {
                bogo_max_attempts: self.bogo_max_attempts,
                bogo_seed: self.seed,
            },
            viewer: ViewerOptions {
                page_size: self.page_size,
            },
        }
    }
}

/// Entry point of the `firesort` binary.
///
/// `args_iter` excludes the program name.
pub fn run_sort_session<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let Some(cli) =
        parse_cli::<SortSessionCli, _>(std::iter::once("firesort".to_string()).chain(args_iter))?
    else {
        return Ok(());
    };

    let config = cli.session_config();
    config.validate()?;
    let catalog = resolve_catalog(
        cli.datasets.clone(),
        cli.data_dir.clone(),
        env::var_os(DATA_DIR_ENV).map(PathBuf::from),
    )?;
    let session = SortSession::new(config, catalog).with_json_report(cli.report_json);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();
    match (cli.key, cli.algorithm) {
        (Some(key), Some(algorithm)) => {
            session.run_batch(key.into(), algorithm.into(), &mut input, &mut output)?;
        }
        _ => session.run_interactive(&mut input, &mut output)?,
    }
    Ok(())
}

/// Build the dataset catalog from explicit paths, a directory, or the
/// environment fallback, in that order. The current directory is searched
/// when none is given.
pub fn resolve_catalog(
    datasets: Vec<PathBuf>,
    data_dir: Option<PathBuf>,
    env_dir: Option<PathBuf>,
) -> Result<DatasetCatalog, SortError> {
    if !datasets.is_empty() {
        return Ok(DatasetCatalog::from_paths(datasets));
    }
    let root = data_dir
        .or(env_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    let catalog = discover_datasets(&root)?;
    if catalog.is_empty() {
        return Err(SortError::Configuration(format!(
            "no .csv datasets found under {}",
            root.display()
        )));
    }
    Ok(catalog)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Pick(usize),
    Back,
    Exit,
}

/// Operator session over a dataset catalog.
///
/// A dataset is loaded once when chosen and reused for every run until the
/// operator goes back to the dataset menu.
#[derive(Debug)]
pub struct SortSession {
    config: SessionConfig,
    catalog: DatasetCatalog,
    json_report: bool,
}

impl SortSession {
    /// Session over `catalog` with `config`; JSON reports off.
    pub fn new(config: SessionConfig, catalog: DatasetCatalog) -> Self {
        Self {
            config,
            catalog,
            json_report: false,
        }
    }

    /// Print a JSON [`RunReport`] line after each run.
    pub fn with_json_report(mut self, enabled: bool) -> Self {
        self.json_report = enabled;
        self
    }

    /// Dataset menu, then field and algorithm menus, until exit or end of input.
    ///
    /// Load and run failures are reported to the operator and control returns
    /// to the menu they were launched from; only I/O failures on the session
    /// streams end the session.
    pub fn run_interactive<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), SortError> {
        loop {
            let labels: Vec<&str> = self.catalog.iter().map(|(label, _)| label).collect();
            let choice = choose(input, output, "Datasets", &labels, false, "Choose a dataset: ")?;
            let MenuChoice::Pick(idx) = choice else {
                return Ok(());
            };
            let Some((label, path)) = self.catalog.get_index(idx) else {
                continue;
            };
            let dataset = match self.load_dataset(label, path) {
                Ok(dataset) => dataset,
                Err(err) => {
                    warn!(dataset = label, error = %err, "dataset load failed");
                    writeln!(output, "Error: {err}")?;
                    continue;
                }
            };
            writeln!(
                output,
                "Records loaded: {}",
                format_with_commas(dataset.len() as u64)
            )?;
            if self.run_menu(&dataset, input, output)? == MenuChoice::Exit {
                return Ok(());
            }
        }
    }

    /// Field and algorithm menus over one loaded dataset.
    fn run_menu<R: BufRead, W: Write>(
        &self,
        dataset: &[FireRecord],
        input: &mut R,
        output: &mut W,
    ) -> Result<MenuChoice, SortError> {
        let key_labels: Vec<&str> = SortKey::ALL.iter().map(|key| key.label()).collect();
        let algorithm_labels: Vec<&str> = Algorithm::ALL.iter().map(|alg| alg.label()).collect();
        loop {
            let key = match choose(input, output, "Sort field", &key_labels, true, "Choose a field: ")? {
                MenuChoice::Pick(idx) => SortKey::ALL[idx],
                other => return Ok(other),
            };
            let algorithm = match choose(
                input,
                output,
                "Algorithm",
                &algorithm_labels,
                true,
                "Choose an algorithm: ",
            )? {
                MenuChoice::Pick(idx) => Algorithm::ALL[idx],
                MenuChoice::Back => continue,
                MenuChoice::Exit => return Ok(MenuChoice::Exit),
            };
            match self.run_once(dataset, key, algorithm, input, output) {
                Ok(_) => {}
                Err(err @ SortError::Io(_)) => return Err(err),
                Err(err) => {
                    warn!(error = %err, "run aborted");
                    writeln!(output, "Run aborted: {err}")?;
                }
            }
        }
    }

    /// Run `key`/`algorithm` over every dataset in catalog order without menus.
    ///
    /// Returns the reports of the completed runs; the first failure aborts.
    pub fn run_batch<R: BufRead, W: Write>(
        &self,
        key: SortKey,
        algorithm: Algorithm,
        input: &mut R,
        output: &mut W,
    ) -> Result<Vec<RunReport>, SortError> {
        let mut reports = Vec::with_capacity(self.catalog.len());
        for (label, path) in self.catalog.iter() {
            let dataset = self.load_dataset(label, path)?;
            writeln!(output, "\n=== {label} ===")?;
            writeln!(
                output,
                "Records loaded: {}",
                format_with_commas(dataset.len() as u64)
            )?;
            reports.push(self.run_once(&dataset, key, algorithm, input, output)?);
        }
        Ok(reports)
    }

    /// One run: sort, print the statistics banner, page through the result.
    pub fn run_once<R: BufRead, W: Write>(
        &self,
        dataset: &[FireRecord],
        key: SortKey,
        algorithm: Algorithm,
        input: &mut R,
        output: &mut W,
    ) -> Result<RunReport, SortError> {
        let run = run_sort(dataset, key, algorithm, &self.config.run)?;
        write_run_summary(output, &run)?;

        let mut viewer = PageViewer::for_run(&run, &self.config.viewer)?;
        let mut presenter = TerminalPresenter::new(&mut *input, &mut *output);
        let pages = viewer.run(&mut presenter)?;
        debug!(pages, shown = viewer.shown(), "listing finished");

        let report = run.report();
        if self.json_report {
            writeln!(output, "{}", serde_json::to_string(&report)?)?;
        }
        Ok(report)
    }

    fn load_dataset(&self, label: &str, path: &Path) -> Result<Vec<FireRecord>, SortError> {
        CsvFileSource::new(path, self.config.csv.clone())
            .with_id(label)
            .load()
    }
}

/// Print a numbered menu and read choices until a valid one arrives.
///
/// End of input counts as exit.
fn choose<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    title: &str,
    labels: &[&str],
    with_back: bool,
    prompt: &str,
) -> Result<MenuChoice, SortError> {
    loop {
        writeln!(output, "\n=== {title} ===")?;
        for (idx, label) in labels.iter().enumerate() {
            writeln!(output, "{}. {}", idx + 1, label)?;
        }
        if with_back {
            writeln!(output, "{}. Back", labels.len() + 1)?;
        }
        writeln!(output, "0. Exit")?;
        write!(output, "{prompt}")?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Ok(MenuChoice::Exit);
        }
        match parse_menu_choice(&answer, labels.len(), with_back) {
            Some(choice) => return Ok(choice),
            None => writeln!(output, "Invalid option.")?,
        }
    }
}

/// `0` exits, `1..=options` picks, `options + 1` goes back when offered.
fn parse_menu_choice(raw: &str, options: usize, with_back: bool) -> Option<MenuChoice> {
    let value = raw.trim().parse::<usize>().ok()?;
    match value {
        0 => Some(MenuChoice::Exit),
        n if n <= options => Some(MenuChoice::Pick(n - 1)),
        n if with_back && n == options + 1 => Some(MenuChoice::Back),
        _ => None,
    }
}

fn parse_positive<T>(raw: &str) -> Result<T, String>
where
    T: FromStr + PartialEq + Default,
{
    let parsed = raw
        .parse::<T>()
        .map_err(|_| format!("Could not parse '{}' as a positive integer", raw))?;
    if parsed == T::default() {
        return Err("value must be greater than zero".to_string());
    }
    Ok(parsed)
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    const HEADER: &str = "id,uuid,lat,lon,data_hora_gmt,pais,estado,municipio,bioma";

    fn dataset_dir() -> (TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("focos_2024.csv");
        fs::write(
            &path,
            format!(
                "{HEADER}\n\
                 1,a,0,0,2024-03-02,Brasil,PARÁ,BELÉM,Amazônia\n\
                 2,b,0,0,2024-01-15,Brasil,PARÁ,ALTAMIRA,Amazônia\n\
                 3,c,0,0,2024-02-20,Brasil,PARÁ,MARABÁ,Cerrado\n"
            ),
        )
        .unwrap();
        (dir, path)
    }

    fn session(path: &Path, page_size: usize) -> SortSession {
        let mut config = SessionConfig::default();
        config.viewer.page_size = page_size;
        SortSession::new(config, DatasetCatalog::from_paths([path]))
    }

    fn drive(session: &SortSession, script: &str) -> String {
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        session.run_interactive(&mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn menu_choices_map_to_pick_back_and_exit() {
        assert_eq!(parse_menu_choice("0", 4, true), Some(MenuChoice::Exit));
        assert_eq!(parse_menu_choice(" 1\n", 4, true), Some(MenuChoice::Pick(0)));
        assert_eq!(parse_menu_choice("4", 4, true), Some(MenuChoice::Pick(3)));
        assert_eq!(parse_menu_choice("5", 4, true), Some(MenuChoice::Back));
        assert_eq!(parse_menu_choice("5", 4, false), None);
        assert_eq!(parse_menu_choice("x", 4, true), None);
        assert_eq!(parse_menu_choice("", 4, true), None);
    }

    #[test]
    fn interactive_session_sorts_and_pages() {
        let (_dir, path) = dataset_dir();
        // invalid dataset, dataset 1, timestamp, merge, continue, back, exit
        let text = drive(&session(&path, 2), "9\n1\n3\n5\nS\n5\n0\n");

        assert_eq!(text.matches("Invalid option.").count(), 1);
        assert!(text.contains("Records loaded: 3"));
        assert!(text.contains("Algorithm: merge"));
        assert!(text.contains("Key: timestamp"));
        assert!(text.contains("--- Shown 2/3 records ---"));
        assert!(text.contains("--- Shown 3/3 records ---"));
        assert!(text.contains("End of listing."));
        let first = text.find("2 ,b ,0 ,0 ,2024-01-15").unwrap();
        let second = text.find("3 ,c ,0 ,0 ,2024-02-20").unwrap();
        let third = text.find("1 ,a ,0 ,0 ,2024-03-02").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn algorithm_back_returns_to_field_menu() {
        let (_dir, path) = dataset_dir();
        // dataset 1, biome, back, region, bubble, stop paging, exit
        let text = drive(&session(&path, 1), "1\n2\n9\n4\n1\nN\n0\n");
        assert_eq!(text.matches("=== Sort field ===").count(), 3);
        assert!(text.contains("Key: region"));
        assert!(!text.contains("Key: biome"));
        assert!(text.contains("--- Shown 1/3 records ---"));
        assert!(!text.contains("--- Shown 2/3 records ---"));
    }

    #[test]
    fn missing_dataset_is_reported_and_menu_continues() {
        let dir = tempdir().unwrap();
        let session = session(&dir.path().join("gone.csv"), 200);
        let text = drive(&session, "1\n0\n");
        assert!(text.contains("Error: data source 'gone' is unavailable"));
        assert_eq!(text.matches("=== Datasets ===").count(), 2);
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (_dir, path) = dataset_dir();
        let text = drive(&session(&path, 200), "1\n");
        assert!(text.contains("Records loaded: 3"));
    }

    #[test]
    fn batch_run_prints_json_report() {
        let (_dir, path) = dataset_dir();
        let session = session(&path, 200).with_json_report(true);
        let mut input: &[u8] = b"";
        let mut output = Vec::new();
        let reports = session
            .run_batch(SortKey::Biome, Algorithm::Quick, &mut input, &mut output)
            .unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].records, 3);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("=== focos_2024 ==="));
        let json_line = text.lines().find(|line| line.starts_with('{')).unwrap();
        let parsed: RunReport = serde_json::from_str(json_line).unwrap();
        assert_eq!(parsed.algorithm, "quick");
        assert_eq!(parsed.key, "biome");
        assert_eq!(parsed.outcome, "sorted");
        assert_eq!(parsed.comparisons, reports[0].comparisons);
    }

    #[test]
    fn catalog_resolution_prefers_explicit_paths_then_dirs() {
        let (dir, path) = dataset_dir();
        let explicit = resolve_catalog(vec![PathBuf::from("x/other.csv")], None, None).unwrap();
        assert_eq!(explicit.get_index(0).unwrap().0, "other");

        let from_env = resolve_catalog(Vec::new(), None, Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(from_env.get("focos_2024"), Some(path.as_path()));

        let empty = tempdir().unwrap();
        let overridden = resolve_catalog(
            Vec::new(),
            Some(empty.path().to_path_buf()),
            Some(dir.path().to_path_buf()),
        );
        assert!(matches!(overridden, Err(SortError::Configuration(_))));
    }

    #[test]
    fn cli_builds_session_config() {
        let cli = SortSessionCli::try_parse_from([
            "firesort",
            "--dataset",
            "a.csv",
            "--key",
            "timestamp",
            "--algorithm",
            "bogo",
            "--seed",
            "7",
            "--page-size",
            "50",
            "--no-header",
            "--max-field-len",
            "64",
        ])
        .unwrap();
        let config = cli.session_config();
        assert_eq!(config.viewer.page_size, 50);
        assert_eq!(config.run.bogo_seed, Some(7));
        assert_eq!(config.run.bogo_max_attempts, BOGO_MAX_ATTEMPTS);
        assert!(!config.csv.has_header);
        assert_eq!(config.csv.max_field_len, Some(64));
        assert_eq!(SortKey::from(cli.key.unwrap()), SortKey::Timestamp);
        assert_eq!(Algorithm::from(cli.algorithm.unwrap()), Algorithm::Bogo);
    }

    #[test]
    fn cli_rejects_partial_selection_and_zero_page_size() {
        assert!(SortSessionCli::try_parse_from(["firesort", "--key", "biome"]).is_err());
        assert!(SortSessionCli::try_parse_from(["firesort", "--algorithm", "heap"]).is_err());
        assert!(SortSessionCli::try_parse_from(["firesort", "--page-size", "0"]).is_err());
        assert!(
            SortSessionCli::try_parse_from(["firesort", "--dataset", "a.csv", "--data-dir", "d"])
                .is_err()
        );
    }

    #[test]
    fn parse_positive_rejects_zero_and_garbage() {
        assert_eq!(parse_positive::<usize>("25"), Ok(25));
        assert_eq!(parse_positive::<u64>("1"), Ok(1));
        assert!(parse_positive::<usize>("0").is_err());
        assert!(parse_positive::<u64>("-3").is_err());
        assert!(parse_positive::<usize>("abc").is_err());
        let cli = SortSessionCli::try_parse_from(["firesort", "--bogo-max-attempts", "9"]).unwrap();
        assert_eq!(cli.bogo_max_attempts, 9);
        assert!(SortSessionCli::try_parse_from(["firesort", "--max-field-len", "0"]).is_err());
    }
}
