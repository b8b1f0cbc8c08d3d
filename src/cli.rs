// src/cli.rs
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{self, WrapErr};

use crate::{
    config::consts::ABOUT,
    config::options::{AppOptions, OutputFormat},
    core::net::Fetcher,
    error::{CompileError, LookupError},
    file, log,
    progress::{Progress, Stage},
    render, runner,
};

/// Look up cricket career averages.
///
/// REQUEST is `<player>, <keyword> <value>, …`; quoting is optional, the words
/// are joined with spaces.
#[derive(Parser, Debug)]
#[command(name = "cricstat", version, about)]
pub struct Args {
    /// e.g. `Virat Kohli, vs australia, year 2015-2018`
    #[arg(required_unless_present = "about")]
    pub request: Vec<String>,

    /// TOML options file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Show unfiltered values next to filtered ones
    #[arg(long)]
    pub both: bool,

    /// Leave the results page URL out of text output
    #[arg(long)]
    pub no_url: bool,

    /// Log file (default .store/debug.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print lookup stages on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Describe the request format and exit
    #[arg(long)]
    pub about: bool,
}

impl Args {
    /// Flags win over the options file.
    pub fn apply(&self, opts: &mut AppOptions) {
        if let Some(format) = self.format {
            opts.output.format = format;
        }
        if self.both {
            opts.output.both_columns = true;
        }
        if self.no_url {
            opts.output.show_url = false;
        }
        if let Some(path) = &self.log_file {
            opts.log.file = Some(path.clone());
        }
    }

    /// `--out` target; a bare name gets the format's extension.
    pub fn out_path(&self, format: OutputFormat) -> Option<PathBuf> {
        let path = self.out.as_ref()?;
        if path.extension().is_some() {
            Some(path.clone())
        } else {
            Some(path.with_extension(format.ext()))
        }
    }

    pub fn request_text(&self) -> String {
        self.request.join(" ")
    }
}

/// Stage lines on stderr for `--verbose`.
struct StderrProgress {
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("  {msg}");
    }
    fn stage_done(&mut self, stage: Stage) {
        self.done += 1;
        eprintln!("[{}/{}] {stage}", self.done, self.total);
    }
}

pub fn run() -> eyre::Result<()> {
    let args = Args::parse();
    if args.about {
        println!("{ABOUT}");
        return Ok(());
    }

    let mut opts = match &args.config {
        Some(path) => AppOptions::load(path)?,
        None => AppOptions::default(),
    };
    args.apply(&mut opts);
    log::init(&opts.log);

    let fetcher = Fetcher::new(&opts.fetch)?;
    let mut progress = StderrProgress { total: 0, done: 0 };
    let progress: Option<&mut dyn Progress> = if args.verbose { Some(&mut progress) } else { None };

    let report = runner::lookup(&args.request_text(), &fetcher, &opts.fetch, progress)
        .map_err(|e| {
            let msg = user_message(&e);
            eyre::Report::new(e).wrap_err(msg)
        })?;
    let text = render::render(&report, &opts.output)?;

    match args.out_path(opts.output.format) {
        Some(path) => file::write_output(&path, &text)
            .wrap_err_with(|| format!("could not write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// One sentence per failure kind, for people rather than logs.
pub fn user_message(err: &LookupError) -> String {
    match err {
        LookupError::Compile(CompileError::EmptyPlayerName) => {
            s!("Start the request with a player name, e.g. `Virat Kohli, vs australia`.")
        }
        LookupError::Compile(CompileError::UnknownDirective(kw)) => {
            format!("I don't know the keyword `{kw}`. Try vs, in, at, format, year or type.")
        }
        LookupError::Compile(CompileError::UnknownValue { keyword, value }) => {
            format!("`{value}` isn't something I can use with `{keyword}`.")
        }
        LookupError::Compile(CompileError::MalformedDirective(seg)) => {
            format!("`{seg}` needs a value after the keyword.")
        }
        LookupError::Compile(CompileError::MalformedYearRange(range)) => {
            format!("Couldn't read the year range `{range}`; use e.g. `2010-2012` or `Mar 2010-Apr 2012`.")
        }
        LookupError::Fetch(_) => s!("Sorry, the statistics service seems to be unavailable right now."),
        LookupError::PlayerNotFound(name) => format!("I couldn't find a player called `{name}`."),
        LookupError::AmbiguousPlayer { candidates, .. } => {
            format!("Huh? {}?", candidates.join(" or "))
        }
        LookupError::MissingCareerAverages(_) => s!("I couldn't find career averages for that query, sorry."),
        LookupError::Decode(_) => s!("The results page had no statistics to read."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_options() {
        let args = Args::parse_from(["cricstat", "--format", "csv", "--both", "--no-url", "Virat", "Kohli,", "vs", "india"]);
        let mut opts = AppOptions::default();
        args.apply(&mut opts);
        assert_eq!(opts.output.format, OutputFormat::Csv);
        assert!(opts.output.both_columns);
        assert!(!opts.output.show_url);
        assert_eq!(args.request_text(), "Virat Kohli, vs india");
    }

    #[test]
    fn out_path_gets_format_extension() {
        let args = Args::parse_from(["cricstat", "-o", "kohli", "Virat Kohli"]);
        assert_eq!(args.out_path(OutputFormat::Tsv), Some(PathBuf::from("kohli.tsv")));
        let args = Args::parse_from(["cricstat", "-o", "out/kohli.txt", "Virat Kohli"]);
        assert_eq!(args.out_path(OutputFormat::Json), Some(PathBuf::from("out/kohli.txt")));
    }

    #[test]
    fn about_needs_no_request() {
        let args = Args::try_parse_from(["cricstat", "--about"]).unwrap();
        assert!(args.about);
        assert!(Args::try_parse_from(["cricstat"]).is_err());
    }

    #[test]
    fn ambiguity_lists_candidates() {
        let err = LookupError::AmbiguousPlayer {
            name: s!("waugh"),
            candidates: vec![s!("Mark Waugh"), s!("Steve Waugh")],
        };
        assert_eq!(user_message(&err), "Huh? Mark Waugh or Steve Waugh?");
    }
}
