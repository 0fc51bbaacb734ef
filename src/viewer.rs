//! Paginated presentation of a finished run.
//!
//! The viewer is a small state machine over an already sorted and measured
//! collection. It never compares or moves records; it only slices them into
//! pages and hands each page, with the run's final counters and the time
//! elapsed since the run started, to a [`PagePresenter`].

use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use crate::config::ViewerOptions;
use crate::constants::viewer::AFFIRMATIVE_PREFIXES;
use crate::data::FireRecord;
use crate::errors::SortError;
use crate::metrics::SortCounters;
use crate::run::SortRun;
use crate::sorting::SortOutcome;

/// Viewer lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerState {
    /// Next step emits a page.
    Presenting,
    /// Next step asks the operator whether to continue.
    AwaitingContinue,
    /// Terminal; further steps do nothing.
    Done,
}

/// One page handed to the presenter.
#[derive(Clone, Debug)]
pub struct Page<'a> {
    /// 1-based page number.
    pub number: usize,
    /// Records on this page, in sorted order.
    pub records: &'a [FireRecord],
    /// Records shown so far, including this page (the page's upper bound).
    pub shown: usize,
    /// Size of the whole collection.
    pub total: usize,
    /// Configured page size, which the last page may fall short of.
    pub page_size: usize,
    /// Final counters of the run being listed.
    pub counters: SortCounters,
    /// Time since the run started, not since the sort finished.
    pub elapsed: Duration,
}

impl Page<'_> {
    /// `true` when no records remain after this page.
    pub fn is_last(&self) -> bool {
        self.shown >= self.total
    }
}

/// Output side of the viewer: renders pages and collects continue answers.
pub trait PagePresenter {
    /// Render one page and its cumulative statistics.
    fn present(&mut self, page: &Page<'_>) -> Result<(), SortError>;
    /// Ask whether to show another page and return the raw answer token.
    fn ask_continue(&mut self, page: &Page<'_>) -> Result<String, SortError>;
}

/// `true` when an answer token means "show more".
pub fn is_affirmative(token: &str) -> bool {
    token.trim_start().starts_with(AFFIRMATIVE_PREFIXES)
}

/// Page-by-page walker over a sorted collection.
#[derive(Debug)]
pub struct PageViewer<'r> {
    records: &'r [FireRecord],
    counters: SortCounters,
    started: Instant,
    page_size: usize,
    offset: usize,
    pages: usize,
    state: ViewerState,
}

impl<'r> PageViewer<'r> {
    /// Create a viewer; an empty collection starts in [`ViewerState::Done`].
    pub fn new(
        records: &'r [FireRecord],
        counters: SortCounters,
        started: Instant,
        page_size: usize,
    ) -> Result<Self, SortError> {
        if page_size == 0 {
            return Err(SortError::Configuration(
                "page size must be greater than zero".into(),
            ));
        }
        let state = if records.is_empty() {
            ViewerState::Done
        } else {
            ViewerState::Presenting
        };
        Ok(Self {
            records,
            counters,
            started,
            page_size,
            offset: 0,
            pages: 0,
            state,
        })
    }

    /// Viewer over a run's sorted copy and final counters.
    pub fn for_run(run: &'r SortRun, options: &ViewerOptions) -> Result<Self, SortError> {
        Self::new(&run.records, run.counters, run.started, options.page_size)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ViewerState {
        self.state
    }

    /// Pages emitted so far.
    pub fn pages_emitted(&self) -> usize {
        self.pages
    }

    /// Records emitted so far.
    pub fn shown(&self) -> usize {
        self.offset
    }

    fn current_page(&self, start: usize, end: usize) -> Page<'r> {
        let records: &'r [FireRecord] = self.records;
        Page {
            number: self.pages,
            records: &records[start..end],
            shown: end,
            total: self.records.len(),
            page_size: self.page_size,
            counters: self.counters,
            elapsed: self.started.elapsed(),
        }
    }

    /// Advance the state machine by one transition.
    pub fn step<P: PagePresenter + ?Sized>(
        &mut self,
        presenter: &mut P,
    ) -> Result<ViewerState, SortError> {
        match self.state {
            ViewerState::Presenting => {
                let start = self.offset;
                let end = (start + self.page_size).min(self.records.len());
                self.pages += 1;
                self.offset = end;
                let page = self.current_page(start, end);
                presenter.present(&page)?;
                self.state = if self.offset >= self.records.len() {
                    ViewerState::Done
                } else {
                    ViewerState::AwaitingContinue
                };
            }
            ViewerState::AwaitingContinue => {
                let page = self.current_page(self.offset, self.offset);
                let answer = presenter.ask_continue(&page)?;
                self.state = if is_affirmative(&answer) {
                    ViewerState::Presenting
                } else {
                    ViewerState::Done
                };
            }
            ViewerState::Done => {}
        }
        Ok(self.state)
    }

    /// Drive the viewer to [`ViewerState::Done`] and return the pages emitted.
    pub fn run<P: PagePresenter + ?Sized>(&mut self, presenter: &mut P) -> Result<usize, SortError> {
        while self.state != ViewerState::Done {
            self.step(presenter)?;
        }
        Ok(self.pages)
    }
}

/// Line-oriented presenter over any reader/writer pair (stdin/stdout in the CLI).
#[derive(Debug)]
pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    /// Presenter reading answers from `input` and writing pages to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> PagePresenter for TerminalPresenter<R, W> {
    fn present(&mut self, page: &Page<'_>) -> Result<(), SortError> {
        for record in page.records {
            writeln!(self.output, "{}", record.to_line())?;
        }
        writeln!(self.output)?;
        writeln!(
            self.output,
            "--- Shown {}/{} records ---",
            page.shown, page.total
        )?;
        writeln!(
            self.output,
            "Comparisons: {} | Movements: {} | Elapsed: {:.6} s",
            page.counters.comparisons,
            page.counters.movements,
            page.elapsed.as_secs_f64()
        )?;
        if page.is_last() {
            writeln!(self.output, "\nEnd of listing.")?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn ask_continue(&mut self, page: &Page<'_>) -> Result<String, SortError> {
        write!(
            self.output,
            "\nShow the next {} records? (S/N): ",
            page.page_size
        )?;
        self.output.flush()?;
        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.trim().to_string())
    }
}

/// Print the post-sort statistics banner for `run`.
pub fn write_run_summary<W: Write>(output: &mut W, run: &SortRun) -> Result<(), SortError> {
    writeln!(output, "\n--- Statistics ---")?;
    writeln!(output, "Algorithm: {}", run.algorithm.label())?;
    writeln!(output, "Key: {}", run.key.label())?;
    writeln!(output, "Records: {}", run.records.len())?;
    writeln!(output, "Comparisons: {}", run.counters.comparisons)?;
    writeln!(output, "Movements: {}", run.counters.movements)?;
    writeln!(output, "Sort time: {:.6} s", run.elapsed.as_secs_f64())?;
    if let SortOutcome::AttemptLimitReached { attempts } = run.outcome {
        writeln!(
            output,
            "Bogo sort: attempt limit reached after {} shuffles; records are not sorted.",
            attempts
        )?;
    }
    writeln!(output)?;
    Ok(())
}
