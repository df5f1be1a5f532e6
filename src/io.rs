//! Input generation, sequence files and result reports.
//!
//! Nothing in here is needed by the algorithms, it is the plumbing used by
//! the demos and benches to produce inputs and keep results around.
use crate::error::{Error, Result};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Duration;

/// Values drawn by default when generating inputs.
pub const DEFAULT_RANGE: RangeInclusive<i32> = -100..=100;

/// `len` integers drawn uniformly from `range`.
///
/// # Panics
/// Panics if `range` is empty (its start is above its end).
pub fn generate<R: Rng + ?Sized>(len: usize, range: RangeInclusive<i32>, rng: &mut R) -> Vec<i32> {
    let values = Uniform::from(range);
    values.sample_iter(rng).take(len).collect()
}

/// Write `len` random integers drawn from `range` into `path`.
/// An empty `range` is rejected with `Error::InvalidConfig`.
pub fn generate_file<P: AsRef<Path>>(path: P, len: usize, range: RangeInclusive<i32>) -> Result<()> {
    if range.is_empty() {
        return Err(Error::invalid_config(
            "range",
            format!("{} is above {}", range.start(), range.end()),
        ));
    }
    let input = generate(len, range, &mut rand::thread_rng());
    write_sequence(path, &input)
}

/// Parse whitespace separated integers.
///
/// ```
/// use rayon_max_subarray::io::parse_sequence;
/// assert_eq!(parse_sequence("3 -1\n 4").unwrap(), vec![3, -1, 4]);
/// assert!(parse_sequence("3 x 4").is_err());
/// ```
pub fn parse_sequence(text: &str) -> Result<Vec<i32>> {
    text.split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token.parse().map_err(|_| Error::InvalidInput {
                position,
                token: token.to_owned(),
            })
        })
        .collect()
}

pub fn read_sequence<P: AsRef<Path>>(path: P) -> Result<Vec<i32>> {
    let text = fs::read_to_string(path)?;
    parse_sequence(&text)
}

/// Write `input` on a single line, space separated.
pub fn write_sequence<P: AsRef<Path>>(path: P, input: &[i32]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    let mut values = input.iter();
    if let Some(first) = values.next() {
        write!(writer, "{}", first)?;
        for value in values {
            write!(writer, " {}", value)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Outcome of one timed solve, as shown to users.
#[derive(Debug, Clone, PartialEq)]
pub struct Report<'a> {
    pub sum: i64,
    pub elapsed: Duration,
    /// Elements of the best subarray, when known.
    pub witness: Option<&'a [i32]>,
}

/// Witnesses longer than this are abbreviated when displayed.
const SHOWN_ELEMENTS: usize = 20;

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Max Sum: {}", self.sum)?;
        write!(f, "Execution Time: {:.6} sec", self.elapsed.as_secs_f64())?;
        if let Some(witness) = self.witness {
            if witness.len() <= SHOWN_ELEMENTS {
                write!(f, "\nSequence: {:?}", witness)?;
            } else {
                let half = SHOWN_ELEMENTS / 2;
                write!(
                    f,
                    "\nSequence: {:?} ... {:?}\nSequence Length: {}",
                    &witness[..half],
                    &witness[witness.len() - half..],
                    witness.len()
                )?;
            }
        }
        Ok(())
    }
}

/// Save `report` into `path`. Unlike `Display`, the witness is written in full.
pub fn write_report<P: AsRef<Path>>(path: P, report: &Report<'_>) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "Max Sum: {}", report.sum)?;
    writeln!(
        writer,
        "Execution Time: {:.6} sec",
        report.elapsed.as_secs_f64()
    )?;
    if let Some(witness) = report.witness {
        writeln!(writer, "Sequence: {:?}", witness)?;
    }
    writer.flush()?;
    Ok(())
}
