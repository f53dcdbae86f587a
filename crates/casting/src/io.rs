//! Text format of problems and reports.
//!
//! A problem is a stream of whitespace-separated integers; line breaks carry
//! no meaning:
//!
//! ```text
//! R S A
//! k a1 .. ak      (R times: eligible actors of role i)
//! k r1 .. rk      (S times: roles performing in scene j)
//! ```
//!
//! A report is the number of actors used, then one line per used actor in
//! ascending id order: `actor count role1 .. rolek`.

use std::fmt::Write as _;
use std::str::SplitAsciiWhitespace;

use thiserror::Error;

use casting_core::{CastingProblem, CastingReport};

use crate::error::Result;

/// Errors raised while tokenizing problem text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input ended before a value was read.
    #[error("input ended while reading {expected}")]
    UnexpectedEnd { expected: String },

    /// A token is not an integer.
    #[error("token {position} ({token:?}) is not an integer")]
    InvalidToken { position: usize, token: String },

    /// A count or id is negative or does not fit.
    #[error("{what} is out of range: {value}")]
    OutOfRange { what: String, value: i64 },
}

struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_ascii_whitespace(),
            position: 0,
        }
    }

    fn next_value(&mut self, what: impl Fn() -> String) -> std::result::Result<u32, ParseError> {
        let token = self
            .inner
            .next()
            .ok_or_else(|| ParseError::UnexpectedEnd { expected: what() })?;
        self.position += 1;
        let value: i64 = token.parse().map_err(|_| ParseError::InvalidToken {
            position: self.position,
            token: token.to_owned(),
        })?;
        u32::try_from(value).map_err(|_| ParseError::OutOfRange {
            what: what(),
            value,
        })
    }

    // A `k x1 .. xk` record.
    fn next_record(
        &mut self,
        kind: &str,
        number: usize,
    ) -> std::result::Result<Vec<u32>, ParseError> {
        let len = self.next_value(|| format!("the size of {kind} {number}"))?;
        (0..len)
            .map(|i| self.next_value(|| format!("entry {} of {kind} {number}", i + 1)))
            .collect()
    }
}

/// Parses problem text into a validated [`CastingProblem`].
///
/// Tokens after the last scene record are ignored.
///
/// # Errors
///
/// Returns [`Error::Parse`](crate::Error::Parse) for malformed text and
/// [`Error::Problem`](crate::Error::Problem) for ids outside their declared
/// bounds.
pub fn parse_problem(input: &str) -> Result<CastingProblem> {
    let mut tokens = Tokens::new(input);
    let role_count = tokens.next_value(|| "the role count".to_owned())? as usize;
    let scene_count = tokens.next_value(|| "the scene count".to_owned())? as usize;
    let actor_count = tokens.next_value(|| "the actor count".to_owned())?;

    let roles = (1..=role_count)
        .map(|role| tokens.next_record("role", role))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let scenes = (0..scene_count)
        .map(|scene| tokens.next_record("scene", scene))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(CastingProblem::with_declared_counts(
        role_count,
        scene_count,
        actor_count,
        roles,
        scenes,
    )?)
}

/// Renders a report in the text format.
pub fn format_report(report: &CastingReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", report.actors_used());
    for entry in report.actors() {
        let _ = write!(out, "{} {}", entry.actor, entry.roles.len());
        for role in &entry.roles {
            let _ = write!(out, " {role}");
        }
        out.push('\n');
    }
    out
}

/// Writes a report in the text format.
pub fn write_report<W: std::io::Write>(report: &CastingReport, mut writer: W) -> Result<()> {
    writer.write_all(format_report(report).as_bytes())?;
    writer.flush()?;
    Ok(())
}
