//! Implements the parsing of the line-based text format of a network.
//!
//! The format consists of the number of controllable edges, followed by one line per controllable
//! edge, followed by the number of contingent edges and one line per contingent edge. An edge line
//! has the shape
//! ```ignored
//! <from name> <to name> <lower bound> <upper bound>
//! ```
//! where the bounds are whole numbers, written either as integers (`3`) or as decimals (`3.0`).
//! A bound with a fractional part is rejected. Empty lines are skipped.
//!
//! See [`read_network`] for more information.

mod error;

use std::io::BufRead;
use std::io::BufReader;
use std::io::Lines;
use std::io::Read;

pub use error::ReadError;
use log::debug;
use stnu_core::network::TemporalNetwork;
use stnu_core::TimePoint;
use stnu_core::Weight;

use crate::TimePointNames;

/// A network read from a file, together with the names of its time points.
#[derive(Debug, Clone, Default)]
pub struct NamedNetwork {
    pub network: TemporalNetwork,
    pub names: TimePointNames,
}

/// Reads a network in the text format from `source`.
///
/// The network is validated before it is returned, so a network is only returned if the whole
/// input was read and it satisfies the invariants checked by [`TemporalNetwork::validate`].
///
/// # Example
/// ```
/// use stnu_format::reader::read_network;
///
/// let source = r#"
/// 2
/// end reaction 0 1
/// start reaction 0 4
/// 1
/// start end 1 3
/// "#;
///
/// let named = read_network(source.as_bytes()).expect("valid network");
///
/// assert_eq!(3, named.network.num_time_points());
/// assert_eq!(2, named.network.controllable_edges().len());
/// assert_eq!(1, named.network.contingent_edges().len());
/// assert_eq!(Some("start"), named.names.name(named.network.contingent_edges()[0].from));
/// ```
pub fn read_network<R: Read>(source: R) -> Result<NamedNetwork, ReadError> {
    let mut reader = NetworkReader::new(source);
    let mut named = NamedNetwork::default();

    let num_controllable_edges = reader.read_count("the number of controllable edges")?;
    for _ in 0..num_controllable_edges {
        let edge = reader.read_edge("a controllable edge", &mut named.names)?;
        let _ = named.network.add_controllable_edge(
            edge.from,
            edge.to,
            edge.lower_bound,
            edge.upper_bound,
        );
    }

    let num_contingent_edges = reader.read_count("the number of contingent edges")?;
    for _ in 0..num_contingent_edges {
        let edge = reader.read_edge("a contingent edge", &mut named.names)?;
        let _ = named.network.add_contingent_edge(
            edge.from,
            edge.to,
            edge.lower_bound,
            edge.upper_bound,
        );
    }

    reader.expect_end()?;

    named.network.validate()?;
    debug!(
        "read a network with {} time points and {} edges",
        named.network.num_time_points(),
        named.network.num_edges()
    );

    Ok(named)
}

struct ReadEdge {
    from: TimePoint,
    to: TimePoint,
    lower_bound: Weight,
    upper_bound: Weight,
}

/// Hands out the non-empty lines of the source, keeping track of the line number.
struct NetworkReader<R> {
    lines: Lines<BufReader<R>>,
    line_nr: usize,
}

impl<R: Read> NetworkReader<R> {
    fn new(source: R) -> Self {
        NetworkReader {
            lines: BufReader::new(source).lines(),
            line_nr: 0,
        }
    }

    /// The next line with content, or [`None`] at the end of the input.
    fn next_line(&mut self) -> Result<Option<String>, ReadError> {
        for line in self.lines.by_ref() {
            self.line_nr += 1;

            let line = line?;
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }

        Ok(None)
    }

    fn expect_line(&mut self, expected: &'static str) -> Result<String, ReadError> {
        self.next_line()?.ok_or(ReadError::UnexpectedEndOfInput { expected })
    }

    fn read_count(&mut self, expected: &'static str) -> Result<usize, ReadError> {
        let line = self.expect_line(expected)?;
        let mut tokens = line.split_whitespace();

        let count = self.parse_token(tokens.next(), expected)?;
        self.expect_no_more_tokens(tokens)?;

        Ok(count)
    }

    fn read_edge(
        &mut self,
        expected: &'static str,
        names: &mut TimePointNames,
    ) -> Result<ReadEdge, ReadError> {
        let line = self.expect_line(expected)?;
        let mut tokens = line.split_whitespace();

        let from = self.name_token(tokens.next(), "the name of the source")?;
        let to = self.name_token(tokens.next(), "the name of the target")?;
        let lower_bound = self.parse_bound(tokens.next(), "a lower bound")?;
        let upper_bound = self.parse_bound(tokens.next(), "an upper bound")?;
        self.expect_no_more_tokens(tokens)?;

        Ok(ReadEdge {
            from: names.time_point_or_insert(from),
            to: names.time_point_or_insert(to),
            lower_bound,
            upper_bound,
        })
    }

    fn expect_end(&mut self) -> Result<(), ReadError> {
        match self.next_line()? {
            None => Ok(()),
            Some(line) => Err(self.parse_error(format!(
                "expected the end of the input after the contingent edges, got '{}'",
                line.trim()
            ))),
        }
    }

    fn name_token<'a>(
        &self,
        token: Option<&'a str>,
        expected: &str,
    ) -> Result<&'a str, ReadError> {
        token.ok_or_else(|| self.parse_error(format!("expected {expected}")))
    }

    fn parse_token<T: std::str::FromStr>(
        &self,
        token: Option<&str>,
        expected: &str,
    ) -> Result<T, ReadError> {
        let token = self.name_token(token, expected)?;

        token
            .parse()
            .map_err(|_| self.parse_error(format!("expected {expected}, got '{token}'")))
    }

    /// Parses a bound, accepting decimals as long as their value is a whole number.
    fn parse_bound(&self, token: Option<&str>, expected: &str) -> Result<Weight, ReadError> {
        let token = self.name_token(token, expected)?;
        if let Ok(bound) = token.parse::<Weight>() {
            return Ok(bound);
        }

        let value = token
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| self.parse_error(format!("expected {expected}, got '{token}'")))?;

        if value.fract() != 0.0 {
            return Err(ReadError::FractionalBound {
                line_nr: self.line_nr,
                bound: token.to_owned(),
            });
        }

        // Whole values outside this range do not fit a `Weight`.
        if value < Weight::MIN as f64 || value >= Weight::MAX as f64 {
            return Err(self.parse_error(format!("the bound '{token}' is out of range")));
        }

        Ok(value as Weight)
    }

    fn expect_no_more_tokens<'a>(
        &self,
        mut tokens: impl Iterator<Item = &'a str>,
    ) -> Result<(), ReadError> {
        match tokens.next() {
            None => Ok(()),
            Some(token) => Err(self.parse_error(format!("unexpected token '{token}'"))),
        }
    }

    fn parse_error(&self, reason: String) -> ReadError {
        ReadError::ParseError {
            line_nr: self.line_nr,
            reason,
        }
    }
}
