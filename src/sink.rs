//! Destinations for finished results.
//!
//! The collector calls a sink from a single thread, one result at a time, so sinks
//! need neither locking nor `Send`.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::algorithm::ShortestPathResult;
use crate::graph::{EdgeWeight, VertexId};
use crate::{Error, Result};

/// Consumer of shortest path results
pub trait ResultSink<V, W>
where
    V: VertexId,
    W: EdgeWeight,
{
    /// Takes ownership of one result
    fn accept(&mut self, result: ShortestPathResult<V, W>) -> Result<()>;

    /// Called once after the last result of a run
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Keeps every result in memory
impl<V, W> ResultSink<V, W> for Vec<ShortestPathResult<V, W>>
where
    V: VertexId,
    W: EdgeWeight,
{
    fn accept(&mut self, result: ShortestPathResult<V, W>) -> Result<()> {
        self.push(result);
        Ok(())
    }
}

/// Human-readable output, one block per source with vertices in sorted order:
///
/// ```text
/// From vertex A
/// Distance : {A: 0, B: 5, D: inf}
/// Predecessors : {A: -, B: A, D: -}
/// ```
#[derive(Debug)]
pub struct TextSink<Wr: Write> {
    writer: Wr,
}

impl<Wr: Write> TextSink<Wr> {
    pub fn new(writer: Wr) -> Self {
        TextSink { writer }
    }

    /// Returns the underlying writer
    pub fn into_inner(self) -> Wr {
        self.writer
    }
}

impl TextSink<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path).map_err(Error::Sink)?;
        Ok(TextSink::new(BufWriter::new(file)))
    }
}

impl<V, W, Wr> ResultSink<V, W> for TextSink<Wr>
where
    V: VertexId + Display,
    W: EdgeWeight + Display,
    Wr: Write,
{
    fn accept(&mut self, result: ShortestPathResult<V, W>) -> Result<()> {
        let distances: BTreeMap<&V, Option<W>> = result
            .distances
            .keys()
            .map(|vertex| (vertex, result.distance(vertex)))
            .collect();
        let predecessors: BTreeMap<&V, Option<&V>> = result
            .predecessors
            .keys()
            .map(|vertex| (vertex, result.predecessor(vertex)))
            .collect();

        let distances = join_entries(distances.iter().map(|(vertex, distance)| match distance {
            Some(distance) => format!("{}: {}", vertex, distance),
            None => format!("{}: inf", vertex),
        }));
        let predecessors = join_entries(predecessors.iter().map(|(vertex, predecessor)| match predecessor {
            Some(predecessor) => format!("{}: {}", vertex, predecessor),
            None => format!("{}: -", vertex),
        }));

        writeln!(self.writer, "From vertex {}", result.source).map_err(Error::Sink)?;
        writeln!(self.writer, "Distance : {{{}}}", distances).map_err(Error::Sink)?;
        writeln!(self.writer, "Predecessors : {{{}}}", predecessors).map_err(Error::Sink)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().map_err(Error::Sink)
    }
}

fn join_entries<I: Iterator<Item = String>>(entries: I) -> String {
    entries.collect::<Vec<_>>().join(", ")
}

/// One JSON object per result and line; unreachable distances and missing
/// predecessors are `null`
#[derive(Debug)]
pub struct JsonLinesSink<Wr: Write> {
    writer: Wr,
}

#[derive(Serialize)]
struct JsonRecord<'a, V, W> {
    source: &'a V,
    distances: BTreeMap<&'a V, Option<W>>,
    predecessors: BTreeMap<&'a V, Option<&'a V>>,
}

impl<Wr: Write> JsonLinesSink<Wr> {
    pub fn new(writer: Wr) -> Self {
        JsonLinesSink { writer }
    }

    /// Returns the underlying writer
    pub fn into_inner(self) -> Wr {
        self.writer
    }
}

impl JsonLinesSink<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path).map_err(Error::Sink)?;
        Ok(JsonLinesSink::new(BufWriter::new(file)))
    }
}

impl<V, W, Wr> ResultSink<V, W> for JsonLinesSink<Wr>
where
    V: VertexId + Serialize,
    W: EdgeWeight + Serialize,
    Wr: Write,
{
    fn accept(&mut self, result: ShortestPathResult<V, W>) -> Result<()> {
        let record = JsonRecord {
            source: &result.source,
            distances: result
                .distances
                .keys()
                .map(|vertex| (vertex, result.distance(vertex)))
                .collect(),
            predecessors: result
                .predecessors
                .keys()
                .map(|vertex| (vertex, result.predecessor(vertex)))
                .collect(),
        };

        let mut line = serde_json::to_vec(&record)?;
        line.push(b'\n');
        self.writer.write_all(&line).map_err(Error::Sink)
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush().map_err(Error::Sink)
    }
}
