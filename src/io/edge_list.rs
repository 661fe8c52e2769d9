//! # EdgeList
//!
//! The EdgeList-Format consists of a [header](super::header) `"{n} {m}"`, followed by `m`
//! pairs `u v` each representing an edge `Edge(u, v)`. Whether the edge is directed is
//! decided by the representation the list is read into.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use tracing::trace;

use super::*;
use crate::{edge::*, error::*, node::*, ops::*};

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListReader {
    /// If *true*, vertices in the stream are numbered `1..=n` and shifted to `0..n`
    one_indexed: bool,
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates whether vertices in the stream start at `1`
    pub fn one_indexed(mut self, one_indexed: bool) -> EdgeListReader {
        self.one_indexed = one_indexed;
        self
    }

    fn read_vertex<R: BufRead>(&self, tokens: &mut TokenReader<R>, what: &str) -> Result<Vertex> {
        let vertex: Vertex = tokens.read_unsigned(what)?;
        if self.one_indexed {
            vertex
                .checked_sub(1)
                .ok_or_else(|| GraphError::malformed(what, "vertices are numbered from 1"))
        } else {
            Ok(vertex)
        }
    }

    fn read_edge<R: BufRead>(&self, tokens: &mut TokenReader<R>) -> Result<Edge> {
        let u = self.read_vertex(tokens, "Edge>Source vertex")?;
        let v = self.read_vertex(tokens, "Edge>Target vertex")?;
        Ok(Edge(u, v))
    }
}

impl<G: GraphFromScratch> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut tokens = TokenReader::new(reader);
        let base = GraphBase::try_from_tokens(&mut tokens)?;

        let edges = (0..base.number_of_edges())
            .map(|_| self.read_edge(&mut tokens))
            .collect::<Result<Vec<_>>>()?;

        trace!(num_edges = edges.len(), "read edge list");

        G::try_from_base(base, edges)
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphFromScratch,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter {
    /// If *true*, vertices are written as `1..=n`
    one_indexed: bool,
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates whether vertices are written starting at `1`
    pub fn one_indexed(mut self, one_indexed: bool) -> EdgeListWriter {
        self.one_indexed = one_indexed;
        self
    }
}

impl<G: AdjacencyList> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        GraphHeader::new(graph.number_of_vertices(), graph.number_of_edges())
            .write_header(&mut writer)?;

        let offset = Vertex::from(self.one_indexed);
        for Edge(u, v) in graph.edges() {
            writeln!(writer, "{} {}", u + offset, v + offset)?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: AdjacencyList> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}
