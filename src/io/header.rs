//! # Headers
//!
//! Every graph stream starts with a header of two unsigned integers
//!     "{n} {m}"
//! where n is the number of vertices and m the number of edges in the graph.
//! Only these two tokens belong to the header; everything after them is left
//! untouched for the representation reading the edges.

use std::io::{BufRead, Write};

use tracing::debug;

use super::*;
use crate::{error::*, node::*};

/// Number of vertices and edges announced at the start of a graph stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphHeader {
    pub number_of_vertices: NumVertices,
    pub number_of_edges: NumEdges,
}

impl GraphHeader {
    pub fn new(number_of_vertices: NumVertices, number_of_edges: NumEdges) -> Self {
        Self {
            number_of_vertices,
            number_of_edges,
        }
    }

    /// Tries to parse the header from the next two tokens.
    ///
    /// # Errors
    /// Returns [`GraphError::MalformedInput`] if either token is missing, is not an
    /// unsigned integer or the number of vertices does not fit [`NumVertices`].
    pub fn try_read<R: BufRead>(tokens: &mut TokenReader<R>) -> Result<Self> {
        let number_of_vertices = tokens.read_unsigned("Header>Number of vertices")?;
        let number_of_edges = tokens.read_u64("Header>Number of edges")?;

        debug!(number_of_vertices, number_of_edges, "parsed graph header");

        Ok(Self::new(number_of_vertices, number_of_edges))
    }

    /// Writes the header as a single line
    pub fn write_header<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{} {}", self.number_of_vertices, self.number_of_edges)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_header() {
        let mut tokens = TokenReader::new("5 4\n0 1\n".as_bytes());
        assert_eq!(
            GraphHeader::try_read(&mut tokens).unwrap(),
            GraphHeader::new(5, 4)
        );
        assert_eq!(tokens.read_u64("next").unwrap(), 0);
    }

    #[test]
    fn header_split_over_lines() {
        let mut tokens = TokenReader::new("\n13\n\n22\n".as_bytes());
        assert_eq!(
            GraphHeader::try_read(&mut tokens).unwrap(),
            GraphHeader::new(13, 22)
        );
    }

    #[test]
    fn malformed_headers() {
        for input in ["", "5", "5 x", "x 4", "5 -4", "4294967296 1", "5 18446744073709551616"] {
            let mut tokens = TokenReader::new(input.as_bytes());
            let err = GraphHeader::try_read(&mut tokens).unwrap_err();
            assert!(err.is_malformed_input(), "{input:?} gave {err}");
        }
    }

    #[test]
    fn edge_count_beyond_vertex_range() {
        let mut tokens = TokenReader::new("5 5000000000".as_bytes());
        let header = GraphHeader::try_read(&mut tokens).unwrap();
        assert_eq!(header.number_of_vertices, 5);
        assert_eq!(header.number_of_edges, 5_000_000_000);
    }

    #[test]
    fn write_header() {
        let mut out = Vec::new();
        GraphHeader::new(7, 3).write_header(&mut out).unwrap();
        assert_eq!(out, b"7 3\n");
    }
}
