//! Text provider for whitespace-delimited graph files.
//!
//! The format is line oriented:
//!
//! ```text
//! 4
//! A
//! B
//! C
//! D
//! A B 1
//! B C 2
//! ```
//!
//! The first non-blank line holds the vertex count `n`, the next `n`
//! non-blank lines hold one vertex name each, and every remaining non-blank
//! line holds an undirected edge `<a> <b> <weight>`. Names are single
//! whitespace-free tokens so that edge lines can refer to them. Line numbers reported
//! in errors are one-based and count blank lines.

use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    sync::Arc,
};

use partree_core::{Graph, GraphBuilder, GraphError};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors raised while reading a graph file.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GraphFileError {
    /// Reading the underlying source failed.
    #[error("failed to read graph file: {0}")]
    Io(#[from] io::Error),
    /// The source contained no vertex count.
    #[error("graph file is empty")]
    Empty,
    /// The first line was not a vertex count.
    #[error("line {line}: `{value}` is not a vertex count")]
    InvalidVertexCount {
        /// One-based line number.
        line: usize,
        /// Text found instead of a count.
        value: String,
    },
    /// The source ended before every declared vertex was named.
    #[error("expected {expected} vertex names but found {found}")]
    MissingVertices {
        /// Vertex count declared on the first line.
        expected: usize,
        /// Names actually present.
        found: usize,
    },
    /// A vertex name line held more than one whitespace-delimited token.
    #[error("line {line}: vertex name `{value}` contains whitespace")]
    InvalidVertexName {
        /// One-based line number.
        line: usize,
        /// Text found instead of a single name.
        value: String,
    },
    /// An edge line did not have exactly three fields.
    #[error("line {line}: expected `<a> <b> <weight>`")]
    MalformedEdge {
        /// One-based line number.
        line: usize,
    },
    /// An edge weight was not a non-negative integer.
    #[error("line {line}: `{value}` is not a valid edge weight")]
    InvalidWeight {
        /// One-based line number.
        line: usize,
        /// Text found instead of a weight.
        value: String,
    },
    /// A vertex or edge was rejected by the graph builder.
    #[error("line {line}: {source}")]
    Graph {
        /// One-based line number.
        line: usize,
        /// Underlying builder error.
        #[source]
        source: GraphError,
    },
}

/// Stable codes describing [`GraphFileError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GraphFileErrorCode {
    /// Reading the underlying source failed.
    Io,
    /// The source contained no vertex count.
    Empty,
    /// The first line was not a vertex count.
    InvalidVertexCount,
    /// The source ended before every declared vertex was named.
    MissingVertices,
    /// A vertex name line held more than one whitespace-delimited token.
    InvalidVertexName,
    /// An edge line did not have exactly three fields.
    MalformedEdge,
    /// An edge weight was not a non-negative integer.
    InvalidWeight,
    /// A vertex or edge was rejected by the graph builder.
    Graph,
}

impl GraphFileErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "GRAPH_FILE_IO",
            Self::Empty => "GRAPH_FILE_EMPTY",
            Self::InvalidVertexCount => "GRAPH_FILE_INVALID_VERTEX_COUNT",
            Self::MissingVertices => "GRAPH_FILE_MISSING_VERTICES",
            Self::InvalidVertexName => "GRAPH_FILE_INVALID_VERTEX_NAME",
            Self::MalformedEdge => "GRAPH_FILE_MALFORMED_EDGE",
            Self::InvalidWeight => "GRAPH_FILE_INVALID_WEIGHT",
            Self::Graph => "GRAPH_FILE_GRAPH",
        }
    }
}

impl fmt::Display for GraphFileErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl GraphFileError {
    /// Retrieve the stable [`GraphFileErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> GraphFileErrorCode {
        match self {
            Self::Io(_) => GraphFileErrorCode::Io,
            Self::Empty => GraphFileErrorCode::Empty,
            Self::InvalidVertexCount { .. } => GraphFileErrorCode::InvalidVertexCount,
            Self::MissingVertices { .. } => GraphFileErrorCode::MissingVertices,
            Self::InvalidVertexName { .. } => GraphFileErrorCode::InvalidVertexName,
            Self::MalformedEdge { .. } => GraphFileErrorCode::MalformedEdge,
            Self::InvalidWeight { .. } => GraphFileErrorCode::InvalidWeight,
            Self::Graph { .. } => GraphFileErrorCode::Graph,
        }
    }
}

/// A named graph parsed from a text source.
#[derive(Debug, Clone)]
pub struct GraphFile {
    name: Arc<str>,
    graph: Graph,
}

impl GraphFile {
    /// Parses a graph from `reader`.
    ///
    /// # Errors
    /// Returns a [`GraphFileError`] describing the first problem found.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use partree_providers_text::GraphFile;
    ///
    /// let file = GraphFile::from_reader("demo", Cursor::new("2\nA\nB\nA B 7\n"))?;
    /// assert_eq!(file.name(), "demo");
    /// assert_eq!(file.graph().len(), 2);
    /// assert_eq!(file.graph().edge_count(), 1);
    /// # Ok::<(), partree_providers_text::GraphFileError>(())
    /// ```
    pub fn from_reader<R: BufRead>(
        name: impl Into<Arc<str>>,
        reader: R,
    ) -> Result<Self, GraphFileError> {
        let mut lines = NumberedLines::new(reader);

        let (line, count) = lines.next_content()?.ok_or(GraphFileError::Empty)?;
        let expected: usize = count
            .parse()
            .map_err(|_| GraphFileError::InvalidVertexCount { line, value: count.clone() })?;

        let mut builder = GraphBuilder::new();
        while builder.len() < expected {
            let Some((line, vertex)) = lines.next_content()? else {
                return Err(GraphFileError::MissingVertices {
                    expected,
                    found: builder.len(),
                });
            };
            if vertex.contains(char::is_whitespace) {
                return Err(GraphFileError::InvalidVertexName { line, value: vertex });
            }
            builder
                .add_vertex(vertex)
                .map_err(|source| GraphFileError::Graph { line, source })?;
        }

        while let Some((line, text)) = lines.next_content()? {
            let (a, b, weight) = parse_edge(line, &text)?;
            builder
                .add_edge_by_name(a, b, weight)
                .map_err(|source| GraphFileError::Graph { line, source })?;
        }

        Ok(Self {
            name: name.into(),
            graph: builder.build(),
        })
    }

    /// Opens and parses the file at `path`, naming the graph after the file
    /// stem.
    ///
    /// # Errors
    /// Returns [`GraphFileError::Io`] when the file cannot be opened, or any
    /// parse error from [`Self::from_reader`].
    #[instrument(name = "graph_file.load", err, skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GraphFileError> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map_or_else(|| path.display().to_string(), |stem| stem.to_string_lossy().into_owned());
        let file = Self::from_reader(name, BufReader::new(File::open(path)?))?;
        debug!(
            vertices = file.graph.len(),
            edges = file.graph.edge_count(),
            "graph file loaded"
        );
        Ok(file)
    }

    /// Replaces the graph name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the graph name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parsed graph.
    #[must_use]
    pub const fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consumes the file and returns its graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

fn parse_edge(line: usize, text: &str) -> Result<(&str, &str, u32), GraphFileError> {
    let mut fields = text.split_whitespace();
    let (Some(a), Some(b), Some(weight), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(GraphFileError::MalformedEdge { line });
    };
    let weight = weight.parse().map_err(|_| GraphFileError::InvalidWeight {
        line,
        value: weight.to_owned(),
    })?;
    Ok((a, b, weight))
}

/// Yields trimmed, non-blank lines with their one-based line numbers.
struct NumberedLines<R> {
    reader: R,
    line: usize,
    buffer: String,
}

impl<R: BufRead> NumberedLines<R> {
    const fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            buffer: String::new(),
        }
    }

    fn next_content(&mut self) -> Result<Option<(usize, String)>, GraphFileError> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            let trimmed = self.buffer.trim();
            if !trimmed.is_empty() {
                return Ok(Some((self.line, trimmed.to_owned())));
            }
        }
    }
}
