pub use std::io::{self, Error, ErrorKind, Result};

use {
    crate::{Chain, Node},
    std::{
        fmt,
        fs::File,
        io::{BufWriter, Write},
        path::Path,
    },
    tracing::{info, instrument},
};

pub const OUTPUT_PATH: &str = "graph_output.txt";

const INDENT: &str = "    ";

struct LabelLine(Node);

impl fmt::Display for LabelLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{INDENT}graph.nodeLabels[{}] = '{}';",
            self.0.index, self.0.label
        )
    }
}

struct EdgeLine(Node);

impl fmt::Display for EdgeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = &self.0;
        write!(
            f,
            "{INDENT}graph.nodeNumEdges[{}] = {};",
            node.index,
            node.num_edges()
        )?;
        if let Some(source) = node.incoming {
            write!(f, " graph.nodeIncomingEdges[0][{}] = {};", node.index, source)?;
        }
        Ok(())
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "graph.numNodes = {};", self.num_nodes())?;
        for node in self.nodes() {
            writeln!(f, "{}", LabelLine(node))?;
        }
        for node in self.nodes() {
            writeln!(f, "{}", EdgeLine(node))?;
        }
        Ok(())
    }
}

pub fn write_text<W>(chain: &Chain, writer: &mut W) -> Result<()>
where
    W: Write,
{
    write!(writer, "{chain}")
}

/// Overwrites `path` with the declaration of `chain`.
#[instrument(skip(chain, path), fields(nodes = chain.num_nodes(), path = %path.as_ref().display()))]
pub fn save<P>(chain: &Chain, path: P) -> Result<()>
where
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    write_text(chain, &mut writer)?;
    writer.flush()?;
    info!("graph block written");
    Ok(())
}
