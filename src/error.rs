use thiserror::Error;

/// The generic Error type, covering every failure this library can return.
///
/// Building nodes, edges and documents is total: labels, options and identifiers are
/// accepted as-is and copied verbatim into the output. The only fallible step is handing
/// the finished document to a writer, so the only variant wraps the writer's I/O error.
///
/// # Examples
///
/// ```rust
/// use astdot::{example, Error, GraphBuilder};
///
/// let mut builder = GraphBuilder::new();
/// let mut out = Vec::new();
/// match example::emit(&mut builder, &mut out) {
///     Ok(()) => println!("{}", String::from_utf8_lossy(&out)),
///     Err(Error::Io(io_err)) => eprintln!("Could not write document: {io_err}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Writing the document to its destination failed.
    ///
    /// Wraps standard I/O errors raised by the destination writer, such as a
    /// closed pipe when stdout is piped into a process that exited early.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
