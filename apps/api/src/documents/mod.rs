// Document Loader: reads the documents directory into one labeled corpus.
// Per-file failures are recovered here and never reach the request boundary.

pub mod loader;
pub mod readers;
