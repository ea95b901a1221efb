/// Sink for diagnostics emitted while filtering rows
///
/// Injected into the validator so the core pipeline never writes to a global
/// stream directly; tests supply a [`CollectingReporter`] instead of
/// capturing stderr.
pub trait Reporter {
    fn invalid_row(&mut self, row: &[String]);
}

/// Reporter that writes rejected rows to stderr
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn invalid_row(&mut self, row: &[String]) {
        eprintln!("Invalid row: {row:?}");
    }
}

/// Reporter that accumulates rejected rows in memory
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub rejected: Vec<Vec<String>>,
}

impl CollectingReporter {
    #[must_use]
    pub fn new() -> Self {
        CollectingReporter { rejected: vec![] }
    }
}

impl Reporter for CollectingReporter {
    fn invalid_row(&mut self, row: &[String]) {
        self.rejected.push(row.to_vec());
    }
}
