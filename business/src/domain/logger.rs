/// Logging port for use cases. The presentation layer decides the sink;
/// the core never logs directly through `tracing` so tests can assert on
/// or silence log output.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
