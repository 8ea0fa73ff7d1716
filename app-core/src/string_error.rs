use std::fmt::Display;

/// Extension trait to annotate arbitrary errors and carry them on as plain
/// strings, the error currency of this workspace.
pub trait ErrorStringExt<T> {
    fn err_to_string(self, annotation: &str) -> Result<T, String>;
}

impl<T, E: Display> ErrorStringExt<T> for Result<T, E> {
    fn err_to_string(self, annotation: &str) -> Result<T, String> {
        self.map_err(|error| format!("{annotation}: {error}"))
    }
}
