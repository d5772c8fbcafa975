/// Rendered command output plus whether any input failed.
#[derive(Debug)]
pub struct CommandOutput {
    pub output: String,
    pub has_errors: bool,
}
