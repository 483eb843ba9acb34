/// Everything that can go wrong inside the picker.
///
/// Picker operations themselves never hand these to the shell: degenerate
/// geometry is logged and skipped. Only config loading returns them.
#[derive(thiserror::Error, Debug)]
pub enum PickerError {
    #[error("degenerate field geometry {width}x{height}")]
    DegenerateGeometry { width: f64, height: f64 },
    #[error("invalid picker config: {0}")]
    Config(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
