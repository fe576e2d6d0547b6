use typed_builder::TypedBuilder;

/// Bounds applied while walking grid paths.
///
/// Path enumeration is exponential in grid size, so callers with large grids
/// should set `max_path_len`.
#[derive(TypedBuilder, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumerationConfig {
    /// Longest path, in cells. `None` walks every simple path.
    #[builder(default, setter(strip_option))]
    pub max_path_len: Option<usize>,
    /// Shortest path string, in characters, that gets inserted.
    #[builder(default = 1)]
    pub min_word_len: usize,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        EnumerationConfig::builder().build()
    }
}

impl EnumerationConfig {
    pub fn new() -> EnumerationConfig {
        Default::default()
    }

    pub(crate) fn allows_len(&self, cells: usize) -> bool {
        self.max_path_len.map_or(true, |max| cells <= max)
    }
}
