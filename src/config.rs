use clap::ValueEnum;

/// Decides which root survives a union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Linking {
    /// The first argument's root is attached under the second's.
    #[default]
    Unconditional,
    /// The smaller set goes under the larger one. Ties behave like
    /// `Unconditional`.
    BySize,
}

impl Linking {
    /// Returns `true` if the root `x` (of size `size_x`) should be attached
    /// under the root `y` (of size `size_y`), where `x` belongs to the first
    /// argument of the union.
    #[inline]
    pub fn first_under_second(self, size_x: usize, size_y: usize) -> bool {
        match self {
            Linking::Unconditional => true,
            Linking::BySize => size_x <= size_y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub linking: Linking,
    /// Report re-added elements at `info` instead of `debug`.
    pub report_duplicates: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            linking: Linking::Unconditional,
            report_duplicates: true,
        }
    }
}
