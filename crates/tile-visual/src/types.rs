use thiserror::Error;

#[derive(Error, Debug)]
pub enum VisualError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to process")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, VisualError>;

/// Rotation applied to a tile copy before it is pasted into the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileRotation {
    #[default]
    None,
    Clockwise90,
    Clockwise180,
    Counterclockwise90,
}

impl TileRotation {
    /// Signed angle in degrees, counterclockwise positive
    pub fn degrees(self) -> i32 {
        match self {
            TileRotation::None => 0,
            TileRotation::Clockwise90 => -90,
            TileRotation::Clockwise180 => 180,
            TileRotation::Counterclockwise90 => 90,
        }
    }
}

/// Rotation for the cell at `(row, col)` in an alternating brick pattern.
///
/// The pattern is a fixed 2x2 table, periodic in both axes:
///
/// ```text
/// (0,0) =>   0°   (0,1) => -90°
/// (1,0) => +90°   (1,1) => 180°
/// ```
pub fn pattern_rotation(row: u32, col: u32) -> TileRotation {
    const TABLE: [[TileRotation; 2]; 2] = [
        [TileRotation::None, TileRotation::Clockwise90],
        [TileRotation::Counterclockwise90, TileRotation::Clockwise180],
    ];
    TABLE[(row % 2) as usize][(col % 2) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_table() {
        assert_eq!(pattern_rotation(0, 0), TileRotation::None);
        assert_eq!(pattern_rotation(0, 1), TileRotation::Clockwise90);
        assert_eq!(pattern_rotation(1, 0), TileRotation::Counterclockwise90);
        assert_eq!(pattern_rotation(1, 1), TileRotation::Clockwise180);
    }

    #[test]
    fn test_pattern_periodicity() {
        for row in 0..8 {
            for col in 0..8 {
                assert_eq!(
                    pattern_rotation(row, col),
                    pattern_rotation(row % 2, col % 2),
                    "pattern must repeat with period 2 at ({row}, {col})"
                );
            }
        }
    }

    #[test]
    fn test_signed_degrees() {
        assert_eq!(pattern_rotation(0, 0).degrees(), 0);
        assert_eq!(pattern_rotation(0, 1).degrees(), -90);
        assert_eq!(pattern_rotation(1, 0).degrees(), 90);
        assert_eq!(pattern_rotation(1, 1).degrees(), 180);
    }
}
