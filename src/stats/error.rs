use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SignificanceError {
    InvalidShape { name: &'static str, value: f32 },
    PointOutOfRange(f32),
    InvalidDegreesOfFreedom(f32),
    NonFiniteStatistic(f32),
}

impl std::error::Error for SignificanceError {}

impl fmt::Display for SignificanceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SignificanceError::InvalidShape { name, value } => {
                write!(f, "Shape parameter '{}' must be positive, got {}", name, value)
            }
            SignificanceError::PointOutOfRange(x) => {
                write!(f, "Evaluation point must lie in [0, 1], got {}", x)
            }
            SignificanceError::InvalidDegreesOfFreedom(df) => {
                write!(f, "Degrees of freedom must be positive, got {}", df)
            }
            SignificanceError::NonFiniteStatistic(t) => {
                write!(f, "t-statistic must be finite, got {}", t)
            }
        }
    }
}
