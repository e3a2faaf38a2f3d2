/// Fill bucket for a cell, stepped on variance. Upper bounds are inclusive
/// except the open-ended hot bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarianceBucket {
    ColdBlue,
    LightBlue,
    Amber,
    Red,
}

impl VarianceBucket {
    /// `<= -1` cold blue, `(-1, 0]` light blue, `(0, 1]` amber, `> 1` red.
    pub fn for_variance(variance: f64) -> Self {
        if variance <= -1.0 {
            VarianceBucket::ColdBlue
        } else if variance <= 0.0 {
            VarianceBucket::LightBlue
        } else if variance <= 1.0 {
            VarianceBucket::Amber
        } else {
            VarianceBucket::Red
        }
    }

    /// SVG fill color for the bucket.
    pub fn hex(self) -> &'static str {
        match self {
            VarianceBucket::ColdBlue => "#0f52ba",
            VarianceBucket::LightBlue => "#87ceeb",
            VarianceBucket::Amber => "#ffbf00",
            VarianceBucket::Red => "#ee4b2b",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_interiors() {
        assert_eq!(VarianceBucket::for_variance(-1.5), VarianceBucket::ColdBlue);
        assert_eq!(VarianceBucket::for_variance(-0.5), VarianceBucket::LightBlue);
        assert_eq!(VarianceBucket::for_variance(0.9), VarianceBucket::Amber);
        assert_eq!(VarianceBucket::for_variance(2.0), VarianceBucket::Red);
    }

    #[test]
    fn test_bucket_boundaries_inclusive_upper() {
        assert_eq!(VarianceBucket::for_variance(-1.0), VarianceBucket::ColdBlue);
        assert_eq!(VarianceBucket::for_variance(0.0), VarianceBucket::LightBlue);
        assert_eq!(VarianceBucket::for_variance(1.0), VarianceBucket::Amber);
    }

    #[test]
    fn test_hex_values() {
        assert_eq!(VarianceBucket::ColdBlue.hex(), "#0f52ba");
        assert_eq!(VarianceBucket::LightBlue.hex(), "#87ceeb");
        assert_eq!(VarianceBucket::Amber.hex(), "#ffbf00");
        assert_eq!(VarianceBucket::Red.hex(), "#ee4b2b");
    }
}
