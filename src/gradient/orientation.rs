// MIT/Apache2 License

keyed_enum! {
    /// Whether a gradient progresses along a line or between two circles.
    pub enum GradientType ("gradient type") {
        Linear => "linear",
        Radial => "radial",
    }
}

keyed_enum! {
    /// The direction a gradient progresses in.
    ///
    /// The first eight variants belong to linear gradients, the last two to radial ones. Diagonal variants are
    /// named after the corner the gradient travels towards from the opposite one, as seen from the start
    /// point: `TopRight` runs from the top-left corner to the bottom-right one.
    pub enum Orientation ("gradient orientation") {
        /// Top edge to bottom edge.
        TopDown => "topDown",
        /// Bottom edge to top edge.
        BottomUp => "bottomUp",
        /// Left edge to right edge.
        LeftRight => "leftRight",
        /// Right edge to left edge.
        RightLeft => "rightLeft",
        /// Top-left corner to bottom-right corner.
        TopRight => "topRight",
        /// Bottom-right corner to top-left corner.
        BottomLeft => "bottomLeft",
        /// Top-right corner to bottom-left corner.
        TopLeft => "topLeft",
        /// Bottom-left corner to top-right corner.
        BottomRight => "bottomRight",
        /// Center to border.
        InOut => "inOut",
        /// Border to center.
        OutIn => "outIn",
    }
}

keyed_enum! {
    /// The region a gradient is computed against.
    pub enum Scope ("gradient scope") {
        /// The whole drawing surface.
        Canvas => "canvas",
        /// The plotting area of the chart.
        Chart => "chart",
    }
}

impl Orientation {
    /// The gradient type this orientation belongs to.
    #[inline]
    pub fn gradient_type(self) -> GradientType {
        match self {
            Orientation::TopDown
            | Orientation::BottomUp
            | Orientation::LeftRight
            | Orientation::RightLeft
            | Orientation::TopRight
            | Orientation::BottomLeft
            | Orientation::TopLeft
            | Orientation::BottomRight => GradientType::Linear,
            Orientation::InOut | Orientation::OutIn => GradientType::Radial,
        }
    }

    /// The orientation used when none, or a mismatching one, is given for a gradient type.
    #[inline]
    pub fn default_for(kind: GradientType) -> Orientation {
        match kind {
            GradientType::Linear => Orientation::TopDown,
            GradientType::Radial => Orientation::InOut,
        }
    }
}

impl Default for GradientType {
    #[inline]
    fn default() -> Self {
        GradientType::Linear
    }
}

impl Default for Scope {
    #[inline]
    fn default() -> Self {
        Scope::Chart
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_keys_round_trip() {
        for &o in Orientation::ALL {
            assert_eq!(o.as_str().parse::<Orientation>().unwrap(), o);
        }
        assert_eq!("radial".parse::<GradientType>().unwrap(), GradientType::Radial);
        assert_eq!("canvas".parse::<Scope>().unwrap(), Scope::Canvas);
    }

    #[test]
    fn test_unknown_key() {
        let err = "diagonal".parse::<Orientation>().unwrap_err();
        assert_eq!(
            err.kind(),
            &ErrorKind::UnknownKey("gradient orientation", "diagonal".to_string())
        );
    }

    #[test]
    fn test_types() {
        let linear = Orientation::ALL
            .iter()
            .filter(|o| o.gradient_type() == GradientType::Linear)
            .count();
        assert_eq!(linear, 8);
        assert_eq!(Orientation::default_for(GradientType::Radial), Orientation::InOut);
        assert_eq!(Orientation::default_for(GradientType::Linear), Orientation::TopDown);
    }
}
