// MIT/Apache2 License

use super::{ColorStop, Gradient, GradientType, Orientation, Scope};
use crate::{
    color::Color,
    error::{ErrorKind, Result},
    intensity::Intensity,
};
use std::fmt;

/// A named list of colors that can be spread evenly over a gradient.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Preset {
    name: &'static str,
    colors: &'static [Color],
}

macro_rules! presets {
    ($($ident:ident => $name:literal [$($hex:literal),+ $(,)?],)*) => {
        impl Preset {
            $(
                pub const $ident: Preset = Preset {
                    name: $name,
                    colors: &[$(Color::from_hex($hex)),+],
                };
            )*

            /// Every built-in preset.
            pub const ALL: &'static [Preset] = &[$(Preset::$ident,)*];
        }
    };
}

presets! {
    OMOLON => "Omolon" [0x091E3A, 0x2F80ED, 0x2D9EE0],
    FARHAN => "Farhan" [0x9400D3, 0x4B0082],
    PURPLE => "Purple" [0xC84E89, 0xF15F79],
    IBTESAM => "Ibtesam" [0x00F5A0, 0x00D9F5],
    RADIOACTIVE_HEAT => "Radioactive Heat" [0xF7941E, 0x72C6EF, 0x00A651],
    THE_SKY_AND_THE_SEA => "The Sky And The Sea" [0xF7941E, 0x004E8F],
    FROM_ICE_TO_FIRE => "From Ice To Fire" [0x72C6EF, 0x004E8F],
    BLUE_AND_ORANGE => "Blue & Orange" [0xFD8112, 0x0085CA],
    PURPLE_DREAM => "Purple Dream" [0xBF5AE0, 0xA811DA],
    BLU => "Blu" [0x00416A, 0xE4E5E6],
    SUMMER_BREEZE => "Summer Breeze" [0xFBED96, 0xABECD6],
    VER => "Ver" [0xFFE000, 0x799F0C],
    COMBI => "Combi" [0x00416A, 0x799F0C, 0xFFE000],
    BLUELAGOO => "Bluelagoo" [0x0052D4, 0x4364F7, 0x6FB1FC],
    LUNADA => "Lunada" [0x5433FF, 0x20BDFF, 0xA5FECB],
    ARGON => "Argon" [0x03001E, 0x7303C0, 0xEC38BC, 0xFDEFF9],
    UNDER_BLUE_GREEN => "Under Blue Green" [0x051937, 0x004D7A, 0x008793, 0x00BF72, 0xA8EB12],
}

impl Preset {
    /// Create a preset from a static list of colors.
    #[inline]
    pub const fn new(name: &'static str, colors: &'static [Color]) -> Preset {
        Preset { name, colors }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn colors(&self) -> &'static [Color] {
        self.colors
    }

    /// Spread the colors over a gradient: the first at offset `0`, the last at offset `1` and the others evenly
    /// spaced in between. At least two colors are needed.
    pub fn create_gradient(
        &self,
        kind: GradientType,
        orientation: Orientation,
        scope: Scope,
    ) -> Result<Gradient> {
        let n = self.colors.len();
        if n < 2 {
            return Err(ErrorKind::MissingColors.into());
        }

        let step = 1.0 / (n - 1) as f64;
        let last = n - 1;
        let stops = self
            .colors
            .iter()
            .enumerate()
            .map(|(i, &color)| {
                let offset = match i {
                    0 => Intensity::ZERO,
                    i if i == last => Intensity::ONE,
                    i => Intensity::offset(i as f64 * step)?,
                };
                Ok(ColorStop { offset, color })
            })
            .collect::<Result<Vec<ColorStop>>>()?;

        Gradient::new(kind, orientation, scope, stops)
    }

    /// A top-down linear gradient over the chart area.
    #[inline]
    pub fn linear_gradient(&self) -> Result<Gradient> {
        self.create_gradient(
            GradientType::Linear,
            Orientation::default_for(GradientType::Linear),
            Scope::default(),
        )
    }
}

impl fmt::Display for Preset {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
