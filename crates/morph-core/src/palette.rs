use std::fmt;
use std::str::FromStr;

/// Hue/lightness parameters driving per-particle color over time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub start_hue: f32,
    pub range: f32,
    /// Hue cycles per second
    pub speed: f32,
    pub lightness: f32,
    /// UI chrome and hand overlay color, `#rrggbb`
    pub accent: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum PaletteKind {
    #[default]
    CoolTones,
    WarmFire,
    NatureEmerald,
    RetroVaporwave,
    ForestDeep,
    GoldSolar,
    MidnightNebula,
    BubblegumPop,
}

impl PaletteKind {
    pub const ALL: [PaletteKind; 8] = [
        PaletteKind::CoolTones,
        PaletteKind::WarmFire,
        PaletteKind::NatureEmerald,
        PaletteKind::RetroVaporwave,
        PaletteKind::ForestDeep,
        PaletteKind::GoldSolar,
        PaletteKind::MidnightNebula,
        PaletteKind::BubblegumPop,
    ];

    /// Selector value used by the UI.
    pub fn name(self) -> &'static str {
        match self {
            PaletteKind::CoolTones => "cool_tones",
            PaletteKind::WarmFire => "warm_fire",
            PaletteKind::NatureEmerald => "nature_emerald",
            PaletteKind::RetroVaporwave => "retro_vaporwave",
            PaletteKind::ForestDeep => "forest_deep",
            PaletteKind::GoldSolar => "gold_solar",
            PaletteKind::MidnightNebula => "midnight_nebula",
            PaletteKind::BubblegumPop => "bubblegum_pop",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            PaletteKind::CoolTones => Palette::new(0.6, 0.4, 0.2, 0.5, "#00ffff"),
            PaletteKind::WarmFire => Palette::new(0.0, 0.2, 0.3, 0.55, "#ff5500"),
            PaletteKind::NatureEmerald => Palette::new(0.25, 0.25, 0.2, 0.5, "#00ffaa"),
            PaletteKind::RetroVaporwave => Palette::new(0.75, 0.5, 0.4, 0.6, "#ff00ff"),
            PaletteKind::ForestDeep => Palette::new(0.3, 0.2, 0.15, 0.4, "#99ff00"),
            PaletteKind::GoldSolar => Palette::new(0.1, 0.1, 0.35, 0.6, "#ffcc00"),
            PaletteKind::MidnightNebula => Palette::new(0.8, 0.3, 0.25, 0.45, "#9900ff"),
            PaletteKind::BubblegumPop => Palette::new(0.85, 0.15, 0.4, 0.7, "#ff88dd"),
        }
    }
}

impl Palette {
    const fn new(start_hue: f32, range: f32, speed: f32, lightness: f32, accent: &'static str) -> Self {
        Self { start_hue, range, speed, lightness, accent }
    }

    /// Accent color as 8-bit RGB.
    pub fn accent_rgb(&self) -> [u8; 3] {
        let hex = self.accent.trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .unwrap_or(0)
        };
        [channel(0), channel(2), channel(4)]
    }
}

impl FromStr for PaletteKind {
    type Err = UnknownPalette;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        PaletteKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| UnknownPalette(name.to_owned()))
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lookup of a palette name that is not in the fixed table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownPalette(pub String);

impl fmt::Display for UnknownPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown palette '{}'", self.0)
    }
}

impl std::error::Error for UnknownPalette {}
