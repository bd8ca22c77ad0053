use std::collections::HashSet;

use morph_core::palette::{PaletteKind, UnknownPalette};

#[test]
fn test_default_is_cool_tones() {
    let palette = PaletteKind::default().palette();
    assert_eq!(palette.start_hue, 0.6);
    assert_eq!(palette.range, 0.4);
    assert_eq!(palette.speed, 0.2);
    assert_eq!(palette.lightness, 0.5);
    assert_eq!(palette.accent, "#00ffff");
}

#[test]
fn test_table_values() {
    let fire = PaletteKind::WarmFire.palette();
    assert_eq!((fire.start_hue, fire.range, fire.speed, fire.lightness), (0.0, 0.2, 0.3, 0.55));
    let nebula = PaletteKind::MidnightNebula.palette();
    assert_eq!((nebula.start_hue, nebula.range, nebula.speed, nebula.lightness), (0.8, 0.3, 0.25, 0.45));
    assert_eq!(nebula.accent, "#9900ff");
}

#[test]
fn test_all_palettes_in_range() {
    for kind in PaletteKind::ALL {
        let p = kind.palette();
        assert!((0.0..1.0).contains(&p.start_hue), "{} start hue", kind);
        assert!(p.range > 0.0 && p.range <= 1.0, "{} range", kind);
        assert!(p.speed > 0.0, "{} speed", kind);
        assert!(p.lightness > 0.0 && p.lightness < 1.0, "{} lightness", kind);
        assert!(p.accent.starts_with('#') && p.accent.len() == 7, "{} accent", kind);
    }
}

#[test]
fn test_names_unique() {
    let names: HashSet<&str> = PaletteKind::ALL.iter().map(|k| k.name()).collect();
    assert_eq!(names.len(), PaletteKind::ALL.len());
}

#[test]
fn test_unknown_name_fails() {
    let err = "neon_dream".parse::<PaletteKind>().unwrap_err();
    assert_eq!(err, UnknownPalette("neon_dream".to_string()));
    assert_eq!(err.to_string(), "unknown palette 'neon_dream'");
}

#[test]
fn test_lookup_is_case_sensitive() {
    assert!("Cool_Tones".parse::<PaletteKind>().is_err());
    assert_eq!("bubblegum_pop".parse::<PaletteKind>(), Ok(PaletteKind::BubblegumPop));
}
