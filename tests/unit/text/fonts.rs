use super::*;
use crate::text::shape::{TextBrushRgba8, TextShaper};

fn nowhere() -> FontCandidates {
    FontCandidates {
        regular: vec!["No Such Family 7f3a".to_string()],
        italic: vec!["No Such Family 7f3a".to_string()],
    }
}

#[test]
fn empty_provider_resolves_to_bundled_face() {
    let provider = FontProvider::empty(FontCandidates::default());
    assert_eq!(provider.face_count(), 0);
    for role in [FontRole::Regular, FontRole::Italic] {
        let face = provider.resolve(role);
        assert_eq!(face.origin, FontOrigin::Builtin);
        assert_eq!(face.family, BUILTIN_FAMILY);
        assert!(!face.italic);
        assert!(!face.bytes.is_empty());
    }
}

#[test]
fn bundled_face_shapes_timestamps() {
    let mut shaper = TextShaper::new(&FontFace::builtin()).unwrap();
    let shaped = shaper.shape("01:02:05", 36.0, TextBrushRgba8::WHITE).unwrap();
    assert!(shaped.width() > 0.0);
    assert!(shaped.ascent() > 0.0);
}

#[test]
fn missing_preferred_family_falls_back_without_failing() {
    let provider = FontProvider::system(nowhere());
    for role in [FontRole::Regular, FontRole::Italic] {
        let face = provider.resolve(role);
        assert!(!face.bytes.is_empty());
        if provider.face_count() == 0 {
            assert_eq!(face.origin, FontOrigin::Builtin);
        } else {
            assert_eq!(face.origin, FontOrigin::Fallback);
        }
    }
}

#[test]
fn installed_family_is_preferred() {
    let any = FontProvider::system(nowhere()).resolve(FontRole::Regular);
    if any.origin == FontOrigin::Builtin {
        return;
    }

    let provider = FontProvider::system(FontCandidates {
        regular: vec!["No Such Family 7f3a".to_string(), any.family.clone()],
        italic: vec![],
    });
    let face = provider.resolve(FontRole::Regular);
    assert_eq!(face.origin, FontOrigin::Preferred);
    assert_eq!(face.family, any.family);
}

#[test]
fn font_loaded_from_memory_is_matched_by_family() {
    let mut provider = FontProvider::empty(FontCandidates {
        regular: vec![BUILTIN_FAMILY.to_string()],
        italic: vec![],
    });
    provider.load_font_data(FontFace::builtin().bytes.to_vec());
    assert_eq!(provider.face_count(), 1);

    let face = provider.resolve(FontRole::Regular);
    assert_eq!(face.origin, FontOrigin::Preferred);
    assert_eq!(face.family, BUILTIN_FAMILY);
}

#[test]
fn missing_font_dir_is_ignored() {
    let mut provider = FontProvider::empty(FontCandidates::default());
    provider.load_fonts_dir(Path::new("target/no/such/font/dir"));
    assert_eq!(provider.face_count(), 0);
}

#[test]
fn default_candidates_cover_common_families() {
    let c = FontCandidates::default();
    assert_eq!(c.regular.first().map(String::as_str), Some("Arial"));
    assert!(c.italic.iter().any(|f| f == "DejaVu Sans"));
}
