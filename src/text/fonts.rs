//! Typeface discovery.
//!
//! Faces come from a `fontdb` database (system fonts plus optional extra directories). Each
//! role has an ordered list of preferred family names; resolution takes the first family that
//! is installed, then a generic sans-serif, then any face at all. A machine without fonts
//! falls back to the bundled Tuffy face, so resolution always yields something to draw with.

use std::{
    path::Path,
    sync::Arc,
};

use usvg::fontdb;

/// Tuffy Regular (public domain), the last resort when no face is installed.
const BUILTIN_FONT: &[u8] = include_bytes!("../../assets/fonts/Tuffy.ttf");

/// Family name of the bundled face.
pub const BUILTIN_FAMILY: &str = "Tuffy";

/// Which of the two typefaces a renderer needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontRole {
    /// Upright text: info panel and timestamps.
    Regular,
    /// Slanted text: the watermark caption.
    Italic,
}

/// Where a resolved face came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontOrigin {
    /// One of the preferred candidate families.
    Preferred,
    /// A generic or arbitrary installed face.
    Fallback,
    /// The face compiled into the crate.
    Builtin,
}

/// Ordered family-name preferences per role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontCandidates {
    /// Families tried, in order, for [`FontRole::Regular`].
    pub regular: Vec<String>,
    /// Families tried, in order, for [`FontRole::Italic`] (queried with an italic style).
    pub italic: Vec<String>,
}

impl Default for FontCandidates {
    fn default() -> Self {
        let families: Vec<String> = ["Arial", "DejaVu Sans", "Liberation Sans"]
            .into_iter()
            .map(String::from)
            .collect();
        Self {
            regular: families.clone(),
            italic: families,
        }
    }
}

impl FontCandidates {
    fn for_role(&self, role: FontRole) -> &[String] {
        match role {
            FontRole::Regular => &self.regular,
            FontRole::Italic => &self.italic,
        }
    }
}

/// A single face ready for shaping and rasterization.
#[derive(Clone)]
pub struct FontFace {
    /// Primary family name reported by the font.
    pub family: String,
    /// Whole font file bytes (may be a collection).
    pub bytes: Arc<Vec<u8>>,
    /// Face index inside `bytes`.
    pub index: u32,
    /// `true` when the face is italic or oblique.
    pub italic: bool,
    /// How the face was found.
    pub origin: FontOrigin,
}

impl FontFace {
    /// The bundled upright face.
    pub fn builtin() -> Self {
        Self {
            family: BUILTIN_FAMILY.to_string(),
            bytes: Arc::new(BUILTIN_FONT.to_vec()),
            index: 0,
            italic: false,
            origin: FontOrigin::Builtin,
        }
    }
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("family", &self.family)
            .field("bytes_len", &self.bytes.len())
            .field("index", &self.index)
            .field("italic", &self.italic)
            .field("origin", &self.origin)
            .finish()
    }
}

/// Font lookup service backed by a `fontdb` database.
pub struct FontProvider {
    db: fontdb::Database,
    candidates: FontCandidates,
}

impl FontProvider {
    /// Provider over the host's installed fonts.
    pub fn system(candidates: FontCandidates) -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        Self { db, candidates }
    }

    /// Provider with no faces loaded; every role resolves to the bundled face until fonts
    /// are added.
    pub fn empty(candidates: FontCandidates) -> Self {
        Self {
            db: fontdb::Database::new(),
            candidates,
        }
    }

    /// Load every `.ttf`/`.otf`/`.ttc` file directly inside `dir`. Unreadable entries are
    /// ignored.
    pub fn load_fonts_dir(&mut self, dir: &Path) {
        let Ok(rd) = std::fs::read_dir(dir) else {
            tracing::debug!(dir = %dir.display(), "font directory not readable");
            return;
        };

        for entry in rd.flatten() {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
                continue;
            };
            let ext = ext.to_ascii_lowercase();
            if ext != "ttf" && ext != "otf" && ext != "ttc" {
                continue;
            }
            if let Err(err) = self.db.load_font_file(&path) {
                tracing::debug!(path = %path.display(), %err, "skipping unreadable font");
            }
        }
    }

    /// Add a font from memory.
    pub fn load_font_data(&mut self, bytes: Vec<u8>) {
        self.db.load_font_data(bytes);
    }

    /// Number of faces known to the provider.
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Resolve the face for `role`: first installed candidate, else an installed fallback,
    /// else [`FontFace::builtin`].
    pub fn resolve(&self, role: FontRole) -> FontFace {
        let style = match role {
            FontRole::Regular => fontdb::Style::Normal,
            FontRole::Italic => fontdb::Style::Italic,
        };

        for name in self.candidates.for_role(role) {
            let found = self
                .query(&[fontdb::Family::Name(name)], style)
                .and_then(|id| self.load_face(id, FontOrigin::Preferred));
            if let Some(face) = found {
                return face;
            }
        }

        let fallback = self
            .query(&[fontdb::Family::SansSerif], style)
            .or_else(|| {
                self.db
                    .faces()
                    .find(|f| (f.style == fontdb::Style::Normal) == (style == fontdb::Style::Normal))
                    .map(|f| f.id)
            })
            .or_else(|| self.db.faces().next().map(|f| f.id));

        match fallback.and_then(|id| self.load_face(id, FontOrigin::Fallback)) {
            Some(face) => {
                tracing::warn!(
                    ?role,
                    family = %face.family,
                    "no preferred font family installed, using fallback"
                );
                face
            }
            None => {
                tracing::warn!(
                    ?role,
                    family = BUILTIN_FAMILY,
                    "no fonts installed, using bundled face"
                );
                FontFace::builtin()
            }
        }
    }

    fn query(&self, families: &[fontdb::Family<'_>], style: fontdb::Style) -> Option<fontdb::ID> {
        self.db.query(&fontdb::Query {
            families,
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Normal,
            style,
        })
    }

    fn load_face(&self, id: fontdb::ID, origin: FontOrigin) -> Option<FontFace> {
        let info = self.db.face(id)?;
        let family = info
            .families
            .first()
            .map(|(name, _)| name.clone())
            .unwrap_or_else(|| info.post_script_name.clone());
        let italic = info.style != fontdb::Style::Normal;
        let (bytes, index) = self
            .db
            .with_face_data(id, |data, index| (data.to_vec(), index))?;
        Some(FontFace {
            family,
            bytes: Arc::new(bytes),
            index,
            italic,
            origin,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/fonts.rs"]
mod tests;
