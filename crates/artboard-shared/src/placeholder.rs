//! Keyword-driven placeholder images.
//!
//! Used by the server's mock generator and by clients for offline previews,
//! so both sides always pick the same picture for the same prompt.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// One of the six fixed placeholder categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Sunset,
    Abstract,
    Space,
    Nature,
    City,
    Default,
}

/// Priority-ordered keyword table. First match wins.
const RULES: [(&[&str], Variant); 5] = [
    (&["sunset", "mountain", "landscape"], Variant::Sunset),
    (&["abstract", "art", "painting"], Variant::Abstract),
    (&["space", "galaxy", "stars"], Variant::Space),
    (&["nature", "forest", "tree"], Variant::Nature),
    (&["city", "building", "urban"], Variant::City),
];

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Sunset,
        Variant::Abstract,
        Variant::Space,
        Variant::Nature,
        Variant::City,
        Variant::Default,
    ];

    /// Pick the variant for a prompt by case-insensitive substring match.
    pub fn select(prompt: &str) -> Self {
        let prompt = prompt.to_lowercase();
        RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| prompt.contains(k)))
            .map(|(_, variant)| *variant)
            .unwrap_or(Variant::Default)
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Sunset => "sunset",
            Variant::Abstract => "abstract",
            Variant::Space => "space",
            Variant::Nature => "nature",
            Variant::City => "city",
            Variant::Default => "default",
        }
    }

    /// Raw SVG markup.
    pub fn svg(self) -> &'static str {
        match self {
            Variant::Sunset => SUNSET_SVG,
            Variant::Abstract => ABSTRACT_SVG,
            Variant::Space => SPACE_SVG,
            Variant::Nature => NATURE_SVG,
            Variant::City => CITY_SVG,
            Variant::Default => DEFAULT_SVG,
        }
    }

    /// Base64 of the SVG, shaped like a provider `b64_json` payload.
    pub fn base64(self) -> String {
        STANDARD.encode(self.svg())
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

const SUNSET_SVG: &str = r##"<svg width="400" height="400" viewBox="0 0 400 400" fill="none" xmlns="http://www.w3.org/2000/svg"><defs><linearGradient id="sunset" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="#ffa500"/><stop offset="100%" stop-color="#ff6900"/></linearGradient></defs><rect width="400" height="400" fill="url(#sunset)"/><text x="50%" y="50%" text-anchor="middle" dy=".3em" fill="white" font-family="Arial" font-size="24" opacity="0.8">🌅 Sunset</text></svg>"##;

const ABSTRACT_SVG: &str = r##"<svg width="400" height="400" viewBox="0 0 400 400" fill="none" xmlns="http://www.w3.org/2000/svg"><defs><linearGradient id="abstract" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="#007AFF"/><stop offset="100%" stop-color="#0052CC"/></linearGradient></defs><rect width="400" height="400" fill="url(#abstract)"/><text x="50%" y="50%" text-anchor="middle" dy=".3em" fill="white" font-family="Arial" font-size="24" opacity="0.8">🎨 Abstract</text></svg>"##;

const SPACE_SVG: &str = r##"<svg width="400" height="400" viewBox="0 0 400 400" fill="none" xmlns="http://www.w3.org/2000/svg"><defs><linearGradient id="space" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="#9747FF"/><stop offset="100%" stop-color="#6633BB"/></linearGradient></defs><rect width="400" height="400" fill="url(#space)"/><text x="50%" y="50%" text-anchor="middle" dy=".3em" fill="white" font-family="Arial" font-size="24" opacity="0.8">🚀 Space</text></svg>"##;

const NATURE_SVG: &str = r##"<svg width="400" height="400" viewBox="0 0 400 400" fill="none" xmlns="http://www.w3.org/2000/svg"><defs><linearGradient id="nature" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="#12ff75"/><stop offset="100%" stop-color="#08BB44"/></linearGradient></defs><rect width="400" height="400" fill="url(#nature)"/><text x="50%" y="50%" text-anchor="middle" dy=".3em" fill="white" font-family="Arial" font-size="24" opacity="0.8">🌿 Nature</text></svg>"##;

const CITY_SVG: &str = r##"<svg width="400" height="400" viewBox="0 0 400 400" fill="none" xmlns="http://www.w3.org/2000/svg"><defs><linearGradient id="city" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="#757575"/><stop offset="100%" stop-color="#4A4A4A"/></linearGradient></defs><rect width="400" height="400" fill="url(#city)"/><text x="50%" y="50%" text-anchor="middle" dy=".3em" fill="white" font-family="Arial" font-size="24" opacity="0.8">🏙 City</text></svg>"##;

const DEFAULT_SVG: &str = r##"<svg width="400" height="400" viewBox="0 0 400 400" fill="none" xmlns="http://www.w3.org/2000/svg"><defs><linearGradient id="default" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="#FF6868"/><stop offset="33%" stop-color="#FFB630"/><stop offset="66%" stop-color="#66CCFF"/><stop offset="100%" stop-color="#9747FF"/></linearGradient></defs><rect width="400" height="400" fill="url(#default)"/><text x="50%" y="50%" text-anchor="middle" dy=".3em" fill="white" font-family="Arial" font-size="24" opacity="0.8">✨ AI Magic</text></svg>"##;
