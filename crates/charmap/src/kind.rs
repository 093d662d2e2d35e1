use std::fmt;
use std::str::FromStr;

/// Style of a font face as written on the character map header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontKind {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontKind {
    /// Derive the kind from the bold/italic flags of a font face.
    ///
    /// Bold-italic wins over either flag alone.
    pub fn from_style(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (true, true) => FontKind::BoldItalic,
            (true, false) => FontKind::Bold,
            (false, true) => FontKind::Italic,
            (false, false) => FontKind::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FontKind::Normal => "normal",
            FontKind::Bold => "bold",
            FontKind::Italic => "italic",
            FontKind::BoldItalic => "bold-italic",
        }
    }

    pub fn is_bold(&self) -> bool {
        matches!(self, FontKind::Bold | FontKind::BoldItalic)
    }

    pub fn is_italic(&self) -> bool {
        matches!(self, FontKind::Italic | FontKind::BoldItalic)
    }
}

impl fmt::Display for FontKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(FontKind::Normal),
            "bold" => Ok(FontKind::Bold),
            "italic" => Ok(FontKind::Italic),
            "bold-italic" => Ok(FontKind::BoldItalic),
            other => Err(format!("Unknown font kind: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_style() {
        assert_eq!(FontKind::from_style(true, true).as_str(), "bold-italic");
        assert_eq!(FontKind::from_style(true, false).as_str(), "bold");
        assert_eq!(FontKind::from_style(false, true).as_str(), "italic");
        assert_eq!(FontKind::from_style(false, false).as_str(), "normal");
    }

    #[test]
    fn test_kind_flags_match_style() {
        for bold in [false, true] {
            for italic in [false, true] {
                let kind = FontKind::from_style(bold, italic);
                assert_eq!(kind.is_bold(), bold);
                assert_eq!(kind.is_italic(), italic);
            }
        }
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("bold-italic".parse::<FontKind>(), Ok(FontKind::BoldItalic));
        assert_eq!("normal".parse::<FontKind>(), Ok(FontKind::Normal));
        assert!("Bold".parse::<FontKind>().is_err());
        assert!("".parse::<FontKind>().is_err());
    }
}
