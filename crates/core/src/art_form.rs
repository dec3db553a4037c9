//! The recognized folk-art forms.

/// Art form classification for an artwork.
///
/// Stored as text in the database. Client input is folded onto this set at
/// the edges, so unrecognized values never reach a row: anything that is not
/// an exact match for a known form becomes [`ArtForm::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtForm {
    Warli,
    Pithora,
    Madhubani,
    Gond,
    Kalamkari,
    Bhil,
    Pattachitra,
    Other,
}

impl ArtForm {
    /// Every recognized form, in display order.
    pub const ALL: [ArtForm; 8] = [
        ArtForm::Warli,
        ArtForm::Pithora,
        ArtForm::Madhubani,
        ArtForm::Gond,
        ArtForm::Kalamkari,
        ArtForm::Bhil,
        ArtForm::Pattachitra,
        ArtForm::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArtForm::Warli => "Warli",
            ArtForm::Pithora => "Pithora",
            ArtForm::Madhubani => "Madhubani",
            ArtForm::Gond => "Gond",
            ArtForm::Kalamkari => "Kalamkari",
            ArtForm::Bhil => "Bhil",
            ArtForm::Pattachitra => "Pattachitra",
            ArtForm::Other => "Other",
        }
    }

    /// Parse client input. Missing, blank, or unrecognized values become
    /// [`ArtForm::Other`]; matching is exact after trimming.
    pub fn parse_or_other(input: Option<&str>) -> Self {
        let Some(input) = input else {
            return ArtForm::Other;
        };
        match input.trim() {
            "Warli" => ArtForm::Warli,
            "Pithora" => ArtForm::Pithora,
            "Madhubani" => ArtForm::Madhubani,
            "Gond" => ArtForm::Gond,
            "Kalamkari" => ArtForm::Kalamkari,
            "Bhil" => ArtForm::Bhil,
            "Pattachitra" => ArtForm::Pattachitra,
            _ => ArtForm::Other,
        }
    }
}
