/// How much of the image an encode pass scrubs of accidental markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Every pixel outside the payload is normalized; the whole image is
    /// scanned on decode.
    #[default]
    Full,
    /// Only payload pixels are touched. A terminator bounds the decode scan.
    Partial,
}

impl Normalization {
    pub fn uses_terminator(self) -> bool {
        matches!(self, Normalization::Partial)
    }
}

impl std::fmt::Display for Normalization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Normalization::Full => write!(f, "full"),
            Normalization::Partial => write!(f, "partial"),
        }
    }
}
