use std::fmt;

/// 페이지뷰당 배출량 등급
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EmissionRating {
    APlus,
    A,
    B,
    C,
    D,
    E,
    F,
}

/// (상한 grams, 등급) - 상한 포함
const THRESHOLDS: [(f64, EmissionRating); 6] = [
    (0.095, EmissionRating::APlus),
    (0.186, EmissionRating::A),
    (0.341, EmissionRating::B),
    (0.493, EmissionRating::C),
    (0.656, EmissionRating::D),
    (0.846, EmissionRating::E),
];

impl EmissionRating {
    pub fn from_grams(grams: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(limit, _)| grams <= *limit)
            .map(|(_, rating)| *rating)
            .unwrap_or(EmissionRating::F)
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmissionRating::APlus => "A+",
            EmissionRating::A => "A",
            EmissionRating::B => "B",
            EmissionRating::C => "C",
            EmissionRating::D => "D",
            EmissionRating::E => "E",
            EmissionRating::F => "F",
        }
    }
}

impl fmt::Display for EmissionRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
