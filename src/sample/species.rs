use std::fmt::Display;
use std::fmt::Formatter;

/// One of the three Iris classes. The discriminant is the stored label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Setosa = 0,
    Versicolor = 1,
    Virginica = 2,
}

impl Species {
    pub const fn all() -> &'static [Self; crate::N_CLASSES] {
        &[Self::Setosa, Self::Versicolor, Self::Virginica]
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Setosa => "setosa",
            Self::Versicolor => "versicolor",
            Self::Virginica => "virginica",
        }
    }
    pub const fn index(&self) -> usize {
        *self as usize
    }
    /// Trims, drops a leading `Iris-` in any case, and lowercases.
    /// `" Iris-Setosa "` and `"SETOSA"` both become `"setosa"`.
    pub fn normalize(label: &str) -> String {
        let label = label.trim();
        let label = match label.get(..5) {
            Some(prefix) if prefix.eq_ignore_ascii_case("iris-") => &label[5..],
            _ => label,
        };
        label.to_lowercase()
    }
}

impl From<Species> for i32 {
    fn from(species: Species) -> Self {
        species as i32
    }
}

impl From<Species> for usize {
    fn from(species: Species) -> Self {
        species.index()
    }
}

impl TryFrom<i64> for Species {
    type Error = anyhow::Error;
    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Setosa),
            1 => Ok(Self::Versicolor),
            2 => Ok(Self::Virginica),
            _ => Err(anyhow::anyhow!("label out of range: {}", code)),
        }
    }
}

impl TryFrom<usize> for Species {
    type Error = anyhow::Error;
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::try_from(index as i64)
    }
}

/// Accepts integer codes (`2` or `2.0`) or species names in any of the
/// usual spellings.
impl TryFrom<&str> for Species {
    type Error = anyhow::Error;
    fn try_from(label: &str) -> Result<Self, Self::Error> {
        if let Ok(code) = label.trim().parse::<i64>() {
            return Self::try_from(code);
        }
        if let Ok(code) = label.trim().parse::<f64>() {
            return match code.fract() == 0. {
                true => Self::try_from(code as i64),
                false => Err(anyhow::anyhow!("unmapped label: {}", label)),
            };
        }
        match Self::normalize(label).as_str() {
            "setosa" => Ok(Self::Setosa),
            "versicolor" => Ok(Self::Versicolor),
            "virginica" => Ok(Self::Virginica),
            _ => Err(anyhow::anyhow!("unmapped label: {}", label)),
        }
    }
}

impl Display for Species {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_discriminants() {
        for species in Species::all() {
            let code = i32::from(*species) as i64;
            assert!(Species::try_from(code).unwrap() == *species);
        }
        assert!(Species::try_from(3i64).is_err());
        assert!(Species::try_from(-1i64).is_err());
    }

    #[test]
    fn kaggle_spellings_map() {
        assert!(Species::try_from("Iris-setosa").unwrap() == Species::Setosa);
        assert!(Species::try_from(" iris-Versicolor ").unwrap() == Species::Versicolor);
        assert!(Species::try_from("VIRGINICA").unwrap() == Species::Virginica);
        assert!(Species::try_from("2").unwrap() == Species::Virginica);
    }

    #[test]
    fn integral_float_codes_map() {
        assert!(Species::try_from("0.0").unwrap() == Species::Setosa);
        assert!(Species::try_from("1.0").unwrap() == Species::Versicolor);
        assert!(Species::try_from(" 2.0 ").unwrap() == Species::Virginica);
        assert!(Species::try_from("0.5").is_err());
        assert!(Species::try_from("3.0").is_err());
        assert!(Species::try_from("-1.0").is_err());
        assert!(Species::try_from("inf").is_err());
    }

    #[test]
    fn unknown_spellings_fail() {
        assert!(Species::try_from("iris").is_err());
        assert!(Species::try_from("Iris-sibirica").is_err());
        assert!(Species::try_from("").is_err());
    }

    #[test]
    fn normalize_keeps_non_prefixed() {
        assert!(Species::normalize("Iris-") == "");
        assert!(Species::normalize("Irises") == "irises");
        assert!(Species::normalize("  Setosa") == "setosa");
    }
}
