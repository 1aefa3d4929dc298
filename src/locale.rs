use crate::error::CalendarError;
use chrono::Weekday;
use std::str::FromStr;

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const MONTHS_HU: [&str; 12] = [
    "január", "február", "március", "április", "május", "június", "július", "augusztus",
    "szeptember", "október", "november", "december",
];

/// Langue d'affichage des noms de mois et de jours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Hu,
}

impl Locale {
    /// Code court, utilisé pour l'attribut `lang` du HTML.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hu => "hu",
        }
    }

    pub fn month_name(self, month: u32) -> &'static str {
        let names = match self {
            Locale::En => &MONTHS_EN,
            Locale::Hu => &MONTHS_HU,
        };
        month
            .checked_sub(1)
            .and_then(|idx| names.get(idx as usize))
            .copied()
            .unwrap_or("")
    }

    pub fn weekday_abbr(self, weekday: Weekday) -> &'static str {
        match (self, weekday) {
            (Locale::En, Weekday::Mon) => "Mon",
            (Locale::En, Weekday::Tue) => "Tue",
            (Locale::En, Weekday::Wed) => "Wed",
            (Locale::En, Weekday::Thu) => "Thu",
            (Locale::En, Weekday::Fri) => "Fri",
            (Locale::En, Weekday::Sat) => "Sat",
            (Locale::En, Weekday::Sun) => "Sun",
            (Locale::Hu, Weekday::Mon) => "H",
            (Locale::Hu, Weekday::Tue) => "K",
            (Locale::Hu, Weekday::Wed) => "Sze",
            (Locale::Hu, Weekday::Thu) => "Cs",
            (Locale::Hu, Weekday::Fri) => "P",
            (Locale::Hu, Weekday::Sat) => "Szo",
            (Locale::Hu, Weekday::Sun) => "V",
        }
    }

    /// Libellé du mois ; l'ordre année/mois dépend de la langue.
    pub fn month_label(self, year: i32, month: u32) -> String {
        let name = self.month_name(month);
        match self {
            Locale::En => format!("{name} {year}"),
            Locale::Hu => format!("{year}. {name}"),
        }
    }

    /// En-tête du calendrier : titre configuré suivi du libellé du mois.
    pub fn titled_header(self, title: &str, year: i32, month: u32) -> String {
        let label = self.month_label(year, month);
        let title = title.trim();
        if title.is_empty() {
            label
        } else {
            format!("{title} {label}")
        }
    }
}

impl FromStr for Locale {
    type Err = CalendarError;

    /// Accepte `en`, `hu` ou une valeur de type `LANG` (`hu_HU.UTF-8`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = s
            .trim()
            .split(['_', '-', '.'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" | "c" | "posix" => Ok(Locale::En),
            "hu" => Ok(Locale::Hu),
            _ => Err(CalendarError::invalid_parameter("locale", s)),
        }
    }
}
