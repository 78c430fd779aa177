use chrono::{DateTime, Local, Locale, NaiveDate, NaiveDateTime, TimeZone};
use pure_rust_locales::locale_match;

use crate::error::Error;

// Windows locale identifiers; `/C:1033` and `/C:en-US` resolve identically.
const LCID_TABLE: &[(u32, &str)] = &[
    (1025, "ar-SA"),
    (1028, "zh-TW"),
    (1029, "cs-CZ"),
    (1030, "da-DK"),
    (1031, "de-DE"),
    (1032, "el-GR"),
    (1033, "en-US"),
    (1034, "es-ES"),
    (1035, "fi-FI"),
    (1036, "fr-FR"),
    (1037, "he-IL"),
    (1038, "hu-HU"),
    (1040, "it-IT"),
    (1041, "ja-JP"),
    (1042, "ko-KR"),
    (1043, "nl-NL"),
    (1044, "nb-NO"),
    (1045, "pl-PL"),
    (1046, "pt-BR"),
    (1049, "ru-RU"),
    (1053, "sv-SE"),
    (1055, "tr-TR"),
    (1057, "id-ID"),
    (1058, "uk-UA"),
    (1066, "vi-VN"),
    (1081, "hi-IN"),
    (2052, "zh-CN"),
    (2057, "en-GB"),
    (2070, "pt-PT"),
    (3082, "es-ES"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Culture {
    name: String,
    locale: Locale,
}

impl Culture {
    pub fn resolve(value: &str) -> Result<Self, Error> {
        match value.parse::<u32>() {
            Ok(lcid) => Self::from_lcid(lcid),
            Err(_) => Self::named(value),
        }
    }

    pub fn from_lcid(lcid: u32) -> Result<Self, Error> {
        let name = LCID_TABLE
            .iter()
            .find(|(id, _)| *id == lcid)
            .map(|(_, name)| *name)
            .ok_or_else(|| Error::UnknownCulture(lcid.to_string()))?;
        Self::named(name)
    }

    pub fn named(name: &str) -> Result<Self, Error> {
        let normalized = name.replace('-', "_");
        let locale = Locale::try_from(normalized.as_str())
            .map_err(|_| Error::UnknownCulture(name.to_string()))?;
        // Canonical display form uses the dashed spelling where we know it.
        let canonical = LCID_TABLE
            .iter()
            .find(|(_, n)| n.replace('-', "_") == normalized)
            .map(|(_, n)| (*n).to_string());
        Ok(Culture {
            name: canonical.unwrap_or(normalized),
            locale,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // Tries the locale's own date/time patterns first, then ISO-8601.
    pub fn parse(&self, value: &str) -> Result<DateTime<Local>, Error> {
        let value = value.trim();
        let d_fmt = locale_match!(self.locale => LC_TIME::D_FMT);
        let t_fmt = locale_match!(self.locale => LC_TIME::T_FMT);
        let t_fmt_ampm = locale_match!(self.locale => LC_TIME::T_FMT_AMPM);

        let mut candidates = vec![
            format!("{d_fmt} {t_fmt}"),
            format!("{d_fmt} %H:%M:%S"),
            format!("{d_fmt} %H:%M"),
        ];
        if !t_fmt_ampm.is_empty() && t_fmt_ampm != t_fmt {
            candidates.insert(1, format!("{d_fmt} {t_fmt_ampm}"));
        }
        candidates.extend([
            "%Y-%m-%d %H:%M:%S".to_string(),
            "%Y-%m-%dT%H:%M:%S".to_string(),
        ]);

        for candidate in &candidates {
            if let Ok(naive) = NaiveDateTime::parse_from_str(value, candidate) {
                return self.into_local(naive, value);
            }
        }

        // Date-only forms resolve to midnight.
        for candidate in [d_fmt, "%Y-%m-%d"] {
            if let Ok(date) = NaiveDate::parse_from_str(value, candidate) {
                if let Some(naive) = date.and_hms_opt(0, 0, 0) {
                    return self.into_local(naive, value);
                }
            }
        }

        Err(self.parse_error(value))
    }

    pub fn format(&self, date_time: &DateTime<Local>) -> String {
        date_time.format_localized("%c", self.locale).to_string()
    }

    fn into_local(&self, naive: NaiveDateTime, value: &str) -> Result<DateTime<Local>, Error> {
        Local
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| self.parse_error(value))
    }

    fn parse_error(&self, value: &str) -> Error {
        Error::DateTimeParse {
            value: value.to_string(),
            culture: self.name.to_string(),
        }
    }
}

impl Default for Culture {
    fn default() -> Self {
        // A portable binary has no Windows current-culture to inherit;
        // en-US is the culture the usage examples are written in.
        Culture {
            name: "en-US".to_string(),
            locale: Locale::en_US,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn default_culture_parses_us_datetime() -> Result<(), Error> {
        let culture = Culture::default();
        let parsed = culture.parse("5/11/2020 11:54:34 AM")?;
        assert_eq!(
            (parsed.year(), parsed.month(), parsed.day()),
            (2020, 5, 11)
        );
        assert_eq!(
            (parsed.hour(), parsed.minute(), parsed.second()),
            (11, 54, 34)
        );
        Ok(())
    }

    #[test]
    fn lcid_and_name_resolve_to_same_culture() -> Result<(), Error> {
        let by_id = Culture::from_lcid(1033)?;
        let by_name = Culture::named("en-US")?;
        assert_eq!(by_id, by_name);

        let value = "5/11/2020 11:54:34 PM";
        assert_eq!(by_id.parse(value)?, by_name.parse(value)?);
        Ok(())
    }

    #[test]
    fn resolve_dispatches_on_numeric_values() -> Result<(), Error> {
        assert_eq!(Culture::resolve("1033")?, Culture::resolve("en-US")?);
        assert_eq!(Culture::resolve("en_GB")?, Culture::resolve("2057")?);
        Ok(())
    }

    #[test]
    fn german_culture_parses_day_first() -> Result<(), Error> {
        let culture = Culture::named("de-DE")?;
        let parsed = culture.parse("11.05.2020 13:54:34")?;
        assert_eq!(
            (parsed.year(), parsed.month(), parsed.day()),
            (2020, 5, 11)
        );
        assert_eq!(parsed.hour(), 13);
        Ok(())
    }

    #[test]
    fn iso_fallback_is_accepted_in_any_culture() -> Result<(), Error> {
        for name in ["en-US", "de-DE", "ja-JP"] {
            let culture = Culture::named(name)?;
            let parsed = culture.parse("2020-05-11 11:54:34")?;
            assert_eq!(parsed.hour(), 11);
            let midnight = culture.parse("2020-05-11")?;
            assert_eq!((midnight.hour(), midnight.minute()), (0, 0));
        }
        Ok(())
    }

    #[test]
    fn unknown_cultures_are_errors() {
        assert!(matches!(
            Culture::named("xx-XX"),
            Err(Error::UnknownCulture(_))
        ));
        assert!(matches!(
            Culture::from_lcid(99999),
            Err(Error::UnknownCulture(_))
        ));
    }

    #[test]
    fn garbage_datetime_is_a_parse_error() {
        let culture = Culture::default();
        assert!(matches!(
            culture.parse("not a date"),
            Err(Error::DateTimeParse { .. })
        ));
    }

    #[test]
    fn format_uses_locale_pattern() -> Result<(), Error> {
        let culture = Culture::default();
        let parsed = culture.parse("5/11/2020 11:54:34 AM")?;
        let formatted = culture.format(&parsed);
        assert!(formatted.contains("2020"), "{formatted}");
        Ok(())
    }
}
