use std::fmt;

use icu::{
    calendar::{Date as IcuDate, Iso},
    collator::{Collator, CollatorBorrowed, options::CollatorOptions},
    datetime::{DateTimeFormatter, DateTimeFormatterPreferences, fieldsets::YMD},
    locale::Locale,
};
use jiff::{Zoned, civil::Date, tz::TimeZone};
use jiff_icu::ConvertFrom;
use snafu::ResultExt;

use crate::error::{
    BadDateTimeFormatterSnafu, InvalidCollatorSnafu, InvalidLocaleSnafu, InvalidTimezoneSnafu,
    RosterResult,
};

pub const DEFAULT_TIMEZONE: &str = "Asia/Ho_Chi_Minh";
pub const DEFAULT_LOCALE: &str = "vi";

/// Where "today" is, and how dates and names are shown and ordered.
pub struct DateLocaleConfig {
    pub timezone: TimeZone,
    pub locale: Locale,
    dtf_prefs: DateTimeFormatterPreferences,
    collator: CollatorBorrowed<'static>,
}

impl fmt::Debug for DateLocaleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateLocaleConfig")
            .field("timezone", &self.timezone.iana_name().unwrap_or("UTC"))
            .field("locale", &self.locale.to_string())
            .finish_non_exhaustive()
    }
}

impl DateLocaleConfig {
    pub fn new(timezone: &str, locale: &str) -> RosterResult<Self> {
        let timezone = TimeZone::get(timezone).context(InvalidTimezoneSnafu { tz: timezone })?;
        let locale = Locale::try_from_str(locale).context(InvalidLocaleSnafu { provided: locale })?;

        let dtf_prefs: DateTimeFormatterPreferences = (&locale).into();
        let collator = Collator::try_new((&locale).into(), CollatorOptions::default())
            .context(InvalidCollatorSnafu {
                locale: locale.to_string(),
            })?;

        Ok(Self {
            timezone,
            locale,
            dtf_prefs,
            collator,
        })
    }

    pub fn today(&self) -> Date {
        Zoned::now().with_time_zone(self.timezone.clone()).date()
    }

    pub const fn collator(&self) -> &CollatorBorrowed<'static> {
        &self.collator
    }

    //TODO: build the formatter once instead of on every call
    pub fn short_ymd(&self, date: Date) -> RosterResult<String> {
        let formatter = DateTimeFormatter::try_new(self.dtf_prefs, YMD::short())
            .context(BadDateTimeFormatterSnafu)?;

        Ok(formatter
            .format(&IcuDate::<Iso>::convert_from(date))
            .to_string())
    }
}
