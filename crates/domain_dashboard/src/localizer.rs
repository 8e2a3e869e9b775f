//! Reminder localization backed by Fluent
//!
//! Each reminder is one Fluent message: the value is the title, the
//! `advice` and `link` attributes hold the other two texts. Resources are
//! embedded at compile time and parsed once by [`Localizer::load`].
//! Placeholders are inserted verbatim: bidi isolation marks are disabled and
//! no escaping is applied.

use std::collections::HashMap;

use fluent::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use tracing::debug;

use crate::error::DashboardError;
use crate::language::Language;
use crate::reminder::{Occurrence, Reminder, ReminderKind, TemplateValue, TemplateValues};

const EN_REMINDERS: &str = include_str!("../locales/en/reminders.ftl");
const FR_REMINDERS: &str = include_str!("../locales/fr/reminders.ftl");

/// Stands in for `$room` when the damaged room is not in the graph
const UNKNOWN_ROOM: &str = "reminder-unknown-room";

fn source(lang: Language) -> &'static str {
    match lang {
        Language::En => EN_REMINDERS,
        Language::Fr => FR_REMINDERS,
    }
}

/// Parsed translation resources for every supported language
pub struct Localizer {
    resources: HashMap<Language, FluentResource>,
}

impl std::fmt::Debug for Localizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localizer")
            .field("languages", &self.resources.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Localizer {
    /// Parses the embedded resources and checks every catalog entry exists
    ///
    /// # Errors
    ///
    /// `DashboardError::Localization` on a syntax error or a missing message.
    pub fn load() -> Result<Self, DashboardError> {
        let mut resources = HashMap::new();

        for lang in Language::ALL {
            let resource = FluentResource::try_new(source(lang).to_string()).map_err(|(_, errors)| {
                DashboardError::localization(
                    format!("{}/reminders.ftl", lang.code()),
                    format!("{} syntax error(s): {:?}", errors.len(), errors),
                )
            })?;
            resources.insert(lang, resource);
        }

        let localizer = Self { resources };
        for lang in Language::ALL {
            let translator = localizer.translator(lang)?;
            for kind in ReminderKind::ALL {
                if !translator.has_reminder(kind) {
                    return Err(DashboardError::localization(
                        kind.message_id(),
                        format!("missing in {}", lang.code()),
                    ));
                }
            }
            translator.unknown_room()?;
        }

        debug!(languages = Language::ALL.len(), "Reminder translations loaded");
        Ok(localizer)
    }

    /// Builds a translator bound to one language
    pub fn translator(&self, lang: Language) -> Result<Translator<'_>, DashboardError> {
        let resource = self.resources.get(&lang).ok_or_else(|| {
            DashboardError::localization(lang.code(), "language not loaded")
        })?;

        let mut bundle = FluentBundle::new(vec![lang.langid()]);
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|errors| {
            DashboardError::localization(lang.code(), format!("{:?}", errors))
        })?;

        Ok(Translator { lang, bundle })
    }
}

/// Renders occurrences in a single language
pub struct Translator<'a> {
    lang: Language,
    bundle: FluentBundle<&'a FluentResource>,
}

impl<'a> Translator<'a> {

    fn has_reminder(&self, kind: ReminderKind) -> bool {
        self.bundle
            .get_message(kind.message_id())
            .map(|msg| {
                msg.value().is_some()
                    && msg.get_attribute("advice").is_some()
                    && msg.get_attribute("link").is_some()
            })
            .unwrap_or(false)
    }

    fn unknown_room(&self) -> Result<String, DashboardError> {
        let pattern = self
            .bundle
            .get_message(UNKNOWN_ROOM)
            .and_then(|msg| msg.value())
            .ok_or_else(|| {
                DashboardError::localization(UNKNOWN_ROOM, format!("missing in {}", self.lang.code()))
            })?;

        let mut errors = vec![];
        let text = self.bundle.format_pattern(pattern, None, &mut errors).into_owned();
        if !errors.is_empty() {
            return Err(DashboardError::localization(UNKNOWN_ROOM, format!("{:?}", errors)));
        }
        Ok(text)
    }

    /// Resolves the title, advice and link of one occurrence
    ///
    /// # Errors
    ///
    /// `DashboardError::Localization` when the message is missing or a
    /// placeholder has no value.
    pub fn render(&self, occurrence: &Occurrence) -> Result<Reminder, DashboardError> {
        let key = occurrence.kind.message_id();
        let mut args = to_args(&occurrence.values);
        if occurrence.values.get("room").is_none() {
            args.set("room", FluentValue::from(self.unknown_room()?));
        }

        let msg = self
            .bundle
            .get_message(key)
            .ok_or_else(|| DashboardError::localization(key, "message not found"))?;
        let title = msg
            .value()
            .ok_or_else(|| DashboardError::localization(key, "message has no value"))?;
        let advice = msg
            .get_attribute("advice")
            .ok_or_else(|| DashboardError::localization(key, "missing advice"))?;
        let link = msg
            .get_attribute("link")
            .ok_or_else(|| DashboardError::localization(key, "missing link"))?;

        let mut errors = vec![];
        let title = self.bundle.format_pattern(title, Some(&args), &mut errors).into_owned();
        let advice = self
            .bundle
            .format_pattern(advice.value(), Some(&args), &mut errors)
            .into_owned();
        let link = self
            .bundle
            .format_pattern(link.value(), Some(&args), &mut errors)
            .into_owned();

        if !errors.is_empty() {
            return Err(DashboardError::localization(
                key,
                format!("{:?} ({})", errors, self.lang.code()),
            ));
        }

        Ok(Reminder {
            id: occurrence.kind.id().to_string(),
            priority: occurrence.priority,
            title,
            advice,
            link,
        })
    }
}

fn to_args(values: &TemplateValues) -> FluentArgs<'_> {
    let mut args = FluentArgs::new();
    for (key, value) in values.iter() {
        match value {
            TemplateValue::Text(text) => args.set(key, FluentValue::from(text.as_str())),
            TemplateValue::Number(n) => args.set(key, FluentValue::from(*n)),
        }
    }
    args
}
