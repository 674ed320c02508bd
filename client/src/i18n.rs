//! Static translation catalogs for auth screens.
//!
//! DESIGN
//! ======
//! Keys are addressed as `(namespace, section, key)`. Lookups fall back to the
//! English catalog, then to the dotted key itself, so a missing translation
//! shows up visibly instead of rendering empty.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    /// Map a BCP 47 tag (`de-AT`, `en_US`, `DE`) onto a supported language.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("de") { Self::De } else { Self::En }
    }

    /// Browser language in hydrate builds, English otherwise.
    pub fn detect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.navigator().language())
                .map_or(Self::En, |tag| Self::from_tag(&tag))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::En
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    fn catalog(self) -> &'static [Entry] {
        match self {
            Self::En => EN,
            Self::De => DE,
        }
    }
}

type Entry = (&'static str, &'static str, &'static str, &'static str);

const EN: &[Entry] = &[
    ("auth", "login", "title", "Sign in"),
    ("auth", "login", "email", "Email"),
    ("auth", "login", "password", "Password"),
    ("auth", "login", "placeholder", "you@example.com"),
    ("auth", "login", "cta", "Sign in"),
    ("auth", "login", "pending", "Signing in..."),
    ("auth", "error", "email", "Please enter a valid email address."),
    ("auth", "error", "required", "This field is required."),
    ("auth", "error", "failed", "Sign-in failed. Please check your details and try again."),
    ("app", "landing", "title", "You are signed in."),
    ("app", "landing", "onboarding", "Welcome! Let's finish setting up your account."),
];

const DE: &[Entry] = &[
    ("auth", "login", "title", "Anmelden"),
    ("auth", "login", "email", "E-Mail"),
    ("auth", "login", "password", "Passwort"),
    ("auth", "login", "placeholder", "du@beispiel.de"),
    ("auth", "login", "cta", "Anmelden"),
    ("auth", "login", "pending", "Anmeldung läuft..."),
    ("auth", "error", "email", "Bitte gib eine gültige E-Mail-Adresse ein."),
    ("auth", "error", "required", "Dieses Feld ist erforderlich."),
    ("auth", "error", "failed", "Anmeldung fehlgeschlagen. Bitte prüfe deine Angaben."),
    ("app", "landing", "title", "Du bist angemeldet."),
    ("app", "landing", "onboarding", "Willkommen! Lass uns dein Konto einrichten."),
];

fn lookup(catalog: &[Entry], namespace: &str, section: &str, key: &str) -> Option<&'static str> {
    catalog
        .iter()
        .find(|(ns, sec, k, _)| *ns == namespace && *sec == section && *k == key)
        .map(|(_, _, _, text)| *text)
}

/// Lookup handle for the active language. Cheap to copy into closures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(self) -> Language {
        self.language
    }

    pub fn t(self, namespace: &str, section: &str, key: &str) -> String {
        lookup(self.language.catalog(), namespace, section, key)
            .or_else(|| lookup(EN, namespace, section, key))
            .map_or_else(|| format!("{namespace}.{section}.{key}"), str::to_owned)
    }
}
