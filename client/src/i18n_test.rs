use super::*;

#[test]
fn from_tag_matches_primary_subtag() {
    assert_eq!(Language::from_tag("de"), Language::De);
    assert_eq!(Language::from_tag("de-AT"), Language::De);
    assert_eq!(Language::from_tag("DE_ch"), Language::De);
    assert_eq!(Language::from_tag("en-US"), Language::En);
    assert_eq!(Language::from_tag("fr"), Language::En);
    assert_eq!(Language::from_tag(""), Language::En);
}

#[test]
fn t_reads_active_catalog() {
    let de = Translator::new(Language::De);
    assert_eq!(de.t("auth", "login", "password"), "Passwort");
    let en = Translator::new(Language::En);
    assert_eq!(en.t("auth", "login", "password"), "Password");
}

#[test]
fn t_falls_back_to_dotted_key() {
    let t = Translator::new(Language::De);
    assert_eq!(t.t("auth", "login", "nope"), "auth.login.nope");
}

#[test]
fn catalogs_cover_the_same_keys() {
    for (ns, sec, key, _) in EN {
        assert!(lookup(DE, ns, sec, key).is_some(), "missing de entry for {ns}.{sec}.{key}");
    }
    assert_eq!(EN.len(), DE.len());
}

#[test]
fn detect_defaults_to_english_off_browser() {
    #[cfg(not(feature = "hydrate"))]
    assert_eq!(Language::detect(), Language::En);
    assert_eq!(Language::En.tag(), "en");
}
