use crate::i18n::Locale;

pub struct UiStrings {
    pub nav_treatments: &'static str,
    pub nav_journey: &'static str,
    pub nav_privacy: &'static str,
    pub nav_book: &'static str,
    pub hero_kicker: &'static str,
    pub hero_title: [&'static str; 3],
    pub hero_lead: &'static str,
    pub hero_cta: &'static str,
    pub departments_title: &'static str,
    pub departments_lead: &'static str,
    pub journey_title: &'static str,
    pub booking_title: &'static str,
    pub booking_lead: &'static str,
    pub booking_button: &'static str,
    pub booking_thanks: &'static str,
    pub privacy_contents: &'static str,
    pub privacy_updated: &'static str,
    pub footer_rights: &'static str,
    pub footer_address: &'static str,
    pub not_found: &'static str,
    pub back_home: &'static str,
}

static EN: UiStrings = UiStrings {
    nav_treatments: "Treatments",
    nav_journey: "Your visit",
    nav_privacy: "Privacy",
    nav_book: "Book a consultation",
    hero_kicker: "Medical aesthetics, Berlin Mitte",
    hero_title: ["Skin.", "Science.", "Subtlety."],
    hero_lead: "Board-certified dermatologists and aesthetic physicians, one calm clinic, and treatment plans built around how you want to feel.",
    hero_cta: "Plan your first visit",
    departments_title: "Our departments",
    departments_lead: "Every treatment starts with a medical consultation and ends with a follow-up.",
    journey_title: "How a visit works",
    booking_title: "Ready when you are",
    booking_lead: "Tell us what you have in mind. A physician, not a sales team, will call you back within one working day.",
    booking_button: "Request a consultation",
    booking_thanks: "Thank you. We will be in touch within one working day.",
    privacy_contents: "Contents",
    privacy_updated: "Last updated",
    footer_rights: "All rights reserved.",
    footer_address: "Linienstraße 140, 10115 Berlin",
    not_found: "This page does not exist.",
    back_home: "Back to the start page",
};

static DE: UiStrings = UiStrings {
    nav_treatments: "Behandlungen",
    nav_journey: "Ihr Besuch",
    nav_privacy: "Datenschutz",
    nav_book: "Beratung buchen",
    hero_kicker: "Medizinische Ästhetik, Berlin Mitte",
    hero_title: ["Haut.", "Wissenschaft.", "Feingefühl."],
    hero_lead: "Fachärztinnen und Fachärzte für Dermatologie und ästhetische Medizin, eine ruhige Praxis und Behandlungspläne, die sich danach richten, wie Sie sich fühlen möchten.",
    hero_cta: "Ersten Termin planen",
    departments_title: "Unsere Fachbereiche",
    departments_lead: "Jede Behandlung beginnt mit einem ärztlichen Gespräch und endet mit einer Nachkontrolle.",
    journey_title: "So läuft Ihr Besuch ab",
    booking_title: "Wir sind bereit, wenn Sie es sind",
    booking_lead: "Erzählen Sie uns, was Sie sich vorstellen. Eine Ärztin oder ein Arzt ruft Sie innerhalb eines Werktags zurück.",
    booking_button: "Beratung anfragen",
    booking_thanks: "Vielen Dank. Wir melden uns innerhalb eines Werktags.",
    privacy_contents: "Inhalt",
    privacy_updated: "Zuletzt aktualisiert",
    footer_rights: "Alle Rechte vorbehalten.",
    footer_address: "Linienstraße 140, 10115 Berlin",
    not_found: "Diese Seite existiert nicht.",
    back_home: "Zurück zur Startseite",
};

pub fn ui(locale: Locale) -> &'static UiStrings {
    match locale {
        Locale::En => &EN,
        Locale::De => &DE,
    }
}
