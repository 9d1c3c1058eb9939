use chrono::NaiveDate;

use crate::config;
use crate::i18n::Locale;

pub struct PolicySection {
    /// Fragment id, identical across locales so links survive a language switch.
    pub anchor: &'static str,
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub bullets: &'static [&'static str],
}

pub struct PrivacyPolicy {
    pub title: &'static str,
    pub intro: &'static str,
    pub sections: &'static [PolicySection],
    pub contact_heading: &'static str,
    pub contact_lines: &'static [&'static str],
}

pub fn last_updated() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap_or(NaiveDate::MIN)
}

pub fn policy(locale: Locale) -> &'static PrivacyPolicy {
    match locale {
        Locale::En => &EN,
        Locale::De => &DE,
    }
}

pub fn privacy_mailto() -> String {
    format!("mailto:{}", config::PRIVACY_EMAIL)
}

static EN: PrivacyPolicy = PrivacyPolicy {
    title: "Privacy Policy",
    intro: "This policy explains which personal data Aurelia Clinic processes when you visit this website, contact us or become a patient, why we do so, and which rights you have. We process health data only where it is needed for your treatment and always under medical confidentiality.",
    sections: &[
        PolicySection {
            anchor: "controller",
            heading: "Who is responsible",
            paragraphs: &[
                "Aurelia Clinic GmbH, Linienstraße 140, 10115 Berlin, is the controller for all processing described here. Our data protection officer can be reached at the address below or by email.",
            ],
            bullets: &[],
        },
        PolicySection {
            anchor: "website",
            heading: "Visiting this website",
            paragraphs: &[
                "When you open a page, our hosting provider processes technical data your browser sends automatically. We use it only to deliver the site and keep it secure, and delete server logs after 14 days.",
                "Animation libraries are loaded from a public content delivery network when a page needs them. Your IP address is transmitted to that network for this purpose.",
            ],
            bullets: &[
                "IP address and time of the request",
                "Requested page and referring page",
                "Browser type, operating system and language",
            ],
        },
        PolicySection {
            anchor: "contact",
            heading: "Consultation requests",
            paragraphs: &[
                "If you ask for a consultation by phone, email or form, we process your name, contact details and the information you choose to share to answer you and schedule an appointment. Requests that do not lead to a treatment are deleted after six months.",
            ],
            bullets: &[],
        },
        PolicySection {
            anchor: "patients",
            heading: "Patient records",
            paragraphs: &[
                "For patients we keep a medical record containing medical history, findings, treatment plans, photographs taken with your consent and invoices. Processing is based on the treatment contract and on Art. 9(2)(h) GDPR.",
                "Medical records are kept for ten years after the last treatment as required by professional law, then deleted.",
            ],
            bullets: &[
                "Before-and-after photographs are stored separately and never published without separate written consent.",
                "Laboratories and billing services receive only the data they need and are bound by confidentiality.",
            ],
        },
        PolicySection {
            anchor: "storage",
            heading: "Cookies and local storage",
            paragraphs: &[
                "This website sets no tracking cookies. It stores your language choice in your browser's local storage so the site opens in the same language next time. You can remove it at any time in your browser settings.",
            ],
            bullets: &[],
        },
        PolicySection {
            anchor: "rights",
            heading: "Your rights",
            paragraphs: &[
                "You can exercise the following rights at any time by contacting us. You may also lodge a complaint with a supervisory authority, in Berlin the Berliner Beauftragte für Datenschutz und Informationsfreiheit.",
            ],
            bullets: &[
                "Access to the data we hold about you",
                "Correction of inaccurate data",
                "Erasure, where no retention duty applies",
                "Restriction of processing and objection",
                "Data portability",
                "Withdrawal of consent with effect for the future",
            ],
        },
        PolicySection {
            anchor: "changes",
            heading: "Changes to this policy",
            paragraphs: &[
                "We update this policy when our services or the law change. The date at the top shows the current version.",
            ],
            bullets: &[],
        },
    ],
    contact_heading: "Contact",
    contact_lines: &[
        "Aurelia Clinic GmbH, Data Protection Officer",
        "Linienstraße 140, 10115 Berlin",
        "privacy@aurelia-clinic.com",
    ],
};

static DE: PrivacyPolicy = PrivacyPolicy {
    title: "Datenschutzerklärung",
    intro: "Diese Erklärung beschreibt, welche personenbezogenen Daten die Aurelia Clinic verarbeitet, wenn Sie diese Website besuchen, uns kontaktieren oder Patientin bzw. Patient werden, zu welchem Zweck dies geschieht und welche Rechte Sie haben. Gesundheitsdaten verarbeiten wir nur, soweit sie für Ihre Behandlung erforderlich sind, und stets unter ärztlicher Schweigepflicht.",
    sections: &[
        PolicySection {
            anchor: "controller",
            heading: "Verantwortliche Stelle",
            paragraphs: &[
                "Verantwortlich für alle hier beschriebenen Verarbeitungen ist die Aurelia Clinic GmbH, Linienstraße 140, 10115 Berlin. Unsere Datenschutzbeauftragte erreichen Sie unter der unten genannten Anschrift oder per E-Mail.",
            ],
            bullets: &[],
        },
        PolicySection {
            anchor: "website",
            heading: "Besuch dieser Website",
            paragraphs: &[
                "Beim Aufruf einer Seite verarbeitet unser Hosting-Anbieter technische Daten, die Ihr Browser automatisch übermittelt. Wir nutzen sie ausschließlich zur Auslieferung und Absicherung der Website und löschen Server-Logs nach 14 Tagen.",
                "Animationsbibliotheken werden bei Bedarf von einem öffentlichen Content-Delivery-Network geladen. Dabei wird Ihre IP-Adresse an dieses Netzwerk übermittelt.",
            ],
            bullets: &[
                "IP-Adresse und Zeitpunkt des Abrufs",
                "Aufgerufene Seite und verweisende Seite",
                "Browsertyp, Betriebssystem und Sprache",
            ],
        },
        PolicySection {
            anchor: "contact",
            heading: "Beratungsanfragen",
            paragraphs: &[
                "Wenn Sie telefonisch, per E-Mail oder Formular eine Beratung anfragen, verarbeiten wir Ihren Namen, Ihre Kontaktdaten und die Angaben, die Sie uns mitteilen, um Ihnen zu antworten und einen Termin zu vereinbaren. Anfragen, aus denen keine Behandlung entsteht, löschen wir nach sechs Monaten.",
            ],
            bullets: &[],
        },
        PolicySection {
            anchor: "patients",
            heading: "Patientenakte",
            paragraphs: &[
                "Für Patientinnen und Patienten führen wir eine Behandlungsakte mit Anamnese, Befunden, Behandlungsplänen, mit Ihrer Einwilligung angefertigten Fotografien und Rechnungen. Rechtsgrundlage sind der Behandlungsvertrag und Art. 9 Abs. 2 lit. h DSGVO.",
                "Behandlungsakten bewahren wir gemäß Berufsrecht zehn Jahre nach der letzten Behandlung auf und löschen sie anschließend.",
            ],
            bullets: &[
                "Vorher-Nachher-Fotografien werden getrennt gespeichert und niemals ohne gesonderte schriftliche Einwilligung veröffentlicht.",
                "Labore und Abrechnungsdienstleister erhalten nur die erforderlichen Daten und sind zur Verschwiegenheit verpflichtet.",
            ],
        },
        PolicySection {
            anchor: "storage",
            heading: "Cookies und lokaler Speicher",
            paragraphs: &[
                "Diese Website setzt keine Tracking-Cookies. Sie speichert Ihre Sprachauswahl im lokalen Speicher Ihres Browsers, damit die Seite beim nächsten Besuch in derselben Sprache öffnet. Sie können diesen Eintrag jederzeit in Ihren Browsereinstellungen löschen.",
            ],
            bullets: &[],
        },
        PolicySection {
            anchor: "rights",
            heading: "Ihre Rechte",
            paragraphs: &[
                "Die folgenden Rechte können Sie jederzeit uns gegenüber geltend machen. Außerdem können Sie sich bei einer Aufsichtsbehörde beschweren, in Berlin bei der Berliner Beauftragten für Datenschutz und Informationsfreiheit.",
            ],
            bullets: &[
                "Auskunft über die zu Ihrer Person gespeicherten Daten",
                "Berichtigung unrichtiger Daten",
                "Löschung, soweit keine Aufbewahrungspflicht besteht",
                "Einschränkung der Verarbeitung und Widerspruch",
                "Datenübertragbarkeit",
                "Widerruf einer Einwilligung mit Wirkung für die Zukunft",
            ],
        },
        PolicySection {
            anchor: "changes",
            heading: "Änderungen dieser Erklärung",
            paragraphs: &[
                "Wir passen diese Erklärung an, wenn sich unsere Leistungen oder die Rechtslage ändern. Das Datum oben zeigt die aktuelle Fassung.",
            ],
            bullets: &[],
        },
    ],
    contact_heading: "Kontakt",
    contact_lines: &[
        "Aurelia Clinic GmbH, Datenschutzbeauftragte",
        "Linienstraße 140, 10115 Berlin",
        "privacy@aurelia-clinic.com",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn anchors(locale: Locale) -> Vec<&'static str> {
        policy(locale).sections.iter().map(|s| s.anchor).collect()
    }

    #[test]
    fn every_locale_has_the_same_sections_in_order() {
        let reference = anchors(Locale::En);
        for locale in Locale::ALL {
            assert_eq!(anchors(locale), reference, "{:?}", locale);
        }
    }

    #[test]
    fn anchors_are_unique() {
        let all = anchors(Locale::En);
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn sections_have_text() {
        for locale in Locale::ALL {
            let policy = policy(locale);
            assert!(!policy.title.is_empty());
            for section in policy.sections {
                assert!(!section.heading.is_empty());
                assert!(!section.paragraphs.is_empty(), "{} has no text", section.anchor);
            }
            assert!(policy
                .contact_lines
                .iter()
                .any(|line| line.contains(config::PRIVACY_EMAIL)));
        }
    }
}
