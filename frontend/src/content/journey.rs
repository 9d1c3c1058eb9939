use crate::i18n::Localized;

pub struct JourneyStep {
    pub title: Localized,
    pub body: Localized,
}

pub const JOURNEY: &[JourneyStep] = &[
    JourneyStep {
        title: Localized::new("Consultation", "Erstgespräch"),
        body: Localized::new(
            "Forty-five minutes with a physician: your history, your goals and an honest view of what is realistic.",
            "45 Minuten mit einer Ärztin oder einem Arzt: Ihre Vorgeschichte, Ihre Ziele und eine ehrliche Einschätzung des Machbaren.",
        ),
    },
    JourneyStep {
        title: Localized::new("Your plan", "Ihr Plan"),
        body: Localized::new(
            "A written treatment plan with options, sessions and costs. No decision on the day.",
            "Ein schriftlicher Behandlungsplan mit Optionen, Sitzungen und Kosten. Keine Entscheidung am selben Tag.",
        ),
    },
    JourneyStep {
        title: Localized::new("Treatment", "Behandlung"),
        body: Localized::new(
            "Performed by the physician who planned it, in a private treatment room.",
            "Durchgeführt von der Ärztin oder dem Arzt, die bzw. der sie geplant hat, in einem privaten Behandlungsraum.",
        ),
    },
    JourneyStep {
        title: Localized::new("Aftercare", "Nachsorge"),
        body: Localized::new(
            "A follow-up visit after two weeks and a direct line for questions in between.",
            "Ein Kontrolltermin nach zwei Wochen und eine direkte Nummer für Fragen dazwischen.",
        ),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn every_step_is_translated() {
        for step in JOURNEY {
            for locale in Locale::ALL {
                assert!(!step.title.get(locale).is_empty());
                assert!(!step.body.get(locale).is_empty());
            }
        }
    }
}
