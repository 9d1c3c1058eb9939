use crate::i18n::Localized;

pub struct Department {
    pub slug: &'static str,
    pub image: &'static str,
    pub name: Localized,
    pub summary: Localized,
    pub services: &'static [Localized],
}

pub const DEPARTMENTS: &[Department] = &[
    Department {
        slug: "dermatology",
        image: "/assets/departments/dermatology.jpg",
        name: Localized::new("Medical Dermatology", "Medizinische Dermatologie"),
        summary: Localized::new(
            "Diagnosis and treatment of acne, rosacea, pigmentation and skin cancer screening.",
            "Diagnostik und Therapie von Akne, Rosazea, Pigmentstörungen sowie Hautkrebsvorsorge.",
        ),
        services: &[
            Localized::new("Full-body skin cancer screening", "Ganzkörper-Hautkrebsscreening"),
            Localized::new("Acne and rosacea therapy", "Akne- und Rosazea-Therapie"),
            Localized::new("Mole removal", "Muttermalentfernung"),
        ],
    },
    Department {
        slug: "injectables",
        image: "/assets/departments/injectables.jpg",
        name: Localized::new("Injectables", "Injektionsbehandlungen"),
        summary: Localized::new(
            "Conservative wrinkle relaxing and volume restoration, planned in millimetres.",
            "Zurückhaltende Faltenbehandlung und Volumenaufbau, millimetergenau geplant.",
        ),
        services: &[
            Localized::new("Botulinum toxin", "Botulinumtoxin"),
            Localized::new("Hyaluronic acid fillers", "Hyaluronsäure-Filler"),
            Localized::new("Skin boosters", "Skinbooster"),
        ],
    },
    Department {
        slug: "laser",
        image: "/assets/departments/laser.jpg",
        name: Localized::new("Laser & Light", "Laser & Licht"),
        summary: Localized::new(
            "Resurfacing, vascular and pigment lasers for texture, redness and sun damage.",
            "Resurfacing-, Gefäß- und Pigmentlaser bei unruhiger Haut, Rötungen und Lichtschäden.",
        ),
        services: &[
            Localized::new("Fractional resurfacing", "Fraktionierte Laserbehandlung"),
            Localized::new("Vascular laser", "Gefäßlaser"),
            Localized::new("Laser hair removal", "Laser-Haarentfernung"),
        ],
    },
    Department {
        slug: "regenerative",
        image: "/assets/departments/regenerative.jpg",
        name: Localized::new("Regenerative Medicine", "Regenerative Medizin"),
        summary: Localized::new(
            "Treatments that use your body's own repair mechanisms for skin and hair.",
            "Behandlungen, die die körpereigene Regeneration von Haut und Haar nutzen.",
        ),
        services: &[
            Localized::new("Platelet-rich plasma", "Eigenbluttherapie (PRP)"),
            Localized::new("Microneedling", "Microneedling"),
            Localized::new("Hair loss consultation", "Haarsprechstunde"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = DEPARTMENTS.iter().map(|d| d.slug).collect();
        assert_eq!(slugs.len(), DEPARTMENTS.len());
    }

    #[test]
    fn no_department_text_is_missing() {
        for department in DEPARTMENTS {
            assert!(!department.services.is_empty(), "{}", department.slug);
            for locale in Locale::ALL {
                assert!(!department.name.get(locale).is_empty());
                assert!(!department.summary.get(locale).is_empty());
                for service in department.services {
                    assert!(!service.get(locale).is_empty(), "{}", department.slug);
                }
            }
        }
    }
}
