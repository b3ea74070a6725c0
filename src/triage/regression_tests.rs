//! End-to-end regression cases: realistic patient descriptions with the
//! symptoms and rule-based level they must produce.

use super::engine::{EngineOptions, TriageEngine};
use super::types::UrgencyLevel;

struct Case {
    text: &'static str,
    expected: &'static [&'static str],
    level: UrgencyLevel,
}

const CASES: &[Case] = &[
    Case {
        text: "Tengo fiebre.",
        expected: &["fiebre"],
        level: UrgencyLevel::Low,
    },
    Case {
        text: "Tengo fiebre y mareos.",
        expected: &["fiebre", "mareos"],
        level: UrgencyLevel::High,
    },
    Case {
        text: "No tengo fiebre.",
        expected: &[],
        level: UrgencyLevel::None,
    },
    Case {
        text: "No tengo fiebre pero tengo tos.",
        expected: &["tos"],
        level: UrgencyLevel::Medium,
    },
    Case {
        text: "Hola doctor, desde hace dos dias presento dolor de cabeza y fiebre. \
               Quisiera una orientacion inicial.",
        expected: &["dolor de cabeza", "fiebre"],
        level: UrgencyLevel::Low,
    },
    Case {
        text: "Tengo dolor en el pecho y me falta el aire",
        expected: &["dolor de pecho", "falta de aire"],
        level: UrgencyLevel::High,
    },
    Case {
        text: "Siento presión en el pecho y falta de aire desde la mañana",
        expected: &["presión en el pecho", "falta de aire"],
        level: UrgencyLevel::High,
    },
    Case {
        text: "Me arde al orinar y tengo dolor lumbar",
        expected: &["dolor lumbar", "ardor al orinar"],
        level: UrgencyLevel::High,
    },
    Case {
        text: "Tengo tos seca, fiebre y dificultad para respirar",
        expected: &["fiebre", "tos seca", "dificultad para respirar"],
        level: UrgencyLevel::High,
    },
    Case {
        text: "Tengo palpitaciones y me falta el aire",
        expected: &["falta de aire", "palpitaciones"],
        level: UrgencyLevel::High,
    },
    Case {
        text: "Estoy con diarrea desde ayer",
        expected: &["diarrea"],
        level: UrgencyLevel::Medium,
    },
    Case {
        text: "Tengo náuseas y vómitos",
        expected: &["náuseas", "vómitos"],
        level: UrgencyLevel::Medium,
    },
    Case {
        text: "No tengo fiebre ni tos, solo dolor de garganta",
        expected: &["dolor de garganta"],
        level: UrgencyLevel::Low,
    },
    Case {
        text: "Niego dolor de pecho, pero tengo palpitaciones",
        expected: &["palpitaciones"],
        level: UrgencyLevel::High,
    },
    Case {
        text: "Sin fiebre, aunque con mucha tos",
        expected: &["tos"],
        level: UrgencyLevel::Medium,
    },
    Case {
        text: "No solo tengo fiebre, también escalofrios",
        expected: &["fiebre", "escalofrios"],
        level: UrgencyLevel::Medium,
    },
    Case {
        text: "Me duele la rodilla cuando camino",
        expected: &["dolor de rodilla"],
        level: UrgencyLevel::Medium,
    },
    Case {
        text: "Tengo la nariz tapada y estornudos",
        expected: &["congestión nasal", "estornudos"],
        level: UrgencyLevel::Low,
    },
    Case {
        text: "me siento cansado y con sueño excesivo",
        expected: &["fatiga", "somnolencia"],
        level: UrgencyLevel::Low,
    },
    Case {
        text: "Tengo migraña y visión borrosa",
        expected: &["dolor de cabeza", "visión borrosa"],
        level: UrgencyLevel::Medium,
    },
    Case {
        text: "Ausencia de dolor abdominal",
        expected: &[],
        level: UrgencyLevel::None,
    },
    Case {
        text: "tengo sibilancias y me cuesta respirar",
        expected: &["dificultad para respirar", "sibilancias"],
        level: UrgencyLevel::High,
    },
    Case {
        text: "Tengo gripa",
        expected: &["gripe"],
        level: UrgencyLevel::Low,
    },
    Case {
        text: "Me está doliendo el hombro",
        expected: &["dolor de hombro"],
        level: UrgencyLevel::Medium,
    },
    Case {
        text: "estoy con dolor de estómago y acidez",
        expected: &["dolor de estómago", "acidez"],
        level: UrgencyLevel::Medium,
    },
    Case {
        text: "tengo manos frias y uñas quebradizas",
        expected: &["uñas quebradizas", "frio en manos y pies"],
        level: UrgencyLevel::Low,
    },
];

#[test]
fn regression_cases() {
    let engine = TriageEngine::builtin(EngineOptions::default()).unwrap();
    let mut failures = Vec::new();

    for case in CASES {
        let report = engine.analyze(case.text);
        if report.symptoms != case.expected || report.rule_based_urgency != case.level {
            failures.push(format!(
                "{:?}: expected {:?} (level {}), got {:?} (level {})",
                case.text, case.expected, case.level, report.symptoms, report.rule_based_urgency
            ));
        }
    }

    assert!(failures.is_empty(), "regressions:\n{}", failures.join("\n"));
}

#[test]
fn regression_cases_are_stable_under_renormalization() {
    let engine = TriageEngine::builtin(EngineOptions::default()).unwrap();
    for case in CASES {
        let normalized = super::normalize::normalize(case.text);
        assert_eq!(engine.extract(&normalized), engine.extract(case.text), "{}", case.text);
    }
}
