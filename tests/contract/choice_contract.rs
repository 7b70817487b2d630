use candlecall_core::{
    generate_round_with, verify_choice_contract, ChoiceGenerator, Difficulty, EngineError,
    SpreadChoices,
};
use fastrand::Rng;

struct GeneratorCase {
    name: &'static str,
    generator: SpreadChoices,
}

fn generator_cases() -> Vec<GeneratorCase> {
    vec![
        GeneratorCase {
            name: "default",
            generator: SpreadChoices::default(),
        },
        GeneratorCase {
            name: "wide band",
            generator: SpreadChoices {
                count: 4,
                min_offset: 0.10,
                max_offset: 0.25,
            },
        },
        GeneratorCase {
            name: "six choices",
            generator: SpreadChoices {
                count: 6,
                ..SpreadChoices::default()
            },
        },
        GeneratorCase {
            name: "binary",
            generator: SpreadChoices {
                count: 2,
                ..SpreadChoices::default()
            },
        },
    ]
}

const ANSWERS: [f64; 5] = [0.004, 1.0, 42.42, 99.995, 12_345.678_9];

#[test]
fn labels_satisfy_the_contract_for_all_generators() {
    for case in generator_cases() {
        for answer in ANSWERS {
            for seed in 0..8 {
                let labels = case.generator.choices(answer, &mut Rng::with_seed(seed));
                assert_eq!(
                    labels.len(),
                    case.generator.count,
                    "generator '{}': label count for answer {answer}",
                    case.name
                );
                verify_choice_contract(answer, &labels).unwrap_or_else(|error| {
                    panic!(
                        "generator '{}': answer {answer}, seed {seed}: {error}",
                        case.name
                    )
                });
            }
        }
    }
}

#[test]
fn labels_are_two_decimal_numeric_strings() {
    for case in generator_cases() {
        let labels = case.generator.choices(250.0, &mut Rng::with_seed(3));
        for label in &labels {
            let price: f64 = label.parse().unwrap_or_else(|_| {
                panic!("generator '{}': label '{label}' is not numeric", case.name)
            });
            assert!(
                price > 0.0,
                "generator '{}': label '{label}' must stay positive",
                case.name
            );

            let decimals = label.split('.').nth(1).unwrap_or("");
            assert_eq!(
                decimals.len(),
                2,
                "generator '{}': label '{label}' must carry two decimals",
                case.name
            );
        }
    }
}

#[test]
fn round_pipeline_rejects_contract_violations() {
    struct NoAnswer;

    impl ChoiceGenerator for NoAnswer {
        fn choices(&self, _answer: f64, _rng: &mut Rng) -> Vec<String> {
            vec!["0.10".to_owned(), "0.20".to_owned()]
        }
    }

    let error = generate_round_with(Difficulty::Easy, 1, &NoAnswer).expect_err("must fail");
    assert!(matches!(error, EngineError::ChoiceContract { .. }));
}

#[test]
fn verification_distinguishes_missing_answer_from_duplicates() {
    let missing = verify_choice_contract(5.0, &["1.00".to_owned(), "2.00".to_owned()])
        .expect_err("missing answer must fail");
    assert!(missing.to_string().contains("missing"), "got: {missing}");

    let duplicated = verify_choice_contract(5.0, &["5.00".to_owned(), "5.00".to_owned()])
        .expect_err("duplicates must fail");
    assert!(duplicated.to_string().contains("duplicate"), "got: {duplicated}");
}
