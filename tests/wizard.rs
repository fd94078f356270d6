//! End-to-end checks of the wizard state machine and evidence handling.

use cvwallet::attestation::{Attestation, Skill};
use cvwallet::error::OracleError;
use cvwallet::evidence::EvidenceSource;
use cvwallet::ui::state::{
    AppState, Screen, Transition, WizardAction, WizardState, WizardStep, transition,
};

fn sample_attestation() -> Attestation {
    Attestation {
        summary: "Strong backend generalist with solid testing habits.".to_string(),
        skills: vec![
            Skill {
                skill: "Golang Microservices".to_string(),
                score: 92,
                evidence: "Several services with clear domain separation.".to_string(),
            },
            Skill {
                skill: "Test Coverage".to_string(),
                score: 78,
                evidence: "Consistently above 75% in Go projects.".to_string(),
            },
        ],
    }
}

fn wizard_at_consent() -> WizardState {
    let mut wizard = WizardState::new();
    assert!(wizard.apply(WizardAction::Start).is_some());
    for ch in "https://github.com/user/repo".chars() {
        wizard.repo_url.insert(ch);
    }
    assert!(wizard.apply(WizardAction::Continue).is_some());
    assert_eq!(wizard.step, WizardStep::Consent);
    wizard
}

// ── Transition table ────────────────────────────────────────────────────────

const ALL_ACTIONS: [WizardAction; 7] = [
    WizardAction::Start,
    WizardAction::Continue,
    WizardAction::Back,
    WizardAction::ConsentAnalyze,
    WizardAction::AnalysisSucceeded,
    WizardAction::AnalysisFailed,
    WizardAction::Finalize,
];

#[test]
fn continue_requires_nonempty_evidence() {
    assert_eq!(
        transition(WizardStep::Connect, WizardAction::Continue, false),
        None
    );
    assert_eq!(
        transition(WizardStep::Connect, WizardAction::Continue, true),
        Some(Transition::To(WizardStep::Consent))
    );
}

#[test]
fn backward_edges_are_exactly_back_and_failure() {
    let mut backward = Vec::new();
    for step in WizardStep::ALL {
        for action in ALL_ACTIONS {
            if let Some(Transition::To(next)) = transition(step, action, true) {
                if next.index() < step.index() {
                    backward.push((step, action, next));
                }
            }
        }
    }
    assert_eq!(
        backward,
        [
            (WizardStep::Consent, WizardAction::Back, WizardStep::Connect),
            (
                WizardStep::Processing,
                WizardAction::AnalysisFailed,
                WizardStep::Consent
            ),
        ]
    );
}

#[test]
fn processing_is_never_a_user_reachable_target() {
    for step in WizardStep::ALL {
        for action in ALL_ACTIONS {
            if let Some(Transition::To(WizardStep::Processing)) = transition(step, action, true) {
                assert_eq!(step, WizardStep::Consent);
                assert_eq!(action, WizardAction::ConsentAnalyze);
            }
        }
    }
}

#[test]
fn table_rejects_every_unlisted_pair() {
    let allowed = [
        (WizardStep::Welcome, WizardAction::Start),
        (WizardStep::Connect, WizardAction::Continue),
        (WizardStep::Consent, WizardAction::Back),
        (WizardStep::Consent, WizardAction::ConsentAnalyze),
        (WizardStep::Processing, WizardAction::AnalysisSucceeded),
        (WizardStep::Processing, WizardAction::AnalysisFailed),
        (WizardStep::Review, WizardAction::Finalize),
    ];
    for step in WizardStep::ALL {
        for action in ALL_ACTIONS {
            let accepted = transition(step, action, true).is_some();
            assert_eq!(
                accepted,
                allowed.contains(&(step, action)),
                "table disagreement at {step:?} × {action:?}"
            );
        }
    }
}

#[test]
fn finalize_is_terminal_not_a_step() {
    assert_eq!(
        transition(WizardStep::Review, WizardAction::Finalize, true),
        Some(Transition::Finish)
    );
}

// ── Wizard runs ─────────────────────────────────────────────────────────────

#[test]
fn failed_analysis_returns_to_consent_with_error() {
    let mut wizard = wizard_at_consent();
    assert!(wizard.apply(WizardAction::ConsentAnalyze).is_some());
    assert_eq!(wizard.step, WizardStep::Processing);
    assert!(wizard.analysis_requested);

    let evidence_before = wizard.evidence();
    wizard.resolve_analysis(Err(OracleError::MissingCredential));

    assert_eq!(wizard.step, WizardStep::Consent);
    assert!(!wizard.error.as_deref().unwrap_or("").is_empty());
    assert!(wizard.attestation.is_none());
    assert_eq!(wizard.evidence(), evidence_before, "evidence must survive failure");
}

#[test]
fn failed_analysis_never_mutates_a_stored_attestation() {
    let mut wizard = wizard_at_consent();
    wizard.attestation = Some(sample_attestation());
    assert!(wizard.apply(WizardAction::ConsentAnalyze).is_some());
    wizard.resolve_analysis(Err(OracleError::Malformed("not json".into())));
    assert_eq!(wizard.attestation, Some(sample_attestation()));
}

#[test]
fn successful_analysis_stores_attestation_and_advances() {
    let mut wizard = wizard_at_consent();
    assert!(wizard.apply(WizardAction::ConsentAnalyze).is_some());
    wizard.resolve_analysis(Ok(sample_attestation()));

    assert_eq!(wizard.step, WizardStep::Review);
    assert!(wizard.error.is_none());
    let skills = &wizard.attestation.as_ref().unwrap().skills;
    assert_eq!(skills.len(), 2, "one bar per skill, in returned order");
    assert_eq!(skills[0].skill, "Golang Microservices");
    assert_eq!(skills[1].skill, "Test Coverage");
}

#[test]
fn retry_after_failure_is_allowed() {
    let mut wizard = wizard_at_consent();
    assert!(wizard.apply(WizardAction::ConsentAnalyze).is_some());
    wizard.resolve_analysis(Err(OracleError::MissingCredential));
    assert_eq!(wizard.step, WizardStep::Consent);

    assert!(wizard.apply(WizardAction::ConsentAnalyze).is_some());
    assert_eq!(wizard.step, WizardStep::Processing);
    assert!(wizard.error.is_none(), "starting a new attempt clears the error");
    wizard.resolve_analysis(Ok(sample_attestation()));
    assert_eq!(wizard.step, WizardStep::Review);
}

// ── Host handoff ────────────────────────────────────────────────────────────

#[test]
fn finalize_hands_exact_attestation_to_host_and_resets() {
    let mut app = AppState::new();
    app.open_wizard();
    {
        let wizard = app.wizard.as_mut().unwrap();
        *wizard = wizard_at_consent();
        assert!(wizard.apply(WizardAction::ConsentAnalyze).is_some());
        wizard.resolve_analysis(Ok(sample_attestation()));
        assert_eq!(wizard.apply(WizardAction::Finalize), Some(Transition::Finish));
    }
    app.complete_wizard();

    assert_eq!(app.screen, Screen::Host);
    assert!(app.wizard.is_none());
    assert_eq!(app.attestation_result, Some(sample_attestation()));

    // Reopening starts from scratch; the host keeps its last result.
    app.open_wizard();
    let wizard = app.wizard.as_ref().unwrap();
    assert_eq!(wizard.step, WizardStep::Welcome);
    assert!(wizard.evidence().is_empty());
    assert!(wizard.error.is_none());
    assert!(wizard.attestation.is_none());
    assert_eq!(app.attestation_result, Some(sample_attestation()));
}

#[test]
fn closing_discards_wizard_state_without_handoff() {
    let mut app = AppState::new();
    app.open_wizard();
    {
        let wizard = app.wizard.as_mut().unwrap();
        *wizard = wizard_at_consent();
        assert!(wizard.apply(WizardAction::ConsentAnalyze).is_some());
        wizard.resolve_analysis(Ok(sample_attestation()));
    }
    app.close_wizard();
    assert!(app.attestation_result.is_none());
    assert!(app.wizard.is_none());
}

// ── Evidence form behavior ──────────────────────────────────────────────────

#[test]
fn wizard_evidence_recomputes_from_form_state() {
    let mut wizard = WizardState::new();
    for ch in "  https://github.com/u/r  ".chars() {
        wizard.repo_url.insert(ch);
    }
    wizard.files.push("cv.pdf".to_string());
    wizard.files.push("review.txt".to_string());

    assert_eq!(
        wizard.evidence(),
        vec![
            EvidenceSource::repository("https://github.com/u/r"),
            EvidenceSource::file("cv.pdf"),
            EvidenceSource::file("review.txt"),
        ]
    );
}

#[test]
fn removing_selected_file_removes_one_matching_entry() {
    let mut wizard = WizardState::new();
    wizard.files.push("dup.txt".to_string());
    wizard.files.push("keep.txt".to_string());
    wizard.files.push("dup.txt".to_string());
    wizard.files.selected = 2;

    wizard.remove_selected_file();
    assert_eq!(wizard.files.items, ["keep.txt", "dup.txt"]);
    assert!(wizard.files.selected < wizard.files.items.len());
}
