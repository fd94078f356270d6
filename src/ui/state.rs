use std::sync::mpsc::Receiver;

use crate::attestation::Attestation;
use crate::error::OracleError;
use crate::evidence::{self, EvidenceSource};

use super::widgets::{SelectList, TextInput};

/// The one user-facing failure message; the structured cause goes to the log.
pub const ANALYSIS_ERROR_MSG: &str = "An error occurred during analysis. Please try again.";

/// Which screen owns the terminal: the job-posting host page, or the wizard
/// popup it launches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Host,
    Wizard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Welcome,
    Connect,
    Consent,
    Processing,
    Review,
}

impl WizardStep {
    pub const ALL: [Self; 5] = [
        Self::Welcome,
        Self::Connect,
        Self::Consent,
        Self::Processing,
        Self::Review,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Welcome => "Apply with CVWallet",
            Self::Connect => "Connect Your Evidence",
            Self::Consent => "Review and Consent",
            Self::Processing => "Processing Securely",
            Self::Review => "Attestation Generated",
        }
    }
}

/// Everything that can drive the wizard forward (or, once, backward).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardAction {
    Start,
    Continue,
    Back,
    ConsentAnalyze,
    AnalysisSucceeded,
    AnalysisFailed,
    Finalize,
}

/// Result of applying an action: move to another step, or complete the
/// wizard (hand the attestation to the host and close).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    To(WizardStep),
    Finish,
}

/// The transition table. Steps advance only through the fixed linear order;
/// the single backward edge is Consent→Connect; Connect→Consent is guarded
/// on a non-empty evidence list; Processing is entered only by initiating
/// analysis and left only by its two outcomes. Every other pair is rejected.
pub fn transition(
    step: WizardStep,
    action: WizardAction,
    has_evidence: bool,
) -> Option<Transition> {
    use Transition::{Finish, To};
    use WizardAction as A;
    use WizardStep as S;

    match (step, action) {
        (S::Welcome, A::Start) => Some(To(S::Connect)),
        (S::Connect, A::Continue) if has_evidence => Some(To(S::Consent)),
        (S::Consent, A::Back) => Some(To(S::Connect)),
        (S::Consent, A::ConsentAnalyze) => Some(To(S::Processing)),
        (S::Processing, A::AnalysisSucceeded) => Some(To(S::Review)),
        (S::Processing, A::AnalysisFailed) => Some(To(S::Consent)),
        (S::Review, A::Finalize) => Some(Finish),
        _ => None,
    }
}

/// Focused control on the Connect step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectField {
    RepoUrl,
    FileEntry,
    FileList,
}

/// State of one wizard run. Created fresh when the host opens the wizard,
/// dropped whole when it closes; nothing survives a reopen.
pub struct WizardState {
    pub step: WizardStep,

    // ── Connect form ──
    pub repo_url: TextInput,
    pub file_entry: TextInput,
    pub files: SelectList,
    pub connect_field: ConnectField,
    /// Inline guard notice shown when Continue is blocked.
    pub notice: Option<String>,

    // ── Analysis ──
    pub error: Option<String>,
    pub attestation: Option<Attestation>,
    /// Set by the Consent handler, consumed by the event loop to spawn the
    /// one in-flight oracle call.
    pub analysis_requested: bool,
    pub pending: Option<Receiver<Result<Attestation, OracleError>>>,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Welcome,
            repo_url: TextInput::new(""),
            file_entry: TextInput::new(""),
            files: SelectList::new(Vec::new()),
            connect_field: ConnectField::RepoUrl,
            notice: None,
            error: None,
            attestation: None,
            analysis_requested: false,
            pending: None,
        }
    }

    /// The full evidence list, recomputed from current form state.
    pub fn evidence(&self) -> Vec<EvidenceSource> {
        evidence::collect_evidence(&self.repo_url.value, &self.files.items)
    }

    pub fn has_evidence(&self) -> bool {
        !self.repo_url.is_empty() || !self.files.is_empty()
    }

    /// Apply a user action through the transition table. Returns the
    /// transition when the table accepts it; rejected actions leave the
    /// state untouched.
    pub fn apply(&mut self, action: WizardAction) -> Option<Transition> {
        let accepted = transition(self.step, action, self.has_evidence())?;
        match accepted {
            Transition::To(next) => {
                if action == WizardAction::ConsentAnalyze {
                    self.error = None;
                    self.analysis_requested = true;
                }
                self.step = next;
            }
            Transition::Finish => {}
        }
        Some(accepted)
    }

    /// Resolve the outstanding analysis. Success stores the attestation and
    /// advances to Review; failure sets the generic error, returns to
    /// Consent, and leaves any stored attestation untouched.
    pub fn resolve_analysis(&mut self, result: Result<Attestation, OracleError>) {
        match result {
            Ok(attestation) => {
                if let Some(Transition::To(next)) =
                    transition(self.step, WizardAction::AnalysisSucceeded, true)
                {
                    self.attestation = Some(attestation);
                    self.error = None;
                    self.step = next;
                }
            }
            Err(_) => {
                if let Some(Transition::To(next)) =
                    transition(self.step, WizardAction::AnalysisFailed, true)
                {
                    self.error = Some(ANALYSIS_ERROR_MSG.to_string());
                    self.step = next;
                }
            }
        }
    }

    /// Remove the file under the cursor, by name: the first entry matching
    /// that name goes, never more than one.
    pub fn remove_selected_file(&mut self) {
        if let Some(name) = self.files.selected_value().map(String::from) {
            evidence::remove_file(&mut self.files.items, &name);
            self.files.clamp_selection();
            if self.files.is_empty() {
                self.connect_field = ConnectField::FileEntry;
            }
        }
    }
}

/// Top-level application state: the host page plus an optional wizard run.
pub struct AppState {
    pub screen: Screen,
    pub wizard: Option<WizardState>,
    /// The host page's last completed attestation; survives wizard reopens.
    pub attestation_result: Option<Attestation>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Host,
            wizard: None,
            attestation_result: None,
            should_quit: false,
        }
    }

    /// Launch the wizard with fresh state. The host's last-known
    /// attestation stays on display until a new run replaces it.
    pub fn open_wizard(&mut self) {
        self.wizard = Some(WizardState::new());
        self.screen = Screen::Wizard;
    }

    /// Close the wizard, discarding its state. Any in-flight request keeps
    /// running; its result is dropped with the channel.
    pub fn close_wizard(&mut self) {
        self.wizard = None;
        self.screen = Screen::Host;
    }

    /// Finalize: hand the stored attestation to the host page and close.
    pub fn complete_wizard(&mut self) {
        if let Some(attestation) = self.wizard.as_ref().and_then(|w| w.attestation.clone()) {
            self.attestation_result = Some(attestation);
        }
        self.close_wizard();
    }
}
