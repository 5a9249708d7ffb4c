//! Preference collection as an explicit state machine.
//!
//! Each step owns an immutable [`PreferenceDraft`]; every event consumes the
//! questionnaire and yields the next one. Only `Submitted` carries validated
//! [`UserPreferences`], so nothing half-collected can reach the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::comparison::format_usd;
use super::domain::VehicleCategory;
use super::preferences::{
    BudgetRange, FuelPreference, MaintenancePriority, PreferencesError, UsageIntent,
    UserPreferences,
};

/// Slider domain offered on the budget step.
pub const BUDGET_FLOOR: u32 = 20_000;
pub const BUDGET_CEILING: u32 = 250_000;
pub const BUDGET_STEP: u32 = 5_000;
pub const DEFAULT_BUDGET: (u32, u32) = (30_000, 150_000);

/// Number of interactive steps shown in the progress indicator.
pub const TOTAL_STEPS: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionnaireStep {
    CollectingBudget,
    CollectingUsage,
    CollectingFinal,
    Submitted,
}

impl QuestionnaireStep {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::CollectingBudget,
            Self::CollectingUsage,
            Self::CollectingFinal,
            Self::Submitted,
        ]
    }

    /// 1-based position in the progress indicator; `None` once submitted.
    pub const fn number(self) -> Option<u8> {
        match self {
            Self::CollectingBudget => Some(1),
            Self::CollectingUsage => Some(2),
            Self::CollectingFinal => Some(3),
            Self::Submitted => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CollectingBudget => "Budget & Type",
            Self::CollectingUsage => "Usage & Fuel",
            Self::CollectingFinal => "Preferences",
            Self::Submitted => "Submitted",
        }
    }

    pub fn can_transition_to(self, target: Self) -> bool {
        self.valid_transitions().contains(&target)
    }

    /// Forward, backward, and restart edges. Restarting always lands on the budget step.
    pub fn valid_transitions(self) -> Vec<Self> {
        match self {
            Self::CollectingBudget => vec![Self::CollectingUsage, Self::CollectingBudget],
            Self::CollectingUsage => vec![Self::CollectingFinal, Self::CollectingBudget],
            Self::CollectingFinal => vec![
                Self::Submitted,
                Self::CollectingUsage,
                Self::CollectingBudget,
            ],
            Self::Submitted => vec![Self::CollectingFinal, Self::CollectingBudget],
        }
    }
}

impl fmt::Display for QuestionnaireStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Answers gathered so far. Selection order is kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferenceDraft {
    pub budget_min: u32,
    pub budget_max: u32,
    pub car_types: Vec<VehicleCategory>,
    pub usage: Vec<UsageIntent>,
    pub fuel_preference: FuelPreference,
    pub maintenance_priority: MaintenancePriority,
}

impl Default for PreferenceDraft {
    fn default() -> Self {
        Self {
            budget_min: DEFAULT_BUDGET.0,
            budget_max: DEFAULT_BUDGET.1,
            car_types: Vec::new(),
            usage: Vec::new(),
            fuel_preference: FuelPreference::Any,
            maintenance_priority: MaintenancePriority::Balanced,
        }
    }
}

impl From<&UserPreferences> for PreferenceDraft {
    fn from(preferences: &UserPreferences) -> Self {
        let budget = preferences.budget();
        Self {
            budget_min: budget.min(),
            budget_max: budget.max(),
            car_types: preferences.car_types().iter().copied().collect(),
            usage: preferences.usage().iter().copied().collect(),
            fuel_preference: preferences.fuel_preference(),
            maintenance_priority: preferences.maintenance_priority(),
        }
    }
}

impl PreferenceDraft {
    fn with_budget(self, min: u32, max: u32) -> Result<Self, QuestionnaireError> {
        for value in [min, max] {
            if !(BUDGET_FLOOR..=BUDGET_CEILING).contains(&value) {
                return Err(QuestionnaireError::BudgetOutOfRange { value });
            }
            if value % BUDGET_STEP != 0 {
                return Err(QuestionnaireError::BudgetMisaligned { value });
            }
        }
        BudgetRange::new(min, max)?;

        Ok(Self {
            budget_min: min,
            budget_max: max,
            ..self
        })
    }

    fn toggle_car_type(mut self, category: VehicleCategory) -> Self {
        toggle(&mut self.car_types, category);
        self
    }

    fn toggle_usage(mut self, usage: UsageIntent) -> Self {
        toggle(&mut self.usage, usage);
        self
    }

    fn finalize(&self) -> Result<UserPreferences, QuestionnaireError> {
        let budget = BudgetRange::new(self.budget_min, self.budget_max)?;
        Ok(UserPreferences::new(
            budget,
            self.car_types.iter().copied(),
            self.usage.iter().copied(),
            self.fuel_preference,
            self.maintenance_priority,
        ))
    }

    /// Human-readable recap shown before submission.
    pub fn summary(&self) -> DraftSummary {
        DraftSummary {
            budget: format!(
                "{} - {}",
                format_usd(self.budget_min),
                format_usd(self.budget_max)
            ),
            types: join_or_any(self.car_types.iter().map(|category| category.as_str())),
            usage: join_or_any(self.usage.iter().map(|usage| usage.as_str())),
            fuel: self.fuel_preference.label().to_string(),
            maintenance: self.maintenance_priority.label().to_string(),
        }
    }
}

fn toggle<T: PartialEq>(selection: &mut Vec<T>, value: T) {
    if let Some(index) = selection.iter().position(|existing| *existing == value) {
        selection.remove(index);
    } else {
        selection.push(value);
    }
}

fn join_or_any<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let joined = values.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "Any".to_string()
    } else {
        joined
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftSummary {
    pub budget: String,
    pub types: String,
    pub usage: String,
    pub fuel: String,
    pub maintenance: String,
}

/// User interactions driving the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum QuestionnaireEvent {
    SetBudget { min: u32, max: u32 },
    ToggleCarType { car_type: VehicleCategory },
    ToggleUsage { usage: UsageIntent },
    SetFuel { fuel: FuelPreference },
    SetMaintenance { priority: MaintenancePriority },
    Continue,
    Back,
    Submit,
    StartOver,
}

impl QuestionnaireEvent {
    /// Step on which a field edit is accepted, `None` for navigation events.
    fn editing_step(self) -> Option<(QuestionnaireStep, &'static str)> {
        match self {
            Self::SetBudget { .. } => Some((QuestionnaireStep::CollectingBudget, "budget")),
            Self::ToggleCarType { .. } => Some((QuestionnaireStep::CollectingBudget, "car_type")),
            Self::ToggleUsage { .. } => Some((QuestionnaireStep::CollectingUsage, "usage")),
            Self::SetFuel { .. } => Some((QuestionnaireStep::CollectingUsage, "fuel_preference")),
            Self::SetMaintenance { .. } => Some((
                QuestionnaireStep::CollectingFinal,
                "maintenance_priority",
            )),
            Self::Continue | Self::Back | Self::Submit | Self::StartOver => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Questionnaire {
    CollectingBudget(PreferenceDraft),
    CollectingUsage(PreferenceDraft),
    CollectingFinal(PreferenceDraft),
    Submitted(UserPreferences),
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::CollectingBudget(PreferenceDraft::default())
    }
}

impl Questionnaire {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `events` in order to a fresh questionnaire.
    pub fn replay<I>(events: I) -> Result<Self, QuestionnaireError>
    where
        I: IntoIterator<Item = QuestionnaireEvent>,
    {
        events
            .into_iter()
            .try_fold(Self::new(), |questionnaire, event| questionnaire.apply(event))
    }

    pub fn step(&self) -> QuestionnaireStep {
        match self {
            Self::CollectingBudget(_) => QuestionnaireStep::CollectingBudget,
            Self::CollectingUsage(_) => QuestionnaireStep::CollectingUsage,
            Self::CollectingFinal(_) => QuestionnaireStep::CollectingFinal,
            Self::Submitted(_) => QuestionnaireStep::Submitted,
        }
    }

    pub fn draft(&self) -> Option<&PreferenceDraft> {
        match self {
            Self::CollectingBudget(draft)
            | Self::CollectingUsage(draft)
            | Self::CollectingFinal(draft) => Some(draft),
            Self::Submitted(_) => None,
        }
    }

    pub fn preferences(&self) -> Option<&UserPreferences> {
        match self {
            Self::Submitted(preferences) => Some(preferences),
            _ => None,
        }
    }

    pub fn into_preferences(self) -> Option<UserPreferences> {
        match self {
            Self::Submitted(preferences) => Some(preferences),
            _ => None,
        }
    }

    pub fn apply(self, event: QuestionnaireEvent) -> Result<Self, QuestionnaireError> {
        let step = self.step();

        if let Some((expected, field)) = event.editing_step() {
            if expected != step {
                return Err(QuestionnaireError::FieldNotOnStep { field, step });
            }
        }

        let next = match (self, event) {
            (Self::CollectingBudget(draft), QuestionnaireEvent::SetBudget { min, max }) => {
                Ok(Self::CollectingBudget(draft.with_budget(min, max)?))
            }
            (Self::CollectingBudget(draft), QuestionnaireEvent::ToggleCarType { car_type }) => {
                Ok(Self::CollectingBudget(draft.toggle_car_type(car_type)))
            }
            (Self::CollectingUsage(draft), QuestionnaireEvent::ToggleUsage { usage }) => {
                Ok(Self::CollectingUsage(draft.toggle_usage(usage)))
            }
            (Self::CollectingUsage(draft), QuestionnaireEvent::SetFuel { fuel }) => {
                Ok(Self::CollectingUsage(PreferenceDraft {
                    fuel_preference: fuel,
                    ..draft
                }))
            }
            (Self::CollectingFinal(draft), QuestionnaireEvent::SetMaintenance { priority }) => {
                Ok(Self::CollectingFinal(PreferenceDraft {
                    maintenance_priority: priority,
                    ..draft
                }))
            }
            (_, QuestionnaireEvent::StartOver) => Ok(Self::new()),
            (current, QuestionnaireEvent::Continue) => current.advance(),
            (current, QuestionnaireEvent::Back) => current.retreat(),
            (Self::CollectingFinal(draft), QuestionnaireEvent::Submit) => {
                Ok(Self::Submitted(draft.finalize()?))
            }
            (current, QuestionnaireEvent::Submit) => Err(QuestionnaireError::InvalidTransition {
                from: current.step(),
                to: QuestionnaireStep::Submitted,
            }),
            (current, event) => Err(QuestionnaireError::FieldNotOnStep {
                field: event.editing_step().map(|(_, field)| field).unwrap_or("event"),
                step: current.step(),
            }),
        }?;

        let to = next.step();
        if to != step && !step.can_transition_to(to) {
            return Err(QuestionnaireError::InvalidTransition { from: step, to });
        }
        Ok(next)
    }

    fn advance(self) -> Result<Self, QuestionnaireError> {
        match self {
            Self::CollectingBudget(draft) => Ok(Self::CollectingUsage(draft)),
            Self::CollectingUsage(draft) => Ok(Self::CollectingFinal(draft)),
            Self::CollectingFinal(_) => Err(QuestionnaireError::InvalidTransition {
                from: QuestionnaireStep::CollectingFinal,
                to: QuestionnaireStep::Submitted,
            }),
            Self::Submitted(_) => Err(QuestionnaireError::AlreadySubmitted),
        }
    }

    /// Going back from a submission reopens the last step with the submitted answers.
    fn retreat(self) -> Result<Self, QuestionnaireError> {
        match self {
            Self::CollectingBudget(_) => Err(QuestionnaireError::NoPreviousStep),
            Self::CollectingUsage(draft) => Ok(Self::CollectingBudget(draft)),
            Self::CollectingFinal(draft) => Ok(Self::CollectingUsage(draft)),
            Self::Submitted(preferences) => {
                Ok(Self::CollectingFinal(PreferenceDraft::from(&preferences)))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuestionnaireError {
    #[error("budget value {value} is outside the {}-{} range", format_usd(BUDGET_FLOOR), format_usd(BUDGET_CEILING))]
    BudgetOutOfRange { value: u32 },
    #[error("budget value {value} is not a multiple of {}", BUDGET_STEP)]
    BudgetMisaligned { value: u32 },
    #[error(transparent)]
    Preferences(#[from] PreferencesError),
    #[error("{field} cannot be changed during the '{step}' step")]
    FieldNotOnStep {
        field: &'static str,
        step: QuestionnaireStep,
    },
    #[error("cannot move from '{from}' to '{to}'")]
    InvalidTransition {
        from: QuestionnaireStep,
        to: QuestionnaireStep,
    },
    #[error("already on the first step")]
    NoPreviousStep,
    #[error("preferences were already submitted")]
    AlreadySubmitted,
}
